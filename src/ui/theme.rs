pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Insets, Key};

use crate::data::AppState;

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const GREY_1: Color = Color::grey8(0x1c);
pub const GREY_2: Color = Color::grey8(0x2b);
pub const GREY_3: Color = Color::grey8(0x3d);
pub const GREY_4: Color = Color::grey8(0x82);
pub const GREY_5: Color = Color::grey8(0xbd);
pub const GREY_6: Color = Color::grey8(0xf2);
pub const BLUE_LIGHT: Color = Color::rgb8(0x5c, 0xc4, 0xff);
pub const BLUE_DARK: Color = Color::rgb8(0x00, 0x8d, 0xdd);
pub const GREEN: Color = Color::rgb8(0x3d, 0xba, 0x63);
pub const ORANGE: Color = Color::rgb8(0xf5, 0x9b, 0x23);

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const UI_FONT_MONO: Key<FontDescriptor> = Key::new("app.ui-font-mono");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub const LINK_HOT_COLOR: Key<Color> = Key::new("app.link-hot-color");
pub const LINK_ACTIVE_COLOR: Key<Color> = Key::new("app.link-active-color");
pub const LINK_COLD_COLOR: Key<Color> = Key::new("app.link-cold-color");

pub const ATTENDING_COLOR: Key<Color> = Key::new("app.attending-color");

pub fn setup(env: &mut Env, _state: &AppState) {
    env.set(WINDOW_BACKGROUND_COLOR, GREY_1);
    env.set(TEXT_COLOR, GREY_6);
    env.set(PLACEHOLDER_COLOR, GREY_4);
    env.set(PRIMARY_LIGHT, BLUE_LIGHT);
    env.set(PRIMARY_DARK, BLUE_DARK);

    env.set(BACKGROUND_LIGHT, GREY_2);
    env.set(BACKGROUND_DARK, GREY_1);
    env.set(FOREGROUND_LIGHT, GREY_6);
    env.set(FOREGROUND_DARK, GREY_5);

    env.set(BUTTON_DARK, GREY_2);
    env.set(BUTTON_LIGHT, GREY_3);
    env.set(BUTTON_BORDER_RADIUS, 4.0);
    env.set(BUTTON_BORDER_WIDTH, 1.0);

    env.set(BORDER_DARK, GREY_2);
    env.set(BORDER_LIGHT, GREY_3);

    env.set(CURSOR_COLOR, WHITE);

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(14.0)
            .with_weight(FontWeight::MEDIUM),
    );
    env.set(
        UI_FONT_MONO,
        FontDescriptor::new(FontFamily::MONOSPACE).with_size(13.0),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(TEXT_SIZE_NORMAL, 14.0);
    env.set(TEXT_SIZE_LARGE, 18.0);

    env.set(BASIC_WIDGET_HEIGHT, grid(3.0));
    env.set(BORDERED_WIDGET_HEIGHT, grid(4.0));

    env.set(TEXTBOX_BORDER_RADIUS, 4.0);
    env.set(TEXTBOX_BORDER_WIDTH, 0.0);
    env.set(
        TEXTBOX_INSETS,
        Insets::new(grid(1.0), grid(1.0), grid(1.0), grid(1.0)),
    );

    env.set(LINK_HOT_COLOR, GREY_3);
    env.set(LINK_ACTIVE_COLOR, GREY_2);
    env.set(LINK_COLD_COLOR, Color::rgba8(0, 0, 0, 0));

    env.set(ATTENDING_COLOR, GREEN);
}
