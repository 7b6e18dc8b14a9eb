use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, Scroll},
    Insets, Widget, WidgetExt, WindowDesc,
};

use crate::{
    cmd,
    controller::ScheduleController,
    data::AppState,
    widget::MyWidgetExt,
};

pub mod selector;
pub mod slots;
pub mod theme;
pub mod title;
pub mod utils;

const DONATE_URL: &str = "https://buy.stripe.com/6oE7tu7UM3235dCeUU";

pub fn main_window() -> WindowDesc<AppState> {
    WindowDesc::new(root_widget())
        .title("Planfest")
        .with_min_size((theme::grid(50.0), theme::grid(50.0)))
        .window_size((theme::grid(80.0), theme::grid(90.0)))
}

fn root_widget() -> impl Widget<AppState> {
    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(actions_widget())
        .with_spacer(theme::grid(1.0))
        .with_child(title::title_widget())
        .with_spacer(theme::grid(1.0))
        .with_child(selector::selector_widget())
        .with_spacer(theme::grid(1.0))
        .with_flex_child(Scroll::new(slots::list_widget()).vertical().expand(), 1.0)
        .padding(theme::grid(2.0))
        .controller(ScheduleController::new())
        .on_command(cmd::CHANGE_WEEK, |_, &week, data: &mut AppState| {
            data.change_week(week)
        })
        .on_command(cmd::CHANGE_DAY, |_, &day, data: &mut AppState| {
            data.change_day(day)
        })
        .on_command(cmd::CHANGE_STAGE, |_, &stage, data: &mut AppState| {
            data.change_stage(stage)
        })
}

fn actions_widget() -> impl Widget<AppState> {
    Flex::row()
        .with_child(move_action())
        .with_spacer(theme::grid(1.0))
        .with_child(share_action())
        .with_spacer(theme::grid(1.0))
        .with_child(donate_action())
}

fn action_button(text: &'static str) -> impl Widget<AppState> {
    Label::new(text)
        .padding(Insets::uniform_xy(theme::grid(1.5), theme::grid(0.5)))
        .link()
        .rounded(4.0)
}

fn notice_label(text: &'static str, color: druid::Color) -> impl Widget<AppState> {
    Label::new(text)
        .with_text_color(color)
        .padding(Insets::uniform_xy(theme::grid(1.5), theme::grid(0.5)))
}

fn move_action() -> impl Widget<AppState> {
    Either::new(
        |data: &AppState, _| data.flags.move_copied,
        notice_label("Link copied to clipboard", theme::GREEN),
        action_button("Move to a new device")
            .on_click(|ctx, _, _| ctx.submit_command(cmd::COPY_MOVE_LINK)),
    )
}

fn share_action() -> impl Widget<AppState> {
    Either::new(
        |data: &AppState, _| data.flags.missing_title,
        notice_label("Please add a title before sharing", theme::ORANGE),
        Either::new(
            |data: &AppState, _| data.flags.share_copied,
            notice_label("Link copied to clipboard", theme::GREEN),
            action_button("Share with others")
                .on_click(|ctx, _, _| ctx.submit_command(cmd::COPY_SHARE_LINK)),
        ),
    )
}

fn donate_action() -> impl Widget<AppState> {
    action_button("Donate").on_click(|ctx, _, _| {
        ctx.submit_command(cmd::OPEN_EXTERNAL_LINK.with(DONATE_URL.to_string()))
    })
}
