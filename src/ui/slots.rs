use druid::{
    lens::Map,
    widget::{CrossAxisAlignment, Either, Flex, Label, LineBreaking, List},
    Insets, Widget, WidgetExt,
};

use crate::{
    cmd,
    data::{AppState, AttendanceChange, Slot},
    widget::MyWidgetExt,
};

use super::{theme, utils};

/// Time slots of the selected stage.  Clicking a row toggles attendance;
/// the highlight reflects only what was last fetched, there is no
/// optimistic update.
pub fn list_widget() -> impl Widget<AppState> {
    Either::new(
        |data: &AppState, _| data.current_slots().is_empty(),
        utils::loading_widget("Loading artists…"),
        Flex::column()
            .cross_axis_alignment(CrossAxisAlignment::Start)
            .with_child(header_widget())
            .with_child(
                List::new(slot_widget).lens(Map::new(AppState::current_slots, |_, _| ())),
            ),
    )
}

fn header_widget() -> impl Widget<AppState> {
    Flex::row()
        .with_child(
            Label::new("Time")
                .with_font(theme::UI_FONT_MEDIUM)
                .fix_width(theme::grid(14.0)),
        )
        .with_flex_child(
            Label::new("Artist")
                .with_font(theme::UI_FONT_MEDIUM)
                .expand_width(),
            1.0,
        )
        .with_child(
            Label::new("Attendees")
                .with_font(theme::UI_FONT_MEDIUM)
                .fix_width(theme::grid(10.0)),
        )
        .padding(Insets::uniform_xy(theme::grid(1.0), theme::grid(0.5)))
}

fn slot_widget() -> impl Widget<Slot> {
    Flex::row()
        .with_child(
            Label::dynamic(|slot: &Slot, _| slot.time_range())
                .with_font(theme::UI_FONT_MONO)
                .fix_width(theme::grid(14.0)),
        )
        .with_flex_child(
            Label::raw()
                .with_line_break_mode(LineBreaking::Clip)
                .lens(Slot::artist)
                .expand_width(),
            1.0,
        )
        .with_child(
            Label::dynamic(|slot: &Slot, _| slot.attendees.len().to_string())
                .fix_width(theme::grid(10.0)),
        )
        .padding(Insets::uniform_xy(theme::grid(1.0), theme::grid(0.5)))
        .link()
        .rounded(4.0)
        .active(|slot: &Slot, _| slot.attending)
        .env_scope(|env, _| {
            env.set(theme::LINK_ACTIVE_COLOR, env.get(theme::ATTENDING_COLOR));
        })
        .on_click(|ctx, slot, _| {
            ctx.submit_command(cmd::TOGGLE_ATTENDANCE.with(AttendanceChange::toggle_of(slot)))
        })
}
