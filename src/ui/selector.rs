use std::sync::Arc;

use druid::{
    im::Vector,
    lens::Map,
    widget::{CrossAxisAlignment, Either, Flex, Label, List, MainAxisAlignment},
    Data, Insets, Lens, Selector, Widget, WidgetExt,
};

use crate::{
    cmd,
    data::AppState,
    widget::MyWidgetExt,
};

use super::{theme, utils};

/// Week tabs, day tabs and the stage carousel.  Replaced by a loading
/// placeholder until the schedule document arrives.
pub fn selector_widget() -> impl Widget<AppState> {
    Either::new(
        |data: &AppState, _| data.schedule.is_empty(),
        utils::loading_widget("Loading dates…"),
        Flex::column()
            .cross_axis_alignment(CrossAxisAlignment::Start)
            .with_child(week_row())
            .with_spacer(theme::grid(0.5))
            .with_child(day_row())
            .with_spacer(theme::grid(1.0))
            .with_child(stage_row()),
    )
}

/// One selectable tab of the week or day row.
#[derive(Clone, Data, Lens)]
struct Tab {
    index: usize,
    label: Arc<str>,
    selected: bool,
}

fn week_tabs(data: &AppState) -> Vector<Tab> {
    data.schedule
        .iter()
        .enumerate()
        .map(|(index, week)| Tab {
            index,
            label: week.name.clone(),
            selected: index == data.selected.week,
        })
        .collect()
}

fn day_tabs(data: &AppState) -> Vector<Tab> {
    data.schedule
        .get(data.selected.week)
        .map(|week| {
            week.days
                .iter()
                .enumerate()
                .map(|(index, day)| Tab {
                    index,
                    label: day.week_day.clone(),
                    selected: index == data.selected.day,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn week_row() -> impl Widget<AppState> {
    List::new(|| tab_widget(cmd::CHANGE_WEEK))
        .horizontal()
        .lens(Map::new(week_tabs, |_, _| ()))
}

fn day_row() -> impl Widget<AppState> {
    List::new(|| tab_widget(cmd::CHANGE_DAY))
        .horizontal()
        .lens(Map::new(day_tabs, |_, _| ()))
}

fn tab_widget(selector: Selector<usize>) -> impl Widget<Tab> {
    Label::raw()
        .with_font(theme::UI_FONT_MEDIUM)
        .lens(Tab::label)
        .padding(Insets::uniform_xy(theme::grid(1.5), theme::grid(0.5)))
        .link()
        .rounded(4.0)
        .active(|tab: &Tab, _| tab.selected)
        .on_click(move |ctx, tab, _| ctx.submit_command(selector.with(tab.index)))
}

fn stage_row() -> impl Widget<AppState> {
    let previous = Label::new("<")
        .with_font(theme::UI_FONT_MEDIUM)
        .padding(Insets::uniform_xy(theme::grid(1.5), theme::grid(0.5)))
        .link()
        .rounded(4.0)
        .on_click(|ctx, data: &mut AppState, _| {
            ctx.submit_command(cmd::CHANGE_STAGE.with(data.selected.stage as isize - 1))
        });

    let next = Label::new(">")
        .with_font(theme::UI_FONT_MEDIUM)
        .padding(Insets::uniform_xy(theme::grid(1.5), theme::grid(0.5)))
        .link()
        .rounded(4.0)
        .on_click(|ctx, data: &mut AppState, _| {
            ctx.submit_command(cmd::CHANGE_STAGE.with(data.selected.stage as isize + 1))
        });

    let stage_name = Label::dynamic(|data: &AppState, _| {
        data.current_stage()
            .map(|stage| stage.name.to_string())
            .unwrap_or_default()
    })
    .with_font(theme::UI_FONT_MEDIUM)
    .center()
    .fix_width(theme::grid(24.0));

    Flex::row()
        .main_axis_alignment(MainAxisAlignment::Start)
        .with_child(previous)
        .with_spacer(theme::grid(1.0))
        .with_child(stage_name)
        .with_spacer(theme::grid(1.0))
        .with_child(next)
}
