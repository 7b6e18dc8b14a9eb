use druid::{widget::TextBox, Widget, WidgetExt};

use crate::{
    controller::{InputController, TitleController},
    data::AppState,
};

use super::theme;

/// Editable schedule name.  Orange while the share flow is waiting for a
/// proper title.
pub fn title_widget() -> impl Widget<AppState> {
    TextBox::new()
        .with_placeholder("Name your schedule")
        .with_text_size(theme::TEXT_SIZE_LARGE)
        .controller(InputController::new())
        .expand_width()
        .lens(AppState::title)
        .controller(TitleController)
        .env_scope(|env, data: &AppState| {
            if data.flags.missing_title {
                env.set(theme::TEXT_COLOR, theme::ORANGE);
            }
        })
}
