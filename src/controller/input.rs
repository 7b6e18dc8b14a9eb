use druid::{
    widget::{prelude::*, Controller, TextBox},
    HotKey, KbKey,
};

use crate::data::{AppState, MAX_TITLE_LEN};

/// Text box behavior: Enter commits by resigning focus, Escape bails out.
pub struct InputController;

impl InputController {
    pub fn new() -> Self {
        Self
    }
}

impl Controller<String, TextBox<String>> for InputController {
    fn event(
        &mut self,
        child: &mut TextBox<String>,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut String,
        env: &Env,
    ) {
        match event {
            Event::KeyDown(k_e) if HotKey::new(None, KbKey::Enter).matches(k_e) => {
                ctx.resign_focus();
                ctx.request_paint();
                ctx.set_handled();
            }
            Event::KeyDown(k_e) if k_e.key == KbKey::Escape => {
                ctx.resign_focus();
                ctx.set_handled();
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }
}

/// Watches the title for edits made through the child text box: caps the
/// length and clears the missing-title warning on any change.
pub struct TitleController;

impl<W> Controller<AppState, W> for TitleController
where
    W: Widget<AppState>,
{
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut AppState,
        env: &Env,
    ) {
        let old_title = data.title.clone();
        child.event(ctx, event, data, env);
        if data.title != old_title {
            let capped: String = data.title.chars().take(MAX_TITLE_LEN).collect();
            data.change_title(capped);
        }
    }
}
