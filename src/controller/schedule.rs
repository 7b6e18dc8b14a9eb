use std::time::Duration;

use druid::{
    widget::{prelude::*, Controller},
    TimerToken,
};

use crate::{cmd, data::AppState};

/// How long the copied-to-clipboard notices stay up.
const NOTICE_TIMEOUT: Duration = Duration::from_millis(2000);

enum Notice {
    MoveCopied,
    ShareCopied,
}

/// Root controller: issues the bootstrap fetches and drives the clipboard
/// flows with their one-shot notice timers.
pub struct ScheduleController {
    timers: Vec<(TimerToken, Notice)>,
}

impl ScheduleController {
    pub fn new() -> Self {
        Self { timers: Vec::new() }
    }
}

impl<W> Controller<AppState, W> for ScheduleController
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
        match event {
            Event::Command(cmd) if cmd.is(cmd::COPY_MOVE_LINK) => {
                let link = data.begin_move();
                ctx.submit_command(cmd::COPY.with(link));
                self.timers
                    .push((ctx.request_timer(NOTICE_TIMEOUT), Notice::MoveCopied));
                ctx.set_handled();
            }
            Event::Command(cmd) if cmd.is(cmd::COPY_SHARE_LINK) => {
                if let Some(link) = data.begin_share() {
                    ctx.submit_command(cmd::COPY.with(link));
                    self.timers
                        .push((ctx.request_timer(NOTICE_TIMEOUT), Notice::ShareCopied));
                }
                ctx.set_handled();
            }
            Event::Timer(token) => {
                // Timers of earlier copies are never cancelled; an older one
                // can clear the notice of a quick follow-up copy early.
                if let Some(at) = self.timers.iter().position(|(t, _)| t == token) {
                    match self.timers.remove(at).1 {
                        Notice::MoveCopied => data.flags.move_copied = false,
                        Notice::ShareCopied => data.flags.share_copied = false,
                    }
                    ctx.set_handled();
                } else {
                    child.event(ctx, event, data, env);
                }
            }
            _ => {
                child.event(ctx, event, data, env);
            }
        }
    }

    fn lifecycle(
        &mut self,
        child: &mut W,
        ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        data: &AppState,
        env: &Env,
    ) {
        if let LifeCycle::WidgetAdded = event {
            // Both fetches go out together, ordering between them does not
            // matter.
            ctx.submit_command(cmd::LOAD_SCHEDULE);
            ctx.submit_command(cmd::LOAD_SECRET);
        }
        child.lifecycle(ctx, event, data, env)
    }
}
