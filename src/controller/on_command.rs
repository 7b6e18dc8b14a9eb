use druid::{widget::Controller, Data, Env, Event, EventCtx, Selector, Widget};

/// Runs a handler when a matching command arrives, then lets the event
/// continue into the child.
pub struct OnCommand<U, F> {
    selector: Selector<U>,
    handler: F,
}

impl<U, F> OnCommand<U, F> {
    pub fn new<T>(selector: Selector<U>, handler: F) -> Self
    where
        F: Fn(&mut EventCtx, &U, &mut T),
    {
        Self { selector, handler }
    }
}

impl<T, U, F, W> Controller<T, W> for OnCommand<U, F>
where
    T: Data,
    U: 'static,
    F: Fn(&mut EventCtx, &U, &mut T),
    W: Widget<T>,
{
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        if let Event::Command(cmd) = event {
            if let Some(payload) = cmd.get(self.selector) {
                (self.handler)(ctx, payload, data);
            }
        }
        child.event(ctx, event, data, env);
    }
}
