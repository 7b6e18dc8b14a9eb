mod link;

use druid::{widget::ControllerHost, Data, EventCtx, Selector, Widget};

pub use link::Link;

use crate::controller::OnCommand;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }

    fn on_command<U: 'static>(
        self,
        selector: Selector<U>,
        handler: impl Fn(&mut EventCtx, &U, &mut T) + 'static,
    ) -> ControllerHost<Self, OnCommand<U, impl Fn(&mut EventCtx, &U, &mut T)>> {
        ControllerHost::new(self, OnCommand::new(selector, handler))
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
