use druid::{
    kurbo::Circle,
    widget::{prelude::*, Flex, Label},
    Data, Widget, WidgetExt,
};

use super::theme;

/// Pulsing dot row, shown wherever data has not arrived yet.
struct Spinner {
    t: f64,
}

const DOTS: i32 = 3;

impl Spinner {
    pub fn new() -> Self {
        Self { t: 0.0 }
    }
}

impl<T: Data> Widget<T> for Spinner {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, _data: &mut T, _env: &Env) {
        if let Event::AnimFrame(interval) = event {
            self.t += (*interval as f64) * 1e-9;
            if self.t >= 1.0 {
                self.t = 0.0;
            }
            ctx.request_anim_frame();
            ctx.request_paint();
        }
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, _data: &T, _env: &Env) {
        if let LifeCycle::WidgetAdded = event {
            ctx.request_anim_frame();
            ctx.request_paint();
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.constrain(Size::new(theme::grid(6.0), theme::grid(2.0)))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let center = ctx.size().to_rect().center();
        let cold = env.get(theme::BUTTON_LIGHT);
        let hot = env.get(theme::PLACEHOLDER_COLOR);
        let active = ((self.t * f64::from(DOTS)).floor() as i32).min(DOTS - 1);
        for i in 0..DOTS {
            let offset = f64::from(i - 1) * theme::grid(2.0);
            let dot = Circle::new((center.x + offset, center.y), theme::grid(0.6));
            if i == active {
                ctx.fill(dot, &hot);
            } else {
                ctx.fill(dot, &cold);
            }
        }
    }
}

pub fn spinner_widget<T: Data>() -> impl Widget<T> {
    Spinner::new().center()
}

pub fn loading_widget<T: Data>(caption: &'static str) -> impl Widget<T> {
    Flex::column()
        .with_child(spinner_widget())
        .with_spacer(theme::grid(1.0))
        .with_child(
            Label::new(caption)
                .with_text_size(theme::TEXT_SIZE_SMALL)
                .with_text_color(theme::PLACEHOLDER_COLOR),
        )
        .center()
        .padding(theme::grid(2.0))
}
