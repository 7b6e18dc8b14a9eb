use druid::{AppDelegate, Application, Command, DelegateCtx, Env, Handled, Target, WindowId};
use threadpool::ThreadPool;

use crate::{cmd, data::AppState, webapi::WebApi};

pub struct Delegate {
    main_window: Option<WindowId>,
    io_pool: ThreadPool,
}

impl Delegate {
    pub fn new() -> Self {
        const MAX_IO_THREADS: usize = 4;

        Self {
            main_window: None,
            io_pool: ThreadPool::with_name("web_io".into(), MAX_IO_THREADS),
        }
    }

    pub fn with_main(main_window: WindowId) -> Self {
        let mut this = Self::new();
        this.main_window.replace(main_window);
        this
    }
}

impl AppDelegate<AppState> for Delegate {
    fn command(
        &mut self,
        ctx: &mut DelegateCtx,
        _target: Target,
        cmd: &Command,
        data: &mut AppState,
        _env: &Env,
    ) -> Handled {
        if let Some(text) = cmd.get(cmd::COPY) {
            Application::global().clipboard().put_string(text);
            Handled::Yes
        } else if let Some(link) = cmd.get(cmd::OPEN_EXTERNAL_LINK) {
            if let Err(err) = open::that(link) {
                log::error!("failed to open external link: {err}");
            }
            Handled::Yes
        } else if cmd.is(cmd::LOAD_SCHEDULE) {
            let sink = ctx.get_external_handle();
            self.io_pool.execute(move || {
                let result = WebApi::global().get_schedule();
                sink.submit_command(cmd::UPDATE_SCHEDULE, result, Target::Auto)
                    .unwrap();
            });
            Handled::Yes
        } else if let Some(result) = cmd.get(cmd::UPDATE_SCHEDULE) {
            match result {
                Ok(schedule) => data.set_schedule(schedule.clone()),
                // Stale data stays around, the user is not bothered.
                Err(err) => log::warn!("failed to fetch schedule: {err}"),
            }
            Handled::Yes
        } else if cmd.is(cmd::LOAD_SECRET) {
            let sink = ctx.get_external_handle();
            self.io_pool.execute(move || {
                let result = WebApi::global().get_secret();
                sink.submit_command(cmd::UPDATE_SECRET, result, Target::Auto)
                    .unwrap();
            });
            Handled::Yes
        } else if let Some(result) = cmd.get(cmd::UPDATE_SECRET) {
            match result {
                Ok(secret) => data.secret = secret.clone(),
                Err(err) => log::warn!("failed to fetch identity token: {err}"),
            }
            Handled::Yes
        } else if let Some(change) = cmd.get(cmd::TOGGLE_ATTENDANCE) {
            // Fire-and-forget: the toggle call and the refetch below race
            // against each other, the server answer is never awaited.
            let change = change.clone();
            self.io_pool.execute(move || {
                if let Err(err) = WebApi::global().set_attendance(&change.id, change.attending) {
                    log::warn!("failed to update attendance: {err}");
                }
            });
            ctx.submit_command(cmd::LOAD_SCHEDULE);
            Handled::Yes
        } else {
            Handled::No
        }
    }

    fn window_removed(
        &mut self,
        id: WindowId,
        _data: &mut AppState,
        _env: &Env,
        _ctx: &mut DelegateCtx,
    ) {
        if self.main_window == Some(id) {
            self.main_window.take();
        }
    }
}
