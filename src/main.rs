#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(clippy::new_without_default)]
#![recursion_limit = "256"]

mod cmd;
mod controller;
mod data;
mod delegate;
mod error;
mod ui;
mod webapi;
mod widget;

use std::{env, process};

use druid::AppLauncher;
use env_logger::{Builder, Env};

use crate::{
    data::{AppLink, AppState, Config},
    delegate::Delegate,
    webapi::WebApi,
};

const ENV_LOG: &str = "PLANFEST_LOG";
const ENV_LOG_STYLE: &str = "PLANFEST_LOG_STYLE";

fn main() {
    // Setup logging from the env variables, with defaults.
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let config = Config::load().unwrap_or_default();

    WebApi::new(&config.api_url, Config::proxy().as_deref()).install_as_global();

    // A move link passed on the command line associates this device with an
    // existing schedule.  Login has to succeed before anything else happens;
    // this is the only failure in the whole client that is not swallowed.
    if let Some(arg) = env::args().nth(1) {
        match AppLink::parse(&arg) {
            Some(AppLink::Move(token)) => {
                if let Err(err) = WebApi::global().login(&token) {
                    log::error!("failed to log in with move link: {err}");
                    process::exit(1);
                }
                log::info!("logged in from move link");
            }
            Some(AppLink::Share(_)) | None => {
                log::warn!("ignoring unrecognized link argument: {arg}");
            }
        }
    }

    let state = AppState::default_with_config(config);

    let window = ui::main_window();
    let delegate = Delegate::with_main(window.id);

    AppLauncher::with_window(window)
        .configure_env(ui::theme::setup)
        .delegate(delegate)
        .launch(state)
        .expect("Application launch");
}
