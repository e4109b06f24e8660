#![allow(warnings)]
//! Gorum Web Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod i18n;
mod markdown;
mod models;
mod remote;
mod route;
mod session;
mod store;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    rolling_logger::init(log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY).ok();
    mount_to_body(App);
}
