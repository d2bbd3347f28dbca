#![allow(warnings)]
//! Milestones Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("milestones ui starting");
    mount_to_body(App);
}
