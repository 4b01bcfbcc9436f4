//! Product Feed Frontend Entry Point

mod app;
mod components;
mod config;
mod dom_observer;
mod hooks;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
