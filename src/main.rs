//! Docs Portal Frontend Entry Point

mod app;
mod components;
mod config;
mod content;
mod context;
mod interaction;
mod models;
mod pages;
mod sidebar;
mod theme;
mod tree;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // Only fails if a logger is already installed
    let _ = rolling_logger::init(level, rolling_logger::DEFAULT_CAPACITY);

    mount_to_body(App);
}
