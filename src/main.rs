#![allow(warnings)]
//! Pokédex Checklist Frontend Entry Point

mod config;
mod models;
mod checklist;
mod commands;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
