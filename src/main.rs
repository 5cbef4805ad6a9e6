use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod hooks;
mod models;
mod notify;
mod pages;
mod router;
mod session;
mod styles;
mod utils;

use app::App;

fn main() {
    launch(App);
}
