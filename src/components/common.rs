//! Placeholder blocks shown while a page's API call is pending, failed,
//! or returned an empty list.

use dioxus::prelude::*;

use crate::styles::combinations::*;

#[component]
pub fn LoadingState(message: Option<String>) -> Element {
    let text = message.unwrap_or_else(|| "Loading...".to_string());
    rsx! {
        div { class: LOADING, "{text}" }
    }
}

/// Error panel carrying the gateway error's display text.
#[component]
pub fn ErrorState(error: String, title: Option<String>) -> Element {
    rsx! {
        div {
            class: ERROR,
            if let Some(title) = title {
                h3 { class: "font-semibold mb-2", "{title}" }
            }
            "{error}"
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: EMPTY, "{message}" }
    }
}
