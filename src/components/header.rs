use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::{Route, CURRENT_USER};
use crate::components::icon::Icon;
use crate::session::SESSION;

#[component]
pub fn Header() -> Element {
    let navigator = use_navigator();
    let user = CURRENT_USER.read().clone();

    rsx! {
        header {
            class: "bg-white shadow-sm border-b border-gray-200",
            div {
                class: "px-6 py-4",
                div {
                    class: "flex items-center justify-between",
                    span {
                        class: "text-xl font-bold text-gray-900",
                        "SmartMesh Console"
                    }

                    div {
                        class: "flex items-center space-x-4",
                        if let Some(user) = user {
                            span {
                                class: "text-sm text-gray-600",
                                "{user.user_name}"
                            }
                        }
                        button {
                            class: "flex items-center space-x-1 px-3 py-2 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-100",
                            onclick: move |_| {
                                SESSION.clear();
                                *CURRENT_USER.write() = None;
                                navigator.push(Route::LoginPage {});
                            },
                            Icon { icon: &icondata::AiLogoutOutlined, class: "w-4 h-4" }
                            span { "Logout" }
                        }
                    }
                }
            }
        }
    }
}
