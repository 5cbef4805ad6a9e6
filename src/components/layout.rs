use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::app::Route;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::components::toast::ToastHost;
use crate::session::SESSION;

#[component]
pub fn AppLayout(children: Element) -> Element {
    let navigator = use_navigator();

    // Authenticated pages bounce to login when no token is held.
    use_effect(move || {
        if !SESSION.is_authenticated() {
            navigator.push(Route::LoginPage {});
        }
    });

    rsx! {
        div {
            class: "flex min-h-screen bg-gray-50",
            Sidebar {}
            div {
                class: "flex-1 flex flex-col",
                Header {}
                main {
                    class: "p-6",
                    {children}
                }
            }
            ToastHost {}
        }
    }
}
