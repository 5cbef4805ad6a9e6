use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::api::ApiClient;
use crate::app::{Route, CURRENT_USER};
use crate::components::toast::ToastHost;
use crate::models::auth::LoginParams;
use crate::session::SESSION;
use crate::styles::combinations::*;

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let mut user_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        if *submitting.read() {
            return;
        }
        let params = LoginParams {
            user_name: user_name.read().clone(),
            password: password.read().clone(),
        };
        spawn(async move {
            submitting.set(true);
            let client = ApiClient::new();
            match client.login(&params).await {
                Ok(response) => {
                    SESSION.set_token(response.token);
                    if let Ok(user) = client.get_user_info().await {
                        *CURRENT_USER.write() = Some(user);
                    }
                    navigator.push(Route::DashboardPage {});
                }
                Err(err) => {
                    // The gateway already toasted the failure.
                    log::warn!("login failed: {err}");
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-slate-900",
            ToastHost {}
            div {
                class: "w-full max-w-md bg-white rounded-lg shadow-xl p-8 space-y-6",
                div {
                    class: "text-center",
                    h1 { class: "text-2xl font-bold text-gray-900", "SmartMesh Console" }
                    p { class: "text-sm text-gray-600 mt-1", "Sign in to manage your devices" }
                }
                div {
                    class: "space-y-4",
                    input {
                        class: INPUT,
                        r#type: "text",
                        placeholder: "Username",
                        value: "{user_name}",
                        oninput: move |evt| user_name.set(evt.value()),
                    }
                    input {
                        class: INPUT,
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        class: if *submitting.read() {
                            format!("{BUTTON_PRIMARY} {BUTTON_DISABLED} w-full")
                        } else {
                            format!("{BUTTON_PRIMARY} w-full")
                        },
                        disabled: *submitting.read(),
                        onclick: submit,
                        if *submitting.read() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
