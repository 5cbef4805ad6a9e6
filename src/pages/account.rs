use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::table::Pagination;
use crate::hooks::use_api_simple;
use crate::models::account::{
    CreateAccountRequest, DeleteAccountRequest, GetAccountsRequest, GetAccountsResponse,
    ModifyAccountStatusRequest,
};
use crate::models::common::PageByNoRequest;
use crate::styles::combinations::*;
use crate::styles::conditional_class;

const PER_PAGE: u32 = 10;

#[component]
pub fn Account() -> Element {
    let state = use_api_simple::<GetAccountsResponse>();
    let mut page_no = use_signal(|| 1u32);
    let mut reload = use_signal(|| 0u32);

    use_effect(move || {
        let current_page = *page_no.read();
        let _ = *reload.read();
        let mut loading = state.loading;
        let mut data = state.data;
        spawn(async move {
            loading.set(true);
            let client = ApiClient::new();
            let result = client
                .get_accounts(&GetAccountsRequest {
                    page: PageByNoRequest { page_no: current_page, per_page: PER_PAGE },
                    user_name: None,
                    status: None,
                })
                .await;
            data.set(Some(result));
            loading.set(false);
        });
    });

    rsx! {
        PageContainer {
            PageHeader {
                title: "Accounts".to_string(),
                subtitle: Some("Console operator accounts".to_string()),
            }

            Card {
                title: "New Account",
                CreateAccountForm {
                    on_created: move |_| {
                        let next = *reload.read() + 1;
                        reload.set(next);
                    },
                }
            }

            if state.is_loading() {
                Card {
                    title: "Loading",
                    LoadingState { message: None }
                }
            } else if let Some(response) = state.value() {
                Card {
                    title: "Account List",
                    content_class: "p-6 space-y-4",
                    if response.accounts.is_empty() {
                        EmptyState { message: "No accounts found.".to_string() }
                    } else {
                        div {
                            class: TABLE_CONTAINER,
                            table {
                                class: TABLE,
                                thead {
                                    tr {
                                        class: TABLE_HEADER_ROW,
                                        th { class: TABLE_HEADER_CELL, "Username" }
                                        th { class: TABLE_HEADER_CELL, "Nickname" }
                                        th { class: TABLE_HEADER_CELL, "Email" }
                                        th { class: TABLE_HEADER_CELL, "Roles" }
                                        th { class: TABLE_HEADER_CELL, "Status" }
                                        th { class: TABLE_HEADER_CELL, "Actions" }
                                    }
                                }
                                tbody {
                                    for (idx, account) in response.accounts.iter().enumerate() {
                                        tr {
                                            class: if idx % 2 == 0 { TABLE_ROW_EVEN } else { TABLE_ROW_ODD },
                                            td { class: TABLE_CELL, "{account.user_name}" }
                                            td { class: TABLE_CELL, "{account.nick_name}" }
                                            td { class: TABLE_CELL, "{account.user_email}" }
                                            td { class: TABLE_CELL, {account.user_roles.join(", ")} }
                                            td {
                                                class: TABLE_CELL,
                                                span {
                                                    class: conditional_class(account.status == "1", BADGE_ENABLED, BADGE_DISABLED),
                                                    if account.status == "1" { "Enabled" } else { "Disabled" }
                                                }
                                            }
                                            td {
                                                class: TABLE_CELL,
                                                AccountActions {
                                                    id: account.id,
                                                    enabled: account.status == "1",
                                                    on_done: move |_| {
                                                        let next = *reload.read() + 1;
                                                        reload.set(next);
                                                    },
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        Pagination {
                            page: response.page_result.clone(),
                            on_page: move |next| page_no.set(next),
                        }
                    }
                }
            } else if let Some(err) = state.error() {
                Card {
                    title: "Error",
                    ErrorState { error: err.to_string(), title: None }
                }
            }
        }
    }
}

#[component]
fn CreateAccountForm(on_created: EventHandler<()>) -> Element {
    let mut user_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut nick_name = use_signal(String::new);
    let mut user_email = use_signal(String::new);

    rsx! {
        div {
            class: "flex gap-3 items-center",
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
            input {
                class: INPUT,
                r#type: "text",
                placeholder: "Nickname",
                value: "{nick_name}",
                oninput: move |evt| nick_name.set(evt.value()),
            }
            input {
                class: INPUT,
                r#type: "email",
                placeholder: "Email",
                value: "{user_email}",
                oninput: move |evt| user_email.set(evt.value()),
            }
            button {
                class: BUTTON_PRIMARY,
                onclick: move |_| {
                    let params = CreateAccountRequest {
                        user_name: user_name.read().clone(),
                        password: password.read().clone(),
                        nick_name: nick_name.read().clone(),
                        user_email: user_email.read().clone(),
                        user_roles: vec!["operator".to_string()],
                    };
                    if params.user_name.is_empty() || params.password.is_empty() {
                        return;
                    }
                    spawn(async move {
                        let client = ApiClient::new();
                        if client.create_account(&params).await.is_ok() {
                            user_name.set(String::new());
                            password.set(String::new());
                            nick_name.set(String::new());
                            user_email.set(String::new());
                            on_created.call(());
                        }
                    });
                },
                "Create"
            }
        }
    }
}

#[component]
fn AccountActions(id: u64, enabled: bool, on_done: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex gap-2",
            button {
                class: "px-2 py-1 text-xs border border-gray-300 rounded hover:bg-gray-100",
                onclick: move |_| {
                    spawn(async move {
                        let client = ApiClient::new();
                        let result = client
                            .modify_account_status(&ModifyAccountStatusRequest {
                                id,
                                status: if enabled { "2".to_string() } else { "1".to_string() },
                            })
                            .await;
                        if result.is_ok() {
                            on_done.call(());
                        }
                    });
                },
                if enabled { "Disable" } else { "Enable" }
            }
            button {
                class: "px-2 py-1 text-xs border border-red-300 text-red-600 rounded hover:bg-red-50",
                onclick: move |_| {
                    spawn(async move {
                        let client = ApiClient::new();
                        let result = client
                            .delete_account(&DeleteAccountRequest { ids: vec![id] })
                            .await;
                        if result.is_ok() {
                            on_done.call(());
                        }
                    });
                },
                "Delete"
            }
        }
    }
}
