use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::table::Pagination;
use crate::hooks::use_api_simple;
use crate::models::common::PageByNoRequest;
use crate::models::func_model::{GetFuncModelsRequest, GetFuncModelsResponse};
use crate::styles::combinations::*;
use crate::utils::format::{remove_html_tags, timestamp_to_time};

const PER_PAGE: u32 = 10;

#[component]
pub fn FuncModelList() -> Element {
    let state = use_api_simple::<GetFuncModelsResponse>();
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
                .get_func_models(&GetFuncModelsRequest {
                    page: PageByNoRequest { page_no: current_page, per_page: PER_PAGE },
                    model_ids: Vec::new(),
                    name: String::new(),
                    model_type: String::new(),
                })
                .await;
            data.set(Some(result));
            loading.set(false);
        });
    });

    rsx! {
        PageContainer {
            PageHeader {
                title: "Function Models".to_string(),
                subtitle: Some("Property, event, and service schemas".to_string()),
            }

            if state.is_loading() {
                Card {
                    title: "Loading",
                    LoadingState { message: None }
                }
            } else if let Some(response) = state.value() {
                Card {
                    title: "Function Model List",
                    content_class: "p-6 space-y-4",
                    if response.func_models.is_empty() {
                        EmptyState { message: "No function models yet.".to_string() }
                    } else {
                        div {
                            class: TABLE_CONTAINER,
                            table {
                                class: TABLE,
                                thead {
                                    tr {
                                        class: TABLE_HEADER_ROW,
                                        th { class: TABLE_HEADER_CELL, "Name" }
                                        th { class: TABLE_HEADER_CELL, "Key" }
                                        th { class: TABLE_HEADER_CELL, "Type" }
                                        th { class: TABLE_HEADER_CELL, "Data Type" }
                                        th { class: TABLE_HEADER_CELL, "Description" }
                                        th { class: TABLE_HEADER_CELL, "Updated" }
                                        th { class: TABLE_HEADER_CELL, "Actions" }
                                    }
                                }
                                tbody {
                                    for (idx, model) in response.func_models.iter().enumerate() {
                                        tr {
                                            class: if idx % 2 == 0 { TABLE_ROW_EVEN } else { TABLE_ROW_ODD },
                                            td { class: TABLE_CELL, "{model.data.name}" }
                                            td { class: TABLE_CELL, span { class: "font-mono", "{model.data.key}" } }
                                            td { class: TABLE_CELL, "{model.model_type}" }
                                            td { class: TABLE_CELL, "{model.data.data_type}" }
                                            td { class: TABLE_CELL, {remove_html_tags(&model.description)} }
                                            td { class: TABLE_CELL, {timestamp_to_time(model.updated_at, true)} }
                                            td {
                                                class: TABLE_CELL,
                                                DeleteFuncModelButton {
                                                    model_id: model.func_model_id.clone(),
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
fn DeleteFuncModelButton(model_id: String, on_done: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "px-2 py-1 text-xs border border-red-300 text-red-600 rounded hover:bg-red-50",
            onclick: move |_| {
                let model_id = model_id.clone();
                spawn(async move {
                    let client = ApiClient::new();
                    if client.delete_func_models(&[model_id]).await.is_ok() {
                        on_done.call(());
                    }
                });
            },
            "Delete"
        }
    }
}
