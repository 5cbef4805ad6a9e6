use dioxus::prelude::*;
use dioxus_router::Link;

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::components::table::Pagination;
use crate::hooks::use_api_simple;
use crate::models::common::PageByNoRequest;
use crate::models::device::{
    CreateProductRequest, GetProductsRequest, GetProductsResponse, UpdateProductStatusRequest,
};
use crate::styles::combinations::*;
use crate::utils::format::timestamp_to_time;

const PER_PAGE: u32 = 10;

#[component]
pub fn Product() -> Element {
    let state = use_api_simple::<GetProductsResponse>();
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
                .get_products(&GetProductsRequest {
                    page: PageByNoRequest { page_no: current_page, per_page: PER_PAGE },
                    name: String::new(),
                })
                .await;
            data.set(Some(result));
            loading.set(false);
        });
    });

    rsx! {
        PageContainer {
            PageHeader {
                title: "Products".to_string(),
                subtitle: Some("Product definitions grouping your devices".to_string()),
            }

            Card {
                title: "New Product",
                CreateProductForm {
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
                    title: "Product List",
                    content_class: "p-6 space-y-4",
                    if response.products.is_empty() {
                        EmptyState { message: "No products yet.".to_string() }
                    } else {
                        div {
                            class: TABLE_CONTAINER,
                            table {
                                class: TABLE,
                                thead {
                                    tr {
                                        class: TABLE_HEADER_ROW,
                                        th { class: TABLE_HEADER_CELL, "Name" }
                                        th { class: TABLE_HEADER_CELL, "Description" }
                                        th { class: TABLE_HEADER_CELL, "Status" }
                                        th { class: TABLE_HEADER_CELL, "Updated" }
                                        th { class: TABLE_HEADER_CELL, "Actions" }
                                    }
                                }
                                tbody {
                                    for (idx, product) in response.products.iter().enumerate() {
                                        tr {
                                            class: if idx % 2 == 0 { TABLE_ROW_EVEN } else { TABLE_ROW_ODD },
                                            td {
                                                class: TABLE_CELL,
                                                Link {
                                                    to: Route::ProductDetailPage { product_id: product.product_id.clone() },
                                                    class: "text-blue-600 hover:underline",
                                                    "{product.name}"
                                                }
                                            }
                                            td { class: TABLE_CELL, "{product.description}" }
                                            td {
                                                class: TABLE_CELL,
                                                span {
                                                    class: if product.enable { BADGE_ENABLED } else { BADGE_DISABLED },
                                                    if product.enable { "Enabled" } else { "Disabled" }
                                                }
                                            }
                                            td { class: TABLE_CELL, {timestamp_to_time(product.updated_at, true)} }
                                            td {
                                                class: TABLE_CELL,
                                                ProductActions {
                                                    product_id: product.product_id.clone(),
                                                    enabled: product.enable,
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
fn CreateProductForm(on_created: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    rsx! {
        div {
            class: "flex gap-3 items-center",
            input {
                class: INPUT,
                r#type: "text",
                placeholder: "Name",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: INPUT,
                r#type: "text",
                placeholder: "Description",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            button {
                class: BUTTON_PRIMARY,
                onclick: move |_| {
                    let params = CreateProductRequest {
                        name: name.read().clone(),
                        description: description.read().clone(),
                    };
                    if params.name.is_empty() {
                        return;
                    }
                    spawn(async move {
                        let client = ApiClient::new();
                        if client.create_product(&params).await.is_ok() {
                            name.set(String::new());
                            description.set(String::new());
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
fn ProductActions(product_id: String, enabled: bool, on_done: EventHandler<()>) -> Element {
    let toggle_id = product_id.clone();
    let delete_id = product_id;

    rsx! {
        div {
            class: "flex gap-2",
            button {
                class: "px-2 py-1 text-xs border border-gray-300 rounded hover:bg-gray-100",
                onclick: move |_| {
                    let product_id = toggle_id.clone();
                    spawn(async move {
                        let client = ApiClient::new();
                        let result = client
                            .update_product_status(&UpdateProductStatusRequest {
                                product_id,
                                to_enable: !enabled,
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
                    let product_id = delete_id.clone();
                    spawn(async move {
                        let client = ApiClient::new();
                        if client.delete_products(&[product_id]).await.is_ok() {
                            on_done.call(());
                        }
                    });
                },
                "Delete"
            }
        }
    }
}
