use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::hooks::use_api_simple;
use crate::models::device::{Product, UpdateProductRequest};
use crate::styles::combinations::*;
use crate::utils::format::timestamp_to_time;

#[component]
pub fn ProductDetail(product_id: String) -> Element {
    let state = use_api_simple::<Product>();

    use_effect(use_reactive!(|product_id| {
        let mut loading = state.loading;
        let mut data = state.data;
        spawn(async move {
            loading.set(true);
            let client = ApiClient::new();
            data.set(Some(client.get_product(&product_id).await));
            loading.set(false);
        });
    }));

    rsx! {
        PageContainer {
            PageHeader {
                title: "Product Detail".to_string(),
                subtitle: None,
            }

            if state.is_loading() {
                Card {
                    title: "Loading",
                    LoadingState { message: None }
                }
            } else if let Some(product) = state.value() {
                div {
                    class: "space-y-6",
                    Card {
                        title: "Product Information",
                        KeyValueList {
                            items: vec![
                                ("Product ID:".to_string(), product.product_id.clone()),
                                ("Name:".to_string(), product.name.clone()),
                                ("Description:".to_string(), product.description.clone()),
                                (
                                    "Status:".to_string(),
                                    if product.enable { "Enabled".to_string() } else { "Disabled".to_string() },
                                ),
                                ("Created:".to_string(), timestamp_to_time(product.created_at, true)),
                                ("Updated:".to_string(), timestamp_to_time(product.updated_at, true)),
                                ("Creator:".to_string(), product.creator.clone()),
                                ("Editor:".to_string(), product.editor.clone()),
                            ]
                        }
                    }
                    Card {
                        title: "Edit",
                        EditProductForm { product: product.clone() }
                    }
                    Card {
                        title: "Function Models",
                        if product.func_models.is_empty() {
                            EmptyState { message: "No function models attached.".to_string() }
                        } else {
                            ul {
                                class: "space-y-2",
                                for model_id in product.func_models.iter() {
                                    li {
                                        class: "font-mono text-sm bg-gray-100 px-2 py-1 rounded",
                                        "{model_id}"
                                    }
                                }
                            }
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
fn EditProductForm(product: Product) -> Element {
    let mut name = use_signal(|| product.name.clone());
    let mut description = use_signal(|| product.description.clone());
    let product_id = product.product_id.clone();

    rsx! {
        div {
            class: "flex gap-3 items-center",
            input {
                class: INPUT,
                r#type: "text",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: INPUT,
                r#type: "text",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            button {
                class: BUTTON_PRIMARY,
                onclick: move |_| {
                    let params = UpdateProductRequest {
                        product_id: product_id.clone(),
                        name: name.read().clone(),
                        description: description.read().clone(),
                    };
                    spawn(async move {
                        let client = ApiClient::new();
                        if let Err(err) = client.update_product(&params).await {
                            log::warn!("product update failed: {err}");
                        }
                    });
                },
                "Save"
            }
        }
    }
}

#[component]
pub fn KeyValueList(items: Vec<(String, String)>) -> Element {
    rsx! {
        div {
            class: "space-y-2",
            for (label, value) in items {
                div {
                    class: "flex justify-between items-start py-2 border-b border-gray-200 last:border-b-0",
                    span { class: "font-medium text-gray-700 text-sm", "{label}" }
                    span { class: "font-mono text-sm bg-gray-100 px-2 py-1 rounded break-all", "{value}" }
                }
            }
        }
    }
}
