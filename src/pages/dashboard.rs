use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::card::Card;
use crate::components::common::{ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::hooks::use_api_simple;
use crate::models::common::PageByNoRequest;
use crate::models::device::{GetDevicesRequest, GetProductsRequest};
use crate::utils::format::commafy;

#[derive(Clone, PartialEq)]
struct DashboardStats {
    products: u64,
    devices: u64,
    online_devices: usize,
}

#[component]
pub fn Dashboard() -> Element {
    let state = use_api_simple::<DashboardStats>();

    use_effect(move || {
        let mut loading = state.loading;
        let mut data = state.data;
        spawn(async move {
            loading.set(true);
            let client = ApiClient::new();
            let products = client
                .get_products(&GetProductsRequest {
                    page: PageByNoRequest { page_no: 1, per_page: 1 },
                    name: String::new(),
                })
                .await;
            let devices = client
                .get_devices(&GetDevicesRequest {
                    page: PageByNoRequest { page_no: 1, per_page: 50 },
                    product_id: String::new(),
                    name: String::new(),
                })
                .await;
            let result = products.and_then(|products| {
                devices.map(|devices| DashboardStats {
                    products: products.page_result.total_count,
                    devices: devices.page_result.total_count,
                    online_devices: devices.devices.iter().filter(|d| d.is_online).count(),
                })
            });
            data.set(Some(result));
            loading.set(false);
        });
    });

    rsx! {
        PageContainer {
            PageHeader {
                title: "Dashboard".to_string(),
                subtitle: Some("SmartMesh fleet at a glance".to_string()),
                icon: &icondata::AiDashboardOutlined,
            }

            if state.is_loading() {
                Card {
                    title: "Loading",
                    LoadingState { message: Some("Loading fleet statistics...".to_string()) }
                }
            } else if let Some(stats) = state.value() {
                div {
                    class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                    StatCard { label: "Products", value: commafy(stats.products as i64), color: "blue" }
                    StatCard { label: "Devices", value: commafy(stats.devices as i64), color: "gray" }
                    StatCard { label: "Online (first page)", value: commafy(stats.online_devices as i64), color: "green" }
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
fn StatCard(label: &'static str, value: String, color: &'static str) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 flex justify-between items-center",
            span { class: "text-gray-600", "{label}" }
            span {
                class: match color {
                    "blue" => "text-2xl font-bold text-blue-600",
                    "green" => "text-2xl font-bold text-green-600",
                    _ => "text-2xl font-bold text-gray-600",
                },
                "{value}"
            }
        }
    }
}
