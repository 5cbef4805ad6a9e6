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
    CreateDeviceRequest, GetDevicesRequest, GetDevicesResponse, UpdateDeviceStatusRequest,
};
use crate::styles::combinations::*;
use crate::utils::format::timestamp_to_time;

const PER_PAGE: u32 = 10;

#[component]
pub fn DeviceList() -> Element {
    let state = use_api_simple::<GetDevicesResponse>();
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
                .get_devices(&GetDevicesRequest {
                    page: PageByNoRequest { page_no: current_page, per_page: PER_PAGE },
                    product_id: String::new(),
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
                title: "Devices".to_string(),
                subtitle: Some("Registered devices across all products".to_string()),
            }

            Card {
                title: "Register Device",
                CreateDeviceForm {
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
                    title: "Device List",
                    content_class: "p-6 space-y-4",
                    if response.devices.is_empty() {
                        EmptyState { message: "No devices yet.".to_string() }
                    } else {
                        div {
                            class: TABLE_CONTAINER,
                            table {
                                class: TABLE,
                                thead {
                                    tr {
                                        class: TABLE_HEADER_ROW,
                                        th { class: TABLE_HEADER_CELL, "Name" }
                                        th { class: TABLE_HEADER_CELL, "Product" }
                                        th { class: TABLE_HEADER_CELL, "Online" }
                                        th { class: TABLE_HEADER_CELL, "Status" }
                                        th { class: TABLE_HEADER_CELL, "Last Online" }
                                        th { class: TABLE_HEADER_CELL, "Actions" }
                                    }
                                }
                                tbody {
                                    for (idx, device) in response.devices.iter().enumerate() {
                                        tr {
                                            class: if idx % 2 == 0 { TABLE_ROW_EVEN } else { TABLE_ROW_ODD },
                                            td {
                                                class: TABLE_CELL,
                                                Link {
                                                    to: Route::DeviceDetailPage { device_id: device.device_id.clone() },
                                                    class: "text-blue-600 hover:underline",
                                                    "{device.name}"
                                                }
                                            }
                                            td { class: TABLE_CELL, "{device.product_name}" }
                                            td {
                                                class: TABLE_CELL,
                                                span {
                                                    class: if device.is_online { BADGE_ONLINE } else { BADGE_OFFLINE },
                                                    if device.is_online { "Online" } else { "Offline" }
                                                }
                                            }
                                            td {
                                                class: TABLE_CELL,
                                                span {
                                                    class: if device.enable { BADGE_ENABLED } else { BADGE_DISABLED },
                                                    if device.enable { "Enabled" } else { "Disabled" }
                                                }
                                            }
                                            td { class: TABLE_CELL, {timestamp_to_time(device.last_online_time, true)} }
                                            td {
                                                class: TABLE_CELL,
                                                DeviceActions {
                                                    device_id: device.device_id.clone(),
                                                    enabled: device.enable,
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
fn CreateDeviceForm(on_created: EventHandler<()>) -> Element {
    let mut product_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    rsx! {
        div {
            class: "flex gap-3 items-center",
            input {
                class: INPUT,
                r#type: "text",
                placeholder: "Product ID",
                value: "{product_id}",
                oninput: move |evt| product_id.set(evt.value()),
            }
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
                    let params = CreateDeviceRequest {
                        product_id: product_id.read().clone(),
                        name: name.read().clone(),
                        description: description.read().clone(),
                    };
                    if params.product_id.is_empty() || params.name.is_empty() {
                        return;
                    }
                    spawn(async move {
                        let client = ApiClient::new();
                        if client.create_device(&params).await.is_ok() {
                            product_id.set(String::new());
                            name.set(String::new());
                            description.set(String::new());
                            on_created.call(());
                        }
                    });
                },
                "Register"
            }
        }
    }
}

#[component]
fn DeviceActions(device_id: String, enabled: bool, on_done: EventHandler<()>) -> Element {
    let toggle_id = device_id.clone();
    let delete_id = device_id;

    rsx! {
        div {
            class: "flex gap-2",
            button {
                class: "px-2 py-1 text-xs border border-gray-300 rounded hover:bg-gray-100",
                onclick: move |_| {
                    let device_id = toggle_id.clone();
                    spawn(async move {
                        let client = ApiClient::new();
                        let result = client
                            .update_device_status(&UpdateDeviceStatusRequest {
                                device_id,
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
                    let device_id = delete_id.clone();
                    spawn(async move {
                        let client = ApiClient::new();
                        if client.delete_devices(&[device_id]).await.is_ok() {
                            on_done.call(());
                        }
                    });
                },
                "Delete"
            }
        }
    }
}
