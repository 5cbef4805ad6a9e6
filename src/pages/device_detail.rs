use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::card::Card;
use crate::components::common::{EmptyState, ErrorState, LoadingState};
use crate::components::page::{PageContainer, PageHeader};
use crate::hooks::use_api_simple;
use crate::models::common::PageByCursorRequest;
use crate::models::device::{
    Device, GetMonitorDataRequest, GetMonitorDataResponse, UpdateDeviceRequest,
};
use crate::pages::product_detail::KeyValueList;
use crate::styles::combinations::*;
use crate::utils::format::timestamp_to_time;

#[component]
pub fn DeviceDetail(device_id: String) -> Element {
    let state = use_api_simple::<Device>();
    let monitor_id = device_id.clone();

    use_effect(use_reactive!(|device_id| {
        let mut loading = state.loading;
        let mut data = state.data;
        spawn(async move {
            loading.set(true);
            let client = ApiClient::new();
            data.set(Some(client.get_device(&device_id).await));
            loading.set(false);
        });
    }));

    rsx! {
        PageContainer {
            PageHeader {
                title: "Device Detail".to_string(),
                subtitle: None,
            }

            if state.is_loading() {
                Card {
                    title: "Loading",
                    LoadingState { message: None }
                }
            } else if let Some(device) = state.value() {
                div {
                    class: "space-y-6",
                    Card {
                        title: "Device Information",
                        header_right: rsx! { TerminalLink {} },
                        KeyValueList {
                            items: vec![
                                ("Device ID:".to_string(), device.device_id.clone()),
                                ("Name:".to_string(), device.name.clone()),
                                ("Product:".to_string(), device.product_name.clone()),
                                ("Description:".to_string(), device.description.clone()),
                                (
                                    "Online:".to_string(),
                                    if device.is_online { "Yes".to_string() } else { "No".to_string() },
                                ),
                                ("Last Online:".to_string(), timestamp_to_time(device.last_online_time, true)),
                                ("Created:".to_string(), timestamp_to_time(device.created_at, true)),
                                ("Updated:".to_string(), timestamp_to_time(device.updated_at, true)),
                            ]
                        }
                    }
                    Card {
                        title: "Edit",
                        EditDeviceForm { device: device.clone() }
                    }
                    MonitorCard {
                        device_id: monitor_id.clone(),
                        product_id: device.product_id.clone(),
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

/// Link to the device's web terminal, proxied over WebSocket with the
/// session token in the path.
#[component]
fn TerminalLink() -> Element {
    let client = ApiClient::new();
    let url = client.web_terminal_url();

    rsx! {
        if let Some(url) = url {
            a {
                href: "{url}",
                target: "_blank",
                class: "px-3 py-1 text-sm border border-gray-300 rounded hover:bg-gray-100",
                "Open Web Terminal"
            }
        }
    }
}

#[component]
fn EditDeviceForm(device: Device) -> Element {
    let mut name = use_signal(|| device.name.clone());
    let mut description = use_signal(|| device.description.clone());
    let device_id = device.device_id.clone();

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
                    let params = UpdateDeviceRequest {
                        device_id: device_id.clone(),
                        name: name.read().clone(),
                        description: description.read().clone(),
                    };
                    spawn(async move {
                        let client = ApiClient::new();
                        if let Err(err) = client.update_device(&params).await {
                            log::warn!("device update failed: {err}");
                        }
                    });
                },
                "Save"
            }
        }
    }
}

#[component]
fn MonitorCard(device_id: String, product_id: String) -> Element {
    let state = use_api_simple::<GetMonitorDataResponse>();

    use_effect(use_reactive!(|device_id, product_id| {
        let mut loading = state.loading;
        let mut data = state.data;
        spawn(async move {
            loading.set(true);
            let client = ApiClient::new();
            let result = client
                .get_monitor_data(&GetMonitorDataRequest {
                    page: PageByCursorRequest { cursor: String::new(), per_page: 50 },
                    device_id,
                    product_id,
                    name: String::new(),
                    query_base_time: chrono::Utc::now().timestamp_millis(),
                    before_second: 3600,
                })
                .await;
            data.set(Some(result));
            loading.set(false);
        });
    }));

    rsx! {
        Card {
            title: "Monitoring (last hour)",
            if state.is_loading() {
                LoadingState { message: None }
            } else if let Some(monitor) = state.value() {
                if monitor.metric_data.values.is_empty() {
                    EmptyState { message: "No samples in the selected window.".to_string() }
                } else {
                    div {
                        class: "space-y-2",
                        div {
                            class: "text-sm text-gray-600",
                            "Metric: {monitor.metric_data.name} ({monitor.metric_data.values.len()} samples)"
                        }
                        div {
                            class: "max-h-64 overflow-y-auto space-y-1",
                            for sample in monitor.metric_data.values.iter() {
                                div {
                                    class: "flex justify-between text-sm font-mono",
                                    span { class: "text-gray-500", {timestamp_to_time(sample.t, true)} }
                                    span { "{sample.v}" }
                                }
                            }
                        }
                    }
                }
            } else if let Some(err) = state.error() {
                ErrorState { error: err.to_string(), title: None }
            }
        }
    }
}
