use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::components::layout::AppLayout;
use crate::models::auth::UserInfo;
use crate::pages::{
    account::Account, dashboard::Dashboard, device::DeviceList, device_detail::DeviceDetail,
    func_model::FuncModelList, login::Login, product::Product, product_detail::ProductDetail,
};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    LoginPage {},
    #[route("/")]
    DashboardPage {},
    #[route("/device/product")]
    ProductPage {},
    #[route("/device/product/detail/:product_id")]
    ProductDetailPage { product_id: String },
    #[route("/device/device")]
    DevicePage {},
    #[route("/device/device/detail/:device_id")]
    DeviceDetailPage { device_id: String },
    #[route("/device/func-model")]
    FuncModelPage {},
    #[route("/system/account")]
    AccountPage {},
}

#[component]
pub fn LoginPage() -> Element {
    rsx! { Login {} }
}

#[component]
pub fn DashboardPage() -> Element {
    rsx! { AppLayout { Dashboard {} } }
}

#[component]
pub fn ProductPage() -> Element {
    rsx! { AppLayout { Product {} } }
}

#[component]
pub fn ProductDetailPage(product_id: String) -> Element {
    rsx! { AppLayout { ProductDetail { product_id } } }
}

#[component]
pub fn DevicePage() -> Element {
    rsx! { AppLayout { DeviceList {} } }
}

#[component]
pub fn DeviceDetailPage(device_id: String) -> Element {
    rsx! { AppLayout { DeviceDetail { device_id } } }
}

#[component]
pub fn FuncModelPage() -> Element {
    rsx! { AppLayout { FuncModelList {} } }
}

#[component]
pub fn AccountPage() -> Element {
    rsx! { AppLayout { Account {} } }
}

// Global state: the logged-in account shown in the header.
pub static CURRENT_USER: GlobalSignal<Option<UserInfo>> = Signal::global(|| None);

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
