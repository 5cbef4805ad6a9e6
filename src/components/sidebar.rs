use dioxus::prelude::*;
use dioxus_router::{use_route, Link};

use crate::app::Route;
use crate::components::icon::Icon;
use crate::router::{active_menu_path, route_modules, AppRouteRecord};

#[component]
pub fn Sidebar() -> Element {
    let modules = route_modules();

    rsx! {
        aside {
            class: "w-64 bg-gradient-to-b from-slate-900 via-slate-800 to-slate-900 border-r border-slate-700/30 min-h-screen flex flex-col flex-shrink-0 shadow-xl",
            // Logo and brand
            div {
                class: "px-6 py-4 border-b border-slate-700/30",
                Link {
                    to: Route::DashboardPage {},
                    class: "flex items-center space-x-3",
                    div {
                        class: "flex flex-col",
                        span {
                            class: "text-lg font-bold text-slate-100",
                            "SmartMesh"
                        }
                        span {
                            class: "text-xs text-slate-400",
                            "Device Management"
                        }
                    }
                }
            }

            // Navigation from the static route tree
            nav {
                class: "flex-1 px-3 py-4 space-y-1 overflow-y-auto",
                for module in modules {
                    SidebarModule { record: module }
                }
            }
        }
    }
}

#[component]
fn SidebarModule(record: AppRouteRecord) -> Element {
    let visible_children: Vec<AppRouteRecord> = record
        .children
        .iter()
        .filter(|child| !child.meta.is_hide)
        .cloned()
        .collect();

    rsx! {
        div {
            class: "space-y-1",
            if visible_children.is_empty() {
                SidebarLink { record: record.clone() }
            } else {
                div {
                    class: "px-3 pt-3 pb-1 flex items-center gap-2 text-xs font-semibold uppercase tracking-wider text-slate-500",
                    if let Some(icon) = record.meta.icon {
                        Icon { icon, class: "w-4 h-4" }
                    }
                    "{record.meta.title}"
                }
                for child in visible_children {
                    SidebarLink { record: child }
                }
            }
        }
    }
}

#[component]
fn SidebarLink(record: AppRouteRecord) -> Element {
    let route = use_route::<Route>();
    // Detail pages resolve to their list entry via the tree's active_path.
    let current_path = route.to_string();
    let is_active = active_menu_path(&current_path) == record.path;

    let class_str = if is_active {
        "flex items-center gap-2 px-3 py-2 rounded-lg text-sm font-medium bg-blue-600/20 text-blue-300"
    } else {
        "flex items-center gap-2 px-3 py-2 rounded-lg text-sm font-medium text-slate-300 hover:bg-slate-700/50 hover:text-white"
    };

    rsx! {
        Link {
            to: route_for_path(record.path),
            class: class_str,
            if let Some(icon) = record.meta.icon {
                Icon { icon, class: "w-4 h-4" }
            }
            span { "{record.meta.title}" }
        }
    }
}

/// Map a route-tree path to its typed route. Dynamic detail paths are
/// hidden from the menu, so only static entries appear here.
fn route_for_path(path: &str) -> Route {
    match path {
        "/device/product" => Route::ProductPage {},
        "/device/device" => Route::DevicePage {},
        "/device/func-model" => Route::FuncModelPage {},
        "/system/account" => Route::AccountPage {},
        _ => Route::DashboardPage {},
    }
}
