//! Static route-tree declarations.
//!
//! The tree drives the sidebar menu; the concrete path-to-page binding
//! lives in the `Routable` enum in `app.rs`. Hidden records (detail pages)
//! stay in the tree so their menu highlight can follow `active_path`.

use icondata::Icon as IconData;

/// Display metadata attached to a route record.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMeta {
    pub title: &'static str,
    pub icon: Option<&'static IconData>,
    /// Hidden records do not render in the sidebar.
    pub is_hide: bool,
    /// Menu entry to highlight while this record is active.
    pub active_path: Option<&'static str>,
}

impl RouteMeta {
    const fn titled(title: &'static str) -> Self {
        Self {
            title,
            icon: None,
            is_hide: false,
            active_path: None,
        }
    }
}

/// One node of the route tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AppRouteRecord {
    pub name: &'static str,
    pub path: &'static str,
    pub meta: RouteMeta,
    pub children: Vec<AppRouteRecord>,
}

fn dashboard_routes() -> AppRouteRecord {
    AppRouteRecord {
        name: "Dashboard",
        path: "/",
        meta: RouteMeta {
            icon: Some(&icondata::AiDashboardOutlined),
            ..RouteMeta::titled("Dashboard")
        },
        children: Vec::new(),
    }
}

fn device_manager_routes() -> AppRouteRecord {
    AppRouteRecord {
        name: "DeviceManager",
        path: "/device",
        meta: RouteMeta {
            icon: Some(&icondata::AiApartmentOutlined),
            ..RouteMeta::titled("Device Manager")
        },
        children: vec![
            AppRouteRecord {
                name: "Product",
                path: "/device/product",
                meta: RouteMeta::titled("Products"),
                children: Vec::new(),
            },
            AppRouteRecord {
                name: "Device",
                path: "/device/device",
                meta: RouteMeta::titled("Devices"),
                children: Vec::new(),
            },
            AppRouteRecord {
                name: "FuncModel",
                path: "/device/func-model",
                meta: RouteMeta::titled("Function Models"),
                children: Vec::new(),
            },
            AppRouteRecord {
                name: "ProductDetail",
                path: "/device/product/detail",
                meta: RouteMeta {
                    is_hide: true,
                    active_path: Some("/device/product"),
                    ..RouteMeta::titled("Product Detail")
                },
                children: Vec::new(),
            },
            AppRouteRecord {
                name: "DeviceDetail",
                path: "/device/device/detail",
                meta: RouteMeta {
                    is_hide: true,
                    active_path: Some("/device/device"),
                    ..RouteMeta::titled("Device Detail")
                },
                children: Vec::new(),
            },
        ],
    }
}

fn system_routes() -> AppRouteRecord {
    AppRouteRecord {
        name: "System",
        path: "/system",
        meta: RouteMeta {
            icon: Some(&icondata::AiSettingOutlined),
            ..RouteMeta::titled("System")
        },
        children: vec![AppRouteRecord {
            name: "Account",
            path: "/system/account",
            meta: RouteMeta::titled("Accounts"),
            children: Vec::new(),
        }],
    }
}

/// All modular routes, in sidebar order.
pub fn route_modules() -> Vec<AppRouteRecord> {
    vec![dashboard_routes(), device_manager_routes(), system_routes()]
}

/// Menu path to highlight for the current location.
///
/// Picks the deepest record whose path covers `current`; hidden records
/// delegate the highlight to their `active_path`, which keeps the parent
/// list entry lit while a detail page is open.
pub fn active_menu_path(current: &str) -> &'static str {
    let mut best_path: &'static str = "/";
    let mut best_active: Option<&'static str> = None;
    let mut best_len = 0usize;

    for module in route_modules() {
        for record in std::iter::once(&module).chain(module.children.iter()) {
            let covered = if record.path == "/" {
                current == "/"
            } else {
                current == record.path
                    || (current.starts_with(record.path)
                        && current[record.path.len()..].starts_with('/'))
            };
            if covered && record.path.len() >= best_len {
                best_len = record.path.len();
                best_path = record.path;
                best_active = record.meta.active_path;
            }
        }
    }

    best_active.unwrap_or(best_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_module_paths() {
        let modules = route_modules();
        let device = modules
            .iter()
            .find(|record| record.name == "DeviceManager")
            .unwrap();
        let paths: Vec<&str> = device.children.iter().map(|child| child.path).collect();
        assert!(paths.contains(&"/device/product"));
        assert!(paths.contains(&"/device/device"));
        assert!(paths.contains(&"/device/func-model"));
    }

    #[test]
    fn test_detail_routes_are_hidden_with_active_path() {
        let modules = route_modules();
        let device = modules
            .iter()
            .find(|record| record.name == "DeviceManager")
            .unwrap();
        let detail = device
            .children
            .iter()
            .find(|child| child.name == "ProductDetail")
            .unwrap();
        assert!(detail.meta.is_hide);
        assert_eq!(detail.meta.active_path, Some("/device/product"));
    }

    #[test]
    fn test_visible_menu_excludes_hidden_records() {
        let modules = route_modules();
        for module in &modules {
            assert!(!module.meta.is_hide);
        }
    }

    #[test]
    fn test_active_menu_path_matches_list_pages() {
        assert_eq!(active_menu_path("/"), "/");
        assert_eq!(active_menu_path("/device/product"), "/device/product");
        assert_eq!(active_menu_path("/system/account"), "/system/account");
    }

    #[test]
    fn test_detail_pages_highlight_their_list_entry() {
        assert_eq!(
            active_menu_path("/device/product/detail/p-1"),
            "/device/product"
        );
        assert_eq!(
            active_menu_path("/device/device/detail/d-1"),
            "/device/device"
        );
    }

    #[test]
    fn test_unknown_path_falls_back_to_dashboard() {
        assert_eq!(active_menu_path("/nowhere"), "/");
    }
}
