/// Composite style constants
pub mod combinations {
    // Buttons
    pub const BUTTON_PRIMARY: &str =
        "px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors font-medium";
    pub const BUTTON_DISABLED: &str = "opacity-50 cursor-not-allowed";

    // Inputs
    pub const INPUT: &str =
        "w-full text-sm p-3 rounded border border-gray-300 bg-white focus:outline-none focus:ring-2 focus:ring-blue-500";

    // States
    pub const LOADING: &str = "text-center py-8 text-gray-500";
    pub const ERROR: &str = "text-red-500 p-4 bg-red-50 border border-red-200 rounded";
    pub const EMPTY: &str = "text-center py-8 text-gray-500";

    // Tables
    pub const TABLE_CONTAINER: &str =
        "w-full overflow-x-auto border border-gray-200 rounded-lg";
    pub const TABLE: &str = "w-full border-collapse table-auto";
    pub const TABLE_HEADER_ROW: &str = "bg-gray-50 border-b border-gray-200";
    pub const TABLE_HEADER_CELL: &str =
        "px-4 py-2 text-left font-semibold text-gray-700 border-r border-gray-200";
    pub const TABLE_ROW_EVEN: &str = "bg-white";
    pub const TABLE_ROW_ODD: &str = "bg-gray-50";
    pub const TABLE_CELL: &str = "px-4 py-2 text-gray-700 border-r border-gray-200";

    // Status badges
    pub const BADGE_ENABLED: &str =
        "inline-block px-2 py-1 text-xs font-medium rounded bg-green-100 text-green-700";
    pub const BADGE_DISABLED: &str =
        "inline-block px-2 py-1 text-xs font-medium rounded bg-gray-100 text-gray-600";
    pub const BADGE_ONLINE: &str =
        "inline-block px-2 py-1 text-xs font-medium rounded bg-blue-100 text-blue-700";
    pub const BADGE_OFFLINE: &str =
        "inline-block px-2 py-1 text-xs font-medium rounded bg-red-100 text-red-700";
}

/// Conditional style combinator
pub fn conditional_class(
    condition: bool,
    true_class: &'static str,
    false_class: &'static str,
) -> &'static str {
    if condition {
        true_class
    } else {
        false_class
    }
}
