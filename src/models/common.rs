use serde::{Deserialize, Serialize};

/// Page-number based pagination request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageByNoRequest {
    pub page_no: u32,
    pub per_page: u32,
}

/// Page-number based pagination result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageByNoResult {
    pub current_page_no: u32,
    pub total_count: u64,
    pub total_page: u32,
    pub is_end: bool,
}

/// Cursor based pagination request, used for monitoring data streams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageByCursorRequest {
    pub cursor: String,
    pub per_page: u32,
}

/// Cursor based pagination result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageByCursorResult {
    pub cursor: String,
    pub total: u64,
}
