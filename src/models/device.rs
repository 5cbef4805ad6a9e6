use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{PageByCursorRequest, PageByCursorResult, PageByNoRequest, PageByNoResult};

/// A product groups devices sharing the same function models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub enable: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub creator: String,
    pub editor: String,
    pub func_models: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub product_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetProductsRequest {
    #[serde(flatten)]
    pub page: PageByNoRequest,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetProductsResponse {
    pub products: Vec<Product>,
    pub page_result: PageByNoResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub product_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductStatusRequest {
    pub product_id: String,
    pub to_enable: bool,
}

/// A device registered under a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
    pub product_id: String,
    pub product_name: String,
    pub name: String,
    pub description: String,
    pub enable: bool,
    pub is_online: bool,
    pub last_online_time: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub creator: String,
    pub editor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceRequest {
    pub product_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeviceResponse {
    pub device_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetDevicesRequest {
    #[serde(flatten)]
    pub page: PageByNoRequest,
    pub product_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetDevicesResponse {
    pub devices: Vec<Device>,
    pub page_result: PageByNoResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceRequest {
    pub device_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceStatusRequest {
    pub device_id: String,
    pub to_enable: bool,
}

/// Query for a window of monitoring samples before a base time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetMonitorDataRequest {
    #[serde(flatten)]
    pub page: PageByCursorRequest,
    pub device_id: String,
    pub product_id: String,
    pub name: String,
    pub query_base_time: i64,
    pub before_second: i64,
}

/// A named metric series with its label set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricResults {
    pub name: String,
    pub labels: HashMap<String, String>,
    pub values: Vec<MetricValue>,
}

/// A single timestamped sample.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricValue {
    pub t: i64,
    pub v: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetMonitorDataResponse {
    pub metric_data: MetricResults,
    pub page_result: PageByCursorResult,
}
