use serde::{Deserialize, Serialize};

use super::common::{PageByNoRequest, PageByNoResult};

/// A function model: a device's declared property, event, or service schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuncModel {
    pub func_model_id: String,
    #[serde(flatten)]
    pub data: FuncModelDataType,
    /// "property" | "event" | "service".
    #[serde(rename = "type")]
    pub model_type: String,
    pub input: Vec<FuncModelDataType>,
    pub output: Vec<FuncModelDataType>,
    pub property_type: String,
    pub event_type: String,
    pub service_type: String,
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub creator: String,
    pub editor: String,
}

/// A named, typed value in a function model signature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuncModelDataType {
    pub name: String,
    /// Unique key within the owning product.
    pub key: String,
    pub data_type: String,
    pub spec: DataSpec,
}

/// Constraints attached to a data type. Which fields apply depends on
/// `data_type` (number bounds, string/array length, enum and bool meanings).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSpec {
    #[serde(default)]
    pub max: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub step: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub len: u32,
    #[serde(default)]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<BoolMean>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub r#enum: Vec<EnumMean>,
    /// Element spec for array element types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Box<DataSpec>>,
}

/// Human-readable meaning of a boolean value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoolMean {
    pub true_value: String,
    pub false_value: String,
}

/// Human-readable meaning of an enum variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnumMean {
    pub name: String,
    pub mean: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetFuncModelsRequest {
    #[serde(flatten)]
    pub page: PageByNoRequest,
    pub model_ids: Vec<String>,
    pub name: String,
    pub model_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetFuncModelsResponse {
    pub func_models: Vec<FuncModel>,
    pub page_result: PageByNoResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuncModelRequest {
    #[serde(flatten)]
    pub data: FuncModelDataType,
    #[serde(rename = "type")]
    pub model_type: String,
    pub input: Vec<FuncModelDataType>,
    pub output: Vec<FuncModelDataType>,
    pub property_type: String,
    pub event_type: String,
    pub service_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuncModelResponse {
    pub func_model_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_func_model_wire_shape() {
        let raw = r#"{
            "funcModelId": "fm-1",
            "name": "temperature",
            "key": "temp",
            "dataType": "number",
            "spec": {"max": 100.0, "min": -40.0, "step": 0.1, "unit": "C"},
            "type": "property",
            "input": [],
            "output": [],
            "propertyType": "rw",
            "eventType": "",
            "serviceType": "",
            "description": "ambient temperature",
            "createdAt": 1700000000000,
            "updatedAt": 1700000000000,
            "creator": "admin",
            "editor": "admin"
        }"#;
        let model: FuncModel = serde_json::from_str(raw).unwrap();
        assert_eq!(model.func_model_id, "fm-1");
        assert_eq!(model.model_type, "property");
        assert_eq!(model.data.key, "temp");
        assert_eq!(model.data.spec.unit, "C");
        assert!(model.data.spec.r#enum.is_empty());
    }
}
