use serde::{Deserialize, Serialize};

use super::common::{PageByNoRequest, PageByNoResult};

/// One row of the account management table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountListItem {
    pub id: u64,
    pub user_name: String,
    pub nick_name: String,
    pub user_email: String,
    pub user_roles: Vec<String>,
    /// "1" enabled, "2" disabled.
    pub status: String,
    pub create_time: String,
    pub update_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub user_name: String,
    pub password: String,
    pub nick_name: String,
    pub user_email: String,
    pub user_roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModifyAccountRequest {
    pub id: u64,
    pub nick_name: String,
    pub user_email: String,
    pub user_roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountRequest {
    pub ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountsRequest {
    #[serde(flatten)]
    pub page: PageByNoRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountsResponse {
    pub accounts: Vec<AccountListItem>,
    pub page_result: PageByNoResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModifyAccountStatusRequest {
    pub id: u64,
    pub status: String,
}
