use super::{to_params, ApiClient, RequestOptions};
use crate::models::account::{
    CreateAccountRequest, CreateAccountResponse, DeleteAccountRequest, GetAccountsRequest,
    GetAccountsResponse, ModifyAccountRequest, ModifyAccountStatusRequest,
};
use crate::utils::error::Result;

/// Account management API
///
/// The account service exposes an RPC-style surface: every operation is a
/// POST under `/api/account/*`.
impl ApiClient {
    pub async fn create_account(
        &self,
        params: &CreateAccountRequest,
    ) -> Result<CreateAccountResponse> {
        self.post(
            "/api/account/createAccount",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn modify_account(&self, params: &ModifyAccountRequest) -> Result<()> {
        self.post(
            "/api/account/modifyAccount",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn delete_account(&self, params: &DeleteAccountRequest) -> Result<()> {
        self.post(
            "/api/account/deleteAccount",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn get_accounts(&self, params: &GetAccountsRequest) -> Result<GetAccountsResponse> {
        self.post(
            "/api/account/getAccounts",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn modify_account_status(&self, params: &ModifyAccountStatusRequest) -> Result<()> {
        self.post(
            "/api/account/modifyAccountStatus",
            Some(to_params(params)?),
            RequestOptions::default(),
        )
        .await
    }
}
