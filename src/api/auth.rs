use super::{to_params, ApiClient, RequestOptions};
use crate::models::auth::{LoginParams, LoginResponse, UserInfo};
use crate::utils::error::Result;

/// Authentication API
impl ApiClient {
    /// Log in and surface the backend's welcome message as a toast.
    pub async fn login(&self, params: &LoginParams) -> Result<LoginResponse> {
        self.post(
            "/api/auth/login",
            Some(to_params(params)?),
            RequestOptions::with_success_message(),
        )
        .await
    }

    /// Fetch the account bound to the current session.
    pub async fn get_user_info(&self) -> Result<UserInfo> {
        self.post("/api/account/getCurrentAccount", None, RequestOptions::default())
            .await
    }
}
