use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::notify::{Notifier, NOTIFIER};
use crate::session::{redirect_to_login, SessionStore, SESSION};
use crate::utils::error::{AppError, Result};

/// Envelope code for a successful call.
pub const SUCCESS_CODE: i32 = 200;
/// Envelope code signaling invalid or expired credentials.
pub const UNAUTHENTICATED_CODE: i32 = 401;

/// Per-call notification flags, fixed at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    pub show_success_message: bool,
    pub show_error_message: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            show_success_message: false,
            show_error_message: true,
        }
    }
}

impl RequestOptions {
    /// Default flags plus a success toast.
    pub fn with_success_message() -> Self {
        Self {
            show_success_message: true,
            ..Self::default()
        }
    }

    /// No toasts on either path.
    pub fn silent() -> Self {
        Self {
            show_success_message: false,
            show_error_message: false,
        }
    }
}

/// Server response wrapper. Unwrapped only inside the gateway.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: i32,
    #[serde(default)]
    msg: String,
    data: Option<T>,
}

/// The single choke point for backend HTTP calls.
///
/// Every API module issues its requests through this client: it attaches
/// the bearer token, serializes parameters per verb, unwraps the response
/// envelope, and applies the cross-cutting auth-teardown policy. It holds
/// no per-request state and performs no retries or caching; two identical
/// calls are two independent requests.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    notifier: Arc<Notifier>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client bound to the page origin and the process-wide session.
    pub fn new() -> Self {
        Self::with_parts(origin(), SESSION.clone(), NOTIFIER.clone())
    }

    pub fn with_parts(
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
            notifier,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Option<Value>,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::GET, url, params, options).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Option<Value>,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::POST, url, params, options).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Option<Value>,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::PUT, url, params, options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Option<Value>,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::DELETE, url, params, options).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        params: Option<Value>,
        options: RequestOptions,
    ) -> Result<T> {
        let mut full_url = format!("{}{}", self.base_url, url);

        // Query string for GET/DELETE, JSON body for POST/PUT.
        let in_query = method == Method::GET || method == Method::DELETE;
        let body = if in_query {
            if let Some(params) = &params {
                let query = build_query(params);
                if !query.is_empty() {
                    let sep = if full_url.contains('?') { '&' } else { '?' };
                    full_url.push(sep);
                    full_url.push_str(&query);
                }
            }
            None
        } else {
            params
        };

        let mut builder = self.http.request(method.clone(), &full_url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            log::error!("{method} {full_url} failed: {err}");
            let transport = AppError::Transport(err.to_string());
            if options.show_error_message {
                self.notifier.error(transport.message());
            }
            transport
        })?;

        let raw = response
            .text()
            .await
            .map_err(|err| AppError::Transport(err.to_string()))?;
        self.unwrap_envelope(&raw, options)
    }

    /// Open a response envelope: toast per the call's flags, tear down the
    /// session on an unauthenticated code, and yield the payload.
    fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        raw: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let envelope: Envelope<T> =
            serde_json::from_str(raw).map_err(|err| AppError::Decode(err.to_string()))?;

        match envelope.code {
            SUCCESS_CODE => {
                if options.show_success_message {
                    self.notifier.success(&envelope.msg);
                }
                match envelope.data {
                    Some(data) => Ok(data),
                    // Endpoints answering with an empty `data` deserialize
                    // into `()` or another null-tolerant type.
                    None => serde_json::from_value(Value::Null)
                        .map_err(|_| AppError::Decode("envelope carried no data".to_string())),
                }
            }
            UNAUTHENTICATED_CODE => {
                // Centralized auth policy: the token is cleared and the
                // browser is sent to the login page regardless of the
                // call's message flags.
                self.session.invalidate();
                redirect_to_login();
                if options.show_error_message {
                    self.notifier.error(&envelope.msg);
                }
                Err(AppError::Auth {
                    code: envelope.code,
                    message: envelope.msg,
                })
            }
            code => {
                if options.show_error_message {
                    self.notifier.error(&envelope.msg);
                }
                Err(AppError::Api {
                    code,
                    message: envelope.msg,
                })
            }
        }
    }
}

/// Serialize request parameters into the JSON object the gateway carries.
fn to_params<P: serde::Serialize>(params: &P) -> Result<Value> {
    serde_json::to_value(params).map_err(|err| AppError::Decode(err.to_string()))
}

/// Serialize a JSON object into a URL query string. Arrays become
/// comma-joined lists; null entries are skipped.
fn build_query(params: &Value) -> String {
    let Some(object) = params.as_object() else {
        return String::new();
    };
    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        };
        pairs.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&rendered)
        ));
    }
    pairs.join("&")
}

/// The page origin on the web, an empty prefix (relative URLs) elsewhere.
fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    String::new()
}

mod account;
mod auth;
mod device;
mod func_model;
mod product;
mod terminal;

pub use terminal::web_terminal_url;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;

    fn test_client() -> ApiClient {
        ApiClient::with_parts(
            "http://127.0.0.1:1",
            Arc::new(SessionStore::new()),
            Arc::new(Notifier::new()),
        )
    }

    #[test]
    fn test_success_returns_payload_unmodified() {
        let client = test_client();
        let raw = r#"{"code":200,"msg":"ok","data":{"token":"t1","refreshToken":"r1"}}"#;
        let payload: crate::models::auth::LoginResponse = client
            .unwrap_envelope(raw, RequestOptions::default())
            .unwrap();
        assert_eq!(payload.token, "t1");
        assert_eq!(payload.refresh_token, "r1");
    }

    #[test]
    fn test_success_without_flag_emits_no_notification() {
        let client = test_client();
        let raw = r#"{"code":200,"msg":"created","data":{"productId":"p1"}}"#;
        let _: crate::models::device::CreateProductResponse = client
            .unwrap_envelope(raw, RequestOptions::default())
            .unwrap();
        assert_eq!(client.notifier.pending(), 0);
    }

    #[test]
    fn test_success_with_flag_emits_success_notification() {
        let client = test_client();
        let raw = r#"{"code":200,"msg":"login ok","data":{"token":"t","refreshToken":"r"}}"#;
        let _: crate::models::auth::LoginResponse = client
            .unwrap_envelope(raw, RequestOptions::with_success_message())
            .unwrap();
        let toast = client.notifier.pop().unwrap();
        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.message, "login ok");
    }

    #[test]
    fn test_non_success_code_becomes_api_error() {
        let client = test_client();
        let raw = r#"{"code":500,"msg":"boom","data":null}"#;
        let result: Result<()> = client.unwrap_envelope(raw, RequestOptions::default());
        assert_eq!(
            result.unwrap_err(),
            AppError::Api {
                code: 500,
                message: "boom".to_string()
            }
        );
        let toast = client.notifier.pop().unwrap();
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, "boom");
    }

    #[test]
    fn test_error_notification_suppressed_when_flag_off() {
        let client = test_client();
        let raw = r#"{"code":500,"msg":"boom","data":null}"#;
        let result: Result<()> = client.unwrap_envelope(raw, RequestOptions::silent());
        assert!(result.is_err());
        assert_eq!(client.notifier.pending(), 0);
    }

    #[test]
    fn test_unauthenticated_clears_token_once_and_redirects() {
        let client = test_client();
        client.session.set_token("stale");
        let raw = r#"{"code":401,"msg":"token expired","data":null}"#;
        let result: Result<()> = client.unwrap_envelope(raw, RequestOptions::default());
        assert_eq!(
            result.unwrap_err(),
            AppError::Auth {
                code: 401,
                message: "token expired".to_string()
            }
        );
        assert_eq!(client.session.token(), None);
        assert_eq!(client.session.invalidations(), 1);
    }

    #[test]
    fn test_unauthenticated_teardown_ignores_error_flag() {
        let client = test_client();
        client.session.set_token("stale");
        let raw = r#"{"code":401,"msg":"token expired","data":null}"#;
        let result: Result<()> = client.unwrap_envelope(raw, RequestOptions::silent());
        assert!(matches!(result, Err(AppError::Auth { .. })));
        // Teardown fired even though no toast was shown.
        assert_eq!(client.session.invalidations(), 1);
        assert_eq!(client.notifier.pending(), 0);
    }

    #[test]
    fn test_malformed_envelope_is_decode_error() {
        let client = test_client();
        let result: Result<()> = client.unwrap_envelope("not json", RequestOptions::default());
        assert!(matches!(result, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_empty_data_unwraps_to_unit() {
        let client = test_client();
        let raw = r#"{"code":200,"msg":"deleted"}"#;
        let result: Result<()> = client.unwrap_envelope(raw, RequestOptions::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_query_encodes_pairs() {
        let params = serde_json::json!({
            "pageNo": 2,
            "perPage": 20,
            "name": "smart sensor",
        });
        let query = build_query(&params);
        assert!(query.contains("pageNo=2"));
        assert!(query.contains("perPage=20"));
        assert!(query.contains("name=smart%20sensor"));
    }

    #[test]
    fn test_build_query_joins_arrays_and_skips_nulls() {
        let params = serde_json::json!({
            "modelIds": ["a", "b"],
            "name": null,
        });
        assert_eq!(build_query(&params), "modelIds=a%2Cb");
    }

    #[test]
    fn test_build_query_is_deterministic() {
        // No caching or deduplication: the same descriptor always renders
        // the same request.
        let params = serde_json::json!({"pageNo": 1, "perPage": 10});
        assert_eq!(build_query(&params), build_query(&params));
    }
}
