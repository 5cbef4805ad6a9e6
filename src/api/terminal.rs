use super::ApiClient;

/// Build the web-terminal WebSocket URL for a proxy base and session token.
///
/// The scheme is swapped to its WebSocket counterpart and the token rides
/// as the final path segment; the proxy authenticates the upgrade from it.
pub fn web_terminal_url(base: &str, token: &str) -> String {
    let base = base.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    format!("{ws_base}/device-manager/createWebTerminal/{token}")
}

impl ApiClient {
    /// Web-terminal URL for the current session, or `None` when there is
    /// no token to embed.
    pub fn web_terminal_url(&self) -> Option<String> {
        let token = self.session().token()?;
        Some(web_terminal_url(self.base_url(), &token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notifier;
    use crate::session::SessionStore;
    use std::sync::Arc;

    #[test]
    fn test_https_becomes_wss() {
        assert_eq!(
            web_terminal_url("https://host/", "abc"),
            "wss://host/device-manager/createWebTerminal/abc"
        );
    }

    #[test]
    fn test_http_becomes_ws() {
        assert_eq!(
            web_terminal_url("http://host:8080", "tok"),
            "ws://host:8080/device-manager/createWebTerminal/tok"
        );
    }

    #[test]
    fn test_client_url_requires_token() {
        let session = Arc::new(SessionStore::new());
        let client = ApiClient::with_parts(
            "https://proxy.example",
            session.clone(),
            Arc::new(Notifier::new()),
        );
        assert_eq!(client.web_terminal_url(), None);

        session.set_token("abc");
        assert_eq!(
            client.web_terminal_url().as_deref(),
            Some("wss://proxy.example/device-manager/createWebTerminal/abc")
        );
    }
}
