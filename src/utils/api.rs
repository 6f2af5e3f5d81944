use gloo_net::http::Request;
use gloo_net::Error as GlooError;
use crate::config;
use serde::Serialize;

/// Entry point for calls to the payment backend
pub struct Api;

/// Request wrapper that resolves paths against the configured backend URL.
/// The gloo request is only built when the wrapper is sent.
#[derive(Debug)]
pub struct RequestWrapper {
    url: String,
    headers: Vec<(String, String)>,
    body_data: Option<String>,
}

impl RequestWrapper {
    pub(crate) fn post_to(base: &str, path: &str) -> Self {
        Self {
            url: config::endpoint(base, path),
            headers: Vec::new(),
            body_data: None,
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.body_data = Some(body_string);
        Ok(self)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body_data.as_deref()
    }

    /// Send the request once. Any status code is handed back to the caller.
    pub async fn send(self) -> Result<gloo_net::http::Response, GlooError> {
        gloo_console::log!("POST", self.url.as_str());
        let mut request = Request::post(&self.url);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        if let Some(body) = self.body_data {
            request = request.body(body);
        }
        let response = request.send().await?;
        gloo_console::log!("Response status:", response.status());
        Ok(response)
    }
}

impl Api {
    /// Create a POST request against the backend URL
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::post_to(&config::get_backend_url(), path)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::payment::client::PAY_PATH;

    #[test]
    fn test_json_post_targets_pay_with_json_content_type() {
        let wrapper = RequestWrapper::post_to("http://localhost:8000", PAY_PATH)
            .json(&json!({"email": "payer@example.com", "amount": 19.99, "currency": "EUR"}))
            .unwrap();

        assert_eq!(wrapper.url(), "http://localhost:8000/pay");
        assert_eq!(
            wrapper.headers(),
            &[("Content-Type".to_string(), "application/json".to_string())]
        );
        assert_eq!(
            wrapper.body(),
            Some(r#"{"email":"payer@example.com","amount":19.99,"currency":"EUR"}"#)
        );
    }

    #[test]
    fn test_api_post_uses_configured_backend() {
        let wrapper = Api::post(PAY_PATH);
        assert_eq!(
            wrapper.url(),
            config::endpoint(&config::get_backend_url(), PAY_PATH)
        );
        assert!(wrapper.headers().is_empty());
        assert_eq!(wrapper.body(), None);
    }
}
