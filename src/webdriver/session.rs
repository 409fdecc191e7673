use crate::utils::error::{CaptureError, Result};
use crate::webdriver::protocol::{chrome_capabilities, css_locator, ELEMENT_KEY};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde_json::{json, Value};

/// Reference to a located page element.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
}

/// One WebDriver browser session.
pub struct Session {
    client: Client,
    base_url: String,
    session_id: String,
}

impl Session {
    /// Open a new headless Chrome session against the remote end at `webdriver_url`.
    pub async fn start(webdriver_url: &str) -> Result<Self> {
        let client = Client::new();
        let base_url = webdriver_url.trim_end_matches('/').to_string();

        tracing::debug!("Creating WebDriver session at: {}", base_url);
        let response = client
            .post(format!("{}/session", base_url))
            .json(&chrome_capabilities())
            .send()
            .await?;

        let value = Self::unwrap_value(response).await?;
        let session_id = value["sessionId"]
            .as_str()
            .ok_or_else(|| CaptureError::WebDriverError {
                error: "invalid response".to_string(),
                message: "new session response carried no sessionId".to_string(),
            })?
            .to_string();

        tracing::debug!("WebDriver session created: {}", session_id);
        Ok(Self {
            client,
            base_url,
            session_id,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub async fn navigate(&self, url: &str) -> Result<()> {
        tracing::debug!("Navigating to: {}", url);
        let response = self
            .client
            .post(self.command_url("url"))
            .json(&json!({ "url": url }))
            .send()
            .await?;
        Self::unwrap_value(response).await?;
        Ok(())
    }

    pub async fn find_element(&self, selector: &str) -> Result<Element> {
        let response = self
            .client
            .post(self.command_url("element"))
            .json(&css_locator(selector))
            .send()
            .await?;

        let value = match Self::unwrap_value(response).await {
            Ok(value) => value,
            Err(CaptureError::WebDriverError { error, .. }) if error == "no such element" => {
                return Err(CaptureError::ElementNotFound {
                    selector: selector.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let id = value[ELEMENT_KEY]
            .as_str()
            .ok_or_else(|| CaptureError::WebDriverError {
                error: "invalid response".to_string(),
                message: format!("element response for '{}' carried no element id", selector),
            })?
            .to_string();

        Ok(Element { id })
    }

    pub async fn send_keys(&self, element: &Element, text: &str) -> Result<()> {
        let chars: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        let response = self
            .client
            .post(self.element_url(element, "value"))
            .json(&json!({ "text": text, "value": chars }))
            .send()
            .await?;
        Self::unwrap_value(response).await?;
        Ok(())
    }

    pub async fn click(&self, element: &Element) -> Result<()> {
        let response = self
            .client
            .post(self.element_url(element, "click"))
            .json(&json!({}))
            .send()
            .await?;
        Self::unwrap_value(response).await?;
        Ok(())
    }

    pub async fn text(&self, element: &Element) -> Result<String> {
        let response = self
            .client
            .get(self.element_url(element, "text"))
            .send()
            .await?;
        let value = Self::unwrap_value(response).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    /// Capture the current page as PNG bytes.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.command_url("screenshot"))
            .send()
            .await?;
        let value = Self::unwrap_value(response).await?;
        let encoded = value.as_str().ok_or_else(|| CaptureError::WebDriverError {
            error: "invalid response".to_string(),
            message: "screenshot response carried no image data".to_string(),
        })?;
        let bytes = BASE64.decode(encoded)?;
        Ok(bytes)
    }

    pub async fn close(&self) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/session/{}", self.base_url, self.session_id))
            .send()
            .await?;
        Self::unwrap_value(response).await?;
        Ok(())
    }

    fn command_url(&self, command: &str) -> String {
        format!("{}/session/{}/{}", self.base_url, self.session_id, command)
    }

    fn element_url(&self, element: &Element, command: &str) -> String {
        format!(
            "{}/session/{}/element/{}/{}",
            self.base_url, self.session_id, element.id, command
        )
    }

    /// Unwrap the W3C `{"value": ...}` envelope, mapping error envelopes to
    /// typed errors.
    async fn unwrap_value(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body: Value = response.json().await?;

        if status.is_success() {
            Ok(body.get("value").cloned().unwrap_or(Value::Null))
        } else {
            let error = body["value"]["error"]
                .as_str()
                .unwrap_or("unknown error")
                .to_string();
            let message = body["value"]["message"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            Err(CaptureError::WebDriverError { error, message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    async fn started_session(server: &MockServer) -> Session {
        server.mock(|when, then| {
            when.method(POST).path("/session");
            then.status(200).json_body(serde_json::json!({
                "value": { "sessionId": "abc123", "capabilities": {} }
            }));
        });
        Session::start(&server.base_url()).await.unwrap()
    }

    #[tokio::test]
    async fn test_start_parses_session_id() {
        let server = MockServer::start();
        let session = started_session(&server).await;
        assert_eq!(session.session_id(), "abc123");
    }

    #[tokio::test]
    async fn test_find_element_parses_w3c_reference() {
        let server = MockServer::start();
        let session = started_session(&server).await;

        server.mock(|when, then| {
            when.method(POST).path("/session/abc123/element");
            then.status(200).json_body(serde_json::json!({
                "value": { ELEMENT_KEY: "el-7" }
            }));
        });

        let element = session.find_element("pre").await.unwrap();
        assert_eq!(element.id, "el-7");
    }

    #[tokio::test]
    async fn test_missing_element_maps_to_element_not_found() {
        let server = MockServer::start();
        let session = started_session(&server).await;

        server.mock(|when, then| {
            when.method(POST).path("/session/abc123/element");
            then.status(404).json_body(serde_json::json!({
                "value": {
                    "error": "no such element",
                    "message": "Unable to locate element"
                }
            }));
        });

        let err = session.find_element("input[name='j_username']").await.unwrap_err();
        assert!(matches!(err, CaptureError::ElementNotFound { .. }));
    }

    #[tokio::test]
    async fn test_other_errors_map_to_webdriver_error() {
        let server = MockServer::start();
        let session = started_session(&server).await;

        server.mock(|when, then| {
            when.method(GET).path("/session/abc123/screenshot");
            then.status(500).json_body(serde_json::json!({
                "value": {
                    "error": "unknown error",
                    "message": "screenshot failed"
                }
            }));
        });

        let err = session.screenshot().await.unwrap_err();
        assert!(matches!(err, CaptureError::WebDriverError { .. }));
    }

    #[tokio::test]
    async fn test_screenshot_decodes_base64_png() {
        let server = MockServer::start();
        let session = started_session(&server).await;

        let encoded = BASE64.encode(b"fake-png-bytes");
        server.mock(|when, then| {
            when.method(GET).path("/session/abc123/screenshot");
            then.status(200)
                .json_body(serde_json::json!({ "value": encoded }));
        });

        let bytes = session.screenshot().await.unwrap();
        assert_eq!(bytes, b"fake-png-bytes");
    }

    #[tokio::test]
    async fn test_close_deletes_session() {
        let server = MockServer::start();
        let session = started_session(&server).await;

        let delete_mock = server.mock(|when, then| {
            when.method(DELETE).path("/session/abc123");
            then.status(200).json_body(serde_json::json!({ "value": null }));
        });

        session.close().await.unwrap();
        delete_mock.assert();
    }
}
