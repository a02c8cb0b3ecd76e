use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::logger;
use crate::models::http_response::ErrorBody;
use crate::utils::errors::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Thin wrapper over `reqwest` for the fantasy API.
///
/// Attaches the bearer token when one is held and turns every non-2xx
/// response into an [`ApiError::Backend`] carrying the backend's `detail`.
/// There is no retry, backoff or timeout: failures go straight back to the
/// calling view.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.set_token(token);
        self
    }

    pub fn set_token(&mut self, token: Option<&str>) {
        self.token = token.map(str::to_string);
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Sends one request and decodes the JSON answer into `T`.
    ///
    /// A body that is not JSON reads as `null`, so `Option<T>` targets
    /// decode an empty answer as `None`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4();

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        logger!(DEBUG, "[HTTP] {method} {path} ({request_id})");
        let response = builder.send().await.map_err(|error| {
            logger!(WARN, "[HTTP] {method} {path} failed to send ({error})");
            ApiError::Transport(error)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let data = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);

        if !status.is_success() {
            let detail = ErrorBody::from_value(&data).message();
            logger!(WARN, "[HTTP] {method} {path} -> {status} `{detail}` ({request_id})");
            return Err(ApiError::Backend { status, detail });
        }

        logger!(DEBUG, "[HTTP] {method} {path} -> {status} ({request_id})");
        serde_json::from_value(data).map_err(|error| ApiError::Decode {
            endpoint: format!("{method} {path}"),
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_bearer_token_is_attached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("authorization", "Bearer secret-token"))
            .and(header_exists(REQUEST_ID_HEADER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).with_token(Some("secret-token"));
        let body: Value = client.get("/auth/me").await.unwrap();
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/players"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let players: Vec<Value> = client.get("/players").await.unwrap();
        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/leagues/join"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"league_id": 4})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"membership_id": 11})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let body: Value = client.post("/leagues/join", &json!({"league_id": 4})).await.unwrap();
        assert_eq!(body["membership_id"], 11);
    }

    #[tokio::test]
    async fn test_backend_detail_is_surfaced_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/leagues/create"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "name taken"})))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let error = client
            .post::<Value, _>("/leagues/create", &json!({"name": "Sunday Squad"}))
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "name taken");
        assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_non_json_error_falls_back_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/1"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let error = client.get::<Value>("/standings/1").await.unwrap_err();
        assert_eq!(error.to_string(), "Request failed");
    }

    #[tokio::test]
    async fn test_null_body_decodes_as_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/squad"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let squad: Option<Value> = client.get("/squad").await.unwrap();
        assert!(squad.is_none());
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leagues/mine"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"leagues": []})))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri());
        let error = client.get::<Vec<Value>>("/leagues/mine").await.unwrap_err();
        assert!(matches!(error, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:9");
        let error = client.get::<Value>("/players").await.unwrap_err();
        assert!(matches!(error, ApiError::Transport(_)));
    }
}
