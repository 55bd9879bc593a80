use http::{Method, StatusCode};
use reqwest::{header, Client, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("domain must be a non-empty base URL")]
    MissingDomain,
    #[error("invalid domain {0}")]
    InvalidDomain(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {status}")]
    Status { status: StatusCode, body: ApiBody },
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Json(Value),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// `None` for `204 No Content`.
    pub body: Option<ApiBody>,
}

/// One call against the gateway, assembled by the generated clients.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    form: Vec<(String, String)>,
    json: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            form: Vec::new(),
            json: None,
        }
    }

    pub fn path_param(mut self, name: &str, value: &str) -> Self {
        self.path_params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    pub fn form(mut self, name: &str, value: &str) -> Self {
        self.form.push((name.to_string(), value.to_string()));
        self
    }

    pub fn form_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.form(name, value),
            None => self,
        }
    }

    pub fn json_body(mut self, body: &Value) -> Self {
        self.json = Some(body.clone());
        self
    }

    pub fn json_body_opt(self, body: Option<&Value>) -> Self {
        match body {
            Some(body) => self.json_body(body),
            None => self,
        }
    }

    /// Caller-supplied query pairs, appended after the declared ones.
    pub fn extra_query(mut self, pairs: &[(&str, &str)]) -> Self {
        self.query.extend(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        self
    }

    fn url(&self, base: &Url) -> Result<Url, ApiError> {
        let segments: Vec<String> = self
            .path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| {
                self.path_params
                    .iter()
                    .fold(segment.to_string(), |segment, (name, value)| {
                        segment.replace(&format!("{{{name}}}"), value)
                    })
            })
            .collect();

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidDomain(base.to_string()))?
            .pop_if_empty()
            .extend(&segments);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Base client shared by every generated API. The domain is the gateway
/// prefix for one service, e.g. `http://erp-gateway/erp-privilege`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    domain: Url,
}

impl ApiClient {
    pub fn new(domain: &str) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), domain)
    }

    pub fn with_client(http: Client, domain: &str) -> Result<Self, ApiError> {
        if domain.trim().is_empty() {
            return Err(ApiError::MissingDomain);
        }
        let domain =
            Url::parse(domain).map_err(|_| ApiError::InvalidDomain(domain.to_string()))?;
        if domain.cannot_be_a_base() {
            return Err(ApiError::InvalidDomain(domain.to_string()));
        }
        Ok(Self { http, domain })
    }

    pub fn domain(&self) -> &Url {
        &self.domain
    }

    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url(&self.domain)?;
        debug!(method = %request.method, %url, "calling erp gateway");

        let mut builder = self.http.request(request.method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        } else if let Some(body) = &request.json {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(ApiResponse { status, body: None });
        }

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let body = decode_body(is_json, text);

        if status.is_success() {
            Ok(ApiResponse {
                status,
                body: Some(body),
            })
        } else {
            Err(ApiError::Status { status, body })
        }
    }
}

fn is_json_content_type(value: &str) -> bool {
    value.parse::<mime::Mime>().is_ok_and(|mime| {
        mime.type_() == mime::APPLICATION
            && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
    })
}

// a JSON content type with a malformed body still yields the raw text
fn decode_body(is_json: bool, text: String) -> ApiBody {
    if is_json {
        if let Ok(value) = serde_json::from_str(&text) {
            return ApiBody::Json(value);
        }
    }
    ApiBody::Text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_domain_is_rejected() {
        assert!(matches!(ApiClient::new(""), Err(ApiError::MissingDomain)));
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidDomain(_))
        ));
    }

    #[test]
    fn url_keeps_the_domain_prefix_and_encodes_path_params() {
        let base = Url::parse("http://erp-gateway/erp-shop/").expect("base");
        let url = ApiRequest::new(Method::GET, "/shopServ/shop/{shopId}/staff")
            .path_param("shopId", "a b/c")
            .query("page", "2")
            .extra_query(&[("trace", "on")])
            .url(&base)
            .expect("url");
        assert_eq!(
            url.as_str(),
            "http://erp-gateway/erp-shop/shopServ/shop/a%20b%2Fc/staff?page=2&trace=on"
        );
    }

    #[test]
    fn optional_parameters_are_skipped_when_absent() {
        let request = ApiRequest::new(Method::POST, "/x")
            .query_opt("a", None)
            .header_opt("b", None)
            .form_opt("c", None)
            .json_body_opt(None);
        assert!(request.query.is_empty());
        assert!(request.headers.is_empty());
        assert!(request.form.is_empty());
        assert!(request.json.is_none());
    }

    #[test]
    fn json_detection_accepts_structured_suffixes() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json;charset=UTF-8"));
        assert!(is_json_content_type("application/problem+json"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("garbage"));
    }

    #[test]
    fn malformed_json_falls_back_to_text() {
        assert_eq!(
            decode_body(true, "{oops".to_string()),
            ApiBody::Text("{oops".to_string())
        );
        assert_eq!(
            decode_body(true, "{\"ok\":true}".to_string()),
            ApiBody::Json(serde_json::json!({ "ok": true }))
        );
    }
}
