use crate::error::TransportError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::VecDeque;

pub use portal_shared::protocol::HttpMethod;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// 设置 Header，同名（忽略大小写）的旧值会被覆盖
    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(key));
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: &serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// 按名称（忽略大小写）读取 Header
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// HTTP 客户端特性 (Trait)
///
/// 浏览器环境下 fetch 返回的 Future 不是 Send 的，所以使用 `?Send`。
/// 返回 `Err` 表示根本没有拿到 HTTP 响应；任何状态码都以 `Ok` 返回。
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// =========================================================
// 实现层: Reqwest 客户端 (Native)
// =========================================================

#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &req.url);

        for (k, v) in req.headers {
            builder = builder.header(k, v);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_builder() {
                TransportError::RequestBuild(e.to_string())
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

/// 一次被记录的请求
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

#[cfg(test)]
impl RecordedRequest {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

#[cfg(test)]
#[derive(Clone)]
enum MockReply {
    Respond(u16, String),
    Fail(TransportError),
}

/// 按 `METHOD url` 返回预设响应的客户端
///
/// 每次请求消耗一个排队的响应；队列空时重放该键最近一次送出的响应。
/// 未配置的请求返回 404。
#[cfg(test)]
pub struct MockHttpClient {
    replies: RefCell<HashMap<String, VecDeque<MockReply>>>,
    last_served: RefCell<HashMap<String, MockReply>>,
    pub requests: RefCell<Vec<RecordedRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(HashMap::new()),
            last_served: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn key(method: HttpMethod, url: &str) -> String {
        format!("{} {}", method.as_str(), url)
    }

    fn push(&self, method: HttpMethod, url: &str, reply: MockReply) {
        self.replies
            .borrow_mut()
            .entry(Self::key(method, url))
            .or_default()
            .push_back(reply);
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.push(method, url, MockReply::Respond(status, body.to_string()));
    }

    pub fn mock_raw(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.push(method, url, MockReply::Respond(status, body.to_string()));
    }

    pub fn mock_failure(&self, method: HttpMethod, url: &str) {
        self.push(
            method,
            url,
            MockReply::Fail(TransportError::Network("connection refused".to_string())),
        );
    }

    pub fn requests_to(&self, method: HttpMethod, url: &str) -> Vec<RecordedRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .cloned()
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: req.url.clone(),
            method: req.method,
            headers: req.headers.clone(),
            body: req.body.clone(),
        });

        let key = Self::key(req.method, &req.url);
        let queued = self
            .replies
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        let reply = match queued {
            Some(reply) => {
                self.last_served.borrow_mut().insert(key, reply.clone());
                Some(reply)
            }
            None => self.last_served.borrow().get(&key).cloned(),
        };

        match reply {
            Some(MockReply::Respond(status, body)) => Ok(HttpResponse { status, body }),
            Some(MockReply::Fail(e)) => Err(e),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_header_replaces_case_insensitively() {
        let req = HttpRequest::new("http://x", HttpMethod::Get)
            .with_header("Content-Type", "application/json")
            .with_header("content-type", "text/plain");
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.header("CONTENT-TYPE"), Some("text/plain"));
    }

    #[test]
    fn success_range() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let redirect = HttpResponse {
            status: 302,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }

    #[tokio::test]
    async fn mock_pops_queued_replies_then_keeps_last() {
        let mock = MockHttpClient::new();
        mock.mock_response(HttpMethod::Get, "http://x/a", 200, serde_json::json!({"n": 1}));
        mock.mock_response(HttpMethod::Get, "http://x/a", 200, serde_json::json!({"n": 2}));

        let first = mock
            .send(HttpRequest::new("http://x/a", HttpMethod::Get))
            .await
            .unwrap();
        let second = mock
            .send(HttpRequest::new("http://x/a", HttpMethod::Get))
            .await
            .unwrap();
        let third = mock
            .send(HttpRequest::new("http://x/a", HttpMethod::Get))
            .await
            .unwrap();

        assert_eq!(first.body, r#"{"n":1}"#);
        assert_eq!(second.body, r#"{"n":2}"#);
        assert_eq!(third.body, r#"{"n":2}"#);
        assert_eq!(mock.request_count(), 3);
    }

    #[tokio::test]
    async fn mock_serves_reply_queued_after_earlier_request() {
        let mock = MockHttpClient::new();
        let get = || HttpRequest::new("http://x/a", HttpMethod::Get);

        mock.mock_response(HttpMethod::Get, "http://x/a", 200, serde_json::json!({"n": 1}));
        let first = mock.send(get()).await.unwrap();

        mock.mock_response(HttpMethod::Get, "http://x/a", 200, serde_json::json!({"n": 2}));
        let second = mock.send(get()).await.unwrap();
        let third = mock.send(get()).await.unwrap();

        assert_eq!(first.body, r#"{"n":1}"#);
        assert_eq!(second.body, r#"{"n":2}"#);
        assert_eq!(third.body, r#"{"n":2}"#);
    }

    #[tokio::test]
    async fn mock_unknown_route_is_404() {
        let mock = MockHttpClient::new();
        let resp = mock
            .send(HttpRequest::new("http://x/missing", HttpMethod::Post))
            .await
            .unwrap();
        assert_eq!(resp.status, 404);
    }
}
