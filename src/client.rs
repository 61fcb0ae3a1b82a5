//! API 客户端
//!
//! 所有对外 HTTP 通信的唯一出口：
//! 附加 Bearer Token、序列化 JSON 请求体、把三类失败统一成 `ApiError`。

use crate::config::PortalConfig;
use crate::error::{ApiError, ApiResult, MSG_REQUEST_FAILED};
use crate::request::{HttpClient, HttpMethod, HttpRequest};
use crate::storage::TokenStore;
use portal_shared::protocol::ApiRequest;
use portal_shared::{CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct ApiClient<C, S> {
    root: String,
    http: C,
    tokens: S,
}

impl<C, S> ApiClient<C, S>
where
    C: HttpClient,
    S: TokenStore,
{
    pub fn new(config: &PortalConfig, http: C, tokens: S) -> Self {
        Self::with_root(&config.api_root(), http, tokens)
    }

    /// 直接指定 API 根地址（例如 `http://localhost:3000/api`）
    pub fn with_root(root: &str, http: C, tokens: S) -> Self {
        Self {
            root: root.trim_end_matches('/').to_string(),
            http,
            tokens,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn transport(&self) -> &C {
        &self.http
    }

    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    pub fn set_token(&self, token: &str) {
        self.tokens.set(token);
    }

    pub fn remove_token(&self) {
        self.tokens.remove();
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.root, endpoint)
        } else {
            format!("{}/{}", self.root, endpoint)
        }
    }

    /// 发送请求并解析响应
    ///
    /// Header 顺序：`Content-Type`，有 Token 时的 `Authorization`，最后是调用方覆盖项。
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: HttpMethod,
        body: Option<&serde_json::Value>,
        headers: &[(&str, &str)],
    ) -> ApiResult<T> {
        let url = self.url(endpoint);

        let mut req = HttpRequest::new(&url, method).with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);
        if let Some(token) = self.tokens.get() {
            req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }
        for (key, value) in headers {
            req = req.with_header(key, value);
        }
        if let Some(body) = body {
            req = req.with_body(body);
        }

        log::debug!("[api] {} {}", method.as_str(), url);

        let resp = self.http.send(req).await.map_err(|e| {
            log::warn!("[api] {} {} transport failure: {}", method.as_str(), url, e);
            ApiError::from(e)
        })?;

        if !resp.is_success() {
            let message = error_message(&resp.body);
            log::warn!(
                "[api] {} {} failed with status {}: {}",
                method.as_str(),
                url,
                resp.status,
                message
            );
            return Err(ApiError::server(resp.status, message));
        }

        resp.json::<T>().map_err(|e| {
            log::warn!("[api] {} {} returned a malformed body: {}", method.as_str(), url, e);
            ApiError::Parse(e.to_string())
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, HttpMethod::Get, None, &[]).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(body)?;
        self.request(endpoint, HttpMethod::Post, Some(&body), &[]).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(body)?;
        self.request(endpoint, HttpMethod::Put, Some(&body), &[]).await
    }

    /// 发送强类型请求并获取解析后的响应
    pub async fn call<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        let body = req.body();
        self.request(&req.path(), R::METHOD, body.as_ref(), &[]).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// 从失败响应体中提取 `error` 字段，取不到时使用通用文案
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| MSG_REQUEST_FAILED.to_string())
}

#[cfg(test)]
mod tests;
