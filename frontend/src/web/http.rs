//! HTTP 传输实现
//!
//! 基于 `web_sys::fetch` 实现核心库的 `HttpClient` 特性。
//! 任何 HTTP 状态码都以 `Ok` 返回，交给 `ApiClient` 统一归一化。

use attendance_portal::{HttpClient, HttpRequest, HttpResponse, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build(req: &HttpRequest) -> Result<Request, TransportError> {
        let headers = Headers::new().map_err(|e| {
            TransportError::RequestBuild(format!("创建 Headers 失败: {:?}", e))
        })?;

        for (key, value) in &req.headers {
            headers.set(key, value).map_err(|e| {
                TransportError::RequestBuild(format!("设置 Header 失败: {:?}", e))
            })?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| TransportError::RequestBuild(format!("{:?}", e)))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let request = Self::build(&req)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("无法获取 window 对象".to_string()))?;

        // fetch 只在网络层失败（断网、CORS）时 reject
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| TransportError::Network(format!("{:?}", e)))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| TransportError::Body(format!("Response 类型转换失败: {:?}", e)))?;

        let status = response.status();
        let promise = response
            .text()
            .map_err(|e| TransportError::Body(format!("{:?}", e)))?;
        let body = JsFuture::from(promise)
            .await
            .map_err(|e| TransportError::Body(format!("{:?}", e)))?
            .as_string()
            .ok_or_else(|| TransportError::Body("无法转换为字符串".to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
