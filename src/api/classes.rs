use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::ClassInfo;
use portal_shared::protocol::{JoinClassRequest, JoinClassResponse, ListClassesRequest};

pub const MSG_JOIN_FAILED: &str = "Failed to join class";

pub struct ClassesApi<'a, C, S> {
    pub(super) client: &'a ApiClient<C, S>,
}

impl<C, S> ClassesApi<'_, C, S>
where
    C: HttpClient,
    S: TokenStore,
{
    /// 已加入的课程列表
    pub async fn list(&self) -> ApiResult<Vec<ClassInfo>> {
        self.client
            .call(&ListClassesRequest)
            .await
            .map(|resp| resp.classes)
    }

    /// 通过加入码加入课程
    ///
    /// 加入码原样提交（规范化由调用方负责）。2xx 但 `success: false` 的响应同样视为失败。
    pub async fn join(&self, code: &str) -> ApiResult<JoinClassResponse> {
        let req = JoinClassRequest {
            code: code.to_string(),
        };
        let resp = self.client.call(&req).await?;
        if !resp.success {
            let message = resp
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| MSG_JOIN_FAILED.to_string());
            return Err(ApiError::server(200, message));
        }
        Ok(resp)
    }
}
