use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::protocol::{AttendanceHistory, AttendanceHistoryRequest};

pub struct AttendanceApi<'a, C, S> {
    pub(super) client: &'a ApiClient<C, S>,
}

impl<C, S> AttendanceApi<'_, C, S>
where
    C: HttpClient,
    S: TokenStore,
{
    /// 分页获取考勤历史
    ///
    /// 返回的 `stats` 由服务端按其约定的范围聚合，客户端不做任何重算。
    pub async fn get_history(&self, page: u32, limit: u32) -> ApiResult<AttendanceHistory> {
        self.client
            .call(&AttendanceHistoryRequest {
                page: page.max(1),
                limit: limit.max(1),
            })
            .await
    }

    /// 默认分页（第 1 页，每页 20 条）
    pub async fn get_default_history(&self) -> ApiResult<AttendanceHistory> {
        self.client.call(&AttendanceHistoryRequest::default()).await
    }
}
