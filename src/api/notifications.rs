use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::Notification;
use portal_shared::protocol::{ListNotificationsRequest, MarkReadRequest};

pub struct NotificationsApi<'a, C, S> {
    pub(super) client: &'a ApiClient<C, S>,
}

impl<C, S> NotificationsApi<'_, C, S>
where
    C: HttpClient,
    S: TokenStore,
{
    pub async fn list(&self) -> ApiResult<Vec<Notification>> {
        self.client
            .call(&ListNotificationsRequest)
            .await
            .map(|resp| resp.notifications)
    }

    /// 标记单条通知为已读（没有批量接口）
    pub async fn mark_as_read(&self, id: &str) -> ApiResult<()> {
        self.client
            .call(&MarkReadRequest { id: id.to_string() })
            .await
            .map(|_| ())
    }
}
