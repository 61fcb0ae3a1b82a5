//! 通知列表页

use super::LoadState;
use crate::client::ApiClient;
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::Notification;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsView {
    pub items: LoadState<Vec<Notification>>,
}

impl NotificationsView {
    pub async fn fetch<C, S>(api: &ApiClient<C, S>) -> LoadState<Vec<Notification>>
    where
        C: HttpClient,
        S: TokenStore,
    {
        LoadState::from_result("notifications", api.notifications().list().await)
    }

    pub async fn load<C, S>(&mut self, api: &ApiClient<C, S>)
    where
        C: HttpClient,
        S: TokenStore,
    {
        self.items = Self::fetch(api).await;
    }

    pub fn items(&self) -> &[Notification] {
        self.items.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn unread_count(&self) -> usize {
        self.items().iter().filter(|n| !n.read).count()
    }

    pub fn is_read(&self, id: &str) -> Option<bool> {
        self.items().iter().find(|n| n.id == id).map(|n| n.read)
    }

    /// 只翻转目标通知的 `read` 字段
    pub fn mark_read_local(&mut self, id: &str) {
        if let LoadState::Ready(items) = &mut self.items {
            if let Some(item) = items.iter_mut().find(|n| n.id == id) {
                item.read = true;
            }
        }
    }

    /// 通知服务端标记已读
    ///
    /// 返回是否应在本地翻转；已读的通知不会重复提交。
    pub async fn submit_read<C, S>(api: &ApiClient<C, S>, id: &str) -> bool
    where
        C: HttpClient,
        S: TokenStore,
    {
        match api.notifications().mark_as_read(id).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("[views] failed to mark notification {} as read: {}", id, e);
                false
            }
        }
    }

    pub async fn mark_as_read<C, S>(&mut self, api: &ApiClient<C, S>, id: &str)
    where
        C: HttpClient,
        S: TokenStore,
    {
        if self.is_read(id) != Some(false) {
            return;
        }
        if Self::submit_read(api, id).await {
            self.mark_read_local(id);
        }
    }
}
