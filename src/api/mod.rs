//! 领域 API 门面
//!
//! 每个门面借用同一个 `ApiClient`，只负责把具体接口包装成强类型方法。

mod attendance;
mod auth;
mod classes;
mod notifications;

pub use attendance::AttendanceApi;
pub use auth::AuthApi;
pub use classes::{ClassesApi, MSG_JOIN_FAILED};
pub use notifications::NotificationsApi;

use crate::client::ApiClient;
use crate::request::HttpClient;
use crate::storage::TokenStore;

impl<C, S> ApiClient<C, S>
where
    C: HttpClient,
    S: TokenStore,
{
    pub fn auth(&self) -> AuthApi<'_, C, S> {
        AuthApi { client: self }
    }

    pub fn classes(&self) -> ClassesApi<'_, C, S> {
        ClassesApi { client: self }
    }

    pub fn attendance(&self) -> AttendanceApi<'_, C, S> {
        AttendanceApi { client: self }
    }

    pub fn notifications(&self) -> NotificationsApi<'_, C, S> {
        NotificationsApi { client: self }
    }
}
