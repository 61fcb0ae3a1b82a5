//! LocalStorage 封装模块
//!
//! 直接使用 `web_sys::Storage`。不在浏览器中时读取为空，写入静默忽略。

use attendance_portal::TokenStore;
use portal_shared::TOKEN_STORAGE_KEY;

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 键不存在或发生错误时返回 None
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 返回是否写入成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// Bearer Token 的浏览器存储
#[derive(Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        LocalStorage::get(TOKEN_STORAGE_KEY)
    }

    fn set(&self, token: &str) {
        if !LocalStorage::set(TOKEN_STORAGE_KEY, token) {
            log::warn!("[storage] failed to persist token");
        }
    }

    fn remove(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}
