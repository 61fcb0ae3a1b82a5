//! Token 存储模块
//!
//! 只保存一个字符串：Bearer Token。
//! 存在表示"可能已登录"，缺失表示"一定未登录"，有效性只能由一次成功的档案请求确认。

use std::cell::RefCell;
use std::rc::Rc;

/// Token 存储特性
///
/// 实现方不得 panic：无法访问底层存储（例如不在浏览器中）时 `get` 返回 None，
/// `set` / `remove` 静默忽略。
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    /// 幂等
    fn remove(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token)
    }

    fn remove(&self) {
        (**self).remove()
    }
}

/// 内存 Token 存储
///
/// 克隆出的句柄共享同一个槽位，便于测试在交给 `ApiClient` 之后继续观察。
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        self.slot.borrow_mut().take();
    }
}
