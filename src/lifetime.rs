//! 视图生命周期
//!
//! 用代数计数器代替请求取消：视图卸载或重新发起请求时推进代数，
//! 旧代数的响应到达后直接丢弃。

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    generation: Rc<Cell<u64>>,
}

/// 某一代的凭据
#[derive(Debug, Clone)]
pub struct Ticket {
    issued: u64,
    generation: Rc<Cell<u64>>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> Ticket {
        Ticket {
            issued: self.generation.get(),
            generation: self.generation.clone(),
        }
    }

    /// 作废之前发出的全部凭据
    pub fn dismiss(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// 作废旧凭据并立即发出新凭据，用于重新加载
    pub fn renew(&self) -> Ticket {
        self.dismiss();
        self.ticket()
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.issued == self.generation.get()
    }

    /// 仅在凭据仍然有效时执行
    pub fn apply<T>(&self, value: T, f: impl FnOnce(T)) -> bool {
        if self.is_current() {
            f(value);
            true
        } else {
            log::debug!("[lifetime] dropped a stale response");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_is_current_until_dismissed() {
        let lifetime = ViewLifetime::new();
        let ticket = lifetime.ticket();
        assert!(ticket.is_current());

        lifetime.dismiss();
        assert!(!ticket.is_current());
        assert!(lifetime.ticket().is_current());
    }

    #[test]
    fn renew_invalidates_in_flight_request() {
        let lifetime = ViewLifetime::new();
        let first = lifetime.ticket();
        let second = lifetime.renew();

        let mut applied = Vec::new();
        assert!(!first.apply(1, |v| applied.push(v)));
        assert!(second.apply(2, |v| applied.push(v)));
        assert_eq!(applied, vec![2]);
    }

    #[test]
    fn clones_share_generation() {
        let lifetime = ViewLifetime::new();
        let handle = lifetime.clone();
        let ticket = lifetime.ticket();
        handle.dismiss();
        assert!(!ticket.is_current());
    }
}
