use portal_shared::API_PREFIX;

// =========================================================
// 运行时配置 (Runtime Configuration)
// =========================================================

/// 提供 API 地址的环境变量名
pub const API_URL_VAR: &str = "PORTAL_API_URL";
/// 环境变量缺失时使用的默认后端地址
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// 客户端配置
///
/// WASM 环境没有进程环境变量，构建时通过 `option_env!` 注入；
/// 原生环境在运行时读取，读不到就用默认值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_base: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl PortalConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// 从环境读取配置
    pub fn from_env() -> Self {
        match Self::env_value() {
            Some(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn env_value() -> Option<String> {
        option_env!("PORTAL_API_URL").map(str::to_string)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn env_value() -> Option<String> {
        std::env::var(API_URL_VAR)
            .ok()
            .or_else(|| option_env!("PORTAL_API_URL").map(str::to_string))
    }

    /// 所有接口的根地址，例如 `http://localhost:3000/api`
    pub fn api_root(&self) -> String {
        format!("{}{}", self.api_base, API_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let config = PortalConfig::default();
        assert_eq!(config.api_root(), "http://localhost:3000/api");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = PortalConfig::new(" https://portal.example.edu/ ");
        assert_eq!(config.api_root(), "https://portal.example.edu/api");
    }
}
