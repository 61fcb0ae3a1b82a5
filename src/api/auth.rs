use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::HttpClient;
use crate::storage::TokenStore;
use portal_shared::Student;
use portal_shared::protocol::{LoginRequest, LoginResponse, ProfileRequest};

pub struct AuthApi<'a, C, S> {
    pub(super) client: &'a ApiClient<C, S>,
}

impl<C, S> AuthApi<'_, C, S>
where
    C: HttpClient,
    S: TokenStore,
{
    /// 登录
    ///
    /// 成功时先把返回的 Token 写入存储，再把结果交给调用方。
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.client.call(&req).await?;
        if !resp.token.is_empty() {
            self.client.set_token(&resp.token);
        }
        Ok(resp)
    }

    /// 注销：只清除本地 Token，不需要网络往返
    pub fn logout(&self) {
        self.client.remove_token();
    }

    /// 获取当前学生档案；失败意味着 Token 无效或已过期
    pub async fn get_profile(&self) -> ApiResult<Student> {
        self.client
            .call(&ProfileRequest)
            .await
            .map(|resp| resp.student)
    }
}
