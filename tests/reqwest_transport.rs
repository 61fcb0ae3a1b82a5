//! 原生 reqwest 传输层的端到端测试：本地 TCP 监听器返回预设的 HTTP 响应

use attendance_portal::request::ReqwestHttpClient;
use attendance_portal::{
    ApiClient, ApiError, MemoryTokenStore, PortalConfig, Session, SessionState, TokenStore,
};
use serde_json::Value;
use std::rc::Rc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// 接受一个连接，返回收到的原始请求并回写 `status` + `body`
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut raw = Vec::new();
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            raw.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&raw).to_string());
    });

    (format!("http://{}", addr), rx)
}

/// Header 读完且请求体长度达到 Content-Length
fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

#[tokio::test]
async fn sends_bearer_token_and_parses_body() {
    let (base, rx) = serve_once("200 OK", r#"{"success":true,"classes":[]}"#).await;
    let config = PortalConfig::new(&base);
    let client = ApiClient::new(
        &config,
        ReqwestHttpClient::new(),
        MemoryTokenStore::with_token("tok-1"),
    );

    let classes = client.classes().list().await.unwrap();
    assert!(classes.is_empty());

    let raw = rx.await.unwrap().to_lowercase();
    assert!(raw.starts_with("get /api/student/classes http/1.1"));
    assert!(raw.contains("authorization: bearer tok-1"));
    assert!(raw.contains("content-type: application/json"));
}

#[tokio::test]
async fn non_2xx_surfaces_server_error() {
    let (base, _rx) = serve_once(
        "401 Unauthorized",
        r#"{"success":false,"error":"Invalid credentials"}"#,
    )
    .await;
    let client = ApiClient::new(
        &PortalConfig::new(&base),
        ReqwestHttpClient::new(),
        MemoryTokenStore::new(),
    );

    let err = client.auth().login("a@b.com", "pw").await.unwrap_err();
    assert_eq!(err, ApiError::server(401, "Invalid credentials"));
}

#[tokio::test]
async fn posts_json_body() {
    let (base, rx) = serve_once("200 OK", r#"{"success":true}"#).await;
    let client = ApiClient::new(
        &PortalConfig::new(&base),
        ReqwestHttpClient::new(),
        MemoryTokenStore::new(),
    );

    let value: Value = client
        .post("/student/classes/join", &serde_json::json!({ "code": "ABC123" }))
        .await
        .unwrap();
    assert_eq!(value["success"], Value::Bool(true));

    let raw = rx.await.unwrap();
    assert!(raw.ends_with(r#"{"code":"ABC123"}"#));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    // 先绑定再释放，得到一个没有监听者的端口
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let tokens = MemoryTokenStore::with_token("stale");
    let api = Rc::new(ApiClient::new(
        &PortalConfig::new(&format!("http://{}", addr)),
        ReqwestHttpClient::new(),
        tokens.clone(),
    ));
    let session = Session::new(api);

    session.initialize().await;
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert_eq!(tokens.get(), None);
}
