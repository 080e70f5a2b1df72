//! End-to-end tests against a real listener.

use std::{sync::Arc, time::Duration};

use lounge_server::{
    infrastructure::{
        dto::http::{MessageDto, ParticipantDto},
        repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    },
    ui::Server,
};
use lounge_shared::time::SystemClock;
use reqwest::StatusCode;
use serde_json::json;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// Helper struct to manage the server task lifecycle
struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    /// Start a test server on an ephemeral port
    async fn start(inactivity_timeout: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = Server::new(
            Arc::new(InMemoryParticipantRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
            Arc::new(SystemClock),
            inactivity_timeout,
        );
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve(listener, async move {
            let _ = rx.await;
        }));

        TestServer {
            base_url: format!("http://{}", addr),
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let result = tokio::time::timeout(Duration::from_secs(5), &mut self.handle).await;
        assert!(matches!(result, Ok(Ok(Ok(())))), "server should shut down cleanly");
    }
}

#[tokio::test]
async fn test_chat_session_end_to_end() {
    // テスト項目: Alice 登録 → 重複登録 → 全員宛て投稿 → Bob が取得 → 未登録の Eve の投稿
    // given (前提条件):
    let server = TestServer::start(Duration::from_secs(10)).await;
    let client = reqwest::Client::new();

    // when (操作) / then (期待する結果):
    let register = client
        .post(server.url("/participants"))
        .json(&json!({ "name": "Alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::CREATED);

    let register_again = client
        .post(server.url("/participants"))
        .json(&json!({ "name": "Alice" }))
        .send()
        .await
        .unwrap();
    assert_eq!(register_again.status(), StatusCode::CONFLICT);

    let post = client
        .post(server.url("/messages"))
        .header("user", "Alice")
        .json(&json!({ "to": "Todos", "text": "Olá, pessoal!", "type": "public" }))
        .send()
        .await
        .unwrap();
    assert_eq!(post.status(), StatusCode::CREATED);

    let for_bob: Vec<MessageDto> = client
        .get(server.url("/messages"))
        .header("user", "Bob")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(
        for_bob
            .iter()
            .any(|m| m.from == "Alice" && m.text == "Olá, pessoal!" && m.r#type == "public")
    );
    assert_eq!(for_bob[0].text, "Olá, pessoal!", "newest message comes first");

    let from_eve = client
        .post(server.url("/messages"))
        .header("user", "Eve")
        .json(&json!({ "to": "Todos", "text": "hi", "type": "public" }))
        .send()
        .await
        .unwrap();
    assert_eq!(from_eve.status(), StatusCode::UNPROCESSABLE_ENTITY);

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_inactive_participant_is_evicted() {
    // テスト項目: heartbeat のない参加者は退室させられ、heartbeat を続ける参加者は残る
    // given (前提条件):
    let server = TestServer::start(Duration::from_millis(500)).await;
    let client = reqwest::Client::new();
    for name in ["Alice", "Bob"] {
        let status = client
            .post(server.url("/participants"))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap()
            .status();
        assert_eq!(status, StatusCode::CREATED);
    }

    // when (操作): Bob だけが heartbeat を送り続ける
    for _ in 0..20 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let status = client
            .post(server.url("/status"))
            .header("user", "Bob")
            .send()
            .await
            .unwrap()
            .status();
        assert_eq!(status, StatusCode::OK);
    }

    // then (期待する結果):
    let participants: Vec<ParticipantDto> = client
        .get(server.url("/participants"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = participants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bob"]);

    let messages: Vec<MessageDto> = client
        .get(server.url("/messages"))
        .header("user", "Bob")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let left: Vec<&MessageDto> = messages
        .iter()
        .filter(|m| m.r#type == "status" && m.text == "sai da sala...")
        .collect();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].from, "Alice");

    let heartbeat = client
        .post(server.url("/status"))
        .header("user", "Alice")
        .send()
        .await
        .unwrap();
    assert_eq!(heartbeat.status(), StatusCode::NOT_FOUND);

    drop(client);
    server.stop().await;
}
