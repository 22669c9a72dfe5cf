use std::net::SocketAddr;

use axum::Router;
use echo_cli::ChatClient;
use echo_server::{cors::DEFAULT_ORIGINS, AllowedOrigins};
use tokio::net::TcpListener;

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_echo_server() -> SocketAddr {
    let origins = AllowedOrigins::parse(DEFAULT_ORIGINS).unwrap();
    spawn(echo_server::app(&origins).unwrap()).await
}

#[tokio::test]
async fn round_trip_through_real_server() {
    let addr = spawn_echo_server().await;
    let client = ChatClient::new(&addr.to_string());

    let reply = client.send("Hello").await.unwrap();
    assert_eq!(reply.response, "Bot: You said 'Hello'");

    let reply = client.send("it's héllo 🌍").await.unwrap();
    assert_eq!(reply.response, "Bot: You said 'it's héllo 🌍'");
}

#[tokio::test]
async fn whitespace_is_sent_verbatim() {
    let addr = spawn_echo_server().await;
    let client = ChatClient::new(&format!("http://{addr}"));

    let reply = client.send("  padded  ").await.unwrap();
    assert_eq!(reply.response, "Bot: You said '  padded  '");
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let addr = spawn_echo_server().await;
    let client = std::sync::Arc::new(ChatClient::new(&addr.to_string()));

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { (i, client.send(&i.to_string()).await.unwrap()) })
        })
        .collect();

    for task in tasks {
        let (i, reply) = task.await.unwrap();
        assert_eq!(reply.response, format!("Bot: You said '{i}'"));
    }
}

#[tokio::test]
async fn error_status_is_reported() {
    let addr = spawn(Router::new()).await;
    let client = ChatClient::new(&addr.to_string());

    assert!(client.send("Hello").await.is_err());
}

#[tokio::test]
async fn session_skips_blank_lines_and_stops_at_eof() {
    let addr = spawn_echo_server().await;
    let client = ChatClient::new(&addr.to_string());

    let input = "hi\n   \n\n it's \n".as_bytes();
    let mut out = Vec::new();
    echo_cli::run(&client, input, &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(
        printed.lines().collect::<Vec<_>>(),
        vec!["Bot: You said 'hi'", "Bot: You said ' it's '"]
    );
}

#[tokio::test]
async fn session_keeps_going_after_a_failed_send() {
    let addr = spawn(Router::new()).await;
    let client = ChatClient::new(&addr.to_string());

    let mut out = Vec::new();
    echo_cli::run(&client, "one\ntwo\n".as_bytes(), &mut out)
        .await
        .unwrap();

    assert!(out.is_empty());
}
