//! HttpExecutor integration tests.
//!
//! Each test serves canned HTTP responses from an in-process TCP listener,
//! so classification of real wire traffic is exercised without any external
//! endpoint.

use sqlrelay::exec::{ExecOutcome, HttpExecutor, HttpExecutorConfig, SqlExecutor};
use sqlrelay::runner::Runner;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Spawns a one-shot HTTP fixture that answers consecutive connections with
/// the given (status, body) pairs, then stops accepting.
async fn spawn_server(responses: Vec<(u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;

            let reason = match status {
                200 => "OK",
                204 => "No Content",
                404 => "Not Found",
                500 => "Internal Server Error",
                _ => "Unknown",
            };
            let response = if status == 204 {
                "HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string()
            } else {
                format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                )
            };
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}

fn executor_for(base_url: &str) -> HttpExecutor {
    HttpExecutor::new(HttpExecutorConfig::new(base_url, "test-service-key")).unwrap()
}

#[tokio::test]
async fn test_200_is_success() {
    let base_url = spawn_server(vec![(200, "[]")]).await;
    let executor = executor_for(&base_url);
    let outcome = executor.execute("CREATE TABLE t(id int)").await;
    assert_eq!(outcome, ExecOutcome::Success { status: 200 });
}

#[tokio::test]
async fn test_204_is_success() {
    let base_url = spawn_server(vec![(204, "")]).await;
    let executor = executor_for(&base_url);
    let outcome = executor.execute("CREATE TABLE t(id int)").await;
    assert_eq!(outcome, ExecOutcome::Success { status: 204 });
}

#[tokio::test]
async fn test_404_is_failure_with_body() {
    let base_url = spawn_server(vec![(404, r#"{"message":"function not found"}"#)]).await;
    let executor = executor_for(&base_url);
    let outcome = executor.execute("CREATE TABLE t(id int)").await;
    match outcome {
        ExecOutcome::Failure { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("function not found"));
        }
        other => panic!("expected Failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_500_is_failure() {
    let base_url = spawn_server(vec![(500, r#"{"message":"syntax error"}"#)]).await;
    let executor = executor_for(&base_url);
    let outcome = executor.execute("CREATE TABLE t(id int)").await;
    assert!(matches!(
        outcome,
        ExecOutcome::Failure { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_connection_refused_is_exception() {
    // Bind to learn a free port, then drop the listener so the port refuses.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let executor = executor_for(&format!("http://{addr}"));
    let outcome = executor.execute("CREATE TABLE t(id int)").await;
    assert!(matches!(outcome, ExecOutcome::Exception { .. }));
}

#[tokio::test]
async fn test_unresponsive_server_times_out_as_exception() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Accept but never answer; hold the socket past the client timeout.
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            drop(socket);
        }
    });

    let executor = HttpExecutor::new(
        HttpExecutorConfig::new(format!("http://{addr}"), "test-service-key").with_timeout(1),
    )
    .unwrap();
    let outcome = executor.execute("CREATE TABLE t(id int)").await;
    match outcome {
        ExecOutcome::Exception { message } => assert!(message.contains("timed out")),
        other => panic!("expected Exception, got {:?}", other),
    }
}

#[tokio::test]
async fn test_end_to_end_all_statements_succeed() {
    let base_url = spawn_server(vec![(200, "[]"), (200, "[]")]).await;
    let runner = Runner::new(executor_for(&base_url));
    let summary = runner
        .run_sql("CREATE TABLE t(id int); -- comment\nINSERT INTO t VALUES(1);")
        .await;

    assert_eq!(summary.success_count, 2);
    assert_eq!(summary.error_count, 0);
    assert_eq!(summary.reports[0].preview, "CREATE TABLE t(id int)");
    assert_eq!(summary.reports[1].preview, "INSERT INTO t VALUES(1)");
}

#[tokio::test]
async fn test_end_to_end_continues_past_404() {
    let base_url = spawn_server(vec![(404, r#"{"message":"not found"}"#), (200, "[]")]).await;
    let runner = Runner::new(executor_for(&base_url));
    let summary = runner
        .run_sql("CREATE TABLE t(id int); -- comment\nINSERT INTO t VALUES(1);")
        .await;

    assert_eq!(summary.success_count, 1);
    assert_eq!(summary.error_count, 1);
    assert_eq!(summary.reports.len(), 2);
    assert!(!summary.reports[0].outcome.is_success());
    assert!(summary.reports[1].outcome.is_success());
}
