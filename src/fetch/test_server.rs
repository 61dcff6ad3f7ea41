// src/fetch/test_server.rs

//! Local HTTP servers for label fetch tests.

use reqwest::Client;
use std::time::Duration;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

const PATH: &str = "/ParamLabels.csv";

/// A client that ignores proxy settings from the environment.
pub(crate) fn local_client(timeout: Duration) -> Client {
    Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap()
}

async fn read_request(sock: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = sock.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}

/// Serve one canned `(status, body)` response per entry, in order. The handle
/// resolves to the number of requests answered.
pub(crate) async fn serve(
    responses: Vec<(&'static str, &'static str)>,
) -> (String, JoinHandle<usize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut served = 0;
        for (status, body) in responses {
            let (mut sock, _) = listener.accept().await.unwrap();
            read_request(&mut sock).await;
            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            sock.write_all(reply.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
            served += 1;
        }
        served
    });
    (format!("http://{}{}", addr, PATH), handle)
}

/// Accept connections and read requests but never answer them. Sockets stay
/// open until the returned task is aborted.
pub(crate) async fn serve_silently() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            let Ok((mut sock, _)) = listener.accept().await else {
                break;
            };
            read_request(&mut sock).await;
            held.push(sock);
        }
    });
    (format!("http://{}{}", addr, PATH), handle)
}
