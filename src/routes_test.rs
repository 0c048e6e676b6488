use super::*;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{Duration, timeout};

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("conditioning-site-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

async fn spawn(router: Router) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("listener should have an address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

async fn get_raw(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect should succeed");
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.expect("write should succeed");
    let mut buf = Vec::new();
    timeout(Duration::from_secs(2), stream.read_to_end(&mut buf))
        .await
        .expect("response timed out")
        .expect("read should succeed");
    String::from_utf8_lossy(&buf).into_owned()
}

// =============================================================================
// health probe
// =============================================================================

#[tokio::test]
async fn healthz_handler_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_answers_200() {
    let dir = scratch_dir("healthz");
    let addr = spawn(site_routes(&dir.join("pkg"), &dir)).await;

    let response = get_raw(addr, "/healthz").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
}

// =============================================================================
// static assets
// =============================================================================

#[tokio::test]
async fn bundle_is_served_under_pkg() {
    let dir = scratch_dir("pkg");
    let pkg = dir.join("pkg");
    std::fs::create_dir_all(&pkg).expect("pkg dir should be creatable");
    std::fs::write(pkg.join("conditioning.css"), "body{}").expect("asset should be writable");
    let addr = spawn(site_routes(&pkg, &dir.join("public"))).await;

    let response = get_raw(addr, "/pkg/conditioning.css").await;
    assert!(response.starts_with("HTTP/1.1 200"), "unexpected response: {response}");
    assert!(response.ends_with("body{}"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_public_dir() {
    let dir = scratch_dir("public");
    std::fs::write(dir.join("robots.txt"), "User-agent: *").expect("asset should be writable");
    let addr = spawn(site_routes(&dir.join("pkg"), &dir)).await;

    let found = get_raw(addr, "/robots.txt").await;
    assert!(found.starts_with("HTTP/1.1 200"), "unexpected response: {found}");
    assert!(found.contains("User-agent: *"));

    let missing = get_raw(addr, "/nope.txt").await;
    assert!(missing.starts_with("HTTP/1.1 404"), "unexpected response: {missing}");
}
