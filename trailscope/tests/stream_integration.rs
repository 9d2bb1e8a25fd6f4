//! Integration tests for the stream client lifecycle.
//!
//! These tests run the real client against a local TCP listener and verify
//! the complete flows:
//! - Connect → receive frames → tracker updates
//! - Malformed frames are discarded without side effects
//! - Close → Disconnected → automatic reconnect
//! - Teardown cancels the pending retry
//! - End-to-end: accepted sample → render snapshot pixel position
//!
//! Run with: `cargo test --test stream_integration`

use std::time::{Duration, Instant};

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

use trailscope::config::ViewConfig;
use trailscope::state::ConnectionStatus;
use trailscope::stream::{StreamClient, StreamConfig};
use trailscope::tracker::PositionTracker;

/// Short retry delay so reconnect tests stay fast.
const FAST_RETRY: Duration = Duration::from_millis(50);

/// Generous ceiling for condition polling.
const WAIT_TIMEOUT: Duration = Duration::from_secs(3);

/// Bind a throwaway listener and build a client config pointing at it.
async fn bind_endpoint(reconnect_delay: Duration) -> (TcpListener, StreamConfig) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let port = listener.local_addr().expect("local addr").port();
    let config = StreamConfig {
        host: "127.0.0.1".to_string(),
        port,
        reconnect_delay,
    };
    (listener, config)
}

/// Poll a condition until it holds or the timeout elapses.
async fn wait_for<F: Fn() -> bool>(condition: F) -> bool {
    let deadline = Instant::now() + WAIT_TIMEOUT;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

async fn send_line(socket: &mut TcpStream, line: &str) {
    socket
        .write_all(format!("{line}\n").as_bytes())
        .await
        .expect("write frame");
    socket.flush().await.expect("flush frame");
}

#[tokio::test]
async fn test_client_connects_and_accepts_sample() {
    let (listener, config) = bind_endpoint(FAST_RETRY).await;
    let tracker = PositionTracker::with_defaults();
    let cancel = CancellationToken::new();
    let handle = StreamClient::new(config, tracker.clone(), cancel.clone()).start();

    let (mut socket, _) = listener.accept().await.expect("accept");
    assert!(wait_for(|| tracker.connected()).await, "never connected");

    send_line(&mut socket, r#"{"type":"pos","x":10,"y":-5,"w":2.34}"#).await;

    assert!(
        wait_for(|| tracker.current_position().is_some()).await,
        "sample never arrived"
    );
    let current = tracker.current_position().unwrap();
    assert_eq!(current.x, 10.0);
    assert_eq!(current.y, -5.0);
    assert_eq!(current.weight, 2.34);
    assert_eq!(tracker.trail_len(), 1);

    cancel.cancel();
    handle.await.expect("client task");
}

#[tokio::test]
async fn test_malformed_frames_are_discarded() {
    let (listener, config) = bind_endpoint(FAST_RETRY).await;
    let tracker = PositionTracker::with_defaults();
    let cancel = CancellationToken::new();
    let handle = StreamClient::new(config, tracker.clone(), cancel.clone()).start();

    let (mut socket, _) = listener.accept().await.expect("accept");
    assert!(wait_for(|| tracker.connected()).await);

    // None of these may touch the tracker
    send_line(&mut socket, r#"{"type":"pos","x":"a","y":1,"w":1}"#).await;
    send_line(&mut socket, r#"{"type":"other"}"#).await;
    send_line(&mut socket, "not json at all").await;
    send_line(&mut socket, r#"{"type":"pos","x":1,"y":1}"#).await;

    // A trailing valid frame proves the earlier ones were already processed
    send_line(&mut socket, r#"{"type":"pos","x":7,"y":8,"w":9}"#).await;

    assert!(wait_for(|| tracker.current_position().is_some()).await);
    let current = tracker.current_position().unwrap();
    assert_eq!(current.x, 7.0);
    assert_eq!(tracker.trail_len(), 1, "discarded frames must not append");

    cancel.cancel();
    handle.await.expect("client task");
}

#[tokio::test]
async fn test_client_reconnects_after_peer_close() {
    let (listener, config) = bind_endpoint(FAST_RETRY).await;
    let tracker = PositionTracker::with_defaults();
    let cancel = CancellationToken::new();
    let handle = StreamClient::new(config, tracker.clone(), cancel.clone()).start();

    let (socket, _) = listener.accept().await.expect("first accept");
    assert!(wait_for(|| tracker.connected()).await);

    // Peer closes: the client must drop to Disconnected, then retry
    drop(socket);
    assert!(
        wait_for(|| !tracker.connected()).await,
        "close not observed"
    );

    let second = tokio::time::timeout(WAIT_TIMEOUT, listener.accept())
        .await
        .expect("no reconnect attempt")
        .expect("second accept");
    assert!(wait_for(|| tracker.connected()).await, "never reconnected");
    drop(second);

    cancel.cancel();
    handle.await.expect("client task");
}

#[tokio::test]
async fn test_teardown_cancels_pending_retry() {
    // Long retry delay so cancellation always lands before the timer fires
    let (listener, config) = bind_endpoint(Duration::from_millis(500)).await;
    let tracker = PositionTracker::with_defaults();
    let cancel = CancellationToken::new();
    let handle = StreamClient::new(config, tracker.clone(), cancel.clone()).start();

    let (socket, _) = listener.accept().await.expect("accept");
    assert!(wait_for(|| tracker.connected()).await);

    drop(socket);
    assert!(wait_for(|| !tracker.connected()).await);

    // Cancel while the reconnect timer is pending
    cancel.cancel();
    handle.await.expect("client task");

    // No further connect attempt may arrive
    let result =
        tokio::time::timeout(Duration::from_millis(800), listener.accept()).await;
    assert!(result.is_err(), "client attempted to reconnect after teardown");
    assert_eq!(tracker.connection_status(), ConnectionStatus::Disconnected);
}

#[tokio::test]
async fn test_client_retries_until_endpoint_appears() {
    // Reserve a port, then release it so the first attempts fail
    let (listener, config) = bind_endpoint(FAST_RETRY).await;
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let tracker = PositionTracker::with_defaults();
    let cancel = CancellationToken::new();
    let handle = StreamClient::new(config, tracker.clone(), cancel.clone()).start();

    // Let a few connect attempts fail, then bring the endpoint up
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!tracker.connected());

    let listener = TcpListener::bind(addr).await.expect("rebind");
    listener.accept().await.expect("accept after retry");
    assert!(wait_for(|| tracker.connected()).await, "retry never landed");

    cancel.cancel();
    handle.await.expect("client task");
}

#[tokio::test]
async fn test_end_to_end_sample_to_pixel() {
    let view = ViewConfig::default();
    let geometry = view.geometry();

    let (listener, config) = bind_endpoint(FAST_RETRY).await;
    let tracker = PositionTracker::new(view.trail.clone());
    let cancel = CancellationToken::new();
    let handle = StreamClient::new(config, tracker.clone(), cancel.clone()).start();

    let (mut socket, _) = listener.accept().await.expect("accept");
    send_line(&mut socket, r#"{"type":"pos","x":120,"y":0,"w":81.2}"#).await;
    assert!(wait_for(|| tracker.current_position().is_some()).await);

    let snapshot = tracker.render_snapshot(&geometry, Instant::now());
    assert!(snapshot.connected);

    // Axis ranges [-120,120], diameter 870, inset 8: the sample sits at the
    // clamped right edge, vertically centered.
    let current = snapshot.current.unwrap();
    assert!((current.x - 862.0).abs() < 1e-9, "x = {}", current.x);
    assert!((current.y - 435.0).abs() < 1e-9, "y = {}", current.y);
    assert_eq!(current.weight, 81.2);

    assert_eq!(snapshot.trail.len(), 1);
    assert!((snapshot.trail[0].x - 862.0).abs() < 1e-9);
    assert!(snapshot.trail[0].opacity > 0.9);

    cancel.cancel();
    handle.await.expect("client task");
}
