// mesero-client/tests/poller_integration.rs
// End-to-end client tests against a local mock of the restaurant server.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use mesero_client::{ClientConfig, ClientError, MesaPoller, PanelClient, StatusSource, SubmitOutcome};
use shared::models::MesaEstado;
use shared::order::{ItemRow, OrderForm};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Mutable mock server state: the next `/mesas.json` reply, received
/// order bodies, and the cache headers seen on status reads.
#[derive(Clone, Default)]
struct MockState {
    reply: Arc<Mutex<(u16, String)>>,
    orders: Arc<Mutex<Vec<String>>>,
    cache_headers: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockState {
    fn set_reply(&self, status: u16, body: &str) {
        *self.reply.lock().unwrap() = (status, body.to_string());
    }

    fn orders(&self) -> Vec<String> {
        self.orders.lock().unwrap().clone()
    }

    fn cache_headers(&self) -> Vec<Option<String>> {
        self.cache_headers.lock().unwrap().clone()
    }
}

async fn serve_mesas(State(state): State<MockState>, headers: HeaderMap) -> impl IntoResponse {
    state.cache_headers.lock().unwrap().push(
        headers
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );

    let (status, body) = state.reply.lock().unwrap().clone();
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

async fn receive_order(State(state): State<MockState>, body: String) -> StatusCode {
    state.orders.lock().unwrap().push(body);
    StatusCode::OK
}

async fn spawn_mock() -> (MockState, PanelClient) {
    let state = MockState::default();
    state.set_reply(200, r#"{"mesas":[]}"#);

    let app = Router::new()
        .route("/mesas.json", get(serve_mesas))
        .route("/mesa/{id}", post(receive_order))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{addr}")).with_timeout(Duration::from_secs(2));
    let client = config.build_client().unwrap();
    (state, client)
}

#[tokio::test]
async fn test_fetch_and_transition_over_http() {
    let (state, client) = spawn_mock().await;
    let mut poller = MesaPoller::new(client, Duration::from_millis(50));

    state.set_reply(200, r#"{"mesas":[{"id":1,"numero":5,"estado":"ocupada"}]}"#);
    let update = poller.refresh().await.unwrap();
    assert_eq!(update.cards.len(), 1);
    assert_eq!(update.cards[0].pill_label(), "Ocupada");
    assert!(update.transitions.is_empty());

    state.set_reply(200, r#"{"mesas":[{"id":1,"numero":5,"estado":"libre"}]}"#);
    let update = poller.refresh().await.unwrap();
    assert_eq!(update.transitions.len(), 1);
    assert_eq!(update.transitions[0].toast_text(), "Mesa 5: ocupada → libre");

    // every status read asked for fresh data
    let seen = state.cache_headers();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|h| h.as_deref() == Some("no-store")));
}

#[tokio::test]
async fn test_failures_do_not_poison_the_poller() {
    let (state, client) = spawn_mock().await;
    let mut poller = MesaPoller::new(client, Duration::from_millis(50));

    state.set_reply(200, r#"{"mesas":[{"id":1,"numero":5,"estado":"ocupada"}]}"#);
    poller.refresh().await.unwrap();

    // server error
    state.set_reply(500, "boom");
    assert!(poller.refresh().await.is_err());

    // malformed body
    state.set_reply(200, "{not json");
    assert!(poller.refresh().await.is_err());

    // previous state survived both failed cycles
    assert_eq!(poller.last_seen(1), Some(MesaEstado::Ocupada));

    state.set_reply(200, r#"{"mesas":[{"id":1,"numero":5,"estado":"libre"}]}"#);
    let update = poller.refresh().await.unwrap();
    assert_eq!(update.transitions.len(), 1);
}

#[tokio::test]
async fn test_run_loop_refreshes_immediately_and_survives_errors() {
    let (state, client) = spawn_mock().await;
    state.set_reply(200, r#"{"mesas":[{"id":1,"numero":1,"estado":"libre"}]}"#);

    let poller = MesaPoller::new(client, Duration::from_millis(200));
    let (tx, mut rx) = mpsc::channel(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(poller.run(tx, cancel.clone()));

    // first update arrives before one full interval could have elapsed
    let first = tokio::time::timeout(Duration::from_millis(150), rx.recv())
        .await
        .expect("immediate first refresh")
        .unwrap();
    assert_eq!(first.cards.len(), 1);

    // break the endpoint for at least one tick; the loop must keep going
    state.set_reply(500, "down");
    tokio::time::sleep(Duration::from_millis(300)).await;
    state.set_reply(200, r#"{"mesas":[{"id":1,"numero":1,"estado":"ocupada"}]}"#);

    // drain updates until the transition shows up
    let deadline = tokio::time::Instant::now() + Duration::from_secs(3);
    loop {
        let remaining = deadline
            .checked_duration_since(tokio::time::Instant::now())
            .expect("transition within deadline");
        let update = tokio::time::timeout(remaining, rx.recv())
            .await
            .expect("loop kept refreshing")
            .unwrap();
        if !update.transitions.is_empty() {
            assert_eq!(update.transitions[0].toast_text(), "Mesa 1: libre → ocupada");
            break;
        }
    }

    cancel.cancel();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_submit_guard_blocks_empty_orders() {
    let (state, client) = spawn_mock().await;

    let mut form = OrderForm::new(vec![
        ItemRow::new(1, "Bandeja paisa", 28_000.0),
        ItemRow::new(2, "Limonada", 6_500.0),
    ]);

    // empty form: blocked before any request
    let summary = form.recalculate();
    let outcome = client.submit_order(7, form.rows(), &summary).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Blocked);
    assert!(state.orders().is_empty());

    // one item selected: the form posts unmodified
    let summary = form.adjust_quantity(1, 2);
    let outcome = client.submit_order(7, form.rows(), &summary).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Sent);

    let orders = state.orders();
    assert_eq!(orders.len(), 1);
    assert!(orders[0].contains("producto_1=2"));
    assert!(orders[0].contains("producto_2=0"));
}

#[tokio::test]
async fn test_non_success_status_maps_to_error() {
    let (state, client) = spawn_mock().await;

    state.set_reply(403, r#"{"error":"forbidden"}"#);
    let err = client.fetch_mesas().await.unwrap_err();
    assert!(matches!(err, ClientError::Status(StatusCode::FORBIDDEN)));
}
