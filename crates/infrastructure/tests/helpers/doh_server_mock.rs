#![allow(dead_code)]
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the mock endpoint saw for one request.
#[derive(Debug, Clone)]
pub struct ObservedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ObservedRequest {
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    location: Option<&'static str>,
    body: Bytes,
    observed: Arc<Mutex<Vec<ObservedRequest>>>,
}

/// In-process DoH endpoint on 127.0.0.1 that answers every request with
/// one canned body.
pub struct MockDohServer {
    addr: SocketAddr,
    observed: Arc<Mutex<Vec<ObservedRequest>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start(response: Vec<u8>) -> Result<Self, std::io::Error> {
        Self::start_with_status(StatusCode::OK, response).await
    }

    pub async fn start_with_status(
        status: StatusCode,
        response: Vec<u8>,
    ) -> Result<Self, std::io::Error> {
        Self::spawn(status, None, response).await
    }

    /// Answers every request, on any path, with `status` and a `Location`
    /// header pointing at `location`.
    pub async fn start_redirect(
        status: StatusCode,
        location: &'static str,
        response: Vec<u8>,
    ) -> Result<Self, std::io::Error> {
        Self::spawn(status, Some(location), response).await
    }

    async fn spawn(
        status: StatusCode,
        location: Option<&'static str>,
        response: Vec<u8>,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let observed = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            location,
            body: Bytes::from(response),
            observed: Arc::clone(&observed),
        };

        let app = Router::new()
            .route("/dns-query", any(handle_dns_query))
            .fallback(handle_dns_query)
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            observed,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/dns-query", self.addr)
    }

    pub fn requests(&self) -> Vec<ObservedRequest> {
        self.observed.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle_dns_query(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.observed.lock().unwrap().push(ObservedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    let mut response = (
        state.status,
        [(header::CONTENT_TYPE, "application/dns-message")],
        state.body.clone(),
    )
        .into_response();

    if let Some(location) = state.location {
        response
            .headers_mut()
            .insert(header::LOCATION, HeaderValue::from_static(location));
    }

    response
}
