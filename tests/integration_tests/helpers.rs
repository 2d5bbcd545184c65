use axum::Router;
use tokio::net::TcpListener;

/// Binds an ephemeral local port and returns the listener with its base URL.
pub async fn bind_local() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, format!("http://{addr}"))
}

pub fn serve(listener: TcpListener, router: Router) {
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let (listener, base_url) = bind_local().await;
    drop(listener);
    base_url
}
