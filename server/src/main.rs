#![recursion_limit = "256"]

mod proxy;
mod routes;

#[tokio::main]
async fn main() {
    // Load .env if present; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let upstream = std::env::var("SUMMARIZER_API_URL").expect("SUMMARIZER_API_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let proxy = proxy::ApiProxy::new(upstream).expect("proxy init failed");

    let app = routes::app(proxy).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "zbook listening");
    axum::serve(listener, app).await.expect("server failed");
}
