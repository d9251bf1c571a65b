pub mod proxy;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    use system::middleware::request_logger::request_logger;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let addr = config.bind_addr()?;
    let upstream = proxy::Upstream::new(&config.upstream)?;
    tracing::info!("Proxying /api to {}", upstream.base_url);
    tracing::info!("Serving frontend from {}", config.server.static_dir);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = routes::configure_routes(upstream, &config.server.static_dir)
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", addr.port());
            } else {
                tracing::error!("Failed to bind to {}: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
