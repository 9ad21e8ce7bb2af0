use crate::application_ports::Locator;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod channel;
pub mod membership;
mod response;
pub mod workspace;

pub fn create_router<L: Locator + Send + Sync + Clone + 'static>() -> Router<L> {
    Router::new()
        .route("/api/data", get(workspace::data_handler::<L>))
        .route(
            "/api/create_channel",
            post(channel::create_channel_handler::<L>),
        )
        .route(
            "/api/update_memberships",
            post(membership::update_memberships_handler::<L>),
        )
        .route(
            "/api/archive_channel",
            post(channel::archive_channel_handler::<L>),
        )
        .layer(TraceLayer::new_for_http())
}

pub async fn run_api<L: Locator + Send + Sync + Clone + 'static>(
    locator: L,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let router: Router<()> = create_router::<L>().with_state(locator);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!(port, "API listening");

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
