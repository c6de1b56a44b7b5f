//! Server entry point: load settings, bootstrap the database, mount routes,
//! serve. The products table exists before the listener binds.

use product_api::{
    common_routes, ensure_database_exists, ensure_product_tables, product_routes, AppState,
    Settings,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("product_api=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    ensure_product_tables(&pool).await?;

    let state = AppState { pool };
    let app = axum::Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/products", product_routes(state))
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
