//! Product API: HTTP CRUD over a PostgreSQL-backed product catalog.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repo;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Product, ProductCreate, ProductUpdate};
pub use repo::ProductRepo;
pub use routes::{common_routes, product_routes};
pub use service::ProductService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_product_tables};
