pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use openapi::ApiDoc;
pub use router::build_router;
pub use state::AppState;
