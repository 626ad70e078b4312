// HTTP server module

pub mod cors;
pub mod routes;

pub use routes::{router, AppState};
