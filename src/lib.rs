pub mod error;
pub mod http;
pub mod news;

pub use error::RestError;
