mod config;
mod error;
pub mod ops;
mod query;
mod transport;

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use ops::QueryParams;
pub use query::{PredicateBuilder, RequestDescriptor};
pub use transport::{HttpResponse, HttpTransport, Transport};
