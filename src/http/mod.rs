mod error;
mod handlers;
mod request;
mod routes;
mod server;

pub use error::ApiError;
pub use routes::router;
pub use server::serve;
