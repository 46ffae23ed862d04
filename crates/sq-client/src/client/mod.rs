pub(crate) mod client;
pub(crate) mod error;

pub use client::ServiceClient;
pub use error::{ClientError, Result as ClientResult};
