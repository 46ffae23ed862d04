#[allow(clippy::module_inception)]
mod client;
mod response;
