//! Pass-through of `/api/*` to the remote catalog API

pub mod handlers;
pub mod upstream;

pub use upstream::Upstream;
