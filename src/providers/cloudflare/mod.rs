//! Cloudflare cache purge client.
//!
//! Sends one `purge_cache` request per URL to the Cloudflare v4 API and,
//! in strict mode, checks the `success` envelope of the response.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;

pub use errors::PurgeError;
pub use types::{Cloudflare, PurgeConfig, PurgeCredentials, PurgeMethod};
