pub mod cloudflare;
pub mod traits;

pub use traits::CachePurger;
