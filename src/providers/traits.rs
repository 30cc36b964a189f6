// 3rd party crates
use async_trait::async_trait;

/// Core trait that every CDN cache purger implements.
/// The page lifecycle hooks only see this trait, so a purger can be swapped
/// or faked without touching the hooks.
///
/// # Implementation Requirements
///
/// Implementors must provide:
/// - An error type for provider-specific failures
/// - A purge operation for one fully-qualified URL
/// - Enable/disable reporting
///
/// # Example Implementation
///
/// ```rust
/// # use async_trait::async_trait;
/// # use cloudflare_purge::providers::CachePurger;
/// struct NoopPurger;
///
/// #[async_trait]
/// impl CachePurger for NoopPurger {
///     type Error = std::io::Error;
///
///     async fn purge(&self, _url: &str) -> Result<(), Self::Error> {
///         Ok(())
///     }
///
///     fn is_enabled(&self) -> bool {
///         false
///     }
///
///     fn get_name(&self) -> &str {
///         "noop"
///     }
/// }
/// ```
#[async_trait]
pub trait CachePurger: Send + Sync {
    /// The error type for this purger.
    ///
    /// A disabled purger never produces an error: not being configured is
    /// reported through `is_enabled`, and `purge` returns `Ok(())`.
    type Error: std::error::Error + Send + Sync;

    /// Evicts the cached copy of `url` so the next request goes to origin.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL of the page, used verbatim
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The URL was purged, or purging is disabled
    /// * `Err(Self::Error)` - The request failed
    async fn purge(&self, url: &str) -> Result<(), Self::Error>;

    /// Checks if the purger has enough configuration to send requests.
    fn is_enabled(&self) -> bool;

    /// Gets the purger's name, lowercase with no spaces.
    fn get_name(&self) -> &str;
}
