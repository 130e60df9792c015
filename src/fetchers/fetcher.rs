use crate::error::FetchError;

/// Source of raw page bodies.
///
/// The auditor only ever awaits one fetch at a time.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Retrieve the body of `url`, failing on transport errors and non-2xx statuses
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
