use crate::analyzer;
use crate::config::AuditConfig;
use crate::error::AuditError;
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::input::AuditRequest;
use crate::parsers;
use crate::report::ReportRenderer;
use crate::results::PageResult;
use std::io::{self, Write};

/// Drives fetch, parse and analysis for every requested URL, one at a time
pub struct Auditor<F: Fetcher = HttpFetcher> {
    fetcher: F,
}

impl Auditor<HttpFetcher> {
    /// Create an auditor fetching over HTTP with the given configuration
    pub fn from_config(config: &AuditConfig) -> Result<Self, AuditError> {
        Ok(Self::new(HttpFetcher::new(config)?))
    }
}

impl<F: Fetcher> Auditor<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Audit a URL list given as text and render the report.
    ///
    /// Only I/O errors from the output sink are returned; per-URL failures end
    /// up in the corresponding [`PageResult`].
    pub async fn run<W: Write>(
        &self,
        raw_input: &str,
        renderer: &mut ReportRenderer<W>,
    ) -> io::Result<Vec<PageResult>> {
        self.run_request(&AuditRequest::from_text(raw_input), renderer)
            .await
    }

    /// Same as [`Auditor::run`] for an already built request
    pub async fn run_request<W: Write>(
        &self,
        request: &AuditRequest,
        renderer: &mut ReportRenderer<W>,
    ) -> io::Result<Vec<PageResult>> {
        if request.is_truncated() {
            ::log::warn!(
                "{} URLs supplied, auditing only the first {}",
                request.supplied(),
                request.urls().len()
            );
            renderer.advisory(request.supplied())?;
        }

        let results = self.audit(request).await;
        renderer.render(&results)?;
        Ok(results)
    }

    /// Audit each URL of the request in order
    pub async fn audit(&self, request: &AuditRequest) -> Vec<PageResult> {
        let total = request.urls().len();
        let mut results = Vec::with_capacity(total);

        for (i, url) in request.urls().iter().enumerate() {
            ::log::info!("Auditing {}/{}: {}", i + 1, total, url);
            let result = self.audit_page(url).await;
            ::log::info!(
                "Finished {}/{}: {} ({})",
                i + 1,
                total,
                url,
                if result.error().is_some() { "failed" } else { "analyzed" }
            );
            results.push(result);
        }

        ::log::info!(
            "Audit complete - {} pages, {} failed",
            results.len(),
            results.iter().filter(|r| r.error().is_some()).count()
        );
        results
    }

    async fn audit_page(&self, url: &str) -> PageResult {
        match self.fetcher.fetch(url).await {
            Ok(body) => {
                let doc = parsers::parse(&body);
                PageResult::analyzed(url, analyzer::analyze(url, &doc))
            }
            Err(e) => {
                ::log::warn!("Failed to fetch {}: {}", url, e);
                PageResult::failed(url, e)
            }
        }
    }
}
