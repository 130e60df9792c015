//! Batch SEO auditing: fetch a short list of pages and report basic
//! technical SEO signals for each of them.

pub mod analyzer;
pub mod audit;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod input;
pub mod links;
pub mod parsers;
pub mod report;
pub mod results;

// Re-export commonly used types for convenience
pub use audit::Auditor;
pub use config::AuditConfig;
pub use error::{AuditError, FetchError};
pub use input::{AuditRequest, MAX_URLS};
pub use report::ReportRenderer;
pub use results::{PageOutcome, PageResult, SeoSignals};
