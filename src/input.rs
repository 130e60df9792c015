/// Largest number of URLs audited in a single run
pub const MAX_URLS: usize = 10;

/// The URLs to audit, in the order the user listed them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRequest {
    urls: Vec<String>,
    supplied: usize,
}

impl AuditRequest {
    /// Build a request from a block of text holding one URL per line.
    ///
    /// Lines are trimmed and blank lines dropped. Duplicates are kept.
    /// Anything past the first [`MAX_URLS`] entries is ignored.
    pub fn from_text(raw: &str) -> Self {
        let mut urls: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let supplied = urls.len();
        urls.truncate(MAX_URLS);

        Self { urls, supplied }
    }

    /// URLs that will be audited
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Number of non-blank lines in the input, before capping
    pub fn supplied(&self) -> usize {
        self.supplied
    }

    /// Whether the input held more URLs than get audited
    pub fn is_truncated(&self) -> bool {
        self.supplied > self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
