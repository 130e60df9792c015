/// SEO signals derived from one successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeoSignals {
    /// Trimmed `<title>` text, empty when the page has none
    pub title: String,
    pub title_ok: bool,

    /// Trimmed `content` of `<meta name="description">`, empty when absent
    pub meta_description: String,
    pub meta_description_ok: bool,

    pub h1_count: usize,
    pub h1_ok: bool,

    pub images_total: usize,
    /// Images whose `alt` is missing or empty
    pub images_missing_alt: usize,

    /// Anchors resolving to the page's own host (not checked for liveness)
    pub internal_links_count: usize,
}

impl SeoSignals {
    /// Title length in characters
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// Meta description length in characters
    pub fn meta_description_len(&self) -> usize {
        self.meta_description.chars().count()
    }
}

/// Either the failure that prevented analysis, or the full signal set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Failed { error: String },
    Analyzed(SeoSignals),
}

/// Audit result for one requested URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// URL exactly as listed in the request
    pub url: String,
    pub outcome: PageOutcome,
}

impl PageResult {
    pub fn analyzed(url: impl Into<String>, signals: SeoSignals) -> Self {
        Self {
            url: url.into(),
            outcome: PageOutcome::Analyzed(signals),
        }
    }

    pub fn failed(url: impl Into<String>, error: impl ToString) -> Self {
        Self {
            url: url.into(),
            outcome: PageOutcome::Failed {
                error: error.to_string(),
            },
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            PageOutcome::Failed { error } => Some(error),
            PageOutcome::Analyzed(_) => None,
        }
    }

    pub fn signals(&self) -> Option<&SeoSignals> {
        match &self.outcome {
            PageOutcome::Analyzed(signals) => Some(signals),
            PageOutcome::Failed { .. } => None,
        }
    }
}
