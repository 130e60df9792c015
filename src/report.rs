use crate::analyzer::{
    META_DESCRIPTION_MAX_EXCLUSIVE, META_DESCRIPTION_MIN_EXCLUSIVE, TITLE_MAX_EXCLUSIVE,
    TITLE_MIN_EXCLUSIVE,
};
use crate::input::MAX_URLS;
use crate::results::{PageOutcome, PageResult, SeoSignals};
use std::io::{self, Write};

const OK: &str = "✅";
const WARN: &str = "⚠️";
const INFO: &str = "ℹ️";
const FAIL: &str = "❌";
const SEPARATOR: &str = "---";

fn marker(ok: bool) -> &'static str {
    if ok { OK } else { WARN }
}

/// Writes a human-readable, sectioned audit report to any sink
pub struct ReportRenderer<W: Write> {
    out: W,
}

impl<W: Write> ReportRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Tell the user only part of their list will be audited
    pub fn advisory(&mut self, supplied: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {} URLs supplied. For best performance, audit at most {} URLs at a time; \
             only the first {} will be analyzed.",
            WARN, supplied, MAX_URLS, MAX_URLS
        )?;
        writeln!(self.out)
    }

    /// One block per result, in the order given
    pub fn render(&mut self, results: &[PageResult]) -> io::Result<()> {
        for result in results {
            self.render_page(result)?;
        }
        self.out.flush()
    }

    fn render_page(&mut self, result: &PageResult) -> io::Result<()> {
        writeln!(self.out, "### 🔗 {}", result.url)?;
        match &result.outcome {
            PageOutcome::Failed { error } => {
                writeln!(self.out, "{} Could not analyze: {}", FAIL, error)?;
            }
            PageOutcome::Analyzed(signals) => self.render_signals(signals)?,
        }
        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out)
    }

    fn render_signals(&mut self, s: &SeoSignals) -> io::Result<()> {
        if s.title.is_empty() {
            writeln!(self.out, "{} No <title> tag found.", WARN)?;
        } else {
            writeln!(
                self.out,
                "{} **Title:** {} (length: {} characters)",
                marker(s.title_ok),
                s.title,
                s.title_len()
            )?;
            if !s.title_ok {
                self.tip(&format!(
                    "Titles should be between {} and {} characters for best results.",
                    TITLE_MIN_EXCLUSIVE, TITLE_MAX_EXCLUSIVE
                ))?;
            }
        }

        if s.meta_description.is_empty() {
            writeln!(self.out, "{} No meta description found.", WARN)?;
        } else {
            writeln!(
                self.out,
                "{} **Meta Description:** {} (length: {} characters)",
                marker(s.meta_description_ok),
                s.meta_description,
                s.meta_description_len()
            )?;
            if !s.meta_description_ok {
                self.tip(&format!(
                    "Meta descriptions should be between {} and {} characters.",
                    META_DESCRIPTION_MIN_EXCLUSIVE, META_DESCRIPTION_MAX_EXCLUSIVE
                ))?;
            }
        }

        writeln!(self.out, "{} H1 tags: {}", marker(s.h1_ok), s.h1_count)?;
        if !s.h1_ok {
            self.tip("Each page should have exactly one H1 tag.")?;
        }

        if s.images_total > 0 {
            writeln!(
                self.out,
                "{} Images on page: {}",
                marker(s.images_missing_alt == 0),
                s.images_total
            )?;
            writeln!(self.out, "Images missing ALT text: {}", s.images_missing_alt)?;
            if s.images_missing_alt > 0 {
                self.tip("Images should carry alternative (alt) text for accessibility and SEO.")?;
            }
        } else {
            self.tip("No images found on the page.")?;
        }

        writeln!(self.out, "Internal links found: {}", s.internal_links_count)
    }

    fn tip(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", INFO, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(results: &[PageResult]) -> String {
        let mut renderer = ReportRenderer::new(Vec::new());
        renderer.render(results).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn healthy() -> SeoSignals {
        SeoSignals {
            title: "A perfectly reasonable title".to_string(),
            title_ok: true,
            meta_description: "d".repeat(80),
            meta_description_ok: true,
            h1_count: 1,
            h1_ok: true,
            images_total: 2,
            images_missing_alt: 0,
            internal_links_count: 12,
        }
    }

    #[test]
    fn test_failed_page_shows_only_error() {
        let out = render(&[PageResult::failed(
            "https://down.example",
            "HTTP status 404 Not Found for url https://down.example",
        )]);
        assert_eq!(
            out,
            "### 🔗 https://down.example\n\
             ❌ Could not analyze: HTTP status 404 Not Found for url https://down.example\n\
             ---\n\n"
        );
    }

    #[test]
    fn test_healthy_page_has_no_tips() {
        let out = render(&[PageResult::analyzed("https://ok.example", healthy())]);
        let lines: Vec<&str> = out.lines().collect();
        let meta_line = format!(
            "✅ **Meta Description:** {} (length: 80 characters)",
            "d".repeat(80)
        );
        assert_eq!(
            lines,
            vec![
                "### 🔗 https://ok.example",
                "✅ **Title:** A perfectly reasonable title (length: 28 characters)",
                meta_line.as_str(),
                "✅ H1 tags: 1",
                "✅ Images on page: 2",
                "Images missing ALT text: 0",
                "Internal links found: 12",
                "---",
                "",
            ]
        );
    }

    #[test]
    fn test_problem_page_warns_and_advises() {
        let signals = SeoSignals {
            title: "Home".to_string(),
            h1_count: 2,
            images_total: 3,
            images_missing_alt: 1,
            internal_links_count: 5,
            ..SeoSignals::default()
        };
        let out = render(&[PageResult::analyzed("https://example.com", signals)]);

        assert!(out.contains("⚠️ **Title:** Home (length: 4 characters)"));
        assert!(out.contains("ℹ️ Titles should be between 10 and 70 characters"));
        assert!(out.contains("⚠️ No meta description found."));
        assert!(!out.contains("Meta descriptions should be between"));
        assert!(out.contains("⚠️ H1 tags: 2"));
        assert!(out.contains("ℹ️ Each page should have exactly one H1 tag."));
        assert!(out.contains("⚠️ Images on page: 3"));
        assert!(out.contains("Images missing ALT text: 1"));
        assert!(out.contains("Internal links found: 5"));
    }

    #[test]
    fn test_empty_page() {
        let out = render(&[PageResult::analyzed("https://blank.example", SeoSignals::default())]);
        assert!(out.contains("⚠️ No <title> tag found."));
        assert!(out.contains("ℹ️ No images found on the page."));
        assert!(!out.contains("Images on page"));
        assert!(out.contains("Internal links found: 0"));
    }

    #[test]
    fn test_blocks_follow_input_order() {
        let out = render(&[
            PageResult::failed("https://first.example", "boom"),
            PageResult::analyzed("https://second.example", healthy()),
            PageResult::failed("https://third.example", "boom"),
        ]);
        let first = out.find("https://first.example").unwrap();
        let second = out.find("https://second.example").unwrap();
        let third = out.find("https://third.example").unwrap();
        assert!(first < second && second < third);
        assert_eq!(out.matches("\n---\n").count(), 3);
    }

    #[test]
    fn test_advisory() {
        let mut renderer = ReportRenderer::new(Vec::new());
        renderer.advisory(12).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with("⚠️ 12 URLs supplied."));
        assert!(out.contains("only the first 10 will be analyzed"));
    }
}
