use crate::links::LinkScope;
use crate::parsers::Document;
use crate::results::SeoSignals;

/// Titles must be longer than this many characters
pub const TITLE_MIN_EXCLUSIVE: usize = 10;
/// and shorter than this many
pub const TITLE_MAX_EXCLUSIVE: usize = 70;

pub const META_DESCRIPTION_MIN_EXCLUSIVE: usize = 50;
pub const META_DESCRIPTION_MAX_EXCLUSIVE: usize = 160;

/// `min < len < max`, both bounds exclusive
fn within(len: usize, min: usize, max: usize) -> bool {
    min < len && len < max
}

pub fn title_ok(title: &str) -> bool {
    within(
        title.chars().count(),
        TITLE_MIN_EXCLUSIVE,
        TITLE_MAX_EXCLUSIVE,
    )
}

pub fn meta_description_ok(description: &str) -> bool {
    within(
        description.chars().count(),
        META_DESCRIPTION_MIN_EXCLUSIVE,
        META_DESCRIPTION_MAX_EXCLUSIVE,
    )
}

/// Compute the SEO signals of a parsed page.
///
/// Never fails: anything the page lacks becomes an empty string or zero.
pub fn analyze(url: &str, doc: &Document) -> SeoSignals {
    let title = doc
        .title()
        .map(|t| t.trim().to_string())
        .unwrap_or_default();
    let meta_description = doc
        .meta_description()
        .map(|d| d.trim().to_string())
        .unwrap_or_default();

    let h1_count = doc.h1_count();

    let images = doc.images();
    let images_missing_alt = images.iter().filter(|img| img.is_missing_alt()).count();

    let internal_links_count = match LinkScope::for_page(url) {
        Some(scope) => scope.count_internal(doc.links().iter().map(String::as_str)),
        None => {
            ::log::debug!("No host in {}, skipping internal link count", url);
            0
        }
    };

    SeoSignals {
        title_ok: title_ok(&title),
        title,
        meta_description_ok: meta_description_ok(&meta_description),
        meta_description,
        h1_count,
        h1_ok: h1_count == 1,
        images_total: images.len(),
        images_missing_alt,
        internal_links_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers;

    fn analyze_html(url: &str, html: &str) -> SeoSignals {
        analyze(url, &parsers::parse(html))
    }

    #[test]
    fn test_title_bounds() {
        assert!(!title_ok(&"a".repeat(10)));
        assert!(title_ok(&"a".repeat(11)));
        assert!(title_ok(&"a".repeat(69)));
        assert!(!title_ok(&"a".repeat(70)));
        assert!(!title_ok(""));
    }

    #[test]
    fn test_meta_description_bounds() {
        assert!(!meta_description_ok(&"a".repeat(50)));
        assert!(meta_description_ok(&"a".repeat(51)));
        assert!(meta_description_ok(&"a".repeat(159)));
        assert!(!meta_description_ok(&"a".repeat(160)));
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // 11 characters, 22 bytes
        assert!(title_ok("ñññññññññññ"));
    }

    #[test]
    fn test_h1_ok_only_for_exactly_one() {
        let url = "https://example.com";
        assert!(!analyze_html(url, "<body></body>").h1_ok);
        assert!(analyze_html(url, "<h1>a</h1>").h1_ok);
        let two = analyze_html(url, "<h1>a</h1><h1>b</h1>");
        assert_eq!(two.h1_count, 2);
        assert!(!two.h1_ok);
    }

    #[test]
    fn test_values_are_trimmed() {
        let signals = analyze_html(
            "https://example.com",
            "<head><title>\n   A well sized title  \n</title>\
             <meta name=\"description\" content=\"   short   \"></head>",
        );
        assert_eq!(signals.title, "A well sized title");
        assert!(signals.title_ok);
        assert_eq!(signals.meta_description, "short");
        assert!(!signals.meta_description_ok);
    }

    #[test]
    fn test_missing_alt_counts() {
        let signals = analyze_html(
            "https://example.com",
            r#"<img src="a"><img src="b" alt=""><img src="c" alt="x">"#,
        );
        assert_eq!(signals.images_total, 3);
        assert_eq!(signals.images_missing_alt, 2);
    }

    #[test]
    fn test_sample_page() {
        let html = r##"<html><head><title>Home</title></head><body>
            <h1>Welcome</h1><h1>Again</h1>
            <img src="/1.png" alt="one"><img src="/2.png" alt="two"><img src="/3.png">
            <a href="/">home</a>
            <a href="/about">about</a>
            <a href="contact">contact</a>
            <a href="https://example.com/blog">blog</a>
            <a href="#top">top</a>
            <a href="https://elsewhere.org/">elsewhere</a>
            <a>no href</a>
        </body></html>"##;
        let signals = analyze_html("https://example.com/index.html", html);

        assert_eq!(
            signals,
            SeoSignals {
                title: "Home".to_string(),
                title_ok: false,
                meta_description: String::new(),
                meta_description_ok: false,
                h1_count: 2,
                h1_ok: false,
                images_total: 3,
                images_missing_alt: 1,
                internal_links_count: 5,
            }
        );
    }

    #[test]
    fn test_unparseable_url_yields_zero_internal_links() {
        let signals = analyze_html("not a url", r#"<a href="/a">a</a>"#);
        assert_eq!(signals.internal_links_count, 0);
    }
}
