use scraper::{ElementRef, Html, Selector};

/// An `<img>` element's relevant attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: Option<String>,
    pub alt: Option<String>,
}

impl Image {
    /// An image counts as lacking alt text when the attribute is absent or empty
    pub fn is_missing_alt(&self) -> bool {
        self.alt.as_deref().is_none_or(str::is_empty)
    }
}

/// Parsed HTML page
pub struct Document {
    html: Html,
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

impl Document {
    pub fn parse(raw_html: &str) -> Self {
        Self {
            html: Html::parse_document(raw_html),
        }
    }

    fn first(&self, css: &str) -> Option<ElementRef<'_>> {
        self.html.select(&selector(css)).next()
    }

    /// Text of the first `<title>` element, untrimmed
    pub fn title(&self) -> Option<String> {
        self.first("title").map(|el| el.text().collect())
    }

    /// `content` of the first `<meta name="description">`.
    ///
    /// `None` both when the tag is missing and when it has no `content`.
    pub fn meta_description(&self) -> Option<String> {
        self.first(r#"meta[name="description"]"#)
            .and_then(|el| el.value().attr("content"))
            .map(str::to_string)
    }

    pub fn h1_count(&self) -> usize {
        self.html.select(&selector("h1")).count()
    }

    pub fn images(&self) -> Vec<Image> {
        self.html
            .select(&selector("img"))
            .map(|el| Image {
                src: el.value().attr("src").map(str::to_string),
                alt: el.value().attr("alt").map(str::to_string),
            })
            .collect()
    }

    /// Raw `href` values of all anchors carrying one (possibly empty)
    pub fn links(&self) -> Vec<String> {
        self.html
            .select(&selector("a[href]"))
            .filter_map(|el| el.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}
