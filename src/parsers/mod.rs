pub mod html;


pub use html::{Document, Image};

/// Parse a raw HTML page into a queryable [`Document`].
///
/// Parsing is best effort: malformed or truncated markup never fails, it just
/// yields whatever elements could be recovered.
pub fn parse(raw_html: &str) -> Document {
    let doc = Document::parse(raw_html);
    ::log::debug!(
        "HTML parser found {} h1, {} images, {} links",
        doc.h1_count(),
        doc.images().len(),
        doc.links().len()
    );
    doc
}
