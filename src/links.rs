use url::Url;

/// Decides which links on a page point back at the page's own host.
///
/// Hosts are compared exactly as written in the page URL and the href:
/// case-sensitive, no IDN or percent-decoding, scheme and port ignored.
#[derive(Debug, Clone)]
pub struct LinkScope {
    /// `scheme://host[:port]` of the audited page, relative hrefs resolve against this
    base: Url,
    /// Host text of the page URL as the user typed it
    host: String,
}

/// Host part of a `scheme://authority` or `//authority` reference, as written.
///
/// Userinfo and port are stripped; IPv6 literals keep their brackets.
/// `None` when the reference carries no authority.
fn raw_host(reference: &str) -> Option<&str> {
    let rest = if let Some(rest) = reference.strip_prefix("//") {
        rest
    } else {
        let (scheme, rest) = reference.split_once(':')?;
        let mut chars = scheme.chars();
        let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return None;
        }
        rest.strip_prefix("//")?
    };

    let authority = rest
        .split(['/', '?', '#', '\\'])
        .next()
        .unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    if host_port.starts_with('[') {
        host_port.find(']').map(|end| &host_port[..=end])
    } else {
        host_port.split(':').next()
    }
}

impl LinkScope {
    /// Build the scope for a page URL. Returns `None` when the URL has no host
    /// (unparseable, `mailto:`, `data:`, ...), in which case no link is internal.
    pub fn for_page(page_url: &str) -> Option<Self> {
        let page_url = page_url.trim();
        let page = Url::parse(page_url).ok()?;
        page.host_str()?;
        let host = raw_host(page_url).filter(|h| !h.is_empty())?.to_string();

        let mut base = page;
        base.set_path("");
        base.set_query(None);
        base.set_fragment(None);
        Some(Self { base, host })
    }

    /// Resolve an href the way a browser would from the site root
    pub fn resolve(&self, href: &str) -> Option<Url> {
        self.base.join(href).ok()
    }

    /// Host an href points at, as written. Relative hrefs inherit the page host.
    pub fn target_host<'a>(&'a self, href: &'a str) -> Option<&'a str> {
        let href = href.trim();
        if let Some(host) = raw_host(href) {
            return Some(host);
        }
        // No authority of its own: relative, or an opaque scheme like mailto:
        let resolved = self.resolve(href)?;
        resolved.host_str()?;
        Some(self.host.as_str())
    }

    /// Whether an href lands on the page's own host
    pub fn is_internal(&self, href: &str) -> bool {
        self.target_host(href) == Some(self.host.as_str())
    }

    /// Count hrefs that resolve to this host. No request is made to verify them.
    pub fn count_internal<'a>(&self, hrefs: impl IntoIterator<Item = &'a str>) -> usize {
        hrefs
            .into_iter()
            .filter(|href| self.is_internal(href))
            .count()
    }
}
