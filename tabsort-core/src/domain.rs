// Registrable domain extraction

use url::Url;

/// Group key for entries without a registrable domain.
pub const OTHER_OR_LOCAL: &str = "other_or_local";

/// Separator between the URL and the page title in a OneTab line.
pub const TITLE_SEPARATOR: &str = " | ";

/// The URL part of an export line: everything before the first `" | "`.
pub fn url_part(line: &str) -> &str {
    line.split_once(TITLE_SEPARATOR)
        .map_or(line, |(url, _title)| url)
}

/// Parse a URL candidate, retrying with `http://` for scheme-less entries.
pub fn parse_url(candidate: &str) -> Option<Url> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(candidate) {
        if url.has_host() {
            return Some(url);
        }
    }

    Url::parse(&format!("http://{candidate}")).ok()
}

/// The registrable domain (public suffix plus one label) of a URL.
///
/// Only ICANN suffixes count: hosts under a private suffix such as
/// `github.io` group under that suffix's own registrable domain, and hosts
/// whose suffix is not on the list at all (`.local`, `.lan`) have none.
/// IDN roots are returned in Unicode form.
pub fn registrable_domain(url: &Url) -> Option<String> {
    let host = url.domain()?.trim_end_matches('.');
    let name = addr::parse_domain_name(host).ok()?;
    if !name.has_known_suffix() {
        return None;
    }

    let root = if name.is_private() {
        let suffix = icann_suffix(name.suffix())?;
        label_above(host, &suffix)?
    } else {
        name.root()?.to_string()
    };
    Some(to_unicode(&root))
}

/// Longest ICANN suffix contained in a private suffix (`blogspot.co.uk` -> `co.uk`).
fn icann_suffix(private: &str) -> Option<String> {
    let mut rest = private;
    loop {
        rest = rest.split_once('.')?.1;
        let name = addr::parse_domain_name(rest).ok()?;
        if name.is_icann() {
            return Some(name.suffix().to_string());
        }
    }
}

/// `suffix` plus the host label directly to its left.
fn label_above(host: &str, suffix: &str) -> Option<String> {
    let prefix = host.strip_suffix(suffix)?.strip_suffix('.')?;
    let label = prefix.rsplit('.').next().filter(|l| !l.is_empty())?;
    Some(format!("{label}.{suffix}"))
}

fn to_unicode(domain: &str) -> String {
    match idna::domain_to_unicode(domain) {
        (unicode, Ok(())) => unicode,
        (_, Err(_)) => domain.to_string(),
    }
}

/// Registrable domain of an export line, or [`OTHER_OR_LOCAL`].
pub fn extract_domain(line: &str) -> String {
    parse_url(url_part(line))
        .as_ref()
        .and_then(registrable_domain)
        .unwrap_or_else(|| OTHER_OR_LOCAL.to_string())
}
