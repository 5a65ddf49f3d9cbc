//! Default stylesheet source selection.
//!
//! Picks where the bootstrap fetch goes, purely from the hostname the
//! page is viewed on: personal GitHub Pages sites get their owner's
//! stylesheet, github.com gets the shared one, everything else falls
//! back to a same-origin path.

/// Same-origin fallback path.
pub const LOCAL_STYLES_PATH: &str = "/styles.css";

/// Shared stylesheet used when browsing github.com itself.
pub const SHARED_STYLES_URL: &str =
    "https://raw.githubusercontent.com/d-as/editable-style/master/styles.css";

/// Template for per-user stylesheets: prefix + pages subdomain label + suffix.
pub const USER_STYLES_PREFIX: &str = "https://raw.githubusercontent.com/";
pub const USER_STYLES_SUFFIX: &str = "/editable-style/master/styles.css";

/// Hostname suffix identifying personal GitHub Pages sites.
pub const PAGES_HOST_SUFFIX: &str = ".github.io";

const CODE_HOST: &str = "github.com";

/// Where the default stylesheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleLocator {
    Remote(String),
    Local(&'static str),
}

impl StyleLocator {
    pub fn as_str(&self) -> &str {
        match self {
            StyleLocator::Remote(url) => url,
            StyleLocator::Local(path) => path,
        }
    }
}

/// Derive the bootstrap source from the viewing hostname.
pub fn default_style_locator(hostname: &str) -> StyleLocator {
    if let Some(rest) = hostname.strip_suffix(PAGES_HOST_SUFFIX) {
        // user.github.io -> "user"; deeper subdomains keep the leading label
        if let Some(label) = rest.split('.').next().filter(|l| !l.is_empty()) {
            return StyleLocator::Remote(format!(
                "{USER_STYLES_PREFIX}{label}{USER_STYLES_SUFFIX}"
            ));
        }
    }

    if hostname == CODE_HOST {
        return StyleLocator::Remote(SHARED_STYLES_URL.to_owned());
    }

    StyleLocator::Local(LOCAL_STYLES_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_pages_host_uses_owner_stylesheet() {
        let locator = default_style_locator("alice.github.io");
        assert_eq!(
            locator,
            StyleLocator::Remote(format!("{USER_STYLES_PREFIX}alice{USER_STYLES_SUFFIX}"))
        );
    }

    #[test]
    fn nested_pages_subdomain_keeps_leading_label() {
        let locator = default_style_locator("docs.alice.github.io");
        assert_eq!(
            locator,
            StyleLocator::Remote(format!("{USER_STYLES_PREFIX}docs{USER_STYLES_SUFFIX}"))
        );
    }

    #[test]
    fn code_host_uses_shared_stylesheet() {
        let locator = default_style_locator("github.com");
        assert_eq!(locator, StyleLocator::Remote(SHARED_STYLES_URL.to_owned()));
    }

    #[test]
    fn other_hosts_fall_back_to_local_path() {
        let locator = default_style_locator("example.com");
        assert_eq!(locator, StyleLocator::Local(LOCAL_STYLES_PATH));
        assert_eq!(locator.as_str(), "/styles.css");
    }

    #[test]
    fn bare_pages_domain_is_not_a_personal_site() {
        assert_eq!(
            default_style_locator("github.io"),
            StyleLocator::Local(LOCAL_STYLES_PATH)
        );
    }
}
