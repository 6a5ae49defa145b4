//! Source sites and their search URL templates.

use std::fmt;

/// Supported e-commerce sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Amazon,
    Flipkart,
}

impl Platform {
    /// Returns the site's domain.
    pub fn domain(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon.in",
            Platform::Flipkart => "flipkart.com",
        }
    }

    /// Returns the production base URL.
    pub fn base_url(&self) -> String {
        format!("https://www.{}", self.domain())
    }

    /// Builds the search URL against a custom base URL.
    ///
    /// The term is inserted verbatim; escaping is left to the caller.
    pub fn search_url_with_base(&self, base: &str, term: &str) -> String {
        match self {
            // Category node 1805560031 is "Smartphones"
            Platform::Amazon => format!("{}/s?k={}&rh=n%3A1805560031", base, term),
            Platform::Flipkart => {
                format!("{}/search?q={}&otracker=search&otracker1=search", base, term)
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Amazon => "Amazon",
            Platform::Flipkart => "Flipkart",
        };
        write!(f, "{}", name)
    }
}
