//! Input resolution for the address bar

use crate::error::NavigationError;
use crate::Result;

pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://duckduckgo.com/?q=%s";

pub struct AddressResolver {
    /// Search engine URL template (%s replaced with the encoded query)
    search_template: String,
}

impl AddressResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    pub fn set_search_engine(&mut self, template: String) {
        self.search_template = template;
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve free-text input into a canonical absolute URL or a search
    /// query URL.
    pub fn resolve(&self, input: &str) -> Result<String> {
        let input = input.trim();

        if input.is_empty() {
            return Err(NavigationError::InvalidInput(
                "address input is empty".to_string(),
            ));
        }

        // Already a full URL
        if input.starts_with("http://") || input.starts_with("https://") {
            return Ok(input.to_string());
        }

        // No dot anywhere: treat as a search query
        if !input.contains('.') {
            let search_url = self.build_search_url(input);
            tracing::debug!(query = %input, "Resolved input as search");
            return Ok(search_url);
        }

        // Bare domain
        Ok(format!("https://{}", input))
    }

    fn build_search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        self.search_template.replace("%s", &encoded)
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_urls_pass_through() {
        let resolver = AddressResolver::new();

        assert_eq!(
            resolver.resolve("https://example.com/a?b=c").unwrap(),
            "https://example.com/a?b=c"
        );
        assert_eq!(
            resolver.resolve("http://example.com").unwrap(),
            "http://example.com"
        );
        // Whitespace is trimmed first
        assert_eq!(
            resolver.resolve("  https://example.com  ").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_bare_domain_gets_https() {
        let resolver = AddressResolver::new();

        assert_eq!(
            resolver.resolve("example.com").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            resolver.resolve("wikipedia.org").unwrap(),
            "https://wikipedia.org"
        );
    }

    #[test]
    fn test_dotless_input_becomes_search() {
        let resolver =
            AddressResolver::with_search_engine("https://example.com/search?q=%s".to_string());

        assert_eq!(
            resolver.resolve("foo").unwrap(),
            "https://example.com/search?q=foo"
        );
    }

    #[test]
    fn test_search_query_is_percent_encoded() {
        let resolver =
            AddressResolver::with_search_engine("https://example.com/search?q=%s".to_string());

        assert_eq!(
            resolver.resolve("a b").unwrap(),
            "https://example.com/search?q=a%20b"
        );
        assert_eq!(
            resolver.resolve("c&d").unwrap(),
            "https://example.com/search?q=c%26d"
        );
    }

    #[test]
    fn test_empty_input_is_invalid() {
        let resolver = AddressResolver::new();

        assert!(resolver.resolve("").is_err());
        assert!(resolver.resolve("   ").is_err());
    }
}
