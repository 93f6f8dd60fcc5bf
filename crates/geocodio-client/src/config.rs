/// Public Geocodio API, version 1.7
pub const DEFAULT_BASE_URL: &str = "https://api.geocod.io/v1.7/";

/// Client-level settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Ask the service for gzip-compressed responses
    pub gzip: bool,
    /// API root that endpoint names are appended to
    pub base_url: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            gzip: true,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientOptions {
    pub fn with_gzip(mut self, gzip: bool) -> Self {
        self.gzip = gzip;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert!(options.gzip);
        assert_eq!(options.base_url, "https://api.geocod.io/v1.7/");
    }

    #[test]
    fn test_setters() {
        let options = ClientOptions::default()
            .with_gzip(false)
            .with_base_url("http://localhost:9000/v1.7/");
        assert!(!options.gzip);
        assert_eq!(options.base_url, "http://localhost:9000/v1.7/");
    }
}
