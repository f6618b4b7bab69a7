#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:3000") // local relay
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("") // same origin
}

/// Where the intake flow sends its data and where it sends the visitor after.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactConfig {
    pub endpoint: Option<String>,
    pub booking_url: Option<String>,
}

impl ContactConfig {
    pub fn from_build_env() -> Self {
        Self::resolve(
            get_backend_url(),
            option_env!("CONTACT_ENDPOINT"),
            option_env!("BOOKING_URL"),
        )
    }

    /// An endpoint override set to an empty string switches submission off.
    pub fn resolve(
        backend_url: &str,
        endpoint_override: Option<&str>,
        booking_url: Option<&str>,
    ) -> Self {
        let endpoint = match endpoint_override {
            Some(value) => non_blank(value),
            None => Some(format!("{}/api/contact", backend_url.trim_end_matches('/'))),
        };
        Self {
            endpoint,
            booking_url: booking_url.and_then(non_blank),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_uses_backend() {
        let config = ContactConfig::resolve("http://localhost:3000/", None, None);
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:3000/api/contact"));
        assert!(config.booking_url.is_none());
    }

    #[test]
    fn test_same_origin_endpoint() {
        let config = ContactConfig::resolve("", None, None);
        assert_eq!(config.endpoint.as_deref(), Some("/api/contact"));
    }

    #[test]
    fn test_empty_override_disables_submission() {
        let config = ContactConfig::resolve("http://localhost:3000", Some("  "), None);
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_booking_url_blank_is_none() {
        let config = ContactConfig::resolve("", None, Some(""));
        assert!(config.booking_url.is_none());
        let config = ContactConfig::resolve("", Some("https://relay.example/hook"), Some("https://cal.example/x"));
        assert_eq!(config.endpoint.as_deref(), Some("https://relay.example/hook"));
        assert_eq!(config.booking_url.as_deref(), Some("https://cal.example/x"));
    }
}
