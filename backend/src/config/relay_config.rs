use std::env;

pub const DEFAULT_INBOX: &str = "info@aelio.dev";
pub const DEFAULT_CONTACT_FROM: &str = "Aelio Contact <onboarding@resend.dev>";
pub const DEFAULT_CONFIRMATION_FROM: &str = "Aelio <onboarding@resend.dev>";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Runtime settings for the contact relay, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    /// Missing key means the server still starts and answers every
    /// submission with 503.
    pub resend_api_key: Option<String>,
    pub inbox: String,
    pub contact_from: String,
    pub confirmation_from: String,
    pub bind_addr: String,
    pub frontend_url: Option<String>,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            resend_api_key: get("RESEND_API_KEY"),
            inbox: get("CONTACT_INBOX").unwrap_or_else(|| DEFAULT_INBOX.to_string()),
            contact_from: get("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
            confirmation_from: get("CONFIRMATION_FROM")
                .unwrap_or_else(|| DEFAULT_CONFIRMATION_FROM.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            frontend_url: get("FRONTEND_URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> RelayConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RelayConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        assert_eq!(
            config_from(&[]),
            RelayConfig {
                resend_api_key: None,
                inbox: "info@aelio.dev".to_string(),
                contact_from: "Aelio Contact <onboarding@resend.dev>".to_string(),
                confirmation_from: "Aelio <onboarding@resend.dev>".to_string(),
                bind_addr: "127.0.0.1:3000".to_string(),
                frontend_url: None,
            }
        );
    }

    #[test]
    fn test_overrides_are_trimmed() {
        let config = config_from(&[
            ("RESEND_API_KEY", " re_123 "),
            ("CONTACT_INBOX", "hello@example.com"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("FRONTEND_URL", "https://aelio.dev"),
        ]);
        assert_eq!(config.resend_api_key.as_deref(), Some("re_123"));
        assert_eq!(config.inbox, "hello@example.com");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.frontend_url.as_deref(), Some("https://aelio.dev"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = config_from(&[("RESEND_API_KEY", "   "), ("CONTACT_FROM", "")]);
        assert_eq!(config.resend_api_key, None);
        assert_eq!(config.contact_from, DEFAULT_CONTACT_FROM);
    }
}
