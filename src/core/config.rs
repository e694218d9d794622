//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Webhook that receives accepted quote requests as JSON.
    /// Example: https://hooks.example.com/adlah/leads
    pub intake_webhook_url: Option<String>,

    /// Contact address advertised in the footer and in intake logs.
    pub contact_email: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            intake_webhook_url: std::env::var("INTAKE_WEBHOOK_URL").ok(),
            contact_email: std::env::var("CONTACT_EMAIL").ok(),
        }
    }

    /// Check if a lead intake webhook is configured
    pub fn has_intake_webhook(&self) -> bool {
        self.intake_webhook_url.is_some()
    }

    /// Check if a contact address is configured
    pub fn has_contact_email(&self) -> bool {
        self.contact_email.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unconfigured() {
        let config = Config::default();
        assert!(!config.has_intake_webhook());
        assert!(!config.has_contact_email());
    }

    #[test]
    fn reports_configured_webhook() {
        let config = Config {
            intake_webhook_url: Some("https://hooks.example.com/leads".to_string()),
            contact_email: None,
        };
        assert!(config.has_intake_webhook());
        assert!(!config.has_contact_email());
    }
}
