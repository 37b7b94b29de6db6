//! Runtime configuration, read from the environment at startup.

/// Settings for the API server and its outbound integrations.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,
    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Public base URL, used when building shareable booking links.
    pub public_url: String,
    /// Webhook endpoint for owner notifications. Notifications are
    /// disabled when unset.
    pub notify_url: Option<String>,
    /// Shared secret for signing notification payloads.
    pub notify_secret: Option<String>,
    /// Address that receives new-booking notifications.
    pub owner_email: String,
    /// Skip email verification on signup (development convenience).
    pub auto_confirm: bool,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("GENIE_BIND_ADDR", "0.0.0.0:8080"),
            jwt_secret: env_or("GENIE_JWT_SECRET", "formgenie-secret-key-change-in-production"),
            public_url: env_or("GENIE_PUBLIC_URL", "http://localhost:8080"),
            notify_url: env_opt("GENIE_NOTIFY_URL"),
            notify_secret: env_opt("GENIE_NOTIFY_SECRET"),
            owner_email: env_or("GENIE_OWNER_EMAIL", "admin@example.com"),
            auto_confirm: std::env::var("GENIE_AUTO_CONFIRM")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        let config = ApiConfig::from_env();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(config.notify_url.is_none());
        assert!(!config.auto_confirm);
    }
}
