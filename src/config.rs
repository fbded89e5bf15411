use serde::Deserialize;

/// Optional admin credentials; seeding is skipped when either is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub seed: SeedConfig,
}

/// Empty and whitespace-only values count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self {
            admin_email: non_empty(std::env::var("ADMIN_EMAIL").ok()),
            admin_password: non_empty(std::env::var("ADMIN_PASSWORD").ok()),
        }
    }

    pub fn new(admin_email: Option<String>, admin_password: Option<String>) -> Self {
        Self {
            admin_email: non_empty(admin_email),
            admin_password: non_empty(admin_password),
        }
    }

    /// Both values, or `None` if either is unset.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.admin_email.as_deref(), self.admin_password.as_deref()) {
            (Some(email), Some(password)) => Some((email, password)),
            _ => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.admin_email.as_deref()
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        Ok(Self {
            database_url,
            seed: SeedConfig::from_env(),
        })
    }
}
