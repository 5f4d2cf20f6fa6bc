//! Email provider selection

use serde::{Deserialize, Serialize};

/// Provider selection variable
pub const EMAIL_PROVIDER_VAR: &str = "EMAIL_PROVIDER";

pub const RESEND_API_KEY_VAR: &str = "RESEND_API_KEY";
pub const SENDGRID_API_KEY_VAR: &str = "SENDGRID_API_KEY";
pub const MAILGUN_API_KEY_VAR: &str = "MAILGUN_API_KEY";
pub const MAILGUN_DOMAIN_VAR: &str = "MAILGUN_DOMAIN";

/// Supported transactional email providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    #[default]
    Resend,
    SendGrid,
    Mailgun,
}

impl EmailProvider {
    pub const ALL: [EmailProvider; 3] = [
        EmailProvider::Resend,
        EmailProvider::SendGrid,
        EmailProvider::Mailgun,
    ];

    /// Credential variables the provider needs, in check order
    pub fn required_variables(&self) -> &'static [&'static str] {
        match self {
            EmailProvider::Resend => &[RESEND_API_KEY_VAR],
            EmailProvider::SendGrid => &[SENDGRID_API_KEY_VAR],
            EmailProvider::Mailgun => &[MAILGUN_API_KEY_VAR, MAILGUN_DOMAIN_VAR],
        }
    }

    /// Configuration name, as accepted in `EMAIL_PROVIDER`
    pub fn name(&self) -> &'static str {
        match self {
            EmailProvider::Resend => "resend",
            EmailProvider::SendGrid => "sendgrid",
            EmailProvider::Mailgun => "mailgun",
        }
    }

    /// Vendor name for human-readable output
    pub fn display_name(&self) -> &'static str {
        match self {
            EmailProvider::Resend => "Resend",
            EmailProvider::SendGrid => "SendGrid",
            EmailProvider::Mailgun => "Mailgun",
        }
    }
}

impl std::fmt::Display for EmailProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        EmailProvider::ALL
            .into_iter()
            .find(|provider| provider.name() == normalized)
            .ok_or_else(|| format!("Unknown email provider: {}", s))
    }
}
