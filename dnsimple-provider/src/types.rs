use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Identity ============

/// Account attached to an account token, or listed for a user token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub plan_identifier: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// User behind a user token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
}

/// Result of a whoami call. Exactly one side is normally present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Identity {
    /// Whether the token is scoped to a single account.
    pub fn is_account_token(&self) -> bool {
        self.account.is_some()
    }

    /// Human label for the token kind.
    pub fn token_kind(&self) -> &'static str {
        match (&self.account, &self.user) {
            (Some(_), _) => "Account token",
            (None, Some(_)) => "User token",
            (None, None) => "Unknown",
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.account
            .as_ref()
            .map(|a| a.email.as_str())
            .or_else(|| self.user.as_ref().map(|u| u.email.as_str()))
    }
}

// ============ Resources ============

/// A domain registered or hosted in the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    #[serde(default)]
    pub account_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub unicode_name: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub private_whois: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A DNS zone. Shares its name with the domain it serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: u64,
    #[serde(default)]
    pub account_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub secondary: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single record inside a zone. An empty `name` is the zone apex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: u64,
    #[serde(default)]
    pub zone_id: String,
    #[serde(default)]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub system_record: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ZoneRecord {
    /// Record name with the apex shown as `@`.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { "@" } else { &self.name }
    }

    /// Priority, treating zero and absent the same.
    pub fn effective_priority(&self) -> Option<u32> {
        self.priority.filter(|p| *p != 0)
    }
}
