use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Domain, Identity, Zone, ZoneRecord};

/// Data source consumed by the dashboard.
///
/// Implemented by [`LiveBackend`](crate::LiveBackend) against the DNSimple API
/// and by [`FixtureBackend`](crate::FixtureBackend) for demo mode and tests.
/// Implementations are shared across tasks as `Arc<dyn DnsimpleBackend>`.
#[async_trait]
pub trait DnsimpleBackend: Send + Sync {
    /// `true` when serving fixture data.
    fn is_demo(&self) -> bool;

    /// Identity behind the stored token.
    async fn identity(&self) -> Result<Identity>;

    // ============ Domains ============

    /// All domains, across every page.
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    async fn get_domain(&self, name: &str) -> Result<Domain>;

    async fn delete_domain(&self, name: &str) -> Result<()>;

    // ============ Zones ============

    async fn list_zones(&self) -> Result<Vec<Zone>>;

    async fn get_zone(&self, name: &str) -> Result<Zone>;

    /// Zone file text, trimmed.
    async fn get_zone_file(&self, name: &str) -> Result<String>;

    /// Whether the zone is fully distributed to the name servers.
    async fn check_zone_distribution(&self, name: &str) -> Result<bool>;

    async fn activate_zone_dns(&self, name: &str) -> Result<()>;

    async fn deactivate_zone_dns(&self, name: &str) -> Result<()>;

    // ============ Records ============

    async fn list_records(&self, zone: &str) -> Result<Vec<ZoneRecord>>;

    async fn get_record(&self, zone: &str, record_id: u64) -> Result<ZoneRecord>;

    async fn check_record_distribution(&self, zone: &str, record_id: u64) -> Result<bool>;

    async fn delete_record(&self, zone: &str, record_id: u64) -> Result<()>;
}

/// Token validation used by the setup wizard.
///
/// Takes the token explicitly because it has not been stored yet.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Check the token and return the identity it belongs to.
    async fn validate_token(&self, token: &str) -> Result<Identity>;

    /// Account id to operate on. Account tokens use their own account; user
    /// tokens use the first account the user can access.
    async fn resolve_account_id(&self, token: &str, identity: &Identity) -> Result<String>;
}

/// Where the live backend reads credentials from.
///
/// Read on every call so a token written by the wizard is picked up without
/// rebuilding the backend.
pub trait CredentialSource: Send + Sync {
    fn token(&self) -> Result<String>;

    /// Account id cached from an earlier resolution, if any.
    fn account_id(&self) -> Option<String>;

    /// Persist a freshly resolved account id. Failures are ignored.
    fn remember_account_id(&self, account_id: &str);
}
