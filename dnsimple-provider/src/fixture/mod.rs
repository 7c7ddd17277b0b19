//! In-memory backend for demo mode and tests

mod seed;

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ProviderError, Result};
use crate::traits::{Authenticator, DnsimpleBackend};
use crate::types::{Domain, Identity, Zone, ZoneRecord};

pub use seed::{DEMO_ACCOUNT_ID, DEMO_DOMAINS, DEMO_EMAIL};

#[derive(Debug, Clone)]
struct FixtureState {
    identity: Identity,
    domains: BTreeMap<String, Domain>,
    zones: BTreeMap<String, Zone>,
    records: BTreeMap<String, Vec<ZoneRecord>>,
}

/// Deterministic backend seeded with 25 demo domains, each with a zone and
/// five records. Mutations change the in-memory copy only.
pub struct FixtureBackend {
    state: RwLock<FixtureState>,
}

impl Default for FixtureBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureBackend {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(seed::build()),
        }
    }
}

fn zone_not_found(zone: &str) -> ProviderError {
    ProviderError::ZoneNotFound {
        zone: zone.to_string(),
    }
}

fn zone_file_line(record: &ZoneRecord) -> String {
    let name = record.display_name();
    match record.effective_priority() {
        Some(priority) => format!(
            "{name} {} IN {} {priority} {}",
            record.ttl, record.record_type, record.content
        ),
        None => format!(
            "{name} {} IN {} {}",
            record.ttl, record.record_type, record.content
        ),
    }
}

#[async_trait]
impl DnsimpleBackend for FixtureBackend {
    fn is_demo(&self) -> bool {
        true
    }

    async fn identity(&self) -> Result<Identity> {
        Ok(self.state.read().await.identity.clone())
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        Ok(self.state.read().await.domains.values().cloned().collect())
    }

    async fn get_domain(&self, name: &str) -> Result<Domain> {
        self.state
            .read()
            .await
            .domains
            .get(name)
            .cloned()
            .ok_or_else(|| ProviderError::DomainNotFound {
                domain: name.to_string(),
            })
    }

    async fn delete_domain(&self, name: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if state.domains.remove(name).is_none() {
            return Err(ProviderError::DomainNotFound {
                domain: name.to_string(),
            });
        }
        state.zones.remove(name);
        state.records.remove(name);
        Ok(())
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        Ok(self.state.read().await.zones.values().cloned().collect())
    }

    async fn get_zone(&self, name: &str) -> Result<Zone> {
        self.state
            .read()
            .await
            .zones
            .get(name)
            .cloned()
            .ok_or_else(|| zone_not_found(name))
    }

    async fn get_zone_file(&self, name: &str) -> Result<String> {
        let state = self.state.read().await;
        if !state.zones.contains_key(name) {
            return Err(zone_not_found(name));
        }
        let mut lines = vec![
            format!("$ORIGIN {name}."),
            "@ 3600 IN SOA ns1.dnsimple.com. admin.dnsimple.com. 1 7200 3600 1209600 3600"
                .to_string(),
        ];
        if let Some(records) = state.records.get(name) {
            lines.extend(records.iter().map(zone_file_line));
        }
        Ok(lines.join("\n"))
    }

    async fn check_zone_distribution(&self, name: &str) -> Result<bool> {
        self.state
            .read()
            .await
            .zones
            .get(name)
            .map(|z| z.active)
            .ok_or_else(|| zone_not_found(name))
    }

    async fn activate_zone_dns(&self, name: &str) -> Result<()> {
        let mut state = self.state.write().await;
        let zone = state.zones.get_mut(name).ok_or_else(|| zone_not_found(name))?;
        zone.active = true;
        Ok(())
    }

    async fn deactivate_zone_dns(&self, name: &str) -> Result<()> {
        let mut state = self.state.write().await;
        let zone = state.zones.get_mut(name).ok_or_else(|| zone_not_found(name))?;
        zone.active = false;
        Ok(())
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<ZoneRecord>> {
        let state = self.state.read().await;
        let mut records = state
            .records
            .get(zone)
            .cloned()
            .ok_or_else(|| zone_not_found(zone))?;
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    async fn get_record(&self, zone: &str, record_id: u64) -> Result<ZoneRecord> {
        self.state
            .read()
            .await
            .records
            .get(zone)
            .and_then(|records| records.iter().find(|r| r.id == record_id))
            .cloned()
            .ok_or_else(|| ProviderError::RecordNotFound {
                zone: zone.to_string(),
                record_id,
            })
    }

    async fn check_record_distribution(&self, zone: &str, record_id: u64) -> Result<bool> {
        let state = self.state.read().await;
        let records = state.records.get(zone).ok_or_else(|| zone_not_found(zone))?;
        records
            .iter()
            .find(|r| r.id == record_id)
            .map(|r| r.id % 2 == 0)
            .ok_or_else(|| ProviderError::RecordNotFound {
                zone: zone.to_string(),
                record_id,
            })
    }

    async fn delete_record(&self, zone: &str, record_id: u64) -> Result<()> {
        let mut state = self.state.write().await;
        let records = state
            .records
            .get_mut(zone)
            .ok_or_else(|| zone_not_found(zone))?;
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(ProviderError::RecordNotFound {
                zone: zone.to_string(),
                record_id,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Authenticator for FixtureBackend {
    async fn validate_token(&self, token: &str) -> Result<Identity> {
        if token.trim().is_empty() {
            return Err(ProviderError::InvalidCredentials { raw_message: None });
        }
        self.identity().await
    }

    async fn resolve_account_id(&self, _token: &str, identity: &Identity) -> Result<String> {
        identity
            .account
            .as_ref()
            .map(|a| a.id.to_string())
            .ok_or(ProviderError::NoAccounts)
    }
}
