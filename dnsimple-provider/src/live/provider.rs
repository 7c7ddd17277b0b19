//! Backend trait implementations for the live API

use async_trait::async_trait;
use reqwest::Method;

use crate::error::{ProviderError, Result};
use crate::traits::{Authenticator, DnsimpleBackend};
use crate::types::{Account, Domain, Identity, Zone, ZoneRecord};
use crate::utils::log_sanitizer::mask_token;

use super::LiveBackend;
use super::error::Resource;
use super::types::{DistributionData, ZoneFileData};

fn enc(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

impl LiveBackend {
    async fn whoami(&self, token: &str) -> Result<Identity> {
        let identity: Identity = self.get_data("/whoami", token, Resource::Account).await?;
        if identity.account.is_none() && identity.user.is_none() {
            return Err(ProviderError::MissingIdentity);
        }
        Ok(identity)
    }

    /// Account id for URL paths: override, then cache, then stored config,
    /// then a whoami round trip whose answer is remembered.
    async fn account_id(&self, token: &str) -> Result<String> {
        if let Some(id) = &self.account_override {
            return Ok(id.clone());
        }

        let mut cache = self.account_cache.lock().await;
        if let Some(id) = cache.as_ref() {
            return Ok(id.clone());
        }

        let id = match self.credentials.account_id() {
            Some(id) => id,
            None => {
                let identity = self.whoami(token).await?;
                let id = self.resolve_account_id(token, &identity).await?;
                log::info!("[dnsimple] Resolved account id {id}");
                self.credentials.remember_account_id(&id);
                id
            }
        };
        *cache = Some(id.clone());
        Ok(id)
    }

    /// Token plus the `/{account}` path prefix.
    async fn scope(&self) -> Result<(String, String)> {
        let token = self.credentials.token()?;
        let account = self.account_id(&token).await?;
        Ok((token, format!("/{}", enc(&account))))
    }
}

#[async_trait]
impl Authenticator for LiveBackend {
    async fn validate_token(&self, token: &str) -> Result<Identity> {
        log::info!("[dnsimple] Validating token {}", mask_token(token));
        self.whoami(token).await
    }

    async fn resolve_account_id(&self, token: &str, identity: &Identity) -> Result<String> {
        if let Some(account) = &identity.account {
            return Ok(account.id.to_string());
        }
        if identity.user.is_none() {
            return Err(ProviderError::MissingIdentity);
        }
        let accounts: Vec<Account> = self.get_data("/accounts", token, Resource::Account).await?;
        accounts
            .first()
            .map(|a| a.id.to_string())
            .ok_or(ProviderError::NoAccounts)
    }
}

#[async_trait]
impl DnsimpleBackend for LiveBackend {
    fn is_demo(&self) -> bool {
        false
    }

    async fn identity(&self) -> Result<Identity> {
        let token = self.credentials.token()?;
        self.whoami(&token).await
    }

    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let (token, account) = self.scope().await?;
        self.get_all(&format!("{account}/domains"), &token, Resource::Account)
            .await
    }

    async fn get_domain(&self, name: &str) -> Result<Domain> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/domains/{}", enc(name));
        self.get_data(&path, &token, Resource::Domain(name)).await
    }

    async fn delete_domain(&self, name: &str) -> Result<()> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/domains/{}", enc(name));
        self.send(Method::DELETE, &path, &token, Resource::Domain(name))
            .await?;
        log::info!("[dnsimple] Deleted domain {name}");
        Ok(())
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let (token, account) = self.scope().await?;
        self.get_all(&format!("{account}/zones"), &token, Resource::Account)
            .await
    }

    async fn get_zone(&self, name: &str) -> Result<Zone> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/zones/{}", enc(name));
        self.get_data(&path, &token, Resource::Zone(name)).await
    }

    async fn get_zone_file(&self, name: &str) -> Result<String> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/zones/{}/file", enc(name));
        let file: ZoneFileData = self.get_data(&path, &token, Resource::Zone(name)).await?;
        Ok(file.zone.trim().to_string())
    }

    async fn check_zone_distribution(&self, name: &str) -> Result<bool> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/zones/{}/distribution", enc(name));
        let data: DistributionData = self.get_data(&path, &token, Resource::Zone(name)).await?;
        Ok(data.distributed)
    }

    async fn activate_zone_dns(&self, name: &str) -> Result<()> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/zones/{}/activation", enc(name));
        self.send(Method::PUT, &path, &token, Resource::Zone(name))
            .await?;
        log::info!("[dnsimple] Activated DNS for zone {name}");
        Ok(())
    }

    async fn deactivate_zone_dns(&self, name: &str) -> Result<()> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/zones/{}/activation", enc(name));
        self.send(Method::DELETE, &path, &token, Resource::Zone(name))
            .await?;
        log::info!("[dnsimple] Deactivated DNS for zone {name}");
        Ok(())
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<ZoneRecord>> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/zones/{}/records", enc(zone));
        self.get_all(&path, &token, Resource::Zone(zone)).await
    }

    async fn get_record(&self, zone: &str, record_id: u64) -> Result<ZoneRecord> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/zones/{}/records/{record_id}", enc(zone));
        self.get_data(&path, &token, Resource::Record(zone, record_id))
            .await
    }

    async fn check_record_distribution(&self, zone: &str, record_id: u64) -> Result<bool> {
        let (token, account) = self.scope().await?;
        let path = format!(
            "{account}/zones/{}/records/{record_id}/distribution",
            enc(zone)
        );
        let data: DistributionData = self
            .get_data(&path, &token, Resource::Record(zone, record_id))
            .await?;
        Ok(data.distributed)
    }

    async fn delete_record(&self, zone: &str, record_id: u64) -> Result<()> {
        let (token, account) = self.scope().await?;
        let path = format!("{account}/zones/{}/records/{record_id}", enc(zone));
        self.send(
            Method::DELETE,
            &path,
            &token,
            Resource::Record(zone, record_id),
        )
        .await?;
        log::info!("[dnsimple] Deleted record {record_id} from {zone}");
        Ok(())
    }
}
