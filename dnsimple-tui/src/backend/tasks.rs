use std::sync::Arc;

use dnsimple_provider::{Authenticator, DnsimpleBackend};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::message::{
    AppMessage, AuthMessage, BrowserMessage, BrowserRequest, DashboardMessage, DashboardRequest,
    DetailPayload, DetailTarget, HomeMessage, ListPayload, Task, Validated,
};
use crate::model::state::{DashboardSnapshot, MutationKind, ScreenKind};

/// Backend handles shared by every spawned task.
#[derive(Clone)]
pub struct Services {
    pub backend: Arc<dyn DnsimpleBackend>,
    pub auth: Arc<dyn Authenticator>,
}

/// Runs tasks on the tokio runtime and sends each result back as one
/// [`AppMessage`].
pub struct Dispatcher {
    services: Services,
    tx: UnboundedSender<AppMessage>,
}

impl Dispatcher {
    pub fn new(services: Services) -> (Self, UnboundedReceiver<AppMessage>) {
        let (tx, rx) = unbounded_channel();
        (Self { services, tx }, rx)
    }

    pub fn spawn(&self, task: Task) {
        log::debug!("Dispatching {task:?}");
        let services = self.services.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let message = execute(&services, task).await;
            // The receiver is gone only while shutting down
            let _ = tx.send(message);
        });
    }

    pub fn spawn_all(&self, tasks: impl IntoIterator<Item = Task>) {
        for task in tasks {
            self.spawn(task);
        }
    }
}

fn prefixed<T>(result: dnsimple_provider::Result<T>, what: &str) -> Result<T, String> {
    result.map_err(|e| format!("{what}: {e}"))
}

/// Run one task to completion.
pub async fn execute(services: &Services, task: Task) -> AppMessage {
    let backend = services.backend.as_ref();
    match task {
        Task::FetchIdentity => {
            let result = prefixed(backend.identity().await, "whoami failed");
            AppMessage::Home(HomeMessage::IdentityLoaded(result))
        }

        Task::ValidateToken { token } => {
            let result = validate_token(services.auth.as_ref(), &token).await;
            AppMessage::Auth(AuthMessage::Validated { token, result })
        }

        Task::Browser { category, request } => {
            let message = match request {
                BrowserRequest::List { screen, zone } => {
                    let result = load_list(backend, screen, zone.as_deref()).await;
                    BrowserMessage::ListLoaded {
                        screen,
                        zone,
                        result,
                    }
                }
                BrowserRequest::Detail {
                    screen,
                    key,
                    target,
                } => BrowserMessage::DetailLoaded {
                    screen,
                    key,
                    result: load_detail(backend, target).await,
                },
            };
            AppMessage::Browser(category, message)
        }

        Task::Dashboard { domain, request } => {
            let message = match request {
                DashboardRequest::Refresh => {
                    let result = load_dashboard(backend, &domain).await;
                    DashboardMessage::Loaded { domain, result }
                }
                DashboardRequest::RecordDetail(record_id) => {
                    let result =
                        prefixed(backend.get_record(&domain, record_id).await, "failed to get record");
                    DashboardMessage::RecordDetail {
                        domain,
                        record_id,
                        result,
                    }
                }
                DashboardRequest::Inspect(target) => {
                    let result = load_detail(backend, target).await;
                    DashboardMessage::Diagnostic { domain, result }
                }
                DashboardRequest::Mutate { kind, record_id } => {
                    let result = mutate(backend, &domain, kind, record_id).await;
                    DashboardMessage::Mutated {
                        domain,
                        kind,
                        record_id,
                        result,
                    }
                }
            };
            AppMessage::Dashboard(message)
        }
    }
}

async fn validate_token(auth: &dyn Authenticator, token: &str) -> Result<Validated, String> {
    let identity = auth.validate_token(token).await.map_err(|e| e.to_string())?;

    // Best effort: the backend resolves the account again on first use
    let account_id = match auth.resolve_account_id(token, &identity).await {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("Could not resolve account id: {e}");
            None
        }
    };

    Ok(Validated {
        identity,
        account_id,
    })
}

async fn load_list(
    backend: &dyn DnsimpleBackend,
    screen: ScreenKind,
    zone: Option<&str>,
) -> Result<ListPayload, String> {
    match screen {
        ScreenKind::DomainList | ScreenKind::DomainDashboard => {
            prefixed(backend.list_domains().await, "failed to list domains").map(ListPayload::Domains)
        }
        ScreenKind::ZoneList | ScreenKind::RecordZones => {
            prefixed(backend.list_zones().await, "failed to list zones").map(ListPayload::Zones)
        }
        ScreenKind::RecordList => {
            let zone = zone.unwrap_or_default();
            prefixed(
                backend.list_records(zone).await,
                &format!("failed to list records for {zone}"),
            )
            .map(ListPayload::Records)
        }
    }
}

async fn load_detail(backend: &dyn DnsimpleBackend, target: DetailTarget) -> Result<DetailPayload, String> {
    match target {
        DetailTarget::Domain(name) => {
            prefixed(backend.get_domain(&name).await, "failed to get domain").map(DetailPayload::Domain)
        }
        DetailTarget::Zone(name) => {
            prefixed(backend.get_zone(&name).await, "failed to get zone").map(DetailPayload::Zone)
        }
        DetailTarget::Record { zone, record_id } => prefixed(
            backend.get_record(&zone, record_id).await,
            "failed to get record",
        )
        .map(DetailPayload::Record),
        DetailTarget::ZoneFile(zone) => {
            let text = prefixed(backend.get_zone_file(&zone).await, "failed to get zone file")?;
            Ok(DetailPayload::ZoneFile { zone, text })
        }
        DetailTarget::ZoneDistribution(zone) => {
            let distributed = prefixed(
                backend.check_zone_distribution(&zone).await,
                "failed to check zone distribution",
            )?;
            Ok(DetailPayload::ZoneDistribution { zone, distributed })
        }
        DetailTarget::RecordDistribution { zone, record_id } => {
            let distributed = prefixed(
                backend.check_record_distribution(&zone, record_id).await,
                "failed to check record distribution",
            )?;
            Ok(DetailPayload::RecordDistribution {
                zone,
                record_id,
                distributed,
            })
        }
    }
}

/// Domain, then zone, then records.
///
/// The domain is required. A zone failure becomes a warning and skips the
/// records; a records failure becomes a warning and leaves them empty.
pub async fn load_dashboard(backend: &dyn DnsimpleBackend, name: &str) -> Result<DashboardSnapshot, String> {
    let domain = prefixed(backend.get_domain(name).await, "failed to get domain")?;

    let mut snapshot = DashboardSnapshot {
        domain: Some(domain),
        ..DashboardSnapshot::default()
    };

    match backend.get_zone(name).await {
        Ok(zone) => {
            snapshot.zone = Some(zone);
            match backend.list_records(name).await {
                Ok(records) => snapshot.records = records,
                Err(e) => snapshot.warnings.push(format!("records unavailable: {e}")),
            }
        }
        Err(e) => snapshot.warnings.push(format!("zone unavailable: {e}")),
    }

    Ok(snapshot)
}

async fn mutate(
    backend: &dyn DnsimpleBackend,
    domain: &str,
    kind: MutationKind,
    record_id: Option<u64>,
) -> Result<(), String> {
    let result = match (kind, record_id) {
        (MutationKind::ActivateZone, _) => backend.activate_zone_dns(domain).await,
        (MutationKind::DeactivateZone, _) => backend.deactivate_zone_dns(domain).await,
        (MutationKind::DeleteRecord, Some(id)) => backend.delete_record(domain, id).await,
        (MutationKind::DeleteRecord, None) => return Err("no record selected".to_string()),
        (MutationKind::DeleteDomain, _) => backend.delete_domain(domain).await,
    };
    prefixed(result, &format!("failed to {}", kind.verb()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use dnsimple_provider::{
        Domain, FixtureBackend, Identity, ProviderError, Result as ProviderResult, Zone, ZoneRecord,
    };

    use super::*;
    use crate::model::state::Category;

    /// Serves one domain; zone and record calls fail on demand and are
    /// counted.
    #[derive(Default)]
    struct StubBackend {
        fail_domain: bool,
        fail_zone: bool,
        fail_records: bool,
        zone_calls: AtomicUsize,
        record_calls: AtomicUsize,
    }

    fn network(detail: &str) -> ProviderError {
        ProviderError::NetworkError {
            detail: detail.to_string(),
        }
    }

    #[async_trait]
    impl DnsimpleBackend for StubBackend {
        fn is_demo(&self) -> bool {
            true
        }
        async fn identity(&self) -> ProviderResult<Identity> {
            Ok(Identity::default())
        }
        async fn list_domains(&self) -> ProviderResult<Vec<Domain>> {
            Ok(Vec::new())
        }
        async fn get_domain(&self, name: &str) -> ProviderResult<Domain> {
            if self.fail_domain {
                return Err(ProviderError::DomainNotFound {
                    domain: name.to_string(),
                });
            }
            Ok(Domain {
                name: name.to_string(),
                ..Domain::default()
            })
        }
        async fn delete_domain(&self, _: &str) -> ProviderResult<()> {
            Err(network("boom"))
        }
        async fn list_zones(&self) -> ProviderResult<Vec<Zone>> {
            Ok(Vec::new())
        }
        async fn get_zone(&self, name: &str) -> ProviderResult<Zone> {
            self.zone_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_zone {
                return Err(network("zone down"));
            }
            Ok(Zone {
                name: name.to_string(),
                ..Zone::default()
            })
        }
        async fn get_zone_file(&self, _: &str) -> ProviderResult<String> {
            Ok(String::new())
        }
        async fn check_zone_distribution(&self, _: &str) -> ProviderResult<bool> {
            Ok(true)
        }
        async fn activate_zone_dns(&self, _: &str) -> ProviderResult<()> {
            Ok(())
        }
        async fn deactivate_zone_dns(&self, _: &str) -> ProviderResult<()> {
            Ok(())
        }
        async fn list_records(&self, _: &str) -> ProviderResult<Vec<ZoneRecord>> {
            self.record_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_records {
                return Err(network("records down"));
            }
            Ok(vec![ZoneRecord::default()])
        }
        async fn get_record(&self, zone: &str, record_id: u64) -> ProviderResult<ZoneRecord> {
            Err(ProviderError::RecordNotFound {
                zone: zone.to_string(),
                record_id,
            })
        }
        async fn check_record_distribution(&self, _: &str, _: u64) -> ProviderResult<bool> {
            Ok(false)
        }
        async fn delete_record(&self, _: &str, _: u64) -> ProviderResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn dashboard_domain_failure_loads_nothing_else() {
        let stub = StubBackend {
            fail_domain: true,
            ..StubBackend::default()
        };
        let err = load_dashboard(&stub, "gone.test").await.unwrap_err();
        assert_eq!(err, "failed to get domain: domain not found: gone.test");
        assert_eq!(stub.zone_calls.load(Ordering::SeqCst), 0);
        assert_eq!(stub.record_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn dashboard_zone_failure_is_one_warning() {
        let stub = StubBackend {
            fail_zone: true,
            ..StubBackend::default()
        };
        let snapshot = load_dashboard(&stub, "acme.dev").await.unwrap();
        assert!(snapshot.domain.is_some());
        assert!(snapshot.zone.is_none());
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.warnings, vec!["zone unavailable: network error: zone down"]);
        assert_eq!(stub.record_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn dashboard_records_failure_keeps_zone() {
        let stub = StubBackend {
            fail_records: true,
            ..StubBackend::default()
        };
        let snapshot = load_dashboard(&stub, "acme.dev").await.unwrap();
        assert!(snapshot.zone.is_some());
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.warnings, vec!["records unavailable: network error: records down"]);
    }

    #[tokio::test]
    async fn mutation_errors_name_the_verb() {
        let stub = StubBackend::default();
        let err = mutate(&stub, "acme.dev", MutationKind::DeleteDomain, None)
            .await
            .unwrap_err();
        assert_eq!(err, "failed to delete domain: network error: boom");
        assert!(mutate(&stub, "acme.dev", MutationKind::DeleteRecord, Some(1)).await.is_ok());
    }

    #[tokio::test]
    async fn record_list_against_fixture() {
        let fixture = Arc::new(FixtureBackend::new());
        let services = Services {
            backend: fixture.clone(),
            auth: fixture,
        };
        let message = execute(
            &services,
            Task::Browser {
                category: Category::Records,
                request: BrowserRequest::List {
                    screen: ScreenKind::RecordList,
                    zone: Some("acme.dev".to_string()),
                },
            },
        )
        .await;

        let AppMessage::Browser(Category::Records, BrowserMessage::ListLoaded { result, .. }) = message
        else {
            panic!("unexpected message: {message:?}");
        };
        let Ok(ListPayload::Records(records)) = result else {
            panic!("records expected");
        };
        assert_eq!(records.len(), 5);
    }

    #[tokio::test]
    async fn empty_token_is_rejected() {
        let fixture = Arc::new(FixtureBackend::new());
        let result = validate_token(fixture.as_ref(), "").await;
        assert!(result.is_err());

        let ok = validate_token(fixture.as_ref(), "demo").await.unwrap();
        assert_eq!(ok.account_id.as_deref(), Some("424242"));
    }
}
