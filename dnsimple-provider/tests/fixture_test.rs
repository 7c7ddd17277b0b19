//! Fixture backend behaviour
//!
//! ```bash
//! cargo test -p dnsimple-provider --test fixture_test
//! ```

mod common;

use dnsimple_provider::{DEMO_DOMAINS, DnsimpleBackend, FixtureBackend, ProviderError};

#[tokio::test]
async fn test_list_domains_is_deterministic_and_sorted() {
    let backend = FixtureBackend::new();
    let first = require_ok!(backend.list_domains().await);
    let second = require_ok!(backend.list_domains().await);

    assert_eq!(first, second);
    assert_eq!(first.len(), DEMO_DOMAINS.len());

    let names: Vec<&str> = first.iter().map(|d| d.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_seed_flags_follow_index() {
    let backend = FixtureBackend::new();
    let domains = require_ok!(backend.list_domains().await);
    let zones = require_ok!(backend.list_zones().await);

    for (i, (domain, zone)) in domains.iter().zip(&zones).enumerate() {
        assert_eq!(domain.name, zone.name);
        assert_eq!(domain.id, 1_028_000 + i as u64);
        assert_eq!(domain.auto_renew, i % 3 == 0, "auto_renew of {}", domain.name);
        assert_eq!(domain.private_whois, i % 2 == 0);
        assert_eq!(zone.id, 972_300 + i as u64);
        assert_eq!(zone.active, i % 4 != 0, "active of {}", zone.name);
        assert_eq!(zone.secondary, i % 9 == 0);
        assert!(!zone.reverse);
    }
}

#[tokio::test]
async fn test_records_for_acme_dev() {
    let backend = FixtureBackend::new();
    let records = require_ok!(backend.list_records("acme.dev").await);

    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![8_800_011, 8_800_012, 8_800_013, 8_800_014, 8_800_015]);

    let types: Vec<&str> = records.iter().map(|r| r.record_type.as_str()).collect();
    assert_eq!(types, vec!["A", "CNAME", "MX", "TXT", "TXT"]);

    let mx = require_ok!(backend.get_record("acme.dev", 8_800_013).await);
    assert_eq!(mx.effective_priority(), Some(10));
    assert_eq!(mx.content, "mail.acme.dev.");

    let acme = require_some!(records.last());
    assert_eq!(acme.name, "_acme-challenge");
    assert_eq!(acme.ttl, 600);
}

#[tokio::test]
async fn test_spf_segment_every_fifth_domain() {
    let backend = FixtureBackend::new();
    let first = require_ok!(backend.list_records("absurdophile.com").await);
    let second = require_ok!(backend.list_records("acme.dev").await);

    assert!(first[3].content.contains("demo-segment="));
    assert!(!second[3].content.contains("demo-segment="));
}

#[tokio::test]
async fn test_delete_domain_removes_everything() {
    let backend = FixtureBackend::new();
    require_ok!(backend.delete_domain("acme.dev").await);

    let domains = require_ok!(backend.list_domains().await);
    assert!(domains.iter().all(|d| d.name != "acme.dev"));
    assert_eq!(domains.len(), DEMO_DOMAINS.len() - 1);

    let zones = require_ok!(backend.list_zones().await);
    assert!(zones.iter().all(|z| z.name != "acme.dev"));

    assert!(matches!(
        backend.list_records("acme.dev").await,
        Err(ProviderError::ZoneNotFound { .. })
    ));
    assert!(matches!(
        backend.delete_domain("acme.dev").await,
        Err(ProviderError::DomainNotFound { .. })
    ));
}

#[tokio::test]
async fn test_delete_record() {
    let backend = FixtureBackend::new();
    require_ok!(backend.delete_record("acme.dev", 8_800_013).await);

    let records = require_ok!(backend.list_records("acme.dev").await);
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r.id != 8_800_013));

    assert_eq!(
        backend.delete_record("acme.dev", 8_800_013).await,
        Err(ProviderError::RecordNotFound {
            zone: "acme.dev".to_string(),
            record_id: 8_800_013,
        })
    );
}

#[tokio::test]
async fn test_identity_is_account_token() {
    let backend = FixtureBackend::new();
    let identity = require_ok!(backend.identity().await);
    let account = require_some!(identity.account);

    assert_eq!(account.id, 424_242);
    assert_eq!(account.email, "demo@dnsimplectl.local");
    assert_eq!(account.plan_identifier.as_deref(), Some("professional"));
    assert!(backend.is_demo());
}
