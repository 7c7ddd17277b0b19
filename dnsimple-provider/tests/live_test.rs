//! Live DNSimple API tests (read-only)
//!
//! ```bash
//! DNSIMPLE_TOKEN=xxx TEST_DOMAIN=example.com DNSIMPLE_SANDBOX=1 \
//!     cargo test -p dnsimple-provider --test live_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use dnsimple_provider::Authenticator;

#[tokio::test]
#[ignore]
async fn test_live_validate_token() {
    skip_if_no_credentials!("DNSIMPLE_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::from_env());
    let token = require_ok!(std::env::var("DNSIMPLE_TOKEN"));
    let identity = require_ok!(ctx.backend.validate_token(&token).await);
    assert!(identity.account.is_some() || identity.user.is_some());

    let account_id = require_ok!(ctx.backend.resolve_account_id(&token, &identity).await);
    assert!(!account_id.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_list_domains_contains_test_domain() {
    skip_if_no_credentials!("DNSIMPLE_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::from_env());
    let domains = require_ok!(ctx.dyn_backend().list_domains().await);
    assert!(
        domains.iter().any(|d| d.name == ctx.domain),
        "{} not in account",
        ctx.domain
    );
}

#[tokio::test]
#[ignore]
async fn test_live_zone_and_records() {
    skip_if_no_credentials!("DNSIMPLE_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::from_env());
    let backend = ctx.dyn_backend();

    let zone = require_ok!(backend.get_zone(&ctx.domain).await);
    assert_eq!(zone.name, ctx.domain);

    let records = require_ok!(backend.list_records(&ctx.domain).await);
    let first = require_some!(records.first());
    let fetched = require_ok!(backend.get_record(&ctx.domain, first.id).await);
    assert_eq!(fetched.id, first.id);

    let file = require_ok!(backend.get_zone_file(&ctx.domain).await);
    assert!(!file.is_empty());
}
