use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{Account, Domain, Identity, Zone, ZoneRecord};

use super::FixtureState;

/// Domains served in demo mode, already in name order.
pub const DEMO_DOMAINS: [&str; 25] = [
    "absurdophile.com",
    "acme.dev",
    "alpha-example.net",
    "beta-labs.io",
    "bluebird.ai",
    "canvasworks.co",
    "deltaops.com",
    "echovalley.org",
    "foxtrotapps.dev",
    "glaciermail.com",
    "harborstack.io",
    "ivorypixel.net",
    "jupiterhub.app",
    "kineticdata.dev",
    "lighthouse.tools",
    "mintorchard.com",
    "northfieldhq.com",
    "opalroute.io",
    "paperplane.dev",
    "quietforest.org",
    "rangergrid.com",
    "signalpath.io",
    "tideline.app",
    "umbraworks.dev",
    "vectorlane.net",
];

pub const DEMO_ACCOUNT_ID: u64 = 424_242;
pub const DEMO_EMAIL: &str = "demo@dnsimplectl.local";

const DOMAIN_ID_BASE: u64 = 1_028_000;
const ZONE_ID_BASE: u64 = 972_300;
const RECORD_ID_BASE: u64 = 8_800_000;

const SPF: &str = "v=spf1 include:_spf.google.com include:mailgun.org include:amazonses.com ip4:192.0.2.42 ip4:198.51.100.17 ~all";

fn seeded_at() -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2026, 2, 26, 12, 0, 0).single()
}

pub(super) fn build() -> FixtureState {
    let now = seeded_at();
    let identity = Identity {
        account: Some(Account {
            id: DEMO_ACCOUNT_ID,
            email: DEMO_EMAIL.to_string(),
            plan_identifier: Some("professional".to_string()),
            created_at: now,
            updated_at: now,
        }),
        user: None,
    };

    let mut domains = BTreeMap::new();
    let mut zones = BTreeMap::new();
    let mut records = BTreeMap::new();

    for (i, name) in (0_u64..).zip(DEMO_DOMAINS) {
        domains.insert(
            name.to_string(),
            Domain {
                id: DOMAIN_ID_BASE + i,
                account_id: Some(DEMO_ACCOUNT_ID),
                name: name.to_string(),
                unicode_name: Some(name.to_string()),
                state: "hosted".to_string(),
                auto_renew: i % 3 == 0,
                private_whois: i % 2 == 0,
                expires_at: Utc.with_ymd_and_hms(2027, 12, 31, 0, 0, 0).single(),
                created_at: now,
                updated_at: now,
            },
        );

        zones.insert(
            name.to_string(),
            Zone {
                id: ZONE_ID_BASE + i,
                account_id: Some(DEMO_ACCOUNT_ID),
                name: name.to_string(),
                reverse: false,
                secondary: i % 9 == 0,
                active: i % 4 != 0,
                created_at: now,
                updated_at: now,
            },
        );

        records.insert(name.to_string(), seed_records(name, i, now));
    }

    FixtureState {
        identity,
        domains,
        zones,
        records,
    }
}

fn seed_records(zone: &str, i: u64, now: Option<DateTime<Utc>>) -> Vec<ZoneRecord> {
    let base = RECORD_ID_BASE + i * 10;
    let mut spf = SPF.to_string();
    if i % 5 == 0 {
        spf.push_str(" demo-segment=");
        spf.push_str(&"abcdef0123456789".repeat(8));
    }

    let record = |offset: u64, record_type: &str, name: &str, content: String| ZoneRecord {
        id: base + offset,
        zone_id: zone.to_string(),
        parent_id: None,
        name: name.to_string(),
        content,
        ttl: 3600,
        priority: None,
        record_type: record_type.to_string(),
        regions: vec!["global".to_string()],
        system_record: false,
        created_at: now,
        updated_at: now,
    };

    vec![
        record(1, "A", "", format!("203.0.113.{}", i % 200 + 10)),
        record(2, "CNAME", "www", format!("{zone}.")),
        ZoneRecord {
            priority: Some(10),
            ..record(3, "MX", "", format!("mail.{zone}."))
        },
        record(4, "TXT", "", spf),
        ZoneRecord {
            ttl: 600,
            ..record(
                5,
                "TXT",
                "_acme-challenge",
                format!("{}{i}", "challenge-token-".repeat(7)),
            )
        },
    ]
}
