//! Results delivered by the dispatcher.
//!
//! Errors are carried as display strings, already prefixed with what was
//! being attempted (`failed to list zones: ...`), because the UI only ever
//! shows them.

use dnsimple_provider::{Domain, Identity, Zone, ZoneRecord};

use crate::model::state::{DashboardSnapshot, MutationKind, ScreenKind};

#[derive(Debug, Clone)]
pub enum HomeMessage {
    IdentityLoaded(Result<Identity, String>),
}

/// A token that passed validation.
#[derive(Debug, Clone)]
pub struct Validated {
    pub identity: Identity,
    /// `None` when account resolution failed; the backend resolves it again
    /// on first use.
    pub account_id: Option<String>,
}

#[derive(Debug, Clone)]
pub enum AuthMessage {
    Validated {
        token: String,
        result: Result<Validated, String>,
    },
}

#[derive(Debug, Clone)]
pub enum ListPayload {
    Domains(Vec<Domain>),
    Zones(Vec<Zone>),
    Records(Vec<ZoneRecord>),
}

#[derive(Debug, Clone)]
pub enum DetailPayload {
    Domain(Domain),
    Zone(Zone),
    Record(ZoneRecord),
    ZoneFile {
        zone: String,
        text: String,
    },
    ZoneDistribution {
        zone: String,
        distributed: bool,
    },
    RecordDistribution {
        zone: String,
        record_id: u64,
        distributed: bool,
    },
}

#[derive(Debug, Clone)]
pub enum BrowserMessage {
    ListLoaded {
        screen: ScreenKind,
        /// Zone of a record list; `None` for every other screen
        zone: Option<String>,
        result: Result<ListPayload, String>,
    },
    DetailLoaded {
        screen: ScreenKind,
        /// Item key the detail was requested for
        key: String,
        result: Result<DetailPayload, String>,
    },
}

/// Results for the domain dashboard. Each carries the domain it was issued
/// for; results for a dashboard that has since been closed are dropped.
#[derive(Debug, Clone)]
pub enum DashboardMessage {
    Loaded {
        domain: String,
        result: Result<DashboardSnapshot, String>,
    },
    RecordDetail {
        domain: String,
        record_id: u64,
        result: Result<ZoneRecord, String>,
    },
    Diagnostic {
        domain: String,
        result: Result<DetailPayload, String>,
    },
    Mutated {
        domain: String,
        kind: MutationKind,
        record_id: Option<u64>,
        result: Result<(), String>,
    },
}

impl DashboardMessage {
    pub fn domain(&self) -> &str {
        match self {
            Self::Loaded { domain, .. }
            | Self::RecordDetail { domain, .. }
            | Self::Diagnostic { domain, .. }
            | Self::Mutated { domain, .. } => domain,
        }
    }
}
