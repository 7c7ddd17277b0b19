use crate::model::state::{Category, MutationKind, ScreenKind};

/// A backend call requested by the update layer.
///
/// Update functions return `Vec<Task>` instead of calling the backend, which
/// keeps them synchronous and testable; `backend::Dispatcher` runs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    FetchIdentity,
    ValidateToken { token: String },
    Browser { category: Category, request: BrowserRequest },
    Dashboard { domain: String, request: DashboardRequest },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserRequest {
    List {
        screen: ScreenKind,
        zone: Option<String>,
    },
    Detail {
        screen: ScreenKind,
        key: String,
        target: DetailTarget,
    },
}

/// What a detail pane or diagnostics panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailTarget {
    Domain(String),
    Zone(String),
    Record { zone: String, record_id: u64 },
    ZoneFile(String),
    ZoneDistribution(String),
    RecordDistribution { zone: String, record_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardRequest {
    Refresh,
    /// Record in the domain's own zone
    RecordDetail(u64),
    Inspect(DetailTarget),
    Mutate {
        kind: MutationKind,
        record_id: Option<u64>,
    },
}
