use serde::Deserialize;

/// `{"data": ...}` wrapper around every successful response.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

/// Error body, e.g. `{"message": "Authentication failed"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ZoneFileData {
    pub zone: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DistributionData {
    pub distributed: bool,
}
