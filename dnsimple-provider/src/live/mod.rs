//! DNSimple v2 REST backend

mod error;
mod http;
mod provider;
mod types;

use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::http_client::create_http_client;
use crate::traits::CredentialSource;

pub(crate) const API_BASE: &str = "https://api.dnsimple.com/v2";
pub(crate) const SANDBOX_API_BASE: &str = "https://api.sandbox.dnsimple.com/v2";
/// Largest page size the list endpoints accept.
pub(crate) const MAX_PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("simple/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`LiveBackend`].
#[derive(Debug, Clone, Default)]
pub struct LiveOptions {
    /// Talk to the sandbox environment instead of production.
    pub sandbox: bool,
    /// Account id to use instead of resolving one from the token.
    pub account_override: Option<String>,
}

/// Backend backed by the DNSimple API.
pub struct LiveBackend {
    pub(crate) client: Client,
    pub(crate) base_url: &'static str,
    pub(crate) credentials: Arc<dyn CredentialSource>,
    pub(crate) account_override: Option<String>,
    pub(crate) account_cache: Mutex<Option<String>>,
}

impl LiveBackend {
    pub fn new(credentials: Arc<dyn CredentialSource>, options: LiveOptions) -> Result<Self> {
        let base_url = if options.sandbox {
            SANDBOX_API_BASE
        } else {
            API_BASE
        };
        Ok(Self {
            client: create_http_client(USER_AGENT)?,
            base_url,
            credentials,
            account_override: options
                .account_override
                .filter(|id| !id.trim().is_empty()),
            account_cache: Mutex::new(None),
        })
    }

    /// API root this backend sends requests to.
    pub fn base_url(&self) -> &str {
        self.base_url
    }
}
