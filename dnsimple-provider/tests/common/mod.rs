//! Shared helpers for the provider integration tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dnsimple_provider::{
    CredentialSource, DnsimpleBackend, LiveBackend, LiveOptions, ProviderError,
};

/// Return early when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert an `Option` is `Some` and unwrap it.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert a `Result` is `Ok` and unwrap it.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(res.is_ok(), "{}: {res:?}", format_args!($($msg)+));
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Token taken from the environment; nothing is persisted.
pub struct EnvCredentials {
    token: String,
    account_id: Option<String>,
}

impl CredentialSource for EnvCredentials {
    fn token(&self) -> Result<String, ProviderError> {
        Ok(self.token.clone())
    }

    fn account_id(&self) -> Option<String> {
        self.account_id.clone()
    }

    fn remember_account_id(&self, _account_id: &str) {}
}

/// Live backend plus the domain the tests read from.
pub struct TestContext {
    pub backend: Arc<LiveBackend>,
    pub domain: String,
}

impl TestContext {
    /// Built from `DNSIMPLE_TOKEN`, `TEST_DOMAIN`, and optionally
    /// `DNSIMPLE_ACCOUNT_ID` and `DNSIMPLE_SANDBOX`.
    pub fn from_env() -> Option<Self> {
        let token = env::var("DNSIMPLE_TOKEN").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;
        let credentials = Arc::new(EnvCredentials {
            token,
            account_id: env::var("DNSIMPLE_ACCOUNT_ID").ok(),
        });
        let options = LiveOptions {
            sandbox: env::var("DNSIMPLE_SANDBOX").is_ok_and(|v| v == "1"),
            account_override: None,
        };
        let backend = LiveBackend::new(credentials, options).ok()?;
        Some(Self {
            backend: Arc::new(backend),
            domain,
        })
    }

    pub fn dyn_backend(&self) -> Arc<dyn DnsimpleBackend> {
        self.backend.clone()
    }
}
