//! # dnsimple-provider
//!
//! Backend abstraction for browsing and changing DNSimple domains, zones and
//! records.
//!
//! ## Backends
//!
//! | Type | Data source | Use |
//! |------|-------------|-----|
//! | [`LiveBackend`] | DNSimple v2 REST API | normal operation |
//! | [`FixtureBackend`] | seeded in-memory data | demo mode, tests |
//!
//! Both implement [`DnsimpleBackend`] and [`Authenticator`], so callers hold
//! them as `Arc<dyn DnsimpleBackend>` and never branch on the concrete type.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: platform TLS.
//! - **`rustls`**: pure-Rust TLS.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnsimple_provider::{DnsimpleBackend, FixtureBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = FixtureBackend::new();
//!     for domain in backend.list_domains().await? {
//!         let records = backend.list_records(&domain.name).await?;
//!         println!("{} ({} records)", domain.name, records.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The live backend reads its token through a [`CredentialSource`] on every
//! call, so a token written after start-up is picked up immediately:
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use dnsimple_provider::*;
//! # async fn example(credentials: Arc<dyn CredentialSource>) -> Result<()> {
//! let backend = LiveBackend::new(credentials, LiveOptions::default())?;
//! let identity = backend.identity().await?;
//! println!("{}", identity.token_kind());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError).
//! [`ProviderError::is_expected`] separates user-caused failures (bad token,
//! missing domain) from transport and server failures. Nothing is retried.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod fixture;
mod http_client;
mod live;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};

pub use traits::{Authenticator, CredentialSource, DnsimpleBackend};

pub use types::{Account, Domain, Identity, User, Zone, ZoneRecord};

pub use fixture::{DEMO_ACCOUNT_ID, DEMO_DOMAINS, DEMO_EMAIL, FixtureBackend};
pub use live::{LiveBackend, LiveOptions};
