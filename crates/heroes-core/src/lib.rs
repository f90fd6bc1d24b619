//! Hero data access and detail view logic, between `heroes-api` and the CLI.
//!
//! - **[`HeroService`]**: CRUD over the hero collection. Each call logs one
//!   outcome to the [`MessageLog`]; failures are logged and then either
//!   replaced by a fallback value or returned, per [`FailurePolicy`].
//!
//! - **[`MessageLog`]**: Append-only, cheaply cloneable log of outcome
//!   messages. Owned by the composition root and injected everywhere.
//!
//! - **[`HeroDetail`]**: Detail view controller: reads the `id` route
//!   parameter, loads the hero, edits a working copy, saves and navigates
//!   back. Teardown cancels in-flight requests.

pub mod config;
pub mod convert;
pub mod detail;
pub mod error;
pub mod message;
pub mod model;
pub mod navigation;
pub mod service;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{FailurePolicy, ServiceConfig, TlsVerification};
pub use detail::{EditPhase, HeroDetail, LoadState};
pub use error::CoreError;
pub use message::{Message, MessageLog};
pub use model::{Hero, HeroId, NewHero};
pub use navigation::{History, Navigator, ParamMap, RouteParams};
pub use service::HeroService;
