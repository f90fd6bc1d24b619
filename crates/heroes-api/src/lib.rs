// heroes-api: Async Rust client for a REST hero collection.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::HeroClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use types::{HeroCreate, HeroResponse, HeroUpdate};
