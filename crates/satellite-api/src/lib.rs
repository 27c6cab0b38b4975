// satellite-api: Async Rust client for the Red Hat Satellite REST API
//
// Generic HTTP verb wrappers over the base (`/api`) and embedded Katello
// (`/katello/api`) namespaces with basic auth, configurable TLS
// verification, and a host-search convenience.

pub mod api;
pub mod error;
pub mod instance;
pub mod transport;

pub use api::{Api, Namespace};
pub use error::Error;
pub use instance::Instance;
pub use transport::{TlsMode, TransportConfig};

// Callers pass arbitrary verbs to `Api::request`.
pub use reqwest::Method;
