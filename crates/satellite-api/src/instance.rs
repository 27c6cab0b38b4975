// Structured-use wrapper around one Api.
//
// Domain conveniences live here rather than on Api itself, keeping the
// raw client a pure verb surface.

use secrecy::SecretString;
use serde_json::Value;
use tracing::debug;

use crate::api::{Api, Namespace};
use crate::error::Error;
use crate::transport::TransportConfig;

/// Convenience façade for one Satellite instance.
///
/// Owns exactly one [`Api`] and adds domain helpers on top of the raw
/// verb methods. The underlying client stays reachable through
/// [`api`](Self::api) for anything not covered here.
pub struct Instance {
    api: Api,
}

impl Instance {
    /// Create an instance with the default transport. Parameters match
    /// [`Api::new`].
    pub fn new(
        instance_url: &str,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Result<Self, Error> {
        Ok(Self {
            api: Api::new(instance_url, username, password)?,
        })
    }

    /// Create an instance with an explicit [`TransportConfig`].
    pub fn with_transport(
        instance_url: &str,
        username: impl Into<String>,
        password: impl Into<SecretString>,
        transport: TransportConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            api: Api::with_transport(instance_url, username, password, transport)?,
        })
    }

    /// The underlying raw client.
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Mutable access to the underlying client (verbose flag, TLS mode,
    /// credentials).
    pub fn api_mut(&mut self) -> &mut Api {
        &mut self.api
    }

    /// Search hosts registered to this instance.
    ///
    /// `GET /api/hosts?per_page=1000`, or with a non-empty `search`,
    /// `GET /api/hosts?search=<query>&per_page=1000` where spaces in the
    /// query become `+`. Returns the response unmodified; callers wanting
    /// more than the first 1000 results must page themselves.
    pub async fn hosts(&self, search: &str) -> Result<Value, Error> {
        let path = hosts_path(search);
        debug!(search, "searching hosts");
        self.api.get(&path, Namespace::Base).await
    }
}

fn hosts_path(search: &str) -> String {
    if search.is_empty() {
        "/hosts?per_page=1000".to_owned()
    } else {
        format!("/hosts?search={}&per_page=1000", search.replace(' ', "+"))
    }
}
