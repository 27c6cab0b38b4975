// Satellite API HTTP client
//
// Wraps `reqwest::Client` with Satellite-specific URL construction and
// JSON request/response handling. Every call is one independent HTTP
// exchange authenticated with basic auth -- no session, no cookies.

use reqwest::Method;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::error::Error;
use crate::transport::{TlsMode, TransportConfig};

/// Which URL namespace a request targets.
///
/// A Satellite server exposes its base API under `/api` and the embedded
/// Katello API under `/katello/api` on the same host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// The base Satellite API (`/api`).
    Base,
    /// The embedded Katello API (`/katello/api`).
    Katello,
}

impl Namespace {
    /// The literal path prefix for this namespace.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Base => "/api",
            Self::Katello => "/katello/api",
        }
    }
}

/// Raw HTTP client for one Satellite instance.
///
/// Holds the connection configuration (instance URL, credentials, TLS
/// mode, verbose flag) and exposes generic verb methods plus
/// Katello-namespace conveniences. Stateless per call: create one `Api`
/// per target server and reuse it across many requests.
pub struct Api {
    http: reqwest::Client,
    /// Instance root URL. Invariant: never ends with `/`, so resolved
    /// request URLs are exactly `instance_url + prefix + relative_path`.
    instance_url: String,
    username: String,
    password: SecretString,
    verbose: bool,
    /// Retained so the TLS mode can be changed after construction by
    /// rebuilding the client.
    transport: TransportConfig,
}

impl Api {
    /// Create a client with the default transport (TLS verification off,
    /// 30 s timeout). A trailing `/` on `instance_url` is stripped.
    pub fn new(
        instance_url: &str,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Result<Self, Error> {
        Self::with_transport(instance_url, username, password, TransportConfig::default())
    }

    /// Create a client with an explicit [`TransportConfig`].
    pub fn with_transport(
        instance_url: &str,
        username: impl Into<String>,
        password: impl Into<SecretString>,
        transport: TransportConfig,
    ) -> Result<Self, Error> {
        let instance_url = instance_url.strip_suffix('/').unwrap_or(instance_url);
        Url::parse(instance_url)?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            instance_url: instance_url.to_owned(),
            username: username.into(),
            password: password.into(),
            verbose: false,
            transport,
        })
    }

    /// The instance root URL (trailing slash stripped).
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// The configured API username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether verbose request tracing is on.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Toggle verbose request tracing.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Replace the credentials used for subsequent requests.
    pub fn set_credentials(
        &mut self,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) {
        self.username = username.into();
        self.password = password.into();
    }

    /// Change the TLS verification mode.
    ///
    /// reqwest bakes TLS settings into the client, so this rebuilds it;
    /// in-flight requests on other clones are unaffected.
    pub fn set_tls_mode(&mut self, tls: TlsMode) -> Result<(), Error> {
        self.transport.tls = tls;
        self.http = self.transport.build_client()?;
        Ok(())
    }

    // ── Generic request ──────────────────────────────────────────────

    /// Issue one HTTP exchange of the given method to
    /// `instance_url + relative_path` and return the decoded JSON body.
    ///
    /// Sends basic auth and `Accept: application/json`. The body is the
    /// JSON serialization of `payload`, or the literal `null` when no
    /// payload is given -- the Satellite API tolerates (and some
    /// deployments expect) the explicit null body on bodyless verbs.
    /// Any method works, including caller-supplied verbs like PATCH.
    ///
    /// Non-2xx responses surface as [`Error::Status`] with the raw body;
    /// non-JSON bodies as [`Error::Decode`]. No retries.
    pub async fn request(
        &self,
        method: Method,
        relative_path: &str,
        payload: Option<&Value>,
    ) -> Result<Value, Error> {
        let url = format!("{}{relative_path}", self.instance_url);
        debug!("{method} {url}");

        if self.verbose {
            info!("{method} {url}");
            if let Some(payload) = payload {
                info!(
                    "payload:\n{}",
                    serde_json::to_string_pretty(payload).unwrap_or_default()
                );
            }
        }

        let body = payload.unwrap_or(&Value::Null);
        let resp = self
            .http
            .request(method, &url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = truncate_preview(&body, 200);
            Error::Decode {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }

    // ── Verb methods ─────────────────────────────────────────────────

    /// `GET {namespace}{relative_path}`
    pub async fn get(&self, relative_path: &str, namespace: Namespace) -> Result<Value, Error> {
        let path = format!("{}{relative_path}", namespace.prefix());
        self.request(Method::GET, &path, None).await
    }

    /// `POST {namespace}{relative_path}` with a JSON payload.
    pub async fn post(
        &self,
        relative_path: &str,
        payload: &Value,
        namespace: Namespace,
    ) -> Result<Value, Error> {
        let path = format!("{}{relative_path}", namespace.prefix());
        self.request(Method::POST, &path, Some(payload)).await
    }

    /// `PUT {namespace}{relative_path}` with a JSON payload.
    pub async fn put(
        &self,
        relative_path: &str,
        payload: &Value,
        namespace: Namespace,
    ) -> Result<Value, Error> {
        let path = format!("{}{relative_path}", namespace.prefix());
        self.request(Method::PUT, &path, Some(payload)).await
    }

    /// `DELETE {namespace}{relative_path}`
    pub async fn delete(&self, relative_path: &str, namespace: Namespace) -> Result<Value, Error> {
        let path = format!("{}{relative_path}", namespace.prefix());
        self.request(Method::DELETE, &path, None).await
    }

    // ── Katello conveniences ─────────────────────────────────────────

    /// `GET /katello/api{relative_path}`
    pub async fn get_katello(&self, relative_path: &str) -> Result<Value, Error> {
        self.get(relative_path, Namespace::Katello).await
    }

    /// `POST /katello/api{relative_path}` with a JSON payload.
    pub async fn post_katello(
        &self,
        relative_path: &str,
        payload: &Value,
    ) -> Result<Value, Error> {
        self.post(relative_path, payload, Namespace::Katello).await
    }

    /// `PUT /katello/api{relative_path}` with a JSON payload.
    pub async fn put_katello(&self, relative_path: &str, payload: &Value) -> Result<Value, Error> {
        self.put(relative_path, payload, Namespace::Katello).await
    }

    /// `DELETE /katello/api{relative_path}`
    pub async fn delete_katello(&self, relative_path: &str) -> Result<Value, Error> {
        self.delete(relative_path, Namespace::Katello).await
    }
}

/// Truncate to at most `max` bytes without splitting a UTF-8 character.
fn truncate_preview(body: &str, max: usize) -> &str {
    let mut end = body.len().min(max);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
