//! Server settings for the editor.

use std::time::{Duration, Instant};

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Environment variable for the bind host.
pub const HOST_ENV: &str = "RESUME_EDITOR_HOST";

/// Environment variable for the bind port.
pub const PORT_ENV: &str = "RESUME_EDITOR_PORT";

/// Environment variable for allowed browser origins, comma-separated.
pub const CORS_ORIGINS_ENV: &str = "RESUME_EDITOR_CORS_ORIGINS";

/// Default bind host. The editor is a local tool.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// Browser origins allowed to call the JSON endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin.
    #[default]
    AnyOrigin,
    /// Only the listed origins.
    Origins(Vec<String>),
}

impl CorsPolicy {
    /// Builds a policy from configured origins. No origins, or a `*` among
    /// them, allows any origin.
    pub fn from_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins: Vec<String> = origins
            .into_iter()
            .map(Into::into)
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsPolicy::AnyOrigin
        } else {
            CorsPolicy::Origins(origins)
        }
    }

    /// Returns the middleware enforcing this policy.
    pub fn layer(&self) -> CorsLayer {
        let origin = match self {
            CorsPolicy::AnyOrigin => AllowOrigin::any(),
            CorsPolicy::Origins(origins) => AllowOrigin::list(origins.iter().filter_map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|_| warn!(origin = %o, "Ignoring invalid CORS origin"))
                    .ok()
            })),
        };
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Where the editor listens and who may call it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsPolicy,
    started_at: Instant,
}

impl ApiConfig {
    /// Creates a configuration for `host:port` that accepts any origin.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            cors: CorsPolicy::default(),
            started_at: Instant::now(),
        }
    }

    /// Restricts cross-origin access.
    pub fn with_cors(mut self, cors: CorsPolicy) -> Self {
        self.cors = cors;
        self
    }

    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the URL to open in a browser.
    pub fn url(&self) -> String {
        format!("http://{}", self.bind_address())
    }

    /// Time since this configuration was created, i.e. since server start.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}
