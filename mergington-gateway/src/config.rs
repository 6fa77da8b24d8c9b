//! Gateway configuration read from the process environment.

use std::path::PathBuf;

/// Default socket address the gateway binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Default origin of the browser front end allowed by CORS.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

const LISTEN_ADDR_VAR: &str = "MERGINGTON_LISTEN_ADDR";
const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";
const CORS_ORIGIN_VAR: &str = "MERGINGTON_CORS_ORIGIN";

/// Runtime settings for the HTTP gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Address passed to `TcpListener::bind`, e.g. `"127.0.0.1:8000"`.
    pub listen_addr: String,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Origin allowed to make credentialed cross-origin requests.
    pub cors_origin: String,
}

impl GatewayConfig {
    /// Create a config with the built-in defaults.
    ///
    /// The static directory defaults to the `static/` folder shipped with
    /// this crate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
            cors_origin: DEFAULT_CORS_ORIGIN.to_owned(),
        }
    }

    /// Build a config from `MERGINGTON_*` environment variables, falling back
    /// to [`GatewayConfig::new`] for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new();
        Self {
            listen_addr: lookup(LISTEN_ADDR_VAR).unwrap_or(defaults.listen_addr),
            static_dir: lookup(STATIC_DIR_VAR).map_or(defaults.static_dir, PathBuf::from),
            cors_origin: lookup(CORS_ORIGIN_VAR).unwrap_or(defaults.cors_origin),
        }
    }

    /// Set the static directory.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Set the allowed CORS origin.
    #[must_use]
    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = origin.into();
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new()
    }
}
