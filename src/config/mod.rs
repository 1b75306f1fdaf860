//! Application settings.
//!
//! Every field can be given as a CLI flag or through the environment
//! (`APP_NAME`, `API_V1_PREFIX`, `ALLOWED_ORIGINS`, ...). Flags win over
//! environment variables, which win over the defaults below.

use axum::http::HeaderValue;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::shared::errors::{AppError, Result};

#[derive(Debug, Clone, Parser, PartialEq)]
#[command(name = "plan-it", version, about = "FP&A Platform for KSA Community Schools (AEFE)")]
pub struct Settings {
    /// Display name reported by the API
    #[arg(long, env = "APP_NAME", default_value = "Plan-It")]
    pub app_name: String,

    /// Version reported by `/health`
    #[arg(long, env = "APP_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub app_version: String,

    /// Verbose logging when `RUST_LOG` is not set
    #[arg(long, env = "DEBUG", value_parser = clap::builder::FalseyValueParser::new())]
    pub debug: bool,

    /// Deployment environment name (development, staging, production)
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    /// Mount point of the planning API
    #[arg(long, env = "API_V1_PREFIX", default_value = "/api/v1")]
    pub api_v1_prefix: String,

    /// Comma-separated list of origins allowed by CORS
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Bind address of the standalone API server
    #[arg(long, env = "BIND_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port of the standalone API server
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,
}

impl Settings {
    /// Settings from environment variables and defaults only.
    ///
    /// Used by the fullstack entry point, whose argv belongs to the Dioxus CLI.
    pub fn from_env() -> Result<Self> {
        Self::from_args(["plan-it"])
    }

    /// Settings from process arguments, environment and defaults.
    pub fn load() -> Result<Self> {
        Self::from_args(std::env::args_os())
    }

    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let settings = Self::try_parse_from(args).map_err(|e| AppError::Config(e.to_string()))?;
        settings.validated()
    }

    fn validated(mut self) -> Result<Self> {
        if !self.api_v1_prefix.starts_with('/') || self.api_v1_prefix.ends_with('/') {
            return Err(AppError::Config(format!(
                "API_V1_PREFIX must start with '/' and must not end with '/': {:?}",
                self.api_v1_prefix
            )));
        }

        self.allowed_origins = self
            .allowed_origins
            .iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        // Fail at startup rather than on the first preflight
        self.origin_headers()?;

        Ok(self)
    }

    /// Allowed origins as header values for the CORS layer
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| AppError::Config(format!("Invalid CORS origin: {:?}", origin)))
            })
            .collect()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Settings {
    /// The `default_value`s declared above, ignoring flags and the environment
    fn default() -> Self {
        let matches = Self::command()
            .mut_args(|arg| arg.env(None::<&'static str>))
            .get_matches_from(["plan-it"]);

        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}
