//! Server configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `EXAMS_*` environment variables over an
//! optional configuration file.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address the server binds to when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port the server binds to when none is configured.
pub const DEFAULT_PORT: u16 = 8080;
/// First id handed to exams created at runtime.
pub const DEFAULT_EXAM_ID_START: u64 = 1000;

/// Startup settings for the exam backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMS")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Start with empty repositories instead of the fixture data.
    #[ortho_config(default = false)]
    pub skip_fixtures: bool,
    /// First id handed to exams created at runtime.
    pub exam_id_start: Option<u64>,
}

impl AppSettings {
    /// Configured host, falling back to [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured exam id start, falling back to [`DEFAULT_EXAM_ID_START`].
    pub fn exam_id_start(&self) -> u64 {
        self.exam_id_start.unwrap_or(DEFAULT_EXAM_ID_START)
    }

    /// Socket address built from host and port.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let ip: IpAddr = self.host().parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid host {:?}: {err}", self.host()),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
