//! HTTP server configuration object.

use std::net::SocketAddr;

use exam_backend::settings::AppSettings;

/// Resolved configuration for [`super::create_server`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed_fixtures: bool,
    pub(crate) exam_id_start: u64,
}

impl ServerConfig {
    /// Construct a configuration seeding fixtures and numbering new exams from
    /// `exam_id_start`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, exam_id_start: u64) -> Self {
        Self {
            bind_addr,
            seed_fixtures: true,
            exam_id_start,
        }
    }

    /// Start with empty repositories.
    #[must_use]
    pub fn without_fixtures(mut self) -> Self {
        self.seed_fixtures = false;
        self
    }

    /// Resolve loaded settings.
    ///
    /// # Errors
    /// Propagates invalid host values from [`AppSettings::bind_addr`].
    pub fn from_settings(settings: &AppSettings) -> std::io::Result<Self> {
        let config = Self::new(settings.bind_addr()?, settings.exam_id_start());
        Ok(if settings.skip_fixtures {
            config.without_fixtures()
        } else {
            config
        })
    }
}
