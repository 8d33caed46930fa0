use chrono::{SecondsFormat, Utc};

use crate::models::{EnvPresence, HealthResponse};

/// Service-level endpoints that never read song data.
#[derive(Clone, Copy)]
pub struct RootController {
    env: EnvPresence,
}

impl RootController {
    pub fn new(env: EnvPresence) -> Self {
        RootController { env }
    }

    pub fn health_check(&self) -> HealthResponse {
        HealthResponse {
            status: "OK",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            env: self.env,
        }
    }
}
