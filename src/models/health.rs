use serde::Serialize;

/// Which connection settings were supplied through the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvPresence {
    pub has_db_url: bool,
    pub has_direct_url: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub env: EnvPresence,
}
