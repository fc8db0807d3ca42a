use serde::Serialize;

/// Body of `GET /health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    /// Number of live user records at the time of the probe.
    pub users: usize,
}
