//! Operational endpoints that bypass signature checks.

/// Paths answered with a static body before any decoding happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedPath {
    Home,
    Version,
    Heartbeat,
    LbHeartbeat,
}

impl ReservedPath {
    /// Exact, case-sensitive match on the decoded request path.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(ReservedPath::Home),
            "/__version__" => Some(ReservedPath::Version),
            "/__heartbeat__" => Some(ReservedPath::Heartbeat),
            "/__lbheartbeat__" => Some(ReservedPath::LbHeartbeat),
            _ => None,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ReservedPath::Home => "home",
            ReservedPath::Version => "version",
            ReservedPath::Heartbeat => "heartbeat",
            ReservedPath::LbHeartbeat => "lbheartbeat",
        }
    }
}
