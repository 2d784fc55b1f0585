use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Log severities in RFC 5424 order, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Severity {
    /// Descending list of all levels; the index is the severity rank.
    pub const ALL: [Severity; 8] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn rank(self) -> usize {
        // positions are fixed by ALL, the lookup cannot miss
        Severity::ALL
            .iter()
            .position(|level| *level == self)
            .unwrap_or(0)
    }

    /// Descending prefix of levels admitted by a threshold. No threshold
    /// admits nothing.
    pub fn admitted_by(threshold: Option<Severity>) -> Vec<Severity> {
        match threshold {
            Some(level) => Severity::ALL[..=level.rank()].to_vec(),
            None => Vec::new(),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Emergency => write!(f, "emergency"),
            Severity::Alert => write!(f, "alert"),
            Severity::Critical => write!(f, "critical"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Notice => write!(f, "notice"),
            Severity::Info => write!(f, "info"),
            Severity::Debug => write!(f, "debug"),
        }
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emergency" => Ok(Severity::Emergency),
            "alert" => Ok(Severity::Alert),
            "critical" => Ok(Severity::Critical),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            other => Err(anyhow!("unrecognized log level: {}", other)),
        }
    }
}
