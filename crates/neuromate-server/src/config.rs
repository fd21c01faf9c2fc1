use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use jiff::SignedDuration;

const DEFAULT_BIND: &str = "127.0.0.1:8000";
const DEFAULT_SESSION_TTL_SECS: u64 = 86_400;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(eyre::eyre!("unknown log format: {other} (expected text or json)")),
        }
    }
}

/// Process settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Idle time after which a session is evicted. `None` keeps sessions
    /// for the life of the process.
    pub session_ttl: Option<SignedDuration>,
    pub sweep_interval: Duration,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Read `NEUROMATE_BIND`, `NEUROMATE_SESSION_TTL_SECS`,
    /// `NEUROMATE_SWEEP_INTERVAL_SECS` and `NEUROMATE_LOG_FORMAT`.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind = lookup("NEUROMATE_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind
            .parse()
            .map_err(|e| eyre::eyre!("invalid NEUROMATE_BIND {bind:?}: {e}"))?;

        let ttl_secs = parse_secs(
            &lookup,
            "NEUROMATE_SESSION_TTL_SECS",
            DEFAULT_SESSION_TTL_SECS,
        )?;
        let session_ttl = match ttl_secs {
            0 => None,
            secs => Some(SignedDuration::from_secs(i64::try_from(secs)?)),
        };

        let sweep_secs = parse_secs(
            &lookup,
            "NEUROMATE_SWEEP_INTERVAL_SECS",
            DEFAULT_SWEEP_INTERVAL_SECS,
        )?;
        if sweep_secs == 0 {
            eyre::bail!("NEUROMATE_SWEEP_INTERVAL_SECS must be greater than zero");
        }

        let log_format = match lookup("NEUROMATE_LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => LogFormat::Text,
        };

        Ok(Self {
            bind,
            session_ttl,
            sweep_interval: Duration::from_secs(sweep_secs),
            log_format,
        })
    }
}

fn parse_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> eyre::Result<u64> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid {key} {raw:?}: {e}")),
        None => Ok(default),
    }
}
