// ABOUTME: Container restart policy as sent to the engine.
// ABOUTME: Known policies are built by factories; unknown wire values pass through untouched.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

const ALWAYS: &str = "always";
const UNLESS_STOPPED: &str = "unless-stopped";
const ON_FAILURE: &str = "on-failure";

/// Restart policy carried in the `RestartPolicy` field of a host config.
///
/// Construct the known policies with [`RestartPolicy::always`],
/// [`RestartPolicy::unless_stopped`] and [`RestartPolicy::on_failure`].
/// Anything else the engine reports is decoded into [`RestartPolicy::Other`]
/// and re-encoded unchanged, so decoding never fails on an unfamiliar name.
///
/// Equality and hashing compare only `(name, max_retry_count)`, whichever
/// variant holds them.
///
/// [`RawRestartPolicy`] cannot be built outside this crate:
///
/// ```compile_fail
/// use hostconfig::{RawRestartPolicy, RestartPolicy};
///
/// let raw = RawRestartPolicy { name: Some("no".to_string()), max_retry_count: None };
/// let _ = RestartPolicy::Other(raw);
/// ```
#[derive(Debug, Clone)]
pub enum RestartPolicy {
    Always,
    UnlessStopped,
    OnFailure { max_retry_count: Option<i64> },
    Other(RawRestartPolicy),
}

/// A decoded restart policy whose shape matches none of the known factories.
#[derive(Debug, Clone)]
pub struct RawRestartPolicy {
    name: Option<String>,
    max_retry_count: Option<i64>,
}

impl RawRestartPolicy {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn max_retry_count(&self) -> Option<i64> {
        self.max_retry_count
    }
}

impl RestartPolicy {
    pub fn always() -> Self {
        RestartPolicy::Always
    }

    pub fn unless_stopped() -> Self {
        RestartPolicy::UnlessStopped
    }

    pub fn on_failure(max_retry_count: impl Into<Option<i64>>) -> Self {
        RestartPolicy::OnFailure {
            max_retry_count: max_retry_count.into(),
        }
    }

    /// Wire name of the policy. Only an undecodable `Other` lacks one.
    pub fn name(&self) -> Option<&str> {
        match self {
            RestartPolicy::Always => Some(ALWAYS),
            RestartPolicy::UnlessStopped => Some(UNLESS_STOPPED),
            RestartPolicy::OnFailure { .. } => Some(ON_FAILURE),
            RestartPolicy::Other(raw) => raw.name(),
        }
    }

    pub fn max_retry_count(&self) -> Option<i64> {
        match self {
            RestartPolicy::Always | RestartPolicy::UnlessStopped => None,
            RestartPolicy::OnFailure { max_retry_count } => *max_retry_count,
            RestartPolicy::Other(raw) => raw.max_retry_count(),
        }
    }

    fn from_parts(name: Option<String>, max_retry_count: Option<i64>) -> Self {
        match (name.as_deref(), max_retry_count) {
            (Some(ALWAYS), None) => RestartPolicy::Always,
            (Some(UNLESS_STOPPED), None) => RestartPolicy::UnlessStopped,
            (Some(ON_FAILURE), count) => RestartPolicy::OnFailure {
                max_retry_count: count,
            },
            _ => {
                tracing::debug!(
                    ?name,
                    ?max_retry_count,
                    "passing through unrecognized restart policy"
                );
                RestartPolicy::Other(RawRestartPolicy {
                    name,
                    max_retry_count,
                })
            }
        }
    }
}

impl PartialEq for RestartPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.max_retry_count() == other.max_retry_count()
    }
}

impl Eq for RestartPolicy {}

impl Hash for RestartPolicy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.max_retry_count().hash(state);
    }
}

/// Parses the docker CLI `--restart` syntax: `always`, `unless-stopped`,
/// `on-failure` or `on-failure:<max-retries>`.
impl FromStr for RestartPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALWAYS => Ok(RestartPolicy::always()),
            UNLESS_STOPPED => Ok(RestartPolicy::unless_stopped()),
            ON_FAILURE => Ok(RestartPolicy::on_failure(None)),
            s if s.starts_with("on-failure:") => {
                let retries_str = &s["on-failure:".len()..];
                let retries = retries_str
                    .parse::<i64>()
                    .map_err(|_| format!("invalid max retries: {}", retries_str))?;
                Ok(RestartPolicy::on_failure(retries))
            }
            _ => Err(format!("unknown restart policy: {}", s)),
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or(""))?;
        if let Some(n) = self.max_retry_count() {
            write!(f, ":{}", n)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct WireRestartPolicy {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(
        rename = "MaximumRetryCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    max_retry_count: Option<i64>,
}

impl Serialize for RestartPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireRestartPolicy {
            name: self.name().map(str::to_string),
            max_retry_count: self.max_retry_count(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RestartPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireRestartPolicy::deserialize(deserializer)?;
        Ok(Self::from_parts(wire.name, wire.max_retry_count))
    }
}
