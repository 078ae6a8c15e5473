//! Director configuration.
//!
//! Built from a loosely-typed config payload (whatever the host hands the
//! plugin). Configuration problems are never fatal: any missing, mistyped,
//! or out-of-range field silently falls back to its default.

use serde_json::Value;

pub const DEFAULT_ACK_MESSAGE: &str = "On it — I'll keep you posted.";
pub const DEFAULT_PROGRESS_MIN_DURATION_MS: u64 = 2_000;
pub const DEFAULT_SUB_AGENT_TIMEOUT_MS: u64 = 300_000;
pub const DEFAULT_AGENT_BINARY: &str = "hostagent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorConfig {
    /// Text sent back immediately when a prompt classifies as complex.
    pub ack_message: String,
    /// Whether tool-by-tool progress updates are delivered at all.
    pub progress_updates: bool,
    /// Tool calls faster than this are not surfaced.
    pub progress_min_duration_ms: u64,
    /// Whether the orchestration system prompt is injected per turn.
    pub orchestrator_prompt: bool,
    /// Hard timeout for one delegated sub-agent run.
    pub sub_agent_timeout_ms: u64,
    /// Host agent binary invoked for isolated sub-agent runs.
    pub agent_binary: String,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            ack_message: DEFAULT_ACK_MESSAGE.to_string(),
            progress_updates: true,
            progress_min_duration_ms: DEFAULT_PROGRESS_MIN_DURATION_MS,
            orchestrator_prompt: true,
            sub_agent_timeout_ms: DEFAULT_SUB_AGENT_TIMEOUT_MS,
            agent_binary: DEFAULT_AGENT_BINARY.to_string(),
        }
    }
}

impl DirectorConfig {
    /// Coerce a raw config payload field by field, falling back to
    /// defaults for anything invalid.
    pub fn from_value(raw: &Value) -> Self {
        let defaults = Self::default();
        Self {
            ack_message: string_or(raw.get("ack_message"), defaults.ack_message),
            progress_updates: bool_or(raw.get("progress_updates"), defaults.progress_updates),
            progress_min_duration_ms: positive_ms_or(
                raw.get("progress_min_duration_ms"),
                defaults.progress_min_duration_ms,
            ),
            orchestrator_prompt: bool_or(
                raw.get("orchestrator_prompt"),
                defaults.orchestrator_prompt,
            ),
            sub_agent_timeout_ms: positive_ms_or(
                raw.get("sub_agent_timeout_ms"),
                defaults.sub_agent_timeout_ms,
            ),
            agent_binary: string_or(raw.get("agent_binary"), defaults.agent_binary),
        }
    }
}

fn string_or(value: Option<&Value>, fallback: String) -> String {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or(fallback)
}

fn bool_or(value: Option<&Value>, fallback: bool) -> bool {
    value.and_then(Value::as_bool).unwrap_or(fallback)
}

/// Finite and strictly positive, else the fallback.
fn positive_ms_or(value: Option<&Value>, fallback: u64) -> u64 {
    value
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| n as u64)
        .unwrap_or(fallback)
}
