use super::runner::{ExecResult, ProcessRunner};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Specialist roles a delegated subtask can be primed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Coder,
    Researcher,
    Analyst,
    Writer,
}

impl Role {
    pub fn from_str_opt(raw: &str) -> Option<Self> {
        match raw {
            "coder" => Some(Self::Coder),
            "researcher" => Some(Self::Researcher),
            "analyst" => Some(Self::Analyst),
            "writer" => Some(Self::Writer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coder => "coder",
            Self::Researcher => "researcher",
            Self::Analyst => "analyst",
            Self::Writer => "writer",
        }
    }
}

/// Priming text prepended to a subtask for each specialist role.
const ROLE_PROMPTS: &[(Role, &str)] = &[
    (
        Role::Coder,
        "You are a specialist coding agent. Write correct, clean, idiomatic code. Be concise and focused.",
    ),
    (
        Role::Researcher,
        "You are a specialist research agent. Gather information thoroughly before drawing conclusions.",
    ),
    (
        Role::Analyst,
        "You are a specialist analyst agent. Reason carefully, consider edge cases, and present findings clearly.",
    ),
    (
        Role::Writer,
        "You are a specialist writing agent. Write clearly and concisely for the intended audience.",
    ),
];

fn role_prompt(role: Role) -> &'static str {
    ROLE_PROMPTS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, prompt)| *prompt)
        .unwrap_or("")
}

/// Wrap `text` as one single-quoted shell argument. Every literal `'` is
/// escaped by closing the quote, emitting `\'`, and reopening.
pub fn shell_single_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Normalized result of one sub-agent invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationOutcome {
    pub success: bool,
    #[serde(default)]
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DelegationOutcome {
    pub fn ok(output: String) -> Self {
        Self {
            success: true,
            output,
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error),
        }
    }
}

/// Builds and runs isolated sub-agent invocations for delegated subtasks.
///
/// Sub-agents have no access to the delegating conversation's history, so
/// the combined prompt must be fully self-contained. Labels are not
/// tracked; concurrent delegations with identical labels are independent.
pub struct SubAgentSpawner {
    runner: Arc<dyn ProcessRunner>,
    agent_binary: String,
    timeout: Duration,
}

impl SubAgentSpawner {
    pub fn new(runner: Arc<dyn ProcessRunner>, agent_binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            runner,
            agent_binary: agent_binary.into(),
            timeout,
        }
    }

    fn combined_prompt(task: &str, role: Option<Role>) -> String {
        match role {
            Some(role) => format!("{}\n\nTask:\n{}", role_prompt(role), task),
            None => task.to_string(),
        }
    }

    /// Command line for one isolated sub-agent invocation.
    pub fn build_command(&self, task: &str, role: Option<Role>) -> String {
        let prompt = Self::combined_prompt(task, role);
        format!(
            "{} agent --message {}",
            self.agent_binary,
            shell_single_quote(&prompt)
        )
    }

    /// Run one self-contained subtask in an isolated sub-agent session,
    /// suspending the caller until it finishes or the timeout fires.
    pub async fn delegate(&self, task: &str, label: &str, role: Option<Role>) -> DelegationOutcome {
        let command = self.build_command(task, role);
        match self.runner.run_with_timeout(&command, self.timeout).await {
            Ok(result) => DelegationOutcome::ok(normalize_output(result)),
            Err(error) => {
                tracing::error!(label = %label, error = %error, "sub-agent run failed");
                DelegationOutcome::failed(error.to_string())
            }
        }
    }
}

/// Collapse the heterogeneous runner result shapes into one output string:
/// plain text as-is, structured results via stdout when present, otherwise
/// the serialized structure. Surrounding whitespace is trimmed.
fn normalize_output(result: ExecResult) -> String {
    match result {
        ExecResult::Text(text) => text.trim().to_string(),
        ExecResult::Structured {
            stdout,
            stderr,
            exit_code,
        } => match stdout {
            Some(stdout) => stdout.trim().to_string(),
            None => json!({
                "stdout": null,
                "stderr": stderr,
                "exit_code": exit_code,
            })
            .to_string(),
        },
    }
}
