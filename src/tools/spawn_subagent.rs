use super::traits::{Tool, ToolResult};
use crate::subagent::{Role, SubAgentSpawner};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

pub const SPAWN_SUBAGENT_TOOL_NAME: &str = "spawn_subagent";

/// Delegation tool: runs a discrete subtask in an isolated sub-agent
/// session and returns its full output when complete.
pub struct SpawnSubagentTool {
    spawner: Arc<SubAgentSpawner>,
}

impl SpawnSubagentTool {
    pub fn new(spawner: Arc<SubAgentSpawner>) -> Self {
        Self { spawner }
    }
}

#[async_trait]
impl Tool for SpawnSubagentTool {
    fn name(&self) -> &str {
        SPAWN_SUBAGENT_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Spawn a specialized sub-agent to handle a discrete subtask in an isolated session. \
         Returns the sub-agent's full output when complete. \
         Use for self-contained work units (coding a module, doing research, writing a doc section). \
         Sub-agents have no access to the current conversation history — be explicit in the task description."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "task": {
                    "type": "string",
                    "description": "Full task description for the sub-agent. Be explicit — it has no conversation history."
                },
                "sub_session_label": {
                    "type": "string",
                    "description": "Short unique label for this subtask (e.g. 'auth-module', 'market-research'). Used to namespace the sub-agent session."
                },
                "role": {
                    "type": "string",
                    "enum": ["coder", "researcher", "analyst", "writer"],
                    "description": "Specialist role — primes the sub-agent's approach and focus."
                }
            },
            "required": ["task", "sub_session_label"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> anyhow::Result<ToolResult> {
        let task = match args
            .get("task")
            .and_then(serde_json::Value::as_str)
            .filter(|value| !value.is_empty())
        {
            Some(value) => value,
            None => {
                return Ok(ToolResult {
                    success: false,
                    output: String::new(),
                    error: Some("Missing 'task' parameter".to_string()),
                });
            }
        };

        let label = match args
            .get("sub_session_label")
            .and_then(serde_json::Value::as_str)
            .filter(|value| !value.is_empty())
        {
            Some(value) => value,
            None => {
                return Ok(ToolResult {
                    success: false,
                    output: String::new(),
                    error: Some("Missing 'sub_session_label' parameter".to_string()),
                });
            }
        };

        // Unrecognized role names degrade to no priming, same as absent.
        let role = args
            .get("role")
            .and_then(serde_json::Value::as_str)
            .and_then(Role::from_str_opt);

        let outcome = self.spawner.delegate(task, label, role).await;
        Ok(ToolResult {
            success: outcome.success,
            output: outcome.output,
            error: outcome.error,
        })
    }
}
