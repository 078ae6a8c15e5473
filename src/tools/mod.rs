mod spawn_subagent;
pub mod traits;

pub use spawn_subagent::{SpawnSubagentTool, SPAWN_SUBAGENT_TOOL_NAME};
pub use traits::{Tool, ToolResult, ToolSpec};

use crate::subagent::SubAgentSpawner;
use std::sync::Arc;

/// Tools the director contributes to the host's tool registry.
pub fn director_tools(spawner: Arc<SubAgentSpawner>) -> Vec<Box<dyn Tool>> {
    vec![Box::new(SpawnSubagentTool::new(spawner))]
}
