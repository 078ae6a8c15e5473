mod format;
mod notifier;

pub use format::format_tool_progress;
pub use notifier::{ProgressNotifier, ToolCallEvent};
