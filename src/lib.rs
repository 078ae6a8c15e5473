//! Director: an orchestration layer between conversational channels and
//! task-execution agents.
//!
//! Three responsibilities:
//! 1. Immediate acknowledgment of complex tasks so the operator knows the
//!    agent heard them.
//! 2. Tool-by-tool progress updates relayed back to the conversation, with
//!    noise filtering.
//! 3. A `spawn_subagent` tool that lets the top-level agent delegate
//!    subtasks to isolated sub-agent sessions.
//!
//! The host agent runtime, the per-channel wire protocols, and channel
//! account auth live behind the [`channels::Transport`],
//! [`subagent::ProcessRunner`], and [`tools::Tool`] traits.

pub mod channels;
pub mod classify;
pub mod config;
pub mod orchestrator;
pub mod progress;
pub mod session;
pub mod subagent;
pub mod tools;

pub use config::DirectorConfig;
pub use orchestrator::{AgentStart, AgentStartOutcome, MessageReceived, Orchestrator};
pub use progress::ToolCallEvent;
pub use subagent::DelegationOutcome;
