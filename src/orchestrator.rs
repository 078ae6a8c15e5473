//! Wiring between the host's event/hook surface and the director's parts.

use crate::channels::{ChannelDispatcher, Transport};
use crate::classify;
use crate::config::DirectorConfig;
use crate::progress::{ProgressNotifier, ToolCallEvent};
use crate::session::{SessionContextStore, SessionKey, SessionRecord};
use crate::subagent::{NativeRunner, ProcessRunner, SubAgentSpawner};
use crate::tools::{director_tools, Tool};
use std::sync::Arc;
use std::time::Duration;

/// Fixed orchestration instructions injected per turn when
/// orchestrator-prompt mode is on.
pub const ORCHESTRATOR_SYSTEM_PROMPT: &str = "\
You are the Director — an orchestrator agent.

Your responsibilities:
1. **Decompose** complex tasks into discrete, self-contained subtasks.
2. **Delegate** subtasks to specialist sub-agents using the `spawn_subagent` tool.
3. **Stay responsive** — never go silent. Briefly state your plan before executing it.
4. **Synthesize** — collect sub-agent results and present a clear, concise summary.

When you receive a complex request:
- State your plan in 2-4 sentences (what you'll do, in what order, using which specialists).
- Execute the plan, calling `spawn_subagent` for each discrete subtask.
- Return a final summary when done.

For simple conversational messages or quick questions, respond directly — no sub-agents needed.

Available specialist roles for `spawn_subagent`:
- `coder`      — software development, debugging, scripting
- `researcher` — information gathering, reading docs, web search
- `analyst`    — reasoning through problems, data analysis, decision support
- `writer`     — documentation, explanations, summaries
";

/// Inbound-message event fields the director reads.
#[derive(Debug, Clone)]
pub struct MessageReceived {
    pub transport_id: String,
    pub conversation_id: String,
    pub account_id: Option<String>,
}

/// Before-agent-turn event.
#[derive(Debug, Clone)]
pub struct AgentStart {
    pub session_key: String,
    pub prompt: String,
}

/// What the before-agent-turn hook hands back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentStartOutcome {
    pub system_prompt: Option<String>,
}

/// Owns configuration and wires session tracking, acknowledgment,
/// progress relay, and delegation to the host's hook and tool surfaces.
pub struct Orchestrator {
    config: DirectorConfig,
    store: Arc<SessionContextStore>,
    dispatcher: Arc<ChannelDispatcher>,
    notifier: Option<Arc<ProgressNotifier>>,
    spawner: Arc<SubAgentSpawner>,
}

impl Orchestrator {
    pub fn new(config: DirectorConfig, transports: Vec<Arc<dyn Transport>>) -> Self {
        Self::with_runner(config, transports, Arc::new(NativeRunner))
    }

    /// Construct with an explicit process-execution primitive.
    pub fn with_runner(
        config: DirectorConfig,
        transports: Vec<Arc<dyn Transport>>,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        let store = Arc::new(SessionContextStore::new());
        let dispatcher = Arc::new(ChannelDispatcher::new(transports));
        // Disabled entirely (not just filtered) when progress updates are off.
        let notifier = config.progress_updates.then(|| {
            Arc::new(ProgressNotifier::new(
                store.clone(),
                dispatcher.clone(),
                config.progress_min_duration_ms,
            ))
        });
        let spawner = Arc::new(SubAgentSpawner::new(
            runner,
            config.agent_binary.clone(),
            Duration::from_millis(config.sub_agent_timeout_ms),
        ));

        Self {
            config,
            store,
            dispatcher,
            notifier,
            spawner,
        }
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<SessionContextStore> {
        &self.store
    }

    /// Capture delivery metadata so later hooks that only carry a session
    /// key can still reach the originating conversation.
    pub fn on_message_received(&self, event: &MessageReceived) {
        if event.conversation_id.is_empty() {
            return;
        }
        let key = SessionKey::new(&event.transport_id, &event.conversation_id);
        self.store.put(
            &key.to_string(),
            SessionRecord {
                transport_id: event.transport_id.clone(),
                conversation_id: event.conversation_id.clone(),
                account_id: event.account_id.clone(),
            },
        );
    }

    /// Acknowledge complex prompts and optionally inject the orchestration
    /// system prompt. An unparseable session key yields an empty outcome.
    pub fn on_agent_start(&self, event: &AgentStart) -> AgentStartOutcome {
        let Some(key) = SessionKey::parse(&event.session_key) else {
            return AgentStartOutcome::default();
        };

        if classify::is_complex(&event.prompt) {
            let dispatcher = self.dispatcher.clone();
            let account_id = self
                .store
                .get(&event.session_key)
                .and_then(|record| record.account_id);
            let ack = self.config.ack_message.clone();
            // Detached send: the agent's turn never waits on channel I/O,
            // and a delivery failure only reaches the log.
            tokio::spawn(async move {
                if let Err(error) = dispatcher
                    .send(
                        &key.transport_id,
                        &key.conversation_id,
                        account_id.as_deref(),
                        &ack,
                    )
                    .await
                {
                    tracing::warn!(error = %error, "acknowledgment delivery failed");
                }
            });
        }

        if self.config.orchestrator_prompt {
            AgentStartOutcome {
                system_prompt: Some(ORCHESTRATOR_SYSTEM_PROMPT.to_string()),
            }
        } else {
            AgentStartOutcome::default()
        }
    }

    /// Forward a completed tool call to the progress notifier, detached
    /// from the agent's turn. No-op when progress updates are off.
    pub fn on_tool_call_completed(&self, event: ToolCallEvent) {
        let Some(notifier) = self.notifier.clone() else {
            return;
        };
        tokio::spawn(async move {
            notifier.notify(&event).await;
        });
    }

    /// Tools the director registers with the host.
    pub fn tools(&self) -> Vec<Box<dyn Tool>> {
        director_tools(self.spawner.clone())
    }

    pub fn teardown(&self) {
        self.store.clear();
    }
}
