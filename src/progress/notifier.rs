use super::format::format_tool_progress;
use crate::channels::ChannelDispatcher;
use crate::session::{SessionContextStore, SessionKey};
use crate::tools::SPAWN_SUBAGENT_TOOL_NAME;
use std::sync::Arc;

/// One completed tool call, as reported by the host's hook surface.
/// Consumed once, never stored.
#[derive(Debug, Clone)]
pub struct ToolCallEvent {
    pub tool_name: String,
    pub params: serde_json::Value,
    pub duration_ms: u64,
    pub session_key: String,
}

/// Relays tool-completion events to the originating conversation.
///
/// Only constructed when progress updates are enabled; delivery is always
/// best-effort and never surfaces a failure to the agent's turn.
pub struct ProgressNotifier {
    store: Arc<SessionContextStore>,
    dispatcher: Arc<ChannelDispatcher>,
    min_duration_ms: u64,
}

impl ProgressNotifier {
    pub fn new(
        store: Arc<SessionContextStore>,
        dispatcher: Arc<ChannelDispatcher>,
        min_duration_ms: u64,
    ) -> Self {
        Self {
            store,
            dispatcher,
            min_duration_ms,
        }
    }

    pub async fn notify(&self, event: &ToolCallEvent) {
        // Fast tool calls are not worth surfacing.
        if event.duration_ms < self.min_duration_ms {
            return;
        }
        // The delegating agent narrates its own delegation decisions.
        if event.tool_name == SPAWN_SUBAGENT_TOOL_NAME {
            return;
        }
        let Some(key) = SessionKey::parse(&event.session_key) else {
            return;
        };

        let account_id = self
            .store
            .get(&event.session_key)
            .and_then(|record| record.account_id);
        let text = format_tool_progress(&event.tool_name, &event.params);

        if let Err(error) = self
            .dispatcher
            .send(
                &key.transport_id,
                &key.conversation_id,
                account_id.as_deref(),
                &text,
            )
            .await
        {
            tracing::debug!(error = %error, session = %event.session_key, "progress update delivery failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::Transport;
    use crate::session::SessionRecord;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    struct RecordingTransport {
        id: String,
        sent: Mutex<Vec<(String, String, Option<String>)>>,
    }

    impl RecordingTransport {
        fn new(id: &str) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        fn id(&self) -> &str {
            &self.id
        }

        async fn send_text(
            &self,
            conversation_id: &str,
            text: &str,
            account_id: Option<&str>,
        ) -> anyhow::Result<()> {
            self.sent.lock().push((
                conversation_id.to_string(),
                text.to_string(),
                account_id.map(ToOwned::to_owned),
            ));
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        fn id(&self) -> &str {
            "telegram"
        }

        async fn send_text(
            &self,
            _conversation_id: &str,
            _text: &str,
            _account_id: Option<&str>,
        ) -> anyhow::Result<()> {
            anyhow::bail!("gateway down")
        }
    }

    fn event(tool_name: &str, duration_ms: u64, session_key: &str) -> ToolCallEvent {
        ToolCallEvent {
            tool_name: tool_name.to_string(),
            params: json!({"command": "ls"}),
            duration_ms,
            session_key: session_key.to_string(),
        }
    }

    fn notifier_with(
        transport: Arc<RecordingTransport>,
    ) -> (ProgressNotifier, Arc<SessionContextStore>) {
        let store = Arc::new(SessionContextStore::new());
        let dispatcher = Arc::new(ChannelDispatcher::new(vec![transport]));
        (ProgressNotifier::new(store.clone(), dispatcher, 2_000), store)
    }

    #[tokio::test]
    async fn below_threshold_events_are_dropped() {
        let transport = RecordingTransport::new("telegram");
        let (notifier, _store) = notifier_with(transport.clone());

        notifier.notify(&event("bash", 1_999, "telegram:chat-001")).await;

        assert!(transport.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn delegation_tool_events_are_dropped() {
        let transport = RecordingTransport::new("telegram");
        let (notifier, _store) = notifier_with(transport.clone());

        notifier
            .notify(&event(SPAWN_SUBAGENT_TOOL_NAME, 60_000, "telegram:chat-001"))
            .await;

        assert!(transport.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn unparseable_session_key_is_dropped() {
        let transport = RecordingTransport::new("telegram");
        let (notifier, _store) = notifier_with(transport.clone());

        notifier.notify(&event("bash", 5_000, "")).await;

        assert!(transport.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn qualifying_event_dispatches_formatted_line() {
        let transport = RecordingTransport::new("telegram");
        let (notifier, store) = notifier_with(transport.clone());
        store.put(
            "telegram:chat-001",
            SessionRecord {
                transport_id: "telegram".into(),
                conversation_id: "chat-001".into(),
                account_id: Some("acct-9".into()),
            },
        );

        notifier.notify(&event("bash", 2_000, "telegram:chat-001")).await;

        let sent = transport.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "chat-001");
        assert!(sent[0].1.contains("ls"));
        assert_eq!(sent[0].2.as_deref(), Some("acct-9"));
    }

    #[tokio::test]
    async fn missing_session_record_sends_without_account() {
        let transport = RecordingTransport::new("telegram");
        let (notifier, _store) = notifier_with(transport.clone());

        notifier.notify(&event("bash", 5_000, "telegram:chat-001")).await;

        let sent = transport.sent.lock();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].2.is_none());
    }

    #[tokio::test]
    async fn dispatch_failure_is_swallowed() {
        let store = Arc::new(SessionContextStore::new());
        let dispatcher = Arc::new(ChannelDispatcher::new(vec![Arc::new(FailingTransport)]));
        let notifier = ProgressNotifier::new(store, dispatcher, 0);

        // Must not panic or surface the transport error.
        notifier.notify(&event("bash", 5_000, "telegram:chat-001")).await;
    }
}
