use super::traits::Transport;
use std::collections::HashMap;
use std::sync::Arc;

/// Routes outbound text to one of several named transports.
///
/// An unknown transport id is logged and absorbed, never an error. A known
/// transport's failure propagates to the caller, which is expected to treat
/// every dispatch as best-effort (see the notifier and orchestrator).
pub struct ChannelDispatcher {
    transports: HashMap<String, Arc<dyn Transport>>,
}

impl ChannelDispatcher {
    pub fn new(transports: Vec<Arc<dyn Transport>>) -> Self {
        let transports = transports
            .into_iter()
            .map(|t| (t.id().to_string(), t))
            .collect();
        Self { transports }
    }

    pub fn supports(&self, transport_id: &str) -> bool {
        self.transports.contains_key(transport_id)
    }

    pub async fn send(
        &self,
        transport_id: &str,
        conversation_id: &str,
        account_id: Option<&str>,
        text: &str,
    ) -> anyhow::Result<()> {
        match self.transports.get(transport_id) {
            Some(transport) => transport.send_text(conversation_id, text, account_id).await,
            None => {
                tracing::warn!(
                    transport = %transport_id,
                    "unsupported transport for outbound message"
                );
                Ok(())
            }
        }
    }
}
