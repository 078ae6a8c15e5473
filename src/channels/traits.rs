use async_trait::async_trait;

/// An outbound messaging surface (chat platform) the director can deliver
/// acknowledgments and progress text through.
///
/// Implementations own their wire protocol and credentials; the director
/// only ever calls the send primitive.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Transport id as it appears in session keys (e.g. "telegram").
    fn id(&self) -> &str;

    /// Deliver `text` to `conversation_id`, optionally on behalf of a
    /// specific channel account.
    async fn send_text(
        &self,
        conversation_id: &str,
        text: &str,
        account_id: Option<&str>,
    ) -> anyhow::Result<()>;
}
