use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;

/// Composite identifier naming one ongoing conversation on one transport.
///
/// External form is `"transport:conversation"`, split on the first `:`.
/// Transport ids must not contain the delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub transport_id: String,
    pub conversation_id: String,
}

impl SessionKey {
    pub fn new(transport_id: impl Into<String>, conversation_id: impl Into<String>) -> Self {
        Self {
            transport_id: transport_id.into(),
            conversation_id: conversation_id.into(),
        }
    }

    /// Parse an external session key. An empty key does not parse; a key
    /// without a delimiter uses the whole string for both halves.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        match raw.find(':') {
            Some(idx) => Some(Self {
                transport_id: raw[..idx].to_string(),
                conversation_id: raw[idx + 1..].to_string(),
            }),
            None => Some(Self {
                transport_id: raw.to_string(),
                conversation_id: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.transport_id, self.conversation_id)
    }
}

/// Delivery metadata captured from an inbound message, so later hooks that
/// only carry a session key can still reach the right place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub transport_id: String,
    pub conversation_id: String,
    pub account_id: Option<String>,
}

/// Session key → delivery metadata, retained for the process lifetime.
///
/// Mutated from event handlers on the async runtime, so access is
/// serialized behind one lock. Entries are overwritten last-write-wins and
/// only removed by `clear` at teardown.
#[derive(Default)]
pub struct SessionContextStore {
    entries: Mutex<HashMap<String, SessionRecord>>,
}

impl SessionContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the record for `key`. A record with an empty
    /// conversation id is never stored.
    pub fn put(&self, key: &str, record: SessionRecord) {
        if record.conversation_id.is_empty() {
            return;
        }
        self.entries.lock().insert(key.to_string(), record);
    }

    pub fn get(&self, key: &str) -> Option<SessionRecord> {
        self.entries.lock().get(key).cloned()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(account: &str) -> SessionRecord {
        SessionRecord {
            transport_id: "wa".into(),
            conversation_id: "+15550001111".into(),
            account_id: Some(account.into()),
        }
    }

    #[test]
    fn parse_splits_on_first_delimiter() {
        let key = SessionKey::parse("telegram:chat:42").unwrap();
        assert_eq!(key.transport_id, "telegram");
        assert_eq!(key.conversation_id, "chat:42");
    }

    #[test]
    fn parse_without_delimiter_uses_whole_key_for_both_halves() {
        let key = SessionKey::parse("standalone").unwrap();
        assert_eq!(key.transport_id, "standalone");
        assert_eq!(key.conversation_id, "standalone");
    }

    #[test]
    fn parse_rejects_empty_key() {
        assert!(SessionKey::parse("").is_none());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let key = SessionKey::new("discord", "guild-1");
        assert_eq!(SessionKey::parse(&key.to_string()).unwrap(), key);
    }

    #[test]
    fn put_then_get_returns_record() {
        let store = SessionContextStore::new();
        store.put("wa:+15550001111", record("wa-001"));
        let stored = store.get("wa:+15550001111").unwrap();
        assert_eq!(stored.account_id.as_deref(), Some("wa-001"));
    }

    #[test]
    fn put_overwrites_last_write_wins() {
        let store = SessionContextStore::new();
        store.put("wa:+15550001111", record("wa-001"));
        store.put("wa:+15550001111", record("wa-002"));
        assert_eq!(store.len(), 1);
        let stored = store.get("wa:+15550001111").unwrap();
        assert_eq!(stored.account_id.as_deref(), Some("wa-002"));
    }

    #[test]
    fn put_ignores_empty_conversation_id() {
        let store = SessionContextStore::new();
        store.put(
            "wa:",
            SessionRecord {
                transport_id: "wa".into(),
                conversation_id: String::new(),
                account_id: None,
            },
        );
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_store() {
        let store = SessionContextStore::new();
        store.put("wa:+15550001111", record("wa-001"));
        store.clear();
        assert!(store.is_empty());
        assert!(store.get("wa:+15550001111").is_none());
    }

    #[test]
    fn get_missing_key_returns_none() {
        let store = SessionContextStore::new();
        assert!(store.get("telegram:nobody").is_none());
    }
}
