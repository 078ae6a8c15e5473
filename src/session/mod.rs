mod store;

pub use store::{SessionContextStore, SessionKey, SessionRecord};
