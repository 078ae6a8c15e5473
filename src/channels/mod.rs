mod dispatcher;
pub mod traits;

pub use dispatcher::ChannelDispatcher;
pub use traits::Transport;
