mod runner;
mod spawner;

pub use runner::{ExecResult, NativeRunner, ProcessRunner};
pub use spawner::{shell_single_quote, DelegationOutcome, Role, SubAgentSpawner};
