pub mod writer;

// Re-export key types for convenience
pub use writer::{BroadcastEventWriter, ExecutionEventWriter};
