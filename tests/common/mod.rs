#![allow(dead_code)] // Each test binary uses a different subset of the helpers

pub mod builders;
pub mod mock_cluster;
pub mod mock_event_writer;
pub mod strategies;

pub use builders::*;
pub use mock_cluster::*;
pub use mock_event_writer::*;
