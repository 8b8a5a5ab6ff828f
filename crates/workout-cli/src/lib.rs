//! Library side of the workout flattener CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
