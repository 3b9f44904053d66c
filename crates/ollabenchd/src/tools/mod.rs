//! Tool registry and the two benchmark tools.

pub mod registry;
pub mod time;
pub mod weather;

pub use registry::ToolRegistry;
