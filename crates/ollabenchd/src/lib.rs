//! Ollabench daemon library - exposes modules for testing.

pub mod ollama;
pub mod routes;
pub mod server;
pub mod tools;
