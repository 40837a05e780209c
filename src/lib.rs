// HTTP Server modules
pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod history;
pub mod models;
pub mod routes;

// LLM abstraction layer
pub mod llm;
