pub mod client;
pub mod clipboard;
pub mod config_manager;
pub mod converter;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod page;
pub mod prompts;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;
