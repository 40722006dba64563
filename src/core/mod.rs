pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod startup;
pub mod state;
pub mod tracing_init;
