pub mod core;
pub mod catalog;
pub mod console;
pub mod models;
pub mod stores;
pub mod security;
pub mod metrics;
pub mod validation;
pub mod utils;
pub mod handlers;
pub mod transport;
