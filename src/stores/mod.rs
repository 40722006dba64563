pub mod properties;
pub mod roster;
pub mod shortcut_store;
pub mod timer_store;
pub mod uptime_log;
