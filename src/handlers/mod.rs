pub mod info;
pub mod items;
pub mod roles;
pub mod roster;
pub mod shortcuts;
pub mod teleport;
pub mod timers;
pub mod uptime;
