pub mod args;
pub mod quantity;
