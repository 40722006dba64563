pub mod items;
pub mod kits;
