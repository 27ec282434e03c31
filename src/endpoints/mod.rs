pub mod health;
pub mod mods;
