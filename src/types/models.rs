pub mod icon_file;
pub mod mod_entity;
pub mod platform;
