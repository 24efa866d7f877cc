pub mod hint;
pub mod mods;
