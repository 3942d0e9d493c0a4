pub mod rand;
pub mod settings;
