pub mod app;
pub mod input;
pub mod scene;
pub mod simulation;
pub mod utils;
pub mod world;

pub use anyhow;
pub use arrayvec;
pub use fastrand;
pub use glam;
pub use instant;
pub use log;
pub use rustc_hash;

#[macro_export]
macro_rules! error_continue {
    ($($arg:tt)+) => { { log::error!($($arg)+); continue; } };
}
