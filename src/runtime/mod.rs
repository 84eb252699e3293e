//! Application lifecycle and execution modes

pub mod background;
pub mod lifetime;
pub mod modes;

pub use background::BackgroundTasks;
