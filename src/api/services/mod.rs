pub mod badge;

pub use badge::{BadgeService, badge_routes};
