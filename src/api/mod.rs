//! HTTP surface: routing, handlers and middleware.

pub mod middleware;
pub mod route;
pub mod services;
