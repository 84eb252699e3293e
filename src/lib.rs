//! visit-badge - per-key visit counters rendered as badges
//!
//! Every request maps to one of five modes by its first path segment:
//! `badge` (SVG), `badgen` and `shields` (JSON badge schemas) increment the
//! counter and render the new value; `stats` and `stats-batch` only read.
//!
//! # Architecture
//! - `api`: routing, actix-web handlers and middleware
//! - `services`: the visit counter on top of a key-value store
//! - `render`: SVG and JSON output formats
//! - `storage`: key-value store backends (memory, Redis)
//! - `runtime`: detached background writes, lifecycle and execution modes
//! - `config`: static configuration
//! - `system`: logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod render;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
