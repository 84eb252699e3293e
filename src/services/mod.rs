pub mod counter;

pub use counter::{KEY_PREFIX, VisitCounter, namespaced_key, parse_count};
