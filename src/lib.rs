//! pairsum: an HTTP service that finds index pairs summing to a target.
//!
//! `POST /find-pairs` takes `{"numbers": [...], "target": n}` and answers with
//! `{"solutions": [[j, i], ...]}`, where `numbers[j] + numbers[i] == target`.

pub mod config;
pub mod error;
pub mod finder;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use finder::{find_pairs, Pair};
