//! Classification rules, clocks and the stateless aggregation services.

pub mod classify;
pub mod services;
pub mod time;

pub use time::{Clock, FixedClock, SystemClock};
