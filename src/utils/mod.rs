mod maths_utils;
mod time_utils;

pub use time_utils::TimeUtils;

pub(crate) use maths_utils::{finite_min_max, mean};
