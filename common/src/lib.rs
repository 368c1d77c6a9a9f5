pub mod model;
pub mod schedule;
