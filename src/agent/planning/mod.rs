pub mod planner;
mod step;

pub use planner::Planner;
pub use step::{Step, parse_plan};
