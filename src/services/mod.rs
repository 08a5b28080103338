pub mod placement_planner;
pub mod plan_executor;
pub mod state_reader;
pub mod window_system;

pub use placement_planner::PlacementPlanner;
pub use plan_executor::execute_plan;
pub use state_reader::read_window_state;
pub use window_system::{create_window_system, WindowSystem};
