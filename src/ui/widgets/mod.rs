pub mod progress;

pub use progress::{RoutineProgress, RoutineState};
