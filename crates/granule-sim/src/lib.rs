pub mod elements;
pub mod neighborhood;
pub mod rng;
pub mod schedule;
pub mod simulation;

pub use elements::{Element, ElementTable, TableError};
pub use neighborhood::Neighborhood;
pub use rng::SimRng;
pub use schedule::SliceOrder;
pub use simulation::Simulation;

#[cfg(test)]
mod test_harness;
