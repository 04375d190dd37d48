//=========================================================================
// Aetheric Dodge: Library Root
//
// This crate implements a networked, cooldown-gated dodge action on top
// of a deterministic fixed-tick simulation.
//
// Responsibilities:
// - Expose the simulation runtime (`SimulationBuilder`, `Simulation`)
// - Expose the dodge building blocks (`ActionScheduler`, `PhaseTimeline`)
//   for hosts that drive their own tick loop
// - Keep the logic-thread plumbing internal
//
// Typical usage:
// ```no_run
// use aetheric_dodge::prelude::*;
//
// fn main() {
//     let handle = SimulationBuilder::new().build().start();
//     let world = handle.shutdown().unwrap();
//     println!("stopped at tick {}", world.tick());
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the simulation systems: time, network input, effect
// contracts, components, the dodge state machine and the world.
//
pub mod core;
pub mod error;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the runtime entry point and the logic-thread handle.
//
mod engine;

//--- Public Exports ------------------------------------------------------
pub use engine::{Simulation, SimulationBuilder, SimulationHandle};
pub use error::{Result, SimulationError};
