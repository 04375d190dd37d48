//=========================================================================
// Simulation Errors
//=========================================================================
//
// Failures of the simulation host surface (entity registry, logic thread,
// command channel). Gameplay never fails: dodge requests are either
// executed or silently dropped.
//
//=========================================================================

use thiserror::Error;

use crate::core::network::EntityId;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("{0} is already registered")]
    DuplicateEntity(EntityId),

    #[error("simulation command channel closed")]
    Disconnected,

    #[error("simulation logic thread panicked")]
    CoreThreadPanicked,
}
