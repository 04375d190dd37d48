//=========================================================================
// Simulation Runtime
//
// Main entry point and coordinator for the dodge simulation.
//
// Architecture:
// ```text
//     SimulationBuilder  ──build()──>  Simulation  ──start()──>  SimulationHandle
//         │                               │                          │
//         ├─ with_tps()                   └─ init(|world| ..)        ├─ send_input()
//         └─ with_channel_capacity()                                 ├─ spawn() / despawn()
//                                                                    └─ shutdown() → World
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;

use crossbeam_channel::{bounded, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::dodge::DodgeAbility;
use crate::core::network::{EntityId, TickInput};
use crate::core::time::SimClock;
use crate::core::world::World;
use crate::core::{CoreSystemsOrchestrator, SimulationCommand};
use crate::error::{Result, SimulationError};

//=== SimulationBuilder ===================================================

/// Builder for configuring and constructing a [`Simulation`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (fixed simulation ticks per second)
/// - **Channel capacity**: 128 commands
///
/// # Examples
///
/// ```no_run
/// use aetheric_dodge::prelude::*;
///
/// let handle = SimulationBuilder::new()
///     .with_tps(120.0)
///     .build()
///     .init(|world| {
///         let ability = DodgeAbility::new(
///             EntityId(1),
///             &DodgeConfig::default(),
///             DodgeTargets::new(Authority::State),
///         );
///         world.spawn(ability).expect("fresh world");
///     })
///     .start();
///
/// handle.send_input(EntityId(1), TickInput::DODGE).unwrap();
/// let world = handle.shutdown().unwrap();
/// ```
pub struct SimulationBuilder {
    tps: f64,
    channel_capacity: usize,
}

impl SimulationBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }

    /// Sets the fixed tick rate of the logic thread.
    ///
    /// Phase durations are measured in simulation time, so the tick rate
    /// only changes how precisely phase boundaries are observed.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0` or is not finite.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps.is_finite() && tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the command channel capacity.
    ///
    /// Senders block when the logic thread falls this far behind.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the simulation with an empty world.
    pub fn build(self) -> Simulation {
        info!("Building simulation (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Simulation {
            orchestrator: CoreSystemsOrchestrator::new(World::new(SimClock::from_tps(self.tps))),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Simulation ==========================================================

/// A configured simulation that has not started ticking yet.
pub struct Simulation {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
}

impl Simulation {
    //--- Initialization ---------------------------------------------------

    /// Populates the world before the logic thread starts.
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut World),
    {
        info!("Initializing simulation world");
        self.orchestrator.init_world(init_fn);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Spawns the logic thread and returns a handle to drive it.
    pub fn start(self) -> SimulationHandle {
        info!("Starting simulation (TPS: {})", self.tps);

        let (tx, rx) = bounded(self.channel_capacity);
        let thread = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        SimulationHandle { sender: tx, thread }
    }
}

//=== SimulationHandle ====================================================

/// Control surface of a running simulation.
///
/// Dropping the handle disconnects the channel, which also stops the
/// logic thread; call [`SimulationHandle::shutdown`] to get the world back.
pub struct SimulationHandle {
    sender: Sender<SimulationCommand>,
    thread: thread::JoinHandle<World>,
}

impl SimulationHandle {
    /// Delivers decoded input for `entity` on the next tick.
    pub fn send_input(&self, entity: EntityId, input: TickInput) -> Result<()> {
        self.send(SimulationCommand::Input { entity, input })
    }

    pub fn spawn(&self, ability: DodgeAbility) -> Result<()> {
        self.send(SimulationCommand::Spawn(Box::new(ability)))
    }

    pub fn despawn(&self, entity: EntityId) -> Result<()> {
        self.send(SimulationCommand::Despawn(entity))
    }

    /// A sender for other threads (e.g. the network receive loop).
    pub fn sender(&self) -> Sender<SimulationCommand> {
        self.sender.clone()
    }

    /// Stops the logic thread and returns the final world state.
    pub fn shutdown(self) -> Result<World> {
        // A closed channel means the thread is already on its way out.
        let _ = self.sender.send(SimulationCommand::Shutdown);
        drop(self.sender);

        match self.thread.join() {
            Ok(world) => {
                info!("Simulation shut down at tick {}", world.tick());
                Ok(world)
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
                Err(SimulationError::CoreThreadPanicked)
            }
        }
    }

    fn send(&self, command: SimulationCommand) -> Result<()> {
        self.sender
            .send(command)
            .map_err(|_| SimulationError::Disconnected)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
