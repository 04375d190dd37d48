//=========================================================================
// Core Systems Orchestrator
//
// Runs the simulation world on a dedicated logic thread at a fixed tick
// rate.
//
// Responsibilities:
// - Own the `World` (entities, clock, input mailbox, event bus)
// - Receive commands from the network layer via a crossbeam channel
// - Apply queued commands at tick boundaries, then step the world
// - Maintain fixed pacing using the configured TPS
//
// Notes:
// The orchestrator never blocks on gameplay. Between ticks it waits on
// the command channel until the next tick is due, applying commands as
// they arrive, then steps. Communication with the outside world happens
// only through message passing.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{error, info, warn};

//=== Module Declarations =================================================
pub mod components;
pub mod dodge;
pub mod effects;
pub mod message_bus;
pub mod network;
pub mod time;
pub mod world;

#[cfg(test)]
pub(crate) mod testing;

//=== Internal Modules ====================================================
use dodge::DodgeAbility;
use network::{EntityId, TickInput};
use world::World;

//=== SimulationCommand ===================================================

/// Messages accepted by the logic thread.
pub enum SimulationCommand {
    /// Decoded input for `entity` on the next tick.
    Input { entity: EntityId, input: TickInput },

    /// Registers a new entity.
    Spawn(Box<DodgeAbility>),

    /// Removes an entity, abandoning any run in progress.
    Despawn(EntityId),

    /// Stops the logic thread after the current tick.
    Shutdown,
}

//=== TickControl =========================================================
//
// Defines control flow for the core update loop.
// Each tick can signal either to continue or terminate the loop.
//
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CoreSystemsOrchestrator =============================================
//
// Owns the world until the logic thread starts, then hands it over to
// the thread. The thread returns the world when it exits.
//
pub(crate) struct CoreSystemsOrchestrator {
    world: World,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    pub fn new(world: World) -> Self {
        Self { world }
    }

    //--- init_world() -----------------------------------------------------
    //
    // Gives the caller mutable access to the world before the thread
    // starts (spawning initial entities, queuing first inputs).
    //
    pub fn init_world<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut World),
    {
        init_fn(&mut self.world);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking the world at `tps`.
    //
    // Each tick:
    //  1. Applies commands arriving until the tick is due
    //  2. Steps the world once
    //  3. Schedules the next tick, warning if the step ran past it
    //  4. Exits cleanly on Shutdown or when every sender is gone
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<SimulationCommand>,
        tps: f64,
    ) -> thread::JoinHandle<World> {
        let mut pacer = FramePacer::new(Duration::from_secs_f64(1.0 / tps));

        thread::spawn(move || {
            let mut world = self.world;

            loop {
                //--- Step 1: Gather commands -------------------------------
                let control = Self::collect_commands(&receiver, &mut world, pacer.deadline());

                //--- Step 2: Update the world ------------------------------
                world.step();

                if let TickControl::Exit = control {
                    info!("Core thread exiting at tick {}", world.tick());
                    break;
                }

                //--- Step 3: Maintain fixed pacing -------------------------
                if let Some(overrun) = pacer.finish_tick() {
                    warn!("Tick {} overran its frame by {:?}", world.tick(), overrun);
                }
            }

            world
        })
    }

    //--- collect_commands() ----------------------------------------------
    //
    // Applies every command received before `deadline`.
    // Returns a TickControl indicating whether to continue or exit.
    //
    fn collect_commands(
        receiver: &Receiver<SimulationCommand>,
        world: &mut World,
        deadline: Instant,
    ) -> TickControl {
        loop {
            match receiver.recv_deadline(deadline) {
                Ok(command) => {
                    if let TickControl::Exit = Self::apply(command, world) {
                        return TickControl::Exit;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
                Err(RecvTimeoutError::Timeout) => return TickControl::Continue,
            }
        }
    }

    fn apply(command: SimulationCommand, world: &mut World) -> TickControl {
        match command {
            SimulationCommand::Input { entity, input } => world.queue_input(entity, input),
            SimulationCommand::Spawn(ability) => {
                if let Err(e) = world.spawn(*ability) {
                    error!("Spawn rejected: {}", e);
                }
            }
            SimulationCommand::Despawn(entity) => {
                world.despawn(entity);
            }
            SimulationCommand::Shutdown => return TickControl::Exit,
        }
        TickControl::Continue
    }
}

//=== FramePacer ==========================================================
//
// Fixed-rate tick schedule on wall time. Waiting for the deadline is
// idle time; only a step that ends past the following deadline counts
// as an overrun, after which the schedule restarts from now.
//
pub(crate) struct FramePacer {
    frame: Duration,
    deadline: Instant,
}

impl FramePacer {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            deadline: Instant::now(),
        }
    }

    /// Wall time at which the next tick is due.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Schedules the next tick after a step. Returns how far the step ran
    /// past that tick's deadline, if it did.
    pub fn finish_tick(&mut self) -> Option<Duration> {
        self.deadline += self.frame;

        let now = Instant::now();
        if now > self.deadline {
            let overrun = now - self.deadline;
            self.deadline = now;
            Some(overrun)
        } else {
            None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_until(deadline: Instant) {
        thread::sleep(deadline.saturating_duration_since(Instant::now()));
    }

    #[test]
    fn first_tick_is_due_immediately() {
        let pacer = FramePacer::new(Duration::from_millis(10));
        assert!(pacer.deadline() <= Instant::now());
    }

    #[test]
    fn idle_frames_are_not_overruns() {
        let mut pacer = FramePacer::new(Duration::from_millis(20));

        for _ in 0..5 {
            wait_until(pacer.deadline());
            assert_eq!(pacer.finish_tick(), None);
        }
    }

    #[test]
    fn slow_step_reports_overrun_and_resyncs() {
        let mut pacer = FramePacer::new(Duration::from_millis(5));

        thread::sleep(Duration::from_millis(20));
        let overrun = pacer.finish_tick();
        assert!(overrun.is_some_and(|late| late >= Duration::from_millis(10)));

        // The schedule restarts from the late step.
        assert!(pacer.deadline() <= Instant::now());
        assert_eq!(pacer.finish_tick(), None);
    }

    #[test]
    fn collect_commands_applies_until_deadline() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut world = World::new(time::SimClock::from_tps(100.0));

        tx.send(SimulationCommand::Input {
            entity: EntityId(1),
            input: TickInput::DODGE,
        })
        .unwrap();

        let deadline = Instant::now() + Duration::from_millis(5);
        let control = CoreSystemsOrchestrator::collect_commands(&rx, &mut world, deadline);

        assert!(matches!(control, TickControl::Continue));
        assert!(Instant::now() >= deadline);
    }

    #[test]
    fn collect_commands_exits_on_shutdown_or_disconnect() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut world = World::new(time::SimClock::from_tps(100.0));
        let far = Instant::now() + Duration::from_secs(5);

        tx.send(SimulationCommand::Shutdown).unwrap();
        let control = CoreSystemsOrchestrator::collect_commands(&rx, &mut world, far);
        assert!(matches!(control, TickControl::Exit));

        drop(tx);
        let control = CoreSystemsOrchestrator::collect_commands(&rx, &mut world, far);
        assert!(matches!(control, TickControl::Exit));
    }
}
