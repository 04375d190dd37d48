//=========================================================================
// World
//=========================================================================
//
// Registry of dodge-capable entities, stepped once per fixed tick.
//
// Tick lifecycle:
//   reset events → fixed_update() every entity (id order) → clear mailbox
//   → advance clock
//
// Entities are visited in ascending id order so every replica applies
// the same tick in the same order.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::dodge::DodgeAbility;
use crate::core::message_bus::EventBus;
use crate::core::network::{EntityId, InputMailbox, TickInput};
use crate::core::time::{SimClock, SimTime};
use crate::error::{Result, SimulationError};

//=== World ===============================================================

pub struct World {
    clock: SimClock,
    abilities: BTreeMap<EntityId, DodgeAbility>,
    mailbox: InputMailbox,
    events: EventBus,
}

impl World {
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            abilities: BTreeMap::new(),
            mailbox: InputMailbox::new(),
            events: EventBus::new(),
        }
    }

    //--- Entities ---------------------------------------------------------

    /// Registers an entity's dodge component.
    pub fn spawn(&mut self, ability: DodgeAbility) -> Result<()> {
        let entity = ability.entity();
        if self.abilities.contains_key(&entity) {
            return Err(SimulationError::DuplicateEntity(entity));
        }

        info!("Spawned {} at {}", entity, self.clock.now());
        self.abilities.insert(entity, ability);
        Ok(())
    }

    /// Removes an entity. Any run in progress is abandoned with it.
    pub fn despawn(&mut self, entity: EntityId) -> Option<DodgeAbility> {
        let removed = self.abilities.remove(&entity);
        if let Some(ability) = &removed {
            info!("Despawned {} (phase: {})", entity, ability.phase());
        }
        removed
    }

    pub fn ability(&self, entity: EntityId) -> Option<&DodgeAbility> {
        self.abilities.get(&entity)
    }

    pub fn entity_count(&self) -> usize {
        self.abilities.len()
    }

    //--- Input ------------------------------------------------------------

    /// Stages input for the upcoming tick.
    pub fn queue_input(&mut self, entity: EntityId, input: TickInput) {
        self.mailbox.deliver(entity, input);
    }

    //--- Tick -------------------------------------------------------------

    /// Runs one tick and returns the simulation time it was evaluated at.
    pub fn step(&mut self) -> SimTime {
        let now = self.clock.now();
        self.events.reset();

        for (&entity, ability) in self.abilities.iter_mut() {
            let mut input = self.mailbox.for_entity(entity);
            ability.fixed_update(now, &mut input, &mut self.events);
        }

        if !self.mailbox.is_empty() {
            debug!("Discarding input for {} unknown entities", self.mailbox.len());
            self.mailbox.clear();
        }

        trace!("Tick {} at {} ({} events)", self.clock.tick(), now, self.events.total());
        self.clock.advance();
        now
    }

    //--- Queries ----------------------------------------------------------

    /// Simulation time of the next tick to run.
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }

    /// Events published during the latest tick.
    pub fn events(&self) -> &EventBus {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
