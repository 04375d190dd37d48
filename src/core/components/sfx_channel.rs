//=========================================================================
// SFX Channel
//=========================================================================
//
// Fan-out sound event sink shared by all participants.
//
// Architecture:
//   SfxChannel ──broadcast_event()──> Sender ─┬─> participant A receiver
//                                             ├─> participant B receiver
//                                             └─> ...
//
// Each subscriber receives every event exactly once. Subscribers whose
// receiver was dropped are pruned by the broadcast that finds them gone.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::effects::SoundBroadcaster;

//=== SfxChannel ==========================================================

#[derive(Debug, Default)]
pub struct SfxChannel {
    subscribers: Vec<Sender<String>>,
}

impl SfxChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant and returns its event stream.
    pub fn subscribe(&mut self) -> Receiver<String> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl SoundBroadcaster for SfxChannel {
    fn broadcast_event(&mut self, event: &str) {
        trace!("Broadcasting SFX '{}' to {} participants", event, self.subscribers.len());

        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event.to_owned()).is_ok());

        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            debug!("Pruned {} disconnected SFX subscribers", pruned);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
