//! Gameplay state shared by the frame loop
//!
//! Holds the phase of the game and the last known pointer position used by
//! drag-follow

use super::vector::NVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Aiming, // particle waits at the emission point, forces are ignored
    Running, // particle launched, forces accumulate
    Won, // finish reached, the loop stops
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub phase: GamePhase,
    pub pointer: Option<NVec2>, // last pointer position, screen space
    pub frame: u64, // frames stepped so far
}

impl Engine {
    pub fn started(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn finished(&self) -> bool {
        self.phase == GamePhase::Won
    }
}
