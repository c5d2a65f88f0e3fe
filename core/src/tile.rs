use serde::Serialize;

/// Canonical player-visible state stored by the gameplay engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum EngineCell {
    Hidden,
    Flagged,
    Revealed(u8),
    /// A mine shown to the player, only ever set once the game is lost.
    Mine,
}

impl Default for EngineCell {
    fn default() -> Self {
        Self::Hidden
    }
}
