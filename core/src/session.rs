use serde::{Deserialize, Serialize};

use crate::*;

/// Logical player input, already decoded from whatever device produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleFlag,
    Reveal,
    Quit,
}

impl Action {
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveUp => Some(Direction::Up),
            Self::MoveDown => Some(Direction::Down),
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::ToggleFlag | Self::Reveal | Self::Quit => None,
        }
    }
}

/// One game from the first action until a win, a loss, or the player quitting.
///
/// Every action is either applied completely or rejected with an [`IllegalAction`] and no
/// change at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    engine: PlayEngine,
    cursor: Coord2,
    closed: bool,
}

impl Session {
    /// Starts a session on a random board, seeding from system entropy when `seed` is `None`.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let generator = match seed {
            Some(seed) => RandomMinefieldGenerator::new(seed),
            None => RandomMinefieldGenerator::from_entropy(),
        };
        log::info!(
            "New {}x{} session with {} mines, seed: {}",
            config.size.0,
            config.size.1,
            config.mines,
            generator.seed()
        );
        let layout = generator.generate(config)?;
        Ok(Self::with_layout(layout))
    }

    /// Starts a session on a fixed board.
    pub fn with_layout(layout: MineLayout) -> Self {
        let engine = PlayEngine::new(layout);
        let cursor = engine.grid().center();
        Self {
            engine,
            cursor,
            closed: false,
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn outcome(&self) -> Outcome {
        self.engine.outcome()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether the outer loop should stop feeding actions.
    pub fn is_over(&self) -> bool {
        self.closed || self.engine.is_finished()
    }

    pub fn apply_action(&mut self, action: Action) -> Result<SessionSnapshot> {
        if let Err(err) = self.try_apply(action) {
            log::debug!("Rejected {:?} at {:?}: {}", action, self.cursor, err);
            return Err(err);
        }
        Ok(self.snapshot())
    }

    fn try_apply(&mut self, action: Action) -> Result<()> {
        if action == Action::Quit {
            log::info!("Session closed with outcome {:?}", self.outcome());
            self.closed = true;
            return Ok(());
        }

        if self.closed {
            return Err(IllegalAction::SessionClosed.into());
        }
        if self.engine.is_finished() {
            return Err(IllegalAction::GameOver.into());
        }

        match action {
            Action::ToggleFlag => {
                self.engine.toggle_flag(self.cursor)?;
            }
            Action::Reveal => match self.engine.reveal(self.cursor)? {
                RevealOutcome::NoChange => log::debug!("Cell at {:?} already open", self.cursor),
                outcome => log::debug!("Reveal at {:?}: {:?}", self.cursor, outcome),
            },
            _ => {
                if let Some(direction) = action.direction() {
                    self.cursor = self.engine.grid().wrapping_step(self.cursor, direction);
                }
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            cells: self
                .engine
                .board()
                .map(|&cell| VisibleCell::from(cell)),
            cursor: self.cursor,
            mines_left: self.engine.mines_left(),
            outcome: self.engine.outcome(),
            closed: self.closed,
        }
    }
}
