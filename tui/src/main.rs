//! Play Minesweeper in your terminal!
//!
//! Arrow keys (or `hjkl`) move the cursor, space reveals, `f` toggles a flag, and `Esc` quits.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::KeyEvent;
use termsweep_core::{
    CellCount, Coord, GameConfig, GameError, Session, SessionSnapshot, random_seed,
};

mod input;
mod render;
mod terminal;

use input::Input;
use terminal::Terminal;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
    Classic,
}

impl From<Preset> for GameConfig {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => GameConfig::BEGINNER,
            Preset::Intermediate => GameConfig::INTERMEDIATE,
            Preset::Expert => GameConfig::EXPERT,
            Preset::Classic => GameConfig::CLASSIC,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use, logs go to stderr
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board size and mine count to start from
    #[arg(short, long, value_enum, default_value_t = Preset::Classic)]
    preset: Preset,

    /// Number of rows, overrides the preset
    #[arg(short = 'H', long)]
    height: Option<Coord>,

    /// Number of columns, overrides the preset
    #[arg(short = 'W', long)]
    width: Option<Coord>,

    /// Number of mines, overrides the preset
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed for the first game instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn game_config(&self) -> termsweep_core::Result<GameConfig> {
        let preset = GameConfig::from(self.preset);
        let size = (
            self.height.unwrap_or(preset.size.0),
            self.width.unwrap_or(preset.size.1),
        );
        GameConfig::new(size, self.mines.unwrap_or(preset.mines))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(log_level) = args.verbose.log_level() {
        simple_logger::SimpleLogger::new()
            .with_level(log_level.to_level_filter())
            .init()?;
    }
    log::debug!("{:?}", args);

    // reject bad boards before the screen is touched
    let config = args.game_config()?;
    let mut seed = args.seed;

    let mut terminal = Terminal::enter()?;
    loop {
        let session = Session::new(config, Some(seed.take().unwrap_or_else(random_seed)))?;
        let Ending::Finished(snapshot) = play(&mut terminal, session)? else {
            break;
        };

        if !input::is_yes(wait_for_key(&mut terminal, &snapshot, "Play again? [y]")?) {
            break;
        }
    }

    Ok(())
}

enum Ending {
    Finished(SessionSnapshot),
    Quit,
}

/// Runs one session until it is won, lost, or quit.
fn play(terminal: &mut Terminal, mut session: Session) -> Result<Ending> {
    let mut snapshot = session.snapshot();
    let mut message: Option<String> = None;

    while !session.is_over() {
        draw(terminal, &snapshot, message.as_deref())?;

        let Input::Key(key) = terminal.next_input()? else {
            continue;
        };
        let Some(action) = input::decode_key(key) else {
            continue;
        };
        match session.apply_action(action) {
            Ok(next) => {
                snapshot = next;
                message = None;
            }
            Err(GameError::IllegalAction(reason)) => message = Some(reason.to_string()),
            Err(err) => return Err(err.into()),
        }
    }

    if session.is_closed() {
        return Ok(Ending::Quit);
    }

    wait_for_key(terminal, &snapshot, &render::status_line(&snapshot, None))?;
    Ok(Ending::Finished(snapshot))
}

/// Shows `status` under the board until a key is pressed, redrawing on resize.
fn wait_for_key(
    terminal: &mut Terminal,
    snapshot: &SessionSnapshot,
    status: &str,
) -> Result<KeyEvent> {
    loop {
        terminal.draw(snapshot, status)?;
        if let Input::Key(key) = terminal.next_input()? {
            return Ok(key);
        }
    }
}

fn draw(terminal: &mut Terminal, snapshot: &SessionSnapshot, message: Option<&str>) -> Result<()> {
    terminal.draw(snapshot, &render::status_line(snapshot, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_use_classic_board() {
        let args = Args::try_parse_from(["termsweep"]).unwrap();

        assert_eq!(args.game_config(), Ok(GameConfig::CLASSIC));
        assert_eq!(args.seed, None);
    }

    #[test]
    fn explicit_dimensions_override_preset() {
        let args =
            Args::try_parse_from(["termsweep", "--preset", "expert", "-H", "5", "--mines", "3"])
                .unwrap();

        assert_eq!(args.game_config(), GameConfig::new((5, 30), 3));
    }

    #[test]
    fn impossible_board_is_rejected() {
        let args = Args::try_parse_from(["termsweep", "-H", "2", "-W", "2", "-m", "4"]).unwrap();

        assert!(matches!(
            args.game_config(),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn oversized_dimensions_fail_to_parse() {
        assert!(Args::try_parse_from(["termsweep", "--height", "300"]).is_err());
    }

    #[test]
    fn seed_is_parsed() {
        let args = Args::try_parse_from(["termsweep", "-s", "1234", "-p", "beginner"]).unwrap();

        assert_eq!(args.seed, Some(1234));
        assert_eq!(args.game_config(), Ok(GameConfig::BEGINNER));
    }
}
