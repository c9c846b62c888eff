#![cfg(feature = "std")]

//! Text command grammar and the interactive terminal session.

use std::io::{BufRead, Write};

use rand::Rng;
use thiserror::Error;

use crate::{
    board::Coord,
    config::BOARD_SIZE,
    dispatch::Intent,
    engine::GameEngine,
    game::Phase,
    ship::{Orientation, ShipId},
    view::render_state,
};

pub const HELP: &str = "\
Commands:
  place <coord>            place your next ship (e.g. place A1)
  place <ship-id> <coord>  place a specific ship (e.g. place ship-2 C4)
  rotate                   toggle placement orientation
  orient h|v               set placement orientation
  fire <coord>             fire at the enemy board (a bare coordinate also works)
  restart                  start a new game
  clear                    clear the message log
  show                     redraw the boards
  help                     show this text
  quit                     leave the game";

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next unplaced ship at a coordinate.
    PlaceNext(Coord),
    /// Forwarded to the engine unchanged.
    Intent(Intent),
    Rotate,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`; type `help` for a list")]
    UnknownCommand(String),
    #[error("invalid coordinate `{0}`; use a column letter and row number like B7")]
    InvalidCoord(String),
    #[error("invalid ship id `{0}`")]
    InvalidShip(String),
    #[error("invalid orientation `{0}`; use h or v")]
    InvalidOrientation(String),
    #[error("`{0}` expects {1}")]
    MissingArgument(&'static str, &'static str),
}

/// Parse `B7` style coordinates: column letter then 1-based row.
pub fn parse_coord(input: &str) -> Result<Coord, ParseError> {
    let invalid = || ParseError::InvalidCoord(input.to_string());
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return Err(invalid());
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().map_err(|_| invalid())?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return Err(invalid());
    }
    Ok(Coord::new(row - 1, col))
}

fn parse_orientation(input: &str) -> Result<Orientation, ParseError> {
    match input.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        _ => Err(ParseError::InvalidOrientation(input.to_string())),
    }
}

/// Parse one line of input. `phase` decides what a bare coordinate means.
pub fn parse_command(line: &str, phase: Phase) -> Result<Command, ParseError> {
    let mut parts = line.split_whitespace();
    let head = parts.next().ok_or(ParseError::Empty)?;
    let args: Vec<&str> = parts.collect();

    match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("place" | "p", [coord]) => Ok(Command::PlaceNext(parse_coord(coord)?)),
        ("place" | "p", [ship, coord]) => {
            let ship_id: ShipId = ship.parse().map_err(|_| ParseError::InvalidShip(ship.to_string()))?;
            Ok(Command::Intent(Intent::PlaceShip {
                ship_id,
                start: parse_coord(coord)?,
            }))
        }
        ("place" | "p", _) => Err(ParseError::MissingArgument("place", "a coordinate")),
        ("rotate" | "r", _) => Ok(Command::Rotate),
        ("orient" | "o", [o]) => Ok(Command::Intent(Intent::SetOrientation {
            orientation: parse_orientation(o)?,
        })),
        ("orient" | "o", _) => Err(ParseError::MissingArgument("orient", "h or v")),
        ("fire" | "f", [coord]) => Ok(Command::Intent(Intent::Fire {
            target: parse_coord(coord)?,
        })),
        ("fire" | "f", _) => Err(ParseError::MissingArgument("fire", "a coordinate")),
        ("restart", _) => Ok(Command::Intent(Intent::Restart)),
        ("clear", _) => Ok(Command::Intent(Intent::ClearMessages)),
        ("show", _) => Ok(Command::Show),
        ("help" | "?", _) => Ok(Command::Help),
        ("quit" | "exit" | "q", _) => Ok(Command::Quit),
        (_, []) if phase == Phase::Play => {
            parse_coord(head).map(|target| Command::Intent(Intent::Fire { target }))
        }
        (_, []) if phase == Phase::Setup => parse_coord(head).map(Command::PlaceNext),
        _ => Err(ParseError::UnknownCommand(head.to_string())),
    }
}

/// Resolve a command against the current engine state into an intent.
/// Returns `None` for commands handled by the session itself.
fn to_intent<R: Rng + Clone>(engine: &GameEngine<R>, command: Command) -> Option<Intent> {
    let state = engine.state();
    match command {
        Command::Intent(intent) => Some(intent),
        Command::PlaceNext(start) => {
            // Out of setup, or with nothing left to place, let the engine
            // report the rejection.
            let ship_id = state
                .you
                .fleet
                .next_unplaced()
                .unwrap_or_else(|| ShipId::new(0));
            Some(Intent::PlaceShip { ship_id, start })
        }
        Command::Rotate => Some(Intent::SetOrientation {
            orientation: state.orientation.toggled(),
        }),
        Command::Show | Command::Help | Command::Quit => None,
    }
}

/// Read commands from `input` until `quit` or end of input, applying them to
/// `engine` and writing the rendered game to `output` after each change.
pub fn run_session<R, I, O>(
    engine: &mut GameEngine<R>,
    input: I,
    mut output: O,
    window: usize,
) -> anyhow::Result<()>
where
    R: Rng + Clone,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", render_state(engine.state(), window))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }
        match parse_command(&line, engine.state().phase) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(command) => {
                if let Some(intent) = to_intent(engine, command) {
                    engine.apply(intent);
                }
                writeln!(output, "{}", render_state(engine.state(), window))?;
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}
