//! Read-only helpers for presenting a [`GameState`].

use alloc::{format, string::String};
use core::fmt::Write;

use crate::{
    board::{Board, BoardCell, ShotStatus},
    config::BOARD_SIZE,
    game::{GameMessage, GameState, MessageKind, Phase, Player},
};

/// What a front end should draw for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Unknown,
    Ship,
    Hit,
    Miss,
}

impl CellView {
    /// Hit wins over miss, miss over a revealed ship.
    pub fn of(cell: &BoardCell, reveal: bool) -> Self {
        match cell.shot {
            ShotStatus::Hit => CellView::Hit,
            ShotStatus::Miss => CellView::Miss,
            ShotStatus::Unknown if reveal && cell.occupant.is_some() => CellView::Ship,
            ShotStatus::Unknown => CellView::Unknown,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            CellView::Unknown => '.',
            CellView::Ship => 'S',
            CellView::Hit => 'X',
            CellView::Miss => 'o',
        }
    }
}

/// Your ships are always visible; the enemy's only once the game is over.
pub fn reveals_ships(owner: Player, phase: Phase) -> bool {
    match owner {
        Player::You => true,
        Player::Enemy => phase == Phase::GameOver,
    }
}

/// Cell views of `owner`'s board as seen by you.
pub fn board_view(state: &GameState, owner: Player) -> [[CellView; BOARD_SIZE]; BOARD_SIZE] {
    let reveal = reveals_ships(owner, state.phase);
    let board = &state.side(owner).board;
    let mut grid = [[CellView::Unknown; BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in board.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            grid[r][c] = CellView::of(cell, reveal);
        }
    }
    grid
}

/// One-line summary of whose move it is.
pub fn status_line(state: &GameState) -> String {
    match state.phase {
        Phase::Setup => match state.you.fleet.next_unplaced() {
            Some(ship) => {
                let length = state.you.fleet.ship_length(ship).unwrap_or(0);
                format!("Setup: place ship of length {} ({}).", length, state.orientation)
            }
            None => String::from("Setup: all ships placed."),
        },
        Phase::Play if state.turn == Player::You => String::from("Play: your turn."),
        Phase::Play => String::from("Play: enemy turn."),
        Phase::GameOver => String::from("Game over."),
    }
}

/// The last `n` log entries, oldest first.
pub fn recent_messages(state: &GameState, n: usize) -> &[GameMessage] {
    let start = state.messages.len().saturating_sub(n);
    &state.messages[start..]
}

/// Board as text with column letters and 1-based row numbers.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for cell in row.iter() {
            let _ = write!(out, " {}", CellView::of(cell, reveal).glyph());
        }
        out.push('\n');
    }
    out
}

fn message_prefix(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Error => "! ",
        MessageKind::Win | MessageKind::Lose => "* ",
        _ => "  ",
    }
}

/// Both boards, the status line and the most recent `window` messages.
pub fn render_state(state: &GameState, window: usize) -> String {
    let mut out = String::new();
    out.push_str("Enemy board:\n");
    out.push_str(&render_board(&state.enemy.board, reveals_ships(Player::Enemy, state.phase)));
    out.push_str("\nYour board:\n");
    out.push_str(&render_board(&state.you.board, reveals_ships(Player::You, state.phase)));
    out.push('\n');
    out.push_str(&status_line(state));
    out.push('\n');
    let messages = recent_messages(state, window);
    if messages.is_empty() {
        out.push_str("No messages yet.\n");
    }
    for m in messages {
        let _ = writeln!(out, "{}{}", message_prefix(m.kind), m.text);
    }
    out
}
