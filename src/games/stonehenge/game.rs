//! Stonehenge game implementation.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{self, LeyKind, MAX_BOARD_SIZE};
use crate::core::{GameState, Player, LOSE, WIN};
use crate::error::{Error, Result};
use crate::rules::Game;

const INSTRUCTIONS: &str = "Players take turns claiming cells. When a player \
captures at least half of the cells in a ley-line, then the player captures \
that ley-line. The first player to capture at least half of the ley-lines is \
the winner. A ley-line, once claimed, cannot be taken by the other player.";

/// Position in a game of Stonehenge.
///
/// Uses `im` persistent vectors so that `make_move` shares structure
/// with its parent instead of copying the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StonehengeState {
    /// Player to move.
    active: Player,
    /// Board size (1 to `MAX_BOARD_SIZE`).
    size: usize,
    /// Owner of each cell, row-major.
    cells: Vector<Option<Player>>,
    /// Owner of each ley line, in `board::ley_lines` order.
    markers: Vector<Option<Player>>,
}

impl StonehengeState {
    /// Create an empty board of `size`.
    pub fn new(p1_turn: bool, size: usize) -> Result<Self> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(Error::InvalidBoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }

        Ok(Self::empty(Player::from_p1_turn(p1_turn), size))
    }

    fn empty(active: Player, size: usize) -> Self {
        Self {
            active,
            size,
            cells: Vector::from(vec![None; board::cell_count(size)]),
            markers: Vector::from(vec![None; board::ley_count(size)]),
        }
    }

    /// Board size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Owner of the cell labelled `label`, if claimed.
    #[must_use]
    pub fn cell(&self, label: char) -> Option<Player> {
        board::index_of(label, self.size).and_then(|i| self.cells.get(i).copied().flatten())
    }

    /// Owner of ley line `index` of `kind`, if captured.
    #[must_use]
    pub fn marker(&self, kind: LeyKind, index: usize) -> Option<Player> {
        if index > self.size {
            return None;
        }
        self.markers
            .get(kind.offset() * (self.size + 1) + index)
            .copied()
            .flatten()
    }

    /// Number of ley lines `player` has captured.
    #[must_use]
    pub fn leys_held(&self, player: Player) -> usize {
        self.markers.iter().filter(|&&m| m == Some(player)).count()
    }

    /// Check if `player` holds at least half of all ley lines.
    fn holds_half(&self, player: Player) -> bool {
        2 * self.leys_held(player) >= self.markers.len()
    }

    /// Check if either player holds at least half of all ley lines.
    #[must_use]
    pub fn is_over(&self) -> bool {
        Player::ALL.into_iter().any(|p| self.holds_half(p))
    }

    /// Check if `player` has won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.holds_half(player) && self.is_over()
    }

    /// States reachable in one move, in move order.
    fn successors(&self) -> impl Iterator<Item = StonehengeState> + '_ {
        self.possible_moves()
            .into_iter()
            .filter_map(move |mv| self.make_move(&mv).ok())
    }
}

impl GameState for StonehengeState {
    type Move = char;
    type Key = Self;

    fn possible_moves(&self) -> Vec<char> {
        if self.is_over() {
            return Vec::new();
        }

        self.cells
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(i, _)| board::label(i))
            .collect()
    }

    fn make_move(&self, mv: &char) -> Result<Self> {
        let index = board::index_of(*mv, self.size)
            .filter(|&i| self.cells.get(i) == Some(&None) && !self.is_over())
            .ok_or_else(|| Error::invalid_move(mv))?;

        let lines = board::cached_ley_lines(self.size).ok_or(Error::InvalidBoardSize {
            size: self.size,
            max: MAX_BOARD_SIZE,
        })?;

        let player = self.active;
        let mut cells = self.cells.clone();
        cells.set(index, Some(player));

        // Capture any open ley line where the mover now holds half the cells.
        let mut markers = self.markers.clone();
        for (line, cell_indices) in lines.iter().enumerate() {
            if markers[line].is_some() {
                continue;
            }
            let held = cell_indices
                .iter()
                .filter(|&&c| cells.get(c) == Some(&Some(player)))
                .count();
            if 2 * held >= cell_indices.len() {
                markers.set(line, Some(player));
            }
        }

        Ok(Self {
            active: player.opponent(),
            size: self.size,
            cells,
            markers,
        })
    }

    fn current_player(&self) -> Player {
        self.active
    }

    fn rough_outcome(&self) -> f64 {
        let player = self.active;
        let opponent = player.opponent();

        if self.is_over() {
            return if self.is_winner(player) {
                WIN
            } else if self.is_winner(opponent) {
                LOSE
            } else {
                0.0
            };
        }

        let mut loss_possible = true;
        for next in self.successors() {
            if next.is_winner(player) {
                return WIN;
            }
            if !next.successors().any(|reply| reply.is_winner(opponent)) {
                loss_possible = false;
            }
        }

        if loss_possible {
            return LOSE;
        }

        // Captured-line margin, scaled so that half the lines is 1.
        let mine = self.leys_held(player) as f64;
        let theirs = self.leys_held(opponent) as f64;
        (mine - theirs) / (self.markers.len() as f64 / 2.0)
    }

    fn key(&self) -> Self {
        self.clone()
    }
}

/// Stonehenge game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stonehenge {
    p1_starts: bool,
    size: usize,
}

impl Stonehenge {
    /// Create a game on a board of `size` (1 to `MAX_BOARD_SIZE`).
    pub fn new(p1_starts: bool, size: usize) -> Result<Self> {
        // Validate once here so initial_state cannot fail.
        StonehengeState::new(p1_starts, size)?;
        Ok(Self { p1_starts, size })
    }

    /// Board size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Game for Stonehenge {
    type State = StonehengeState;

    fn initial_state(&self) -> StonehengeState {
        StonehengeState::empty(Player::from_p1_turn(self.p1_starts), self.size)
    }

    fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    fn str_to_move(&self, input: &str) -> Option<char> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            _ => None,
        }
    }

    fn is_over(&self, state: &StonehengeState) -> bool {
        state.is_over()
    }

    fn is_winner(&self, state: &StonehengeState, player: Player) -> bool {
        state.is_winner(player)
    }
}
