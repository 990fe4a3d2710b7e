//! Go board with incremental group and liberty bookkeeping.
//!
//! Every occupied point refers to the handle of the group that owns it. Groups
//! live in an arena owned by the board, so cloning a board copies every group
//! and the clone shares nothing with the original. Speculative search relies
//! on this: analyzers clone the board and play on the clone.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::N;
use crate::group::Group;
use crate::point::{Point, PointSet};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    #[default]
    Black,
    White,
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color: {0}")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// Why a stone could not be placed. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("illegal move: point is off the board")]
    OffGrid,
    #[error("illegal move: point not empty")]
    Occupied,
    #[error("illegal move: suicide")]
    Suicide,
}

/// Handle of a group in the board's arena.
pub type GroupId = usize;

/// The outcome of a placement, computed before anything is written.
struct Survey {
    merged: Group,
    friends: BTreeSet<GroupId>,
    enemies: BTreeSet<GroupId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<GroupId>; N]; N],
    groups: Vec<Option<Group>>,
    free: Vec<GroupId>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [[None; N]; N],
            groups: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Remove every stone.
    pub fn clear(&mut self) {
        self.grid = [[None; N]; N];
        self.groups.clear();
        self.free.clear();
    }

    #[inline]
    fn slot(&self, pt: Point) -> Option<GroupId> {
        if pt.is_on_grid() {
            self.grid[pt.row as usize][pt.col as usize]
        } else {
            None
        }
    }

    #[inline]
    fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id).and_then(Option::as_ref)
    }

    /// The group occupying `pt`, if any.
    pub fn group_at(&self, pt: Point) -> Option<&Group> {
        self.slot(pt).and_then(|id| self.group(id))
    }

    pub fn color_at(&self, pt: Point) -> Option<Color> {
        self.group_at(pt).map(|g| g.color)
    }

    /// True for on-grid points without a stone.
    pub fn is_empty_at(&self, pt: Point) -> bool {
        pt.is_on_grid() && self.slot(pt).is_none()
    }

    /// All active (alive) groups.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().flatten()
    }

    pub fn stone_count(&self) -> usize {
        self.groups().map(|g| g.stones.len()).sum()
    }

    /// Classify the neighbors of `pt` and build the group a stone there would
    /// form, without touching the board.
    ///
    /// Captures are resolved before the suicide test: a stone with no
    /// liberties of its own is legal when it takes the last liberty of an
    /// adjacent enemy group.
    fn survey(&self, color: Color, pt: Point) -> Result<Survey, PlaceError> {
        if !pt.is_on_grid() {
            return Err(PlaceError::OffGrid);
        }
        if self.slot(pt).is_some() {
            return Err(PlaceError::Occupied);
        }

        let mut friends = BTreeSet::new();
        let mut enemies = BTreeSet::new();
        let mut liberties = PointSet::new();
        for n in pt.neighbors() {
            if !n.is_on_grid() {
                continue;
            }
            match self.slot(n) {
                Some(id) => match self.group(id) {
                    Some(g) if g.color == color => {
                        friends.insert(id);
                    }
                    Some(_) => {
                        enemies.insert(id);
                    }
                    None => {}
                },
                None => {
                    liberties.insert(n);
                }
            }
        }

        let mut merged = Group::singleton(color, pt, liberties);
        for g in friends.iter().filter_map(|&id| self.group(id)) {
            merged.merge(g);
        }

        let captures = enemies
            .iter()
            .filter_map(|&id| self.group(id))
            .any(Group::is_in_atari);
        if merged.is_dead() && !captures {
            return Err(PlaceError::Suicide);
        }

        Ok(Survey {
            merged,
            friends,
            enemies,
        })
    }

    /// Check whether `color` may play at `pt`.
    pub fn is_legal(&self, color: Color, pt: Point) -> bool {
        self.survey(color, pt).is_ok()
    }

    /// Place a stone, merging friendly groups and removing captured enemies.
    ///
    /// Returns the number of captured stones.
    ///
    /// # Errors
    /// - [`PlaceError::OffGrid`] - the point is not on the board
    /// - [`PlaceError::Occupied`] - the point already holds a stone
    /// - [`PlaceError::Suicide`] - the stone would have no liberties and
    ///   captures nothing
    pub fn try_place(&mut self, color: Color, pt: Point) -> Result<usize, PlaceError> {
        let Survey {
            merged,
            friends,
            enemies,
        } = self.survey(color, pt)?;

        for &id in &friends {
            self.release(id);
        }
        let stones = merged.stones.clone();
        let id = self.alloc(merged);
        for stone in stones.iter() {
            self.grid[stone.row as usize][stone.col as usize] = Some(id);
        }

        let mut captured = 0;
        for enemy in enemies {
            let dead = match self.groups.get_mut(enemy).and_then(Option::as_mut) {
                Some(g) => {
                    g.liberties.remove(pt);
                    g.is_dead()
                }
                None => false,
            };
            if dead {
                captured += self.remove_dead_group(enemy);
            }
        }
        Ok(captured)
    }

    /// Place a stone; false (and no change) if the move is illegal.
    pub fn place(&mut self, color: Color, pt: Point) -> bool {
        self.try_place(color, pt).is_ok()
    }

    fn alloc(&mut self, group: Group) -> GroupId {
        match self.free.pop() {
            Some(id) => {
                self.groups[id] = Some(group);
                id
            }
            None => {
                self.groups.push(Some(group));
                self.groups.len() - 1
            }
        }
    }

    fn release(&mut self, id: GroupId) -> Option<Group> {
        let group = self.groups.get_mut(id)?.take();
        if group.is_some() {
            self.free.push(id);
        }
        group
    }

    /// Take a captured group off the board. Each freed point becomes a
    /// liberty of every group next to it.
    fn remove_dead_group(&mut self, id: GroupId) -> usize {
        let Some(group) = self.release(id) else {
            return 0;
        };
        for stone in group.stones.iter() {
            self.grid[stone.row as usize][stone.col as usize] = None;
        }
        for stone in group.stones.iter() {
            for n in stone.neighbors() {
                if let Some(g) = self
                    .slot(n)
                    .and_then(|gid| self.groups.get_mut(gid))
                    .and_then(Option::as_mut)
                {
                    g.liberties.insert(stone);
                }
            }
        }
        group.stones.len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N as i32 {
            write!(f, "{:>2} ", N as i32 - row)?;
            for col in 0..N as i32 {
                let ch = match self.color_at(Point::new(row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..N as i32 {
            let label = crate::point::str_coord(Point::new(0, col));
            write!(f, "{} ", &label[..1])?;
        }
        writeln!(f)
    }
}
