use crate::quoridor::{Coord, Direction, Player};

/// A node in the board's adjacency graph.
///
/// Each side of the cell is either linked to the adjacent cell, or closed off by a fence
/// or the edge of the board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    coord: Coord,
    links: [Option<Coord>; 4],
    occupant: Option<Player>,
}

impl Cell {
    /// An empty cell with every side closed.
    pub fn new(coord: Coord) -> Self {
        Cell {
            coord,
            links: [None; 4],
            occupant: None,
        }
    }

    /// Where this cell is on the board.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The cell linked in a [`Direction`], if that side is open.
    pub fn link(&self, d: Direction) -> Option<Coord> {
        self.links[d as usize]
    }

    /// The cell linked toward a displacement `(columns, rows)`, if that side is open.
    ///
    /// See [`Direction::toward`] for how the side is picked.
    pub fn toward(&self, dx: i8, dy: i8) -> Option<Coord> {
        self.link(Direction::toward(dx, dy)?)
    }

    /// Links this cell to its neighbor in a [`Direction`].
    pub fn open(&mut self, d: Direction, neighbor: Coord) {
        debug_assert_eq!(self.coord.step(d), Some(neighbor));
        self.links[d as usize] = Some(neighbor);
    }

    /// Closes off this cell in a [`Direction`].
    pub fn close(&mut self, d: Direction) {
        self.links[d as usize] = None;
    }

    /// An iterator over the cells linked to this one.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> + '_ {
        self.links.iter().flatten().copied()
    }

    /// The pawn on this cell, if any.
    pub fn occupant(&self) -> Option<Player> {
        self.occupant
    }

    /// Places a pawn on this cell, or clears it.
    pub fn set_occupant(&mut self, occupant: Option<Player>) {
        self.occupant = occupant;
    }
}
