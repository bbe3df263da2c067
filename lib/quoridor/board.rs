use crate::quoridor::{Cell, Coord, Direction, Fence, Player};
use arrayvec::ArrayVec;
use bitvec::array::BitArray;
use derive_more::{Display, Error};
use proptest::{collection::vec, prelude::*, sample::Selector};
use std::{array, collections::VecDeque, ops::Index};
use test_strategy::Arbitrary;
use tracing::{debug, instrument};

/// Every displacement `(columns, rows)` a pawn could possibly move by.
const REACH: [(i8, i8); 12] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (0, -2),
    (0, 2),
    (2, 0),
    (-2, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Represents an illegal pawn move on a given [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error)]
#[display(fmt = "{_0} cannot move to `{_1}`")]
pub struct IllegalMove(pub Player, pub Coord);

/// The reason why a [`Fence`] cannot be placed on a given [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error)]
pub enum IllegalFence {
    #[display(fmt = "fence `{_0}` is obstructed by another fence or the edge of the board")]
    Obstructed(#[error(not(source))] Fence),

    #[display(fmt = "fence `{_0}` breaks the fair play rule")]
    BreaksFairPlay(#[error(not(source))] Fence),
}

/// The Quoridor board.
///
/// Holds the adjacency graph between cells, where fences are missing links,
/// and where each player's pawn stands.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Cell; Coord::COUNT],
    pawns: [Coord; 2],
}

impl Default for Board {
    fn default() -> Self {
        let mut cells: [Cell; Coord::COUNT] = array::from_fn(|i| Cell::new(Coord::from_index(i)));

        for c in Coord::iter() {
            for d in Direction::ALL {
                if let Some(n) = c.step(d) {
                    cells[c.index()].open(d, n);
                }
            }
        }

        for p in Player::ALL {
            cells[p.home().index()].set_occupant(Some(p));
        }

        Board {
            cells,
            pawns: Player::ALL.map(Player::home),
        }
    }
}

impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<(Option<Fence>, Selector)>(), 0..64)
            .prop_map(|actions| {
                let mut board = Board::default();
                let mut turn = Player::One;

                for (fence, selector) in actions {
                    if Player::ALL.iter().any(|&p| board.is_in_goal_row(p)) {
                        break;
                    }

                    let played = match fence {
                        Some(f) => board.place_fence(f).is_ok(),
                        None => match selector.try_select(board.moves(turn)) {
                            Some(whither) => board.move_pawn(turn, whither).is_ok(),
                            None => false,
                        },
                    };

                    if played {
                        turn = !turn;
                    }
                }

                board
            })
            .boxed()
    }
}

impl Board {
    /// Where the pawn of a [`Player`] stands.
    pub fn pawn(&self, player: Player) -> Coord {
        self.pawns[player as usize]
    }

    /// Whether the pawn of a [`Player`] has reached its goal row.
    pub fn is_in_goal_row(&self, player: Player) -> bool {
        self.pawn(player).row() == player.goal_row()
    }

    /// An iterator over the fences on the board.
    pub fn fences(&self) -> impl Iterator<Item = Fence> + '_ {
        Fence::iter().filter(|f| {
            let (whither, side) = (f.whither(), f.closes());
            whither.step(side).is_some() && self[whither].link(side).is_none()
        })
    }

    /// An iterator over the cells the pawn of a [`Player`] may legally move to.
    pub fn moves(&self, player: Player) -> impl Iterator<Item = Coord> {
        let whence = self.pawn(player);
        let (x, y) = (whence.col() as i8, whence.row() as i8);

        let moves: ArrayVec<Coord, 12> = REACH
            .iter()
            .filter_map(|&(dx, dy)| Coord::new(x + dx, y + dy).ok())
            .filter(|&whither| self.is_legal_move(player, whither))
            .collect();

        moves.into_iter()
    }

    /// Whether the pawn of a [`Player`] may legally move to a given cell.
    pub fn is_legal_move(&self, player: Player, whither: Coord) -> bool {
        if self[whither].occupant().is_some() {
            return false;
        }

        let whence = &self[self.pawn(player)];
        let (dx, dy) = whither - whence.coord();

        self.is_step(whence, dx, dy)
            || self.is_jump(whence, dx, dy)
            || self.is_side_step(whence, dx, dy)
    }

    /// Moves the pawn of a [`Player`] if legal on this board.
    #[instrument(level = "trace", skip(self), err)]
    pub fn move_pawn(&mut self, player: Player, whither: Coord) -> Result<(), IllegalMove> {
        if !self.is_legal_move(player, whither) {
            return Err(IllegalMove(player, whither));
        }

        let whence = self.pawn(player);
        self.cell_mut(whence).set_occupant(None);
        self.cell_mut(whither).set_occupant(Some(player));
        self.pawns[player as usize] = whither;

        Ok(())
    }

    /// Places a [`Fence`] if legal on this board.
    ///
    /// The fence is rejected if that side is already closed, or if it would leave either
    /// player without a way to their goal row, in which case the board is left untouched.
    #[instrument(level = "trace", skip(self), err)]
    pub fn place_fence(&mut self, fence: Fence) -> Result<(), IllegalFence> {
        let (whither, side) = (fence.whither(), fence.closes());
        let neighbor = self[whither]
            .link(side)
            .ok_or(IllegalFence::Obstructed(fence))?;

        self.cell_mut(whither).close(side);
        self.cell_mut(neighbor).close(side.opposite());

        if Player::ALL.iter().all(|&p| self.can_reach_goal(p)) {
            Ok(())
        } else {
            debug!(%fence, "rolling back fence");
            self.cell_mut(whither).open(side, neighbor);
            self.cell_mut(neighbor).open(side.opposite(), whither);
            Err(IllegalFence::BreaksFairPlay(fence))
        }
    }

    /// Whether the pawn of a [`Player`] has any way to its goal row.
    ///
    /// Only fences are considered, pawns never block the way.
    pub fn can_reach_goal(&self, player: Player) -> bool {
        let goal = player.goal_row();
        let whence = self.pawn(player);

        let mut visited: BitArray<[u64; 2]> = BitArray::ZERO;
        let mut frontier = VecDeque::from([whence]);
        visited.set(whence.index(), true);

        while let Some(c) = frontier.pop_front() {
            if c.row() == goal {
                return true;
            }

            for n in self[c].neighbors() {
                if !visited[n.index()] {
                    visited.set(n.index(), true);
                    frontier.push_back(n);
                }
            }
        }

        false
    }

    fn cell_mut(&mut self, c: Coord) -> &mut Cell {
        &mut self.cells[c.index()]
    }

    fn is_step(&self, whence: &Cell, dx: i8, dy: i8) -> bool {
        matches!((dx.abs(), dy.abs()), (1, 0) | (0, 1)) && whence.toward(dx, dy).is_some()
    }

    fn is_jump(&self, whence: &Cell, dx: i8, dy: i8) -> bool {
        if !matches!((dx.abs(), dy.abs()), (2, 0) | (0, 2)) {
            return false;
        }

        match whence.toward(dx, dy) {
            Some(m) => self[m].occupant().is_some() && self[m].toward(dx, dy).is_some(),
            None => false,
        }
    }

    fn is_side_step(&self, whence: &Cell, dx: i8, dy: i8) -> bool {
        if (dx.abs(), dy.abs()) != (1, 1) {
            return false;
        }

        let occupied = |c: &Coord| self[*c].occupant().is_some();

        if let Some(c) = whence.toward(dx, 0).filter(occupied) {
            self[c].toward(dx, 0).is_none() && self[c].toward(0, dy).is_some()
        } else if let Some(r) = whence.toward(0, dy).filter(occupied) {
            self[r].toward(0, dy).is_none() && self[r].toward(dx, 0).is_some()
        } else {
            false
        }
    }
}

/// Retrieves the [`Cell`] at a given [`Coord`].
impl Index<Coord> for Board {
    type Output = Cell;

    fn index(&self, c: Coord) -> &Self::Output {
        &self.cells[c.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quoridor::Orientation;
    use test_strategy::proptest;

    fn pawns_agree_with_occupants(board: &Board) -> bool {
        Coord::iter().all(|c| {
            let occupant = board[c].occupant();
            Player::ALL
                .iter()
                .all(|&p| (occupant == Some(p)) == (board.pawn(p) == c))
        })
    }

    fn links_are_reciprocal(board: &Board) -> bool {
        Coord::iter().all(|c| {
            Direction::ALL.iter().all(|&d| match board[c].link(d) {
                None => c.step(d).map_or(true, |n| board[n].link(d.opposite()).is_none()),
                Some(n) => c.step(d) == Some(n) && board[n].link(d.opposite()) == Some(c),
            })
        })
    }

    #[test]
    fn new_board_has_pawns_at_home() {
        let board = Board::default();
        assert_eq!(board.pawn(Player::One), Coord::at(4, 0));
        assert_eq!(board.pawn(Player::Two), Coord::at(4, 8));
        assert!(pawns_agree_with_occupants(&board));
    }

    #[test]
    fn new_board_has_no_fences() {
        let board = Board::default();
        assert_eq!(board.fences().count(), 0);
        assert!(links_are_reciprocal(&board));
    }

    #[proptest]
    fn new_board_leaves_every_player_a_way_to_goal(p: Player) {
        assert!(Board::default().can_reach_goal(p));
    }

    #[proptest]
    fn board_always_leaves_every_player_a_way_to_goal(b: Board, p: Player) {
        assert!(b.can_reach_goal(p));
    }

    #[proptest]
    fn board_links_are_always_reciprocal(b: Board) {
        assert!(links_are_reciprocal(&b));
    }

    #[proptest]
    fn board_pawns_always_agree_with_occupants(b: Board) {
        assert!(pawns_agree_with_occupants(&b));
    }

    #[proptest]
    fn legal_moves_can_be_played(b: Board, p: Player, s: Selector) {
        if let Some(whither) = s.try_select(b.moves(p)) {
            let mut next = b.clone();
            assert_eq!(next.move_pawn(p, whither), Ok(()));
            assert_eq!(next.pawn(p), whither);
            assert_eq!(next.pawn(!p), b.pawn(!p));
            assert_eq!(next[b.pawn(p)].occupant(), None);
            assert!(pawns_agree_with_occupants(&next));
        }
    }

    #[proptest]
    fn illegal_moves_leave_the_board_untouched(b: Board, p: Player, whither: Coord) {
        prop_assume!(!b.moves(p).any(|m| m == whither));

        let mut next = b.clone();
        assert_eq!(next.move_pawn(p, whither), Err(IllegalMove(p, whither)));
        assert_eq!(next, b);
    }

    #[proptest]
    fn pawns_cannot_move_onto_occupied_cells(b: Board, p: Player) {
        let mut next = b.clone();
        assert_eq!(next.move_pawn(p, b.pawn(!p)), Err(IllegalMove(p, b.pawn(!p))));
        assert_eq!(next.move_pawn(p, b.pawn(p)), Err(IllegalMove(p, b.pawn(p))));
        assert_eq!(next, b);
    }

    #[proptest]
    fn pawns_move_at_most_two_cells(b: Board, p: Player) {
        for whither in b.moves(p) {
            let (dx, dy) = whither - b.pawn(p);
            assert!((1..=2).contains(&(dx.abs() + dy.abs())));
        }
    }

    #[proptest]
    fn rejected_fences_leave_the_board_untouched(b: Board, f: Fence) {
        let mut next = b.clone();
        if let Err(e) = next.place_fence(f) {
            assert_eq!(next, b);
            assert_eq!(next.place_fence(f), Err(e));
            assert_eq!(next, b);
        }
    }

    #[proptest]
    fn placed_fences_close_both_sides(b: Board, f: Fence) {
        let mut next = b.clone();
        if next.place_fence(f).is_ok() {
            let (whither, side) = (f.whither(), f.closes());
            assert_eq!(next[whither].link(side), None);
            assert!(whither
                .step(side)
                .is_some_and(|n| next[n].link(side.opposite()).is_none()));
            assert!(next.fences().any(|g| g == f));
            assert_eq!(next.fences().count(), b.fences().count() + 1);
        }
    }

    #[proptest]
    fn fences_cannot_be_placed_twice(b: Board, f: Fence) {
        let mut next = b.clone();
        if next.place_fence(f).is_ok() {
            assert_eq!(next.place_fence(f), Err(IllegalFence::Obstructed(f)));
        }
    }

    #[proptest]
    fn fences_cannot_be_placed_along_the_edge(#[strategy(0..9u8)] i: u8) {
        let mut b = Board::default();
        let v = Fence(Orientation::Vertical, Coord::at(0, i));
        let h = Fence(Orientation::Horizontal, Coord::at(i, 0));
        assert_eq!(b.place_fence(v), Err(IllegalFence::Obstructed(v)));
        assert_eq!(b.place_fence(h), Err(IllegalFence::Obstructed(h)));
        assert_eq!(b, Board::default());
    }

    #[proptest]
    fn fences_block_regular_moves(d: Direction) {
        let mut b = Board::default();
        b.move_pawn(Player::One, Coord::at(4, 1))?;

        let whence = b.pawn(Player::One);
        let whither = whence.step(d).unwrap();
        let fence = match d {
            Direction::North => Fence(Orientation::Horizontal, whence),
            Direction::South => Fence(Orientation::Horizontal, whither),
            Direction::East => Fence(Orientation::Vertical, whither),
            Direction::West => Fence(Orientation::Vertical, whence),
        };

        assert!(b.is_legal_move(Player::One, whither));
        assert_eq!(b.place_fence(fence), Ok(()));
        assert!(!b.is_legal_move(Player::One, whither));
    }

    #[proptest]
    fn goal_row_is_reached_when_pawn_stands_on_it(b: Board, p: Player) {
        assert_eq!(b.is_in_goal_row(p), b.pawn(p).row() == p.goal_row());
    }

    #[test]
    fn fair_play_rejects_sealing_the_last_gap() {
        let mut b = Board::default();

        // A wall across the board leaving a single gap at the east edge.
        for col in 0..8 {
            b.place_fence(Fence(Orientation::Horizontal, Coord::at(col, 4)))
                .unwrap();
        }

        let gap = Fence(Orientation::Horizontal, Coord::at(8, 4));
        let before = b.clone();
        assert_eq!(b.place_fence(gap), Err(IllegalFence::BreaksFairPlay(gap)));
        assert_eq!(b, before);
        assert!(b.can_reach_goal(Player::One));
        assert!(b.can_reach_goal(Player::Two));
    }
}
