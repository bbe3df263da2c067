use std::cmp::Ordering;
use test_strategy::Arbitrary;

/// One of the four sides of a [`Cell`][`crate::quoridor::Cell`].
///
/// North points toward row 0, west toward column 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions.
    pub const ALL: [Self; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The unit displacement `(columns, rows)` in this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The direction of a displacement `(columns, rows)`.
    ///
    /// Only the sign of the column displacement is considered if it is not zero,
    /// otherwise only the sign of the row displacement.
    pub fn toward(dx: i8, dy: i8) -> Option<Self> {
        match (dx.cmp(&0), dy.cmp(&0)) {
            (Ordering::Less, _) => Some(Direction::West),
            (Ordering::Greater, _) => Some(Direction::East),
            (Ordering::Equal, Ordering::Less) => Some(Direction::North),
            (Ordering::Equal, Ordering::Greater) => Some(Direction::South),
            (Ordering::Equal, Ordering::Equal) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn opposite_is_an_involution(d: Direction) {
        assert_eq!(d.opposite().opposite(), d);
        assert_ne!(d.opposite(), d);
    }

    #[proptest]
    fn opposite_direction_has_negated_delta(d: Direction) {
        let (dx, dy) = d.delta();
        assert_eq!(d.opposite().delta(), (-dx, -dy));
    }

    #[proptest]
    fn toward_recovers_direction_from_scaled_delta(d: Direction, #[strategy(1..=8i8)] n: i8) {
        let (dx, dy) = d.delta();
        assert_eq!(Direction::toward(dx * n, dy * n), Some(d));
    }

    #[proptest]
    fn toward_prefers_columns_over_rows(#[filter(#dx != 0)] dx: i8, dy: i8) {
        assert_eq!(Direction::toward(dx, dy), Direction::toward(dx, 0));
    }

    #[test]
    fn toward_is_undefined_for_null_displacement() {
        assert_eq!(Direction::toward(0, 0), None);
    }

    #[test]
    fn all_lists_every_direction_in_discriminant_order() {
        assert!(Direction::ALL
            .iter()
            .enumerate()
            .all(|(i, &d)| d as usize == i));
    }
}
