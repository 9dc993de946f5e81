//! The snake entity: a thread-safe ordered body with a heading.

use crate::{Direction, Position, SnakeId};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Body length cap a fresh snake starts with. Eating a mouse raises
/// the cap by one, permanently.
pub const INITIAL_MAX_LENGTH: usize = 5;

/// Body state guarded by the snake's mutex.
struct SnakeState {
    /// Front element is the head. Never empty.
    body: VecDeque<Position>,
    /// Heading applied by the next advance.
    direction: Direction,
    /// Current length cap. Monotonically non-decreasing.
    max_length: usize,
}

/// An independently controlled body occupying a sequence of grid cells.
///
/// A snake is written to by exactly one worker (its runner) and read
/// concurrently by a renderer via [`snapshot`](Snake::snapshot). All
/// body-touching operations serialize on one internal mutex; distinct
/// snakes are fully independent of each other.
///
/// The starting position is caller-supplied and must already be
/// in-bounds for the board the snake will run on.
pub struct Snake {
    id: SnakeId,
    alive: AtomicBool,
    state: Mutex<SnakeState>,
}

impl Snake {
    /// Create a snake with a single-cell body at `start` and the given
    /// initial heading.
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(INITIAL_MAX_LENGTH + 1);
        body.push_front(start);
        Self {
            id: SnakeId::next(),
            alive: AtomicBool::new(true),
            state: Mutex::new(SnakeState {
                body,
                direction,
                max_length: INITIAL_MAX_LENGTH,
            }),
        }
    }

    /// This snake's unique identifier.
    pub fn id(&self) -> SnakeId {
        self.id
    }

    /// Whether the snake is still running. Dead snakes stay on the
    /// board as inert bodies; they are never destroyed.
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Mark the snake dead. Subsequent advances are no-ops.
    pub fn kill(&self) {
        self.alive.store(false, Ordering::Release);
    }

    /// The heading the next advance will use.
    pub fn direction(&self) -> Direction {
        self.state().direction
    }

    /// Set the heading used by the *next* advance. Reversal is
    /// permitted; there is no no-180 rule.
    pub fn turn(&self, direction: Direction) {
        self.state().direction = direction;
    }

    /// The current head cell.
    pub fn head(&self) -> Position {
        let state = self.state();
        // The body is seeded with one cell and trimming never drops
        // below max_length >= 1, so the front always exists.
        *state.body.front().expect("snake body is never empty")
    }

    /// Current body length.
    pub fn length(&self) -> usize {
        self.state().body.len()
    }

    /// Current length cap.
    pub fn max_length(&self) -> usize {
        self.state().max_length
    }

    /// Independent copy of the body, head first. Safe to iterate while
    /// the runner keeps advancing the live snake.
    pub fn snapshot(&self) -> Vec<Position> {
        self.state().body.iter().copied().collect()
    }

    /// Advance the head to `new_head`; no-op when dead.
    ///
    /// With `grow` the length cap rises by exactly one before the tail
    /// is trimmed, so eating a mouse nets one extra segment. Without it
    /// the tail keeps the body within the existing cap.
    pub fn advance(&self, new_head: Position, grow: bool) {
        if !self.is_alive() {
            return;
        }
        let mut state = self.state();
        state.body.push_front(new_head);
        if grow {
            state.max_length += 1;
        }
        while state.body.len() > state.max_length {
            state.body.pop_back();
        }
    }

    /// Lock the body state, recovering from poisoning.
    ///
    /// A poisoned mutex only means some thread panicked while holding
    /// the guard; every operation above leaves the deque structurally
    /// valid at each intermediate point, so the data is safe to reuse.
    fn state(&self) -> MutexGuard<'_, SnakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Snake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state();
        f.debug_struct("Snake")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .field("head", &state.body.front())
            .field("length", &state.body.len())
            .field("max_length", &state.max_length)
            .field("direction", &state.direction)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_snake_has_single_cell_body() {
        let s = Snake::new(Position::new(2, 3), Direction::Right);
        assert!(s.is_alive());
        assert_eq!(s.head(), Position::new(2, 3));
        assert_eq!(s.length(), 1);
        assert_eq!(s.max_length(), INITIAL_MAX_LENGTH);
        assert_eq!(s.snapshot(), vec![Position::new(2, 3)]);
    }

    #[test]
    fn advance_prepends_head() {
        let s = Snake::new(Position::new(0, 0), Direction::Right);
        s.advance(Position::new(1, 0), false);
        s.advance(Position::new(2, 0), false);
        assert_eq!(s.head(), Position::new(2, 0));
        assert_eq!(
            s.snapshot(),
            vec![
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0)
            ]
        );
    }

    #[test]
    fn advance_trims_tail_at_max_length() {
        let s = Snake::new(Position::new(0, 0), Direction::Right);
        for x in 1..10 {
            s.advance(Position::new(x, 0), false);
        }
        assert_eq!(s.length(), INITIAL_MAX_LENGTH);
        assert_eq!(s.head(), Position::new(9, 0));
        // Tail is the oldest surviving cell.
        assert_eq!(s.snapshot().last(), Some(&Position::new(5, 0)));
    }

    #[test]
    fn grow_raises_cap_by_exactly_one() {
        let s = Snake::new(Position::new(0, 0), Direction::Right);
        s.advance(Position::new(1, 0), true);
        assert_eq!(s.max_length(), INITIAL_MAX_LENGTH + 1);
        s.advance(Position::new(2, 0), true);
        assert_eq!(s.max_length(), INITIAL_MAX_LENGTH + 2);
    }

    #[test]
    fn growth_is_monotonic() {
        let s = Snake::new(Position::new(0, 0), Direction::Right);
        s.advance(Position::new(1, 0), true);
        let cap = s.max_length();
        for x in 2..30 {
            s.advance(Position::new(x, 0), false);
            assert_eq!(s.max_length(), cap);
        }
    }

    #[test]
    fn turn_takes_effect_for_next_advance() {
        let s = Snake::new(Position::new(0, 0), Direction::Right);
        assert_eq!(s.direction(), Direction::Right);
        s.turn(Direction::Down);
        assert_eq!(s.direction(), Direction::Down);
        // Immediate reversal is allowed.
        s.turn(Direction::Up);
        assert_eq!(s.direction(), Direction::Up);
    }

    #[test]
    fn dead_snake_ignores_advance() {
        let s = Snake::new(Position::new(4, 4), Direction::Left);
        s.kill();
        assert!(!s.is_alive());
        s.advance(Position::new(3, 4), true);
        assert_eq!(s.head(), Position::new(4, 4));
        assert_eq!(s.length(), 1);
        assert_eq!(s.max_length(), INITIAL_MAX_LENGTH);
    }

    #[test]
    fn snapshot_is_independent_of_later_advances() {
        let s = Snake::new(Position::new(0, 0), Direction::Right);
        let before = s.snapshot();
        s.advance(Position::new(1, 0), false);
        assert_eq!(before, vec![Position::new(0, 0)]);
        assert_ne!(before, s.snapshot());
    }

    proptest! {
        #[test]
        fn body_never_exceeds_cap(grows in proptest::collection::vec(any::<bool>(), 1..200)) {
            let s = Snake::new(Position::new(0, 0), Direction::Right);
            let mut x = 0;
            for grow in grows {
                x += 1;
                let cap_before = s.max_length();
                s.advance(Position::new(x, 0), grow);
                prop_assert!(s.length() <= s.max_length());
                let expected = if grow { cap_before + 1 } else { cap_before };
                prop_assert_eq!(s.max_length(), expected);
                prop_assert_eq!(s.head(), Position::new(x, 0));
            }
        }
    }
}
