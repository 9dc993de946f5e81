//! The shared board and its atomic step protocol.

use crate::metrics::{BoardMetrics, MetricCounters};
use indexmap::{IndexMap, IndexSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slither_core::{BoardError, Position, Snake};
use std::sync::atomic::Ordering;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Mice seeded by [`Board::with_seed`].
pub const INITIAL_MICE: usize = 6;
/// Obstacles seeded by [`Board::with_seed`].
pub const INITIAL_OBSTACLES: usize = 4;
/// Turbo tiles seeded by [`Board::with_seed`].
pub const INITIAL_TURBO: usize = 2;

/// Retry budget multiplier for random-empty-cell sampling: up to
/// `3 × width × height` attempts before the origin fallback.
const SPAWN_ATTEMPTS_PER_CELL: u32 = 3;

/// Outcome of one atomic step of one snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The snake advanced one cell (also returned for dead snakes,
    /// whose step is a no-op rather than an error).
    Moved,
    /// The snake advanced onto a mouse and grew; a replacement mouse
    /// and a new obstacle spawned elsewhere.
    AteMouse,
    /// The snake advanced onto a turbo tile; a replacement spawned
    /// elsewhere. No growth.
    AteTurbo,
    /// The target cell holds an obstacle; the body did not move.
    /// Reacting (e.g. turning away) is the caller's job.
    HitObstacle,
}

/// Item collections guarded by the board's reader/writer lock.
#[derive(Debug, Default)]
struct Items {
    mice: IndexSet<Position>,
    obstacles: IndexSet<Position>,
    turbo: IndexSet<Position>,
    /// Symmetric pairing: `a → b` is always accompanied by `b → a`.
    teleports: IndexMap<Position, Position>,
}

impl Items {
    fn occupied(&self, p: &Position) -> bool {
        self.mice.contains(p)
            || self.obstacles.contains(p)
            || self.turbo.contains(p)
            || self.teleports.contains_key(p)
    }
}

/// The shared toroidal world: fixed dimensions, consumable and
/// hazardous tiles, and teleport pairs.
///
/// One exclusive-writer / shared-reader discipline covers every
/// mutation: [`step`](Board::step) and the item mutators take the
/// write side; the `*_snapshot` accessors take the read side and hand
/// back independent copies. Workers share the board via `Arc`; snakes
/// are never stored inside it.
#[derive(Debug)]
pub struct Board {
    width: u32,
    height: u32,
    items: RwLock<Items>,
    metrics: MetricCounters,
}

impl Board {
    /// Create a board with no items.
    ///
    /// Fails fast on a zero dimension; this (and out-of-bounds item
    /// placement) is the only error class that aborts setup.
    pub fn empty(width: u32, height: u32) -> Result<Self, BoardError> {
        if width == 0 {
            return Err(BoardError::ZeroDimension { axis: "width" });
        }
        if height == 0 {
            return Err(BoardError::ZeroDimension { axis: "height" });
        }
        Ok(Self {
            width,
            height,
            items: RwLock::new(Items::default()),
            metrics: MetricCounters::default(),
        })
    }

    /// Create a board seeded with the standard item counts
    /// ([`INITIAL_MICE`], [`INITIAL_OBSTACLES`], [`INITIAL_TURBO`])
    /// at random empty cells drawn from a ChaCha8 stream.
    ///
    /// The same `(width, height, seed)` triple always produces the
    /// same initial layout.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self, BoardError> {
        let board = Self::empty(width, height)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        {
            let mut items = board.write_items();
            for _ in 0..INITIAL_MICE {
                let p = board.random_empty(&items, &mut rng);
                items.mice.insert(p);
            }
            for _ in 0..INITIAL_OBSTACLES {
                let p = board.random_empty(&items, &mut rng);
                items.obstacles.insert(p);
            }
            for _ in 0..INITIAL_TURBO {
                let p = board.random_empty(&items, &mut rng);
                items.turbo.insert(p);
            }
        }
        Ok(board)
    }

    /// Create a seeded board with an entropy-derived layout.
    pub fn new(width: u32, height: u32) -> Result<Self, BoardError> {
        Self::with_seed(width, height, rand::thread_rng().gen())
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `p` lies inside `[0, width) × [0, height)`.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.x < self.width as i32 && p.y >= 0 && p.y < self.height as i32
    }

    // ── Atomic step ─────────────────────────────────────────────

    /// Move `snake` one cell along its current heading.
    ///
    /// The whole protocol runs under one exclusive section, so no other
    /// step or snapshot ever observes a partial result:
    ///
    /// 1. A dead snake is a no-op ([`MoveOutcome::Moved`]).
    /// 2. The target cell is the wrapped head-plus-heading.
    /// 3. An obstacle there rejects the move without advancing.
    /// 4. A teleport source there redirects to its paired destination;
    ///    item pickup happens at the destination.
    /// 5. The snake advances, growing only on a mouse.
    /// 6. A consumed mouse respawns one obstacle and one mouse at
    ///    random empty cells; a consumed turbo respawns one turbo.
    ///
    /// The RNG belongs to the calling worker; the board holds no
    /// random state of its own, keeping the exclusive section bounded
    /// and free of shared RNG contention.
    pub fn step(&self, snake: &Snake, rng: &mut impl Rng) -> MoveOutcome {
        let mut items = self.write_items();
        self.metrics.steps.fetch_add(1, Ordering::Relaxed);

        if !snake.is_alive() {
            return MoveOutcome::Moved;
        }

        let head = snake.head();
        let mut next = head
            .translate(snake.direction())
            .wrap(self.width, self.height);

        if items.obstacles.contains(&next) {
            self.metrics.obstacle_hits.fetch_add(1, Ordering::Relaxed);
            return MoveOutcome::HitObstacle;
        }

        if let Some(&dest) = items.teleports.get(&next) {
            next = dest;
            self.metrics.teleports_taken.fetch_add(1, Ordering::Relaxed);
        }

        let ate_mouse = items.mice.swap_remove(&next);
        let ate_turbo = items.turbo.swap_remove(&next);

        // Lock order is always board → snake; renderers take the snake
        // mutex alone, so this nesting cannot cycle.
        snake.advance(next, ate_mouse);

        if ate_mouse {
            let obstacle = self.random_empty(&items, rng);
            items.obstacles.insert(obstacle);
            let mouse = self.random_empty(&items, rng);
            items.mice.insert(mouse);
            self.metrics.mice_eaten.fetch_add(1, Ordering::Relaxed);
            MoveOutcome::AteMouse
        } else if ate_turbo {
            let replacement = self.random_empty(&items, rng);
            items.turbo.insert(replacement);
            self.metrics.turbo_eaten.fetch_add(1, Ordering::Relaxed);
            MoveOutcome::AteTurbo
        } else {
            MoveOutcome::Moved
        }
    }

    // ── Item mutators ───────────────────────────────────────────

    /// Place an obstacle at `p`.
    pub fn add_obstacle(&self, p: Position) -> Result<(), BoardError> {
        self.check_bounds(p)?;
        self.write_items().obstacles.insert(p);
        Ok(())
    }

    /// Place a turbo tile at `p`.
    pub fn add_turbo(&self, p: Position) -> Result<(), BoardError> {
        self.check_bounds(p)?;
        self.write_items().turbo.insert(p);
        Ok(())
    }

    /// Place a mouse at `p`.
    pub fn add_mouse_at(&self, p: Position) -> Result<(), BoardError> {
        self.check_bounds(p)?;
        self.write_items().mice.insert(p);
        Ok(())
    }

    /// Place a mouse at a random empty cell.
    pub fn add_mouse(&self, rng: &mut impl Rng) {
        let mut items = self.write_items();
        let p = self.random_empty(&items, rng);
        items.mice.insert(p);
    }

    /// Register a mutual teleport pair between `a` and `b`.
    ///
    /// The mapping is kept symmetric: stepping onto either cell lands
    /// the snake on the other.
    pub fn add_teleport_pair(&self, a: Position, b: Position) -> Result<(), BoardError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        let mut items = self.write_items();
        items.teleports.insert(a, b);
        items.teleports.insert(b, a);
        Ok(())
    }

    // ── Snapshots ───────────────────────────────────────────────

    /// Copy of the mouse positions, taken under the shared lock.
    pub fn mice_snapshot(&self) -> Vec<Position> {
        self.read_items().mice.iter().copied().collect()
    }

    /// Copy of the obstacle positions, taken under the shared lock.
    pub fn obstacles_snapshot(&self) -> Vec<Position> {
        self.read_items().obstacles.iter().copied().collect()
    }

    /// Copy of the turbo positions, taken under the shared lock.
    pub fn turbo_snapshot(&self) -> Vec<Position> {
        self.read_items().turbo.iter().copied().collect()
    }

    /// Copy of the teleport mapping, one entry per direction.
    pub fn teleports_snapshot(&self) -> Vec<(Position, Position)> {
        self.read_items()
            .teleports
            .iter()
            .map(|(&a, &b)| (a, b))
            .collect()
    }

    /// Owned sample of the cumulative counters. Does not take the
    /// item lock.
    pub fn metrics(&self) -> BoardMetrics {
        self.metrics.sample()
    }

    // ── Internals ───────────────────────────────────────────────

    /// Uniformly sample an unoccupied cell, with a bounded retry
    /// budget of `3 × width × height` attempts.
    ///
    /// A cell is unoccupied when it holds no mouse, obstacle, turbo
    /// tile, or teleport endpoint; snakes are not tracked here. On a
    /// near-full board the budget can run out, in which case the
    /// origin cell is returned and `spawn_fallbacks` is incremented —
    /// an accepted degenerate outcome, never a failure.
    fn random_empty(&self, items: &Items, rng: &mut impl Rng) -> Position {
        let attempts = SPAWN_ATTEMPTS_PER_CELL
            .saturating_mul(self.width)
            .saturating_mul(self.height);
        for _ in 0..attempts {
            let p = Position::new(
                rng.gen_range(0..self.width) as i32,
                rng.gen_range(0..self.height) as i32,
            );
            if !items.occupied(&p) {
                debug_assert!(
                    !items.mice.contains(&p)
                        && !items.obstacles.contains(&p)
                        && !items.turbo.contains(&p),
                    "freshly sampled spawn cell already holds an item"
                );
                return p;
            }
        }
        self.metrics.spawn_fallbacks.fetch_add(1, Ordering::Relaxed);
        Position::ORIGIN
    }

    fn check_bounds(&self, p: Position) -> Result<(), BoardError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                position: p,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Poisoning recovery mirrors the snake mutex: the step sequence
    /// performs no panicking operations between item removal and
    /// respawn, so a recovered guard always sees intact invariants.
    fn write_items(&self) -> RwLockWriteGuard<'_, Items> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_items(&self) -> RwLockReadGuard<'_, Items> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }
}
