//! This crate provides a lazily-advancing cursor that visits the elements of a
//! rectangular grid in spiral order: left to right across the top row, down the
//! right column, right to left across the bottom row, up the left column, with
//! the traversal boundary shrinking inward after each completed side.
//! It uses the `smallvec` crate for eagerly collected output and `insta` for
//! snapshot testing.

/// Grid access trait implemented by row-major grid sources.
///
/// # Example
/// ```
/// use spirator::{GridLike, SpiralTraversal};
///
/// let grid = vec![vec![1, 2], vec![3, 4]];
/// assert_eq!(grid.as_slice().width(), 2);
/// assert_eq!(grid.as_slice().height(), 2);
///
/// let order: Vec<i32> = SpiralTraversal::new(grid.as_slice()).collect();
/// assert_eq!(order, vec![1, 2, 4, 3]);
/// ```
pub mod grid_like;
pub use grid_like::GridLike;

use smallvec::SmallVec;
use thiserror::Error;
use tracing::*;

// Determined through benchmarking typical use cases
const DEFAULT_SMALLVEC_SIZE: usize = 32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpiralError {
    #[error("Traversal exhausted: no elements remain")]
    Exhausted,

    #[error("Ragged grid: row {row} has width {actual}, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A type alias for SmallVec with an optimized stack-allocated buffer size.
pub type SpiralVec<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// Direction of travel along the current edge of the traversal window.
///
/// Turns always follow the cycle right → down → left → up → right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Returns the unit step `(dx, dy)` for this direction.
    ///
    /// # Example
    /// ```
    /// use spirator::Direction;
    ///
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// ```
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }
}

/// The half-open region `[left, right) × [top, bottom)` of grid cells not yet
/// fully consumed by a traversal.
///
/// Bounds are signed so they compare cleanly against a cursor that may sit one
/// cell outside the window once its edge is finished. The window only ever
/// shrinks: each turn moves exactly one bound inward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Window {
    pub left: isize,
    pub right: isize,
    pub top: isize,
    pub bottom: isize,
}

impl Window {
    /// Creates a window covering a full `width` × `height` grid.
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            left: 0,
            right: width as isize,
            top: 0,
            bottom: height as isize,
        }
    }

    /// Returns true if `(x, y)` lies inside the window.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        (x >= self.left && x < self.right) && (y >= self.top && y < self.bottom)
    }

    /// Returns true when no cells remain in the window.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Returns the number of cells still covered by the window.
    pub fn area(&self) -> usize {
        let width = (self.right - self.left).max(0) as usize;
        let height = (self.bottom - self.top).max(0) as usize;
        width * height
    }
}

/// A single-use cursor producing the elements of a rectangular grid in spiral
/// order.
///
/// The traversal starts in the top-left corner moving right, and turns inward
/// every time the next step would cross the current window bound; each turn
/// shrinks the window by the row or column just consumed. The grid itself is
/// never copied or mutated, so one grid may back any number of independent
/// traversals.
///
/// # Example
/// ```
/// use spirator::SpiralTraversal;
///
/// let grid = vec![
///     vec![1, 2, 3],
///     vec![4, 5, 6],
///     vec![7, 8, 9],
/// ];
/// let order: Vec<i32> = SpiralTraversal::new(grid.as_slice()).collect();
/// assert_eq!(order, vec![1, 2, 3, 6, 9, 8, 7, 4, 5]);
/// ```
#[derive(Debug)]
pub struct SpiralTraversal<'a, G: GridLike + ?Sized> {
    grid: &'a G,
    window: Window,
    direction: Direction,
    x: isize,
    y: isize,
}

impl<'a, G: GridLike + ?Sized> SpiralTraversal<'a, G> {
    /// Creates a traversal over the whole grid.
    ///
    /// The grid must be rectangular: every row the same width. Jagged input is
    /// not detected here and leaves the traversal order unspecified; use
    /// [`SpiralTraversal::try_new`] to validate up front.
    ///
    /// # Example
    /// ```
    /// use spirator::SpiralTraversal;
    ///
    /// let grid = vec![vec![1, 2], vec![4, 3]];
    /// let mut traversal = SpiralTraversal::new(grid.as_slice());
    /// assert_eq!(traversal.collect_remaining().to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn new(grid: &'a G) -> Self {
        let width = grid.width();
        let height = grid.height();
        trace!("Starting spiral traversal over a {}x{} grid", width, height);

        Self {
            grid,
            window: Window::full(width, height),
            direction: Direction::Right,
            x: 0,
            y: 0,
        }
    }

    /// Creates a traversal after checking that the grid is rectangular.
    ///
    /// # Errors
    /// Returns [`SpiralError::RaggedGrid`] naming the first row whose width
    /// differs from row 0. The grid is never padded or truncated to fit.
    ///
    /// # Example
    /// ```
    /// use spirator::{SpiralError, SpiralTraversal};
    ///
    /// let ragged = vec![vec![1, 2, 3], vec![4, 5]];
    /// let result = SpiralTraversal::try_new(ragged.as_slice());
    /// assert_eq!(
    ///     result.err(),
    ///     Some(SpiralError::RaggedGrid { row: 1, expected: 3, actual: 2 })
    /// );
    /// ```
    pub fn try_new(grid: &'a G) -> Result<Self, SpiralError> {
        let expected = grid.width();
        for row in 0..grid.height() {
            let actual = grid.row_width(row);
            if actual != expected {
                error!(
                    "Ragged grid: row {} has width {}, expected {}",
                    row, actual, expected
                );
                return Err(SpiralError::RaggedGrid {
                    row,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self::new(grid))
    }

    /// Returns true if at least one element remains.
    ///
    /// Pure query: calling it any number of times never changes the traversal
    /// state. A grid with zero rows or zero-width rows has nothing to yield
    /// and reports false from the start.
    ///
    /// # Example
    /// ```
    /// use spirator::SpiralTraversal;
    ///
    /// let grid: Vec<Vec<i32>> = Vec::new();
    /// let traversal = SpiralTraversal::new(grid.as_slice());
    /// assert!(!traversal.has_next());
    /// ```
    pub fn has_next(&self) -> bool {
        self.window.contains(self.x, self.y)
    }

    /// Produces the next element in spiral order.
    ///
    /// Reads the element under the cursor, then turns if the step ahead would
    /// cross the current window bound (shrinking the window by the consumed
    /// row or column before moving), and finally steps in the resulting
    /// direction.
    ///
    /// # Errors
    /// Returns [`SpiralError::Exhausted`] when [`SpiralTraversal::has_next`]
    /// is false. This is the only error this method can report.
    ///
    /// # Example
    /// ```
    /// use spirator::{SpiralError, SpiralTraversal};
    ///
    /// let grid = vec![vec![1, 2, 3]];
    /// let mut traversal = SpiralTraversal::new(grid.as_slice());
    /// assert_eq!(traversal.try_next(), Ok(1));
    /// assert_eq!(traversal.try_next(), Ok(2));
    /// assert_eq!(traversal.try_next(), Ok(3));
    /// assert_eq!(traversal.try_next(), Err(SpiralError::Exhausted));
    /// ```
    pub fn try_next(&mut self) -> Result<G::Elem, SpiralError> {
        if !self.has_next() {
            return Err(SpiralError::Exhausted);
        }

        // Read the element before the cursor state changes
        let element = self.grid.get(self.x as usize, self.y as usize);

        // The candidate step ahead, judged against the pre-turn bounds
        let (dx, dy) = self.direction.delta();
        let next_x = self.x + dx;
        let next_y = self.y + dy;

        if next_x >= self.window.right {
            // Crossed the right bound: the top row is consumed
            trace!("Top row consumed at y={}, turning down", self.y);
            self.window.top += 1;
            self.direction = Direction::Down;
        } else if next_y >= self.window.bottom {
            // Crossed the bottom bound: the right column is consumed
            trace!("Right column consumed at x={}, turning left", self.x);
            self.window.right -= 1;
            self.direction = Direction::Left;
        } else if next_x < self.window.left {
            // Crossed the left bound: the bottom row is consumed
            trace!("Bottom row consumed at y={}, turning up", self.y);
            self.window.bottom -= 1;
            self.direction = Direction::Up;
        } else if next_y < self.window.top {
            // Crossed the top bound: the left column is consumed
            trace!("Left column consumed at x={}, turning right", self.x);
            self.window.left += 1;
            self.direction = Direction::Right;
        }

        // Step in the (possibly just updated) direction
        let (dx, dy) = self.direction.delta();
        self.x += dx;
        self.y += dy;

        Ok(element)
    }

    /// Drains all remaining elements into an ordered sequence.
    ///
    /// A thin loop over the incremental cursor, so a partially drained
    /// traversal collects exactly the elements a full traversal would still
    /// have produced. Returns an empty sequence once exhausted.
    ///
    /// # Example
    /// ```
    /// use spirator::SpiralTraversal;
    ///
    /// let grid = vec![vec![1, 2], vec![4, 3]];
    /// let mut traversal = SpiralTraversal::new(grid.as_slice());
    /// assert_eq!(traversal.try_next(), Ok(1));
    /// assert_eq!(traversal.collect_remaining().to_vec(), vec![2, 3, 4]);
    /// ```
    pub fn collect_remaining(&mut self) -> SpiralVec<G::Elem> {
        self.by_ref().collect()
    }

    /// Returns the current traversal window.
    pub fn window(&self) -> Window {
        self.window
    }

    /// Returns the current direction of travel.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the current cursor position `(x, y)`.
    ///
    /// The position may sit one cell outside the window once the traversal is
    /// exhausted.
    pub fn position(&self) -> (isize, isize) {
        (self.x, self.y)
    }
}

impl<G: GridLike + ?Sized> Iterator for SpiralTraversal<'_, G> {
    type Item = G::Elem;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The window still covers the partially consumed edge, so its area is
        // an upper bound on the remaining elements
        if self.has_next() {
            (1, Some(self.window.area()))
        } else {
            (0, Some(0))
        }
    }
}
