//! # cursorkit
//!
//! Container-independent sequence algorithms over cursors and boundary
//! markers.
//!
//! Every algorithm is written once against the cursor traits in [`cursor`]
//! and picks its strategy from the cursor's capability tier at compile time:
//!
//! 1. **Sorting**: introsort for random access, stable adaptive merge sort
//!    with a scratch buffer for anything forward, quickselect
//! 2. **Heaps**: sift up/down, make/push/pop/sort, partial sort and copy
//! 3. **Search**: partition point by bisection or galloping, bounds, equal
//!    range, partition and stable partition
//! 4. **Rotation**: swap walk, single-element shifts, GCD cycles, reverse
//! 5. **Merging**: two-range merge, set operations, in-place merge
//! 6. **Min/max and permutations**, **shuffle and sample**
//!
//! Cursors never hold a borrow: the sequence is passed alongside them, so a
//! cursor is just a position.
//!
//! ## Usage Example
//!
//! ```
//! use cursorkit::cursor::{span, Pos};
//! use cursorkit::relation::Less;
//! use cursorkit::{lower_bound, rotate, sort};
//!
//! let mut v = vec![5, 3, 3, 1, 4];
//! let (first, last) = span(&v[..]);
//! sort(&mut v[..], first, last, Less);
//! assert_eq!(v, [1, 3, 3, 4, 5]);
//!
//! assert_eq!(lower_bound(&v[..], Pos(0), Pos(5), &3, Less), Pos(1));
//!
//! rotate(&mut v[..], Pos(0), Pos(2), Pos(5));
//! assert_eq!(v, [3, 4, 5, 1, 3]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod adapters; // Counted and common-type ranges
pub mod config; // Strategy thresholds
pub mod cursor; // Cursor tiers, boundaries, concrete sequences
pub mod heap; // Binary heap primitives
pub mod merge; // Merge, set operations, in-place merge
pub mod minmax; // Min/max and permutations
pub mod random; // Shuffle and sample
pub mod relation; // Strict weak orders and projections
pub mod results; // Result tuples
pub mod rotate; // Rotation and reversal
pub mod scratch; // Temporary storage for buffered merges
pub mod search; // Partition, bounds, binary search
pub mod sort; // Sorting engine

// Re-exports for convenience
pub use adapters::{common_range, counted, Common, Counted, CountedEnd};
pub use config::{ConfigError, Tuning, TuningBuilder};
pub use cursor::{
    BidirectionalCursor, Boundary, Distance, ForwardCursor, InputCursor, OutputCursor, Permutable,
    RandomAccessCursor, Tier,
};
pub use heap::{
    is_heap, is_heap_until, make_heap, partial_sort_copy, pop_heap, push_heap, sort_heap,
};
pub use merge::{
    includes, inplace_merge, merge, set_difference, set_intersection, set_symmetric_difference,
    set_union,
};
pub use minmax::{
    is_permutation, max, max_element, max_of, min, min_element, min_of, minmax, minmax_element,
    minmax_of, next_permutation, prev_permutation,
};
pub use random::{sample, shuffle};
pub use relation::{by_key, projected, Flip, Greater, Less, Relation};
pub use results::{InInOut, InOut, MinMax, Subrange};
pub use rotate::{reverse, rotate, rotate_copy};
pub use search::{
    binary_search, equal_range, is_partitioned, lower_bound, partition, partition_copy,
    partition_point, stable_partition, upper_bound,
};
pub use sort::{
    insertion_sort, is_sorted, is_sorted_until, nth_element, partial_sort, sort, stable_sort,
};
