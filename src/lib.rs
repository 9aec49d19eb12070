//! # Block Deque
//!
//! A double-ended queue stored as a doubly linked chain of fixed-capacity
//! blocks, combining the pointer economy of an array-backed deque with the
//! stable, move-free growth of a linked list.
//!
//! This crate provides [`BlockDeque`], plus a removing cursor ([`CursorMut`])
//! that can delete elements mid-sequence from either direction while keeping
//! the storage compact.
//!
//! ## Key Features
//!
//! * **Blocked storage:** each list node carries `B` element slots, so the
//!   per-element overhead of next/prev links is divided by the block size.
//! * **Amortized O(1) ends:** pushes and pops at both ends are constant time;
//!   a new block is allocated only when an insertion crosses a block
//!   boundary.
//! * **No relocation:** growing never moves existing elements, unlike a ring
//!   buffer that reallocates; shrinking frees whole blocks eagerly.
//! * **Mid-sequence removal:** a mutating cursor walks the deque forward or
//!   backward and removes the element it last visited, compacting the
//!   sequence in place across block boundaries.
//! * **Handle-based chain:** blocks live in a slab arena and link to each
//!   other by handle, so the deque is the single owner of every block and no
//!   dangling link can exist.
//!
//! ## Block capacity (`B`)
//!
//! The capacity generic constant `B` is the number of element slots per
//! block. It defaults to 64 and must be at least 2 (enforced at compile
//! time). Small values exercise the boundary logic heavily and are mainly
//! useful in tests; larger values trade memory granularity for fewer
//! allocations.
//!
//! ## Examples
//!
//! ### Queue and stack ends
//!
//! ```rust
//! use block_deque::BlockDeque;
//!
//! let mut deque: BlockDeque<i32> = BlockDeque::new();
//!
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque.pop_front(), Some(0));
//! assert_eq!(deque.pop_back(), Some(2));
//! ```
//!
//! ### Removing mid-sequence through a cursor
//!
//! ```rust
//! use block_deque::BlockDeque;
//!
//! let mut deque: BlockDeque<i32, 4> = (0..10).collect();
//!
//! // Drop every odd value in one pass.
//! let mut cursor = deque.cursor_front_mut();
//! while let Some(odd) = cursor.next().map(|v| v % 2 == 1) {
//!     if odd {
//!         cursor.remove();
//!     }
//! }
//!
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
//! ```
//!
//! ### Occurrence removal and equality
//!
//! ```rust
//! use block_deque::BlockDeque;
//!
//! let mut a: BlockDeque<char, 8> = "abac".chars().collect();
//! a.remove_first_occurrence(&'a');
//!
//! let b: BlockDeque<char, 8> = "bac".chars().collect();
//! assert_eq!(a, b);
//! ```

// --- Module Declarations ---

pub mod deque;

// --- Re-exports ---

pub use deque::{BlockDeque, CursorMut, IntoIter, Iter};
