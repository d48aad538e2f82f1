//! The `coseq` crate provides lazy, composable sequence combinators in the
//! style of functional programming languages: `map`, `filter`, `drop_while`,
//! `take_while`, `scan`, `unfold`, `zip_with`, and `unzip_with`.
//!
//! A *sequence* is an ordered, possibly infinite stream of values that is
//! produced on demand. Combinators wrap their upstream sequences and expose
//! the same [`Sequence`] trait, so pipelines compose to any depth without
//! materializing intermediate containers. Nothing runs until the pipeline is
//! traversed, and each traversal runs the whole pipeline again from the start.
//!
//! ```rust
//! use coseq::Sequence;
//! use coseq::from_iter;
//! use coseq::unfold;
//!
//! // Running totals of the even squares below 100.
//! let mut totals = unfold(|n: u32| Some((n * n, n + 1)), 1)
//!     .take_while(|&sq| sq < 100)
//!     .filter(|sq| sq % 2 == 0)
//!     .scan(0, |acc, sq| acc + sq);
//! assert_eq!(totals.collect::<Vec<_>>(), [0, 4, 20, 56, 120]);
//!
//! // Combinators are also available as free functions taking the
//! // function first.
//! let mut doubled = coseq::map(|x| x * 2, from_iter([1, 2, 3, 4]));
//! assert_eq!(doubled.collect::<Vec<_>>(), [2, 4, 6, 8]);
//! ```
//!
//! # Push and pull
//!
//! The usual way to consume a sequence is to *push* its elements into a
//! consumer with [`Sequence::produce()`] or one of the terminal methods built
//! on it (`collect()`, `fold()`, `any()`, ...). The consumer decides after each
//! element whether to continue, and stopping early is cheap: nothing after the
//! element it stopped on is computed.
//!
//! Some consumers need to *pull* elements one at a time instead, most notably
//! [`zip_with()`], which walks two sequences at their own pace. For this, every
//! sequence can start a paused traversal as a [`Coro`]: a stackless state
//! machine that is resumed by value and either yields an element along with
//! its next state, or returns. A [`Cursor`] keeps that state machine between
//! pulls, which gives a demand-driven view of any sequence without threads or
//! native generators.
//!
//! ```rust
//! use coseq::Sequence;
//! use coseq::from_iter;
//!
//! let mut words = from_iter(["alpha", "beta", "gamma"]).map(str::len);
//! let mut cursor = words.cursor();
//! assert_eq!(cursor.pull(), Ok(Some(5)));
//! assert_eq!(cursor.pull(), Ok(Some(4)));
//! // Releasing drops the paused traversal; "gamma" is never measured.
//! cursor.release().unwrap();
//! ```
//!
//! # Resource cleanup
//!
//! Abandoning a traversal, whether by stopping a push, releasing a cursor, or
//! unwinding out of a user function, drops every paused state machine the
//! traversal owns. A cursor that is not released explicitly is released when
//! it is dropped, so cleanup runs on every exit path.
//!
//! # Errors
//!
//! User functions are never caught: a panic unwinds through the traversal,
//! and fallible work can report errors through
//! [`Sequence::try_for_each()`]. The crate's own [`Error`] covers cursor
//! misuse and reductions over empty sequences.
//!
//! # Features
//!
//! * `std` (default): enables `std` support in the logging and error
//!   dependencies. Without it the crate is `no_std` and only needs `alloc`.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod coro;
mod cursor;
mod drop_while;
mod error;
mod filter;
mod map;
mod scan;
mod sequence;
mod source;
mod suspend;
mod take_while;
mod unfold;
mod unzip_with;
mod zip_with;

pub use coro::Coro;
pub use cursor::Cursor;
pub use cursor::pull;
pub use drop_while::DropWhile;
pub use drop_while::drop_while;
pub use error::Error;
pub use error::Result;
pub use filter::Filter;
pub use filter::filter;
pub use map::Map;
pub use map::map;
pub use scan::Scan;
pub use scan::scan;
pub use sequence::Sequence;
pub use source::FromCoro;
pub use source::FromIter;
pub use source::from_coro;
pub use source::from_iter;
pub use suspend::Suspend;
pub use take_while::TakeWhile;
pub use take_while::take_while;
pub use unfold::Unfold;
pub use unfold::unfold;
pub use unzip_with::UnzipWith;
pub use unzip_with::unzip_with;
pub use zip_with::ZipWith;
pub use zip_with::zip_with;

/// `Yield` and `Return` are imported into the crate root namespace because
/// they are used so often when implementing [`Coro`] by hand.
pub use Suspend::{Return, Yield};
