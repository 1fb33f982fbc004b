//! A minimal, fixed-capacity set of enum values written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! [`EnumSet`] is the main struct in this library. It stores the members of a
//! set of enum values as the bits of a single unsigned integer, which makes it
//! a good fit for flags fields, option sets and permission sets that are
//! embedded by value in other data structures. Its [features](#features) are
//! listed below.
//!
//! # Examples
//! ```
//! use light_enumset::{EnumSet, enum_index};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Permission {
//!     Read,
//!     Write,
//!     Execute,
//! }
//!
//! enum_index!(Permission { Read, Write, Execute });
//!
//! let mut perms = EnumSet::<Permission>::new();
//! assert!(perms.is_empty());
//! perms += Permission::Execute;
//! perms += Permission::Read;
//! assert!(perms.contains(Permission::Read));
//! assert!(!perms.contains(Permission::Write));
//! assert_eq!(perms.len(), 2);
//!
//! // members come out in index order, not insertion order
//! let mut iter = perms.iter();
//! assert_eq!(iter.next(), Some(Permission::Read));
//! assert_eq!(iter.next(), Some(Permission::Execute));
//! assert_eq!(iter.next(), None);
//!
//! assert_eq!(perms.serialize(), 0b101);
//! ```
//!
//! # Use Cases
//!
//! - Replacing `HashSet`/`BTreeSet` of small enums where allocation, hashing
//!   or sorting is too heavy
//! - Compact flag fields in configuration records or wire messages
//! - Embedded development
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - No heap allocations, the whole set is one integer
//! - Choice of backing integer: `EnumSet<T, U>` with `U` one of `u8`, `u16`,
//!   `u32` (default), `u64`, `u128`
//! - Compile-time check that the enum fits into the backing integer
//! - [`enum_index!`] to hook up fieldless enums
//! - Set algebra as methods and operators:
//!   - `+`, `|` (union), `-` (difference), `&` (intersection),
//!     `^` (symmetric difference), `!` (complement)
//!   - `+=`, `|=`, `-=`, `&=`, `^=`
//!   - right-hand side may be a single value or another set
//! - Iteration in ascending index order, borrow-checked against modification
//! - Raw integer representation via `serialize` / `deserialize`
//! - Optional `serde` support (cargo feature `serde`), serialized as that
//!   integer

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod backing;
mod enum_set;
mod index;
#[cfg(feature = "serde")]
mod serde;

pub use backing::Backing;
pub use enum_set::{EnumSet, Iter};
pub use index::EnumIndex;
