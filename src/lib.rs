//! # `inline-slot` - Inline Optional Value Storage
//!
//! A fixed-size slot that may or may not hold a constructed value, with explicit
//! in-place construction, destruction, copy/move transfer, and checked or
//! unchecked access. The payload never lives on the heap: its storage is part
//! of the container's own footprint.
//!
//! ## Safety Guarantees
//!
//! - **Single live value**: a slot holds at most one live `T`. Construction only
//!   ever targets empty storage; replacement destroys before it builds.
//! - **Exactly-once destruction**: the occupancy flag is cleared before the value's
//!   destructor runs, so a panicking destructor can never be re-entered.
//! - **Audited unsafe core**: all `MaybeUninit` handling lives in one private
//!   module; `SlotContainer` itself only calls into it.
//! - **Panic-safe construction**: if building a value panics, the slot is left empty.
//!
//! ## Access model
//!
//! | capability | checked | unchecked (`unsafe`) |
//! |---|---|---|
//! | shared borrow | [`SlotContainer::value`] | [`SlotContainer::borrow_unchecked`] |
//! | exclusive borrow | [`SlotContainer::value_mut`] | [`SlotContainer::borrow_mut_unchecked`] |
//! | move out (consuming) | [`SlotContainer::into_value`] | [`SlotContainer::take_unchecked`] |
//!
//! Checked accessors fail with [`EmptyAccessError`]. Unchecked accessors assume
//! occupancy and perform no test at all.
//!
//! ## Example
//!
//! ```rust
//! use inline_slot::{EmptyAccessError, SlotContainer};
//!
//! let mut a: SlotContainer<i32> = SlotContainer::new();
//! assert!(!a.is_occupied());
//!
//! a.emplace(42);
//! assert_eq!(a.value(), Ok(&42));
//!
//! let b = a.clone();
//! a.reset();
//! assert!(!a.is_occupied());
//! assert_eq!(b.value(), Ok(&42));
//! assert_eq!(a.value(), Err(EmptyAccessError));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace`-level events from the construct/destroy primitives.
//! - `proptest`: expose the `strategy` module for downstream property tests.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod error;
mod raw;
pub mod slot;
#[cfg(feature = "proptest")]
pub mod strategy;

pub use error::EmptyAccessError;
pub use slot::{MoveOut, SlotContainer};

// Compile-time assertions for the inline layout.
const _: () = {
    use core::mem;

    // Storage is inline: one `T` plus the flag, rounded to `T`'s alignment.
    assert!(mem::size_of::<SlotContainer<u64>>() <= mem::size_of::<u64>() + mem::align_of::<u64>());
    assert!(mem::size_of::<SlotContainer<[u8; 16]>>() == 17);
    assert!(mem::size_of::<SlotContainer<()>>() == 1);

    // Alignment follows the payload.
    assert!(mem::align_of::<SlotContainer<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<SlotContainer<u128>>() == mem::align_of::<u128>());

    // The error carries no payload.
    assert!(mem::size_of::<EmptyAccessError>() == 0);
};
