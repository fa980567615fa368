//! Centralized unsafe accessors for inline value storage.
//!
//! ## Design rule
//! - `slot::*` must not perform ad-hoc `ptr::*` / `MaybeUninit` unsafe operations.
//! - Every transition between "uninitialized" and "live" goes through
//!   [`maybe_uninit::construct`] and [`maybe_uninit::destroy`].
//!
//! This module does **not** make operations safe by itself. It provides uniform
//! building blocks whose safety conditions are documented and can be audited in one place.

pub(crate) mod maybe_uninit;
