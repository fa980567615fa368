//! `SlotContainer`: an inline "value or nothing" cell with explicit lifecycle control.
//!
//! The payload lives in a `MaybeUninit<T>` that is part of the container's own
//! footprint; no heap allocation is ever made for it. An occupancy flag records
//! whether that storage currently holds a live `T`.
//!
//! Every transition between empty and occupied is funneled through two private
//! primitives, `construct_value` and `destroy_value`. Assignment, emplacement,
//! reset and drop are all expressed in terms of those two plus the flag.

mod access;
mod assign;
mod transfer;

pub use transfer::MoveOut;

use core::{
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
};

use crate::raw::access::maybe_uninit as mu;

/// An inline slot that may or may not hold a constructed `T`.
///
/// The storage is part of the slot itself: `align_of::<SlotContainer<T>>()` equals
/// `align_of::<T>()`, and the size is at most `size_of::<T>() + align_of::<T>()`.
///
/// # Example
///
/// ```rust
/// use inline_slot::SlotContainer;
///
/// let mut a: SlotContainer<i32> = SlotContainer::new();
/// assert!(!a.is_occupied());
///
/// a.emplace(42);
/// assert_eq!(a.value(), Ok(&42));
///
/// let b = a.clone();
/// a.reset();
/// assert!(a.value().is_err());
/// assert_eq!(b.value(), Ok(&42));
/// ```
pub struct SlotContainer<T> {
    storage: MaybeUninit<T>,
    occupied: bool,
}

impl<T> SlotContainer<T> {
    /// Creates an empty slot. The storage is left uninitialized.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    /// Creates an occupied slot by moving `value` into the storage.
    #[inline]
    pub fn with_value(value: T) -> Self {
        let mut slot = Self::new();
        slot.construct_value(value);
        slot
    }

    /// Creates an occupied slot holding a clone of `value`.
    #[inline]
    pub fn with_clone(value: &T) -> Self
    where
        T: Clone,
    {
        Self::with_value(value.clone())
    }

    /// Returns `true` if the slot currently holds a live value.
    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Destroys the held value, if any, leaving the slot empty.
    ///
    /// Calling this on an empty slot is a no-op.
    #[inline]
    pub fn reset(&mut self) {
        self.destroy_value();
    }

    /// Destroys the held value (if any), then constructs a new one from `args`.
    ///
    /// Multi-argument construction goes through a `From<(A, B, ..)>` impl on `T`.
    /// If the conversion panics the slot is left empty.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        A: Into<T>,
    {
        self.emplace_with(|| args.into())
    }

    /// Destroys the held value (if any), then constructs a new one with `init`.
    ///
    /// The old value is gone before `init` runs, so at most one `T` is ever live.
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.destroy_value();
        self.construct_value(init())
    }

    /// Returns the held value as an `Option` of a shared reference.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        if self.occupied {
            // SAFETY: `occupied` implies a live value.
            Some(unsafe { mu::assume_init_ref(&self.storage) })
        } else {
            None
        }
    }

    /// Returns the held value as an `Option` of an exclusive reference.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            // SAFETY: `occupied` implies a live value; `&mut self` is exclusive.
            Some(unsafe { mu::assume_init_mut(&mut self.storage) })
        } else {
            None
        }
    }

    /// Moves the held value out, leaving the slot empty.
    #[inline]
    pub fn take_value(&mut self) -> Option<T> {
        if !self.occupied {
            return None;
        }
        self.occupied = false;
        // SAFETY: the value was live and the flag is already cleared, so it
        // will not be dropped again.
        Some(unsafe { mu::read_out(&self.storage) })
    }

    /// Moves `value` into the slot and returns the previously held value, if any.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.take_value();
        self.construct_value(value);
        old
    }

    /// Constructs `value` into the storage and marks the slot occupied.
    ///
    /// Callers guarantee the slot is empty.
    #[inline(always)]
    fn construct_value(&mut self, value: T) -> &mut T {
        debug_assert!(!self.occupied, "constructing into an occupied slot");
        // SAFETY: the slot is empty, so nothing is overwritten.
        let live = unsafe { mu::construct(&mut self.storage, value) };
        self.occupied = true;
        live
    }

    /// Destroys the live value, if any, and marks the slot empty.
    ///
    /// The flag is cleared first so a panicking destructor cannot cause a second drop.
    #[inline(always)]
    fn destroy_value(&mut self) {
        if self.occupied {
            self.occupied = false;
            // SAFETY: the value was live; the cleared flag prevents another drop.
            unsafe { mu::destroy(&mut self.storage) }
        }
    }
}

impl<T> Drop for SlotContainer<T> {
    fn drop(&mut self) {
        self.destroy_value();
    }
}

impl<T> Default for SlotContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for SlotContainer<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T> From<Option<T>> for SlotContainer<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::with_value(value),
            None => Self::new(),
        }
    }
}

impl<T> From<SlotContainer<T>> for Option<T> {
    fn from(mut slot: SlotContainer<T>) -> Self {
        slot.take_value()
    }
}

impl<T: Clone> Clone for SlotContainer<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::with_clone(value),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("Occupied").field(value).finish(),
            None => f.write_str("Empty"),
        }
    }
}

impl<T: PartialEq> PartialEq for SlotContainer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl<T: Eq> Eq for SlotContainer<T> {}

impl<T: Hash> Hash for SlotContainer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}
