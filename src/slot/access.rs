//! Checked and unchecked access to the held value.
//!
//! Three capabilities are kept apart: shared borrow, exclusive borrow, and
//! move-extraction by consuming the slot. Each exists in a checked form that
//! fails with [`EmptyAccessError`] and an unchecked form whose precondition is
//! the caller's responsibility.

use super::SlotContainer;
use crate::raw::access::maybe_uninit as mu;
use crate::EmptyAccessError;

impl<T> SlotContainer<T> {
    /// Returns a shared reference to the held value.
    ///
    /// # Errors
    /// Returns [`EmptyAccessError`] if the slot is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, EmptyAccessError> {
        self.as_option().ok_or(EmptyAccessError)
    }

    /// Returns an exclusive reference to the held value.
    ///
    /// # Errors
    /// Returns [`EmptyAccessError`] if the slot is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, EmptyAccessError> {
        self.as_option_mut().ok_or(EmptyAccessError)
    }

    /// Consumes the slot and moves the held value out.
    ///
    /// # Errors
    /// Returns [`EmptyAccessError`] if the slot is empty.
    #[inline]
    pub fn into_value(mut self) -> Result<T, EmptyAccessError> {
        self.take_value().ok_or(EmptyAccessError)
    }

    /// Returns a shared reference to the held value without checking occupancy.
    ///
    /// # Safety
    /// The slot must be occupied. Calling this on an empty slot is undefined behavior.
    #[inline(always)]
    pub unsafe fn borrow_unchecked(&self) -> &T {
        // SAFETY: caller guarantees occupancy.
        unsafe { mu::assume_init_ref(&self.storage) }
    }

    /// Returns an exclusive reference to the held value without checking occupancy.
    ///
    /// # Safety
    /// The slot must be occupied. Calling this on an empty slot is undefined behavior.
    #[inline(always)]
    pub unsafe fn borrow_mut_unchecked(&mut self) -> &mut T {
        // SAFETY: caller guarantees occupancy.
        unsafe { mu::assume_init_mut(&mut self.storage) }
    }

    /// Consumes the slot and moves the held value out without checking occupancy.
    ///
    /// # Safety
    /// The slot must be occupied. Calling this on an empty slot is undefined behavior.
    #[inline(always)]
    pub unsafe fn take_unchecked(mut self) -> T {
        self.occupied = false;
        // SAFETY: caller guarantees occupancy; the cleared flag keeps `Drop` away.
        unsafe { mu::read_out(&self.storage) }
    }

    /// Returns a raw pointer to the storage.
    ///
    /// The pointer is always valid and aligned for `T`, but only points to a
    /// live value while the slot is occupied.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Returns a raw mutable pointer to the storage.
    ///
    /// The pointer is always valid and aligned for `T`, but only points to a
    /// live value while the slot is occupied.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }
}
