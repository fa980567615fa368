//! Unsafe, centralized operations on `MaybeUninit<T>` slots.
//!
//! A [`SlotContainer`](crate::SlotContainer) stores its payload as a
//! `MaybeUninit<T>` next to an occupancy flag. These helpers are the single
//! place to audit:
//! - construction (`ptr::write`)
//! - destruction (`drop_in_place`)
//! - move-extraction (`ptr::read`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! The slot holds a live `T` *exactly when* its owner's occupancy flag is set.
//! Callers flip the flag immediately after [`construct`] returns and
//! immediately before calling [`destroy`] or [`read_out`].

use core::{mem::MaybeUninit, ptr};

/// Constructs `value` into an uninitialized slot and returns a reference to it.
///
/// # Safety
/// - `slot` must not currently hold a live `T`; a live value would be leaked.
#[inline(always)]
pub(crate) unsafe fn construct<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "inline_slot", ty = core::any::type_name::<T>(), "slot.construct");
    slot.write(value)
}

/// Drops the live value held by `slot`, leaving its bytes uninitialized.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn destroy<T>(slot: &mut MaybeUninit<T>) {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "inline_slot", ty = core::any::type_name::<T>(), "slot.destroy");
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}

/// Bitwise-moves the live value out of `slot`.
///
/// # Safety
/// - `slot` must hold a live `T`.
/// - The slot must afterwards be treated as uninitialized, or the value is dropped twice.
#[inline(always)]
pub(crate) unsafe fn read_out<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization + `ptr::read` contract.
    unsafe { slot.assume_init_read() }
}

/// Interprets a live slot as `&T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets a live slot as `&mut T`.
///
/// # Safety
/// - `slot` must hold a live `T`.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized and exclusive.
    unsafe { slot.assume_init_mut() }
}
