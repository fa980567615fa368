//! Non-consuming transfers out of a borrowed slot.
//!
//! Moving the value out of a slot that the caller only borrows leaves that slot
//! occupied by a *moved-from* value. Occupancy belongs to the slot; what a
//! moved-from value looks like belongs to `T`, expressed through [`MoveOut`].

use super::SlotContainer;

/// Transfers a value out of a place, leaving a valid moved-from value behind.
///
/// The moved-from state is chosen by the implementing type. Scalars copy and
/// leave the source untouched; owning containers leave an empty value behind
/// (the contract of [`core::mem::take`]). Types outside this crate implement
/// it themselves.
///
/// ```rust
/// use inline_slot::{MoveOut, SlotContainer};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Handle(u32);
///
/// impl MoveOut for Handle {
///     fn move_out(&mut self) -> Self {
///         core::mem::replace(self, Handle(u32::MAX))
///     }
/// }
///
/// let mut source = SlotContainer::with_value(Handle(7));
/// let dest = SlotContainer::moved_from(&mut source);
/// assert_eq!(dest.value(), Ok(&Handle(7)));
/// assert_eq!(source.value(), Ok(&Handle(u32::MAX)));
/// ```
pub trait MoveOut: Sized {
    /// Moves the current value out of `self`, leaving the moved-from state.
    fn move_out(&mut self) -> Self;
}

/// Scalars: a move is a copy, the source keeps its value.
macro_rules! impl_move_out_copy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MoveOut for $ty {
                #[inline(always)]
                fn move_out(&mut self) -> Self {
                    *self
                }
            }
        )*
    };
}

/// Owning containers: the source is left empty.
macro_rules! impl_move_out_take {
    ($(<$($gen:ident $(: $bound:path)?),*> $ty:ty),* $(,)?) => {
        $(
            impl<$($gen $(: $bound)?),*> MoveOut for $ty {
                #[inline]
                fn move_out(&mut self) -> Self {
                    core::mem::take(self)
                }
            }
        )*
    };
}

impl_move_out_copy!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl<T: ?Sized> MoveOut for &T {
    #[inline(always)]
    fn move_out(&mut self) -> Self {
        *self
    }
}

impl_move_out_take!(
    <> String,
    <> std::ffi::OsString,
    <> std::path::PathBuf,
    <T> Option<T>,
    <T> Vec<T>,
    <T> std::collections::VecDeque<T>,
    <T> std::collections::LinkedList<T>,
    <T: Ord> std::collections::BinaryHeap<T>,
    <T> std::collections::BTreeSet<T>,
    <K, V> std::collections::BTreeMap<K, V>,
    <T, S: Default> std::collections::HashSet<T, S>,
    <K, V, S: Default> std::collections::HashMap<K, V, S>,
    <T: Default> Box<T>,
);

impl<T: MoveOut> SlotContainer<T> {
    /// Creates a slot holding the value moved out of `source`.
    ///
    /// If `source` is occupied it stays occupied, now holding a moved-from value.
    /// If it is empty the new slot is empty too.
    pub fn moved_from(source: &mut Self) -> Self {
        match source.as_option_mut() {
            Some(value) => Self::with_value(value.move_out()),
            None => Self::new(),
        }
    }

    /// Moves the state of `source` into this slot without consuming `source`.
    ///
    /// Follows the same occupancy table as [`assign_from`](Self::assign_from);
    /// an occupied `source` is left holding a moved-from value.
    pub fn assign_moved_from(&mut self, source: &mut Self) {
        match source.as_option_mut() {
            Some(value) => {
                self.assign(value.move_out());
            }
            None => self.destroy_value(),
        }
    }
}
