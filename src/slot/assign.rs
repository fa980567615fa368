//! Assignment into a slot, driven by the occupancy of destination and source.
//!
//! | destination | source   | action                               |
//! |-------------|----------|--------------------------------------|
//! | empty       | value    | construct in place                   |
//! | occupied    | value    | assign into the live value           |
//! | empty       | occupied | construct in place from source value |
//! | empty       | empty    | no-op                                |
//! | occupied    | occupied | assign source value into live value  |
//! | occupied    | empty    | destroy, slot becomes empty          |

use super::SlotContainer;
use crate::raw::access::maybe_uninit as mu;

impl<T> SlotContainer<T> {
    /// Moves `value` into the slot.
    ///
    /// An occupied slot move-assigns into its live value; an empty one
    /// constructs in place.
    pub fn assign(&mut self, value: T) -> &mut T {
        if self.occupied {
            // SAFETY: `occupied` implies a live value.
            let live = unsafe { mu::assume_init_mut(&mut self.storage) };
            *live = value;
            live
        } else {
            self.construct_value(value)
        }
    }

    /// Copies `value` into the slot.
    ///
    /// An occupied slot reuses its live value through [`Clone::clone_from`].
    pub fn assign_clone(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if self.occupied {
            // SAFETY: `occupied` implies a live value.
            let live = unsafe { mu::assume_init_mut(&mut self.storage) };
            live.clone_from(value);
            live
        } else {
            self.construct_value(value.clone())
        }
    }

    /// Copies the state of `source` into this slot.
    pub fn assign_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        match source.as_option() {
            Some(value) => {
                self.assign_clone(value);
            }
            None => self.destroy_value(),
        }
    }

    /// Moves the state of `source` into this slot, consuming it.
    pub fn assign_slot(&mut self, mut source: Self) {
        match source.take_value() {
            Some(value) => {
                self.assign(value);
            }
            None => self.destroy_value(),
        }
    }
}
