//! `proptest` strategies for slots (`--features proptest`).

use core::fmt::Debug;

use proptest::prelude::*;

use crate::SlotContainer;

/// Generates empty and occupied slots, drawing held values from `inner`.
pub fn slot_of<S>(inner: S) -> impl Strategy<Value = SlotContainer<S::Value>>
where
    S: Strategy,
    S::Value: Debug,
{
    proptest::option::of(inner).prop_map(SlotContainer::<S::Value>::from)
}
