/// The error returned by checked access to a [`SlotContainer`](crate::SlotContainer)
/// that holds no value.
///
/// Raised only by [`value`](crate::SlotContainer::value),
/// [`value_mut`](crate::SlotContainer::value_mut) and
/// [`into_value`](crate::SlotContainer::into_value). A failed access never
/// mutates the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyAccessError;

impl core::fmt::Display for EmptyAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad optional access: the slot holds no value")
    }
}

impl std::error::Error for EmptyAccessError {}
