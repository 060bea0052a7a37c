use crate::error::CoreError;
use std::ops::Deref;

/// A borrowed slice that is statically known to hold at least one element.
///
/// Averaging queries take this instead of a plain slice, so the "collection must not be
/// empty" precondition is checked once at the call site rather than inside the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonEmpty<'a, T> {
    items: &'a [T],
}

impl<'a, T> NonEmpty<'a, T> {
    /// Returns `None` when `items` is empty.
    pub fn new(items: &'a [T]) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    pub fn head(&self) -> &'a T {
        &self.items[0]
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

impl<T> Deref for NonEmpty<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.items
    }
}

impl<'a, T> TryFrom<&'a [T]> for NonEmpty<'a, T> {
    type Error = CoreError;

    fn try_from(items: &'a [T]) -> Result<Self, Self::Error> {
        Self::new(items).ok_or(CoreError::EmptyCollection(std::any::type_name::<T>()))
    }
}

impl<'a, T> TryFrom<&'a Vec<T>> for NonEmpty<'a, T> {
    type Error = CoreError;

    fn try_from(items: &'a Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from(items.as_slice())
    }
}
