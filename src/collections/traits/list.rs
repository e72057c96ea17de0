use crate::collections::{ContainerError, traits::Collection};

/// Positional container addressed by 0-based positions.
pub trait ListLike<T>: Collection {
    /// Fails with [`ContainerError::InvalidArgument`] for an absent item and
    /// [`ContainerError::PositionOutOfRange`] if `pos > len`.
    fn insert(&mut self, item: impl Into<Option<T>>, pos: usize) -> Result<(), ContainerError>;

    /// Fails with [`ContainerError::PositionOutOfRange`] if `pos >= len`.
    fn remove(&mut self, pos: usize) -> Result<T, ContainerError>;

    fn get(&self, pos: usize) -> Result<&T, ContainerError>;

    fn get_mut(&mut self, pos: usize) -> Result<&mut T, ContainerError>;

    /// Position of the first element equal to `item`.
    fn index_of<'a>(&self, item: impl Into<Option<&'a T>>) -> Option<usize>
    where
        T: PartialEq + 'a;

    /// Removes the first element equal to `item`. A missing element is not
    /// an error, unlike [`remove`](Self::remove) with a bad position.
    fn remove_item<'a>(&mut self, item: impl Into<Option<&'a T>>) -> Option<T>
    where
        T: PartialEq + 'a,
    {
        let pos = self.index_of(item)?;
        self.remove(pos).ok()
    }
}
