use crate::collections::{ContainerError, traits::Collection};

pub trait QueueLike<T>: Collection {
    fn enqueue(&mut self, item: impl Into<Option<T>>) -> Result<(), ContainerError>;

    fn dequeue(&mut self) -> Option<T>;

    fn peek(&self) -> Option<&T>;

    fn peek_mut(&mut self) -> Option<&mut T>;
}
