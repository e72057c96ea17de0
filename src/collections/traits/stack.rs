use crate::collections::{ContainerError, traits::Collection};

pub trait StackLike<T>: Collection {
    fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), ContainerError>;

    fn pop(&mut self) -> Option<T>;

    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;
}
