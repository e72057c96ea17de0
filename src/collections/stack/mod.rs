pub mod iter;

use core::{fmt, hash};

use iter::{IntoIter, Iter, IterMut};

use crate::{
    check,
    collections::{
        ContainerError,
        traits::{Collection, StackLike, collection::fmt_joined},
    },
};

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// LIFO stack over a singly-linked chain. `head` is the top.
pub struct LinkedStack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), ContainerError> {
        let item: T = check::present(item)?;
        self.push_node(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { data, next } = *node;
            self.head = next;
            self.len -= 1;
            data
        })
    }

    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.data)
    }

    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }

    /// Top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// Top to bottom.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut(), self.len)
    }

    #[inline]
    fn push_node(&mut self, data: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data, next }));
        self.len += 1;
    }
}

impl<T> Default for LinkedStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    #[inline]
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        let items: Vec<&T> = self.iter().collect();
        items.into_iter().rev().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedStack<T> {}

impl<T: hash::Hash> hash::Hash for LinkedStack<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|x| x.hash(state));
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_node(item));
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

/// Pops from the top.
impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedStack<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Bottom-to-top, separated by `", "`.
impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&T> = self.iter().collect();
        fmt_joined(f, items.into_iter().rev())
    }
}

impl<T> Collection for LinkedStack<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> StackLike<T> for LinkedStack<T> {
    #[inline]
    fn push(&mut self, item: impl Into<Option<T>>) -> Result<(), ContainerError> {
        self.push(item)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.top()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.top_mut()
    }
}
