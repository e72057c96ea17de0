pub mod iter;

use core::{fmt, hash, marker::PhantomData, ptr::NonNull};

use iter::{IntoIter, Iter, IterMut};

use crate::{
    check,
    collections::{
        ContainerError,
        traits::{Collection, ListLike, collection::fmt_joined},
    },
};

struct Node<T> {
    data: T,
    /// Owning link. The successor is freed only through this link.
    next: Option<NonNull<Node<T>>>,
    /// Non-owning back-link.
    prev: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    #[inline]
    fn alloc(data: T) -> NonNull<Self> {
        let node = Box::new(Self {
            data,
            next: None,
            prev: None,
        });
        NonNull::from(Box::leak(node))
    }

    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`] and no longer be reachable from
    /// any list.
    #[inline]
    unsafe fn into_data(node: NonNull<Self>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.data
    }
}

/// Doubly-linked positional list.
///
/// Positions are 0-based. Interior access walks from the head, so `get`,
/// `insert` and `remove` are O(pos); both ends are O(1).
pub struct SequenceList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list owns its nodes exclusively, like `Box<Node<T>>` would.
unsafe impl<T: Send> Send for SequenceList<T> {}
// SAFETY: shared access never mutates nodes.
unsafe impl<T: Sync> Sync for SequenceList<T> {}

impl<T> SequenceList<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, item: impl Into<Option<T>>, pos: usize) -> Result<(), ContainerError> {
        let item: T = check::present(item)?;
        check::insert_position(pos, self.len)?;
        if pos == self.len {
            // SAFETY: the node is fresh and unlinked.
            unsafe { self.link_back(Node::alloc(item)) };
        } else {
            let next = self.node_at(pos)?;
            // SAFETY: the node is fresh and `next` belongs to this list.
            unsafe { self.link_before(Node::alloc(item), next) };
        }
        Ok(())
    }

    pub fn remove(&mut self, pos: usize) -> Result<T, ContainerError> {
        let node = self.node_at(pos)?;
        // SAFETY: `node_at` only returns nodes of this list.
        Ok(unsafe { self.unlink(node) })
    }

    pub fn get(&self, pos: usize) -> Result<&T, ContainerError> {
        let node = self.node_at(pos)?;
        // SAFETY: the node lives as long as the borrow of `self`.
        Ok(unsafe { &(*node.as_ptr()).data })
    }

    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T, ContainerError> {
        let node = self.node_at(pos)?;
        // SAFETY: the node lives as long as the borrow of `self`, which is unique.
        Ok(unsafe { &mut (*node.as_ptr()).data })
    }

    /// Returns `None` for an absent key without scanning.
    pub fn index_of<'a>(&self, item: impl Into<Option<&'a T>>) -> Option<usize>
    where
        T: PartialEq + 'a,
    {
        let item = item.into()?;
        self.iter().position(|x| x == item)
    }

    pub fn remove_item<'a>(&mut self, item: impl Into<Option<&'a T>>) -> Option<T>
    where
        T: PartialEq + 'a,
    {
        let pos = self.index_of(item)?;
        self.remove(pos).ok()
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    #[inline]
    pub fn push_front(&mut self, item: impl Into<Option<T>>) -> Result<(), ContainerError> {
        self.insert(item, 0)
    }

    #[inline]
    pub fn push_back(&mut self, item: impl Into<Option<T>>) -> Result<(), ContainerError> {
        self.insert(item, self.len)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` belongs to this list.
        Some(unsafe { self.unlink(head) })
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` belongs to this list.
        Some(unsafe { self.unlink(tail) })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the node lives as long as the borrow of `self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: the node lives as long as the borrow of `self`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(node) = current {
            // SAFETY: every node reachable from `head` came from `Node::alloc`
            // and is owned by exactly one forward link.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.tail, self.len)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head, self.tail, self.len)
    }

    fn node_at(&self, pos: usize) -> Result<NonNull<Node<T>>, ContainerError> {
        check::element_position(pos, self.len)?;
        let mut current = self.head;
        for _ in 0..pos {
            // SAFETY: `pos < len`, so every visited node belongs to this list.
            current = current.and_then(|node| unsafe { node.as_ref().next });
        }
        current.ok_or(ContainerError::PositionOutOfRange { pos, len: self.len })
    }

    /// # Safety
    ///
    /// `node` must be fresh from [`Node::alloc`].
    unsafe fn link_back(&mut self, mut node: NonNull<Node<T>>) {
        unsafe {
            node.as_mut().next = None;
            node.as_mut().prev = self.tail;
            match self.tail {
                Some(mut tail) => tail.as_mut().next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// # Safety
    ///
    /// `node` must be fresh from [`Node::alloc`] and `next` must belong to
    /// this list.
    unsafe fn link_before(&mut self, mut node: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
        unsafe {
            let prev = next.as_ref().prev;
            node.as_mut().prev = prev;
            node.as_mut().next = Some(next);
            next.as_mut().prev = Some(node);
            match prev {
                Some(mut prev) => prev.as_mut().next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.len += 1;
    }

    /// # Safety
    ///
    /// `node` must belong to this list.
    unsafe fn unlink(&mut self, mut node: NonNull<Node<T>>) -> T {
        unsafe {
            let (prev, next) = {
                let node = node.as_mut();
                (node.prev.take(), node.next.take())
            };
            match prev {
                Some(mut prev) => prev.as_mut().next = next,
                None => self.head = next,
            }
            match next {
                Some(mut next) => next.as_mut().prev = prev,
                None => self.tail = prev,
            }
            self.len -= 1;
            Node::into_data(node)
        }
    }

    #[cfg(test)]
    fn assert_links(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);
        let mut count = 0;
        let mut prev: Option<NonNull<Node<T>>> = None;
        let mut current = self.head;
        while let Some(node) = current {
            let node_ref = unsafe { node.as_ref() };
            assert_eq!(node_ref.prev, prev);
            prev = Some(node);
            current = node_ref.next;
            count += 1;
        }
        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len);
    }
}

impl<T> Default for SequenceList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SequenceList<T> {
    #[inline]
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SequenceList<T> {
    #[inline]
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SequenceList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SequenceList<T> {}

impl<T: hash::Hash> hash::Hash for SequenceList<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<T> Extend<T> for SequenceList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            // SAFETY: the node is fresh and unlinked.
            unsafe { self.link_back(Node::alloc(item)) };
        }
    }
}

impl<T> FromIterator<T> for SequenceList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for SequenceList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SequenceList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SequenceList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Head-to-tail, separated by `", "`.
impl<T: fmt::Display> fmt::Display for SequenceList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, self.iter())
    }
}

impl<T> Collection for SequenceList<T> {
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

impl<T> ListLike<T> for SequenceList<T> {
    #[inline]
    fn insert(&mut self, item: impl Into<Option<T>>, pos: usize) -> Result<(), ContainerError> {
        self.insert(item, pos)
    }

    #[inline]
    fn remove(&mut self, pos: usize) -> Result<T, ContainerError> {
        self.remove(pos)
    }

    #[inline]
    fn get(&self, pos: usize) -> Result<&T, ContainerError> {
        self.get(pos)
    }

    #[inline]
    fn get_mut(&mut self, pos: usize) -> Result<&mut T, ContainerError> {
        self.get_mut(pos)
    }

    #[inline]
    fn index_of<'a>(&self, item: impl Into<Option<&'a T>>) -> Option<usize>
    where
        T: PartialEq + 'a,
    {
        self.index_of(item)
    }

    #[inline]
    fn remove_item<'a>(&mut self, item: impl Into<Option<&'a T>>) -> Option<T>
    where
        T: PartialEq + 'a,
    {
        self.remove_item(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> SequenceList<&'static str> {
        SequenceList::from_iter(["a", "b", "c"])
    }

    #[test]
    fn t_insert_positions() {
        let mut list = SequenceList::<i32>::new();
        list.insert(2, 0).unwrap();
        list.insert(0, 0).unwrap();
        list.insert(3, 2).unwrap();
        list.insert(1, 1).unwrap();
        list.assert_links();
        assert_eq!(list.to_string(), "0, 1, 2, 3");
        for pos in 0..4 {
            assert_eq!(list.get(pos), Ok(&(pos as i32)));
        }
    }

    #[test]
    fn t_insert_then_get() {
        for pos in 0..=3 {
            let mut list = abc();
            list.insert("x", pos).unwrap();
            list.assert_links();
            assert_eq!(list.len(), 4);
            assert_eq!(list.get(pos), Ok(&"x"));
        }
    }

    #[test]
    fn t_insert_remove_restores() {
        for pos in 0..=3 {
            let mut list = abc();
            let before = list.to_string();
            list.insert("x", pos).unwrap();
            assert_eq!(list.remove(pos), Ok("x"));
            list.assert_links();
            assert_eq!(list.len(), 3);
            assert_eq!(list.to_string(), before);
        }
    }

    #[test]
    fn t_insert_rejects() {
        let mut list = abc();
        assert_eq!(list.insert(None::<&str>, 0), Err(ContainerError::InvalidArgument));
        assert_eq!(
            list.insert("x", 4),
            Err(ContainerError::PositionOutOfRange { pos: 4, len: 3 })
        );
        // absent item is reported before the bad position
        assert_eq!(list.insert(None::<&str>, 9), Err(ContainerError::InvalidArgument));
        assert_eq!(list, abc());
    }

    #[test]
    fn t_out_of_range() {
        let mut list = abc();
        let out_of_range = |pos| ContainerError::PositionOutOfRange { pos, len: 3 };
        assert_eq!(list.get(usize::MAX), Err(out_of_range(usize::MAX)));
        assert_eq!(list.get(3), Err(out_of_range(3)));
        assert_eq!(list.get_mut(3), Err(out_of_range(3)));
        assert_eq!(list.remove(3), Err(out_of_range(3)));
        assert_eq!(list.len(), 3);

        let mut empty = SequenceList::<i32>::new();
        assert_eq!(
            empty.remove(0),
            Err(ContainerError::PositionOutOfRange { pos: 0, len: 0 })
        );
    }

    #[test]
    fn t_remove_ends_and_middle() {
        let mut list: SequenceList<i32> = (0..5).collect();
        assert_eq!(list.remove(0), Ok(0));
        assert_eq!(list.remove(3), Ok(4));
        assert_eq!(list.remove(1), Ok(2));
        list.assert_links();
        assert_eq!(list.to_string(), "1, 3");
        assert_eq!(list.remove(1), Ok(3));
        assert_eq!(list.remove(0), Ok(1));
        list.assert_links();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }

    #[test]
    fn t_index_of() {
        let list: SequenceList<i32> = [5, 7, 5, 9].into_iter().collect();
        assert_eq!(list.index_of(&5), Some(0));
        assert_eq!(list.index_of(&9), Some(3));
        assert_eq!(list.index_of(&1), None);
        assert_eq!(list.index_of(None::<&i32>), None);
        assert_eq!(SequenceList::<i32>::new().index_of(&5), None);
        assert!(list.contains(&7));
    }

    #[test]
    fn t_remove_item_is_soft() {
        let mut list: SequenceList<i32> = [5, 7, 5].into_iter().collect();
        assert_eq!(list.remove_item(&5), Some(5));
        assert_eq!(list.to_string(), "7, 5");
        assert_eq!(list.remove_item(&1), None);
        assert_eq!(list.remove_item(None::<&i32>), None);
        // a bad position is a hard error, a missing value is not
        assert!(list.remove(5).is_err());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn t_ends() {
        let mut list = SequenceList::<i32>::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        list.push_back(2).unwrap();
        list.push_front(1).unwrap();
        list.push_back(3).unwrap();
        assert_eq!(list.push_back(None::<i32>), Err(ContainerError::InvalidArgument));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        list.assert_links();
        assert_eq!(list.front(), list.back());
    }

    #[test]
    fn t_get_mut_and_iter_mut() {
        let mut list: SequenceList<i32> = (1..=3).collect();
        *list.get_mut(1).unwrap() = 20;
        list.iter_mut().for_each(|x| *x += 1);
        assert_eq!(list.to_string(), "2, 21, 4");
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [4, 21, 2]);
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [4, 21, 2]);
    }

    #[test]
    fn t_equality() {
        let a = abc();
        let mut b = abc();
        assert_eq!(a, b);
        b.remove(2).unwrap();
        assert_ne!(a, b);
        b.insert("z", 2).unwrap();
        assert_ne!(a, b);
        assert_eq!(SequenceList::<i32>::new(), SequenceList::new());
    }

    #[test]
    fn t_clear_and_reuse() {
        let mut list = abc();
        list.clear();
        list.assert_links();
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "");
        list.insert("q", 0).unwrap();
        assert_eq!(list.to_string(), "q");
    }

    #[test]
    fn t_clone_and_debug() {
        let list = abc();
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_eq!(format!("{copy:?}"), r#"["a", "b", "c"]"#);
    }

    #[test]
    fn t_long_chain_drop() {
        let list: SequenceList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
