pub mod iter;

use core::{cmp, fmt, hash, iter::repeat_with, ops::Range};

use iter::{IntoIter, Iter, IterMut};

use crate::{
    check,
    collections::{
        ContainerError,
        traits::{Collection, QueueLike, collection::fmt_joined},
    },
};

/// Capacity of a queue created with [`CircularQueue::new`].
pub const INITIAL_CAPACITY: usize = 10;

/// One live slot plus the guard slot.
const MIN_CAPACITY: usize = 2;

/// FIFO queue over a growable ring buffer.
///
/// One slot is always left free: the buffer doubles as soon as an enqueue
/// would leave `len + 1 == capacity`, so `len` alone tells the empty and full
/// states apart. Capacity never shrinks.
pub struct CircularQueue<T> {
    buf: Box<[Option<T>]>,
    /// Next slot to dequeue.
    front: usize,
    /// Next free slot.
    back: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// `capacity` is raised to at least 2 so the guard slot exists.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: alloc_buf(cmp::max(capacity, MIN_CAPACITY)),
            front: 0,
            back: 0,
            len: 0,
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

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn enqueue(&mut self, item: impl Into<Option<T>>) -> Result<(), ContainerError> {
        let item: T = check::present(item)?;
        self.push(item);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.buf[self.front].take();
        self.front = wrap_index(self.front + 1, self.capacity());
        self.len -= 1;
        item
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.front].as_ref()
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.front].as_mut()
    }

    /// Element at `index` in FIFO order, `0` being the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buf[self.to_physical_index(index)].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let index = self.to_physical_index(index);
        self.buf[index].as_mut()
    }

    /// Drops every element and keeps the current capacity.
    pub fn clear(&mut self) {
        let (a, b) = self.slot_ranges();
        self.buf[a].iter_mut().for_each(|slot| *slot = None);
        self.buf[b].iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.back = 0;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let (a, b) = self.slot_ranges();
        Iter::new(self.buf[a].iter(), self.buf[b].iter())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (a, b) = self.slot_ranges();
        // `b` always lies before `a` in the buffer.
        let (wrapped, tail) = self.buf.split_at_mut(a.start);
        IterMut::new(tail[..a.len()].iter_mut(), wrapped[b].iter_mut())
    }

    fn push(&mut self, item: T) {
        if self.len + 1 == self.capacity() {
            self.grow();
        }
        self.buf[self.back] = Some(item);
        self.back = wrap_index(self.back + 1, self.capacity());
        self.len += 1;
        debug_assert!(self.len < self.capacity());
        debug_assert_eq!(
            self.len,
            (self.back + self.capacity() - self.front) % self.capacity()
        );
    }

    /// Doubles the buffer and moves the elements, in FIFO order, to
    /// `0..len` of the new one.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let mut buf = alloc_buf(old_capacity * 2);
        for (logical, slot) in buf.iter_mut().take(self.len).enumerate() {
            let physical = wrap_index(self.front + logical, old_capacity);
            *slot = self.buf[physical].take();
        }
        self.buf = buf;
        self.front = 0;
        self.back = self.len;
    }

    #[inline]
    fn to_physical_index(&self, logical_index: usize) -> usize {
        wrap_index(self.front + logical_index, self.capacity())
    }

    /// Physical ranges holding the elements in FIFO order. The second range
    /// is empty unless the elements wrap around the end of the buffer.
    fn slot_ranges(&self) -> (Range<usize>, Range<usize>) {
        let capacity = self.capacity();
        if self.front + self.len <= capacity {
            (self.front..self.front + self.len, 0..0)
        } else {
            (self.front..capacity, 0..self.back)
        }
    }
}

impl<T> Default for CircularQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for CircularQueue<T> {
    fn clone(&self) -> Self {
        let mut queue = Self::with_capacity(self.capacity());
        queue.extend(self.iter().cloned());
        queue
    }
}

/// Compares logical contents; the physical layout of either buffer is
/// irrelevant.
impl<T: PartialEq> PartialEq for CircularQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularQueue<T> {}

impl<T: hash::Hash> hash::Hash for CircularQueue<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<T> Extend<T> for CircularQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<T> FromIterator<T> for CircularQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for CircularQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back, separated by `", "`.
impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, self.iter())
    }
}

impl<T> Collection for CircularQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity()
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

impl<T> QueueLike<T> for CircularQueue<T> {
    #[inline]
    fn enqueue(&mut self, item: impl Into<Option<T>>) -> Result<(), ContainerError> {
        self.enqueue(item)
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.dequeue()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.peek()
    }

    #[inline]
    fn peek_mut(&mut self) -> Option<&mut T> {
        self.peek_mut()
    }
}

#[inline]
fn alloc_buf<T>(capacity: usize) -> Box<[Option<T>]> {
    repeat_with(|| None).take(capacity).collect()
}

/// `index` must be below `2 * capacity`.
#[inline]
fn wrap_index(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity || index - capacity < capacity);
    if index >= capacity {
        index - capacity
    } else {
        index
    }
}
