use core::{fmt, iter::FusedIterator, slice};

use super::CircularQueue;

/// Walks the two physical runs of a [`CircularQueue`] in FIFO order.
#[derive(Clone)]
pub struct Iter<'a, T> {
    a: slice::Iter<'a, Option<T>>,
    b: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(super) fn new(a: slice::Iter<'a, Option<T>>, b: slice::Iter<'a, Option<T>>) -> Self {
        Self { a, b }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.a.as_slice())
            .field(&self.b.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self.a.next() {
            Some(slot) => slot.as_ref(),
            None => self.b.next()?.as_ref(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.a.len() + self.b.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        match self.b.next_back() {
            Some(slot) => slot.as_ref(),
            None => self.a.next_back()?.as_ref(),
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    a: slice::IterMut<'a, Option<T>>,
    b: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(super) fn new(
        a: slice::IterMut<'a, Option<T>>,
        b: slice::IterMut<'a, Option<T>>,
    ) -> Self {
        Self { a, b }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.a.as_slice())
            .field(&self.b.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.a.next() {
            Some(slot) => slot.as_mut(),
            None => self.b.next()?.as_mut(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.a.len() + self.b.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.b.next_back() {
            Some(slot) => slot.as_mut(),
            None => self.a.next_back()?.as_mut(),
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

#[derive(Clone)]
pub struct IntoIter<T> {
    inner: CircularQueue<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(super) fn new(inner: CircularQueue<T>) -> Self {
        Self { inner }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len, Some(self.inner.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
