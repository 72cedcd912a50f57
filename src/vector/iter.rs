use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use crate::allocator::AltAllocator;
use crate::allocator::Global;
use crate::buffer::ArrayBuf;

/// An iterator that moves the elements out of a `SimpleVector`.
///
/// The buffer is kept at length zero while iterating; `[start, end)` tracks
/// the elements not yet handed out, and only those are dropped with the
/// iterator.
pub struct IntoIter<T, A: AltAllocator = Global> {
    buf:   ArrayBuf<T, A>,
    start: usize,
    end:   usize,
}

impl<T, A: AltAllocator> IntoIter<T, A> {
    pub(super) fn new(mut buf: ArrayBuf<T, A>) -> Self {
        let end = buf.len();
        unsafe { buf.set_len(0) };
        return Self { buf, start: 0, end };
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(self.start), self.end - self.start) }
    }
}

impl<T, A: AltAllocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let item = unsafe { ptr::read(self.buf.as_ptr().add(self.start)) };
        self.start += 1;
        return Some(item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        return (remaining, Some(remaining));
    }
}

impl<T, A: AltAllocator> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        return Some(unsafe { ptr::read(self.buf.as_ptr().add(self.end)) });
    }
}

impl<T, A: AltAllocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: AltAllocator> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: AltAllocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_tuple("IntoIter").field(&self.as_slice()).finish();
    }
}

impl<T, A: AltAllocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        self.start = self.end;
        // The buffer itself has length zero and only frees the block.
        unsafe { ptr::drop_in_place(remaining) };
    }
}
