use core::ptr;
use core::slice;

use crate::allocator::AltAllocator;
use crate::allocator::Global;
use crate::buffer::ArrayBuf;
use crate::error::VectorError;
use crate::error::VectorResult;

/// Capacity given to an empty vector on its first push or insert.
const MIN_NON_ZERO_CAP: usize = 1;
/// Factor a full vector's capacity is multiplied by before it takes one more element.
const GROWTH_FACTOR: usize = 2;

/// A growable array on top of an [`ArrayBuf`].
///
/// The vector has no state besides its buffer. It decides when to grow and
/// how elements shift, the buffer decides how memory is obtained.
///
/// Every operation that may allocate returns a [`VectorResult`]: a refused
/// allocation leaves the vector exactly as it was.
pub struct SimpleVector<T, A: AltAllocator = Global> {
    pub(super) buf: ArrayBuf<T, A>,
}

impl<T> SimpleVector<T> {
    /// An empty vector. Does not allocate.
    pub const fn new() -> Self {
        return Self { buf: ArrayBuf::new() };
    }

    /// An empty vector with room for exactly `capacity` elements, so the
    /// first `capacity` pushes never reallocate.
    pub fn with_capacity(capacity: usize) -> VectorResult<Self> {
        return Ok(Self { buf: ArrayBuf::with_capacity(capacity)? });
    }

    /// A vector of `len` elements, each `T::default()`.
    pub fn with_size(len: usize) -> VectorResult<Self>
    where
        T: Default,
    {
        return Ok(Self { buf: ArrayBuf::with_len(len)? });
    }

    /// A vector of `len` clones of `value`.
    pub fn from_elem(len: usize, value: T) -> VectorResult<Self>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(len)?;
        vec.fill_from_within_capacity(len, value);
        return Ok(vec);
    }

    /// A vector holding clones of `items`, in order.
    pub fn from_slice(items: &[T]) -> VectorResult<Self>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(items.len())?;
        for item in items {
            vec.write_within_capacity(item.clone());
        }
        return Ok(vec);
    }
}

impl<T, A: AltAllocator> SimpleVector<T, A> {
    #[cfg(test)]
    pub(crate) const fn new_in(alloc: A) -> Self {
        return Self { buf: ArrayBuf::new_in(alloc) };
    }

    /// Deep copy. The copy gets the same capacity as `self`.
    pub fn try_clone(&self) -> VectorResult<Self>
    where
        T: Clone,
        A: Clone,
    {
        return Ok(Self { buf: self.buf.try_clone()? });
    }

    /// Appends `value`.
    ///
    /// A full vector first doubles its capacity (an empty one goes to 1), so a
    /// run of pushes costs amortized O(1) each.
    pub fn push(&mut self, value: T) -> VectorResult<()> {
        self.grow_if_full()?;
        self.write_within_capacity(value);
        return Ok(());
    }

    /// Inserts `value` at `index`, shifting everything from `index` on one
    /// slot toward the tail. `index == len` appends.
    ///
    /// Returns the inserted element.
    pub fn insert(&mut self, index: usize, value: T) -> VectorResult<&mut T> {
        let len = self.buf.len();
        if index > len {
            return Err(VectorError::OutOfRange { index, size: len });
        }
        self.grow_if_full()?;

        unsafe {
            let loc = self.buf.as_mut_ptr().add(index);
            if index < len {
                ptr::copy(loc, loc.add(1), len - index);
            }
            ptr::write(loc, value);
            self.buf.set_len(len + 1);
            return Ok(&mut *loc);
        }
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let len = self.buf.len();
        if len == 0 {
            return None;
        }
        unsafe {
            self.buf.set_len(len - 1);
            return Some(ptr::read(self.buf.as_ptr().add(len - 1)));
        }
    }

    /// Drops the last element. Does nothing on an empty vector.
    #[inline]
    pub fn pop_back(&mut self) {
        drop(self.pop());
    }

    /// Removes and returns the element at `index`, shifting the tail one slot
    /// toward the head.
    pub fn remove(&mut self, index: usize) -> VectorResult<T> {
        let len = self.buf.len();
        if index >= len {
            return Err(VectorError::OutOfRange { index, size: len });
        }

        unsafe {
            let loc = self.buf.as_mut_ptr().add(index);
            let ret = ptr::read(loc);
            ptr::copy(loc.add(1), loc, len - index - 1);
            self.buf.set_len(len - 1);
            return Ok(ret);
        }
    }

    /// Drops the element at `index` and shifts the tail down.
    ///
    /// Returns the element that now sits at `index`, or `None` when the erased
    /// element was the last one.
    pub fn erase(&mut self, index: usize) -> VectorResult<Option<&mut T>> {
        drop(self.remove(index)?);
        return Ok(self.buf.as_mut_slice().get_mut(index));
    }

    /// Drops every element. The capacity is kept for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Drops every element from `len` on.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// See [`ArrayBuf::resize`].
    #[inline]
    pub fn resize(&mut self, new_len: usize) -> VectorResult<()>
    where
        T: Default,
    {
        return self.buf.resize(new_len);
    }

    /// See [`ArrayBuf::reserve`]. `new_capacity` is the total, not an increment.
    #[inline]
    pub fn reserve(&mut self, new_capacity: usize) -> VectorResult<()> {
        return self.buf.reserve(new_capacity);
    }

    /// Checked access, `VectorError::OutOfRange` when `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> VectorResult<&T> {
        return self.buf.at(index);
    }

    #[inline]
    pub fn at_mut(&mut self, index: usize) -> VectorResult<&mut T> {
        return self.buf.at_mut(index);
    }

    /// # Safety
    /// `index` must be below `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        return unsafe { self.buf.get_unchecked(index) };
    }

    /// # Safety
    /// `index` must be below `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        return unsafe { self.buf.get_unchecked_mut(index) };
    }

    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.buf.len();
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.buf.is_empty();
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.buf.capacity();
    }

    /// Read-only walk over the live elements, front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        return self.as_slice().iter();
    }

    /// Mutable walk over the live elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        return self.as_mut_slice().iter_mut();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return self.buf.as_slice();
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        return self.buf.as_mut_slice();
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.buf.as_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.buf.as_mut_ptr();
    }

    fn grow_if_full(&mut self) -> VectorResult<()> {
        let capacity = self.buf.capacity();
        if self.buf.len() < capacity {
            return Ok(());
        }
        let new_capacity = if capacity == 0 {
            MIN_NON_ZERO_CAP
        } else {
            let Some(doubled) = capacity.checked_mul(GROWTH_FACTOR) else {
                return Err(VectorError::CapacityOverflow);
            };
            doubled
        };
        return self.buf.reserve(new_capacity);
    }

    /// Appends without checking for room. Callers reserve first.
    pub(super) fn write_within_capacity(&mut self, value: T) {
        let len = self.buf.len();
        debug_assert!(len < self.buf.capacity());
        unsafe {
            ptr::write(self.buf.as_mut_ptr().add(len), value);
            self.buf.set_len(len + 1);
        }
    }

    fn fill_from_within_capacity(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        if count == 0 {
            return;
        }
        for _ in 1..count {
            self.write_within_capacity(value.clone());
        }
        self.write_within_capacity(value);
    }
}
