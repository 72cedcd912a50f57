use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr;
use core::slice;

use super::inner::Inner;
use crate::allocator::AltAllocator;
use crate::allocator::Global;
use crate::error::VectorError;
use crate::error::VectorResult;

/// An owned, contiguous heap block of `T` together with the count of live
/// elements at its front.
///
/// Slots `[0, len)` hold initialized values and are dropped with the buffer.
/// Slots `[len, capacity)` are allocated but never read before they are
/// written. The capacity only ever grows.
pub struct ArrayBuf<T, A: AltAllocator = Global> {
    inner: Inner<A>,
    len:   usize,
    _ph:   PhantomData<T>,
}

// Same rules as `Box<[T]>`, the buffer is the unique owner of its elements.
unsafe impl<T: Send, A: AltAllocator + Send> Send for ArrayBuf<T, A> {}
unsafe impl<T: Sync, A: AltAllocator + Sync> Sync for ArrayBuf<T, A> {}

impl<T> ArrayBuf<T> {
    /// An empty buffer. Does not allocate.
    pub const fn new() -> Self {
        return Self::new_in(Global);
    }

    /// An empty buffer with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> VectorResult<Self> {
        return Self::with_capacity_in(Global, capacity);
    }

    /// A buffer of exactly `len` live elements, each `T::default()`.
    ///
    /// For the numeric primitives that is zero.
    pub fn with_len(len: usize) -> VectorResult<Self>
    where
        T: Default,
    {
        return Self::with_len_and_capacity(len, len);
    }

    /// A buffer with room for `capacity` elements, the first `len` of them
    /// live and set to `T::default()`.
    pub fn with_len_and_capacity(len: usize, capacity: usize) -> VectorResult<Self>
    where
        T: Default,
    {
        if len > capacity {
            return Err(VectorError::LengthExceedsCapacity { len, capacity });
        }
        let mut buf = Self::with_capacity(capacity)?;
        buf.fill_default_to(len);
        return Ok(buf);
    }
}

impl<T, A: AltAllocator> ArrayBuf<T, A> {
    const LAYOUT: Layout = Layout::new::<T>();
    const SIZE: usize = size_of::<T>();

    pub(crate) const fn new_in(alloc: A) -> Self {
        return Self {
            inner: Inner::new_in::<T>(alloc),
            len:   0,
            _ph:   PhantomData,
        };
    }

    pub(crate) fn with_capacity_in(alloc: A, capacity: usize) -> VectorResult<Self> {
        return Ok(Self {
            inner: Inner::initial_alloc::<T>(alloc, capacity, Self::LAYOUT)?,
            len:   0,
            _ph:   PhantomData,
        });
    }

    /// Deep copy of the live range into a block of the same capacity.
    ///
    /// The copy is assembled in a separate buffer, so an allocation failure
    /// or a panicking `clone` leaves `self` as it was.
    pub fn try_clone(&self) -> VectorResult<Self>
    where
        T: Clone,
        A: Clone,
    {
        let mut out = Self::with_capacity_in(self.inner.allocator().clone(), self.capacity())?;
        for item in self.as_slice() {
            // Room was reserved above, and `len` only moves past written slots.
            unsafe { out.as_mut_ptr().add(out.len).write(item.clone()) };
            out.len += 1;
        }
        return Ok(out);
    }

    /// Exchanges the block, length and capacity of two buffers.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns the element at `index`, or `VectorError::OutOfRange` when
    /// `index` is not below the live length.
    pub fn at(&self, index: usize) -> VectorResult<&T> {
        if index >= self.len {
            return Err(VectorError::OutOfRange { index, size: self.len });
        }
        return Ok(unsafe { self.get_unchecked(index) });
    }

    /// Mutable counterpart of [`ArrayBuf::at`].
    pub fn at_mut(&mut self, index: usize) -> VectorResult<&mut T> {
        if index >= self.len {
            return Err(VectorError::OutOfRange { index, size: self.len });
        }
        return Ok(unsafe { self.get_unchecked_mut(index) });
    }

    /// # Safety
    /// `index` must be below `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        return unsafe { &*self.as_ptr().add(index) };
    }

    /// # Safety
    /// `index` must be below `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        return unsafe { &mut *self.as_mut_ptr().add(index) };
    }

    /// Grows the block to exactly `new_capacity` slots when it is smaller.
    ///
    /// This is an absolute target, not an additional count. A request at or
    /// below the current capacity does nothing. On failure the buffer keeps
    /// its old block and the error is returned.
    pub fn reserve(&mut self, new_capacity: usize) -> VectorResult<()> {
        if new_capacity <= self.capacity() {
            tracing::debug!(capacity = self.capacity(), requested = new_capacity, "reserve already satisfied");
            return Ok(());
        }
        return self.inner.grow_exact(new_capacity, Self::LAYOUT);
    }

    /// Sets the live length to `new_len`.
    ///
    /// Growing reserves exactly `new_len` slots and fills the new ones with
    /// `T::default()`. Shrinking drops the trimmed tail but keeps the block.
    pub fn resize(&mut self, new_len: usize) -> VectorResult<()>
    where
        T: Default,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len)?;
        self.fill_default_to(new_len);
        return Ok(());
    }

    /// Drops every element from `len` on. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(unsafe { self.as_mut_ptr().add(len) }, self.len - len);
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.len = len;
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every live element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// # Safety
    /// `new_len` must not exceed the capacity, and slots `[0, new_len)` must
    /// hold initialized values.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        self.len = new_len;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.inner.capacity(Self::SIZE);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.inner.get_ptr();
    }

    /// Writes defaults into `[len, new_len)`. Room must already be reserved.
    fn fill_default_to(&mut self, new_len: usize)
    where
        T: Default,
    {
        debug_assert!(new_len <= self.capacity());
        while self.len < new_len {
            unsafe { self.as_mut_ptr().add(self.len).write(T::default()) };
            self.len += 1;
        }
    }
}

impl<T, A: AltAllocator + Default> Default for ArrayBuf<T, A> {
    fn default() -> Self {
        return Self::new_in(A::default());
    }
}

impl<T: Clone, A: AltAllocator + Clone> Clone for ArrayBuf<T, A> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(buf) => return buf,
            Err(err) => alloc_failed(err),
        }
    }
}

impl<T: fmt::Debug, A: AltAllocator> fmt::Debug for ArrayBuf<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}

impl<T, A: AltAllocator> Drop for ArrayBuf<T, A> {
    fn drop(&mut self) {
        self.clear();
        unsafe { self.inner.release(Self::LAYOUT) };
    }
}

/// Trait conversions that must allocate cannot return an error, so they
/// abort the call the same way the standard collections do.
#[cold]
#[track_caller]
pub(crate) fn alloc_failed(err: VectorError) -> ! {
    panic!("simple_vector: {err}");
}
