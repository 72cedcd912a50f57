use core::alloc::Layout;
use core::ptr::NonNull;

use crate::allocator::AltAllocator;
use crate::error::VectorError;
use crate::error::VectorResult;

const fn layout_array(layout: Layout, length: usize) -> VectorResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(VectorError::CapacityOverflow);
    };
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(VectorError::LayoutFailure);
    };
    return Ok(lay);
}

/// The type-erased half of a buffer: one block of `capacity` slots, the
/// allocator that owns it, and nothing about how many slots are live.
///
/// Every method that needs the element size takes the element `Layout`, so
/// this part is compiled once per allocator instead of once per element type.
/// `Inner` never frees itself, the typed owner calls `release`.
pub(crate) struct Inner<A: AltAllocator> {
    ptr:      NonNull<u8>,
    capacity: usize,
    alloc:    A,
}

impl<A: AltAllocator> Inner<A> {
    pub(crate) const fn new_in<T>(alloc: A) -> Self {
        return Self {
            ptr:      NonNull::<T>::dangling().cast(),
            capacity: 0,
            alloc:    alloc,
        };
    }

    pub(crate) fn initial_alloc<T>(alloc: A, capacity: usize, layout: Layout) -> VectorResult<Self> {
        let mut inner = Self::new_in::<T>(alloc);
        inner.grow_exact(capacity, layout)?;
        return Ok(inner);
    }

    /// Zero-sized elements never need memory, so their capacity is unbounded.
    #[inline]
    pub(crate) const fn capacity(&self, elem_size: usize) -> usize {
        if elem_size == 0 {
            return usize::MAX;
        }
        return self.capacity;
    }

    #[inline]
    pub(crate) const fn get_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr().cast();
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        return &self.alloc;
    }

    /// Makes room for exactly `new_capacity` slots.
    ///
    /// The current block stays untouched until the allocator has handed out
    /// the replacement, so on error the old pointer and capacity are still
    /// the valid ones.
    pub(crate) fn grow_exact(&mut self, new_capacity: usize, layout: Layout) -> VectorResult<()> {
        if layout.size() == 0 || new_capacity <= self.capacity {
            return Ok(());
        }

        let new_layout = layout_array(layout, new_capacity)?;
        let result = if self.capacity == 0 {
            self.alloc.allocate(new_layout)
        } else {
            let old_layout = layout_array(layout, self.capacity)?;
            unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) }
        };

        let Ok(ptr) = result else {
            tracing::warn!(
                capacity = self.capacity,
                requested = new_capacity,
                bytes = new_layout.size(),
                "allocator refused to grow the buffer"
            );
            return Err(VectorError::AllocFailure);
        };

        tracing::trace!(
            old_capacity = self.capacity,
            new_capacity = new_capacity,
            elem_size = layout.size(),
            "buffer reallocated"
        );
        self.ptr = ptr.cast();
        self.capacity = new_capacity;
        return Ok(());
    }

    /// Hands the block back to the allocator and resets to the empty state.
    ///
    /// # Safety
    /// `layout` must be the element layout every earlier call was made with,
    /// and no live elements may remain in the block.
    pub(crate) unsafe fn release(&mut self, layout: Layout) {
        if layout.size() == 0 || self.capacity == 0 {
            return;
        }
        if let Ok(block) = layout_array(layout, self.capacity) {
            unsafe { self.alloc.deallocate(self.ptr, block) };
        }
        self.ptr = unsafe { NonNull::new_unchecked(layout.align() as *mut u8) };
        self.capacity = 0;
    }
}
