//! The allocation seam under `ArrayBuf`. The `AltAllocator` trait is
//! reachable only inside the crate, so `Global` is the only allocator a user
//! can end up with; the trait exists so tests can swap in allocators that
//! refuse or count requests.

use alloc::alloc as heap;
use core::alloc::Layout;
use core::ptr::NonNull;

use thiserror::Error;

/// The allocator could not hand out the requested block.
///
/// It stays inside the crate, `Inner` turns it into
/// [`VectorError::AllocFailure`](crate::VectorError::AllocFailure).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("A memory allocation error occurred.")]
pub struct AllocError;

/// A cut-down mirror of the unstable `Allocator` trait.
///
/// This mirrors the safety requirements of the allocator API:
/// <https://doc.rust-lang.org/std/alloc/trait.Allocator.html>
pub unsafe trait AltAllocator {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// If the allocation fails it returns an `AllocError`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError>;

    /// Deallocates the chunk of memory pointed at by`ptr`
    ///
    /// This memory must have only been allocated by this allocator.
    /// The layout must match the layout provided when the chunk was
    /// allocated.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);

    /// Grows the memory pointed at by `old_ptr` to the new layout.
    ///
    /// The new layout must be larger than the old layout.
    ///
    /// If this fails the old ptr must still be valid. If it succeeds
    /// the old ptr is no longer valid, and the ptr returned must be used
    /// instead.
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let new = self.allocate(new_layout)?;
        let ptr = new.cast::<u8>();

        // Copy the old data to the new location
        unsafe { ptr.copy_from_nonoverlapping(old_ptr, old_layout.size()) };
        // free the old memory
        unsafe { self.deallocate(old_ptr, old_layout) };
        return Ok(new);
    }
}

/// A wrapper around the global heap allocator.
#[derive(Debug, Copy, Clone, Default)]
pub struct Global;

unsafe impl AltAllocator for Global {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        // heap::alloc() requires that the layout size be non-zero.
        if layout.size() == 0 {
            return Err(AllocError);
        };
        let ptr = unsafe { heap::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(ptr, layout.size()));
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { heap::dealloc(ptr.as_ptr(), layout) };
    }

    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        // realloc keeps the old block alive when it returns null.
        let new = unsafe { heap::realloc(old_ptr.as_ptr(), old_layout, new_layout.size()) };
        let Some(new) = NonNull::new(new) else {
            return Err(AllocError);
        };
        return Ok(NonNull::slice_from_raw_parts(new, new_layout.size()));
    }
}
