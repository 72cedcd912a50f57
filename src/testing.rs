//! Allocators and element types shared by the unit tests.

use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;
use std::rc::Rc;

use crate::allocator::AllocError;
use crate::allocator::AltAllocator;
use crate::allocator::Global;

/// Refuses every request.
pub(crate) struct NoAlloc;

unsafe impl AltAllocator for NoAlloc {
    fn allocate(&self, _: Layout) -> Result<NonNull<[u8]>, AllocError> {
        return Err(AllocError);
    }
    unsafe fn deallocate(&self, _: NonNull<u8>, _: Layout) {
        return;
    }
}

/// Hands out at most `limit` blocks from `Global`, then refuses.
#[derive(Clone)]
pub(crate) struct AllocCount(u8, Rc<Cell<u8>>);

impl AllocCount {
    pub(crate) fn new(limit: u8) -> Self {
        return Self(limit, Rc::new(Cell::new(0)));
    }

    pub(crate) fn handed_out(&self) -> u8 {
        return self.1.get();
    }
}

unsafe impl AltAllocator for AllocCount {
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let cur = self.1.get();
        if cur >= self.0 {
            return Err(AllocError);
        };
        self.1.set(cur + 1);
        return Global.allocate(layout);
    }
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Global.deallocate(ptr, layout) };
    }
}

/// Bumps a shared counter when dropped.
#[derive(Clone, Debug)]
pub(crate) struct Tracked(pub(crate) Rc<Cell<usize>>);

impl Drop for Tracked {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

std::thread_local! {
    static DEFAULT_DROPS: Cell<usize> = const { Cell::new(0) };
}

/// A `Default` element whose drops land in a per-thread counter, so it can
/// be created by `resize` and `with_size`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Defaulted;

impl Defaulted {
    /// Drops seen on the current test thread.
    pub(crate) fn drops() -> usize {
        return DEFAULT_DROPS.with(Cell::get);
    }
}

impl Drop for Defaulted {
    fn drop(&mut self) {
        DEFAULT_DROPS.with(|count| count.set(count.get() + 1));
    }
}

/// Counts its drops like `Tracked`, but its `clone` panics once `clones`
/// reaches `limit`.
#[derive(Debug)]
pub(crate) struct FailingClone {
    pub(crate) drops:  Rc<Cell<usize>>,
    pub(crate) clones: Rc<Cell<usize>>,
    pub(crate) limit:  usize,
}

impl Clone for FailingClone {
    fn clone(&self) -> Self {
        let made = self.clones.get() + 1;
        self.clones.set(made);
        if made >= self.limit {
            panic!("clone number {made} refused");
        }
        return Self {
            drops:  self.drops.clone(),
            clones: self.clones.clone(),
            limit:  self.limit,
        };
    }
}

impl Drop for FailingClone {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
