use quickcheck_macros::quickcheck;
use simple_vector::SimpleVector;
use simple_vector::VectorError;

#[quickcheck]
fn pushes_keep_order(items: Vec<i64>) -> bool {
    let mut vec = SimpleVector::new();
    for &item in &items {
        if vec.push(item).is_err() {
            return false;
        }
    }
    vec.len() == items.len() && vec == items.as_slice()
}

#[quickcheck]
fn checked_access_fails_past_end(items: Vec<u8>, extra: usize) -> bool {
    let vec: SimpleVector<u8> = items.iter().copied().collect();
    let index = items.len().saturating_add(extra);
    vec.at(index) == Err(VectorError::OutOfRange { index, size: items.len() })
}

#[quickcheck]
fn clear_keeps_capacity(items: Vec<u16>) -> bool {
    let mut vec: SimpleVector<u16> = items.iter().copied().collect();
    let capacity = vec.capacity();
    let ptr = vec.as_ptr();
    vec.clear();
    for &item in &items {
        if vec.push(item).is_err() {
            return false;
        }
    }
    vec.is_empty() == items.is_empty() && vec.capacity() == capacity && vec.as_ptr() == ptr
}

#[quickcheck]
fn ordering_matches_slices(a: Vec<i32>, b: Vec<i32>) -> bool {
    let va: SimpleVector<i32> = a.iter().copied().collect();
    let vb: SimpleVector<i32> = b.iter().copied().collect();
    va.cmp(&vb) == a.cmp(&b) && (va == vb) == (a == b)
}

#[quickcheck]
fn copy_is_isolated(items: Vec<u32>) -> bool {
    let original: SimpleVector<u32> = items.iter().copied().collect();
    let mut copy = original.clone();
    copy.push(0).is_ok() && original == items.as_slice() && copy.len() == items.len() + 1
}
