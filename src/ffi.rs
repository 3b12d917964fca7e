//! Raw pointer entry points.
//!
//! This is where an absent sequence can actually be expressed, as a null pointer.

use std::slice;

use crate::error::SortError;
use crate::quicksort;

/// Sorts the `len` elements starting at `data` with [`quicksort::sort`].
///
/// # Safety
///
/// If `data` is non-null it must be valid for reads and writes of `len` properly aligned and
/// initialized `T`, and nothing else may access that memory for the duration of the call.
pub unsafe fn sort_raw<T>(data: *mut T, len: usize) -> Result<(), SortError>
where
    T: Ord,
{
    if data.is_null() {
        return Err(SortError::InvalidArgument("data pointer is null"));
    }

    // SAFETY: Non-null was checked above, the rest is guaranteed by the caller.
    let v = unsafe { slice::from_raw_parts_mut(data, len) };
    quicksort::sort(v);

    Ok(())
}

/// C ABI wrapper around [`sort_raw`] for `i32`.
///
/// Returns `0` on success and [`SortError::code`] otherwise. Comparing `i32` can't panic, so no
/// unwind crosses the boundary.
///
/// # Safety
///
/// Same as [`sort_raw`].
#[no_mangle]
pub unsafe extern "C" fn lomuto_quicksort_i32(data: *mut i32, len: usize) -> i32 {
    // SAFETY: Forwarded caller guarantees.
    match unsafe { sort_raw(data, len) } {
        Ok(()) => 0,
        Err(err) => err.code(),
    }
}
