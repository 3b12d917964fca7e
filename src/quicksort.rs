//! Basic recursive quicksort with Lomuto partitioning.
//!
//! The pivot is always the last element of the range and the partition scan uses a strict
//! less-than, so elements equal to the pivot stay on the right side. Already sorted, reverse
//! sorted and all-equal inputs therefore take *O*(*n*^2) time and *O*(*n*) stack depth. That is a
//! known property of this scheme and is left as is.

use std::cmp::Ordering;

use crate::error::SortError;

sort_impl!("lomuto_quicksort_recursive");

/// Sorts `v` in place into non-decreasing order.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    lomuto_sort(v, &mut |a: &T, b: &T| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    lomuto_sort(v, &mut |a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Like [`sort`], but reports an absent sequence instead of requiring one.
pub fn try_sort<T>(v: Option<&mut [T]>) -> Result<(), SortError>
where
    T: Ord,
{
    let v = v.ok_or(SortError::InvalidArgument("sequence is absent"))?;
    sort(v);

    Ok(())
}

/// Partitions the inclusive range `low..=high` of `v` around the pivot `v[high]`.
///
/// Returns the final index `p` of the pivot. Afterwards `v[low..p]` is strictly less than the
/// pivot and `v[p + 1..=high]` is not less than it. Elements outside the range are not touched.
///
/// Panics if `low > high` or `high >= v.len()`.
#[inline]
pub fn partition<T>(v: &mut [T], low: usize, high: usize) -> usize
where
    T: Ord,
{
    partition_by(v, low, high, &mut |a: &T, b: &T| a.lt(b))
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

#[inline]
fn lomuto_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    quicksort(v, 0, len - 1, is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn quicksort<T, F>(v: &mut [T], low: usize, high: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if low >= high {
        return;
    }

    let pivot_pos = partition_by(v, low, high, is_less);

    // An empty left side would be `low..=pivot_pos - 1`, which underflows for `pivot_pos == 0`.
    if pivot_pos > low {
        quicksort(v, low, pivot_pos - 1, is_less);
    }

    // `pivot_pos <= high < v.len()`, so this can't overflow. For `pivot_pos == high` the range is
    // empty and the call returns immediately.
    quicksort(v, pivot_pos + 1, high, is_less);
}

/// [`partition`] with a custom strict less-than predicate.
///
/// Performs exactly `high - low` comparisons, scanning left to right.
///
/// Panics if `low > high` or `high >= v.len()`, without touching `v`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn partition_by<T, F>(v: &mut [T], low: usize, high: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        low <= high && high < v.len(),
        "invalid partition range {low}..={high} for slice of length {}",
        v.len()
    );

    // `store` is one past the end of the less-than region. The pivot at `high` never moves during
    // the scan because `store <= j < high`.
    let mut store = low;
    for j in low..high {
        if is_less(&v[j], &v[high]) {
            v.swap(store, j);
            store += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(store, high);

    store
}
