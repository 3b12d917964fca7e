//! Non-recursive quicksort with Lomuto partitioning.
//!
//! Performs exactly the same partition calls as [`crate::quicksort`], but keeps the pending
//! ranges on an explicit work stack. The smaller side of every partition is processed first, which
//! bounds the stack at `log2(len)` entries even for inputs that degrade the pivot choice. Running
//! time is unchanged.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::quicksort::partition_by;

sort_impl!("lomuto_quicksort_stack");

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

pub fn try_sort<T>(v: Option<&mut [T]>) -> Result<(), SortError>
where
    T: Ord,
{
    let v = v.ok_or(SortError::InvalidArgument("sequence is absent"))?;
    sort(v);

    Ok(())
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

    quicksort(v, is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Inclusive `(low, high)` ranges, only ranges with at least two elements are pushed.
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(usize::BITS as usize);
    stack.push((0, v.len() - 1));

    while let Some((low, high)) = stack.pop() {
        let pivot_pos = partition_by(v, low, high, is_less);

        let left = (pivot_pos > low + 1).then(|| (low, pivot_pos - 1));
        let right = (pivot_pos + 1 < high).then(|| (pivot_pos + 1, high));

        match (left, right) {
            (Some(left), Some(right)) => {
                // Push the larger side first, so the smaller one is popped next.
                if left.1 - left.0 < right.1 - right.0 {
                    stack.push(right);
                    stack.push(left);
                } else {
                    stack.push(left);
                    stack.push(right);
                }
            }
            (Some(side), None) | (None, Some(side)) => stack.push(side),
            (None, None) => {}
        }
    }
}
