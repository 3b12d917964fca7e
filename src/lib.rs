//! In-place quicksort using the Lomuto partition scheme.
//!
//! Every implementation module exposes `sort`, `sort_by`, `try_sort` and a `SortImpl` type
//! implementing [`Sort`], so tests and benchmarks can treat them uniformly.

use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod ffi;
pub mod patterns;
pub mod quicksort;
pub mod quicksort_stack;
pub mod rust_std;

pub use error::SortError;
