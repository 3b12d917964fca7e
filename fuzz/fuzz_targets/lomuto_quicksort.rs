#![no_main]

use libfuzzer_sys::fuzz_target;

use fuzz_util::{check_sorted, u8_as_i32};
use lomuto_quicksort::quicksort as test_sort;

fuzz_target!(|data: &[u8]| {
    let original = u8_as_i32(data);
    let mut v = original.clone();
    test_sort::sort(&mut v);
    check_sorted(&original, &v);
});
