/// Reinterprets fuzzer bytes as native endian `i32`, dropping a trailing partial value.
///
/// The last element pivot is quadratic on sorted and duplicate heavy input, so the length is capped
/// to keep single runs fast.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    const MAX_LEN: usize = 4_096;

    data.chunks_exact(4)
        .take(MAX_LEN)
        .map(|chunk| i32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

pub fn check_sorted(original: &[i32], sorted: &[i32]) {
    let mut expected = original.to_vec();
    expected.sort();

    assert_eq!(expected, sorted);
}
