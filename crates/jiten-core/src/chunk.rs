/// Split a slice into fixed-size chunks; the last chunk may be shorter.
///
/// Produces `ceil(len / size)` chunks covering every element exactly
/// once, in order. An empty slice produces no chunks.
///
/// # Panics
/// Panics if `size` is zero.
pub fn partition<T>(items: &[T], size: usize) -> Vec<&[T]> {
    assert!(size > 0, "chunk size must be non-zero");
    items.chunks(size).collect()
}
