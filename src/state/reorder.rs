//! Index arithmetic shared by the store operations.

use crate::model::StateError;

/// Remove the element at `start_index` and reinsert it at `finish_index`.
///
/// `finish_index` is a position in the post-removal sequence, so moving the
/// first of three elements to index 2 makes it the last one. Both indices must
/// already be validated against `list.len()`.
pub fn reorder<T: Clone>(list: &[T], start_index: usize, finish_index: usize) -> Vec<T> {
    let mut result = list.to_vec();
    let removed = result.remove(start_index);
    result.insert(finish_index, removed);
    result
}

/// Validate an index that addresses an existing element.
pub fn check_index(index: usize, len: usize) -> Result<(), StateError> {
    if index < len {
        Ok(())
    } else {
        Err(StateError::IndexOutOfBounds { index, len })
    }
}

/// Validate an insertion position, where `len` itself (append) is allowed.
pub fn check_insertion_index(index: usize, len: usize) -> Result<(), StateError> {
    check_index(index, len + 1)
}
