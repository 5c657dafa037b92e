//! Sequence partitioning
//!
//! Splits a slice into consecutive, order-preserving chunks. Concatenating
//! the chunks in order always reproduces the input exactly.

use crate::errors::{ToolkitError, ToolkitResult};

/// Split `items` into chunks of `size` elements.
///
/// Every chunk holds exactly `size` elements except the last, which holds
/// the `items.len() % size` leftovers and is omitted when the length is an
/// exact multiple. An empty slice yields zero chunks.
///
/// # Errors
///
/// Returns [`ToolkitError::InvalidArgument`] when `size` is zero.
///
/// # Example
///
/// ```rust
/// use toolkit_core::utils::chunk;
///
/// let data: Vec<i32> = (1..=10).collect();
/// let chunks = chunk(&data, 3).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> ToolkitResult<Vec<Vec<T>>> {
    if size == 0 {
        tracing::debug!(size, "rejected chunk size");
        return Err(ToolkitError::invalid_argument(
            "size",
            size.to_string(),
            "Chunk size must be a positive integer",
        ));
    }

    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Same as [`chunk`], for callers holding a signed size.
///
/// Zero and negative sizes are rejected with
/// [`ToolkitError::InvalidArgument`] rather than coerced.
///
/// ```rust
/// use toolkit_core::utils::chunk_signed;
///
/// assert!(chunk_signed(&[1, 2, 3], -1).is_err());
/// assert_eq!(chunk_signed(&[1, 2, 3], 2).unwrap(), vec![vec![1, 2], vec![3]]);
/// ```
pub fn chunk_signed<T: Clone>(items: &[T], size: i64) -> ToolkitResult<Vec<Vec<T>>> {
    match usize::try_from(size) {
        Ok(size) => chunk(items, size),
        Err(_) => {
            tracing::debug!(size, "rejected negative chunk size");
            Err(ToolkitError::invalid_argument(
                "size",
                size.to_string(),
                "Chunk size must be a positive integer",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_chunk_with_remainder() {
        let data: Vec<i32> = (1..=10).collect();
        let chunks = chunk(&data, 3).unwrap();
        assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
    }

    #[test]
    fn test_chunk_exact_multiple_has_no_trailing_chunk() {
        let chunks = chunk(&[1, 2, 3, 4, 5, 6], 2).unwrap();
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.len() == 2));
    }

    #[test]
    fn test_chunk_empty_input() {
        let empty: [u8; 0] = [];
        assert!(chunk(&empty, 4).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_size_larger_than_input() {
        let chunks = chunk(&["a", "b"], 5).unwrap();
        assert_eq!(chunks, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_chunk_zero_size_is_rejected() {
        let err = chunk(&[1, 2, 3], 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_chunk_signed_negative_size_is_rejected() {
        let err = chunk_signed(&[1, 2, 3], -3).unwrap_err();
        match err {
            ToolkitError::InvalidArgument { field, value, .. } => {
                assert_eq!(field, "size");
                assert_eq!(value, "-3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(chunk_signed(&[1, 2, 3], 0).is_err());
    }

    #[test]
    fn test_chunk_does_not_mutate_input() {
        let data = vec![String::from("x"), String::from("y"), String::from("z")];
        let _ = chunk(&data, 2).unwrap();
        assert_eq!(data, vec!["x", "y", "z"]);
    }

    proptest! {
        #[test]
        fn test_flattening_reproduces_input(
            items in prop::collection::vec(any::<i32>(), 0..200),
            size in 1usize..50usize,
        ) {
            let chunks = chunk(&items, size).unwrap();
            let flat: Vec<i32> = chunks.into_iter().flatten().collect();
            prop_assert_eq!(flat, items);
        }

        #[test]
        fn test_only_last_chunk_may_be_short(
            items in prop::collection::vec(any::<u8>(), 0..200),
            size in 1usize..50usize,
        ) {
            let chunks = chunk(&items, size).unwrap();
            prop_assert_eq!(chunks.len(), items.len().div_ceil(size));

            if let Some((last, full)) = chunks.split_last() {
                prop_assert!(full.iter().all(|c| c.len() == size));
                let expected_last = match items.len() % size {
                    0 => size,
                    rem => rem,
                };
                prop_assert_eq!(last.len(), expected_last);
            }
        }
    }
}
