//! # Sequence Transforms
//!
//! Higher-order helpers over slices. Each one borrows its input and
//! builds a fresh `Vec`, so the caller's sequence is never touched.
//!
//! ## Example
//!
//! ```
//! use basics_common::list::{apply, compose, filter_seq, reduce_seq};
//!
//! let nums = [1, 2, 3, 4];
//!
//! assert_eq!(apply(&nums, |x| x * 2), vec![2, 4, 6, 8]);
//! assert_eq!(filter_seq(&nums, |x| x % 2 == 0), vec![2, 4]);
//! assert_eq!(reduce_seq(&nums, 0, |acc, x| acc + x), 10);
//!
//! let double_then_add_two = compose(|x: i64| x + 2, |x: i64| x * 2);
//! assert_eq!(double_then_add_two(5), 12);
//! ```

/// Maps `operation` over a sequence.
///
/// The result has the same length as the input and element `i` is
/// `operation(sequence[i])`.
///
/// # Example
/// ```
/// use basics_common::list::apply;
/// let squares = apply(&[1, 2, 3], |x| x * x);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn apply<T, U, F>(sequence: &[T], operation: F) -> Vec<U>
where
    T: Copy,
    F: Fn(T) -> U,
{
    sequence.iter().copied().map(operation).collect()
}

/// Keeps the elements for which `predicate` holds, in their original order.
///
/// # Example
/// ```
/// use basics_common::list::filter_seq;
/// let odds = filter_seq(&[1, 2, 3, 4, 5], |x| x % 2 == 1);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn filter_seq<T, P>(sequence: &[T], predicate: P) -> Vec<T>
where
    T: Copy,
    P: Fn(T) -> bool,
{
    sequence.iter().copied().filter(|&x| predicate(x)).collect()
}

/// Left fold: starts at `initial` and combines each element in order.
///
/// An empty sequence returns `initial` unchanged.
///
/// # Example
/// ```
/// use basics_common::list::reduce_seq;
/// let product = reduce_seq(&[1, 2, 3, 4], 1, |acc, x| acc * x);
/// assert_eq!(product, 24);
/// ```
pub fn reduce_seq<T, A, F>(sequence: &[T], initial: A, operation: F) -> A
where
    T: Copy,
    F: Fn(A, T) -> A,
{
    sequence.iter().copied().fold(initial, operation)
}

/// Composes two functions: `compose(f, g)(x) == f(g(x))`.
///
/// `g` runs first.
///
/// # Example
/// ```
/// use basics_common::list::compose;
/// let negate_len = compose(|n: usize| -(n as i64), |s: &str| s.len());
/// assert_eq!(negate_len("four"), -4);
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}
