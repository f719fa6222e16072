//! Section 3: Higher-Order Functions
//!
//! Functions that take or return other functions. The generic transforms
//! live in [`basics_common::list`]; this section re-exports them and adds the
//! small integer operations the tour feeds them.

pub use basics_common::list::{apply, compose, filter_seq, reduce_seq};

/// `x * 2`, wrapping on overflow.
pub fn double(x: i64) -> i64 {
    x.wrapping_mul(2)
}

/// `x + 2`, wrapping on overflow.
pub fn add_two(x: i64) -> i64 {
    x.wrapping_add(2)
}

/// True for multiples of two, including zero and negatives.
pub fn is_even(x: i64) -> bool {
    x % 2 == 0
}

/// Fold step for sums, wrapping on overflow.
pub fn add(acc: i64, x: i64) -> i64 {
    acc.wrapping_add(x)
}

/// Keeps the even elements, doubles them, and sums the result.
///
/// # Example
/// ```
/// use basics::section_3::sum_of_doubled_evens;
/// assert_eq!(sum_of_doubled_evens(&[1, 2, 3, 4]), 12);
/// ```
pub fn sum_of_doubled_evens(sequence: &[i64]) -> i64 {
    let evens = filter_seq(sequence, is_even);
    let doubled = apply(&evens, double);
    reduce_seq(&doubled, 0, add)
}

/// Prints the higher-order section of the tour.
pub fn demonstrate_higher_order() {
    println!("\n=== Higher-Order Functions ===");

    let nums = [1, 2, 3, 4, 5];
    println!("input: {nums:?}");
    println!("apply(double): {:?}", apply(&nums, double));
    println!("filter_seq(is_even): {:?}", filter_seq(&nums, is_even));
    println!("reduce_seq(0, add): {}", reduce_seq(&nums, 0, add));

    let double_then_add_two = compose(add_two, double);
    println!("compose(add_two, double)(5) = {}", double_then_add_two(5));
    println!("sum of doubled evens: {}", sum_of_doubled_evens(&nums));
}
