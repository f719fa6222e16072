//! Section 5: Pointers and Storage
//!
//! Passing by value versus by reference, and where a value lives.
//!
//! | Operation | Caller's value afterwards |
//! |-----------|---------------------------|
//! | `double_by_value(x)` | unchanged (the function got a copy) |
//! | `double_by_reference(&mut x)` | doubled |
//! | `swap_by_value(a, b)` | unchanged, swapped pair returned |
//! | `swap_by_reference(&mut a, &mut b)` | swapped in place |
//!
//! Doubling wraps on overflow, like the arithmetic in section 1.

/// Doubles a copy of `x`. The caller never sees the change.
#[allow(unused_assignments, unused_variables)]
pub fn double_by_value(mut x: i64) {
    x = x.wrapping_mul(2);
}

/// Doubles the value behind `x` in place.
///
/// # Example
/// ```
/// use basics::section_5::double_by_reference;
/// let mut n = 21;
/// double_by_reference(&mut n);
/// assert_eq!(n, 42);
/// ```
pub fn double_by_reference(x: &mut i64) {
    *x = x.wrapping_mul(2);
}

/// A plain `i64` returned by value; it lives in the caller's frame.
pub fn create_stack_value() -> i64 {
    10
}

/// The same value, allocated on the heap.
pub fn create_heap_value() -> Box<i64> {
    Box::new(10)
}

/// Returns `(b, a)`.
pub fn swap_by_value(a: i64, b: i64) -> (i64, i64) {
    (b, a)
}

/// Exchanges the values behind `a` and `b`.
///
/// # Example
/// ```
/// use basics::section_5::swap_by_reference;
/// let (mut a, mut b) = (5, 10);
/// swap_by_reference(&mut a, &mut b);
/// assert_eq!((a, b), (10, 5));
/// ```
pub fn swap_by_reference(a: &mut i64, b: &mut i64) {
    std::mem::swap(a, b);
}

/// Prints the pointers section of the tour.
pub fn demonstrate_pointers() {
    println!("\n=== Pointers and Storage ===");

    let mut x = 5;
    double_by_value(x);
    println!("after double_by_value: {x}");
    double_by_reference(&mut x);
    println!("after double_by_reference: {x}");

    let on_stack = create_stack_value();
    let on_heap = create_heap_value();
    println!("stack value: {on_stack}, heap value: {on_heap}");

    let (a, b) = (5, 10);
    let (swapped_a, swapped_b) = swap_by_value(a, b);
    println!("swap_by_value({a}, {b}) = ({swapped_a}, {swapped_b}); originals still ({a}, {b})");

    let (mut a, mut b) = (5, 10);
    swap_by_reference(&mut a, &mut b);
    println!("after swap_by_reference: a = {a}, b = {b}");
}
