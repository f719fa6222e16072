//! Section 2: Closures
//!
//! Functions that build and return other functions carrying private state.
//!
//! # Key Rust Concepts
//!
//! - `move` closures own their captured state
//! - `FnMut` for closures that mutate what they own (the counter)
//! - `Rc<Cell<T>>` when several closures must see one mutable `Copy` value
//! - `RefCell` for interior mutability behind `&self` (the memo cache)
//!
//! Closure arithmetic wraps on overflow, matching section 1.
//!
//! None of this state is `Send` or `Sync`: every closure here is meant to
//! live on one thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use basics_common::Result;
use im::OrdMap;
use tracing::trace;

use crate::section_1::factorial;

// ============================================================================
// Counter and Multiplier
// ============================================================================

/// Returns a counter that increments and then reports its value.
///
/// # Example
/// ```
/// use basics::section_2::make_counter;
/// let mut counter = make_counter(0);
/// assert_eq!(counter(), 1);
/// assert_eq!(counter(), 2);
/// ```
pub fn make_counter(start: i64) -> impl FnMut() -> i64 {
    let mut count = start;
    move || {
        count = count.wrapping_add(1);
        count
    }
}

/// Returns `x -> x * factor`.
///
/// # Example
/// ```
/// use basics::section_2::make_multiplier;
/// let double = make_multiplier(2);
/// assert_eq!(double(5), 10);
/// ```
pub fn make_multiplier(factor: i64) -> impl Fn(i64) -> i64 {
    move |x| x.wrapping_mul(factor)
}

// ============================================================================
// Accumulator: three closures, one cell
// ============================================================================

/// Returns `(add, subtract, read)` over one shared integer.
///
/// All three closures hold a clone of the same `Rc<Cell<i64>>`, so every
/// mutation through `add` or `subtract` is seen by `read`.
///
/// # Example
/// ```
/// use basics::section_2::make_accumulator;
/// let (add, subtract, read) = make_accumulator(100);
/// add(50);
/// subtract(30);
/// assert_eq!(read(), 120);
/// ```
pub fn make_accumulator(initial: i64) -> (impl Fn(i64), impl Fn(i64), impl Fn() -> i64) {
    let value = Rc::new(Cell::new(initial));

    let cell = Rc::clone(&value);
    let add = move |x: i64| cell.set(cell.get().wrapping_add(x));

    let cell = Rc::clone(&value);
    let subtract = move |x: i64| cell.set(cell.get().wrapping_sub(x));

    let read = move || value.get();

    (add, subtract, read)
}

// ============================================================================
// Memoized factorial
// ============================================================================

/// Factorial with a cache of every successful result.
///
/// The cache only grows: entries are never evicted. Failed calls are not
/// cached. [`computations`](Self::computations) counts cache misses, which
/// makes the "second call does not recompute" property observable.
///
/// # Example
/// ```
/// use basics::section_2::MemoizedFactorial;
///
/// let memo = MemoizedFactorial::new();
/// assert_eq!(memo.call(5), Ok(120));
/// assert_eq!(memo.call(5), Ok(120));
/// assert_eq!(memo.computations(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoizedFactorial {
    cache: RefCell<OrdMap<i64, i64>>,
    computations: Cell<u64>,
}

impl MemoizedFactorial {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `n!`, from the cache when `n` was seen before.
    pub fn call(&self, n: i64) -> Result<i64> {
        if let Some(&cached) = self.cache.borrow().get(&n) {
            trace!(n, "memo hit");
            return Ok(cached);
        }

        trace!(n, "memo miss");
        let result = factorial(n)?;
        self.computations.set(self.computations.get() + 1);
        self.cache.borrow_mut().insert(n, result);
        Ok(result)
    }

    /// Number of calls that ran `factorial` instead of reading the cache.
    pub fn computations(&self) -> u64 {
        self.computations.get()
    }

    /// Number of distinct inputs cached so far.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Snapshot of the cached `(n, n!)` entries, ordered by `n`.
    ///
    /// Cloning an `OrdMap` shares structure, so this is O(1) and later
    /// calls do not change the snapshot.
    pub fn cache(&self) -> OrdMap<i64, i64> {
        self.cache.borrow().clone()
    }
}

/// Closure form of [`MemoizedFactorial`].
///
/// # Example
/// ```
/// use basics::section_2::make_memoized_factorial;
/// let fact = make_memoized_factorial();
/// assert_eq!(fact(5), Ok(120));
/// assert!(fact(-1).is_err());
/// ```
pub fn make_memoized_factorial() -> impl Fn(i64) -> Result<i64> {
    let memo = MemoizedFactorial::new();
    move |n: i64| memo.call(n)
}

/// Prints the closures section of the tour.
pub fn demonstrate_closures() {
    println!("\n=== Closures ===");

    let mut counter = make_counter(0);
    let mut other = make_counter(100);
    let first = counter();
    let second = counter();
    println!("counter from 0: {first}, {second}");
    println!("independent counter from 100: {}", other());

    let double = make_multiplier(2);
    println!("double(5) = {}", double(5));

    let (add, subtract, read) = make_accumulator(100);
    add(50);
    subtract(30);
    println!("accumulator 100 + 50 - 30 = {}", read());

    let memo = MemoizedFactorial::new();
    for n in [5, 5, 10, -1] {
        match memo.call(n) {
            Ok(value) => println!("memoized factorial({n}) = {value}"),
            Err(e) => println!("memoized factorial({n}) failed: {e}"),
        }
    }
    println!(
        "memo computed {} times for {} cached entries: {:?}",
        memo.computations(),
        memo.cache_len(),
        memo.cache()
    );
}
