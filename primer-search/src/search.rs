//! Searches over sorted slices.
//!
//! Every function returns the index of a matching element, or `None` if the
//! target is absent. Apart from [`linear_search`], the input must be sorted
//! ascending; on unsorted input the result is unspecified but never a panic.
//!
//! On slices without duplicates all sorted-input searches agree. With
//! duplicates each returns *some* index holding the target.

use core::cmp::Ordering;
use core::ops::Range;

/// Scans front to back. Works on unsorted input. O(n).
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|v| v == target)
}

// ============================================================================
// Binary
// ============================================================================

/// Recursive binary search. O(log n) time and call depth.
///
/// # Example
///
/// ```
/// use primer_search::binary_search;
///
/// let arr = [2, 3, 4, 10, 40];
/// assert_eq!(binary_search(&arr, &10), Some(3));
/// assert_eq!(binary_search(&arr, &5), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    binary_search_range(arr, 0..arr.len(), target)
}

/// Recursive binary search restricted to `range`.
///
/// The range is clamped to the slice, so an oversized range cannot index
/// past the end. The returned index is relative to the whole slice.
pub fn binary_search_range<T: Ord>(arr: &[T], range: Range<usize>, target: &T) -> Option<usize> {
    let hi = range.end.min(arr.len());
    if range.start >= hi {
        return None;
    }
    // Midpoint of the inclusive interval [lo, hi - 1].
    let mid = range.start + (hi - 1 - range.start) / 2;
    match arr[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => binary_search_range(arr, range.start..mid, target),
        Ordering::Less => binary_search_range(arr, mid + 1..hi, target),
    }
}

/// Loop form of [`binary_search`]: same probes, constant stack.
pub fn binary_search_iterative<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, arr.len());
    while lo < hi {
        let mid = lo + (hi - 1 - lo) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => hi = mid,
            Ordering::Less => lo = mid + 1,
        }
    }
    None
}

// ============================================================================
// Exponential
// ============================================================================

/// Doubles a probe index while it stays at or below the target, then binary
/// searches the last doubling interval `[i / 2, min(i, n - 1)]`.
///
/// O(log i) where `i` is the target's position, which favours targets near
/// the front of long slices.
pub fn exponential_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    if arr[0] == *target {
        return Some(0);
    }

    let mut i = 1;
    while i < n && arr[i] <= *target {
        i *= 2;
    }
    binary_search_range(arr, i / 2..i.min(n - 1) + 1, target)
}

// ============================================================================
// Jump
// ============================================================================

/// Jumps ahead in blocks of `⌊√n⌋` until a block's last element reaches the
/// target, then scans that block linearly. O(√n).
pub fn jump_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    let step = n.isqrt();

    let mut prev = 0;
    let mut end = step;
    while arr[end.min(n) - 1] < *target {
        prev = end;
        end += step;
        if prev >= n {
            return None;
        }
    }

    while arr[prev] < *target {
        prev += 1;
        if prev == end.min(n) {
            return None;
        }
    }

    (arr[prev] == *target).then_some(prev)
}

// ============================================================================
// Ternary
// ============================================================================

/// Recursive ternary search: two probes split the interval into thirds and
/// both are checked before recursing into the third that can hold the
/// target. O(log₃ n) call depth.
///
/// # Example
///
/// ```
/// use primer_search::ternary_search;
///
/// let arr = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(ternary_search(&arr, &5), Some(4));
/// assert_eq!(ternary_search(&arr, &11), None);
/// ```
pub fn ternary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    ternary_search_in(arr, 0, arr.len(), target)
}

/// Searches the half-open interval `[lo, hi)`.
fn ternary_search_in<T: Ord>(arr: &[T], lo: usize, hi: usize, target: &T) -> Option<usize> {
    if lo >= hi {
        return None;
    }
    let last = hi - 1;
    let third = (last - lo) / 3;
    let mid1 = lo + third;
    let mid2 = last - third;

    if arr[mid1] == *target {
        return Some(mid1);
    }
    if arr[mid2] == *target {
        return Some(mid2);
    }

    if *target < arr[mid1] {
        ternary_search_in(arr, lo, mid1, target)
    } else if *target > arr[mid2] {
        ternary_search_in(arr, mid2 + 1, hi, target)
    } else {
        ternary_search_in(arr, mid1 + 1, mid2, target)
    }
}

// ============================================================================
// Interpolation
// ============================================================================

/// Probes where the target would sit if values were evenly spread between
/// the interval's endpoints.
///
/// O(log log n) on uniformly distributed keys, O(n) in the worst case.
/// Arithmetic is widened to `i128`, so extreme values cannot overflow.
pub fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0, arr.len() - 1);

    while lo <= hi && target >= arr[lo] && target <= arr[hi] {
        if arr[hi] == arr[lo] {
            // Target lies between two equal endpoints, so it equals them.
            return Some(lo);
        }

        let span = i128::from(arr[hi]) - i128::from(arr[lo]);
        let offset = (i128::from(target) - i128::from(arr[lo])) * (hi - lo) as i128 / span;
        let pos = lo + offset as usize;

        match arr[pos].cmp(&target) {
            Ordering::Equal => return Some(pos),
            Ordering::Less => lo = pos + 1,
            Ordering::Greater => {
                if pos == 0 {
                    return None;
                }
                hi = pos - 1;
            }
        }
    }
    None
}

// ============================================================================
// Fibonacci
// ============================================================================

/// Narrows the interval by Fibonacci numbers instead of halves, probing with
/// additions only. O(log n).
pub fn fibonacci_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }

    // Invariant: fib2, fib1, fib are consecutive Fibonacci numbers.
    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib2 + fib1;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib2 + fib1;
    }

    // Count of leading elements known to be below the target.
    let mut eliminated = 0;
    while fib > 1 {
        let i = (eliminated + fib2 - 1).min(n - 1);
        match arr[i].cmp(target) {
            Ordering::Less => {
                fib = fib1;
                fib1 = fib2;
                fib2 = fib - fib1;
                eliminated = i + 1;
            }
            Ordering::Greater => {
                fib = fib2;
                fib1 -= fib2;
                fib2 = fib - fib1;
            }
            Ordering::Equal => return Some(i),
        }
    }

    (fib1 == 1 && eliminated < n && arr[eliminated] == *target).then_some(eliminated)
}
