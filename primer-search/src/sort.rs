//! In-place ascending sorts.
//!
//! | Sort | Time | Stable |
//! |------|------|--------|
//! | [`bubble_sort`] | O(n²), O(n) if already sorted | yes |
//! | [`selection_sort`] | O(n²) | no |
//! | [`insertion_sort`] | O(n²), O(n) if already sorted | yes |
//! | [`merge_sort`] | O(n log n), O(n) scratch | yes |
//! | [`quick_sort`] | O(n log n) average, O(n²) worst | no |

/// Swaps adjacent out-of-order pairs, stopping after a pass with no swaps.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut unsorted = arr.len();
    while unsorted > 1 {
        let mut swapped = false;
        for i in 1..unsorted {
            if arr[i - 1] > arr[i] {
                arr.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        unsorted -= 1;
    }
}

/// Moves the smallest remaining element to the front of the unsorted tail.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        let mut min = i;
        for j in i + 1..arr.len() {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}

/// Shifts each element left past every larger predecessor.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Top-down merge sort. Equal elements keep their relative order.
///
/// # Example
///
/// ```
/// use primer_search::merge_sort;
///
/// let mut pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// merge_sort(&mut pairs);
/// assert_eq!(pairs, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);

    let mut merged = Vec::with_capacity(arr.len());
    {
        let (left, right) = arr.split_at(mid);
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            // Left wins ties.
            if right[j] < left[i] {
                merged.push(right[j].clone());
                j += 1;
            } else {
                merged.push(left[i].clone());
                i += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }
    arr.clone_from_slice(&merged);
}

/// Quicksort with a Lomuto partition around the last element.
///
/// Recurses into the shorter side and loops on the longer, so call depth
/// stays O(log n) even on sorted input.
pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    let mut arr = arr;
    while arr.len() > 1 {
        let pivot = lomuto_partition(arr);
        let (left, right) = core::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            arr = right;
        } else {
            quick_sort(right);
            arr = left;
        }
    }
}

/// Partitions around `arr[len - 1]` and returns the pivot's final index.
/// Everything before it is `<=` the pivot, everything after is `>`.
fn lomuto_partition<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if arr[i] <= arr[last] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    type SortFn = fn(&mut [i32]);

    const SORTS: [(&str, SortFn); 5] = [
        ("bubble", bubble_sort),
        ("selection", selection_sort),
        ("insertion", insertion_sort),
        ("merge", merge_sort),
        ("quick", quick_sort),
    ];

    fn check(input: &[i32]) {
        let mut expected = input.to_vec();
        expected.sort_unstable();
        for (name, sort) in SORTS {
            let mut arr = input.to_vec();
            sort(&mut arr);
            assert_eq!(arr, expected, "{name} on {input:?}");
        }
    }

    #[test]
    fn sorts_small_inputs() {
        check(&[]);
        check(&[1]);
        check(&[2, 1]);
        check(&[64, 34, 25, 12, 22, 11, 90]);
        check(&[5, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]);
        check(&[-3, 0, -3, 7, -100, 7]);
    }

    #[test]
    fn sorts_presorted_and_reversed() {
        let asc: Vec<i32> = (0..500).collect();
        let desc: Vec<i32> = (0..500).rev().collect();
        check(&asc);
        check(&desc);
        check(&[4; 50]);
    }

    #[test]
    fn lomuto_places_pivot() {
        let mut arr = [3, 8, 1, 9, 5];
        let p = lomuto_partition(&mut arr);
        assert_eq!(arr[p], 5);
        assert!(arr[..p].iter().all(|&v| v <= 5));
        assert!(arr[p + 1..].iter().all(|&v| v > 5));
    }
}
