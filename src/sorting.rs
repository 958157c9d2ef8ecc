//! Back-to-front depth ordering for the painter's algorithm.
//!
//! Faces are ordered by ascending depth key, so the farthest face comes first
//! and nearer faces paint over it. The routine is a quicksort with Lomuto
//! partitioning around the last element; it is not stable, and ties keep
//! whatever order the partitioning leaves them in.

/// Sorts `items` in place by ascending `depth`.
///
/// Time complexity: O(n log n) average, O(n²) worst case
/// Space complexity: O(log n) stack, recursing only into the smaller half
///
/// An already ascending slice is left untouched. NaN keys never compare
/// `<=`, so they gather at pivot positions instead of panicking.
pub fn sort_by_depth<T, F>(items: &mut [T], depth: F)
where
    F: Fn(&T) -> f32,
{
    let keys: Vec<f32> = items.iter().map(&depth).collect();
    let mut order: Vec<usize> = (0..items.len()).collect();
    quicksort(&mut order, &keys);
    apply_permutation(items, &order);
}

/// Returns the indices of `keys` in back-to-front order.
pub fn depth_order(keys: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    quicksort(&mut order, keys);
    order
}

fn quicksort(order: &mut [usize], keys: &[f32]) {
    let mut slice = order;
    while slice.len() > 1 {
        let pivot = partition(slice, keys);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left, keys);
            slice = right;
        } else {
            quicksort(right, keys);
            slice = left;
        }
    }
}

/// Lomuto partition: everything with key `<=` the last element's key moves to
/// the front, then the pivot is swapped in after them. Returns the pivot index.
fn partition(order: &mut [usize], keys: &[f32]) -> usize {
    let end = order.len() - 1;
    let pivot_key = keys[order[end]];
    let mut store = 0;
    for j in 0..end {
        if keys[order[j]] <= pivot_key {
            order.swap(store, j);
            store += 1;
        }
    }
    order.swap(store, end);
    store
}

/// Reorders `items` so that `items[i]` becomes the old `items[order[i]]`.
fn apply_permutation<T>(items: &mut [T], order: &[usize]) {
    let mut placed = vec![false; items.len()];
    for start in 0..items.len() {
        if placed[start] {
            continue;
        }
        // Walk the cycle starting at `start`, pulling each source into place.
        let mut current = start;
        loop {
            placed[current] = true;
            let source = order[current];
            if placed[source] {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
