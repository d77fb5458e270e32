//! Bubble sort with early exit

use std::cmp::Ordering;

use super::SortStats;

/// Adjacent-swap passes; stops after the first pass with no swap
pub fn bubble_sort<T, F>(items: &mut [T], cmp: &mut F, stats: &mut SortStats)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = items.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        stats.passes += 1;
        let mut swapped = false;

        for j in 0..n - 1 - i {
            stats.comparisons += 1;
            // Strictly greater only, so equal elements never swap
            if cmp(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
                stats.moves += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
