//! Insertion sort

use std::cmp::Ordering;

use super::SortStats;

/// Grows a sorted prefix, shifting larger elements right by one
pub fn insertion_sort<T, F>(items: &mut [T], cmp: &mut F, stats: &mut SortStats)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        stats.passes += 1;

        // Find the slot for items[i] inside the sorted prefix items[..i]
        let mut slot = i;
        while slot > 0 {
            stats.comparisons += 1;
            if cmp(&items[slot - 1], &items[i]) == Ordering::Greater {
                slot -= 1;
            } else {
                break;
            }
        }

        if slot < i {
            items[slot..=i].rotate_right(1);
            stats.moves += i - slot;
        }
    }
}
