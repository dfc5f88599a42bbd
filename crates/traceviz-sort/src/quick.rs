//! Quick sort with Lomuto partitioning.

use traceviz_step::sort::SortStep;

use crate::all_sorted;

/// Quick sort: the pivot is the last element of each partition range,
/// elements smaller than the pivot are swapped into a growing left region,
/// and the left partition is recursed before the right.
pub fn quick_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    steps.push(SortStep::snapshot(
        &array,
        "Starting Quick Sort - dividing array using pivot elements",
    ));

    if n > 1 {
        sort_range(&mut array, 0, n - 1, &mut steps);
    }

    steps.push(all_sorted(&array, "Quick Sort complete! Array is now sorted."));
    steps
}

fn sort_range(array: &mut [i64], low: usize, high: usize, steps: &mut Vec<SortStep>) {
    if low < high {
        let pivot_index = partition(array, low, high, steps);
        if pivot_index > low {
            sort_range(array, low, pivot_index - 1, steps);
        }
        if pivot_index < high {
            sort_range(array, pivot_index + 1, high, steps);
        }
    }
}

/// Returns the final pivot position.
fn partition(array: &mut [i64], low: usize, high: usize, steps: &mut Vec<SortStep>) -> usize {
    let pivot = array[high];

    steps.push(SortStep {
        pivot: Some(high),
        left: Some(low),
        right: Some(high),
        ..SortStep::snapshot(
            array,
            format!("Partitioning array from {low} to {high}. Pivot: {pivot} at position {high}"),
        )
    });

    // Next slot of the growing "smaller than pivot" region.
    let mut slot = low;

    for j in low..high {
        steps.push(SortStep {
            comparing: Some(vec![j]),
            pivot: Some(high),
            ..SortStep::snapshot(array, format!("Comparing {} with pivot {pivot}", array[j]))
        });

        if array[j] < pivot {
            if slot != j {
                let moved = array[j];
                array.swap(slot, j);
                steps.push(SortStep {
                    swapping: Some(vec![slot, j]),
                    pivot: Some(high),
                    ..SortStep::snapshot(
                        array,
                        format!("{moved} < {pivot}, swapping positions {slot} and {j}"),
                    )
                });
            }
            slot += 1;
        }
    }

    array.swap(slot, high);
    steps.push(SortStep {
        swapping: Some(vec![slot, high]),
        ..SortStep::snapshot(
            array,
            format!("Placing pivot {pivot} at its correct position {slot}"),
        )
    });

    slot
}
