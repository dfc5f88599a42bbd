//! Merge sort with stable two-run merging.

use traceviz_step::sort::SortStep;

use crate::all_sorted;

/// Merge sort: split at `floor((left + right) / 2)`, recurse both halves,
/// then merge. The merge favors the left run on ties, keeping it stable.
pub fn merge_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    steps.push(SortStep::snapshot(
        &array,
        "Starting Merge Sort - dividing array into smaller subarrays",
    ));

    if n > 1 {
        split(&mut array, 0, n - 1, &mut steps);
    }

    steps.push(all_sorted(&array, "Merge Sort complete! Array is now sorted."));
    steps
}

fn split(array: &mut [i64], left: usize, right: usize, steps: &mut Vec<SortStep>) {
    if left < right {
        let mid = (left + right) / 2;

        steps.push(SortStep {
            left: Some(left),
            right: Some(right),
            mid: Some(mid),
            ..SortStep::snapshot(
                array,
                format!("Dividing array from {left} to {right}. Mid point: {mid}"),
            )
        });

        split(array, left, mid, steps);
        split(array, mid + 1, right, steps);
        merge(array, left, mid, right, steps);
    }
}

fn merge(array: &mut [i64], left: usize, mid: usize, right: usize, steps: &mut Vec<SortStep>) {
    let left_run = array[left..=mid].to_vec();
    let right_run = array[mid + 1..=right].to_vec();

    steps.push(SortStep {
        comparing: Some((left..=right).collect()),
        ..SortStep::snapshot(
            array,
            format!("Merging subarrays [{left}-{mid}] and [{}-{right}]", mid + 1),
        )
    });

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        if left_run[i] <= right_run[j] {
            array[k] = left_run[i];
            i += 1;
        } else {
            array[k] = right_run[j];
            j += 1;
        }

        steps.push(SortStep {
            comparing: Some(vec![k]),
            ..SortStep::snapshot(array, format!("Placed {} at position {k}", array[k]))
        });

        k += 1;
    }

    while i < left_run.len() {
        array[k] = left_run[i];
        steps.push(SortStep {
            comparing: Some(vec![k]),
            ..SortStep::snapshot(
                array,
                format!("Copying remaining element {} to position {k}", array[k]),
            )
        });
        i += 1;
        k += 1;
    }

    while j < right_run.len() {
        array[k] = right_run[j];
        steps.push(SortStep {
            comparing: Some(vec![k]),
            ..SortStep::snapshot(
                array,
                format!("Copying remaining element {} to position {k}", array[k]),
            )
        });
        j += 1;
        k += 1;
    }
}
