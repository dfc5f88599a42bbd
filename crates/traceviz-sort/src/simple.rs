//! The three quadratic sorts: bubble, selection, insertion.

use traceviz_step::sort::SortStep;

use crate::all_sorted;

/// Bubble sort: repeated adjacent-pair comparison with early exit on a
/// pass that performs no swap.
pub fn bubble_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    steps.push(SortStep::snapshot(
        &array,
        "Starting Bubble Sort - comparing adjacent elements",
    ));

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - i - 1 {
            steps.push(SortStep {
                comparing: Some(vec![j, j + 1]),
                ..SortStep::snapshot(
                    &array,
                    format!(
                        "Comparing elements at positions {j} ({}) and {} ({})",
                        array[j],
                        j + 1,
                        array[j + 1]
                    ),
                )
            });

            if array[j] > array[j + 1] {
                let (larger, smaller) = (array[j], array[j + 1]);
                array.swap(j, j + 1);
                swapped = true;

                steps.push(SortStep {
                    swapping: Some(vec![j, j + 1]),
                    ..SortStep::snapshot(
                        &array,
                        format!("Swapping {larger} and {smaller} because {smaller} < {larger}"),
                    )
                });
            }
        }

        steps.push(SortStep {
            sorted: Some(((n - 1 - i)..n).collect()),
            ..SortStep::snapshot(
                &array,
                format!(
                    "Pass {} complete. Element at position {} is in its final position",
                    i + 1,
                    n - 1 - i
                ),
            )
        });

        if !swapped {
            break;
        }
    }

    steps.push(all_sorted(&array, "Bubble Sort complete! Array is now sorted."));
    steps
}

/// Selection sort: find the minimum of the unsorted suffix, swap it to the
/// front of that suffix.
pub fn selection_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    steps.push(SortStep::snapshot(
        &array,
        "Starting Selection Sort - finding minimum element in each pass",
    ));

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;

        steps.push(SortStep {
            comparing: Some(vec![min_idx]),
            ..SortStep::snapshot(
                &array,
                format!(
                    "Pass {}: Finding minimum element from position {i} to {}",
                    i + 1,
                    n - 1
                ),
            )
        });

        for j in (i + 1)..n {
            steps.push(SortStep {
                comparing: Some(vec![min_idx, j]),
                ..SortStep::snapshot(
                    &array,
                    format!("Comparing current minimum {} with {}", array[min_idx], array[j]),
                )
            });

            if array[j] < array[min_idx] {
                min_idx = j;
                steps.push(SortStep {
                    comparing: Some(vec![min_idx]),
                    ..SortStep::snapshot(
                        &array,
                        format!("New minimum found: {} at position {min_idx}", array[min_idx]),
                    )
                });
            }
        }

        if min_idx != i {
            array.swap(i, min_idx);
            steps.push(SortStep {
                swapping: Some(vec![i, min_idx]),
                ..SortStep::snapshot(
                    &array,
                    format!(
                        "Swapping {} with {} to place minimum at position {i}",
                        array[i], array[min_idx]
                    ),
                )
            });
        }

        steps.push(SortStep {
            sorted: Some((0..=i).collect()),
            ..SortStep::snapshot(
                &array,
                format!("Element at position {i} is now in its final sorted position"),
            )
        });
    }

    steps.push(all_sorted(&array, "Selection Sort complete! Array is now sorted."));
    steps
}

/// Insertion sort: grow a sorted prefix by shifting larger elements right
/// and dropping each key into its slot.
pub fn insertion_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    steps.push(SortStep {
        sorted: if n > 0 { Some(vec![0]) } else { None },
        ..SortStep::snapshot(
            &array,
            "Starting Insertion Sort - first element is considered sorted",
        )
    });

    for i in 1..n {
        let key = array[i];
        // j is the slot the key will land in once shifting stops.
        let mut j = i;

        steps.push(SortStep {
            comparing: Some(vec![i]),
            sorted: Some((0..i).collect()),
            ..SortStep::snapshot(
                &array,
                format!("Inserting element {key} from position {i} into sorted portion"),
            )
        });

        while j > 0 && array[j - 1] > key {
            steps.push(SortStep {
                comparing: Some(vec![j - 1, j]),
                ..SortStep::snapshot(
                    &array,
                    format!("{} > {key}, shifting {} to the right", array[j - 1], array[j - 1]),
                )
            });

            array[j] = array[j - 1];
            j -= 1;

            steps.push(SortStep {
                comparing: Some(vec![j, j + 1]),
                ..SortStep::snapshot(
                    &array,
                    format!("Shifted {} to position {}", array[j + 1], j + 1),
                )
            });
        }

        array[j] = key;

        steps.push(SortStep {
            sorted: Some((0..=i).collect()),
            ..SortStep::snapshot(
                &array,
                format!(
                    "Inserted {key} at position {j}. First {} elements are now sorted",
                    i + 1
                ),
            )
        });
    }

    steps.push(all_sorted(&array, "Insertion Sort complete! Array is now sorted."));
    steps
}
