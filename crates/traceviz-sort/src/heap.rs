//! Heap sort over an in-place max-heap.

use traceviz_step::sort::SortStep;

use crate::all_sorted;

/// Heap sort: build a max-heap bottom-up (`floor(n/2) - 1` down to 0),
/// then repeatedly swap the root with the last unsorted element and
/// re-heapify the shrinking heap region.
pub fn heap_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    steps.push(SortStep::snapshot(
        &array,
        "Starting Heap Sort - building max heap from the array",
    ));

    for i in (0..n / 2).rev() {
        heapify(&mut array, n, i, &mut steps);
    }

    steps.push(SortStep::snapshot(
        &array,
        "Max heap built. Now extracting elements one by one",
    ));

    for i in (1..n).rev() {
        array.swap(0, i);
        steps.push(SortStep {
            swapping: Some(vec![0, i]),
            heap_size: Some(i),
            ..SortStep::snapshot(
                &array,
                format!("Moving maximum element {} to position {i}", array[i]),
            )
        });

        heapify(&mut array, i, 0, &mut steps);

        steps.push(SortStep {
            sorted: Some((i..n).collect()),
            heap_size: Some(i),
            ..SortStep::snapshot(
                &array,
                format!("Element at position {i} is now in its final position"),
            )
        });
    }

    steps.push(all_sorted(&array, "Heap Sort complete! Array is now sorted."));
    steps
}

fn heapify(array: &mut [i64], heap_size: usize, root: usize, steps: &mut Vec<SortStep>) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    steps.push(SortStep {
        comparing: Some(vec![root]),
        heap_size: Some(heap_size),
        ..SortStep::snapshot(
            array,
            format!("Heapifying at root {root}. Checking children at {left} and {right}"),
        )
    });

    if left < heap_size && array[left] > array[largest] {
        largest = left;
    }
    if right < heap_size && array[right] > array[largest] {
        largest = right;
    }

    if largest != root {
        array.swap(root, largest);
        steps.push(SortStep {
            swapping: Some(vec![root, largest]),
            heap_size: Some(heap_size),
            ..SortStep::snapshot(
                array,
                format!(
                    "Swapping {} with {} to maintain heap property",
                    array[root], array[largest]
                ),
            )
        });

        heapify(array, heap_size, largest, steps);
    }
}
