//! The non-comparison sorts: counting, radix, and bucket.

use traceviz_step::sort::SortStep;

use crate::all_sorted;

fn value_range(array: &[i64]) -> (i64, i64) {
    let mut min = array[0];
    let mut max = array[0];
    for &value in array {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}

/// Width of the closed value range `[min, max]`, computed in `i128` so
/// extreme inputs cannot wrap. The span must fit in `i64`: the advisory
/// input caps bound sequence length, not element magnitude, so that bound
/// is on the caller.
fn value_span(min: i64, max: i64) -> usize {
    let span = max as i128 - min as i128 + 1;
    debug_assert!(span <= i64::MAX as i128, "value span {span} exceeds the supported range");
    span as usize
}

/// Counting sort: count occurrences over the `max - min + 1` value range,
/// then place elements in a stable backward output pass. Negative values
/// are handled by the `min` shift; the value span must fit in `i64` (see
/// `value_span`).
pub fn counting_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    if n == 0 {
        steps.push(SortStep::snapshot(&array, "Starting Counting Sort on an empty array"));
        steps.push(all_sorted(&array, "Counting Sort complete! Array is now sorted."));
        return steps;
    }

    let (min, max) = value_range(&array);
    let range = value_span(min, max);

    steps.push(SortStep::snapshot(
        &array,
        format!("Starting Counting Sort. Range: {min} to {max}"),
    ));

    let mut count = vec![0usize; range];
    for i in 0..n {
        count[(array[i] - min) as usize] += 1;
        steps.push(SortStep {
            comparing: Some(vec![i]),
            count_array: Some(count.clone()),
            ..SortStep::snapshot(&array, format!("Counting element {} at position {i}", array[i]))
        });
    }

    steps.push(SortStep {
        count_array: Some(count.clone()),
        ..SortStep::snapshot(&array, "Count array created. Now building the sorted array")
    });

    // Prefix sums turn counts into one-past-the-end placement positions.
    for i in 1..range {
        count[i] += count[i - 1];
    }

    // Unplaced output slots read as 0 until the backward pass fills them.
    let mut output = vec![0i64; n];
    for i in (0..n).rev() {
        let bucket = (array[i] - min) as usize;
        count[bucket] -= 1;
        output[count[bucket]] = array[i];
        steps.push(SortStep {
            comparing: Some(vec![count[bucket]]),
            ..SortStep::snapshot(
                &output,
                format!("Placing {} at position {}", array[i], count[bucket]),
            )
        });
    }

    array.copy_from_slice(&output);

    steps.push(all_sorted(&array, "Counting Sort complete! Array is now sorted."));
    steps
}

/// Radix sort: least-significant digit first, base 10, one counting pass
/// per digit. Defined for non-negative input.
pub fn radix_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    if n == 0 {
        steps.push(SortStep::snapshot(&array, "Starting Radix Sort on an empty array"));
        steps.push(all_sorted(&array, "Radix Sort complete! Array is now sorted."));
        return steps;
    }

    let (_, max) = value_range(&array);

    steps.push(SortStep::snapshot(
        &array,
        format!("Starting Radix Sort. Maximum number: {max}"),
    ));

    let mut exp: i64 = 1;
    let mut digit: u32 = 0;
    while max / exp > 0 {
        counting_pass_by_digit(&mut array, exp, digit, &mut steps);
        exp *= 10;
        digit += 1;
    }

    steps.push(all_sorted(&array, "Radix Sort complete! Array is now sorted."));
    steps
}

fn counting_pass_by_digit(array: &mut [i64], exp: i64, digit: u32, steps: &mut Vec<SortStep>) {
    let n = array.len();
    let mut count = [0usize; 10];

    steps.push(SortStep {
        digit: Some(digit),
        ..SortStep::snapshot(array, format!("Sorting by digit at position {digit} (10^{digit})"))
    });

    for i in 0..n {
        let d = (array[i] / exp).rem_euclid(10) as usize;
        count[d] += 1;
        steps.push(SortStep {
            comparing: Some(vec![i]),
            digit: Some(digit),
            ..SortStep::snapshot(array, format!("Counting digit {d} from number {}", array[i]))
        });
    }

    for i in 1..10 {
        count[i] += count[i - 1];
    }

    let mut output = vec![0i64; n];
    for i in (0..n).rev() {
        let d = (array[i] / exp).rem_euclid(10) as usize;
        count[d] -= 1;
        output[count[d]] = array[i];
    }
    array.copy_from_slice(&output);

    steps.push(SortStep {
        digit: Some(digit),
        ..SortStep::snapshot(array, format!("Completed sorting by digit at position {digit}"))
    });
}

/// Bucket sort: `floor(sqrt(n))` buckets spanning the value range, each
/// sorted independently and concatenated in bucket order. The value span
/// must fit in `i64` (see `value_span`).
pub fn bucket_trace(input: &[i64]) -> Vec<SortStep> {
    let mut steps = Vec::new();
    let mut array = input.to_vec();
    let n = array.len();

    if n == 0 {
        steps.push(SortStep::snapshot(&array, "Starting Bucket Sort on an empty array"));
        steps.push(all_sorted(&array, "Bucket Sort complete! Array is now sorted."));
        return steps;
    }

    let (min, max) = value_range(&array);
    let bucket_count = ((n as f64).sqrt().floor() as usize).max(1);
    let span = value_span(min, max);
    let bucket_size = span.div_ceil(bucket_count);

    steps.push(SortStep::snapshot(
        &array,
        format!("Starting Bucket Sort with {bucket_count} buckets"),
    ));

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); bucket_count];

    for i in 0..n {
        // Clamp so the maximum value lands in the last bucket.
        let index = ((array[i] - min) as usize / bucket_size).min(bucket_count - 1);
        buckets[index].push(array[i]);

        steps.push(SortStep {
            comparing: Some(vec![i]),
            buckets: Some(buckets.clone()),
            ..SortStep::snapshot(&array, format!("Placing {} into bucket {index}", array[i]))
        });
    }

    steps.push(SortStep {
        buckets: Some(buckets.clone()),
        ..SortStep::snapshot(
            &array,
            "All elements distributed into buckets. Now sorting individual buckets",
        )
    });

    let mut write = 0;
    for b in 0..bucket_count {
        if buckets[b].is_empty() {
            continue;
        }
        buckets[b].sort_unstable();

        for j in 0..buckets[b].len() {
            array[write] = buckets[b][j];
            write += 1;
        }

        steps.push(SortStep {
            buckets: Some(buckets.clone()),
            ..SortStep::snapshot(&array, format!("Sorted bucket {b} and merged back to array"))
        });
    }

    steps.push(all_sorted(&array, "Bucket Sort complete! Array is now sorted."));
    steps
}
