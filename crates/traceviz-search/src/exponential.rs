use traceviz_step::search::{SearchStep, NOT_FOUND};

/// Exponential search over a sorted sequence: check index 0, double a bound
/// while the element there is `<= target`, then binary-search the range
/// `[bound/2, min(bound, n-1)]`.
pub fn exponential_trace(sequence: &[i64], target: i64) -> Vec<SearchStep> {
    let mut steps = Vec::new();
    let n = sequence.len();

    if n == 0 {
        steps.push(SearchStep::miss(format!("Target {target} not found in the array")));
        return steps;
    }

    if sequence[0] == target {
        steps.push(SearchStep {
            current_element: Some(sequence[0]),
            ..SearchStep::new(0, true, true, format!("Found target {target} at index 0!"))
        });
        return steps;
    }

    let mut bound = 1;
    while bound < n && sequence[bound] <= target {
        steps.push(SearchStep {
            current_element: Some(sequence[bound]),
            ..SearchStep::new(
                bound as i64,
                true,
                false,
                format!("Exponential search: checking element at index {bound} ({})", sequence[bound]),
            )
        });
        bound *= 2;
    }

    let left = (bound / 2) as i64;
    let right = bound.min(n - 1) as i64;

    steps.push(SearchStep {
        left: Some(left),
        right: Some(right),
        ..SearchStep::new(
            NOT_FOUND,
            false,
            false,
            format!("Found range [{left}, {right}], now performing binary search"),
        )
    });

    bounded_binary(sequence, target, left, right, &mut steps);
    steps
}

fn bounded_binary(array: &[i64], target: i64, mut left: i64, mut right: i64, steps: &mut Vec<SearchStep>) {
    while left <= right {
        let mid = (left + right) / 2;
        let value = array[mid as usize];

        steps.push(SearchStep {
            current_element: Some(value),
            left: Some(left),
            right: Some(right),
            mid: Some(mid),
            ..SearchStep::new(
                mid,
                true,
                false,
                format!("Binary search: checking middle element at index {mid} ({value})"),
            )
        });

        if value == target {
            steps.push(SearchStep {
                current_element: Some(value),
                left: Some(left),
                right: Some(right),
                mid: Some(mid),
                ..SearchStep::new(mid, false, true, format!("Found target {target} at index {mid}!"))
            });
            return;
        } else if value < target {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }

    steps.push(SearchStep {
        left: Some(left),
        right: Some(right),
        ..SearchStep::miss(format!("Target {target} not found in the array"))
    });
}
