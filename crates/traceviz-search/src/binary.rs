use traceviz_step::search::SearchStep;

/// Binary search over a sorted copy of the input. The engine sorts
/// internally, so every index in the trace refers to the sorted order, not
/// the order the caller passed in.
pub fn binary_trace(sequence: &[i64], target: i64) -> Vec<SearchStep> {
    let mut array = sequence.to_vec();
    array.sort_unstable();

    let mut steps = Vec::new();
    let mut left: i64 = 0;
    let mut right: i64 = array.len() as i64 - 1;

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
                format!("Checking middle element at index {mid} ({value}) with target {target}"),
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
            return steps;
        } else if value < target {
            left = mid + 1;
            steps.push(SearchStep {
                current_element: Some(value),
                left: Some(left),
                right: Some(right),
                mid: Some(mid),
                ..SearchStep::new(mid, false, false, format!("{value} < {target}, searching right half"))
            });
        } else {
            right = mid - 1;
            steps.push(SearchStep {
                current_element: Some(value),
                left: Some(left),
                right: Some(right),
                mid: Some(mid),
                ..SearchStep::new(mid, false, false, format!("{value} > {target}, searching left half"))
            });
        }
    }

    steps.push(SearchStep {
        left: Some(left),
        right: Some(right),
        ..SearchStep::miss(format!("Target {target} not found in the array"))
    });
    steps
}
