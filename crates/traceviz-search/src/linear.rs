use traceviz_step::search::SearchStep;

/// Linear search: one comparison step per element, a success step on the
/// first match, a single failure step if the sequence is exhausted.
pub fn linear_trace(sequence: &[i64], target: i64) -> Vec<SearchStep> {
    let mut steps = Vec::new();

    for (i, &value) in sequence.iter().enumerate() {
        steps.push(SearchStep {
            current_element: Some(value),
            ..SearchStep::new(
                i as i64,
                true,
                value == target,
                format!("Comparing element at index {i} ({value}) with target {target}"),
            )
        });

        if value == target {
            steps.push(SearchStep {
                current_element: Some(value),
                ..SearchStep::new(i as i64, false, true, format!("Found target {target} at index {i}!"))
            });
            return steps;
        }
    }

    steps.push(SearchStep::miss(format!("Target {target} not found in the array")));
    steps
}
