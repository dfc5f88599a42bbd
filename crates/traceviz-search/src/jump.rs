use traceviz_step::search::SearchStep;

/// Jump search over a sorted sequence: probe block boundaries at
/// `floor(sqrt(n))` intervals, then linear-scan the block that could hold
/// the target. Jumping past the end without finding a qualifying block
/// fails immediately.
pub fn jump_trace(sequence: &[i64], target: i64) -> Vec<SearchStep> {
    let mut steps = Vec::new();
    let n = sequence.len();

    if n == 0 {
        steps.push(SearchStep::miss(format!("Target {target} not found in the array")));
        return steps;
    }

    let jump_size = (n as f64).sqrt().floor() as usize;
    let mut prev = 0;
    let mut step = jump_size;

    while sequence[step.min(n) - 1] < target {
        let probe = step.min(n) - 1;
        steps.push(SearchStep {
            current_element: Some(sequence[probe]),
            jump_size: Some(jump_size),
            ..SearchStep::new(
                probe as i64,
                true,
                false,
                format!("Jumping: checking element at index {probe} ({})", sequence[probe]),
            )
        });

        prev = step;
        step += jump_size;

        if prev >= n {
            steps.push(SearchStep {
                jump_size: Some(jump_size),
                ..SearchStep::miss(format!("Target {target} not found in the array"))
            });
            return steps;
        }
    }

    for i in prev..step.min(n) {
        let value = sequence[i];
        steps.push(SearchStep {
            current_element: Some(value),
            jump_size: Some(jump_size),
            ..SearchStep::new(
                i as i64,
                true,
                value == target,
                format!(
                    "Linear search in block: comparing element at index {i} ({value}) with target {target}"
                ),
            )
        });

        if value == target {
            steps.push(SearchStep {
                current_element: Some(value),
                jump_size: Some(jump_size),
                ..SearchStep::new(i as i64, false, true, format!("Found target {target} at index {i}!"))
            });
            return steps;
        }
    }

    steps.push(SearchStep {
        jump_size: Some(jump_size),
        ..SearchStep::miss(format!("Target {target} not found in the array"))
    });
    steps
}
