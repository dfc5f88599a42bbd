use traceviz_step::recursion::{CallParams, RecursionStep, RecursionStepKind, TreeNode};

const X_STEP: i64 = 100;
const X_OFFSET: i64 = 300;
const Y_STEP: i64 = 80;
const Y_OFFSET: i64 = 50;

/// Naive recursive Fibonacci. Each invocation emits a `call` step on entry,
/// a `return` step when the base case `n <= 1` is hit, and a `calculation`
/// step once both sub-results are combined. Every step carries a call-tree
/// node laid out by binary-tree position.
pub fn fibonacci_trace(n: u32) -> Vec<RecursionStep> {
    let mut steps = Vec::new();
    let mut next_seq = 0;
    fib_helper(n, 0, 0, None, &mut next_seq, &mut steps);
    steps
}

fn tree_node(n: u32, depth: usize, position: u64, seq: u32, parent_id: Option<&str>) -> TreeNode {
    TreeNode {
        id: format!("{n}-{depth}-{seq}"),
        value: n,
        x: position as i64 * X_STEP + X_OFFSET,
        y: depth as i64 * Y_STEP + Y_OFFSET,
        parent_id: parent_id.map(str::to_owned),
    }
}

/// `position` is the node's index within its tree level; `next_seq` hands
/// out trace-unique node identifiers in call order.
fn fib_helper(
    n: u32,
    depth: usize,
    position: u64,
    parent_id: Option<&str>,
    next_seq: &mut u32,
    steps: &mut Vec<RecursionStep>,
) -> u64 {
    let seq = *next_seq;
    *next_seq += 1;

    let node = tree_node(n, depth, position, seq, parent_id);
    let id = node.id.clone();

    steps.push(RecursionStep {
        tree_node: Some(node.clone()),
        ..RecursionStep::new(
            RecursionStepKind::Call,
            "fibonacci",
            CallParams::Fibonacci { n },
            depth,
            format!("Calling fibonacci({n})"),
        )
    });

    if n <= 1 {
        steps.push(RecursionStep {
            current_value: Some(n as u64),
            return_value: Some(n as u64),
            tree_node: Some(node),
            ..RecursionStep::new(
                RecursionStepKind::Return,
                "fibonacci",
                CallParams::Fibonacci { n },
                depth,
                format!("Base case: fibonacci({n}) returns {n}"),
            )
        });
        return n as u64;
    }

    let left = fib_helper(n - 1, depth + 1, position * 2, Some(&id), next_seq, steps);
    let right = fib_helper(n - 2, depth + 1, position * 2 + 1, Some(&id), next_seq, steps);
    let result = left + right;

    steps.push(RecursionStep {
        current_value: Some(result),
        return_value: Some(result),
        tree_node: Some(node),
        ..RecursionStep::new(
            RecursionStepKind::Calculation,
            "fibonacci",
            CallParams::Fibonacci { n },
            depth,
            format!(
                "fibonacci({n}) = fibonacci({}) + fibonacci({}) = {left} + {right} = {result}",
                n - 1,
                n - 2
            ),
        )
    });

    result
}
