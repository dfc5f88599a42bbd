use std::collections::HashSet;

use traceviz_recursion::{execute, fibonacci_trace, hanoi_trace, RecursionKind};
use traceviz_step::recursion::{CallParams, RecursionStepKind};

fn fib(n: u64) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

#[test]
fn test_fibonacci_root_return_value_is_correct() {
    for n in 0..=10 {
        let steps = fibonacci_trace(n);
        let last = steps.last().unwrap();
        assert_eq!(last.stack_depth, 0, "final step belongs to the root call");
        assert_eq!(last.return_value, Some(fib(n as u64)), "fibonacci({n})");
    }
}

#[test]
fn test_fibonacci_base_case_trace_shape() {
    let steps = fibonacci_trace(1);
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].kind, RecursionStepKind::Call);
    assert_eq!(steps[1].kind, RecursionStepKind::Return);
    assert_eq!(steps[1].current_value, Some(1));
}

#[test]
fn test_fibonacci_step_sequence_for_three() {
    let steps = fibonacci_trace(3);
    let kinds: Vec<RecursionStepKind> = steps.iter().map(|step| step.kind).collect();
    use RecursionStepKind::{Calculation, Call, Return};
    assert_eq!(
        kinds,
        vec![Call, Call, Call, Return, Call, Return, Calculation, Call, Return, Calculation]
    );
    assert_eq!(steps.last().unwrap().return_value, Some(2));
}

#[test]
fn test_fibonacci_parameters_carry_n() {
    let steps = fibonacci_trace(2);
    assert_eq!(steps[0].parameters, CallParams::Fibonacci { n: 2 });
    assert_eq!(steps[1].parameters, CallParams::Fibonacci { n: 1 });
}

#[test]
fn test_fibonacci_tree_node_ids_are_unique_per_call() {
    let steps = fibonacci_trace(6);
    let call_ids: Vec<&str> = steps
        .iter()
        .filter(|step| step.kind == RecursionStepKind::Call)
        .filter_map(|step| step.tree_node.as_ref())
        .map(|node| node.id.as_str())
        .collect();
    let unique: HashSet<&str> = call_ids.iter().copied().collect();
    assert_eq!(unique.len(), call_ids.len());
}

#[test]
fn test_fibonacci_tree_layout_positions() {
    let steps = fibonacci_trace(3);
    let root = steps[0].tree_node.as_ref().unwrap();
    assert_eq!((root.x, root.y), (300, 50));
    assert!(root.parent_id.is_none());

    // The root's children occupy level-1 positions 0 and 1.
    let children: Vec<_> = steps
        .iter()
        .filter(|step| step.kind == RecursionStepKind::Call)
        .filter_map(|step| step.tree_node.as_ref())
        .filter(|node| node.parent_id.as_deref() == Some(root.id.as_str()))
        .collect();
    assert_eq!(children.len(), 2);
    assert_eq!((children[0].x, children[0].y), (300, 130));
    assert_eq!((children[1].x, children[1].y), (400, 130));
}

#[test]
fn test_fibonacci_is_deterministic() {
    assert_eq!(fibonacci_trace(7), fibonacci_trace(7));
}

#[test]
fn test_hanoi_move_count_is_two_to_the_n_minus_one() {
    for n in 1..=6u32 {
        let steps = hanoi_trace(n);
        let state = steps.last().unwrap().hanoi_state.as_ref().unwrap();
        assert_eq!(state.move_count, 2u64.pow(n) - 1, "hanoi({n})");
    }
}

#[test]
fn test_hanoi_moves_every_disk_to_the_last_tower() {
    for n in 1..=6u32 {
        let steps = hanoi_trace(n);
        let state = steps.last().unwrap().hanoi_state.as_ref().unwrap();
        assert!(state.towers[0].is_empty());
        assert!(state.towers[1].is_empty());
        let expected: Vec<u32> = (1..=n).rev().collect();
        assert_eq!(state.towers[2], expected, "largest disk stays at the bottom");
    }
}

#[test]
fn test_hanoi_setup_step_shows_all_disks_on_tower_a() {
    let steps = hanoi_trace(3);
    let first = &steps[0];
    assert_eq!(first.kind, RecursionStepKind::Call);
    assert_eq!(
        first.parameters,
        CallParams::Hanoi { disks: 3, from: 0, to: 2, aux: 1 }
    );
    let state = first.hanoi_state.as_ref().unwrap();
    assert_eq!(state.towers[0], vec![3, 2, 1]);
    assert_eq!(state.move_count, 0);
}

#[test]
fn test_hanoi_emits_one_move_step_per_move() {
    let steps = hanoi_trace(4);
    let moves = steps
        .iter()
        .filter_map(|step| step.hanoi_state.as_ref())
        .filter(|state| state.disk.is_some())
        .count();
    assert_eq!(moves, 15);
}

#[test]
fn test_hanoi_move_count_never_decreases() {
    let steps = hanoi_trace(5);
    let counts: Vec<u64> = steps
        .iter()
        .filter_map(|step| step.hanoi_state.as_ref())
        .map(|state| state.move_count)
        .collect();
    assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_hanoi_zero_disks_is_just_the_setup_step() {
    let steps = hanoi_trace(0);
    assert_eq!(steps.len(), 1);
    let state = steps[0].hanoi_state.as_ref().unwrap();
    assert!(state.towers.iter().all(|tower| tower.is_empty()));
}

#[test]
fn test_execute_dispatches_by_kind() {
    let fib_steps = execute(RecursionKind::Fibonacci, 4);
    assert!(fib_steps.iter().all(|step| step.tree_node.is_some()));
    let hanoi_steps = execute(RecursionKind::Hanoi, 2);
    assert!(hanoi_steps.iter().all(|step| step.hanoi_state.is_some()));
}
