use traceviz_search::{binary_trace, execute, exponential_trace, jump_trace, linear_trace, SearchKind};
use traceviz_step::search::NOT_FOUND;

const SORTED: [i64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

#[test]
fn test_all_kinds_find_a_present_target() {
    for kind in SearchKind::ALL {
        let steps = execute(kind, &SORTED, 9);
        let last = steps.last().unwrap();
        assert!(last.found, "{kind:?} should find 9");
        assert_eq!(SORTED[last.index as usize], 9, "{kind:?} index must point at a match");
    }
}

#[test]
fn test_all_kinds_miss_an_absent_target() {
    for kind in SearchKind::ALL {
        let steps = execute(kind, &SORTED, 4);
        let last = steps.last().unwrap();
        assert!(!last.found, "{kind:?} should not find 4");
        assert_eq!(last.index, NOT_FOUND);
    }
}

#[test]
fn test_all_kinds_handle_empty_input() {
    for kind in SearchKind::ALL {
        let steps = execute(kind, &[], 1);
        assert_eq!(steps.len(), 1, "{kind:?} empty trace is a single miss");
        assert!(!steps[0].found);
        assert_eq!(steps[0].index, NOT_FOUND);
    }
}

#[test]
fn test_linear_emits_a_comparison_per_element() {
    let steps = linear_trace(&[4, 2, 7, 1], 7);
    // Three comparisons and one success step.
    assert_eq!(steps.len(), 4);
    assert!(steps[0].comparison);
    assert_eq!(steps[0].current_element, Some(4));
    assert!(steps[2].found);
    let last = steps.last().unwrap();
    assert!(!last.comparison);
    assert_eq!(last.index, 2);
}

#[test]
fn test_linear_scans_the_whole_array_on_a_miss() {
    let steps = linear_trace(&[4, 2, 7], 9);
    assert_eq!(steps.len(), 4);
    assert_eq!(steps.last().unwrap().index, NOT_FOUND);
}

#[test]
fn test_binary_sorts_unsorted_input_before_searching() {
    // Sorted order is [1, 2, 3, 4, 5], so 3 sits at the first midpoint.
    let steps = binary_trace(&[5, 3, 1, 4, 2], 3);
    assert_eq!(steps.len(), 2);
    assert!(steps[0].comparison);
    assert_eq!(steps[0].mid, Some(2));
    let last = steps.last().unwrap();
    assert!(last.found);
    assert_eq!(last.index, 2);
    assert_eq!(last.left, Some(0));
    assert_eq!(last.right, Some(4));
}

#[test]
fn test_binary_right_bound_can_go_negative() {
    let steps = binary_trace(&[5], 1);
    let last = steps.last().unwrap();
    assert!(!last.found);
    assert_eq!(last.left, Some(0));
    assert_eq!(last.right, Some(-1));
}

#[test]
fn test_jump_probes_block_boundaries_then_scans() {
    let sequence: Vec<i64> = (1..=16).collect();
    let steps = jump_trace(&sequence, 11);
    // Block size floor(sqrt(16)) = 4: boundary probes at 3 and 7, then a
    // linear scan from index 8.
    assert_eq!(steps[0].index, 3);
    assert_eq!(steps[0].jump_size, Some(4));
    assert_eq!(steps[1].index, 7);
    assert_eq!(steps[2].index, 8);
    let last = steps.last().unwrap();
    assert!(last.found);
    assert_eq!(last.index, 10);
}

#[test]
fn test_jump_fails_fast_when_target_exceeds_every_block() {
    let steps = jump_trace(&[1, 2, 3], 99);
    let last = steps.last().unwrap();
    assert!(!last.found);
    assert_eq!(last.index, NOT_FOUND);
    // Every step carries the block size.
    assert!(steps.iter().all(|step| step.jump_size == Some(1)));
}

#[test]
fn test_exponential_shortcuts_on_index_zero() {
    let steps = exponential_trace(&[7, 8, 9], 7);
    assert_eq!(steps.len(), 1);
    assert!(steps[0].found);
    assert_eq!(steps[0].index, 0);
}

#[test]
fn test_exponential_narrows_range_then_bisects() {
    let sequence: Vec<i64> = (1..=8).collect();
    let steps = exponential_trace(&sequence, 5);
    let range_step = steps
        .iter()
        .find(|step| step.left.is_some() && step.mid.is_none())
        .expect("range announcement step");
    assert_eq!(range_step.left, Some(4));
    assert_eq!(range_step.right, Some(7));
    let last = steps.last().unwrap();
    assert!(last.found);
    assert_eq!(last.index, 4);
}

#[test]
fn test_found_steps_are_not_comparisons() {
    for kind in SearchKind::ALL {
        let steps = execute(kind, &SORTED, 1);
        let last = steps.last().unwrap();
        assert!(last.found, "{kind:?}");
        if steps.len() > 1 {
            assert!(!last.comparison, "{kind:?} success step is not a compare event");
        }
    }
}
