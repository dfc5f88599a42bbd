use traceviz_list::{circular_trace, doubly_trace, execute, singly_trace, ListKind};
use traceviz_step::list::{ListNode, ListOperation, ListStepKind};

fn chain(values: &[i64]) -> Vec<ListNode> {
    let len = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| ListNode {
            value,
            next: if i + 1 < len { Some(i + 1) } else { None },
            prev: None,
        })
        .collect()
}

fn doubly_chain(values: &[i64]) -> Vec<ListNode> {
    let mut nodes = chain(values);
    for i in 1..nodes.len() {
        nodes[i].prev = Some(i - 1);
    }
    nodes
}

fn initial_for(kind: ListKind, values: &[i64]) -> Vec<ListNode> {
    match kind {
        ListKind::Doubly => doubly_chain(values),
        _ => chain(values),
    }
}

#[test]
fn test_insert_then_search_round_trip() {
    for kind in ListKind::ALL {
        let initial = initial_for(kind, &[10, 20, 30]);
        let inserted = execute(kind, &initial, ListOperation::Insert, 99, Some(1));
        let table = inserted.last().unwrap().nodes.clone();

        let searched = execute(kind, &table, ListOperation::Search, 99, None);
        let last = searched.last().unwrap();
        assert_eq!(last.found, Some(true), "{kind:?} should find the inserted value");
        assert_eq!(last.completed, Some(true));

        let hit = searched
            .iter()
            .find(|step| step.found == Some(true) && step.comparing.is_some())
            .expect("matching compare step");
        assert_eq!(hit.current_node, Some(3), "{kind:?} new node sits in the appended slot");
    }
}

#[test]
fn test_delete_then_search_misses() {
    for kind in ListKind::ALL {
        let initial = initial_for(kind, &[10, 20, 30]);
        let deleted = execute(kind, &initial, ListOperation::Delete, 20, None);
        assert_eq!(deleted.last().unwrap().found, Some(true), "{kind:?} delete should succeed");

        let table = deleted.last().unwrap().nodes.clone();
        let searched = execute(kind, &table, ListOperation::Search, 20, None);
        let last = searched.last().unwrap();
        assert_eq!(last.found, Some(false), "{kind:?} deleted value must be unreachable");
        assert_eq!(last.completed, Some(true));
    }
}

#[test]
fn test_singly_head_delete_compacts_and_renumbers() {
    let steps = singly_trace(&chain(&[10, 20, 30]), ListOperation::Delete, 10, 0);
    let last = steps.last().unwrap();
    assert_eq!(last.found, Some(true));
    assert_eq!(last.nodes.len(), 2);
    assert_eq!(last.nodes[0].value, 20);
    assert_eq!(last.nodes[0].next, Some(1));
    assert_eq!(last.nodes[1].next, None);
    assert_eq!(last.head, Some(0));
}

#[test]
fn test_singly_mid_delete_leaves_indices_stable() {
    let steps = singly_trace(&chain(&[10, 20, 30]), ListOperation::Delete, 20, 0);
    let last = steps.last().unwrap();
    // The unlinked slot stays in the table; only the predecessor's pointer
    // changes.
    assert_eq!(last.nodes.len(), 3);
    assert_eq!(last.nodes[0].next, Some(2));
    assert_eq!(last.head, Some(0));
}

#[test]
fn test_doubly_delete_fixes_both_directions() {
    let steps = doubly_trace(&doubly_chain(&[10, 20, 30]), ListOperation::Delete, 20, 0);
    let last = steps.last().unwrap();
    assert_eq!(last.found, Some(true));
    assert_eq!(last.nodes.len(), 3);
    assert_eq!(last.nodes[0].next, Some(2));
    assert_eq!(last.nodes[2].prev, Some(0));
    assert_eq!(last.head, Some(0));
    assert_eq!(last.tail, Some(2));
}

#[test]
fn test_doubly_tail_delete_moves_tail_backwards() {
    let steps = doubly_trace(&doubly_chain(&[10, 20, 30]), ListOperation::Delete, 30, 0);
    let last = steps.last().unwrap();
    assert_eq!(last.tail, Some(1));
    assert_eq!(last.nodes[1].next, None);
}

#[test]
fn test_doubly_insert_at_head_updates_prev() {
    let steps = doubly_trace(&doubly_chain(&[10, 20]), ListOperation::Insert, 5, 0);
    let last = steps.last().unwrap();
    assert_eq!(last.head, Some(2));
    assert_eq!(last.nodes[2].next, Some(0));
    assert_eq!(last.nodes[0].prev, Some(2));
    assert_eq!(last.tail, Some(1));
}

#[test]
fn test_circular_head_delete_rewires_tail_and_compacts() {
    let steps = circular_trace(&chain(&[10, 20, 30]), ListOperation::Delete, 10, 0);
    let last = steps.last().unwrap();
    assert_eq!(last.found, Some(true));
    assert_eq!(last.nodes.len(), 2);
    assert_eq!(last.nodes[0].value, 20);
    assert_eq!(last.nodes[0].next, Some(1));
    assert_eq!(last.nodes[1].next, Some(0), "cycle closes on the new head");
    assert_eq!(last.head, Some(0));
}

#[test]
fn test_circular_delete_of_sole_node_empties_the_table() {
    let steps = circular_trace(&chain(&[7]), ListOperation::Delete, 7, 0);
    let last = steps.last().unwrap();
    assert_eq!(last.found, Some(true));
    assert!(last.nodes.is_empty());
    assert_eq!(last.head, None);
}

#[test]
fn test_circular_search_stops_after_one_full_loop() {
    let steps = circular_trace(&chain(&[1, 2, 3]), ListOperation::Search, 9, 0);
    let compares = steps.iter().filter(|step| step.comparing.is_some()).count();
    assert_eq!(compares, 3, "each node is visited exactly once");
    assert_eq!(steps.last().unwrap().found, Some(false));
}

#[test]
fn test_circular_first_insert_points_to_itself() {
    let steps = circular_trace(&[], ListOperation::Insert, 42, 0);
    let last = steps.last().unwrap();
    assert_eq!(last.nodes.len(), 1);
    assert_eq!(last.nodes[0].next, Some(0));
    assert_eq!(last.head, Some(0));
}

#[test]
fn test_insert_into_empty_list_becomes_head() {
    for kind in ListKind::ALL {
        let steps = execute(kind, &[], ListOperation::Insert, 1, Some(3));
        let last = steps.last().unwrap();
        assert_eq!(last.nodes.len(), 1, "{kind:?}");
        assert_eq!(last.head, Some(0), "{kind:?}");
        assert_eq!(last.new_node, Some(0), "{kind:?}");
    }
}

#[test]
fn test_out_of_range_insert_appends_at_the_tail() {
    let steps = singly_trace(&chain(&[10, 20]), ListOperation::Insert, 99, 10);
    let last = steps.last().unwrap();
    assert_eq!(last.nodes.len(), 3);
    assert_eq!(last.nodes[1].next, Some(2));
    assert_eq!(last.nodes[2].value, 99);
    assert_eq!(last.nodes[2].next, None);
}

#[test]
fn test_traversal_hops_are_traverse_steps() {
    let steps = singly_trace(&chain(&[10, 20, 30]), ListOperation::Insert, 99, 2);
    let hops: Vec<_> = steps
        .iter()
        .filter(|step| step.kind == ListStepKind::Traverse)
        .collect();
    assert_eq!(hops.len(), 1);
    assert_eq!(hops[0].current_node, Some(0));
    assert_eq!(hops[0].operation, "Traverse to position");
}

#[test]
fn test_delete_of_absent_value_reports_not_found() {
    for kind in ListKind::ALL {
        let initial = initial_for(kind, &[1, 2, 3]);
        let steps = execute(kind, &initial, ListOperation::Delete, 9, None);
        let last = steps.last().unwrap();
        assert_eq!(last.found, Some(false), "{kind:?}");
        assert_eq!(last.completed, Some(true), "{kind:?}");
        assert_eq!(last.nodes.len(), 3, "{kind:?} nothing is removed");
    }
}

#[test]
fn test_every_trace_opens_with_the_initial_state() {
    for kind in ListKind::ALL {
        let initial = initial_for(kind, &[4, 5]);
        for operation in [ListOperation::Insert, ListOperation::Search, ListOperation::Delete] {
            let steps = execute(kind, &initial, operation, 4, None);
            let first = &steps[0];
            assert_eq!(first.kind, operation.step_kind(), "{kind:?}/{operation:?}");
            assert_eq!(first.nodes.len(), 2);
            assert_eq!(first.current_node, None);
            assert!(steps.len() >= 2, "{kind:?}/{operation:?} trace is never a single step");
        }
    }
}

#[test]
fn test_search_derives_head_from_table_order() {
    // 2 -> 0 -> 1 encoded out of order; the scan starts at the derived head.
    let nodes = vec![
        ListNode { value: 20, next: Some(1), prev: None },
        ListNode { value: 30, next: None, prev: None },
        ListNode { value: 10, next: Some(0), prev: None },
    ];
    let steps = singly_trace(&nodes, ListOperation::Search, 30, 0);
    let visited: Vec<Option<usize>> = steps
        .iter()
        .filter(|step| step.comparing.is_some())
        .map(|step| step.current_node)
        .collect();
    assert_eq!(visited, vec![Some(2), Some(0), Some(1)]);
    assert_eq!(steps.last().unwrap().found, Some(true));
}
