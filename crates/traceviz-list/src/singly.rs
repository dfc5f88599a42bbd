use traceviz_step::list::{ListNode, ListOperation, ListStep, ListStepKind};

use crate::table::{compact_after_remove, derive_endpoints, shift_past};

/// Trace one operation over a singly linked list.
///
/// Insert at position 0 (or into an empty list) prepends a new head;
/// other positions traverse `position - 1` hops, emitting one traversal
/// step per hop, then splice. A position past the end appends at the tail.
/// Deleting the head compacts the table and renumbers every surviving
/// index; other deletes unlink via the predecessor.
pub fn singly_trace(
    initial: &[ListNode],
    operation: ListOperation,
    value: i64,
    position: usize,
) -> Vec<ListStep> {
    let mut steps = Vec::new();
    let mut nodes = initial.to_vec();
    let mut head = derive_endpoints(&nodes).head;

    steps.push(ListStep::new(
        operation.step_kind(),
        format!("Starting {} operation", operation.label()),
        &nodes,
        head,
        "Initial state of singly linked list",
    ));

    match operation {
        ListOperation::Insert => {
            let new_index = nodes.len();

            if position == 0 || head.is_none() {
                nodes.push(ListNode { value, next: head, prev: None });
                head = Some(new_index);

                steps.push(ListStep {
                    current_node: Some(new_index),
                    new_node: Some(new_index),
                    ..ListStep::new(
                        ListStepKind::Insert,
                        "Insert at head",
                        &nodes,
                        head,
                        format!("Inserted {value} at the beginning"),
                    )
                });
            } else if let Some(start) = head {
                let mut current = start;
                let mut hop = 0;

                while hop < position - 1 {
                    steps.push(ListStep {
                        current_node: Some(current),
                        ..ListStep::new(
                            ListStepKind::Traverse,
                            "Traverse to position",
                            &nodes,
                            head,
                            format!("Traversing to position {position}, currently at step {}", hop + 1),
                        )
                    });

                    match nodes[current].next {
                        Some(next) => current = next,
                        None => break,
                    }
                    hop += 1;
                }

                nodes.push(ListNode { value, next: nodes[current].next, prev: None });
                nodes[current].next = Some(new_index);

                steps.push(ListStep {
                    current_node: Some(current),
                    new_node: Some(new_index),
                    ..ListStep::new(
                        ListStepKind::Insert,
                        "Insert at position",
                        &nodes,
                        head,
                        format!("Inserted {value} at position {position}"),
                    )
                });
            }
        }
        ListOperation::Search => {
            let mut current = head;
            let mut pos = 0;
            let mut found = false;

            while let Some(index) = current {
                let matches = nodes[index].value == value;

                steps.push(ListStep {
                    current_node: Some(index),
                    comparing: Some(vec![index]),
                    found: Some(matches),
                    ..ListStep::new(
                        ListStepKind::Search,
                        "Compare values",
                        &nodes,
                        head,
                        format!(
                            "Comparing {} with {value} at position {pos}{}",
                            nodes[index].value,
                            if matches { " - Found!" } else { "" }
                        ),
                    )
                });

                if matches {
                    found = true;
                    break;
                }
                current = nodes[index].next;
                pos += 1;
            }

            steps.push(ListStep {
                found: Some(found),
                completed: Some(true),
                ..ListStep::new(
                    ListStepKind::Search,
                    "Search complete",
                    &nodes,
                    head,
                    if found {
                        format!("Found {value} at position {pos}")
                    } else {
                        format!("{value} not found in the list")
                    },
                )
            });
        }
        ListOperation::Delete => {
            let mut found = false;

            if let Some(h) = head {
                if nodes[h].value == value {
                    steps.push(ListStep {
                        current_node: Some(h),
                        target_node: Some(h),
                        ..ListStep::new(
                            ListStepKind::Delete,
                            "Delete head",
                            &nodes,
                            head,
                            format!("Deleting head node with value {value}"),
                        )
                    });

                    let next = nodes[h].next;
                    compact_after_remove(&mut nodes, h);
                    head = shift_past(next, h);
                    found = true;
                } else {
                    let mut current = h;

                    while let Some(succ) = nodes[current].next {
                        steps.push(ListStep {
                            current_node: Some(current),
                            comparing: Some(vec![succ]),
                            ..ListStep::new(
                                ListStepKind::Delete,
                                "Search for node to delete",
                                &nodes,
                                head,
                                format!("Checking if next node ({}) should be deleted", nodes[succ].value),
                            )
                        });

                        if nodes[succ].value == value {
                            steps.push(ListStep {
                                current_node: Some(current),
                                target_node: Some(succ),
                                ..ListStep::new(
                                    ListStepKind::Delete,
                                    "Delete node",
                                    &nodes,
                                    head,
                                    format!("Deleting node with value {value}"),
                                )
                            });

                            nodes[current].next = nodes[succ].next;
                            found = true;
                            break;
                        }
                        current = succ;
                    }
                }
            }

            steps.push(ListStep {
                found: Some(found),
                completed: Some(true),
                ..ListStep::new(
                    ListStepKind::Delete,
                    "Delete complete",
                    &nodes,
                    head,
                    if found {
                        format!("Successfully deleted {value}")
                    } else {
                        format!("{value} not found in the list")
                    },
                )
            });
        }
    }

    steps
}
