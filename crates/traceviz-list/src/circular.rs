use traceviz_step::list::{ListNode, ListOperation, ListStep, ListStepKind};

use crate::table::{compact_after_remove, normalize_circular, shift_past};

/// Trace one operation over a circular linked list.
///
/// By convention index 0 is the head and the last slot's `next` is forced
/// back to it before the operation runs. Traversals stop once they wrap
/// around to the head again. Deleting the head rewires the tail to the new
/// head and compacts the table, renumbering the survivors; the single-node
/// case empties the table outright.
pub fn circular_trace(
    initial: &[ListNode],
    operation: ListOperation,
    value: i64,
    position: usize,
) -> Vec<ListStep> {
    let mut steps = Vec::new();
    let mut nodes = initial.to_vec();
    let mut head = normalize_circular(&mut nodes);

    steps.push(ListStep::new(
        operation.step_kind(),
        format!("Starting {} operation", operation.label()),
        &nodes,
        head,
        "Initial state of circular linked list",
    ));

    match operation {
        ListOperation::Insert => {
            let new_index = nodes.len();

            match head {
                None => {
                    nodes.push(ListNode { value, next: Some(new_index), prev: None });
                    head = Some(new_index);

                    steps.push(ListStep {
                        current_node: Some(new_index),
                        new_node: Some(new_index),
                        ..ListStep::new(
                            ListStepKind::Insert,
                            "Insert first node",
                            &nodes,
                            head,
                            format!("Inserted {value} as the first node (points to itself)"),
                        )
                    });
                }
                Some(h) if position == 0 => {
                    let mut last = h;
                    while nodes[last].next != Some(h) {
                        match nodes[last].next {
                            Some(next) => last = next,
                            None => break,
                        }
                    }

                    nodes.push(ListNode { value, next: Some(h), prev: None });
                    nodes[last].next = Some(new_index);
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
                }
                Some(h) => {
                    let mut current = h;
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
                        // Wrapped all the way around; splice right here.
                        if current == h {
                            break;
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
        }
        ListOperation::Search => match head {
            None => {
                steps.push(ListStep {
                    found: Some(false),
                    completed: Some(true),
                    ..ListStep::new(
                        ListStepKind::Search,
                        "Search complete",
                        &nodes,
                        head,
                        format!("List is empty, {value} not found"),
                    )
                });
            }
            Some(h) => {
                let mut current = h;
                let mut pos = 0;
                let mut found = false;

                loop {
                    let matches = nodes[current].value == value;

                    steps.push(ListStep {
                        current_node: Some(current),
                        comparing: Some(vec![current]),
                        found: Some(matches),
                        ..ListStep::new(
                            ListStepKind::Search,
                            "Compare values",
                            &nodes,
                            head,
                            format!(
                                "Comparing {} with {value} at position {pos}{}",
                                nodes[current].value,
                                if matches { " - Found!" } else { "" }
                            ),
                        )
                    });

                    if matches {
                        found = true;
                        break;
                    }

                    match nodes[current].next {
                        Some(next) => current = next,
                        None => break,
                    }
                    pos += 1;
                    if current == h {
                        break;
                    }
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
        },
        ListOperation::Delete => {
            let mut found = false;

            match head {
                None => {
                    steps.push(ListStep {
                        found: Some(false),
                        completed: Some(true),
                        ..ListStep::new(
                            ListStepKind::Delete,
                            "Delete complete",
                            &nodes,
                            head,
                            "List is empty, nothing to delete",
                        )
                    });
                }
                Some(h) if nodes[h].value == value => {
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

                    if nodes[h].next == Some(h) {
                        head = None;
                        nodes.clear();
                    } else {
                        let mut last = h;
                        while nodes[last].next != Some(h) {
                            match nodes[last].next {
                                Some(next) => last = next,
                                None => break,
                            }
                        }

                        let next = nodes[h].next;
                        nodes[last].next = next;
                        compact_after_remove(&mut nodes, h);
                        head = shift_past(next, h);
                    }

                    found = true;
                }
                Some(h) => {
                    let mut current = h;

                    loop {
                        let Some(succ) = nodes[current].next else { break };

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
                        if current == h {
                            break;
                        }
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
