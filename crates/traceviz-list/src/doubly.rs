use traceviz_step::list::{ListNode, ListOperation, ListStep, ListStepKind};

use crate::table::derive_endpoints;

/// Trace one operation over a doubly linked list.
///
/// Inserts additionally fix the neighbor's `prev` pointer and keep the
/// tail current. Deletes unlink in both directions without compacting the
/// table, so surviving node indices never change; the unlinked slot simply
/// becomes unreachable.
pub fn doubly_trace(
    initial: &[ListNode],
    operation: ListOperation,
    value: i64,
    position: usize,
) -> Vec<ListStep> {
    let mut steps = Vec::new();
    let mut nodes = initial.to_vec();
    let endpoints = derive_endpoints(&nodes);
    let mut head = endpoints.head;
    let mut tail = endpoints.tail;

    steps.push(ListStep {
        tail,
        ..ListStep::new(
            operation.step_kind(),
            format!("Starting {} operation", operation.label()),
            &nodes,
            head,
            "Initial state of doubly linked list",
        )
    });

    match operation {
        ListOperation::Insert => {
            let new_index = nodes.len();

            if position == 0 || head.is_none() {
                nodes.push(ListNode { value, next: head, prev: None });
                match head {
                    Some(h) => nodes[h].prev = Some(new_index),
                    None => tail = Some(new_index),
                }
                head = Some(new_index);

                steps.push(ListStep {
                    tail,
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
                        tail,
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

                nodes.push(ListNode { value, next: nodes[current].next, prev: Some(current) });
                match nodes[current].next {
                    Some(succ) => nodes[succ].prev = Some(new_index),
                    None => tail = Some(new_index),
                }
                nodes[current].next = Some(new_index);

                steps.push(ListStep {
                    tail,
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
                    tail,
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
                tail,
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
            let mut current = head;
            let mut found = false;

            while let Some(index) = current {
                steps.push(ListStep {
                    tail,
                    current_node: Some(index),
                    comparing: Some(vec![index]),
                    ..ListStep::new(
                        ListStepKind::Delete,
                        "Search for node to delete",
                        &nodes,
                        head,
                        format!("Checking if node ({}) should be deleted", nodes[index].value),
                    )
                });

                if nodes[index].value == value {
                    steps.push(ListStep {
                        tail,
                        current_node: Some(index),
                        target_node: Some(index),
                        ..ListStep::new(
                            ListStepKind::Delete,
                            "Delete node",
                            &nodes,
                            head,
                            format!("Deleting node with value {value}"),
                        )
                    });

                    match nodes[index].prev {
                        Some(pred) => nodes[pred].next = nodes[index].next,
                        None => head = nodes[index].next,
                    }
                    match nodes[index].next {
                        Some(succ) => nodes[succ].prev = nodes[index].prev,
                        None => tail = nodes[index].prev,
                    }

                    found = true;
                    break;
                }
                current = nodes[index].next;
            }

            steps.push(ListStep {
                tail,
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
