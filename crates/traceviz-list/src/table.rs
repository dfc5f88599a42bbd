//! Node-table bookkeeping shared by the three list variants.

use traceviz_step::list::ListNode;

pub(crate) struct Endpoints {
    pub head: Option<usize>,
    pub tail: Option<usize>,
}

/// Derive head and tail from the table contents alone.
///
/// The head is the first index no other node's `next` points to, falling
/// back to 0; the tail is the first index whose `next` is empty, falling
/// back to the last slot. Ties always resolve to the lowest index.
pub(crate) fn derive_endpoints(nodes: &[ListNode]) -> Endpoints {
    if nodes.is_empty() {
        return Endpoints { head: None, tail: None };
    }

    let head = (0..nodes.len())
        .find(|&i| nodes.iter().all(|node| node.next != Some(i)))
        .unwrap_or(0);
    let tail = (0..nodes.len())
        .find(|&i| nodes[i].next.is_none())
        .unwrap_or(nodes.len() - 1);

    Endpoints { head: Some(head), tail: Some(tail) }
}

/// Close the cycle of a circular list: index 0 is the head by convention
/// and the last slot's `next` is forced back to it. A single node points
/// to itself.
pub(crate) fn normalize_circular(nodes: &mut [ListNode]) -> Option<usize> {
    if nodes.is_empty() {
        return None;
    }
    let last = nodes.len() - 1;
    nodes[last].next = Some(0);
    Some(0)
}

/// Physically remove the slot at `index` and renumber every pointer past
/// it. Only head deletion compacts the table; callers must adjust their
/// own head/tail references with [`shift_past`].
pub(crate) fn compact_after_remove(nodes: &mut Vec<ListNode>, index: usize) {
    nodes.remove(index);
    for node in nodes.iter_mut() {
        node.next = shift_past(node.next, index);
        node.prev = shift_past(node.prev, index);
    }
}

/// Renumber a single table index after the slot at `removed` is gone.
pub(crate) fn shift_past(ptr: Option<usize>, removed: usize) -> Option<usize> {
    ptr.map(|i| if i > removed { i - 1 } else { i })
}
