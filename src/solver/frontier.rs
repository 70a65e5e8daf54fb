use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

use crate::common::SearchNode;

/// Ordering discipline for nodes pending expansion. The pop rule is the only
/// thing that distinguishes BFS, DFS, UCS and A*: all four share one engine
/// loop parameterized by an implementation of this trait.
pub(crate) trait Frontier {
    /// `f_cost` is the value a cost-ordered frontier sorts on (g for UCS,
    /// g + h for A*); FIFO and LIFO frontiers ignore it.
    fn push(&mut self, node: Rc<SearchNode>, f_cost: usize);

    fn pop(&mut self) -> Option<Rc<SearchNode>>;

    /// Successors of one expansion, offered in neighbor-enumeration order.
    fn extend(&mut self, batch: Vec<(Rc<SearchNode>, usize)>) {
        for (node, f_cost) in batch {
            self.push(node, f_cost);
        }
    }

    /// Cost-ordered frontiers get the cost-improvement enqueue guard and the
    /// stale-entry skip at pop; the others get plain visited-set dedup.
    fn ordered_by_cost(&self) -> bool {
        false
    }
}

/// Oldest-first pop: turns the engine into breadth-first search.
#[derive(Default)]
pub(crate) struct FifoFrontier {
    queue: VecDeque<Rc<SearchNode>>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: Rc<SearchNode>, _f_cost: usize) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.queue.pop_front()
    }
}

/// Newest-first pop: turns the engine into depth-first search. Successor
/// batches are pushed in reverse so the first-enumerated neighbor (Up) ends
/// on top of the stack and is expanded first.
#[derive(Default)]
pub(crate) struct LifoFrontier {
    stack: Vec<Rc<SearchNode>>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: Rc<SearchNode>, _f_cost: usize) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.stack.pop()
    }

    fn extend(&mut self, batch: Vec<(Rc<SearchNode>, usize)>) {
        for (node, _) in batch.into_iter().rev() {
            self.stack.push(node);
        }
    }
}

struct HeapEntry {
    f_cost: usize,
    seq: usize,
    node: Rc<SearchNode>,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    // Inverted for min-heap behavior. Ties break on state ordering, then on
    // insertion sequence number, so the pop order never depends on heap
    // internals.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.node.state.cmp(&self.node.state))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest `(f_cost, state, insertion seq)` first: uniform-cost search when
/// f = g, A* when f = g + h. One comparator for both, so null-heuristic A*
/// pops in exactly the order UCS does.
#[derive(Default)]
pub(crate) struct PriorityFrontier {
    heap: BinaryHeap<HeapEntry>,
    next_seq: usize,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: Rc<SearchNode>, f_cost: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapEntry { f_cost, seq, node });
    }

    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn ordered_by_cost(&self) -> bool {
        true
    }
}
