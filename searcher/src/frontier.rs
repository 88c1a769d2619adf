//! A min-priority queue with deterministic tie breaking.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::errors::{Result, SearchError};

/// Wrapper which orders entries by priority, then by the order
/// in which they were pushed. Items themselves are never compared.
#[derive(Debug)]
struct Entry<C, T> {
    priority: C,
    sequence: u64,
    item: T,
}

impl<C, T> PartialEq for Entry<C, T>
where
    C: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C, T> Eq for Entry<C, T> where C: PartialOrd {}

impl<C, T> Ord for Entry<C, T>
where
    C: PartialOrd,
{
    // BinaryHeap is a max-heap, so the comparison is reversed to
    // put the lowest priority and the oldest sequence on top.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<C, T> PartialOrd for Entry<C, T>
where
    C: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending search nodes, keyed by priority.
///
/// When two priorities tie, the item pushed first is popped
/// first, so searches over identical problems always visit
/// nodes in the same order.
#[derive(Debug)]
pub struct PriorityFrontier<C, T> {
    heap: BinaryHeap<Entry<C, T>>,
    sequence: u64,
    high_water: usize,
}

impl<C, T> Default for PriorityFrontier<C, T>
where
    C: PartialOrd,
{
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            sequence: 0,
            high_water: 0,
        }
    }
}

impl<C, T> PriorityFrontier<C, T>
where
    C: PartialOrd + Copy + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. The first item pushed receives tie breaker 0.
    pub fn push(&mut self, priority: C, item: T) {
        self.heap.push(Entry {
            priority,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove the item with the lowest priority.
    pub fn pop_min(&mut self) -> Result<(C, T)> {
        self.heap
            .pop()
            .map(|e| (e.priority, e.item))
            .ok_or(SearchError::EmptyFrontier)
    }

    pub fn peek_priority(&self) -> Option<C> {
        self.heap.peek().map(|e| e.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of items held at once.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
