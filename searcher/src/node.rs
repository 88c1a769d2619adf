//! Search tree nodes.

use std::fmt;
use std::rc::Rc;

use num::Zero;

use crate::traits::Problem;

/// An immutable record of how a state was reached.
///
/// Nodes only point back towards the root, so the tree they
/// form can never contain a cycle. Parents are shared, and
/// live as long as some descendant is still in the frontier
/// or in a returned path.
pub struct SearchNode<P>
where
    P: Problem,
{
    state: P::State,
    parent: Option<Rc<SearchNode<P>>>,
    action: Option<P::Action>,
    path_cost: P::Cost,
    depth: usize,
}

impl<P> SearchNode<P>
where
    P: Problem,
{
    /// The root of a search tree, with no action and zero cost.
    pub fn root(state: P::State) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: P::Cost::zero(),
            depth: 0,
        }
    }

    /// A node reached from `parent` by applying `action`.
    pub fn child(
        parent: &Rc<Self>,
        action: P::Action,
        state: P::State,
        path_cost: P::Cost,
    ) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            path_cost,
            depth: parent.depth + 1,
        }
    }

    pub fn state(&self) -> &P::State {
        &self.state
    }

    /// Key used to recognize repeated states.
    pub fn state_key(&self) -> &P::State {
        &self.state
    }

    pub fn parent(&self) -> Option<&SearchNode<P>> {
        self.parent.as_deref()
    }

    pub fn action(&self) -> Option<&P::Action> {
        self.action.as_ref()
    }

    pub fn path_cost(&self) -> P::Cost {
        self.path_cost
    }

    /// Number of actions between the root and this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Actions leading from the root to this node, in order.
    pub fn solution(&self) -> Vec<P::Action> {
        let mut path = Vec::with_capacity(self.depth);
        let mut node = Some(self);

        while let Some(action) = node.and_then(|n| n.action.as_ref()) {
            path.push(action.clone());
            node = node.and_then(|n| n.parent());
        }

        path.reverse();
        path
    }
}

impl<P> fmt::Debug for SearchNode<P>
where
    P: Problem,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("state", &self.state)
            .field("action", &self.action)
            .field("path_cost", &self.path_cost)
            .field("depth", &self.depth)
            .finish()
    }
}
