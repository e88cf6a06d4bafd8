//! Search tree nodes
//!
//! A node owns its state and the action that produced it, and points back at
//! its parent through an `Rc`. Children share the parent; nothing in the tree
//! is ever mutated after construction, so a goal node keeps its whole path
//! alive while everything else is freed as the frontier drops it.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use super::problem::Problem;

#[derive(Debug, Clone)]
pub struct Node<S, A> {
    pub state: S,
    action: Option<A>,
    parent: Option<Rc<Node<S, A>>>,
    depth: usize,
}

impl<S, A: Copy> Node<S, A> {
    /// Root node for a search
    pub fn root(state: S) -> Self {
        Self {
            state,
            action: None,
            parent: None,
            depth: 0,
        }
    }

    /// Action that produced this node (`None` for the root)
    #[inline]
    pub fn action(&self) -> Option<A> {
        self.action
    }

    #[inline]
    pub fn parent(&self) -> Option<&Rc<Node<S, A>>> {
        self.parent.as_ref()
    }

    /// Path length so far (unit step cost)
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Actions from the root to this node
    pub fn path(&self) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.depth);
        let mut node = Some(self);
        while let Some(n) = node {
            if let Some(a) = n.action {
                actions.push(a);
            }
            node = n.parent.as_deref();
        }
        actions.reverse();
        actions
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self) -> impl Iterator<Item = &Node<S, A>> {
        std::iter::successors(self.parent.as_deref(), |n| n.parent.as_deref())
    }
}

impl<S: PartialEq, A: Copy> Node<S, A> {
    /// True if some ancestor already holds this node's state.
    ///
    /// Walks the parent chain only; states reached on other branches do not
    /// count.
    pub fn closes_cycle(&self) -> bool {
        self.ancestors().any(|n| n.state == self.state)
    }
}

impl<S, A: Copy> Node<S, A> {
    /// Child reached from `this` by `action`
    pub fn child<P>(this: &Rc<Self>, problem: &P, action: A) -> Rc<Self>
    where
        P: Problem<State = S, Action = A>,
    {
        Rc::new(Self {
            state: problem.result(&this.state, action),
            action: Some(action),
            parent: Some(Rc::clone(this)),
            depth: this.depth + 1,
        })
    }

    /// All children of `this`, one per legal action
    pub fn expand<P>(this: &Rc<Self>, problem: &P) -> Vec<Rc<Self>>
    where
        P: Problem<State = S, Action = A>,
    {
        problem
            .actions(&this.state)
            .into_iter()
            .map(|action| Self::child(this, problem, action))
            .collect()
    }
}

// Nodes compare by state alone so duplicate detection ignores the path taken.

impl<S: PartialEq, A> PartialEq for Node<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for Node<S, A> {}

impl<S: Hash, A> Hash for Node<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl<S: Ord, A> PartialOrd for Node<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord, A> Ord for Node<S, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.state.cmp(&other.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk along the integers; goal is reaching `target`.
    struct Line {
        target: i32,
    }

    impl Problem for Line {
        type State = i32;
        type Action = i32;

        fn initial(&self) -> i32 {
            0
        }

        fn actions(&self, _state: &i32) -> Vec<i32> {
            vec![-1, 1]
        }

        fn result(&self, state: &i32, action: i32) -> i32 {
            state + action
        }

        fn goal_test(&self, state: &i32) -> bool {
            *state == self.target
        }
    }

    #[test]
    fn test_root_has_empty_path() {
        let root: Node<i32, i32> = Node::root(0);
        assert_eq!(root.depth(), 0);
        assert!(root.path().is_empty());
        assert!(root.parent().is_none());
        assert!(root.action().is_none());
    }

    #[test]
    fn test_expand_builds_children_with_parent_links() {
        let problem = Line { target: 3 };
        let root = Rc::new(Node::root(problem.initial()));
        let children = Node::expand(&root, &problem);

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].state, -1);
        assert_eq!(children[1].state, 1);
        assert!(children.iter().all(|c| c.depth() == 1));
        assert!(Rc::ptr_eq(children[1].parent().unwrap(), &root));
    }

    #[test]
    fn test_path_reconstruction() {
        let problem = Line { target: 3 };
        let root = Rc::new(Node::root(0));
        let a = Node::child(&root, &problem, 1);
        let b = Node::child(&a, &problem, 1);
        let c = Node::child(&b, &problem, -1);

        assert_eq!(c.path(), vec![1, 1, -1]);
        assert_eq!(c.depth(), 3);
        assert_eq!(c.ancestors().count(), 3);
    }

    #[test]
    fn test_cycle_detection_uses_ancestors_only() {
        let problem = Line { target: 3 };
        let root = Rc::new(Node::root(0));
        let up = Node::child(&root, &problem, 1);
        let back = Node::child(&up, &problem, -1);
        assert!(back.closes_cycle());

        let further = Node::child(&up, &problem, 1);
        assert!(!further.closes_cycle());
    }

    #[test]
    fn test_equality_ignores_path() {
        let problem = Line { target: 3 };
        let root = Rc::new(Node::root(0));
        let direct = Node::child(&root, &problem, 1);
        let detour = Node::child(&Node::child(&direct, &problem, 1), &problem, -1);
        assert_eq!(*direct, *detour);
        assert_ne!(direct.depth(), detour.depth());
    }
}
