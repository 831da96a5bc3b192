//! The storage cell of a [`Tree`][crate::linked::Tree].

/// An owning, possibly empty, pointer to a subtree. Moving a `Link` moves the whole subtree with
/// it so two links can never point at the same `Node`.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one item and exclusively owns its two (possibly empty) subtrees.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `data`.
    pub(crate) fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Detaches both children, leaving this node a leaf. The children keep their own subtrees.
    pub(crate) fn take_children(&mut self) -> (Link<T>, Link<T>) {
        (self.left.take(), self.right.take())
    }
}

/// Drops every node reachable from `link` one at a time. Letting `Box` drop a subtree recurses
/// once per level which a degenerate (list shaped) tree can turn into a stack overflow.
pub(crate) fn dismantle<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        let (left, right) = node.take_children();
        stack.extend(left);
        stack.extend(right);
    }
}
