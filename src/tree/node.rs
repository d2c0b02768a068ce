//! Trie node with an edge label and byte-keyed children.

use std::fmt;

/// A node of the compressed trie.
///
/// The label holds the bytes consumed on the edge from the parent to this
/// node. Children are kept in a vector sorted by key byte, where each key
/// is the first byte of the child's label.
#[derive(Default)]
pub struct Node {
    label: Vec<u8>,
    children: Vec<(u8, Node)>,
    is_word: bool,
}

impl Node {
    pub(crate) fn new(label: Vec<u8>, is_word: bool) -> Self {
        Self {
            label,
            children: Vec::new(),
            is_word,
        }
    }

    pub(crate) fn with_capacity(label: Vec<u8>, is_word: bool, children: usize) -> Self {
        Self {
            label,
            children: Vec::with_capacity(children),
            is_word,
        }
    }

    /// Bytes on the incoming edge. Empty only for the root.
    pub fn label(&self) -> &[u8] {
        &self.label
    }

    /// Whether the path from the root to this node is a stored word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child whose label starts with `key`.
    pub fn child(&self, key: u8) -> Option<&Node> {
        self.find(key).ok().map(|idx| &self.children[idx].1)
    }

    /// Children in ascending key order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = (u8, &Node)> + '_ {
        self.children.iter().map(|(key, child)| (*key, child))
    }

    pub(crate) fn entries(&self) -> &[(u8, Node)] {
        &self.children
    }

    pub(crate) fn set_word(&mut self) {
        self.is_word = true;
    }

    /// Position of `key` in the child vector, or where it would be inserted.
    pub(crate) fn find(&self, key: u8) -> std::result::Result<usize, usize> {
        self.children.binary_search_by_key(&key, |(k, _)| *k)
    }

    pub(crate) fn child_at_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.children[idx].1
    }

    pub(crate) fn insert_at(&mut self, idx: usize, key: u8, child: Node) {
        self.children.insert(idx, (key, child));
    }

    /// Attach a child under `key`. Returns `false` if the key is taken.
    pub(crate) fn attach(&mut self, key: u8, child: Node) -> bool {
        match self.find(key) {
            Ok(_) => false,
            Err(idx) => {
                self.insert_at(idx, key, child);
                true
            }
        }
    }

    /// Split this node's edge after `at` bytes.
    ///
    /// This node keeps the first `at` bytes and becomes a non-word
    /// intermediate. The rest of the label, the word flag and the children
    /// move to a single new child. `at` must be inside the label.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());

        let suffix = self.label.split_off(at);
        let key = suffix[0];
        let lower = Node {
            label: suffix,
            children: std::mem::take(&mut self.children),
            is_word: std::mem::replace(&mut self.is_word, false),
        };
        self.children.push((key, lower));
    }
}

// Clone, PartialEq and Debug are written by hand because the derived
// versions recurse once per level and a decoded tree can be arbitrarily deep.

impl Clone for Node {
    fn clone(&self) -> Self {
        struct Frame<'a> {
            key: u8,
            src: &'a Node,
            dst: Node,
            next: usize,
        }

        fn shallow(node: &Node) -> Node {
            Node::with_capacity(node.label.clone(), node.is_word, node.children.len())
        }

        let mut stack = vec![Frame {
            key: 0,
            src: self,
            dst: shallow(self),
            next: 0,
        }];
        let mut finished = None;

        while let Some(top) = stack.last_mut() {
            let src = top.src;
            if let Some((key, child)) = src.children.get(top.next) {
                top.next += 1;
                stack.push(Frame {
                    key: *key,
                    src: child,
                    dst: shallow(child),
                    next: 0,
                });
                continue;
            }

            let Some(done) = stack.pop() else { break };
            match stack.last_mut() {
                Some(parent) => parent.dst.children.push((done.key, done.dst)),
                None => finished = Some(done.dst),
            }
        }

        finished.unwrap_or_default()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.label != b.label
                || a.is_word != b.is_word
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for ((ka, ca), (kb, cb)) in a.children.iter().zip(&b.children) {
                if ka != kb {
                    return false;
                }
                stack.push((ca, cb));
            }
        }
        true
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<u8> = self.children.iter().map(|(key, _)| *key).collect();
        f.debug_struct("Node")
            .field("label", &String::from_utf8_lossy(&self.label))
            .field("is_word", &self.is_word)
            .field("child_keys", &keys)
            .finish()
    }
}

impl Drop for Node {
    // Deep chains would overflow the stack with the default recursive drop.
    fn drop(&mut self) {
        let mut stack: Vec<Node> = self.children.drain(..).map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain(..).map(|(_, child)| child));
        }
    }
}

/// Length of the longest common prefix of `a` and `b`.
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
