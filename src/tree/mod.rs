//! In-memory compressed trie.
//!
//! Shared prefixes are stored once, as labels on the edges between nodes.
//! The words "hello" and "helper" need five nodes in a plain trie branch
//! per letter, but only four nodes here:
//!
//! ```text
//! (root) --"hel"--> ( ) --"lo"--> (word)
//!                    |
//!                    +---"per"--> (word)
//! ```
//!
//! The tree is built by inserting words one at a time and is then queried
//! in place or handed to the [`codec`](crate::codec) for serialization.
//! There is no deletion, so the node count only ever grows.

mod node;

pub use node::Node;

use node::common_prefix_len;

/// A compressed trie over byte strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
    node_count: usize,
}

impl Tree {
    /// Create an empty tree holding only the root.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            node_count: 1,
        }
    }

    pub(crate) fn from_parts(root: Node, node_count: usize) -> Self {
        Self { root, node_count }
    }

    /// The root node, for read-only traversal.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of stored words, counted by walking the tree.
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_word() {
                count += 1;
            }
            stack.extend(node.entries().iter().map(|(_, child)| child));
        }
        count
    }

    /// Whether no word (not even the empty one) has been inserted.
    pub fn is_empty(&self) -> bool {
        !self.root.is_word() && self.root.child_count() == 0
    }

    /// Insert a word.
    ///
    /// Inserting a word that is already present changes nothing. The empty
    /// word marks the root.
    pub fn insert(&mut self, word: impl AsRef<[u8]>) {
        let mut word = word.as_ref();
        let mut cur = &mut self.root;

        loop {
            let Some(&first) = word.first() else {
                cur.set_word();
                return;
            };

            let idx = match cur.find(first) {
                Ok(idx) => idx,
                Err(idx) => {
                    // A fresh edge always ends at the word being inserted.
                    cur.insert_at(idx, first, Node::new(word.to_vec(), true));
                    self.node_count += 1;
                    return;
                }
            };

            let child = cur.child_at_mut(idx);
            let common = common_prefix_len(word, child.label());
            if common < child.label().len() {
                // Partial match, or the word ends inside the label.
                child.split_at(common);
                self.node_count += 1;
            }

            word = &word[common..];
            cur = cur.child_at_mut(idx);
        }
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains(&self, word: impl AsRef<[u8]>) -> bool {
        let mut word = word.as_ref();
        let mut cur = &self.root;

        while let Some(&first) = word.first() {
            match cur.child(first) {
                Some(child) if word.starts_with(child.label()) => {
                    word = &word[child.label().len()..];
                    cur = child;
                }
                _ => return false,
            }
        }

        cur.is_word()
    }

    /// All stored words starting with `prefix`, in lexicographic order.
    ///
    /// An empty prefix returns every word in the tree.
    pub fn find_words_with_prefix(&self, prefix: impl AsRef<[u8]>) -> Vec<Vec<u8>> {
        let mut prefix = prefix.as_ref();
        let mut cur = &self.root;
        let mut path = Vec::new();

        while let Some(&first) = prefix.first() {
            let Some(child) = cur.child(first) else {
                return Vec::new();
            };
            let label = child.label();

            if prefix.starts_with(label) {
                path.extend_from_slice(label);
                prefix = &prefix[label.len()..];
                cur = child;
            } else if label.starts_with(prefix) {
                // The rest of the query ends inside this edge.
                path.extend_from_slice(label);
                cur = child;
                break;
            } else {
                return Vec::new();
            }
        }

        let mut words = Vec::new();
        gather_words(cur, path, &mut words);
        words
    }

    /// Every stored word in lexicographic order.
    pub fn words(&self) -> Vec<Vec<u8>> {
        self.find_words_with_prefix(b"")
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: AsRef<[u8]>> Extend<W> for Tree {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<W: AsRef<[u8]>> FromIterator<W> for Tree {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

/// Depth-first collection of the words below `start`, whose path is `path`.
///
/// Children are pushed in reverse so the smallest key is visited first,
/// which yields words in lexicographic order.
fn gather_words(start: &Node, path: Vec<u8>, words: &mut Vec<Vec<u8>>) {
    let mut stack = vec![(start, path)];

    while let Some((node, path)) = stack.pop() {
        for (_, child) in node.entries().iter().rev() {
            let mut child_path = Vec::with_capacity(path.len() + child.label().len());
            child_path.extend_from_slice(&path);
            child_path.extend_from_slice(child.label());
            stack.push((child, child_path));
        }
        if node.is_word() {
            words.push(path);
        }
    }
}
