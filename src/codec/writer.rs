//! Compressed trie file writer.

use std::io::{BufWriter, Write};

use super::config::CodecConfig;
use super::format::*;
use crate::tree::{Node, Tree};
use crate::{Error, Result};

/// Streaming tree serializer.
///
/// Writes go through a `BufWriter` of the configured size, so memory use
/// does not grow with the tree.
pub struct TreeWriter<W: Write> {
    inner: BufWriter<W>,
    written: u64,
}

impl<W: Write> TreeWriter<W> {
    /// Create a writer over any byte sink.
    pub fn new(sink: W, config: CodecConfig) -> Self {
        Self {
            inner: BufWriter::with_capacity(config.buffer_size, sink),
            written: 0,
        }
    }

    /// Serialize `tree` and flush. Returns the number of bytes written.
    ///
    /// Size limits are checked before anything is written, so an oversized
    /// tree produces no output at all.
    pub fn write_tree(mut self, tree: &Tree) -> Result<u64> {
        let node_count = check_limits(tree)?;

        TreeHeader::new(node_count).write_to(&mut self.inner)?;
        self.written += HEADER_SIZE as u64;

        self.write_record(tree.root())?;
        let mut stack = vec![tree.root().entries().iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some((key, child)) => {
                    self.write_bytes(&[*key])?;
                    self.write_record(child)?;
                    stack.push(child.entries().iter());
                }
                None => {
                    stack.pop();
                }
            }
        }

        self.inner.flush()?;
        log::debug!(
            "Serialized {} nodes ({} bytes)",
            tree.node_count(),
            self.written
        );
        Ok(self.written)
    }

    /// Write one node record without its children.
    fn write_record(&mut self, node: &Node) -> Result<()> {
        let label = node.label();
        // lengths were checked up front
        self.write_bytes(&(label.len() as u16).to_be_bytes())?;
        self.write_bytes(label)?;
        self.write_bytes(&[node.is_word() as u8, node.child_count() as u8])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len() as u64;
        Ok(())
    }
}

/// Check every field width of the format. Returns the node count as `u32`.
fn check_limits(tree: &Tree) -> Result<u32> {
    let node_count = u32::try_from(tree.node_count()).map_err(|_| Error::EncodingLimitExceeded {
        what: "node count",
        limit: MAX_NODE_COUNT,
        actual: tree.node_count() as u64,
    })?;

    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        if node.label().len() > MAX_LABEL_LEN {
            return Err(Error::EncodingLimitExceeded {
                what: "label length",
                limit: MAX_LABEL_LEN as u64,
                actual: node.label().len() as u64,
            });
        }
        if node.child_count() > MAX_CHILDREN {
            return Err(Error::EncodingLimitExceeded {
                what: "child count",
                limit: MAX_CHILDREN as u64,
                actual: node.child_count() as u64,
            });
        }
        stack.extend(node.entries().iter().map(|(_, child)| child));
    }

    Ok(node_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_empty_tree() {
        let mut data = Vec::new();
        let n = TreeWriter::new(&mut data, CodecConfig::default())
            .write_tree(&Tree::new())
            .unwrap();

        assert_eq!(n as usize, data.len());
        assert_eq!(&data[0..4], &MAGIC);
        // root: empty label, not a word, no children
        assert_eq!(&data[HEADER_SIZE..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_long_label_rejected_without_output() {
        let mut tree = Tree::new();
        tree.insert(vec![b'x'; MAX_LABEL_LEN + 1]);

        let mut data = Vec::new();
        let err = TreeWriter::new(&mut data, CodecConfig::default())
            .write_tree(&tree)
            .unwrap_err();

        match err {
            Error::EncodingLimitExceeded { what, actual, .. } => {
                assert_eq!(what, "label length");
                assert_eq!(actual, MAX_LABEL_LEN as u64 + 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(data.is_empty());
    }

    #[test]
    fn test_max_label_accepted() {
        let mut tree = Tree::new();
        tree.insert(vec![b'x'; MAX_LABEL_LEN]);

        let mut data = Vec::new();
        TreeWriter::new(&mut data, CodecConfig::with_buffer_size(16))
            .write_tree(&tree)
            .unwrap();
        assert_eq!(data.len(), HEADER_SIZE + 4 + 1 + 2 + MAX_LABEL_LEN + 2);
    }

    #[test]
    fn test_all_256_children() {
        let tree: Tree = (0..=255u8).map(|b| [b]).collect();
        assert_eq!(tree.root().child_count(), 256);

        let err = TreeWriter::new(Vec::new(), CodecConfig::default())
            .write_tree(&tree)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::EncodingLimitExceeded {
                what: "child count",
                ..
            }
        ));
    }
}
