//! Compressed trie file reader.

use std::io::{BufReader, Read};

use super::config::CodecConfig;
use super::format::*;
use crate::tree::{Node, Tree};
use crate::{Error, Result};

/// Streaming tree deserializer.
pub struct TreeReader<R: Read> {
    inner: BufReader<R>,
    config: CodecConfig,
}

/// A node under construction together with its key in the parent and the
/// number of child records still to be read.
struct Pending {
    key: u8,
    node: Node,
    remaining: usize,
}

impl<R: Read> TreeReader<R> {
    /// Create a reader over any byte source.
    pub fn new(source: R, config: CodecConfig) -> Self {
        Self {
            inner: BufReader::with_capacity(config.buffer_size, source),
            config,
        }
    }

    /// Read and validate the header, then decode every node record.
    ///
    /// Decoding uses an explicit stack, so deeply nested input cannot
    /// exhaust the call stack. Bytes after the last record are not read.
    pub fn read_tree(mut self) -> Result<Tree> {
        let header = TreeHeader::read_from(&mut self.inner)?;
        header.validate()?;

        let (root, children) = self.read_record()?;
        if !root.label().is_empty() {
            return Err(Error::invalid("root label must be empty"));
        }

        let mut decoded: u64 = 1;
        let mut stack = vec![Pending {
            key: 0,
            node: root,
            remaining: children,
        }];
        let mut finished = None;

        while let Some(top) = stack.last_mut() {
            if top.remaining > 0 {
                top.remaining -= 1;
                let key = self.read_u8("child key")?;
                let (node, children) = self.read_record()?;
                if node.label().first() != Some(&key) {
                    return Err(Error::invalid(format!(
                        "child key 0x{:02x} does not match its label",
                        key
                    )));
                }
                decoded += 1;
                stack.push(Pending {
                    key,
                    node,
                    remaining: children,
                });
                continue;
            }

            let Some(done) = stack.pop() else { break };
            match stack.last_mut() {
                Some(parent) => {
                    // Below the root, a non-word node exists only to branch.
                    if !done.node.is_word() && done.node.child_count() < 2 {
                        return Err(Error::invalid(format!(
                            "non-word node under key 0x{:02x} has {} children",
                            done.key,
                            done.node.child_count()
                        )));
                    }
                    if !parent.node.attach(done.key, done.node) {
                        return Err(Error::invalid(format!(
                            "duplicate child key 0x{:02x}",
                            done.key
                        )));
                    }
                }
                None => finished = Some(done.node),
            }
        }

        let root = finished.ok_or_else(|| Error::invalid("no root record"))?;

        if self.config.verify_node_count && decoded != u64::from(header.node_count) {
            return Err(Error::invalid(format!(
                "header declares {} nodes but {} were decoded",
                header.node_count, decoded
            )));
        }

        let tree = Tree::from_parts(root, header.node_count as usize);

        if self.config.require_utf8 {
            for word in tree.words() {
                if let Err(e) = std::str::from_utf8(&word) {
                    return Err(Error::invalid(format!("word is not valid UTF-8: {}", e)));
                }
            }
        }

        log::debug!("Deserialized {} nodes", decoded);
        Ok(tree)
    }

    /// Read one node record. Returns the node and its child count.
    fn read_record(&mut self) -> Result<(Node, usize)> {
        let label = self.read_label()?;
        let is_word = match self.read_u8("word flag")? {
            0 => false,
            1 => true,
            other => {
                return Err(Error::invalid(format!("word flag must be 0 or 1, got {}", other)))
            }
        };
        let children = self.read_u8("child count")? as usize;
        Ok((Node::with_capacity(label, is_word, children), children))
    }

    /// Read a u16 length-prefixed byte string.
    fn read_label(&mut self) -> Result<Vec<u8>> {
        let mut len = [0u8; 2];
        self.inner
            .read_exact(&mut len)
            .map_err(|e| Error::from_read(e, "label length"))?;

        let mut label = vec![0u8; u16::from_be_bytes(len) as usize];
        self.inner
            .read_exact(&mut label)
            .map_err(|e| Error::from_read(e, "label"))?;
        Ok(label)
    }

    fn read_u8(&mut self, context: &str) -> Result<u8> {
        let mut b = [0u8; 1];
        self.inner
            .read_exact(&mut b)
            .map_err(|e| Error::from_read(e, context))?;
        Ok(b[0])
    }
}
