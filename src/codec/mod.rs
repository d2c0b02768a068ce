//! Binary file format for storing a compressed trie.
//!
//! A tree is built offline, written once with [`TreeWriter`] and loaded
//! cheaply at runtime with [`TreeReader`]. The codec only sees the node
//! shape; it never inserts.
//!
//! # File Structure
//!
//! ```text
//! +------------------+
//! |     HEADER       |  12 bytes (magic, version, node count)
//! +------------------+
//! |   ROOT RECORD    |  variable
//! +------------------+
//! | [key][RECORD]... |  children, pre-order, ascending key
//! +------------------+
//! ```

mod config;
mod format;
mod reader;
mod writer;


pub use config::{CodecConfig, DEFAULT_BUFFER_SIZE};
pub use format::*;
pub use reader::TreeReader;
pub use writer::TreeWriter;

use memmap2::Mmap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::{Error, Result, Tree};

impl Tree {
    /// Serialize into any byte sink. Returns the number of bytes written.
    pub fn serialize<W: Write>(&self, sink: W) -> Result<u64> {
        TreeWriter::new(sink, CodecConfig::default()).write_tree(self)
    }

    /// Deserialize from any byte source with the default configuration.
    pub fn deserialize<R: Read>(source: R) -> Result<Tree> {
        TreeReader::new(source, CodecConfig::default()).read_tree()
    }

    /// Serialize into a new buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.serialize(&mut data)?;
        Ok(data)
    }

    /// Deserialize from a byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Tree> {
        Self::deserialize(data)
    }

    /// Write the tree to `path`.
    ///
    /// The data goes to a temporary file in the same directory which then
    /// replaces `path` atomically, so a failed save leaves any existing file
    /// untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(dir)?;
        let written = TreeWriter::new(temp_file.as_file_mut(), CodecConfig::default())
            .write_tree(self)?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| Error::Io(e.error))?;

        log::info!(
            "Saved tree to {:?} ({} nodes, {} bytes)",
            path,
            self.node_count(),
            written
        );
        Ok(written)
    }

    /// Load a tree from `path` with the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Tree> {
        Self::load_with(path, CodecConfig::default())
    }

    /// Load a tree from `path` by memory-mapping the file.
    pub fn load_with(path: impl AsRef<Path>, config: CodecConfig) -> Result<Tree> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < HEADER_SIZE {
            return Err(Error::invalid(format!(
                "file too short: {} bytes, header needs {}",
                mmap.len(),
                HEADER_SIZE
            )));
        }

        let tree = TreeReader::new(&mmap[..], config).read_tree()?;
        log::info!(
            "Loaded tree from {:?} ({} nodes)",
            path,
            tree.node_count()
        );
        Ok(tree)
    }
}
