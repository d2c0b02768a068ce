//! Binary format constants and header.
//!
//! All integers are big-endian.
//!
//! ```text
//! +----------------------+
//! |  MAGIC "CTRE"        |  4 bytes
//! |  VERSION             |  u32
//! |  NODE COUNT          |  u32, root included
//! +----------------------+
//! |  NODE RECORDS        |  pre-order, root first
//! +----------------------+
//! ```
//!
//! Each node record is `[u16 label len][label][u8 is_word][u8 child count]`
//! followed by `child count` repetitions of `[u8 key][child record]`.

use std::io::{Read, Write};

use crate::{Error, Result};

/// Magic bytes for identifying compressed trie files.
pub const MAGIC: [u8; 4] = *b"CTRE";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 12;

/// Longest label a node record can hold.
pub const MAX_LABEL_LEN: usize = u16::MAX as usize;

/// Most children a node record can hold.
pub const MAX_CHILDREN: usize = u8::MAX as usize;

/// Largest node count the header can hold.
pub const MAX_NODE_COUNT: u64 = u32::MAX as u64;

/// File header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeHeader {
    /// Magic bytes: "CTRE"
    pub magic: [u8; 4],
    /// Format version
    pub version: u32,
    /// Total number of nodes, root included
    pub node_count: u32,
}

impl TreeHeader {
    /// Create a header for a tree of `node_count` nodes.
    pub fn new(node_count: u32) -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            node_count,
        }
    }

    /// Validate the magic, then the version.
    pub fn validate(&self) -> Result<()> {
        if self.magic != MAGIC {
            return Err(Error::invalid(format!(
                "bad magic bytes {:02x?}, expected {:02x?}",
                self.magic, MAGIC
            )));
        }
        if self.version != FORMAT_VERSION {
            return Err(Error::UnsupportedVersion(self.version));
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.magic);
        buf[4..8].copy_from_slice(&self.version.to_be_bytes());
        buf[8..12].copy_from_slice(&self.node_count.to_be_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8; HEADER_SIZE]) -> Self {
        Self {
            magic: [buf[0], buf[1], buf[2], buf[3]],
            version: u32::from_be_bytes([buf[4], buf[5], buf[6], buf[7]]),
            node_count: u32::from_be_bytes([buf[8], buf[9], buf[10], buf[11]]),
        }
    }

    /// Write the header to a sink.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read a header from a source. It is not validated.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        r.read_exact(&mut buf)
            .map_err(|e| Error::from_read(e, "header"))?;
        Ok(Self::from_bytes(&buf))
    }
}
