//! ctrie - A compressed trie (radix tree) over byte strings.
//!
//! This crate provides a space-efficient ordered set of byte strings with
//! exact-word and prefix queries, and a compact binary file format so a
//! tree can be built offline and loaded cheaply at runtime.
//!
//! # Features
//!
//! - **Prefix compression**: shared prefixes are stored once, as edge labels
//! - **Prefix queries**: every stored word starting with a prefix, sorted
//! - **Byte oriented**: words are raw bytes; UTF-8 is never assumed
//! - **Binary format**: streaming, buffered writer and reader
//! - **Atomic save**: files are replaced only after a complete write
//!
//! # Quick Start
//!
//! ```
//! use ctrie::Tree;
//!
//! let mut tree = Tree::new();
//! for word in ["test", "toaster", "toasting"] {
//!     tree.insert(word);
//! }
//!
//! assert_eq!(
//!     tree.find_words_with_prefix("to"),
//!     vec![b"toaster".to_vec(), b"toasting".to_vec()]
//! );
//!
//! let data = tree.to_bytes()?;
//! let loaded = ctrie::Tree::from_bytes(&data)?;
//! assert!(loaded.contains("test"));
//! # Ok::<(), ctrie::Error>(())
//! ```
//!
//! # Lifecycle
//!
//! A tree is built under exclusive ownership, then serialized or queried.
//! There is no deletion and no interior mutability, so a finished tree can
//! be shared across threads behind an `Arc` and queried concurrently.

mod error;

pub mod codec;
pub mod tree;
pub mod words;

// Re-export core types
pub use error::{Error, Result};
pub use tree::{Node, Tree};

// Re-export codec types
pub use codec::{CodecConfig, TreeReader, TreeWriter};

// Re-export word list parsing
pub use words::WordListReader;
