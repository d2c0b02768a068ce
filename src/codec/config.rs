//! Codec configuration.

/// Default I/O buffer size for the writer and reader.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Configuration for [`TreeWriter`](super::TreeWriter) and
/// [`TreeReader`](super::TreeReader).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Size of the I/O buffer. Bounds memory used while streaming.
    pub buffer_size: usize,
    /// Fail decoding when the header node count differs from the number
    /// of node records actually read.
    pub verify_node_count: bool,
    /// Fail decoding when a stored word is not valid UTF-8.
    pub require_utf8: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            verify_node_count: true,
            require_utf8: false,
        }
    }
}

impl CodecConfig {
    /// Create a configuration with the specified buffer size.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
            ..Self::default()
        }
    }

    /// Default configuration: node count verified, words are raw bytes.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Trust the header node count without cross-checking it.
    pub fn lenient() -> Self {
        Self {
            verify_node_count: false,
            ..Self::default()
        }
    }

    /// Strict configuration that also requires every word to be UTF-8.
    pub fn text() -> Self {
        Self {
            require_utf8: true,
            ..Self::default()
        }
    }
}
