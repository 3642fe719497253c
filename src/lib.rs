//! qrgrid - Structural QR-style matrix code generation
//!
//! A pure Rust library that turns a byte payload into a QR-shaped grid of
//! dark/light modules: version selection, function pattern placement, bit
//! stream construction, zigzag data placement and masking.
//!
//! The encoder is structural only: byte mode, a fixed mask, and no
//! Reed-Solomon error correction codewords. The produced grids carry the
//! familiar QR geometry but are not standards-compliant symbols for
//! adversarial scanning conditions.
//!
//! ```
//! use qrgrid::{ECLevel, encode_text};
//!
//! let symbol = encode_text("groceries: milk, eggs", ECLevel::M).unwrap();
//! assert_eq!(symbol.size(), symbol.version.size());
//! let image = qrgrid::render::to_image(&symbol, 4);
//! assert!(image.width() > 0);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Matrix encoding pipeline (version selection, patterns, bit stream, placement)
pub mod encoder;
/// Core data structures (QrSymbol, ModuleMatrix, BitMatrix, Version, etc.)
pub mod models;
/// Raster and terminal rendering of finished symbols
pub mod render;

pub use encoder::EncodeError;
pub use models::{BitMatrix, ECLevel, MaskPattern, Module, ModuleMatrix, QrSymbol, Version};

use encoder::MatrixEncoder;
use rayon::prelude::*;

/// Encode a byte payload into a module grid
///
/// # Arguments
/// * `payload` - Raw bytes to encode (byte mode)
/// * `level` - Error correction level, carried as metadata on the symbol
///
/// # Returns
/// The finished symbol, or `EncodeError::PayloadTooLarge` when the payload
/// exceeds the capacity of the largest supported version
pub fn encode(payload: &[u8], level: ECLevel) -> Result<QrSymbol, EncodeError> {
    MatrixEncoder::encode(payload, level, MaskPattern::default())
}

/// Encode UTF-8 text into a module grid
///
/// Convenience wrapper over [`encode`] for callers holding text rather than
/// bytes
pub fn encode_text(text: &str, level: ECLevel) -> Result<QrSymbol, EncodeError> {
    encode(text.as_bytes(), level)
}

/// Encode many independent payloads across the rayon thread pool
///
/// Each encode call owns its own matrix and stream, so the payloads are
/// processed in parallel without synchronization. Results come back in input
/// order, one per payload.
pub fn encode_batch(payloads: &[&[u8]], level: ECLevel) -> Vec<Result<QrSymbol, EncodeError>> {
    payloads
        .par_iter()
        .map(|payload| encode(payload, level))
        .collect()
}

/// Encoder with configuration options
///
/// Holds the error correction level and mask predicate applied to every
/// encode call made through it. The free functions above cover the common
/// case; this handle is for callers that want a non-default mask.
pub struct Encoder {
    level: ECLevel,
    mask: MaskPattern,
}

impl Encoder {
    /// Create an encoder with default settings (level M, checkerboard mask)
    pub fn new() -> Self {
        Self {
            level: ECLevel::default(),
            mask: MaskPattern::default(),
        }
    }

    /// Set the error correction level recorded on produced symbols
    pub fn with_level(mut self, level: ECLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the mask predicate applied to data modules
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = mask;
        self
    }

    /// Encode a byte payload with this encoder's settings
    pub fn encode(&self, payload: &[u8]) -> Result<QrSymbol, EncodeError> {
        MatrixEncoder::encode(payload, self.level, self.mask)
    }

    /// Encode UTF-8 text with this encoder's settings
    pub fn encode_text(&self, text: &str) -> Result<QrSymbol, EncodeError> {
        self.encode(text.as_bytes())
    }

    /// Encode many payloads in parallel with this encoder's settings
    pub fn encode_batch(&self, payloads: &[&[u8]]) -> Vec<Result<QrSymbol, EncodeError>> {
        payloads
            .par_iter()
            .map(|payload| self.encode(payload))
            .collect()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
