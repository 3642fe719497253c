//! Matrix encoding pipeline
//!
//! Turns a byte payload into a finished module grid in two passes over a
//! fresh matrix:
//! - Version selection against the capacity table
//! - Function pattern placement (finder, timing, alignment)
//! - Bit stream construction (mode, count, data, terminator, padding)
//! - Zigzag data placement with a fixed mask predicate
//!
//! The output is structurally QR-shaped but carries no Reed-Solomon error
//! correction codewords, so it is not standards-compliant for adversarial
//! scanning conditions.

/// Bit stream construction for byte-mode payloads
pub mod bitstream;
/// Capacity table, version selection and structural bit capacity
pub mod capacity;
/// Function pattern placement (finder, timing, alignment)
pub mod patterns;
/// Zigzag traversal and masked data placement
pub mod placement;

use log::debug;
use thiserror::Error;

use crate::models::{ECLevel, MaskPattern, ModuleMatrix, QrSymbol};
use bitstream::BitStreamBuilder;

/// Failure cases for matrix encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Payload exceeds the capacity of the largest supported version.
    /// Surfaced instead of clamping; a clamped symbol would silently carry
    /// a truncated stream.
    #[error("payload of {len} bytes exceeds the maximum capacity of {max} bytes")]
    PayloadTooLarge {
        /// Offending payload length in bytes
        len: usize,
        /// Capacity of the largest supported version in bytes
        max: usize,
    },
}

/// Structural matrix encoder
///
/// Pure, synchronous, one matrix per call; concurrent calls share nothing.
pub struct MatrixEncoder;

impl MatrixEncoder {
    /// Encode a payload into a finished symbol.
    ///
    /// Picks the smallest version that fits, stamps function patterns,
    /// builds the bit stream and places it under `mask`. Fails only when the
    /// payload exceeds the largest version's capacity.
    pub fn encode(
        payload: &[u8],
        level: ECLevel,
        mask: MaskPattern,
    ) -> Result<QrSymbol, EncodeError> {
        let version = capacity::select_version(payload.len())?;
        debug!(
            "selected version {} ({}x{}) for {} byte payload",
            version.number(),
            version.size(),
            version.size(),
            payload.len()
        );

        let mut matrix = ModuleMatrix::new(version.size());
        patterns::place_function_patterns(&mut matrix, version);
        debug!(
            "function patterns placed, {} data modules remain",
            matrix.unset_count()
        );

        let stream = BitStreamBuilder::build(payload, version);
        debug!(
            "bit stream built: {} bits against {} bit capacity",
            stream.len(),
            capacity::data_bits(version)
        );

        placement::place_data(&mut matrix, &stream, mask);
        debug_assert_eq!(matrix.unset_count(), 0);

        Ok(QrSymbol {
            version,
            error_correction: level,
            mask_pattern: mask,
            modules: matrix.into_bits(),
        })
    }
}
