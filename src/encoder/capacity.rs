/// Version capacity lookup and selection
use crate::encoder::EncodeError;
use crate::models::Version;

/// Maximum payload bytes per version, indexed by version minus one.
///
/// Structural byte-mode capacities for the supported range; not the official
/// per-EC-level capacity table.
const PAYLOAD_CAPACITY: [usize; 20] = [
    17, 32, 53, 78, 106, 134, 154, 192, 192, 230, 271, 321, 367, 425, 458, 520, 586, 644, 718, 792,
];

/// Maximum payload bytes the largest supported version can hold
pub fn max_payload_bytes() -> usize {
    PAYLOAD_CAPACITY[PAYLOAD_CAPACITY.len() - 1]
}

/// Maximum payload bytes for a given version
pub fn payload_capacity(version: Version) -> usize {
    PAYLOAD_CAPACITY[version.number() as usize - 1]
}

/// Pick the smallest version whose capacity covers the payload.
///
/// Oversized payloads are a hard error, never clamped to the largest
/// version: a clamped symbol would carry a truncated, inconsistent stream.
pub fn select_version(payload_len: usize) -> Result<Version, EncodeError> {
    (Version::MIN.number()..=Version::MAX.number())
        .filter_map(Version::new)
        .find(|version| payload_capacity(*version) >= payload_len)
        .ok_or(EncodeError::PayloadTooLarge {
            len: payload_len,
            max: max_payload_bytes(),
        })
}

/// Structural data capacity of a version, in bits.
///
/// Estimates the function-module count (finder/timing base of 192, alignment
/// overhead for version 2+, format/version info for version 7+), converts the
/// remainder to whole bytes, and reserves a fixed per-version overhead. This
/// approximates the layout produced by the pattern placer; it is not the
/// official codeword capacity table and reserves no room for error
/// correction codewords.
pub fn data_bits(version: Version) -> usize {
    let v = version.number() as usize;
    let side = version.size();

    let mut functional = 192;
    if v > 1 {
        let intervals = v / 7 + 1;
        functional += intervals * intervals * 25 - 10;
    }
    if v > 6 {
        functional += 67;
    }

    let reserved = match v {
        1 => 13,
        2..=6 => 22,
        _ => 36,
    };

    let data_bytes = (side * side - functional) / 8 - reserved;
    data_bytes * 8
}
