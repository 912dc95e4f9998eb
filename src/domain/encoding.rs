/// Slots per encoded nucleotide.
pub const SLOTS_PER_BASE: usize = 4;

/// One-hot slots for a nucleotide: `A = 0001`, `G = 0010`, `C = 0100`,
/// `T = 1000`. Anything else is all zeros but still occupies a position.
#[inline]
pub fn encode_base(base: u8) -> [u8; SLOTS_PER_BASE] {
    match base.to_ascii_uppercase() {
        b'A' => [0, 0, 0, 1],
        b'G' => [0, 0, 1, 0],
        b'C' => [0, 1, 0, 0],
        b'T' => [1, 0, 0, 0],
        _ => [0, 0, 0, 0],
    }
}

pub fn one_hot(sequence: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(sequence.len() * SLOTS_PER_BASE);
    for &base in sequence {
        encoded.extend_from_slice(&encode_base(base));
    }
    encoded
}
