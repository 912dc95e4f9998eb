use crate::domain::encoding::one_hot;
use crate::domain::model::{PairDistance, PairSelection, SiteSequences};

/// Counts differing positions over the common prefix of `x` and `y`.
///
/// ```
/// use sec_pipe::domain::distance::hamming;
///
/// assert_eq!(hamming(b"ACGTACGT", b"ACCTACGA"), 2);
/// ```
pub fn hamming(x: &[u8], y: &[u8]) -> usize {
    x.iter().zip(y).filter(|(a, b)| a != b).count()
}

/// Sum of squared differences between two slot vectors, the shorter one
/// padded with zeros.
pub fn squared_distance(x: &[u8], y: &[u8]) -> u64 {
    let len = x.len().max(y.len());
    (0..len)
        .map(|i| {
            let a = i64::from(x.get(i).copied().unwrap_or(0));
            let b = i64::from(y.get(i).copied().unwrap_or(0));
            ((a - b) * (a - b)) as u64
        })
        .sum()
}

/// Distance between two nucleotide sequences computed on their one-hot
/// encodings: half the squared distance, rounded down.
///
/// Two different bases differ in two slots, so for equal-length `ACGT`
/// sequences this is the Hamming distance. A base against padding or an
/// unknown symbol differs in one slot and counts one half.
pub fn encoded_distance(x: &[u8], y: &[u8]) -> u64 {
    squared_distance(&one_hot(x), &one_hot(y)) / 2
}

/// Compares the selected site A × site B pairs, in row-major order.
pub fn pairwise(
    site_a: &SiteSequences,
    site_b: &SiteSequences,
    selection: PairSelection,
) -> Vec<PairDistance> {
    // 先編碼一次，避免每一對重複計算
    let encoded_b: Vec<Vec<u8>> = site_b
        .records
        .iter()
        .map(|r| one_hot(r.sequence.as_bytes()))
        .collect();

    let mut pairs = Vec::new();
    for (i, a) in site_a.records.iter().enumerate() {
        let encoded_a = one_hot(a.sequence.as_bytes());
        for (j, b) in site_b.records.iter().enumerate() {
            if !selection.includes(i, j) {
                continue;
            }
            let distance = squared_distance(&encoded_a, &encoded_b[j]) / 2;
            tracing::debug!("Different between A {} and B {} is: {}", i, j, distance);
            pairs.push(PairDistance {
                a_index: i,
                b_index: j,
                a_header: a.header.clone(),
                b_header: b.header.clone(),
                distance,
            });
        }
    }
    pairs
}
