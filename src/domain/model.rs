use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `FASTA` record. The header is stored without its leading `>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

/// The two data holders taking part in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Site {
    A,
    B,
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::A => write!(f, "A"),
            Site::B => write!(f, "B"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSequences {
    pub site: Site,
    pub source: String,
    pub records: Vec<FastaRecord>,
}

impl SiteSequences {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Extracted input of a comparison run.
#[derive(Debug, Clone)]
pub struct SitePair {
    pub site_a: SiteSequences,
    pub site_b: SiteSequences,
}

/// Which `(i, j)` index pairs of site A × site B get compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairSelection {
    /// Only `i == j`.
    Diagonal,
    /// `j >= i`.
    #[default]
    Upper,
    /// Every combination.
    All,
}

impl PairSelection {
    pub const NAMES: [&'static str; 3] = ["diagonal", "upper", "all"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "diagonal" => Some(PairSelection::Diagonal),
            "upper" => Some(PairSelection::Upper),
            "all" => Some(PairSelection::All),
            _ => None,
        }
    }

    pub fn includes(&self, a_index: usize, b_index: usize) -> bool {
        match self {
            PairSelection::Diagonal => a_index == b_index,
            PairSelection::Upper => b_index >= a_index,
            PairSelection::All => true,
        }
    }
}

impl fmt::Display for PairSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PairSelection::Diagonal => "diagonal",
            PairSelection::Upper => "upper",
            PairSelection::All => "all",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairDistance {
    pub a_index: usize,
    pub b_index: usize,
    pub a_header: String,
    pub b_header: String,
    pub distance: u64,
}

impl PairDistance {
    /// `A_<i>_B_<j>`
    pub fn key(&self) -> String {
        format!("{}_{}_{}_{}", Site::A, self.a_index, Site::B, self.b_index)
    }

    /// `A_<i>_B_<j>:<distance>`
    pub fn report_line(&self) -> String {
        format!("{}:{}", self.key(), self.distance)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceReport {
    pub site_a_count: usize,
    pub site_b_count: usize,
    pub selection: PairSelection,
    pub pairs: Vec<PairDistance>,
    pub generated_at: String,
}

impl DistanceReport {
    /// Plain text body, one `A_i_B_j:d` line per pair.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for pair in &self.pairs {
            out.push_str(&pair.report_line());
            out.push('\n');
        }
        out
    }
}

/// Exit information of a shell command that was started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub command: String,
    pub code: Option<i32>,
    pub success: bool,
}
