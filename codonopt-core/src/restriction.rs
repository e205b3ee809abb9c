//! Restriction enzyme catalogue and recognition site search on both
//! strands.

use codonopt_contracts::{EngineError, EngineResult};

use crate::alphabet::{iupac_matches, reverse_complement};

/// A restriction enzyme and the site it recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionEnzyme {
    pub name: &'static str,
    /// Recognition site in uppercase IUPAC DNA.
    pub site: &'static str,
}

const fn enzyme(name: &'static str, site: &'static str) -> RestrictionEnzyme {
    RestrictionEnzyme { name, site }
}

/// Type IIS enzymes used in Golden Gate assembly, followed by common
/// cloning enzymes.
pub const ENZYMES: &[RestrictionEnzyme] = &[
    enzyme("BsaI", "GGTCTC"),
    enzyme("BsmBI", "CGTCTC"),
    enzyme("BbsI", "GAAGAC"),
    enzyme("SapI", "GCTCTTC"),
    enzyme("EcoRI", "GAATTC"),
    enzyme("BamHI", "GGATCC"),
    enzyme("HindIII", "AAGCTT"),
    enzyme("NotI", "GCGGCCGC"),
    enzyme("XhoI", "CTCGAG"),
    enzyme("XbaI", "TCTAGA"),
    enzyme("NdeI", "CATATG"),
    enzyme("NcoI", "CCATGG"),
    enzyme("PstI", "CTGCAG"),
    enzyme("KpnI", "GGTACC"),
    enzyme("SacI", "GAGCTC"),
];

/// Case-insensitive enzyme lookup.
pub fn find_enzyme(name: &str) -> Option<&'static RestrictionEnzyme> {
    ENZYMES
        .iter()
        .find(|enzyme| enzyme.name.eq_ignore_ascii_case(name))
}

/// A pattern searched on the forward strand and its reverse complement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePattern {
    label: String,
    forward: Vec<u8>,
    reverse: Vec<u8>,
}

impl SitePattern {
    /// Build a pattern from `BsaI_site`, `BsaI`, or a literal IUPAC string
    /// such as `GGTCTC`.
    pub fn from_spec(spec: &str) -> EngineResult<Self> {
        let trimmed = spec.trim();
        let name = trimmed
            .strip_suffix("_site")
            .or_else(|| trimmed.strip_suffix("_SITE"))
            .unwrap_or(trimmed);

        if let Some(enzyme) = find_enzyme(name) {
            return Ok(Self::new(format!("{}_site", enzyme.name), enzyme.site));
        }

        if !trimmed.is_empty() && trimmed.bytes().all(is_iupac) {
            let upper = trimmed.to_ascii_uppercase();
            return Ok(Self::new(upper.clone(), &upper));
        }

        Err(EngineError::UnknownPattern(spec.to_string()))
    }

    fn new(label: String, site: &str) -> Self {
        let forward = site.as_bytes().to_ascii_uppercase();
        let reverse = reverse_complement(&forward);
        Self {
            label,
            forward,
            reverse,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Whether the site reads the same on both strands (e.g. `GAATTC`).
    pub fn is_palindromic(&self) -> bool {
        self.forward == self.reverse
    }

    /// Start positions of every match, on either strand, in forward
    /// coordinates. Sorted and deduplicated.
    pub fn find_all(&self, seq: &[u8]) -> Vec<usize> {
        let mut hits = scan(seq, &self.forward);
        if !self.is_palindromic() {
            hits.extend(scan(seq, &self.reverse));
            hits.sort_unstable();
            hits.dedup();
        }
        hits
    }

    /// Whether `seq` contains at least one match on either strand.
    pub fn occurs_in(&self, seq: &[u8]) -> bool {
        contains(seq, &self.forward)
            || (!self.is_palindromic() && contains(seq, &self.reverse))
    }
}

fn is_iupac(b: u8) -> bool {
    b"ACGTRYMKSWHBVDN".contains(&b.to_ascii_uppercase())
}

fn matches_at(seq: &[u8], site: &[u8], at: usize) -> bool {
    site.iter()
        .zip(&seq[at..at + site.len()])
        .all(|(&code, &base)| iupac_matches(code, base))
}

fn scan(seq: &[u8], site: &[u8]) -> Vec<usize> {
    if site.is_empty() || seq.len() < site.len() {
        return Vec::new();
    }
    (0..=seq.len() - site.len())
        .filter(|&at| matches_at(seq, site, at))
        .collect()
}

fn contains(seq: &[u8], site: &[u8]) -> bool {
    if site.is_empty() || seq.len() < site.len() {
        return false;
    }
    (0..=seq.len() - site.len()).any(|at| matches_at(seq, site, at))
}
