//! Alphabets accepted on input and nucleotide helpers shared by the
//! constraint implementations.
//!
//! Input is validated case-insensitively; everything downstream works on
//! uppercase bytes.

/// A fixed set of valid uppercase bytes for one kind of sequence.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte is valid, ignoring case.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b.to_ascii_uppercase())
    }

    /// Position and character of the first byte outside the alphabet.
    fn first_invalid(seq: &[u8]) -> Option<(usize, char)> {
        seq.iter()
            .position(|&b| !Self::is_valid(b))
            .map(|pos| (pos, seq[pos] as char))
    }
}

/// Unambiguous coding DNA: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodingDna;

impl Alphabet for CodingDna {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// The 20 standard amino acids plus `*` for stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinResidues;

impl Alphabet for ProteinResidues {
    const NAME: &'static str = "Protein";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWY*";
}

/// Complement of a single IUPAC nucleotide code.
pub fn complement(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        // S, W and N are their own complement
        other => other,
    }
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

/// Number of G and C bases in `seq`.
pub fn gc_count(seq: &[u8]) -> usize {
    seq.iter()
        .filter(|&&b| matches!(b.to_ascii_uppercase(), b'G' | b'C'))
        .count()
}

/// Check if a single base matches an IUPAC degenerate code.
pub fn iupac_matches(code: u8, base: u8) -> bool {
    let base_upper = base.to_ascii_uppercase();
    match code.to_ascii_uppercase() {
        b'A' => base_upper == b'A',
        b'C' => base_upper == b'C',
        b'G' => base_upper == b'G',
        b'T' => base_upper == b'T',
        b'R' => matches!(base_upper, b'A' | b'G'),
        b'Y' => matches!(base_upper, b'C' | b'T'),
        b'M' => matches!(base_upper, b'A' | b'C'),
        b'K' => matches!(base_upper, b'G' | b'T'),
        b'S' => matches!(base_upper, b'G' | b'C'),
        b'W' => matches!(base_upper, b'A' | b'T'),
        b'H' => matches!(base_upper, b'A' | b'C' | b'T'),
        b'B' => matches!(base_upper, b'C' | b'G' | b'T'),
        b'V' => matches!(base_upper, b'A' | b'C' | b'G'),
        b'D' => matches!(base_upper, b'A' | b'G' | b'T'),
        b'N' => matches!(base_upper, b'A' | b'C' | b'G' | b'T'),
        _ => false,
    }
}
