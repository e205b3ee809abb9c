use std::sync::Arc;

use codonopt_contracts::{
    EngineError, EngineRng, GcWindow, OptimizationSpec, SequenceEngine,
};
use codonopt_core::alphabet::gc_count;
use codonopt_core::{
    ChiselEngine, CodonOptimizationService, GeneticCode, RngSource,
    SolverSettings,
};
use codonopt_model::{CodonOptimizeRequest, Sequence, SequenceType};
use rand::SeedableRng;

const GFP_FRAGMENT: &str =
    "MSKGEELFTGVVPILVELDGDVNGHKFSVSGEGEGDATYGKLTLKFICTTGKLPVPWPTLVTTL*";

fn service(seed: u64) -> CodonOptimizationService {
    let engine = ChiselEngine::new(
        &OptimizationSpec::default(),
        SolverSettings::default(),
    )
    .expect("default engine");
    CodonOptimizationService::new(Arc::new(engine), RngSource::Seeded(seed))
}

fn assert_gc_windows(dna: &str, gc: GcWindow) {
    let bytes = dna.as_bytes();
    let window = gc.window.min(bytes.len());
    for start in 0..=bytes.len() - window {
        let fraction =
            gc_count(&bytes[start..start + window]) as f64 / window as f64;
        assert!(
            fraction >= gc.min - 1e-9 && fraction <= gc.max + 1e-9,
            "window at {start} has GC {fraction:.3}"
        );
    }
}

fn assert_no_bsai(dna: &str) {
    assert!(!dna.contains("GGTCTC"), "forward BsaI site in {dna}");
    assert!(!dna.contains("GAGACC"), "reverse BsaI site in {dna}");
}

#[test]
fn dna_input_keeps_protein_and_satisfies_constraints() {
    let request = CodonOptimizeRequest {
        sequences: vec![Sequence::dna("mkr", "ATGAAACGTTAA")],
    };
    let response = service(1).optimize_batch(&request).unwrap();

    let optimized = &response.sequences[0].codon_optimized;
    assert_eq!(optimized.kind, SequenceType::Dna);
    assert_eq!(optimized.seq.len(), 12);
    assert_eq!(
        GeneticCode::standard().translate_str(&optimized.seq).unwrap(),
        "MKR*"
    );
    assert_gc_windows(&optimized.seq, GcWindow::default());
    assert_no_bsai(&optimized.seq);
}

#[test]
fn protein_input_is_reverse_translated() {
    let request = CodonOptimizeRequest {
        sequences: vec![Sequence::protein("mkr", "MKR*")],
    };
    let response = service(2).optimize_batch(&request).unwrap();

    let entry = &response.sequences[0];
    assert_eq!(entry.original, request.sequences[0]);
    assert_eq!(
        GeneticCode::standard()
            .translate_str(&entry.codon_optimized.seq)
            .unwrap(),
        "MKR*"
    );
}

#[test]
fn planted_sites_and_at_rich_stretch_are_repaired() {
    // ATG, twenty AAA, then GGT CTC GAG ACC (G L E T) and a stop
    let dna = format!("ATG{}GGTCTCGAGACCTAA", "AAA".repeat(20));
    let request = CodonOptimizeRequest {
        sequences: vec![Sequence::dna("planted", dna.as_str())],
    };
    let response = service(3).optimize_batch(&request).unwrap();

    let optimized = &response.sequences[0].codon_optimized.seq;
    let code = GeneticCode::standard();
    assert_eq!(
        code.translate_str(optimized).unwrap(),
        code.translate_str(&dna).unwrap()
    );
    assert_no_bsai(optimized);
    assert_gc_windows(optimized, GcWindow::default());
}

#[test]
fn longer_protein_meets_every_constraint() {
    let request = CodonOptimizeRequest {
        sequences: vec![Sequence::protein("gfp", GFP_FRAGMENT)],
    };
    let response = service(4).optimize_batch(&request).unwrap();

    let optimized = &response.sequences[0].codon_optimized.seq;
    assert_eq!(optimized.len(), GFP_FRAGMENT.len() * 3);
    assert_eq!(
        GeneticCode::standard().translate_str(optimized).unwrap(),
        GFP_FRAGMENT
    );
    assert_no_bsai(optimized);
    assert_gc_windows(optimized, GcWindow::default());
}

#[test]
fn poly_lysine_protein_is_lifted_above_the_gc_floor() {
    // AAA is the preferred lysine codon; only AAG keeps 50 bp windows at 30%
    let protein = format!("M{}*", "K".repeat(200));
    let request = CodonOptimizeRequest {
        sequences: vec![Sequence::protein("polyk", protein.as_str())],
    };
    let response = service(1).optimize_batch(&request).unwrap();

    let optimized = &response.sequences[0].codon_optimized.seq;
    assert_eq!(optimized.len(), protein.len() * 3);
    assert_eq!(
        GeneticCode::standard().translate_str(optimized).unwrap(),
        protein
    );
    assert_gc_windows(optimized, GcWindow::default());
}

#[test]
fn long_at_rich_inputs_resolve() {
    let protein = format!("M{}*", "K".repeat(1000));
    let dna = format!("ATG{}TAA", "AAA".repeat(300));
    let request = CodonOptimizeRequest {
        sequences: vec![
            Sequence::protein("polyk-1000", protein.as_str()),
            Sequence::dna("polya-dna", dna.as_str()),
        ],
    };
    let response = service(6).optimize_batch(&request).unwrap();

    let code = GeneticCode::standard();
    for (entry, expected) in response.sequences.iter().zip([
        protein.clone(),
        code.translate_str(&dna).unwrap(),
    ]) {
        let optimized = &entry.codon_optimized.seq;
        assert_eq!(code.translate_str(optimized).unwrap(), expected);
        assert_gc_windows(optimized, GcWindow::default());
        assert_no_bsai(optimized);
    }
}

#[test]
fn seeded_batches_are_reproducible() {
    let request = CodonOptimizeRequest {
        sequences: vec![
            Sequence::protein("a", GFP_FRAGMENT),
            Sequence::dna("b", "ATGGGTCTCAAATAA"),
        ],
    };
    let first = service(42).optimize_batch(&request).unwrap();
    let second = service(42).optimize_batch(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn out_of_frame_dna_fails_the_batch() {
    let request = CodonOptimizeRequest {
        sequences: vec![
            Sequence::dna("fine", "ATGTAA"),
            Sequence::dna("short", "ATGAA"),
        ],
    };
    let err = service(5).optimize_batch(&request).unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.name, "short");
    assert_eq!(err.source, EngineError::FrameLength { length: 5 });
}

#[test]
fn other_species_and_patterns_are_supported() {
    let spec = OptimizationSpec {
        avoid_pattern: "EcoRI_site".to_string(),
        species: "h_sapiens".to_string(),
        ..OptimizationSpec::default()
    };
    let engine = ChiselEngine::new(&spec, SolverSettings::default()).unwrap();
    let mut rng = EngineRng::seed_from_u64(8);

    // GAA TTC encodes E F and spells EcoRI
    let result = engine
        .resolve_and_optimize("ATGGAATTCAAGTAA", &mut rng)
        .unwrap();
    assert!(!result.contains("GAATTC"));
    assert_eq!(
        GeneticCode::standard().translate_str(&result).unwrap(),
        "MEFK*"
    );
}
