//! # Integration Tests for nlb-wiring
//!
//! End-to-end flows an optimizer driver goes through: build or sample a
//! batch, pull a column, round it, decode it, and check the formulas against
//! the original tables.

use rand::rngs::StdRng;
use rand::SeedableRng;

use nlb_core::{CorrelationBox, NlbError, WiringError};
use nlb_wiring::layout::pattern_args;
use nlb_wiring::{
    decode_wiring, encode_wiring, explain_relaxed, known_collapsing_wirings, random_extremal_wiring,
    random_wiring, DecodeOptions, ExtremalWiring, ProcessingFunction, RelaxedWiring,
    WiringFamily, WiringFunctions,
};

/// Helper: every formula in `decoded` reproduces the matching table in
/// `functions` on all argument tuples.
fn assert_formulas_match(functions: &WiringFunctions, wiring: &ExtremalWiring) {
    let decoded = decode_wiring(wiring);
    for table in functions.iter() {
        let function = table.function();
        for index in 0..function.table_len() {
            let args = pattern_args(function.arity(), index);
            assert_eq!(
                decoded.get(function).evaluate(&args),
                table.value(&args),
                "{} at {args:?}",
                decoded.get(function)
            );
        }
    }
}

// -- Encode / decode ----------------------------------------------------------

#[test]
fn test_round_trip_every_family() {
    for &family in WiringFamily::all() {
        let functions = family.functions();
        let wiring = encode_wiring(&functions).unwrap().to_extremal();
        assert_formulas_match(&functions, &wiring);
    }
}

#[test]
fn test_round_trip_exhaustive_two_bit_rules() {
    // All 16 two-bit functions in the f_1 slot, a fixed rest.
    for code in 0u8..16 {
        let functions = WiringFunctions::from_rules(
            move |x, a2| (code >> (2 * x + a2)) & 1,
            |y, _| y,
            |x, _| x,
            |y, _| y,
            |_, a1, a2| a1 ^ a2,
            |_, b1, b2| b1 ^ b2,
        );
        assert_formulas_match(&functions, &encode_wiring(&functions).unwrap().to_extremal());
    }
}

#[test]
fn test_bs09_concrete_vector() {
    let expected = [
        0., 0., 1., 1., 0., 0., 1., 1., 0., 0., 0., 1., 0., 0., 0., 1., //
        0., 1., 1., 0., 0., 1., 1., 0., 0., 1., 1., 0., 0., 1., 1., 0.,
    ];
    assert_eq!(WiringFamily::Bs09.wiring().unwrap().entries(), &expected);
    let batch = WiringFamily::Bs09.batch(3).unwrap();
    for column in batch.as_array().columns() {
        assert_eq!(column.to_vec(), expected.to_vec());
    }
}

#[test]
fn test_bs09_printed_formulas() {
    let decoded = WiringFamily::Bs09.wiring().unwrap().to_extremal().decode();
    assert_eq!(
        decoded.to_string(),
        "f_1(x,a2) = x\n\
         g_1(y,b2) = y\n\
         f_2(x,a1) = x·a1\n\
         g_2(y,b1) = y·b1\n\
         f_3(x,a1,a2) = a1 ⊕ a2\n\
         g_3(y,b1,b2) = b1 ⊕ b2"
    );
}

// -- Rounding -----------------------------------------------------------------

#[test]
fn test_rounding_idempotent_on_samples() {
    let mut rng = StdRng::seed_from_u64(2024);
    let relaxed = random_wiring(&mut rng, 16).unwrap();
    let once = relaxed.to_extremal();
    let twice = once.to_relaxed().to_extremal();
    assert_eq!(once, twice);

    let extremal = random_extremal_wiring(&mut rng, 16).unwrap();
    assert_eq!(extremal.to_relaxed().to_extremal(), extremal);
}

#[test]
fn test_sampled_columns_decode() {
    let mut rng = StdRng::seed_from_u64(5);
    let batch = random_extremal_wiring(&mut rng, 8).unwrap();
    for i in 0..batch.len() {
        let wiring = batch.column(i).unwrap();
        let functions = WiringFunctions::from_wiring(&wiring.to_relaxed());
        assert_formulas_match(&functions, &wiring);
    }
}

// -- Relaxed decoding ---------------------------------------------------------

#[test]
fn test_catalog_decodes_after_rounding() {
    for wiring in known_collapsing_wirings() {
        let decoded = decode_wiring(&wiring.to_extremal());
        assert!(decoded.iter().all(|e| e.is_boolean()));
    }
}

#[test]
fn test_relaxed_catalog_entry_needs_rounding() {
    let relaxed = known_collapsing_wirings()[12];
    assert_eq!(
        explain_relaxed(&relaxed, &DecodeOptions::default()).unwrap_err(),
        WiringError::NonBooleanEntry {
            index: 12,
            value: 0.0122
        }
    );
    let loose = DecodeOptions {
        tolerance: 0.05,
        ..DecodeOptions::default()
    };
    assert_eq!(
        explain_relaxed(&relaxed, &loose).unwrap(),
        decode_wiring(&relaxed.to_extremal())
    );
    let lenient = explain_relaxed(&relaxed, &DecodeOptions::lenient()).unwrap();
    assert!(!lenient.get(ProcessingFunction::G2).is_boolean());
}

#[test]
fn test_wrong_length_vectors_rejected() {
    assert!(matches!(
        RelaxedWiring::from_slice(&[0.0; 16]),
        Err(WiringError::InvalidLength {
            expected: 32,
            actual: 16
        })
    ));
    assert!(ExtremalWiring::from_bits(&[0; 64]).is_err());
}

#[test]
fn test_non_finite_tables_never_reach_a_batch() {
    let result = WiringFunctions::from_tables(
        [f64::NAN, 0.0, 1.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0],
        [0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0],
    )
    .and_then(|functions| encode_wiring(&functions))
    .and_then(|wiring| wiring.replicate(2));
    assert!(matches!(
        result,
        Err(WiringError::NonFiniteEntry { index: 0, .. })
    ));
}

// -- Mixed box and wiring flows ----------------------------------------------

/// Helper: a driver step touching both crates, failing with the shared
/// top-level error.
fn seed_search(p: f64, columns: usize) -> Result<(f64, usize), NlbError> {
    let start = CorrelationBox::noisy_pr(p)?;
    let batch = WiringFamily::Bs09.batch(columns)?;
    Ok((start.chsh_score(), batch.len()))
}

#[test]
fn test_driver_errors_convert_to_top_level() {
    let (score, columns) = seed_search(1.0, 4).unwrap();
    assert_eq!(score, 1.0);
    assert_eq!(columns, 4);
    assert!(matches!(seed_search(1.5, 4), Err(NlbError::Box(_))));
    assert_eq!(
        seed_search(0.5, 0).unwrap_err(),
        NlbError::Wiring(WiringError::InvalidColumnCount(0))
    );
}
