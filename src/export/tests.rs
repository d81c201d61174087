use std::collections::BTreeMap;

use super::*;
use crate::library::{Compound, Library, Spectrum};

fn spectrum(spectrum_id: u32, mz: &[f64], abundance: &[f64]) -> Spectrum {
    Spectrum {
        library_id: 1,
        compound_id: 0,
        spectrum_id,
        base_peak_mz: mz.first().copied().unwrap_or_default(),
        mz_values: mz.to_vec(),
        abundance_values: abundance.to_vec(),
    }
}

fn compound(compound_id: u32, name: &str, spectra: Vec<Spectrum>) -> Compound {
    Compound {
        library_id: 1,
        compound_id,
        name: name.to_string(),
        retention_index: 1000.0 + compound_id as f64,
        spectra: spectra
            .into_iter()
            .map(|s| (s.spectrum_id, Spectrum { compound_id, ..s }))
            .collect::<BTreeMap<_, _>>(),
        ..Default::default()
    }
}

fn library(compounds: Vec<Compound>) -> Library {
    let mut library = Library::new(1, false);
    for c in compounds {
        library.compounds.insert(c.compound_id, c);
    }
    library
}

#[test]
fn test_select_top_n_descending() {
    let top = select_top_n(&[3, 1, 2], &['a', 'b', 'c'], 2, SortOrder::Descending);

    assert_eq!(top, vec![(3, 'a'), (2, 'c')]);
}

#[test]
fn test_select_top_n_ascending() {
    let top = select_top_n(&[3, 1, 2], &['a', 'b', 'c'], 2, SortOrder::Ascending);

    assert_eq!(top, vec![(1, 'b'), (2, 'c')]);
}

#[test]
fn test_select_top_n_ties_keep_input_order() {
    let top = select_top_n(&[5.0, 7.0, 5.0, 5.0], &[1, 2, 3, 4], 3, SortOrder::Descending);

    assert_eq!(top, vec![(7.0, 2), (5.0, 1), (5.0, 3)]);
}

#[test]
fn test_select_top_n_short_inputs() {
    // Clipped to the shorter sequence, then to n
    let top = select_top_n(&[1.0, 9.0, 4.0], &[10.0, 20.0], 5, SortOrder::Descending);
    assert_eq!(top, vec![(9.0, 20.0), (1.0, 10.0)]);

    let none: Vec<(f64, f64)> = select_top_n(&[], &[], 3, SortOrder::Descending);
    assert!(none.is_empty());

    assert!(select_top_n(&[1, 2], &[1, 2], 0, SortOrder::Descending).is_empty());
}

#[test]
fn test_select_top_n_drops_nan() {
    let abundance = [f64::NAN, 1.0, f64::NAN, 3.0, 2.0];
    let mz = [10.0, 20.0, 30.0, 40.0, 50.0];

    let top = select_top_n(&abundance, &mz, 3, SortOrder::Descending);
    assert_eq!(top, vec![(3.0, 40.0), (2.0, 50.0), (1.0, 20.0)]);

    let bottom = select_top_n(&abundance, &mz, 5, SortOrder::Ascending);
    assert_eq!(bottom, vec![(1.0, 20.0), (2.0, 50.0), (3.0, 40.0)]);
}

#[test]
fn test_top_peaks_uses_first_spectrum() {
    let c = compound(
        1,
        "Hexane",
        vec![
            spectrum(2, &[100.0, 200.0], &[1.0, 2.0]),
            spectrum(1, &[41.0, 43.0, 57.0], &[300.0, 500.0, 999.0]),
        ],
    );

    assert_eq!(top_peaks(&c, 2), vec![57.0, 43.0]);
    assert!(top_peaks(&compound(2, "Blank", vec![]), 5).is_empty());
}

#[test]
fn test_peak_table() {
    let library = library(vec![
        compound(2, "Hexane", vec![spectrum(1, &[41.0, 43.0, 57.0], &[300.0, 500.0, 999.0])]),
        compound(1, "Blank", vec![]),
    ]);

    let mut out = Vec::new();
    let rows = write_peak_table(&library, &mut out, 2).unwrap();

    assert_eq!(rows, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "CompoundID,RetentionIndex,MZ1,MZ2\n1,1001,,\n2,1002,57,43\n"
    );
}

#[test]
fn test_peak_table_pads_short_spectra() {
    let library = library(vec![compound(3, "Methane", vec![spectrum(1, &[16.0], &[10.0])])]);

    let mut out = Vec::new();
    write_peak_table(&library, &mut out, DEFAULT_TOP_N).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "CompoundID,RetentionIndex,MZ1,MZ2,MZ3,MZ4,MZ5");
    assert_eq!(lines[1], "3,1003,16,,,,");
}

#[test]
fn test_score_single_peak() {
    let c = compound(1, "Heptane", vec![spectrum(1, &[57.05], &[20000.0])]);

    assert_eq!(score(&c, CLASS_KERNELS[0].masses), Some(2.0));
    // 57.05 is nowhere near an alcohol fragment
    assert_eq!(score(&c, CLASS_KERNELS[1].masses), Some(0.0));
}

#[test]
fn test_score_without_match_is_positive_zero() {
    let c = compound(1, "Heptane", vec![spectrum(1, &[57.05], &[20000.0])]);

    let alcohol = score(&c, CLASS_KERNELS[1].masses).unwrap();
    assert!(alcohol.is_sign_positive());
    assert_eq!(alcohol.to_string(), "0");

    // No peaks at all, and no kernel masses
    let empty = compound(2, "Blank", vec![spectrum(1, &[], &[])]);
    assert!(score(&empty, &[57.0]).unwrap().is_sign_positive());
    assert!(score(&c, &[]).unwrap().is_sign_positive());
}

#[test]
fn test_score_tolerance_window() {
    let c = compound(1, "Edge", vec![spectrum(1, &[57.2, 42.95], &[10000.0, 10000.0])]);

    assert_eq!(score(&c, &[57.0]), Some(0.0));
    assert_eq!(score(&c, &[43.0]), Some(1.0));
}

#[test]
fn test_score_averages_over_spectra() {
    let c = compound(
        1,
        "Decane",
        vec![
            spectrum(1, &[43.0, 57.0], &[10000.0, 30000.0]),
            spectrum(2, &[71.0], &[20000.0]),
        ],
    );

    // (1 + 3 + 2) / 2
    assert_eq!(score(&c, &[43.0, 57.0, 71.0]), Some(3.0));
}

#[test]
fn test_score_clips_unequal_arrays() {
    let c = compound(1, "Odd", vec![spectrum(1, &[57.0, 43.0], &[10000.0])]);

    assert_eq!(score(&c, &[43.0]), Some(0.0));
    assert_eq!(score(&c, &[57.0]), Some(1.0));
}

#[test]
fn test_score_without_spectra() {
    assert_eq!(score(&compound(1, "Blank", vec![]), &[57.0]), None);
    assert!(ClassScores::for_compound(&compound(1, "Blank", vec![])).is_none());
}

#[test]
fn test_class_scores() {
    let c = compound(4, "Toluene", vec![spectrum(1, &[91.0, 92.0], &[10000.0, 5000.0])]);

    let scores = ClassScores::for_compound(&c).unwrap();

    assert_eq!(scores.scores.len(), CLASS_KERNELS.len());
    assert_eq!(scores.class("Aromatic"), Some(1.0));
    assert_eq!(scores.class("Chloroalkane"), Some(1.0));
    assert_eq!(scores.class("Alkane"), Some(0.0));
    assert_eq!(scores.class("Unknown"), None);
}

#[test]
fn test_score_library_skips_empty_compounds() {
    let library = library(vec![
        compound(9, "Heptane", vec![spectrum(1, &[57.0], &[10000.0])]),
        compound(3, "Blank", vec![]),
        compound(5, "Toluene", vec![spectrum(1, &[91.0], &[10000.0])]),
    ]);

    let rows = score_library(&library);

    let ids: Vec<u32> = rows.iter().map(|r| r.compound_id).collect();
    assert_eq!(ids, vec![5, 9]);
}

#[test]
fn test_score_table() {
    let library = library(vec![compound(
        1,
        "Ethyl acetate, anhydrous",
        vec![spectrum(1, &[43.0], &[20000.0])],
    )]);

    let mut out = Vec::new();
    let rows = write_score_table(&library, &mut out).unwrap();

    assert_eq!(rows, 1);
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "ID,Name,Alkane,Alcohol,Ester,Amine,Aldehyde,Ketone,Chloroalkane,\
         Chlorobiphenyl,Halogenated,Sulphur,Furan Ether,Carboxylic acid,Aromatic"
    );
    assert_eq!(lines[1], "1,\"Ethyl acetate, anhydrous\",2,0,2,0,0,2,0,0,0,0,0,0,0");
}
