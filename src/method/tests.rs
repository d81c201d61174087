use std::collections::BTreeMap;

use super::*;
use crate::document::{read_document_str, TreeNode};
use crate::library::{Compound, Library, Spectrum};

fn spectrum(compound_id: u32, spectrum_id: u32, base_peak_mz: f64) -> Spectrum {
    Spectrum {
        library_id: 1,
        compound_id,
        spectrum_id,
        base_peak_mz,
        mz_values: vec![base_peak_mz],
        abundance_values: vec![9999.0],
    }
}

fn compound(compound_id: u32, name: &str, spectra: &[(u32, f64)]) -> Compound {
    Compound {
        library_id: 1,
        compound_id,
        name: name.to_string(),
        retention_time_rtl: 3.5,
        spectra: spectra
            .iter()
            .map(|&(id, mz)| (id, spectrum(compound_id, id, mz)))
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
fn test_target_from_compound() {
    let target = TargetCompound::from_compound(&compound(7, "Toluene", &[(1, 91.0)])).unwrap();

    assert_eq!(target.compound_id, 7);
    assert_eq!(target.compound_name, "Toluene");
    assert_eq!(target.mz, 91.0);
    assert_eq!(target.transition, 91.0);
    assert_eq!(target.retention_time, 3.5);
}

#[test]
fn test_target_uses_smallest_spectrum_id() {
    let target =
        TargetCompound::from_compound(&compound(7, "Toluene", &[(4, 65.0), (2, 92.0), (3, 91.0)]))
            .unwrap();

    assert_eq!(target.mz, 92.0);
}

#[test]
fn test_target_without_spectra_fails() {
    let err = TargetCompound::from_compound(&compound(12, "Blank", &[])).unwrap_err();

    assert!(matches!(err, MethodError::EmptySpectra { compound_id: 12 }));
    assert!(err.to_string().contains("12"));
}

#[test]
fn test_target_element_fields() {
    let target = TargetCompound::from_compound(&compound(7, "Toluene", &[(1, 91.0)])).unwrap();
    let element = target.to_element().unwrap();

    assert_eq!(element.tag(), "TargetCompound");
    assert_eq!(element.field("BatchID"), Some("-1"));
    assert_eq!(element.field("CompoundID"), Some("7"));
    assert_eq!(element.field("CompoundName"), Some("Toluene"));
    assert_eq!(element.field("MZ"), Some("91"));
    assert_eq!(element.field("Transition"), Some("91"));
    assert_eq!(element.field("RetentionTime"), Some("3.5"));
    assert_eq!(element.field("Integrator"), Some("Agile2"));
    assert_eq!(element.field("ISTDFlag"), Some("false"));
    assert_eq!(element.field("MZExtractionWindowFilterLeft"), Some("0.3"));

    let tags: Vec<&str> = element.children().iter().map(|c| c.tag()).collect();
    assert_eq!(tags.len(), 50);
    assert_eq!(tags.first(), Some(&"BatchID"));
    assert_eq!(tags.last(), Some(&"UncertaintyRelativeOrAbsolute"));
}

#[test]
fn test_target_float_literals() {
    let target = TargetCompound::from_compound(&compound(7, "Toluene", &[(1, 91.0)])).unwrap();
    let element = target.to_element().unwrap();

    // Shortest round-trip decimal form of the template values
    assert_eq!(element.field("NoiseOfRawSignal"), Some("35.64980983734131"));
    assert_eq!(element.field("MZExtractionWindowFilterLeft"), Some("0.3"));
    assert_eq!(element.field("MZExtractionWindowFilterRight"), Some("0.7"));
    assert_eq!(element.field("LeftRetentionTimeDelta"), Some("1"));
    assert_eq!(element.field("Multiplier"), Some("1"));
    assert_eq!(element.field("NoiseStandardDeviationMultiplier"), Some("5"));
    assert_eq!(element.field("RetentionTimeWindow"), Some("10"));
    assert_eq!(element.field("SelectedMZ"), Some("0"));
    assert_eq!(element.field("SmoothingFunctionWidth"), Some("15"));
}

#[test]
fn test_integration_parameters_document() {
    let text = INTEGRATION_PARAMETERS.render().unwrap();

    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));

    let root = read_document_str(&text).unwrap();
    assert_eq!(root.tag(), "ParameterSet");
    assert_eq!(
        root.attribute("class"),
        Some("Agilent.MassSpectrometry.DataAnalysis.PSetRTEIntegrator")
    );
    assert_eq!(root.children().len(), 9);

    let start = &root.children()[3];
    assert_eq!(start.attribute("id"), Some("StartThreshold"));
    assert_eq!(start.field("Value"), Some("0.2"));
    assert_eq!(start.field("Limits.Minimum"), Some("0.001"));
    assert_eq!(start.child("Limits.Maximum").unwrap().attribute("type"), Some(INCLUSIVE));
    assert_eq!(start.field("PrecisionDigits"), Some("2"));

    let location = &root.children()[5];
    assert_eq!(location.field("Default"), Some("Top"));
    assert!(location.child("Limits").is_none());
    assert!(location.child("Units").is_none());
}

#[test]
fn test_parameter_lookup() {
    let reset = INTEGRATION_PARAMETERS.parameter("BaselineReset").unwrap();

    assert_eq!(reset.display_name, "Baseline reset (# points)");
    assert_eq!(reset.limits, Some(Limits { minimum: "0", maximum: "500" }));
    assert!(INTEGRATION_PARAMETERS.parameter("Unknown").is_none());
}

#[test]
fn test_synthesize_in_compound_order() {
    let library = library(vec![
        compound(20, "Xylene", &[(1, 106.0)]),
        compound(3, "Benzene", &[(1, 78.0)]),
    ]);

    let method = QuantitationDataSet::synthesize(&library).unwrap();

    let ids: Vec<u32> = method.targets.iter().map(|t| t.compound_id).collect();
    assert_eq!(ids, vec![3, 20]);
}

#[test]
fn test_synthesize_aborts_on_empty_compound() {
    let library = library(vec![
        compound(1, "Benzene", &[(1, 78.0), (2, 77.0)]),
        compound(2, "Blank", &[]),
    ]);

    let err = QuantitationDataSet::synthesize(&library).unwrap_err();

    assert!(matches!(err, MethodError::EmptySpectra { compound_id: 2 }));
}

#[test]
fn test_synthesize_skips_empty_compound() {
    let library = library(vec![
        compound(1, "Benzene", &[(1, 78.0), (2, 77.0)]),
        compound(2, "Blank", &[]),
    ]);
    let options = SynthesisOptions {
        empty_spectra: EmptySpectraPolicy::Skip,
        ..Default::default()
    };

    let method = QuantitationDataSet::synthesize_with(&library, &options).unwrap();

    assert_eq!(method.targets.len(), 1);
    assert_eq!(method.targets[0].compound_id, 1);
    assert_eq!(method.targets[0].mz, 78.0);
}

#[test]
fn test_empty_library_renders_bare_dataset() {
    let method = QuantitationDataSet::synthesize(&Library::new(1, false)).unwrap();
    let text = method.render().unwrap();

    let root = read_document_str(&text).unwrap();
    assert_eq!(root.tag(), "QuantitationDataSet");
    assert!(root.children().is_empty());
}

#[test]
fn test_dataset_attributes() {
    let element = QuantitationDataSet::new().to_element().unwrap();
    let attributes = element.attributes();

    assert_eq!(attributes.len(), 41);
    assert_eq!(attributes[0], ("SchemaVersion".to_string(), "65586".to_string()));
    assert_eq!(attributes[40], ("xmlns".to_string(), "Quantitation".to_string()));
    assert_eq!(element.attribute("ApplyMultiplierTarget"), Some("true"));
    assert_eq!(element.attribute("ApplyMultiplierISTD"), Some("false"));
    assert_eq!(element.attribute("LibraryPathFileName"), Some("C:/Database/NIST08.L"));
    assert_eq!(
        element.attribute("AnalysisTimeStamp"),
        Some("0001-01-01T00:00:00+00:00")
    );
    assert_eq!(element.attribute("ComplianceName"), Some("None"));
}

#[test]
fn test_attribute_overrides() {
    let options = SynthesisOptions {
        library_path_file_name: Some("D:/Libraries/Custom.L".to_string()),
        batch_name: Some("Batch 12".to_string()),
        analyst_name: Some("QC".to_string()),
        ..Default::default()
    };

    let method = QuantitationDataSet::synthesize_with(&Library::new(1, false), &options).unwrap();
    let element = method.to_element().unwrap();

    assert_eq!(element.attribute("LibraryPathFileName"), Some("D:/Libraries/Custom.L"));
    assert_eq!(element.attribute("BatchName"), Some("Batch 12"));
    assert_eq!(element.attribute("AnalystName"), Some("QC"));
    assert_eq!(element.attributes().len(), 41);
}

#[test]
fn test_render_embeds_parameter_document() {
    let library = library(vec![compound(5, "Phenol", &[(1, 94.0)])]);
    let method = QuantitationDataSet::synthesize(&library).unwrap();

    let text = method.render().unwrap();

    // Embedded markup is escaped, not nested
    assert!(text.contains("&lt;ParameterSet"));
    assert!(!text.contains("<ParameterSet"));
    assert!(text.contains("\n    <TargetCompound>\n        <BatchID>-1</BatchID>\n"));

    let root = read_document_str(&text).unwrap();
    let target = &root.children()[0];
    assert_eq!(target.field("CompoundName"), Some("Phenol"));
    assert_eq!(target.field("MZ"), Some("94"));

    let embedded = target.field("IntegrationParameters").unwrap();
    let expected = INTEGRATION_PARAMETERS.render().unwrap();
    assert_eq!(embedded.trim(), expected.trim());
}
