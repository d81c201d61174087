use std::borrow::Cow;

use log::{debug, info, warn};

use super::target::TargetCompound;
use super::MethodError;
use crate::document::{render_document, DocumentError, Element};
use crate::library::{Compound, Library};

/// Batch-level attributes of a quantitation method
///
/// Fields mirror the `QuantitationDataSet` attributes of the same name and
/// are written in declaration order.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSetAttributes {
    pub schema_version: &'static str,
    pub data_version: &'static str,
    pub batch_state: &'static str,
    pub reference_window: &'static str,
    pub reference_window_percent_or_minutes: &'static str,
    pub non_reference_window: &'static str,
    pub non_reference_window_percent_or_minutes: &'static str,
    pub correlation_window: &'static str,
    pub apply_multiplier_target: bool,
    pub apply_multiplier_surrogate: bool,
    pub apply_multiplier_matrix_spike: bool,
    pub apply_multiplier_istd: bool,
    pub ignore_peaks_not_found: bool,
    pub relative_istd: bool,
    pub audit_trail: bool,
    pub library_path_file_name: Cow<'static, str>,
    pub library_method_path_file_name: &'static str,
    pub ref_library_path_file_name: &'static str,
    pub ref_library_pattern_path_file_name: &'static str,
    pub cc_maximum_elapsed_time_in_hours: &'static str,
    pub bracketing_type: &'static str,
    pub standard_addition: &'static str,
    pub dynamic_background_subtraction: bool,
    pub batch_name: Cow<'static, str>,
    pub batch_data_path_file_name: &'static str,
    pub da_method_path_file_name_origin: &'static str,
    pub analyst_name: Cow<'static, str>,
    pub report_generator_name: &'static str,
    pub analysis_time_stamp: &'static str,
    pub da_method_last_applied_time_stamp: &'static str,
    pub calibration_last_updated_time_stamp: &'static str,
    pub report_generation_started_time_stamp: &'static str,
    pub report_results_data_path_file_name: &'static str,
    pub analyze_quant_version: &'static str,
    pub report_quant_version: &'static str,
    pub compliance_name: &'static str,
    pub compliance_version: &'static str,
    pub compliance_server: &'static str,
    pub feature_detection: &'static str,
    pub hash_code: &'static str,
    pub xmlns: &'static str,
}

/// Timestamp written for events that never happened
const NEVER: &str = "0001-01-01T00:00:00+00:00";

/// Attributes of a freshly created, never analysed batch
pub const DATASET_ATTRIBUTES: DataSetAttributes = DataSetAttributes {
    schema_version: "65586",
    data_version: "0",
    batch_state: "Initial",
    reference_window: "80",
    reference_window_percent_or_minutes: "Percent",
    non_reference_window: "200",
    non_reference_window_percent_or_minutes: "Percent",
    correlation_window: "0.5",
    apply_multiplier_target: true,
    apply_multiplier_surrogate: true,
    apply_multiplier_matrix_spike: true,
    apply_multiplier_istd: false,
    ignore_peaks_not_found: false,
    relative_istd: false,
    audit_trail: false,
    library_path_file_name: Cow::Borrowed("C:/Database/NIST08.L"),
    library_method_path_file_name: "",
    ref_library_path_file_name: "",
    ref_library_pattern_path_file_name: "",
    cc_maximum_elapsed_time_in_hours: "0",
    bracketing_type: "None",
    standard_addition: "false",
    dynamic_background_subtraction: false,
    batch_name: Cow::Borrowed(""),
    batch_data_path_file_name: "",
    da_method_path_file_name_origin: "",
    analyst_name: Cow::Borrowed(""),
    report_generator_name: "",
    analysis_time_stamp: NEVER,
    da_method_last_applied_time_stamp: NEVER,
    calibration_last_updated_time_stamp: NEVER,
    report_generation_started_time_stamp: NEVER,
    report_results_data_path_file_name: "",
    analyze_quant_version: "",
    report_quant_version: "",
    compliance_name: "None",
    compliance_version: "",
    compliance_server: "",
    feature_detection: "false",
    hash_code: "",
    xmlns: "Quantitation",
};

impl Default for DataSetAttributes {
    fn default() -> Self {
        DATASET_ATTRIBUTES
    }
}

impl DataSetAttributes {
    fn write_to(&self, element: &mut Element) {
        element
            .push_attribute("SchemaVersion", self.schema_version)
            .push_attribute("DataVersion", self.data_version)
            .push_attribute("BatchState", self.batch_state)
            .push_attribute("ReferenceWindow", self.reference_window)
            .push_attribute("ReferenceWindowPercentOrMinutes", self.reference_window_percent_or_minutes)
            .push_attribute("NonReferenceWindow", self.non_reference_window)
            .push_attribute(
                "NonReferenceWindowPercentOrMinutes",
                self.non_reference_window_percent_or_minutes,
            )
            .push_attribute("CorrelationWindow", self.correlation_window)
            .push_attribute("ApplyMultiplierTarget", self.apply_multiplier_target)
            .push_attribute("ApplyMultiplierSurrogate", self.apply_multiplier_surrogate)
            .push_attribute("ApplyMultiplierMatrixSpike", self.apply_multiplier_matrix_spike)
            .push_attribute("ApplyMultiplierISTD", self.apply_multiplier_istd)
            .push_attribute("IgnorePeaksNotFound", self.ignore_peaks_not_found)
            .push_attribute("RelativeISTD", self.relative_istd)
            .push_attribute("AuditTrail", self.audit_trail)
            .push_attribute("LibraryPathFileName", &self.library_path_file_name)
            .push_attribute("LibraryMethodPathFileName", self.library_method_path_file_name)
            .push_attribute("RefLibraryPathFileName", self.ref_library_path_file_name)
            .push_attribute("RefLibraryPatternPathFileName", self.ref_library_pattern_path_file_name)
            .push_attribute("CCMaximumElapsedTimeInHours", self.cc_maximum_elapsed_time_in_hours)
            .push_attribute("BracketingType", self.bracketing_type)
            .push_attribute("StandardAddition", self.standard_addition)
            .push_attribute("DynamicBackgroundSubtraction", self.dynamic_background_subtraction)
            .push_attribute("BatchName", &self.batch_name)
            .push_attribute("BatchDataPathFileName", self.batch_data_path_file_name)
            .push_attribute("DAMethodPathFileNameOrigin", self.da_method_path_file_name_origin)
            .push_attribute("AnalystName", &self.analyst_name)
            .push_attribute("ReportGeneratorName", self.report_generator_name)
            .push_attribute("AnalysisTimeStamp", self.analysis_time_stamp)
            .push_attribute("DAMethodLastAppliedTimeStamp", self.da_method_last_applied_time_stamp)
            .push_attribute(
                "CalibrationLastUpdatedTimeStamp",
                self.calibration_last_updated_time_stamp,
            )
            .push_attribute(
                "ReportGenerationStartedTimeStamp",
                self.report_generation_started_time_stamp,
            )
            .push_attribute("ReportResultsDataPathFileName", self.report_results_data_path_file_name)
            .push_attribute("AnalyzeQuantVersion", self.analyze_quant_version)
            .push_attribute("ReportQuantVersion", self.report_quant_version)
            .push_attribute("ComplianceName", self.compliance_name)
            .push_attribute("ComplianceVersion", self.compliance_version)
            .push_attribute("ComplianceServer", self.compliance_server)
            .push_attribute("FeatureDetection", self.feature_detection)
            .push_attribute("HashCode", self.hash_code)
            .push_attribute("xmlns", self.xmlns);
    }
}

/// What to do with a compound that has no spectra
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptySpectraPolicy {
    /// Fail the whole synthesis
    #[default]
    Abort,
    /// Leave the compound out of the method and log a warning
    Skip,
}

/// Options for [`QuantitationDataSet::synthesize_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Handling of compounds without spectra
    pub empty_spectra: EmptySpectraPolicy,

    /// Override for the `LibraryPathFileName` attribute
    pub library_path_file_name: Option<String>,

    /// Override for the `BatchName` attribute
    pub batch_name: Option<String>,

    /// Override for the `AnalystName` attribute
    pub analyst_name: Option<String>,
}

impl SynthesisOptions {
    fn attributes(&self) -> DataSetAttributes {
        let mut attributes = DATASET_ATTRIBUTES;
        if let Some(path) = &self.library_path_file_name {
            attributes.library_path_file_name = Cow::Owned(path.clone());
        }
        if let Some(name) = &self.batch_name {
            attributes.batch_name = Cow::Owned(name.clone());
        }
        if let Some(name) = &self.analyst_name {
            attributes.analyst_name = Cow::Owned(name.clone());
        }
        attributes
    }
}

/// A quantitation method: batch attributes plus one target per compound
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuantitationDataSet {
    /// Batch-level attributes
    pub attributes: DataSetAttributes,

    /// Targets in the order their compounds were visited
    pub targets: Vec<TargetCompound>,
}

impl QuantitationDataSet {
    /// Create a method with default attributes and no targets
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesize a method from every compound of a library
    ///
    /// Compounds are visited in ascending ID order. A compound without spectra
    /// aborts the whole synthesis; use [`Self::synthesize_with`] with
    /// [`EmptySpectraPolicy::Skip`] to leave such compounds out instead.
    pub fn synthesize(library: &Library) -> Result<Self, MethodError> {
        Self::synthesize_with(library, &SynthesisOptions::default())
    }

    /// Synthesize a method with explicit options
    pub fn synthesize_with(
        library: &Library,
        options: &SynthesisOptions,
    ) -> Result<Self, MethodError> {
        let mut dataset = Self {
            attributes: options.attributes(),
            targets: Vec::with_capacity(library.compounds.len()),
        };

        let mut skipped = 0usize;
        for compound in library.compounds.values() {
            match dataset.add_target(compound) {
                Ok(()) => {}
                Err(MethodError::EmptySpectra { compound_id })
                    if options.empty_spectra == EmptySpectraPolicy::Skip =>
                {
                    warn!("Skipping compound {} without spectra", compound_id);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Synthesized {} targets from library {} ({} compounds skipped)",
            dataset.targets.len(),
            library.library_id,
            skipped
        );
        Ok(dataset)
    }

    /// Append a target derived from `compound`
    pub fn add_target(&mut self, compound: &Compound) -> Result<(), MethodError> {
        let target = TargetCompound::from_compound(compound)?;
        debug!(
            "Target {} ({}) at m/z {}",
            target.compound_id, target.compound_name, target.mz
        );
        self.targets.push(target);
        Ok(())
    }

    /// Build the `QuantitationDataSet` element
    pub fn to_element(&self) -> Result<Element, DocumentError> {
        let mut element = Element::new("QuantitationDataSet");
        self.attributes.write_to(&mut element);
        for target in &self.targets {
            element.push_child(target.to_element()?);
        }
        Ok(element)
    }

    /// Render the method as an XML document
    pub fn render(&self) -> Result<String, MethodError> {
        Ok(render_document(&self.to_element()?)?)
    }
}
