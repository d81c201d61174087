use super::parameters::{ParameterSet, INTEGRATION_PARAMETERS};
use super::MethodError;
use crate::document::{DocumentError, Element};
use crate::library::{Compound, CompoundId};

/// Instrument and integration settings shared by every target
///
/// None of these depend on library data; every target is the
/// [`TARGET_DEFAULTS`] template plus a handful of per-compound fields.
/// Fields mirror the `TargetCompound` elements of the same name.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct TargetDefaults {
    pub batch_id: i32,
    pub sample_id: i32,
    pub accuracy_limit_multiplier_loq: i32,
    pub accuracy_maximum_percent_deviation: i32,
    pub compound_type: &'static str,
    pub concentration_units: &'static str,
    pub curve_fit: &'static str,
    pub curve_fit_origin: &'static str,
    pub curve_fit_weight: &'static str,
    pub integration_parameters_modified: bool,
    pub integrator: &'static str,
    pub ion_polarity: &'static str,
    pub istd_flag: bool,
    pub left_retention_time_delta: f64,
    pub maximum_number_of_hits: u32,
    pub multiplier: f64,
    pub mz_extraction_window_filter_left: f64,
    pub mz_extraction_window_filter_right: f64,
    pub mz_extraction_window_units: &'static str,
    pub noise_algorithm_type: &'static str,
    pub noise_of_raw_signal: f64,
    pub noise_reference: &'static str,
    pub noise_standard_deviation_multiplier: f64,
    pub peak_filter_threshold: &'static str,
    pub peak_filter_threshold_value: f64,
    pub peak_selection_criterion: &'static str,
    pub primary_hit_peak_id: u32,
    pub quantitate_by_height: bool,
    pub retention_time_delta_units: &'static str,
    pub retention_time_window: f64,
    pub retention_time_window_units: &'static str,
    pub right_retention_time_delta: f64,
    pub scan_type: &'static str,
    pub selected_mz: f64,
    pub signal_type: &'static str,
    pub smoothing: &'static str,
    pub smoothing_function_width: f64,
    pub smoothing_gaussian_width: f64,
    pub spectrum_extraction_override: &'static str,
    pub spectrum_scan_inclusion: &'static str,
    pub threshold_number_of_peaks: u32,
    pub time_reference_flag: bool,
    pub time_segment: u32,
    pub uncertainty_relative_or_absolute: &'static str,
}

/// Settings of a single-ion MS1 target integrated with Agile2
pub const TARGET_DEFAULTS: TargetDefaults = TargetDefaults {
    batch_id: -1,
    sample_id: -1,
    accuracy_limit_multiplier_loq: 1,
    accuracy_maximum_percent_deviation: 20,
    compound_type: "Target",
    concentration_units: "ng/mL",
    curve_fit: "fitLinear",
    curve_fit_origin: "originIgnore",
    curve_fit_weight: "weightEqual",
    integration_parameters_modified: false,
    integrator: "Agile2",
    ion_polarity: "Positive",
    istd_flag: false,
    left_retention_time_delta: 1.0,
    maximum_number_of_hits: 1,
    multiplier: 1.0,
    mz_extraction_window_filter_left: 0.3,
    mz_extraction_window_filter_right: 0.7,
    mz_extraction_window_units: "Thomsons",
    noise_algorithm_type: "RMS",
    noise_of_raw_signal: 35.649809837341309,
    noise_reference: "Blank",
    noise_standard_deviation_multiplier: 5.0,
    peak_filter_threshold: "PeakAreaPctThreshold",
    peak_filter_threshold_value: 5.0,
    peak_selection_criterion: "CloseRTQual",
    primary_hit_peak_id: 0,
    quantitate_by_height: false,
    retention_time_delta_units: "Minutes",
    retention_time_window: 10.0,
    retention_time_window_units: "Percent",
    right_retention_time_delta: 1.0,
    scan_type: "Ms1Scan",
    selected_mz: 0.0,
    signal_type: "MS",
    smoothing: "SavitzkyGolay45",
    smoothing_function_width: 15.0,
    smoothing_gaussian_width: 5.0,
    spectrum_extraction_override: "Default",
    spectrum_scan_inclusion: "Average",
    threshold_number_of_peaks: 100,
    time_reference_flag: false,
    time_segment: 1,
    uncertainty_relative_or_absolute: "Relative",
};

/// A compound to detect and integrate, derived from a library compound
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCompound {
    /// Source compound ID
    pub compound_id: CompoundId,

    /// Source compound name
    pub compound_name: String,

    /// Quantifier m/z, the base peak of the first spectrum
    pub mz: f64,

    /// Transition m/z; the target schema repeats the quantifier here
    pub transition: f64,

    /// Expected retention time, from the compound's locked retention time
    pub retention_time: f64,

    /// Shared instrument and integration settings
    pub defaults: &'static TargetDefaults,

    /// Integrator parameters, embedded as a rendered sub-document
    pub integration_parameters: &'static ParameterSet,
}

impl TargetCompound {
    /// Derive a target from a compound
    ///
    /// The compound must have at least one spectrum; the one with the
    /// smallest ID supplies the m/z.
    pub fn from_compound(compound: &Compound) -> Result<Self, MethodError> {
        let first = compound
            .first_spectrum()
            .ok_or(MethodError::EmptySpectra {
                compound_id: compound.compound_id,
            })?;

        Ok(Self {
            compound_id: compound.compound_id,
            compound_name: compound.name.clone(),
            mz: first.base_peak_mz,
            transition: first.base_peak_mz,
            retention_time: compound.retention_time_rtl,
            defaults: &TARGET_DEFAULTS,
            integration_parameters: &INTEGRATION_PARAMETERS,
        })
    }

    /// Build the `TargetCompound` element
    pub fn to_element(&self) -> Result<Element, DocumentError> {
        let d = self.defaults;
        let mut element = Element::new("TargetCompound");
        element
            .push_field("BatchID", d.batch_id)
            .push_field("SampleID", d.sample_id)
            .push_field("CompoundID", self.compound_id)
            .push_field("AccuracyLimitMultiplierLOQ", d.accuracy_limit_multiplier_loq)
            .push_field("AccuracyMaximumPercentDeviation", d.accuracy_maximum_percent_deviation)
            .push_field("CompoundName", &self.compound_name)
            .push_field("CompoundType", d.compound_type)
            .push_field("ConcentrationUnits", d.concentration_units)
            .push_field("CurveFit", d.curve_fit)
            .push_field("CurveFitOrigin", d.curve_fit_origin)
            .push_field("CurveFitWeight", d.curve_fit_weight)
            .push_field("IntegrationParameters", self.integration_parameters.render()?)
            .push_field("IntegrationParametersModified", d.integration_parameters_modified)
            .push_field("Integrator", d.integrator)
            .push_field("IonPolarity", d.ion_polarity)
            .push_field("ISTDFlag", d.istd_flag)
            .push_field("LeftRetentionTimeDelta", d.left_retention_time_delta)
            .push_field("MaximumNumberOfHits", d.maximum_number_of_hits)
            .push_field("Multiplier", d.multiplier)
            .push_field("MZ", self.mz)
            .push_field("MZExtractionWindowFilterLeft", d.mz_extraction_window_filter_left)
            .push_field("MZExtractionWindowFilterRight", d.mz_extraction_window_filter_right)
            .push_field("MZExtractionWindowUnits", d.mz_extraction_window_units)
            .push_field("NoiseAlgorithmType", d.noise_algorithm_type)
            .push_field("NoiseOfRawSignal", d.noise_of_raw_signal)
            .push_field("NoiseReference", d.noise_reference)
            .push_field("NoiseStandardDeviationMultiplier", d.noise_standard_deviation_multiplier)
            .push_field("PeakFilterThreshold", d.peak_filter_threshold)
            .push_field("PeakFilterThresholdValue", d.peak_filter_threshold_value)
            .push_field("PeakSelectionCriterion", d.peak_selection_criterion)
            .push_field("PrimaryHitPeakID", d.primary_hit_peak_id)
            .push_field("QuantitateByHeight", d.quantitate_by_height)
            .push_field("RetentionTime", self.retention_time)
            .push_field("RetentionTimeDeltaUnits", d.retention_time_delta_units)
            .push_field("RetentionTimeWindow", d.retention_time_window)
            .push_field("RetentionTimeWindowUnits", d.retention_time_window_units)
            .push_field("RightRetentionTimeDelta", d.right_retention_time_delta)
            .push_field("ScanType", d.scan_type)
            .push_field("SelectedMZ", d.selected_mz)
            .push_field("SignalType", d.signal_type)
            .push_field("Smoothing", d.smoothing)
            .push_field("SmoothingFunctionWidth", d.smoothing_function_width)
            .push_field("SmoothingGaussianWidth", d.smoothing_gaussian_width)
            .push_field("SpectrumExtractionOverride", d.spectrum_extraction_override)
            .push_field("SpectrumScanInclusion", d.spectrum_scan_inclusion)
            .push_field("ThresholdNumberOfPeaks", d.threshold_number_of_peaks)
            .push_field("TimeReferenceFlag", d.time_reference_flag)
            .push_field("TimeSegment", d.time_segment)
            .push_field("Transition", self.transition)
            .push_field("UncertaintyRelativeOrAbsolute", d.uncertainty_relative_or_absolute);
        Ok(element)
    }
}
