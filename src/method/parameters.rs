//! Integration parameter catalog
//!
//! Every target carries the same `ParameterSet` for the RTE integrator. It
//! is a fixed template, not derived from library data.

use crate::document::{render_document, DocumentError, Element};

/// Limit type written for every parameter bound
pub const INCLUSIVE: &str = "Inclusive";

/// Inclusive lower and upper bound of a numeric parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Lower bound
    pub minimum: &'static str,
    /// Upper bound
    pub maximum: &'static str,
}

/// Unit, precision and conversion metadata of a numeric parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericFormat {
    /// Unit of the value (`Units` element)
    pub units: &'static str,
    /// Data value type
    pub data_value_type: &'static str,
    /// Precision type
    pub precision_type: &'static str,
    /// Number of precision digits
    pub precision_digits: &'static str,
    /// Unit conversion support
    pub conversion_support: &'static str,
}

/// Format shared by all bounded parameters of the RTE integrator
pub const UNSPECIFIED_NUMBER: NumericFormat = NumericFormat {
    units: "Unspecified",
    data_value_type: "Unspecified",
    precision_type: "DigitsAfterDecimal",
    precision_digits: "2",
    conversion_support: "None",
};

/// One named integrator parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter identifier (`id` attribute)
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Current value
    pub value: &'static str,
    /// Factory default
    pub default: Option<&'static str>,
    /// Inclusive bounds
    pub limits: Option<Limits>,
    /// Unit and precision metadata
    pub format: Option<NumericFormat>,
}

impl Parameter {
    /// A parameter with a default but no bounds
    pub const fn choice(id: &'static str, display_name: &'static str, value: &'static str) -> Self {
        Self {
            id,
            display_name,
            value,
            default: Some(value),
            limits: None,
            format: None,
        }
    }

    /// A numeric parameter bounded by inclusive limits
    pub const fn bounded(
        id: &'static str,
        display_name: &'static str,
        value: &'static str,
        minimum: &'static str,
        maximum: &'static str,
    ) -> Self {
        Self {
            id,
            display_name,
            value,
            default: Some(value),
            limits: Some(Limits { minimum, maximum }),
            format: Some(UNSPECIFIED_NUMBER),
        }
    }

    /// Build the `Parameter` element
    pub fn to_element(&self) -> Element {
        let mut element = Element::new("Parameter");
        element
            .push_attribute("id", self.id)
            .push_field("DisplayName", self.display_name)
            .push_field("Value", self.value);

        if let Some(default) = self.default {
            element.push_field("Default", default);
        }

        if let Some(limits) = self.limits {
            let mut minimum = Element::leaf("Minimum", limits.minimum);
            minimum.push_attribute("type", INCLUSIVE);
            let mut maximum = Element::leaf("Maximum", limits.maximum);
            maximum.push_attribute("type", INCLUSIVE);

            let mut bounds = Element::new("Limits");
            bounds.push_child(minimum).push_child(maximum);
            element.push_child(bounds);
        }

        if let Some(format) = self.format {
            element
                .push_field("Units", format.units)
                .push_field("DataValueType", format.data_value_type)
                .push_field("PrecisionType", format.precision_type)
                .push_field("PrecisionDigits", format.precision_digits)
                .push_field("ConversionSupport", format.conversion_support);
        }

        element
    }
}

/// A named, ordered set of integrator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSet {
    /// `usagekey` attribute
    pub usage_key: &'static str,
    /// `assembly` attribute
    pub assembly: &'static str,
    /// `class` attribute naming the integrator implementation
    pub class: &'static str,
    /// Parameters in output order
    pub parameters: &'static [Parameter],
}

impl ParameterSet {
    /// Look up a parameter by ID
    pub fn parameter(&self, id: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.id == id)
    }

    /// Build the `ParameterSet` element
    pub fn to_element(&self) -> Element {
        let mut element = Element::new("ParameterSet");
        element
            .push_attribute("usagekey", self.usage_key)
            .push_attribute("assembly", self.assembly)
            .push_attribute("class", self.class);

        for parameter in self.parameters {
            element.push_child(parameter.to_element());
        }
        element
    }

    /// Render the set as a standalone document
    ///
    /// Targets store this text verbatim in their `IntegrationParameters`
    /// field instead of nesting the elements.
    pub fn render(&self) -> Result<String, DocumentError> {
        render_document(&self.to_element())
    }
}

/// Default parameters of the RTE integrator
pub const INTEGRATION_PARAMETERS: ParameterSet = ParameterSet {
    usage_key: "",
    assembly: "",
    class: "Agilent.MassSpectrometry.DataAnalysis.PSetRTEIntegrator",
    parameters: &[
        Parameter::bounded("DataPointSampling", "Data point sampling", "1", "1", "9"),
        Parameter::choice("Smoothing", "Smoothing", "false"),
        Parameter::choice("DetectionFiltering", "Detection filtering", "FivePoint"),
        Parameter::bounded("StartThreshold", "Start threshold", "0.2", "0.001", "100"),
        Parameter::bounded("StopThreshold", "Stop threshold", "0", "0", "100"),
        Parameter::choice("PeakLocation", "Peak Location", "Top"),
        Parameter::bounded("BaselineReset", "Baseline reset (# points)", "5", "0", "500"),
        Parameter::bounded("BaselineValley", "If leading or trailing edge", "100", "1", "100"),
        Parameter::choice("BaselinePreference", "Baseline Preference", "Tangent"),
    ],
};
