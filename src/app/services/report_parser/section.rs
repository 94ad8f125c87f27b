//! Generic section location for the multi-section report layout
//!
//! Every named section is described declaratively by a [`SectionSpec`] and
//! located by one shared scan, so missing-marker and missing-end-boundary
//! behaviour is a single code path. A section whose start marker is absent
//! is simply absent; callers handle that, it is never an error.

use crate::constants::markers;

/// Declarative description of one named report section
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    /// Short name used in log lines
    pub name: &'static str,

    /// Line prefix opening the section
    pub start_marker: &'static str,

    /// Line prefixes that terminate the section body (a blank line always
    /// terminates it too)
    pub end_markers: &'static [&'static str],
}

/// Result metadata block
pub const RESULT_INFORMATION: SectionSpec = SectionSpec {
    name: "result information",
    start_marker: markers::RESULT_INFORMATION,
    end_markers: &[
        markers::PROCESS_VALUES_CURVE,
        markers::PROCESS_VALUES_EO,
        markers::EVALUATION_OBJECTS,
        markers::MEASURING_CURVE,
    ],
};

/// Curve-related process values table
pub const PROCESS_VALUES_CURVE: SectionSpec = SectionSpec {
    name: "process values - curve related",
    start_marker: markers::PROCESS_VALUES_CURVE,
    end_markers: &[
        markers::PROCESS_VALUES_EO,
        markers::EVALUATION_OBJECTS,
        markers::MEASURING_CURVE,
    ],
};

/// EO-related process values table
pub const PROCESS_VALUES_EO: SectionSpec = SectionSpec {
    name: "process values - EO related",
    start_marker: markers::PROCESS_VALUES_EO,
    end_markers: &[markers::EVALUATION_OBJECTS, markers::MEASURING_CURVE],
};

/// Evaluation criteria table; its marker line doubles as the column header
pub const EVALUATION_OBJECTS: SectionSpec = SectionSpec {
    name: "evaluation objects settings",
    start_marker: markers::EVALUATION_OBJECTS,
    end_markers: &[
        markers::SWITCH_SIGNALS,
        markers::DEVICE_INFORMATION,
        markers::MEASURING_CURVE,
    ],
};

/// A located section: the marker line plus the body lines following it
#[derive(Debug, Clone)]
pub struct SectionSlice<'a> {
    /// The untrimmed marker line; for header+body tables this line is the
    /// column header row
    pub marker_line: &'a str,

    /// Body lines between the marker and the section boundary
    pub body: &'a [&'a str],
}

/// Locate `spec`'s section within `lines`
///
/// The scan starts at the first line whose trimmed text starts with the
/// start marker; `None` when no such line exists. The body runs from the
/// next line to the first blank line or end-marker line, or to the end of
/// the document when neither occurs.
pub fn extract<'a>(lines: &'a [&'a str], spec: &SectionSpec) -> Option<SectionSlice<'a>> {
    let start = lines
        .iter()
        .position(|line| line.trim().starts_with(spec.start_marker))?;

    let after = &lines[start + 1..];
    let end = after
        .iter()
        .position(|line| {
            let trimmed = line.trim();
            trimmed.is_empty() || spec.end_markers.iter().any(|m| trimmed.starts_with(m))
        })
        .unwrap_or(after.len());

    Some(SectionSlice {
        marker_line: lines[start],
        body: &after[..end],
    })
}
