//! Plane association and label parsing conventions
//!
//! ROI tools commonly encode the plane a region was drawn on inside its
//! label. How that encoding looks is a convention of the drawing tool, so
//! parsing is injected into the [`RoiManager`](super::RoiManager) as a
//! [`LabelParser`] rather than hard-coded.

use lazy_static::lazy_static;
use regex::Regex;

/// The plane(s) a region applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneAssociation {
    /// One concrete 1-based plane index; it may lie outside the stack,
    /// including zero and negative indices parsed from a label
    Specific(i64),
    /// The region applies to every plane of the stack
    AllPlanes,
}

impl PlaneAssociation {
    /// Concrete plane index, if there is one
    pub fn index(&self) -> Option<i64> {
        match self {
            PlaneAssociation::Specific(index) => Some(*index),
            PlaneAssociation::AllPlanes => None,
        }
    }

    /// Concrete plane index if it lies within `[1, depth]`
    pub fn plane_within(&self, depth: usize) -> Option<usize> {
        match self {
            PlaneAssociation::Specific(index) if *index >= 1 && *index <= depth as i64 => {
                Some(*index as usize)
            }
            _ => None,
        }
    }

    pub fn is_all_planes(&self) -> bool {
        matches!(self, PlaneAssociation::AllPlanes)
    }
}

/// Maps a free-text ROI label to the plane it names
///
/// Implementations must be pure: the same label always yields the same
/// association. A label that names no plane yields `AllPlanes`.
pub trait LabelParser {
    /// Parse the plane association encoded in `label`
    fn slice_number(&self, label: &str) -> PlaneAssociation;

    /// Short name of the convention, used in logs and configuration
    fn name(&self) -> &'static str;
}

lazy_static! {
    // SSSS-YYYY-XXXX, SSSSS-YYYYY-XXXXX and SSSSSS-YYYYYY-XXXXXX
    static ref DASHED_LABELS: [Regex; 3] = [
        Regex::new(r"^(.{4})-.{4}-.{4}").expect("valid 4-digit label pattern"),
        Regex::new(r"^(.{5})-.{5}-.{5}").expect("valid 5-digit label pattern"),
        Regex::new(r"^(.{6})-.{6}-.{6}").expect("valid 6-digit label pattern"),
    ];

    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^\s*(-?\d+)(?:[^\d]|$)").expect("valid leading number pattern");
}

/// Parse a numeric token, truncating fractions toward zero
///
/// Only a token that is not a finite number names no plane; negative and
/// zero tokens are concrete planes that no stack contains.
fn parse_token(token: &str) -> PlaneAssociation {
    match token.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => PlaneAssociation::Specific(n.trunc() as i64),
        _ => PlaneAssociation::AllPlanes,
    }
}

/// Labels of the form `SSSS-YYYY-XXXX`
///
/// The plane number is the first dash-delimited field. Fields of 4, 5 or 6
/// characters are recognised, matching the widths a drawing tool picks as
/// stacks grow deeper; e.g. `0003-0120-0064` names plane 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashedLabelParser;

impl LabelParser for DashedLabelParser {
    fn slice_number(&self, label: &str) -> PlaneAssociation {
        for pattern in DASHED_LABELS.iter() {
            if let Some(caps) = pattern.captures(label) {
                return parse_token(&caps[1]);
            }
        }
        PlaneAssociation::AllPlanes
    }

    fn name(&self) -> &'static str {
        "dashed"
    }
}

/// Labels starting with a plane number followed by any delimiter
///
/// `12_nucleus` and `12` both name plane 12; `nucleus` names no plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadingNumberParser;

impl LabelParser for LeadingNumberParser {
    fn slice_number(&self, label: &str) -> PlaneAssociation {
        LEADING_NUMBER
            .captures(label)
            .map(|caps| parse_token(&caps[1]))
            .unwrap_or(PlaneAssociation::AllPlanes)
    }

    fn name(&self) -> &'static str {
        "leading-number"
    }
}

/// Look up a label convention by its configuration name
pub fn parser_by_name(name: &str) -> Option<Box<dyn LabelParser>> {
    match name.to_lowercase().as_str() {
        "dashed" => Some(Box::new(DashedLabelParser)),
        "leading-number" | "leading" => Some(Box::new(LeadingNumberParser)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_labels() {
        let parser = DashedLabelParser;
        assert_eq!(parser.slice_number("0003-0000-0001"), PlaneAssociation::Specific(3));
        assert_eq!(parser.slice_number("00012-00010-00010"), PlaneAssociation::Specific(12));
        assert_eq!(parser.slice_number("000123-000010-000010"), PlaneAssociation::Specific(123));
        assert_eq!(parser.slice_number("9999-0000-0001"), PlaneAssociation::Specific(9999));
    }

    #[test]
    fn test_dashed_labels_with_unusual_numbers() {
        let parser = DashedLabelParser;
        assert_eq!(parser.slice_number("-003-0000-0001"), PlaneAssociation::Specific(-3));
        assert_eq!(parser.slice_number("0000-0000-0001"), PlaneAssociation::Specific(0));
        assert_eq!(parser.slice_number("12.7-0000-0001"), PlaneAssociation::Specific(12));
        assert_eq!(parser.slice_number(" 12 -0000-0001"), PlaneAssociation::Specific(12));
        assert_eq!(parser.slice_number(" inf-0000-0001"), PlaneAssociation::AllPlanes);
    }

    #[test]
    fn test_plane_within() {
        assert_eq!(PlaneAssociation::Specific(3).plane_within(4), Some(3));
        assert_eq!(PlaneAssociation::Specific(5).plane_within(4), None);
        assert_eq!(PlaneAssociation::Specific(0).plane_within(4), None);
        assert_eq!(PlaneAssociation::Specific(-3).plane_within(4), None);
        assert_eq!(PlaneAssociation::AllPlanes.plane_within(4), None);
    }

    #[test]
    fn test_dashed_labels_without_plane() {
        let parser = DashedLabelParser;
        assert_eq!(parser.slice_number(""), PlaneAssociation::AllPlanes);
        assert_eq!(parser.slice_number("NO_SLICE"), PlaneAssociation::AllPlanes);
        assert_eq!(parser.slice_number("abcd-0000-0001"), PlaneAssociation::AllPlanes);
        // too short for the convention
        assert_eq!(parser.slice_number("0003-0000-01"), PlaneAssociation::AllPlanes);
    }

    #[test]
    fn test_leading_number_labels() {
        let parser = LeadingNumberParser;
        assert_eq!(parser.slice_number("12_nucleus"), PlaneAssociation::Specific(12));
        assert_eq!(parser.slice_number("7"), PlaneAssociation::Specific(7));
        assert_eq!(parser.slice_number("nucleus"), PlaneAssociation::AllPlanes);
        assert_eq!(parser.slice_number("4-b"), PlaneAssociation::Specific(4));
        assert_eq!(parser.slice_number("-2_cortex"), PlaneAssociation::Specific(-2));
        assert_eq!(parser.slice_number(""), PlaneAssociation::AllPlanes);
    }

    #[test]
    fn test_parser_by_name() {
        assert_eq!(parser_by_name("dashed").map(|p| p.name()), Some("dashed"));
        assert_eq!(parser_by_name("Leading-Number").map(|p| p.name()), Some("leading-number"));
        assert!(parser_by_name("roman").is_none());
    }
}
