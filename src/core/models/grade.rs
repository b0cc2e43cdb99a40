//! Letter grades and grading scales
//!
//! A [`GradeScale`] is the immutable Grade-Points table plus the classification
//! ladder for one grading system. Exactly one scale is active per process; it is
//! picked from configuration at startup via [`GradeScale::for_kind`].

use super::classification::DegreeClassification;
use super::course::CourseError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Letter grade vocabulary shared by every supported scale
///
/// Not every scale admits every label: the institutional scale has `A+` but no
/// minus grades, the standard scale has minus grades but no `A+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    /// `A+`
    APlus,
    /// `A`
    A,
    /// `A-`
    AMinus,
    /// `B+`
    BPlus,
    /// `B`
    B,
    /// `B-`
    BMinus,
    /// `C+`
    CPlus,
    /// `C`
    C,
    /// `C-`
    CMinus,
    /// `D+`
    DPlus,
    /// `D`
    D,
    /// `D-`
    DMinus,
    /// `F`
    F,
}

impl Grade {
    /// Every label, best first.
    pub const ALL: [Self; 13] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// Printed label (e.g. `"B+"`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = CourseError;

    /// Parse a label, ignoring surrounding whitespace and letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|grade| grade.label() == wanted)
            .ok_or_else(|| CourseError::UnknownGrade(s.trim().to_string()))
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Which grading system is in force
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    /// 9-point institutional scale, `A+` = 5.0 down to `F` = 1.0
    #[default]
    Institutional,
    /// 12-point standard 4.0 scale, `A` = 4.0 down to `F` = 0.0
    Standard,
}

impl ScaleKind {
    /// Canonical config name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Institutional => "institutional",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "institutional" | "9-point" | "uds" | "5.0" => Ok(Self::Institutional),
            "standard" | "12-point" | "4.0" => Ok(Self::Standard),
            other => Err(format!(
                "Unknown grading scale: '{other}' (expected 'institutional' or 'standard')"
            )),
        }
    }
}

/// Immutable Grade-Points table and classification ladder for one scale
#[derive(Debug, PartialEq)]
pub struct GradeScale {
    kind: ScaleKind,
    /// Admitted grades and their points, best first
    table: &'static [(Grade, f64)],
    /// Descending `(inclusive lower bound, band)` pairs; anything below the last is `Fail`
    ladder: &'static [(f64, DegreeClassification)],
}

/// The 9-point institutional scale (default).
pub static INSTITUTIONAL: GradeScale = GradeScale {
    kind: ScaleKind::Institutional,
    table: &[
        (Grade::APlus, 5.0),
        (Grade::A, 4.5),
        (Grade::BPlus, 4.0),
        (Grade::B, 3.5),
        (Grade::CPlus, 3.0),
        (Grade::C, 2.5),
        (Grade::DPlus, 2.0),
        (Grade::D, 1.5),
        (Grade::F, 1.0),
    ],
    ladder: &[
        (4.5, DegreeClassification::FirstClass),
        (3.5, DegreeClassification::SecondClassUpper),
        (2.5, DegreeClassification::SecondClassLower),
        (2.0, DegreeClassification::ThirdClass),
        (1.5, DegreeClassification::Pass),
    ],
};

/// The 12-point standard 4.0 scale.
pub static STANDARD: GradeScale = GradeScale {
    kind: ScaleKind::Standard,
    table: &[
        (Grade::A, 4.0),
        (Grade::AMinus, 3.7),
        (Grade::BPlus, 3.3),
        (Grade::B, 3.0),
        (Grade::BMinus, 2.7),
        (Grade::CPlus, 2.3),
        (Grade::C, 2.0),
        (Grade::CMinus, 1.7),
        (Grade::DPlus, 1.3),
        (Grade::D, 1.0),
        (Grade::DMinus, 0.7),
        (Grade::F, 0.0),
    ],
    ladder: &[
        (3.6, DegreeClassification::FirstClass),
        (3.0, DegreeClassification::SecondClassUpper),
        (2.5, DegreeClassification::SecondClassLower),
        (2.0, DegreeClassification::ThirdClass),
        (1.0, DegreeClassification::Pass),
    ],
};

impl GradeScale {
    /// The static scale for a kind
    #[must_use]
    pub const fn for_kind(kind: ScaleKind) -> &'static Self {
        match kind {
            ScaleKind::Institutional => &INSTITUTIONAL,
            ScaleKind::Standard => &STANDARD,
        }
    }

    /// Which scale this is
    #[must_use]
    pub const fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Admitted grades, best first
    pub fn grades(&self) -> impl Iterator<Item = Grade> + '_ {
        self.table.iter().map(|&(grade, _)| grade)
    }

    /// `(grade, points)` rows of the table, best first
    #[must_use]
    pub const fn table(&self) -> &'static [(Grade, f64)] {
        self.table
    }

    /// Classification cutpoints, highest first
    #[must_use]
    pub const fn ladder(&self) -> &'static [(f64, DegreeClassification)] {
        self.ladder
    }

    /// Whether `grade` belongs to this scale
    #[must_use]
    pub fn admits(&self, grade: Grade) -> bool {
        self.try_points(grade).is_some()
    }

    /// Points for `grade`, or `None` if this scale does not admit it
    #[must_use]
    pub fn try_points(&self, grade: Grade) -> Option<f64> {
        self.table
            .iter()
            .find(|&&(candidate, _)| candidate == grade)
            .map(|&(_, points)| points)
    }

    /// Grade-point lookup
    ///
    /// # Panics
    /// Panics if `grade` is not admitted by this scale. Grades are validated when a
    /// course is built, so reaching this is a programming error; a silent zero would
    /// corrupt the weighted average.
    #[must_use]
    pub fn points(&self, grade: Grade) -> f64 {
        match self.try_points(grade) {
            Some(points) => points,
            None => panic!("grade {grade} is not part of the {} scale", self.kind),
        }
    }

    /// Highest point value on the scale
    #[must_use]
    pub fn max_points(&self) -> f64 {
        self.table
            .iter()
            .map(|&(_, points)| points)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Lowest point value on the scale
    #[must_use]
    pub fn min_points(&self) -> f64 {
        self.table
            .iter()
            .map(|&(_, points)| points)
            .fold(f64::INFINITY, f64::min)
    }

    /// Ensure `grade` belongs to this scale
    ///
    /// # Errors
    /// Returns [`CourseError::GradeNotInScale`] for a label from another scale.
    pub fn check(&self, grade: Grade) -> Result<Grade, CourseError> {
        if self.admits(grade) {
            Ok(grade)
        } else {
            Err(CourseError::GradeNotInScale {
                grade,
                scale: self.kind,
            })
        }
    }

    /// Parse user input into a grade admitted by this scale
    ///
    /// # Errors
    /// Returns an error for unknown labels and for labels of the other scale.
    pub fn parse_grade(&self, input: &str) -> Result<Grade, CourseError> {
        self.check(input.parse()?)
    }

    /// Comma-separated admitted labels, for help and error text
    #[must_use]
    pub fn labels(&self) -> String {
        self.grades()
            .map(Grade::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institutional_table() {
        let scale = GradeScale::for_kind(ScaleKind::Institutional);
        assert_eq!(scale.grades().count(), 9);
        assert!((scale.points(Grade::APlus) - 5.0).abs() < f64::EPSILON);
        assert!((scale.points(Grade::BPlus) - 4.0).abs() < f64::EPSILON);
        assert!((scale.points(Grade::F) - 1.0).abs() < f64::EPSILON);
        assert!(!scale.admits(Grade::AMinus));
    }

    #[test]
    fn test_standard_table() {
        let scale = GradeScale::for_kind(ScaleKind::Standard);
        assert_eq!(scale.grades().count(), 12);
        assert!((scale.points(Grade::A) - 4.0).abs() < f64::EPSILON);
        assert!((scale.points(Grade::CMinus) - 1.7).abs() < f64::EPSILON);
        assert!(scale.points(Grade::F).abs() < f64::EPSILON);
        assert!(!scale.admits(Grade::APlus));
    }

    #[test]
    fn test_tables_are_strictly_descending() {
        for scale in [&INSTITUTIONAL, &STANDARD] {
            for pair in scale.table().windows(2) {
                assert!(pair[0].1 > pair[1].1, "{:?} not descending", scale.kind());
            }
            for pair in scale.ladder().windows(2) {
                assert!(pair[0].0 > pair[1].0, "{:?} ladder not descending", scale.kind());
            }
        }
    }

    #[test]
    fn test_max_min_points() {
        assert!((INSTITUTIONAL.max_points() - 5.0).abs() < f64::EPSILON);
        assert!((INSTITUTIONAL.min_points() - 1.0).abs() < f64::EPSILON);
        assert!((STANDARD.max_points() - 4.0).abs() < f64::EPSILON);
        assert!(STANDARD.min_points().abs() < f64::EPSILON);
    }

    #[test]
    #[should_panic(expected = "not part of the institutional scale")]
    fn test_points_panics_on_foreign_grade() {
        let _ = INSTITUTIONAL.points(Grade::DMinus);
    }

    #[test]
    fn test_grade_parse_is_case_insensitive() {
        assert_eq!(" b+ ".parse::<Grade>().unwrap(), Grade::BPlus);
        assert_eq!("a-".parse::<Grade>().unwrap(), Grade::AMinus);
        assert!(matches!(
            "E".parse::<Grade>(),
            Err(CourseError::UnknownGrade(label)) if label == "E"
        ));
    }

    #[test]
    fn test_parse_grade_rejects_other_scale() {
        let err = INSTITUTIONAL.parse_grade("B-").unwrap_err();
        assert_eq!(
            err,
            CourseError::GradeNotInScale {
                grade: Grade::BMinus,
                scale: ScaleKind::Institutional,
            }
        );
        assert_eq!(STANDARD.parse_grade("B-").unwrap(), Grade::BMinus);
    }

    #[test]
    fn test_scale_kind_parse_aliases() {
        assert_eq!("9-point".parse::<ScaleKind>(), Ok(ScaleKind::Institutional));
        assert_eq!("Standard".parse::<ScaleKind>(), Ok(ScaleKind::Standard));
        assert_eq!("12-point".parse::<ScaleKind>(), Ok(ScaleKind::Standard));
        assert!("ects".parse::<ScaleKind>().is_err());
        assert_eq!(ScaleKind::default(), ScaleKind::Institutional);
    }

    #[test]
    fn test_grade_serde_uses_labels() {
        let json = serde_json::to_string(&Grade::BPlus).unwrap();
        assert_eq!(json, "\"B+\"");
        let back: Grade = serde_json::from_str("\"d-\"").unwrap();
        assert_eq!(back, Grade::DMinus);
        assert!(serde_json::from_str::<Grade>("\"Z\"").is_err());
    }

    #[test]
    fn test_labels_listing() {
        assert_eq!(INSTITUTIONAL.labels(), "A+, A, B+, B, C+, C, D+, D, F");
    }

    #[test]
    fn test_foreign_grade_error_lists_allowed_labels() {
        let message = INSTITUTIONAL.parse_grade("A-").unwrap_err().to_string();
        assert_eq!(
            message,
            "grade A- is not part of the institutional scale \
             (use one of: A+, A, B+, B, C+, C, D+, D, F)"
        );
        assert!(STANDARD
            .parse_grade("A+")
            .unwrap_err()
            .to_string()
            .contains("A, A-, B+"));
    }
}
