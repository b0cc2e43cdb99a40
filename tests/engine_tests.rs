//! Integration tests for GPA computation and classification

use uds_gpa::engine::{
    classify, compute_gpa, format_gpa, summarize, total_credits, MIN_CLASSIFIED_CREDITS,
};
use uds_gpa::models::{
    Course, CourseId, DegreeClassification, Grade, GradeScale, INSTITUTIONAL, STANDARD,
};

const EPS: f64 = 1e-9;

fn course(id: &str, credits: f64, grade: Grade) -> Course {
    Course::new(CourseId::from(id), format!("Course {id}"), credits, grade)
}

/// Deterministic mixed list covering every grade of `scale`
fn mixed_courses(scale: &GradeScale) -> Vec<Course> {
    scale
        .grades()
        .enumerate()
        .map(|(i, grade)| {
            #[allow(clippy::cast_precision_loss)]
            let credits = 0.5 + (i % 4) as f64;
            course(&format!("c{i}"), credits, grade)
        })
        .collect()
}

#[test]
fn test_gpa_stays_within_scale_bounds() {
    for scale in [&INSTITUTIONAL, &STANDARD] {
        let courses = mixed_courses(scale);
        for end in 1..=courses.len() {
            let gpa = compute_gpa(scale, &courses[..end]);
            assert!(gpa >= scale.min_points() - EPS, "{gpa} below minimum");
            assert!(gpa <= scale.max_points() + EPS, "{gpa} above maximum");
        }
    }
}

#[test]
fn test_gpa_of_empty_list_is_zero() {
    assert!(compute_gpa(&INSTITUTIONAL, &[]).abs() < EPS);
    assert!(compute_gpa(&STANDARD, &[]).abs() < EPS);
}

#[test]
fn test_gpa_is_order_independent() {
    let courses = mixed_courses(&STANDARD);
    let expected = compute_gpa(&STANDARD, &courses);

    let mut reversed = courses.clone();
    reversed.reverse();
    assert!((compute_gpa(&STANDARD, &reversed) - expected).abs() < EPS);

    for shift in 1..courses.len() {
        let mut rotated = courses.clone();
        rotated.rotate_left(shift);
        assert!((compute_gpa(&STANDARD, &rotated) - expected).abs() < EPS);
    }
}

#[test]
fn test_zero_credit_course_does_not_change_gpa() {
    let courses = mixed_courses(&INSTITUTIONAL);
    let expected = compute_gpa(&INSTITUTIONAL, &courses);

    for grade in INSTITUTIONAL.grades() {
        let mut with_zero = courses.clone();
        with_zero.insert(1, course("zero", 0.0, grade));
        assert!((compute_gpa(&INSTITUTIONAL, &with_zero) - expected).abs() < EPS);
    }
}

#[test]
fn test_total_credits_is_a_raw_sum() {
    let courses = vec![course("a", -1.0, Grade::A), course("b", 2.0, Grade::B)];
    assert!((total_credits(&courses) - 1.0).abs() < EPS);
}

#[test]
fn test_below_minimum_credits_is_never_classified() {
    for gpa in [0.0, 1.0, 3.0, 4.5, 5.0] {
        for credits in [0.0, 1.0, 2.5, MIN_CLASSIFIED_CREDITS - 0.01] {
            assert_eq!(
                classify(&INSTITUTIONAL, gpa, credits),
                DegreeClassification::NotEnoughCredits
            );
        }
    }
}

#[test]
fn test_institutional_boundaries_belong_to_upper_band() {
    let cases = [
        (4.5, DegreeClassification::FirstClass),
        (3.5, DegreeClassification::SecondClassUpper),
        (2.5, DegreeClassification::SecondClassLower),
        (2.0, DegreeClassification::ThirdClass),
        (1.5, DegreeClassification::Pass),
        (1.49, DegreeClassification::Fail),
    ];
    for (gpa, expected) in cases {
        assert_eq!(classify(&INSTITUTIONAL, gpa, 30.0), expected, "gpa {gpa}");
    }
}

#[test]
fn test_institutional_scenario() {
    let courses = vec![course("a", 3.0, Grade::A), course("b", 2.0, Grade::BPlus)];

    let gpa = compute_gpa(&INSTITUTIONAL, &courses);
    assert!((gpa - 4.3).abs() < EPS);
    assert_eq!(format_gpa(gpa), "4.30");
    assert!((total_credits(&courses) - 5.0).abs() < EPS);
    assert_eq!(
        classify(&INSTITUTIONAL, gpa, 5.0),
        DegreeClassification::SecondClassUpper
    );
}

#[test]
fn test_empty_list_summary() {
    let summary = summarize(&INSTITUTIONAL, &[]);
    assert!(summary.cgpa.abs() < EPS);
    assert_eq!(summary.cgpa_display(), "0.00");
    assert_eq!(summary.classification, DegreeClassification::NotEnoughCredits);
}

#[test]
fn test_single_zero_credit_failure() {
    let courses = vec![course("f", 0.0, Grade::F)];
    assert!(compute_gpa(&INSTITUTIONAL, &courses).abs() < EPS);
    assert!(total_credits(&courses).abs() < EPS);
}

#[test]
fn test_standard_scale_summary() {
    let courses = vec![
        course("a", 3.0, Grade::A),
        course("b", 3.0, Grade::AMinus),
        course("c", 4.0, Grade::BPlus),
    ];
    // (12.0 + 11.1 + 13.2) / 10 = 3.63
    let summary = summarize(&STANDARD, &courses);
    assert_eq!(summary.cgpa_display(), "3.63");
    assert_eq!(summary.classification, DegreeClassification::FirstClass);
}
