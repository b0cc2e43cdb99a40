//! Scale command handler

use uds_gpa::engine::{format_gpa, MIN_CLASSIFIED_CREDITS};
use uds_gpa::models::{DegreeClassification, GradeScale};

/// Print the grade-points table and classification cutpoints of `scale`
pub fn run(scale: &GradeScale) {
    println!("\n=== {} scale ===\n", scale.kind());
    println!("{:<6}  {:>6}", "GRADE", "POINTS");
    for &(grade, points) in scale.table() {
        println!("{:<6}  {:>6}", grade.label(), format_gpa(points));
    }

    println!("\n{:<20}  {:>8}", "CLASSIFICATION", "MIN GPA");
    for &(cut, band) in scale.ladder() {
        println!("{:<20}  {:>8}", band.label(), format_gpa(cut));
    }
    println!("{:<20}  {:>8}", DegreeClassification::Fail.label(), "below");
    println!(
        "\nFewer than {MIN_CLASSIFIED_CREDITS} credits: {}",
        DegreeClassification::NotEnoughCredits
    );
}
