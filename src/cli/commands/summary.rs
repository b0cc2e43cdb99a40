//! Summary command handler

use colored::{Color, Colorize};
use logger::{error, verbose};
use uds_gpa::engine::{format_gpa, summarize};
use uds_gpa::models::ColorTag;
use uds_gpa::report::{format_credits, NO_TERM_LABEL};
use uds_gpa::store::{CourseStore, OwnerKey};

/// Terminal color for a classification color tag
const fn terminal_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Green => Color::Green,
        ColorTag::Blue => Color::Blue,
        ColorTag::Teal => Color::Cyan,
        ColorTag::Amber => Color::Yellow,
        ColorTag::Orange => Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        ColorTag::Red => Color::Red,
        ColorTag::Neutral => Color::BrightBlack,
    }
}

/// Print GPA, CGPA, classification and the per-term breakdown
pub fn run(store: &impl CourseStore, owner: &OwnerKey) {
    let courses = match store.list(owner) {
        Ok(courses) => courses,
        Err(e) => {
            error!("Failed to load courses for '{owner}': {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let scale = store.scale();
    let summary = summarize(scale, &courses);
    verbose!(
        "Summarized {} course(s) for '{owner}' on the {} scale",
        summary.course_count,
        scale.kind()
    );

    let classification = summary
        .classification
        .label()
        .color(terminal_color(summary.color))
        .bold();

    println!("\n=== Summary: {owner} ===\n");
    println!("Scale:          {}", scale.kind());
    println!("Current GPA:    {}", summary.gpa_display());
    println!("CGPA:           {}", summary.cgpa_display().bold());
    println!("Classification: {classification}");
    println!("Courses:        {}", summary.course_count);
    println!("Credits:        {}", format_credits(summary.total_credits));
    println!("Progress:       {:.0}%", summary.progress.max(0.0));

    if !summary.terms.is_empty() {
        println!("\n{:<12}  {:>5}  {:>7}  {:>7}", "TERM", "GPA", "CREDITS", "COURSES");
        for term in &summary.terms {
            println!(
                "{:<12}  {:>5}  {:>7}  {:>7}",
                term.term.as_deref().unwrap_or(NO_TERM_LABEL),
                format_gpa(term.gpa),
                format_credits(term.credits),
                term.course_count
            );
        }
    }
}
