//! Course command handler

use crate::args::CourseSubcommand;
use logger::{error, info};
use std::error::Error;
use std::io::{self, Write};
use uds_gpa::engine::format_gpa;
use uds_gpa::models::{Course, CourseId, CoursePatch, GradeScale, NewCourse};
use uds_gpa::store::{CourseStore, OwnerKey};

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, store: &mut impl CourseStore, owner: &OwnerKey) {
    let result = match subcommand {
        CourseSubcommand::Add {
            name,
            credits,
            grade,
            term,
        } => handle_add(store, owner, &name, credits, &grade, term),
        CourseSubcommand::List => handle_list(&*store, owner),
        CourseSubcommand::Update {
            id,
            name,
            credits,
            grade,
            term,
            clear_term,
        } => {
            let term = if clear_term { Some(None) } else { term.map(Some) };
            handle_update(store, owner, &id, name, credits, grade.as_deref(), term)
        }
        CourseSubcommand::Remove { id } => handle_remove(store, owner, &id),
        CourseSubcommand::Clear { yes } => handle_clear(store, owner, yes),
    };

    if let Err(e) = result {
        error!("Course command failed for '{owner}': {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Handle the course add subcommand
fn handle_add(
    store: &mut impl CourseStore,
    owner: &OwnerKey,
    name: &str,
    credits: f64,
    grade: &str,
    term: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let grade = store.scale().parse_grade(grade)?;
    let entry = NewCourse::new(name, credits, grade)?.with_term(term);
    let course = store.add(owner, entry)?;
    info!("Added course {} for '{owner}'", course.id);
    println!("✓ Added {}", describe(&course));
    Ok(())
}

/// Handle the course list subcommand
fn handle_list(store: &impl CourseStore, owner: &OwnerKey) -> Result<(), Box<dyn Error>> {
    let courses = store.list(owner)?;
    if courses.is_empty() {
        println!("No courses recorded for '{owner}'.");
        return Ok(());
    }

    let scale = store.scale();
    println!(
        "{:<8}  {:<32}  {:<10}  {:>7}  {:<5}  {:>6}",
        "ID", "COURSE", "TERM", "CREDITS", "GRADE", "POINTS"
    );
    for course in &courses {
        let points = scale
            .try_points(course.grade)
            .map_or_else(|| "-".to_string(), format_gpa);
        println!(
            "{:<8}  {:<32}  {:<10}  {:>7.1}  {:<5}  {:>6}",
            course.id,
            course.name,
            course.term.as_deref().unwrap_or("-"),
            course.credits,
            course.grade,
            points
        );
    }
    Ok(())
}

/// Handle the course update subcommand
fn handle_update(
    store: &mut impl CourseStore,
    owner: &OwnerKey,
    id: &str,
    name: Option<String>,
    credits: Option<f64>,
    grade: Option<&str>,
    term: Option<Option<String>>,
) -> Result<(), Box<dyn Error>> {
    let patch = build_patch(store.scale(), name, credits, grade, term)?;
    let course = store.update(owner, &CourseId::from(id), &patch)?;
    info!("Updated course {} for '{owner}'", course.id);
    println!("✓ Updated {}", describe(&course));
    Ok(())
}

/// Handle the course remove subcommand
fn handle_remove(
    store: &mut impl CourseStore,
    owner: &OwnerKey,
    id: &str,
) -> Result<(), Box<dyn Error>> {
    let course = store.remove(owner, &CourseId::from(id))?;
    info!("Removed course {} for '{owner}'", course.id);
    println!("✓ Removed {}", describe(&course));
    Ok(())
}

/// Handle the course clear subcommand
fn handle_clear(
    store: &mut impl CourseStore,
    owner: &OwnerKey,
    yes: bool,
) -> Result<(), Box<dyn Error>> {
    if !yes {
        print!("Remove every course of '{owner}'? (y/n): ");
        io::stdout().flush().ok();

        let mut response = String::new();
        io::stdin().read_line(&mut response).ok();
        let response = response.trim();
        if !(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")) {
            println!("✗ Clear cancelled");
            return Ok(());
        }
    }

    let removed = store.clear(owner)?;
    info!("Cleared {removed} course(s) for '{owner}'");
    println!("✓ Removed {removed} course(s)");
    Ok(())
}

/// Turn update flags into a patch, rejecting unknown grades and empty edits
fn build_patch(
    scale: &GradeScale,
    name: Option<String>,
    credits: Option<f64>,
    grade: Option<&str>,
    term: Option<Option<String>>,
) -> Result<CoursePatch, Box<dyn Error>> {
    let grade = grade.map(|g| scale.parse_grade(g)).transpose()?;
    let patch = CoursePatch {
        name,
        credits,
        grade,
        term,
    };
    if patch.is_empty() {
        return Err(
            "Nothing to update: pass --name, --credits, --grade, --term or --clear-term".into(),
        );
    }
    Ok(patch)
}

fn describe(course: &Course) -> String {
    let term = course
        .term
        .as_deref()
        .map_or_else(String::new, |t| format!(", {t}"));
    format!(
        "[{}] {} ({} credits, {}{term})",
        course.id, course.name, course.credits, course.grade
    )
}
