use colored::*;
use folio_common::profile::{Profile, Project};
use tracing::debug;

use crate::error::PortfolioError;
use crate::ports::{Prompter, Screen};
use crate::terminal::{colors, format};

pub const NEXT_PROJECT_PROMPT: &str = "Would you like to see the next project?";

/// Walks the projects in order, asking before each one after the first.
///
/// Returns how many projects were shown.
pub fn browse_projects<P, S>(
    profile: &Profile,
    prompter: &mut P,
    screen: &S,
) -> Result<usize, PortfolioError>
where
    P: Prompter + ?Sized,
    S: Screen + ?Sized,
{
    screen.blank();
    screen.println(&format::section("My Projects", colors::SECTION_PROJECTS));
    screen.blank();

    let mut shown = 0;
    for (idx, project) in profile.projects.iter().enumerate() {
        print_project(project, screen);
        shown += 1;

        if profile.is_last_project(idx) {
            break;
        }
        if !prompter.confirm(NEXT_PROJECT_PROMPT, true)? {
            debug!(shown, total = profile.projects.len(), "project browsing stopped early");
            break;
        }
    }
    Ok(shown)
}

fn print_project<S: Screen + ?Sized>(project: &Project, screen: &S) {
    screen.println(&project.name.color(colors::PRIMARY).bold().to_string());
    screen.println(&project.description.color(colors::TEXT_DEFAULT).to_string());
    screen.println(&format!("URL: {}", project.url).color(colors::LINK).to_string());
    screen.blank();
    screen.println(&"Key Features:".color(colors::SUCCESS).to_string());
    for (i, detail) in project.details.iter().enumerate() {
        screen.println(&format::numbered(i + 1, detail));
    }
    screen.blank();
}
