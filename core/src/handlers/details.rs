use colored::*;
use folio_common::profile::Profile;

use crate::ports::Screen;
use crate::terminal::{colors, format};

const ABOUT_KEYS: [&str; 4] = ["Role", "Technologies", "Hobbies", "Fun Fact"];
const CONNECT_KEYS: [&str; 2] = ["GitHub", "Email"];

pub fn show_details<S: Screen + ?Sized>(profile: &Profile, screen: &S) {
    screen.blank();
    screen.println(&format::section(
        &format!("About Me: {}", profile.name),
        colors::SECTION_DETAILS,
    ));
    screen.blank();

    let width = format::key_width(&ABOUT_KEYS);
    screen.println(&format::aligned_line("Role", profile.role, width));
    screen.println(&format::aligned_line(
        "Technologies",
        profile.technologies.join(", "),
        width,
    ));
    screen.println(&format::aligned_line("Hobbies", profile.hobbies.join(", "), width));
    screen.println(&format::aligned_line("Fun Fact", profile.fun_fact, width));

    screen.blank();
    screen.println(&format::section("Connect with Me", colors::SECTION_DETAILS));
    screen.blank();

    let width = format::key_width(&CONNECT_KEYS);
    screen.println(&format::aligned_line(
        "GitHub",
        profile.github.color(colors::LINK).underline(),
        width,
    ));
    screen.println(&format::aligned_line(
        "Email",
        profile.email.color(colors::LINK).underline(),
        width,
    ));
    screen.blank();
}
