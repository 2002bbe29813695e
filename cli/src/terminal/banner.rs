use std::io::{self, Write};
use std::time::Duration;

use colored::*;
use console::Term;
use crossterm::{
    cursor::{self, MoveToColumn},
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use folio_common::profile::Profile;
use folio_core::terminal::{colors, format};
use tokio::time::Instant;
use unicode_width::UnicodeWidthStr;

use crate::terminal::gradient;

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

const BANNER: &str = r#"
 _____                _    _                            _          _____  _       _____
|  __ \              | |  | |                          | |        / ____|| |     |_   _|
| |__) | _ __   __ _ | |_ | |__   _ __ ___    ___  ___ | |__     | |     | |       | |
|  ___/ | '__| / _` || __|| '_ \ | '_ ` _ \  / _ \/ __|| '_ \    | |     | |       | |
| |     | |   | (_| || |_ | | | || | | | | ||  __/\__ \| | | |   | |____ | |____  _| |_
|_|     |_|    \__,_| \__||_| |_||_| |_| |_| \___||___/|_| |_|    \_____||______||_____|
"#;

/// Clears the screen, animates the title, then prints the banner.
pub async fn welcome(profile: &Profile, pacing: Duration) -> io::Result<()> {
    Term::stdout().clear_screen()?;

    let title = format!("Welcome to {}'s Interactive CLI Portfolio!", profile.name);
    animate_rainbow(&title, pacing).await?;

    println!("{}", gradient::multiline(BANNER, gradient::PASTEL));
    version_line();
    println!(
        "{}",
        format!(
            "\n🚀 Embarking on a journey through the digital realm of {}!\n",
            profile.name
        )
        .color(colors::PRIMARY)
    );
    Ok(())
}

/// Hides the cursor for as long as it lives; dropping it shows the cursor
/// again, also when a redraw fails halfway.
struct HiddenCursor<W: Write> {
    out: W,
}

impl<W: Write> HiddenCursor<W> {
    fn new(mut out: W) -> io::Result<Self> {
        execute!(out, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for HiddenCursor<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show);
    }
}

/// Redraws `text` in place with a shifting rainbow until `duration` has passed.
async fn animate_rainbow(text: &str, duration: Duration) -> io::Result<()> {
    let mut guard = HiddenCursor::new(io::stdout())?;

    let started = Instant::now();
    let mut frame: usize = 0;
    loop {
        execute!(
            guard.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(gradient::rainbow(text, frame))
        )?;
        if started.elapsed() >= duration {
            break;
        }
        tokio::time::sleep(FRAME_INTERVAL.min(duration)).await;
        frame = frame.wrapping_add(1);
    }

    execute!(guard.out, Print("\n"))?;
    guard.out.flush()
}

fn version_line() {
    let text_content: String = format!("⟦ FOLIO v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(format::TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .color(colors::SEPARATOR);
    println!("{}{}{}", sep, text, sep);
}
