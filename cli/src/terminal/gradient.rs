use colored::*;

pub type Rgb = (u8, u8, u8);

/// Soft teal to lavender.
pub const PASTEL: (Rgb, Rgb) = ((116, 235, 213), (172, 182, 229));

pub fn lerp(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Fully saturated color for a hue in degrees.
pub fn hue(degrees: f32) -> Rgb {
    let h = degrees.rem_euclid(360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u8 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let scale = |c: f32| (c * 255.0).round() as u8;
    (scale(r), scale(g), scale(b))
}

/// Colors every line with the same left-to-right gradient, so columns line up.
pub fn multiline(text: &str, (from, to): (Rgb, Rgb)) -> String {
    let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let span = width.saturating_sub(1).max(1) as f32;

    text.lines()
        .map(|line| {
            line.chars()
                .enumerate()
                .map(|(col, ch)| {
                    if ch.is_whitespace() {
                        return ch.to_string();
                    }
                    let (r, g, b) = lerp(from, to, col as f32 / span);
                    ch.to_string().truecolor(r, g, b).to_string()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One frame of a rainbow that shifts by `frame` steps.
pub fn rainbow(text: &str, frame: usize) -> String {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let (r, g, b) = hue((i * 7 + frame * 12) as f32);
            ch.to_string().truecolor(r, g, b).to_string()
        })
        .collect()
}
