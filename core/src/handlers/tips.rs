use colored::*;
use rand::Rng;

use crate::ports::Screen;
use crate::terminal::colors;

pub const TIPS: [&str; 5] = [
    "Always comment your code!",
    "Learn to use version control like Git.",
    "Take regular breaks to avoid burnout.",
    "Practice coding challenges daily.",
    "Collaborate with others to improve your skills.",
];

/// Uniform pick from [`TIPS`].
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TIPS[rng.random_range(0..TIPS.len())]
}

pub fn show_tip<S, R>(screen: &S, rng: &mut R) -> &'static str
where
    S: Screen + ?Sized,
    R: Rng + ?Sized,
{
    let tip = random_tip(rng);
    screen.blank();
    screen.println(&format!(
        "{}{}",
        "💡 Random Coding Tip: ".color(colors::HIGHLIGHT),
        tip.color(colors::TEXT_DEFAULT)
    ));
    tip
}
