//! Plain-text frames for the card.
//!
//! Rendering is a pure function of the engine state, the copy and the
//! decorations so frames can be asserted on without a terminal.

use crossterm::style::Stylize;
use rand::Rng;
use valentine_core::card::glows;
use valentine_core::decor::{self, ConfettiPiece, FloatingHeart, Sparkle};
use valentine_core::{CardCopy, CardEngine, Phase, TimeRemaining};

pub const DEFAULT_WIDTH: usize = 60;

/// Resting width of the "Yes" button, before scaling.
const BUTTON_BASE_WIDTH: usize = 9;

/// Decorations generated once per session.
#[derive(Debug, Clone)]
pub struct Scene {
    pub hearts: Vec<FloatingHeart>,
    pub confetti: Vec<ConfettiPiece>,
    pub sparkles: Vec<Sparkle>,
}

impl Scene {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hearts: decor::floating_hearts(rng, decor::HEART_COUNT),
            confetti: decor::confetti(rng, decor::CONFETTI_COUNT),
            sparkles: decor::sparkles(rng, decor::SPARKLE_COUNT),
        }
    }
}

pub fn frame(
    engine: &CardEngine,
    copy: &CardCopy,
    scene: &Scene,
    remaining: Option<TimeRemaining>,
    art: Option<&str>,
    width: usize,
) -> String {
    match engine.phase() {
        Phase::Proposal => proposal(engine, copy, scene, art, width),
        Phase::Accepted => success(copy, scene, remaining.unwrap_or_default(), art, width),
    }
}

pub fn proposal(
    engine: &CardEngine,
    copy: &CardCopy,
    scene: &Scene,
    art: Option<&str>,
    width: usize,
) -> String {
    let mut out = Vec::new();
    out.push(scatter(width, scene.hearts.iter().map(|h| h.left_pct), '♥'));
    out.push(String::new());

    let decline_available = engine.decline_available();
    out.push(center(copy.mood(decline_available), width));
    if let Some(art) = art {
        out.extend(art.lines().map(|l| center(l, width)));
    }
    out.push(String::new());
    out.push(center(&copy.question, width).bold().magenta().to_string());
    out.push(center(copy.subtext(engine.decline_count()), width));
    out.push(String::new());

    let scale = engine.scale();
    let mut yes = yes_button(&copy.accept_label, scale, width);
    if glows(scale) {
        yes = format!("✨{yes}✨");
    }
    let buttons = if decline_available {
        format!("[n] {}    [y] {}", copy.decline_label, yes)
    } else {
        format!("[y] {yes}")
    };
    out.push(center(&buttons, width));
    out.push(scatter(width, scene.sparkles.iter().map(|s| s.left_pct), '✦'));
    out.push(String::new());
    out.push(center(&copy.footer.to_uppercase(), width).dark_grey().to_string());
    out.push(center("[q] quit", width));
    out.join("\n")
}

pub fn success(
    copy: &CardCopy,
    scene: &Scene,
    remaining: TimeRemaining,
    art: Option<&str>,
    width: usize,
) -> String {
    let mut out = Vec::new();
    out.push(confetti_line(&scene.confetti, width));
    out.push(String::new());
    out.push(center("✔", width));
    out.push(center(&copy.headline, width).bold().magenta().to_string());
    out.push(String::new());
    out.push(center(&countdown_units(remaining), width));
    out.push(center(&countdown_labels(), width));
    out.push(String::new());
    out.push(center(&copy.tagline.to_uppercase(), width));
    if let Some(art) = art {
        out.push(String::new());
        out.extend(art.lines().map(|l| center(l, width)));
    }
    out.push(String::new());
    out.push(center(&format!("[r] {}    [q] quit", copy.restart_label), width));
    out.push(center(&copy.footer.to_uppercase(), width).dark_grey().to_string());
    out.join("\n")
}

/// "Yes" padded to the scaled width, capped to the frame.
fn yes_button(label: &str, scale: f64, width: usize) -> String {
    let label_len = label.chars().count();
    let target = (BUTTON_BASE_WIDTH as f64 * scale).round() as usize;
    let inner = target.clamp(label_len + 2, width.saturating_sub(16).max(label_len + 2));
    let pad = inner - label_len;
    let left = pad / 2;
    format!(
        "({}{}{})",
        " ".repeat(left),
        label,
        " ".repeat(pad - left)
    )
}

fn countdown_units(remaining: TimeRemaining) -> String {
    remaining
        .units()
        .iter()
        .map(|(value, _)| format!("{value:02}"))
        .collect::<Vec<_>>()
        .join("   ")
}

fn countdown_labels() -> String {
    TimeRemaining::default()
        .units()
        .iter()
        .map(|(_, label)| format!("{label:<3}"))
        .collect::<Vec<_>>()
        .join("  ")
}

fn confetti_line(pieces: &[ConfettiPiece], width: usize) -> String {
    let mut cells = vec![' '; width.max(1)];
    for piece in pieces {
        let idx = position(piece.left_pct, cells.len());
        cells[idx] = match piece.colour() {
            "white" => '·',
            "rose-500" | "rose-400" => '*',
            _ => '+',
        };
    }
    cells.into_iter().collect()
}

fn scatter(width: usize, positions: impl Iterator<Item = f64>, glyph: char) -> String {
    let mut cells = vec![' '; width.max(1)];
    for pct in positions {
        let idx = position(pct, cells.len());
        cells[idx] = glyph;
    }
    cells.into_iter().collect()
}

fn position(pct: f64, len: usize) -> usize {
    ((pct / 100.0 * len as f64) as usize).min(len - 1)
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valentine_core::GrowthCurve;

    fn scene() -> Scene {
        Scene::generate(&mut decor::seeded(42))
    }

    #[test]
    fn proposal_shows_both_options() {
        let engine = CardEngine::default();
        let text = proposal(&engine, &CardCopy::default(), &scene(), None, DEFAULT_WIDTH);
        assert!(text.contains("Will you be my Valentine?"));
        assert!(text.contains("CHOOSE YOUR DESTINY"));
        assert!(text.contains("[n] No"));
        assert!(text.contains("[y] ("));
        assert!(text.contains("🧸"));
    }

    #[test]
    fn yes_button_grows_with_declines() {
        let curve = GrowthCurve::default();
        let small = yes_button("Yes", curve.scale(0), DEFAULT_WIDTH);
        let big = yes_button("Yes", curve.scale(3), DEFAULT_WIDTH);
        assert!(big.len() > small.len());
    }

    #[test]
    fn yes_button_never_overflows_frame() {
        let huge = yes_button("Yes", 1_000.0, DEFAULT_WIDTH);
        assert!(huge.chars().count() <= DEFAULT_WIDTH);
    }

    #[test]
    fn no_option_disappears_at_limit() {
        let mut engine = CardEngine::default();
        for _ in 0..4 {
            engine.decline();
        }
        let text = proposal(&engine, &CardCopy::default(), &scene(), None, DEFAULT_WIDTH);
        assert!(!text.contains("[n]"));
        assert!(text.contains("🥹"));
        assert!(text.contains("The Yes button is taking over!"));
        assert!(text.contains('✨'));
    }

    #[test]
    fn success_shows_padded_countdown() {
        let remaining = TimeRemaining::from_millis(90_061_000);
        let text = success(&CardCopy::default(), &scene(), remaining, None, DEFAULT_WIDTH);
        assert!(text.contains("Yay! See you on the 14th!"));
        assert!(text.contains("01   01   01   01"));
        assert!(text.contains("Days"));
        assert!(text.contains("Can't Wait!"));
    }

    #[test]
    fn artwork_is_optional() {
        let engine = CardEngine::default();
        let copy = CardCopy::default();
        let with = proposal(&engine, &copy, &scene(), Some("<3 <3"), DEFAULT_WIDTH);
        let without = proposal(&engine, &copy, &scene(), None, DEFAULT_WIDTH);
        assert!(with.contains("<3 <3"));
        assert!(with.lines().count() > without.lines().count());
    }
}
