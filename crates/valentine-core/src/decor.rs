//! Randomized decoration parameters.
//!
//! Purely cosmetic. Every generator takes the random source as an argument so
//! a seeded generator reproduces the same scene.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

pub const HEART_COUNT: usize = 12;
pub const CONFETTI_COUNT: usize = 60;
pub const SPARKLE_COUNT: usize = 5;

pub const CONFETTI_PALETTE: [&str; 6] = [
    "rose-400", "pink-300", "rose-200", "white", "rose-500", "rose-300",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatingHeart {
    /// Horizontal position, percent of width.
    pub left_pct: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
    pub size: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfettiPiece {
    pub id: usize,
    /// +1 or -1.
    pub rotation_dir: i8,
    pub x_offset: f64,
    pub speed_secs: f64,
    pub left_pct: f64,
}

impl ConfettiPiece {
    pub fn colour(&self) -> &'static str {
        CONFETTI_PALETTE[self.id % CONFETTI_PALETTE.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sparkle {
    pub top_pct: f64,
    pub left_pct: f64,
    pub delay_secs: f64,
}

pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

pub fn floating_hearts<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<FloatingHeart> {
    (0..count)
        .map(|_| FloatingHeart {
            left_pct: rng.gen_range(0.0..100.0),
            delay_secs: rng.gen_range(0.0..5.0),
            duration_secs: 10.0 + rng.gen_range(0.0..15.0),
            size: 15.0 + rng.gen_range(0.0..25.0),
            opacity: 0.1 + rng.gen_range(0.0..0.2),
        })
        .collect()
}

pub fn confetti<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|id| ConfettiPiece {
            id,
            rotation_dir: if rng.gen_bool(0.5) { 1 } else { -1 },
            x_offset: rng.gen_range(-30.0..30.0),
            speed_secs: 3.0 + rng.gen_range(0.0..4.0),
            left_pct: rng.gen_range(0.0..100.0),
        })
        .collect()
}

pub fn sparkles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Sparkle> {
    (0..count)
        .map(|i| Sparkle {
            top_pct: rng.gen_range(10.0..90.0),
            left_pct: rng.gen_range(10.0..90.0),
            delay_secs: i as f64 * 0.3,
        })
        .collect()
}
