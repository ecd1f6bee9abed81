//! Synthetic campaign data for tests.
//!
//! Seeded generators over the category pools of the historical
//! campaign table. Deterministic for a fixed seed.

use rand::prelude::*;

use crate::data::{CampaignRecord, Dataset};

/// Marketing channels observed in the historical table.
pub const CHANNELS: [&str; 5] = [
    "إعلانات رقمية",
    "وسائل التواصل",
    "تلفزيون",
    "راديو",
    "بريد إلكتروني",
];

/// Target age brackets.
pub const AUDIENCE_BRACKETS: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55+"];

/// Market conditions.
pub const MARKET_CONDITIONS: [&str; 3] = ["طبيعية", "أزمة كورونا", "أزمة اقتصادية"];

/// Generate a synthetic campaign table with a learnable signal.
///
/// Budgets are uniform integers in `[1000, 50000)`, durations in
/// `[7, 90]`, categories drawn uniformly from the pools above. The
/// outcome leans success for high-budget, long campaigns with 15%
/// label noise, so a trained model beats chance on held-out rows.
pub fn synthetic_campaigns(rows: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let records = (0..rows)
        .map(|_| {
            let budget = rng.gen_range(1_000..50_000) as f32;
            let duration = rng.gen_range(7..=90u32);
            let signal = budget / 50_000.0 + duration as f32 / 90.0 > 1.0;
            let noisy = rng.gen::<f32>() < 0.15;
            let success = signal != noisy;
            CampaignRecord::new(
                budget,
                CHANNELS[rng.gen_range(0..CHANNELS.len())],
                AUDIENCE_BRACKETS[rng.gen_range(0..AUDIENCE_BRACKETS.len())],
                duration,
                MARKET_CONDITIONS[rng.gen_range(0..MARKET_CONDITIONS.len())],
            )
            .with_outcome(success)
        })
        .collect();
    Dataset::from_records(records).expect("synthetic dataset is non-empty and labeled")
}

/// Generate a table with exactly `minority` successes out of `rows`.
///
/// Useful for exercising the class-balance correction.
pub fn imbalanced_campaigns(rows: usize, minority: usize, seed: u64) -> Dataset {
    assert!(minority <= rows);
    let mut rng = StdRng::seed_from_u64(seed);
    let records = (0..rows)
        .map(|i| {
            CampaignRecord::new(
                rng.gen_range(1_000..50_000) as f32,
                CHANNELS[rng.gen_range(0..CHANNELS.len())],
                AUDIENCE_BRACKETS[rng.gen_range(0..AUDIENCE_BRACKETS.len())],
                rng.gen_range(7..=90u32),
                MARKET_CONDITIONS[rng.gen_range(0..MARKET_CONDITIONS.len())],
            )
            .with_outcome(i < minority)
        })
        .collect();
    Dataset::from_records(records).expect("synthetic dataset is non-empty and labeled")
}
