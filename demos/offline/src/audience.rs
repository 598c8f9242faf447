//! Seeded synthetic audience.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sw_core::{Agent, AgentId, AgentTraits, StyleGuide};

const NAMES: [&str; 10] = [
    "Rana", "Omar", "Lina", "Yousef", "Maha", "Karim", "Dana", "Sami", "Noor", "Faris",
];
const CITIES:     [&str; 4] = ["Amman", "Riyadh", "Dubai", "Cairo"];
const EDUCATION:  [&str; 3] = ["high school", "bachelor", "master"];
const INCOME:     [&str; 3] = ["low", "middle", "high"];
const TOPICS:     [&str; 3] = ["loyalty programs", "online shopping", "local brands"];
const FORMALITY:  [&str; 3] = ["casual", "moderate", "formal"];
const EMOJI:      [&str; 3] = ["none", "occasional", "frequent"];

/// `count` agents with ids `1..=count`, identical for identical seeds.
pub fn build_audience(count: u32, seed: u64) -> Vec<Agent> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (1..=count)
        .map(|i| {
            let name = NAMES[(i as usize - 1) % NAMES.len()];
            let attitudes: BTreeMap<String, f64> = TOPICS
                .iter()
                .map(|t| ((*t).to_owned(), score(&mut rng)))
                .collect();
            let traits = AgentTraits {
                age:            rng.gen_range(18..=65),
                gender:         if rng.gen_bool(0.5) { "female" } else { "male" }.to_owned(),
                location:       pick(&mut rng, &CITIES),
                education:      pick(&mut rng, &EDUCATION),
                income_level:   pick(&mut rng, &INCOME),
                openness:       score(&mut rng),
                skepticism:     score(&mut rng),
                traditionalism: score(&mut rng),
                tech_savviness: score(&mut rng),
                attitudes,
                style: StyleGuide {
                    formality:   pick(&mut rng, &FORMALITY),
                    emoji_usage: pick(&mut rng, &EMOJI),
                    ..StyleGuide::default()
                },
            };
            Agent::new(AgentId(i), name, traits)
        })
        .collect()
}

fn score(rng: &mut SmallRng) -> f64 {
    (rng.r#gen::<f64>() * 100.0).round() / 100.0
}

fn pick(rng: &mut SmallRng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_owned()
}
