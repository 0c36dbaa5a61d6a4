//! Verify the profile fast path against a scalar recomputation.
//!
//! Builds the lookup table once up front, then hammers it from many
//! rayon workers with random line pairs, checking every verdict
//! against a per-distribution recomputation. Exercises both the table
//! contents and its read-only concurrent use.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;
use suit_core::{Dist, Tricks};
use suit_dominance::{init_profile_table, Compare, Outcome, Ranges, Study, Winner, Winners};

#[derive(Parser)]
#[command(name = "profile-check")]
#[command(about = "Verify the profile fast path against scalar recomputation")]
struct Cli {
    /// Number of random line pairs to check
    #[arg(short, long, default_value_t = 100_000)]
    iterations: u64,

    /// Base RNG seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

fn random_line(rng: &mut StdRng, len: usize) -> Vec<Outcome> {
    (0..len)
        .map(|dist| {
            let tricks: Tricks = rng.gen_range(0..=3);
            Outcome::new(
                dist as Dist,
                tricks,
                Winners::single(Winner::north(suit_core::Rank::ACE)),
            )
        })
        .collect()
}

/// Per-distribution verdict, computed without the table.
fn scalar_compare(a: &[Outcome], b: &[Outcome]) -> Compare {
    let ge = a.iter().zip(b).all(|(x, y)| x.tricks >= y.tricks);
    let le = a.iter().zip(b).all(|(x, y)| x.tricks <= y.tricks);
    match (ge, le) {
        (true, true) => Compare::Equal,
        (true, false) => Compare::First,
        (false, true) => Compare::Second,
        (false, false) => Compare::Different,
    }
}

fn check_one(seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = rng.gen_range(1..=25);
    let a = random_line(&mut rng, len);
    let b = random_line(&mut rng, len);

    let mut baseline = Ranges::from_outcomes(&a);
    baseline.multiply(&Ranges::from_outcomes(&b));

    let mut sa = Study::new();
    sa.scrutinize(&a, &baseline);
    let mut sb = Study::new();
    sb.scrutinize(&b, &baseline);

    let expected = scalar_compare(&a, &b);
    sa.compare_by_profile(&sb) == expected
        && sb.compare_by_profile(&sa) == expected.invert()
        && sa.ge_by_profile(&sb) == (expected == Compare::First || expected == Compare::Equal)
}

fn main() {
    let cli = Cli::parse();

    let start = Instant::now();
    init_profile_table();
    println!("profile table built in {:.1?}", start.elapsed());

    let start = Instant::now();
    let mismatches: u64 = (0..cli.iterations)
        .into_par_iter()
        .map(|i| if check_one(cli.seed.wrapping_add(i)) { 0 } else { 1 })
        .sum();
    println!(
        "{} pairs checked in {:.1?}, {} mismatches",
        cli.iterations,
        start.elapsed(),
        mismatches
    );

    if mismatches > 0 {
        std::process::exit(1);
    }
}
