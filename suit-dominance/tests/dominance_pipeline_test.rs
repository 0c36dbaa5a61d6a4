//! End-to-end exercise of the comparison pipeline the search driver
//! runs: fold outcomes into ranges, merge the sibling baselines, build
//! studies, and settle pairs of lines by the fast path with the exact
//! winners algebra as the fallback.

use suit_core::Rank;
use suit_dominance::{
    init_profile_table, Compare, Outcome, Ranges, Study, Winner, Winners,
};

fn north(rank: Rank) -> Winners {
    Winners::single(Winner::north(rank))
}

fn south(rank: Rank) -> Winners {
    Winners::single(Winner::south(rank))
}

/// Outcomes of one candidate line over four distributions.
fn line_a() -> Vec<Outcome> {
    vec![
        Outcome::new(0, 2, north(Rank::ACE)),
        Outcome::new(1, 3, Winners::new()),
        Outcome::new(2, 2, north(Rank::KING)),
        Outcome::new(3, 1, south(Rank::QUEEN)),
    ]
}

/// A sibling line that does strictly worse on one distribution.
fn line_b() -> Vec<Outcome> {
    vec![
        Outcome::new(0, 2, north(Rank::ACE)),
        Outcome::new(1, 3, Winners::new()),
        Outcome::new(2, 1, south(Rank::KING)),
        Outcome::new(3, 1, south(Rank::QUEEN)),
    ]
}

/// A line incommensurate with line A: better on one distribution,
/// worse on another.
fn line_c() -> Vec<Outcome> {
    vec![
        Outcome::new(0, 2, north(Rank::ACE)),
        Outcome::new(1, 3, Winners::new()),
        Outcome::new(2, 1, south(Rank::KING)),
        Outcome::new(3, 2, south(Rank::JACK)),
    ]
}

fn shared_baseline(lines: &[Vec<Outcome>]) -> Ranges {
    let mut merged = Ranges::new();
    for outcomes in lines {
        merged.multiply(&Ranges::from_outcomes(outcomes));
    }
    merged
}

fn study_of(outcomes: &[Outcome], baseline: &Ranges) -> Study {
    let mut study = Study::new();
    study.study(outcomes);
    study.scrutinize(outcomes, baseline);
    study
}

#[test]
fn test_dominant_line_found_by_fast_path() {
    init_profile_table();
    let (a, b) = (line_a(), line_b());
    let baseline = shared_baseline(&[a.clone(), b.clone()]);

    let sa = study_of(&a, &baseline);
    let sb = study_of(&b, &baseline);

    // The summary pre-test cannot rule dominance out here.
    assert!(sa.summary_dominates(&sb));
    // The profile path settles the pair without the exact algebra.
    assert!(sa.ge_by_profile(&sb));
    assert!(!sb.ge_by_profile(&sa));
    assert_eq!(sa.compare_by_profile(&sb), Compare::First);
    assert_eq!(sb.compare_by_profile(&sa), Compare::Second);
}

#[test]
fn test_incommensurate_lines_fall_back_to_exact() {
    init_profile_table();
    let (a, c) = (line_a(), line_c());
    let baseline = shared_baseline(&[a.clone(), c.clone()]);

    let sa = study_of(&a, &baseline);
    let sc = study_of(&c, &baseline);

    // Neither direction dominates by profile; the driver keeps both
    // and resolves single distributions exactly where it must.
    assert_eq!(sa.compare_by_profile(&sc), Compare::Different);
    assert!(!sa.ge_by_profile(&sc));
    assert!(!sc.ge_by_profile(&sa));

    // Exact winners comparison on the distribution where the trick
    // counts tie: both lines take one trick on distribution 3, but A
    // needs only the queen while C needs the jack.
    let wa = &a[3].winners;
    let wc = &c[3].winners;
    assert_eq!(wa.compare_for_declarer(wc), Compare::First);
    assert_eq!(wc.compare_for_declarer(wa), Compare::Second);
}

#[test]
fn test_merged_baseline_tracks_global_minimum() {
    let (a, b) = (line_a(), line_b());
    let baseline = shared_baseline(&[a, b]);

    assert_eq!(baseline.len(), 4);
    // Distribution 2 differs between the lines: the merged range keeps
    // the defense-preferred interval and the global minimum.
    let two = baseline.get(2).unwrap();
    assert_eq!(two.minimum(), 1);
    assert_eq!(two.upper(), 1);
    // Both lines are fully resolved, so every merged range has
    // collapsed onto the shared minimum.
    assert!(baseline.get(3).unwrap().constant());
    assert!(baseline.constant());

    // A later visit that widens a distribution leaves it unresolved.
    let mut widened = baseline;
    widened.extend(&Outcome::new(2, 3, north(Rank::TEN)));
    assert!(!widened.constant());
}

#[test]
fn test_unconditional_outcome_dominates_any_claim() {
    // Distribution 1 is reached with no card at all; that beats any
    // concrete requirement when trick counts tie.
    let free = Winners::new();
    let claim = north(Rank::ACE);
    assert_eq!(free.compare_for_declarer(&claim), Compare::First);

    let mut collapsed = claim;
    collapsed.add(&free);
    assert!(collapsed.is_unconditional());
}
