//! Settlement engine: worked examples and balance properties.

use chipin_core::models::{Contribution, Payback};
use chipin_core::{aggregate, settle, settle_with_tolerance};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn pool(entries: &[(&str, f64)]) -> Vec<Contribution> {
    entries
        .iter()
        .map(|(name, amount)| Contribution::new(*name, *amount))
        .collect()
}

fn payback(from: &str, to: &str, amount: f64) -> Payback {
    Payback {
        from: from.to_string(),
        to: to.to_string(),
        amount,
        settled: false,
    }
}

#[test]
fn settle_empty_pool_returns_nothing() {
    assert!(settle(&[]).is_empty());
    let agg = aggregate(&[]);
    assert_eq!(agg.total, 0.0);
    assert_eq!(agg.equal_share, 0.0);
}

#[rstest]
#[case::single_contributor(&[("A", 10.0)])]
#[case::everyone_equal(&[("A", 7.5), ("B", 7.5), ("C", 7.5)])]
#[case::all_zero(&[("A", 0.0), ("B", 0.0)])]
fn already_settled_pools_need_no_paybacks(#[case] entries: &[(&str, f64)]) {
    assert!(settle(&pool(entries)).is_empty());
}

#[rstest]
#[case::two_people(
    &[("A", 0.0), ("B", 10.0)],
    vec![payback("A", "B", 5.0)]
)]
#[case::two_debtors_one_lender(
    &[("A", 0.0), ("B", 0.0), ("C", 30.0)],
    vec![payback("A", "C", 10.0), payback("B", "C", 10.0)]
)]
#[case::one_debtor_two_lenders(
    &[("A", 0.0), ("B", 15.0), ("C", 15.0)],
    vec![payback("A", "B", 5.0), payback("A", "C", 5.0)]
)]
#[case::settled_contributor_is_skipped(
    &[("A", 20.0), ("B", 20.0), ("C", 50.0), ("D", 30.0)],
    vec![payback("A", "C", 10.0), payback("B", "C", 10.0)]
)]
#[case::remainder_carries_across_lenders(
    &[("A", 40.0), ("B", 0.0), ("C", 20.0), ("D", 0.0)],
    vec![payback("B", "A", 15.0), payback("D", "A", 10.0), payback("D", "C", 5.0)]
)]
fn worked_examples(#[case] entries: &[(&str, f64)], #[case] expected: Vec<Payback>) {
    assert_eq!(settle(&pool(entries)), expected);
}

#[test]
fn aggregate_reports_total_and_share() {
    let agg = aggregate(&pool(&[("A", 0.0), ("B", 0.0), ("C", 30.0)]));
    assert_eq!(agg.total, 30.0);
    assert_eq!(agg.equal_share, 10.0);
}

#[test]
fn negative_contributions_are_settled_like_any_other() {
    let paybacks = settle(&pool(&[("A", -10.0), ("B", 10.0)]));
    assert_eq!(paybacks, vec![payback("A", "B", 10.0)]);
}

#[test]
fn thirds_leave_no_dust_paybacks() {
    // share is 10/3, which is not exact in binary
    let paybacks = settle(&pool(&[("A", 10.0), ("B", 0.0), ("C", 0.0)]));
    assert_eq!(paybacks.len(), 2);
    let received: f64 = paybacks.iter().map(|p| p.amount).sum();
    assert!((received - 20.0 / 3.0).abs() < 1e-9);
    assert!(paybacks.iter().all(|p| p.to == "A"));
}

#[rstest]
#[case::ten_billion(1e10, 8.0)]
#[case::ten_million(1e7, 0.5)]
fn small_imbalance_on_a_large_pool_is_still_paid(#[case] base: f64, #[case] gap: f64) {
    let paybacks = settle(&pool(&[("A", base), ("B", base + gap)]));
    assert_eq!(paybacks, vec![payback("A", "B", gap / 2.0)]);
}

#[test]
fn tolerance_is_absolute() {
    let entries = pool(&[("A", 0.0), ("B", 1.0)]);
    assert!(settle_with_tolerance(&entries, 0.5).is_empty());
    assert_eq!(settle_with_tolerance(&entries, 0.4), vec![payback("A", "B", 0.5)]);
}

#[test]
fn zero_tolerance_still_terminates() {
    let entries = pool(&[("A", 0.1), ("B", 0.2), ("C", 0.3), ("D", 0.7)]);
    let paybacks = settle_with_tolerance(&entries, 0.0);
    assert!(!paybacks.is_empty());
    assert!(paybacks.len() <= entries.len());
}

fn balance_of(paybacks: &[Payback], name: &str) -> f64 {
    paybacks
        .iter()
        .map(|p| {
            if p.to == name {
                p.amount
            } else if p.from == name {
                -p.amount
            } else {
                0.0
            }
        })
        .sum()
}

proptest! {
    #[test]
    fn paybacks_cancel_every_deviation(cents in prop::collection::vec(0u64..=1_000_000, 1..=8)) {
        let contributions: Vec<Contribution> = cents
            .iter()
            .enumerate()
            .map(|(i, c)| Contribution::new(format!("p{}", i), *c as f64 / 100.0))
            .collect();
        let share = aggregate(&contributions).equal_share;
        let magnitude = contributions.iter().fold(1.0_f64, |m, c| m.max(c.amount.abs()));
        let tolerance = 1e-6 * magnitude;

        let paybacks = settle(&contributions);

        prop_assert!(paybacks.len() <= contributions.len() - 1);
        prop_assert!(paybacks.iter().all(|p| p.amount > 0.0 && !p.settled));
        for c in &contributions {
            // received minus paid must equal what they put in above the share
            let net = balance_of(&paybacks, &c.name);
            prop_assert!((net - (c.amount - share)).abs() <= tolerance,
                "{}: net {} vs surplus {}", c.name, net, c.amount - share);
        }
    }

    #[test]
    fn nobody_both_pays_and_receives(cents in prop::collection::vec(0u64..=100_000, 0..=8)) {
        let contributions: Vec<Contribution> = cents
            .iter()
            .enumerate()
            .map(|(i, c)| Contribution::new(format!("p{}", i), *c as f64 / 100.0))
            .collect();
        let paybacks = settle(&contributions);
        for p in &paybacks {
            prop_assert!(paybacks.iter().all(|q| q.to != p.from));
        }
    }
}
