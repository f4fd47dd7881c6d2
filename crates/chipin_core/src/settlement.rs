//! Chip-in settlement: who pays whom so that everyone ends up at the equal share.
//!
//! Greedy two-pointer matching. Debtors (paid less than the share) and lenders
//! (paid more) keep their contribution order; the head debtor pays the head
//! lender as much as either side still needs, and whoever is satisfied is
//! retired. Each step retires at least one party.

use crate::models::{Aggregate, Contribution, Payback};

/// Balances within this absolute distance of zero count as settled.
pub const SETTLE_EPSILON: f64 = 1e-9;

/// Total of the pool and the equal per-person share; an empty pool has share 0.
pub fn aggregate(contributions: &[Contribution]) -> Aggregate {
    let total: f64 = contributions.iter().map(|c| c.amount).sum();
    let equal_share = if contributions.is_empty() {
        0.0
    } else {
        total / contributions.len() as f64
    };
    Aggregate { total, equal_share }
}

/// Outstanding amount for one party; always positive while queued.
struct Balance<'a> {
    name: &'a str,
    remaining: f64,
}

/// Paybacks that bring every contributor to the equal share, in the order the
/// settlements happen. All paybacks start unsettled.
pub fn settle(contributions: &[Contribution]) -> Vec<Payback> {
    settle_with_tolerance(contributions, SETTLE_EPSILON)
}

/// `settle` with an explicit cutoff. `tolerance` is absolute, in the same
/// unit as the amounts: a contributor whose distance from the equal share is
/// at most `tolerance` is left out, and a party is retired once what it still
/// owes or is owed drops to `tolerance` or below. The sign is ignored and NaN
/// means exact matching (`0.0`).
pub fn settle_with_tolerance(contributions: &[Contribution], tolerance: f64) -> Vec<Payback> {
    let Aggregate { equal_share, .. } = aggregate(contributions);
    let slack = tolerance.abs().max(0.0);

    let mut debtors: Vec<Balance> = Vec::new();
    let mut lenders: Vec<Balance> = Vec::new();
    for c in contributions {
        let delta = equal_share - c.amount;
        if delta > slack {
            debtors.push(Balance {
                name: &c.name,
                remaining: delta,
            });
        } else if delta < -slack {
            lenders.push(Balance {
                name: &c.name,
                remaining: -delta,
            });
        }
    }

    let mut paybacks = Vec::with_capacity(debtors.len() + lenders.len());
    let (mut d, mut l) = (0usize, 0usize);
    while d < debtors.len() && l < lenders.len() {
        let debtor = &mut debtors[d];
        let lender = &mut lenders[l];
        let amount = debtor.remaining.min(lender.remaining);

        log::trace!(
            "settle: {} -> {} {} (debtor left {}, lender left {})",
            debtor.name,
            lender.name,
            amount,
            debtor.remaining - amount,
            lender.remaining - amount
        );
        paybacks.push(Payback {
            from: debtor.name.to_string(),
            to: lender.name.to_string(),
            amount,
            settled: false,
        });

        debtor.remaining -= amount;
        lender.remaining -= amount;
        if debtor.remaining <= slack {
            d += 1;
        }
        if lender.remaining <= slack {
            l += 1;
        }
    }

    if d < debtors.len() || l < lenders.len() {
        log::debug!(
            "settle: unmatched residue ({} debtors, {} lenders left)",
            debtors.len() - d,
            lenders.len() - l
        );
    }

    paybacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_of_empty_pool_is_zero() {
        assert_eq!(aggregate(&[]), Aggregate::default());
    }

    #[test]
    fn nan_amounts_produce_no_paybacks() {
        let contributions = vec![Contribution::new("A", f64::NAN), Contribution::new("B", 10.0)];
        assert!(settle(&contributions).is_empty());
    }

    #[test]
    fn partial_settlement_carries_remainder_to_next_lender() {
        let contributions = vec![
            Contribution::new("A", 0.0),
            Contribution::new("B", 15.0),
            Contribution::new("C", 15.0),
        ];
        let paybacks = settle(&contributions);
        assert_eq!(paybacks.len(), 2);
        assert_eq!((paybacks[0].from.as_str(), paybacks[0].to.as_str()), ("A", "B"));
        assert_eq!(paybacks[0].amount, 5.0);
        assert_eq!((paybacks[1].from.as_str(), paybacks[1].to.as_str()), ("A", "C"));
        assert_eq!(paybacks[1].amount, 5.0);
    }
}
