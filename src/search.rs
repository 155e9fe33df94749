use itertools::Itertools;
use log::{debug, trace};

use crate::unit::Ohm;

/// A possible value for one leg: a single catalog resistor, or an ordered
/// pair of catalog resistors in series.
#[derive(Debug, Clone, Copy)]
enum Candidate<'a> {
    Single(&'a Ohm),
    Series(&'a Ohm, &'a Ohm),
}

impl Candidate<'_> {
    fn value(&self) -> f64 {
        match self {
            Candidate::Single(r) => r.value(),
            Candidate::Series(a, b) => a.value() + b.value(),
        }
    }

    fn to_ohm(self) -> Ohm {
        match self {
            Candidate::Single(r) => Ohm::new(r.value()),
            Candidate::Series(a, b) => Ohm::series(a.clone(), b.clone()),
        }
    }
}

/// Picks the (r1, r2) pair whose divider output lands closest to `goal_v2`.
///
/// Candidates per leg are every catalog element alone plus every ordered pair
/// of elements in series, and the two legs draw from that set independently.
/// Combinations are scanned in a fixed block order, singles before pairs with
/// the top leg leading, and the first combination reaching the lowest error
/// wins. That keeps the selection deterministic even when duplicate or
/// equal-summing entries tie on error.
///
/// Returns `None` only when no combination produces a finite output voltage,
/// which requires every candidate pairing to sum to zero resistance.
pub(crate) fn best_pair(v1: f64, goal_v2: f64, catalog: &[Ohm]) -> Option<(Ohm, Ohm)> {
    let singles: Vec<Candidate> = catalog.iter().map(Candidate::Single).collect();
    let pairs: Vec<Candidate> = catalog
        .iter()
        .cartesian_product(catalog)
        .map(|(a, b)| Candidate::Series(a, b))
        .collect();

    let per_leg = singles.len() + pairs.len();
    debug!(
        "{} candidates per leg, {} combinations to score",
        per_leg,
        per_leg * per_leg
    );

    let blocks: [(&[Candidate], &[Candidate]); 4] = [
        (&singles, &singles),
        (&pairs, &singles),
        (&singles, &pairs),
        (&pairs, &pairs),
    ];

    let mut best: Option<(f64, Candidate, Candidate)> = None;
    for (tops, bottoms) in blocks {
        for (top, bottom) in tops.iter().cartesian_product(bottoms) {
            let v2 = v1 * bottom.value() / (top.value() + bottom.value());
            let score = (goal_v2 - v2).abs();
            // Strict less-than keeps the earliest of any tied combinations;
            // a NaN score (zero total resistance) never wins.
            if !score.is_nan() && best.map_or(true, |(b, _, _)| score < b) {
                trace!(
                    "new best: top={} bottom={} err={}",
                    top.value(),
                    bottom.value(),
                    score
                );
                best = Some((score, *top, *bottom));
            }
        }
    }

    best.map(|(_, top, bottom)| (top.to_ohm(), bottom.to_ohm()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(values: &[f64]) -> Vec<Ohm> {
        values.iter().map(|v| Ohm::new(*v)).collect()
    }

    #[test]
    fn picks_the_closest_pair_including_series_legs() {
        let catalog = catalog(&[1000.0, 2200.0, 3300.0, 4700.0]);
        let (r1, r2) = best_pair(5.0, 3.3, &catalog).unwrap();
        assert_eq!(r1, Ohm::new(2200.0));
        assert!(r1.parts().is_none());
        assert_eq!(r2, Ohm::new(4300.0));
        let parts = r2.parts().unwrap();
        assert_eq!(parts[0], Ohm::new(1000.0));
        assert_eq!(parts[1], Ohm::new(3300.0));
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = catalog(&[4700.0, 1000.0, 2200.0, 3300.0, 1000.0]);
        let first = best_pair(5.0, 3.3, &catalog).unwrap();
        let second = best_pair(5.0, 3.3, &catalog).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.0.parts().map(<[Ohm]>::to_vec),
            second.0.parts().map(<[Ohm]>::to_vec)
        );
        assert_eq!(
            first.1.parts().map(<[Ohm]>::to_vec),
            second.1.parts().map(<[Ohm]>::to_vec)
        );
    }

    #[test]
    fn single_entry_catalog_only_reaches_the_entry_and_its_double() {
        let (r1, r2) = best_pair(5.0, 3.3, &catalog(&[1000.0])).unwrap();
        // 1000/2000 gives 3.333V, the closest of the four combinations.
        assert_eq!(r1, Ohm::new(1000.0));
        assert!(r1.parts().is_none());
        assert_eq!(r2, Ohm::new(2000.0));
        let parts = r2.parts().unwrap();
        assert_eq!(parts, [Ohm::new(1000.0), Ohm::new(1000.0)]);
    }

    #[test]
    fn ties_resolve_to_the_earliest_combination() {
        // Both (500, 500+500) and (750, 750+750) hit 2V exactly from 3V; the
        // 500 top comes first in the singles-top, pairs-bottom block.
        let (r1, r2) = best_pair(3.0, 2.0, &catalog(&[500.0, 750.0])).unwrap();
        assert_eq!(r1, Ohm::new(500.0));
        assert!(r1.parts().is_none());
        let parts = r2.parts().unwrap();
        assert_eq!(parts, [Ohm::new(500.0), Ohm::new(500.0)]);
    }

    #[test]
    fn exact_single_pair_beats_equal_series_decompositions() {
        // (1000, 2000) scores zero inside the singles-only block, so no
        // series candidate can displace it.
        let (r1, r2) = best_pair(3.0, 2.0, &catalog(&[1000.0, 2000.0])).unwrap();
        assert_eq!(r1, Ohm::new(1000.0));
        assert!(r1.parts().is_none());
        assert_eq!(r2, Ohm::new(2000.0));
        assert!(r2.parts().is_none());
    }

    #[test]
    fn all_zero_catalog_has_no_finite_combination() {
        assert!(best_pair(5.0, 3.3, &catalog(&[0.0, 0.0])).is_none());
    }
}
