use itertools::Itertools;
use lazy_static::lazy_static;

use crate::unit::Ohm;

const POWERS: &[f64] = &[1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

lazy_static! {
    /// RSeries constant for the E3 standard series
    pub static ref E3: RSeries = RSeries::new(&[1.0, 2.2, 4.7]);
    /// RSeries constant for the E6 standard series
    pub static ref E6: RSeries = RSeries::extend(&E3, &[1.5, 3.3, 6.8]);
    /// RSeries constant for the E12 standard series
    pub static ref E12: RSeries = RSeries::extend(&E6, &[1.2, 1.8, 2.7, 3.9, 5.6, 8.2]);
    /// RSeries constant for the E24 standard series
    pub static ref E24: RSeries = RSeries::extend(
        &E12,
        &[1.1, 1.3, 1.6, 2.0, 2.4, 3.0, 3.6, 4.3, 5.1, 6.2, 7.5, 9.1]
    );
}

/// A standard series of preferred resistor values, spanning 1Ω to 9.1MΩ.
///
/// These make ready-made catalogs for the resistor search. The full series
/// are large, and the search cost grows with the fourth power of catalog
/// size, so [`RSeries::decade`] is usually the better feed for it.
#[derive(Debug)]
pub struct RSeries {
    values: Box<[f64]>,
}

impl RSeries {
    fn new(series: &[f64]) -> Self {
        RSeries {
            values: series
                .iter()
                .cartesian_product(POWERS.iter())
                .map(|(val, pow)| val * pow)
                .collect(),
        }
    }

    fn extend(base: &RSeries, add: &[f64]) -> Self {
        RSeries {
            values: base
                .values
                .iter()
                .copied()
                .chain(
                    add.iter()
                        .cartesian_product(POWERS.iter())
                        .map(|(val, pow)| val * pow),
                )
                .collect(),
        }
    }

    /// Every value in the series as a catalog of resistors.
    pub fn ohms(&self) -> Vec<Ohm> {
        self.values.iter().map(|v| Ohm::new(*v)).collect()
    }

    /// The values of one decade, those in `[10^exp, 10^(exp+1))`.
    pub fn decade(&self, exp: i32) -> Vec<Ohm> {
        let lo = 10f64.powi(exp);
        let hi = 10f64.powi(exp + 1);
        self.values
            .iter()
            .copied()
            .filter(|v| (lo..hi).contains(v))
            .map(Ohm::new)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
