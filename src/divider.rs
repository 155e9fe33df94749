use std::fmt;

use log::debug;
use thiserror::Error;

use crate::search;
use crate::unit::{round3, Ohm, Volt};

/// Ways resolving a divider can fail.
///
/// Every variant is terminal for the construction attempt; there is nothing
/// transient to retry, the caller has to adjust their inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DividerError {
    /// The pattern of known values matches neither resolution strategy.
    #[error("expected a single missing quantity, or both resistors missing with v1 and v2 known")]
    UnsolvablePattern,
    /// Both resistors need deriving but no catalog was supplied.
    #[error("expected a list of resistors with which to calculate best options")]
    MissingCatalog,
    /// Deriving the named quantity would divide by zero.
    #[error("cannot derive {0}: the inputs make its denominator zero")]
    Degenerate(&'static str),
    /// The final quadruple does not satisfy the divider equation.
    #[error("invalid voltage divider equation with values v1={v1} r1={r1} r2={r2} v2={v2}")]
    Inconsistent { v1: Volt, r1: Ohm, r2: Ohm, v2: Volt },
}

fn solve_v1(v2: f64, r1: f64, r2: f64) -> Result<f64, DividerError> {
    if r2 == 0.0 {
        return Err(DividerError::Degenerate("v1"));
    }
    Ok(v2 * (r1 + r2) / r2)
}

fn solve_r1(v1: f64, r2: f64, v2: f64) -> Result<f64, DividerError> {
    if v2 == 0.0 {
        return Err(DividerError::Degenerate("r1"));
    }
    Ok(r2 * (v1 - v2) / v2)
}

fn solve_r2(v1: f64, r1: f64, v2: f64) -> Result<f64, DividerError> {
    if v1 - v2 == 0.0 {
        return Err(DividerError::Degenerate("r2"));
    }
    Ok(v2 * r1 / (v1 - v2))
}

fn solve_v2(v1: f64, r1: f64, r2: f64) -> Result<f64, DividerError> {
    if r1 + r2 == 0.0 {
        return Err(DividerError::Degenerate("v2"));
    }
    Ok(v1 * r2 / (r1 + r2))
}

/// A fully resolved, validated voltage divider.
///
/// Obtained from [`VoltageDivider::builder`]; resolution and the consistency
/// check happen inside [`DividerBuilder::build`], so any value of this type
/// satisfies `v2 = v1 * r2 / (r1 + r2)` to 3 decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageDivider {
    pub v1: Volt,
    pub r1: Ohm,
    pub r2: Ohm,
    pub v2: Volt,
}

impl VoltageDivider {
    /// Starts describing a divider by its known quantities.
    pub fn builder() -> DividerBuilder {
        DividerBuilder::default()
    }
}

impl fmt::Display for VoltageDivider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "v1={} r1={} r2={} v2={}",
            self.v1, self.r1, self.r2, self.v2
        )
    }
}

/// Builder collecting the known quantities of a divider.
///
/// Raw `f64` inputs are wrapped as non-precise values, so they round to
/// 3 decimal places just like computed results.
#[derive(Debug, Default)]
pub struct DividerBuilder {
    v1: Option<Volt>,
    r1: Option<Ohm>,
    r2: Option<Ohm>,
    v2: Option<Volt>,
    resistors: Option<Vec<Ohm>>,
}

impl DividerBuilder {
    /// Input voltage.
    pub fn v1(mut self, v1: impl Into<Volt>) -> Self {
        self.v1 = Some(v1.into());
        self
    }

    /// Top resistor, between the input and the tap.
    pub fn r1(mut self, r1: impl Into<Ohm>) -> Self {
        self.r1 = Some(r1.into());
        self
    }

    /// Bottom resistor, between the tap and ground.
    pub fn r2(mut self, r2: impl Into<Ohm>) -> Self {
        self.r2 = Some(r2.into());
        self
    }

    /// Output voltage at the tap.
    pub fn v2(mut self, v2: impl Into<Volt>) -> Self {
        self.v2 = Some(v2.into());
        self
    }

    /// Catalog of available resistor values to draw r1 and r2 from.
    ///
    /// Each value is treated as available in unlimited quantity, so the search
    /// may use the same value for both legs or twice within one leg.
    pub fn resistors<I>(mut self, resistors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ohm>,
    {
        self.resistors = Some(resistors.into_iter().map(Into::into).collect());
        self
    }

    /// Resolves the missing quantities and validates the result.
    ///
    /// Exactly one missing quantity is derived algebraically. When both
    /// resistors are missing and both voltages known, they are picked from the
    /// catalog instead, and the returned v2 is the realized voltage carrying
    /// its error from the requested one. Any other pattern of missing values
    /// fails before computing anything.
    pub fn build(self) -> Result<VoltageDivider, DividerError> {
        let DividerBuilder {
            v1,
            r1,
            r2,
            v2,
            resistors,
        } = self;

        let (v1, r1, r2, v2) = match (v1, r1, r2, v2) {
            (Some(v1), Some(r1), Some(r2), Some(v2)) => (v1, r1, r2, v2),
            (None, Some(r1), Some(r2), Some(v2)) => {
                debug!("deriving v1 from r1, r2, v2");
                let v1 = Volt::new(solve_v1(v2.value(), r1.value(), r2.value())?);
                (v1, r1, r2, v2)
            }
            (Some(v1), None, Some(r2), Some(v2)) => {
                debug!("deriving r1 from v1, r2, v2");
                let r1 = Ohm::new(solve_r1(v1.value(), r2.value(), v2.value())?);
                (v1, r1, r2, v2)
            }
            (Some(v1), Some(r1), None, Some(v2)) => {
                debug!("deriving r2 from v1, r1, v2");
                let r2 = Ohm::new(solve_r2(v1.value(), r1.value(), v2.value())?);
                (v1, r1, r2, v2)
            }
            (Some(v1), Some(r1), Some(r2), None) => {
                debug!("deriving v2 from v1, r1, r2");
                let v2 = Volt::new(solve_v2(v1.value(), r1.value(), r2.value())?);
                (v1, r1, r2, v2)
            }
            (Some(v1), None, None, Some(v2)) => {
                let catalog = resistors
                    .filter(|c| !c.is_empty())
                    .ok_or(DividerError::MissingCatalog)?;
                debug!(
                    "searching {} catalog resistors for r1 and r2",
                    catalog.len()
                );
                let (r1, r2) = search::best_pair(v1.value(), v2.value(), &catalog)
                    .ok_or(DividerError::Degenerate("v2"))?;
                // The realized output voltage replaces the requested one,
                // keeping the requested value around only as the error term.
                let v2 = Volt::with_expected(
                    solve_v2(v1.value(), r1.value(), r2.value())?,
                    v2.value(),
                );
                (v1, r1, r2, v2)
            }
            _ => return Err(DividerError::UnsolvablePattern),
        };

        // Runs on every path, including all-inputs-given, to reject
        // physically inconsistent quadruples.
        let derived = round3(v1.value() * r2.value() / (r1.value() + r2.value()));
        if derived != v2.value() {
            return Err(DividerError::Inconsistent { v1, r1, r2, v2 });
        }
        Ok(VoltageDivider { v1, r1, r2, v2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_v1() {
        let d = VoltageDivider::builder()
            .r1(2200.0)
            .r2(4300.0)
            .v2(3.3)
            .build()
            .unwrap();
        assert_eq!(d.v1, Volt::new(4.988));
    }

    #[test]
    fn derives_r1() {
        let d = VoltageDivider::builder()
            .v1(5.0)
            .r2(4300.0)
            .v2(3.3)
            .build()
            .unwrap();
        assert_eq!(d.r1, Ohm::new(2215.152));
    }

    #[test]
    fn derives_r2() {
        let d = VoltageDivider::builder()
            .v1(5.0)
            .r1(2200.0)
            .v2(3.3)
            .build()
            .unwrap();
        assert_eq!(d.r2, Ohm::new(4270.588));
    }

    #[test]
    fn derives_v2() {
        let d = VoltageDivider::builder()
            .v1(5.0)
            .r1(2200.0)
            .r2(4300.0)
            .build()
            .unwrap();
        assert_eq!(d.v2, Volt::new(3.308));
    }

    #[test]
    fn accepts_a_consistent_quadruple_unchanged() {
        let d = VoltageDivider::builder()
            .v1(5.0)
            .r1(2200.0)
            .r2(4300.0)
            .v2(3.308)
            .build()
            .unwrap();
        assert_eq!(d.v1, Volt::new(5.0));
        assert_eq!(d.r1, Ohm::new(2200.0));
        assert_eq!(d.r2, Ohm::new(4300.0));
        assert_eq!(d.v2, Volt::new(3.308));
    }

    #[test]
    fn rejects_an_inconsistent_quadruple() {
        let err = VoltageDivider::builder()
            .v1(5.0)
            .r1(2200.0)
            .r2(4300.0)
            .v2(3.4)
            .build()
            .unwrap_err();
        assert!(matches!(err, DividerError::Inconsistent { .. }));
    }

    #[test]
    fn rederiving_a_quantity_is_idempotent() {
        let first = VoltageDivider::builder()
            .v1(5.0)
            .r1(2200.0)
            .r2(4300.0)
            .build()
            .unwrap();
        let again = VoltageDivider::builder()
            .v1(first.v1.value())
            .r1(first.r1.value())
            .r2(first.r2.value())
            .build()
            .unwrap();
        assert_eq!(first.v2, again.v2);
    }

    #[test]
    fn rejects_underspecified_patterns() {
        assert_eq!(
            VoltageDivider::builder().v1(5.0).build().unwrap_err(),
            DividerError::UnsolvablePattern
        );
        // Two missing, but not the r1/r2 pair.
        assert_eq!(
            VoltageDivider::builder()
                .r1(2200.0)
                .r2(4300.0)
                .build()
                .unwrap_err(),
            DividerError::UnsolvablePattern
        );
        assert_eq!(
            VoltageDivider::builder()
                .v1(5.0)
                .r2(4300.0)
                .build()
                .unwrap_err(),
            DividerError::UnsolvablePattern
        );
    }

    #[test]
    fn requires_a_catalog_when_both_resistors_are_missing() {
        assert_eq!(
            VoltageDivider::builder().v1(5.0).v2(3.3).build().unwrap_err(),
            DividerError::MissingCatalog
        );
        let empty: Vec<f64> = Vec::new();
        assert_eq!(
            VoltageDivider::builder()
                .v1(5.0)
                .v2(3.3)
                .resistors(empty)
                .build()
                .unwrap_err(),
            DividerError::MissingCatalog
        );
    }

    #[test]
    fn zero_denominators_are_degenerate_not_infinite() {
        assert_eq!(
            VoltageDivider::builder()
                .r1(2200.0)
                .r2(0.0)
                .v2(3.3)
                .build()
                .unwrap_err(),
            DividerError::Degenerate("v1")
        );
        assert_eq!(
            VoltageDivider::builder()
                .v1(5.0)
                .r2(4300.0)
                .v2(0.0)
                .build()
                .unwrap_err(),
            DividerError::Degenerate("r1")
        );
        assert_eq!(
            VoltageDivider::builder()
                .v1(3.3)
                .r1(2200.0)
                .v2(3.3)
                .build()
                .unwrap_err(),
            DividerError::Degenerate("r2")
        );
        assert_eq!(
            VoltageDivider::builder()
                .v1(5.0)
                .r1(0.0)
                .r2(0.0)
                .build()
                .unwrap_err(),
            DividerError::Degenerate("v2")
        );
    }

    #[test]
    fn displays_the_full_quadruple() {
        let d = VoltageDivider::builder()
            .v1(5.0)
            .r1(2200.0)
            .r2(4300.0)
            .build()
            .unwrap();
        assert_eq!(d.to_string(), "v1=5V r1=2200Ω r2=4300Ω v2=3.308V");
    }
}
