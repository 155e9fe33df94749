//! A voltage divider calculator for circuit design.
//!
//! Given any three of the input voltage, output voltage and the two divider
//! resistors, it derives the fourth from the ideal divider equation
//! `v2 = v1 * r2 / (r1 + r2)`. Given only the two voltages plus a catalog of
//! available resistor values, it instead searches the catalog, including
//! two-part series combinations, for the pair that lands closest to the
//! requested output.
//!
//! # Example
//! Picking parts for a 5V to 3.3V divider from a drawer of four values:
//! ```rust
//! use voltage_divider::VoltageDivider;
//!
//! let divider = VoltageDivider::builder()
//!     .v1(5.0)
//!     .v2(3.3)
//!     .resistors([1000.0, 2200.0, 3300.0, 4700.0])
//!     .build()
//!     .expect("no resolvable divider for these inputs");
//!
//! assert_eq!(
//!     divider.to_string(),
//!     "v1=5V r1=2200Ω r2=[1000+3300]Ω v2=3.308±0.008V",
//! );
//! ```
//! The bottom leg came out as 1000Ω and 3300Ω in series, and the realized
//! output of 3.308V carries its 0.008V error from the requested 3.3V.
//!
//! All derived values are rounded to 3 decimal places; the standard E-series
//! are provided as ready-made catalogs:
//! ```rust
//! use voltage_divider::{VoltageDivider, E12};
//!
//! let divider = VoltageDivider::builder()
//!     .v1(12.0)
//!     .v2(9.0)
//!     .resistors(E12.decade(3))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(divider.v2.error(), 0.0);
//! ```

mod divider;
mod search;
mod series;
mod unit;

#[cfg(feature = "schematic")]
pub mod schematic;

pub use divider::{DividerBuilder, DividerError, VoltageDivider};
pub use series::{RSeries, E12, E24, E3, E6};
pub use unit::{Ohm, Volt};
