use std::fmt;

/// Round to the 3 decimal places that all derived quantities are kept to.
pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// A voltage value in volts.
///
/// Values are rounded to 3 decimal places on construction unless created via
/// [`Volt::precise`]. A voltage derived against a requested target additionally
/// carries the absolute error from that target.
#[derive(Debug, Clone)]
pub struct Volt {
    value: f64,
    precise: bool,
    error: f64,
}

impl Volt {
    /// Creates a voltage rounded to 3 decimal places.
    pub fn new(value: f64) -> Self {
        Volt {
            value: round3(value),
            precise: false,
            error: 0.0,
        }
    }

    /// Creates a voltage holding `value` exactly as given.
    pub fn precise(value: f64) -> Self {
        Volt {
            value,
            precise: true,
            error: 0.0,
        }
    }

    /// Creates a voltage that records how far it landed from `expected`.
    pub fn with_expected(value: f64, expected: f64) -> Self {
        let value = round3(value);
        Volt {
            value,
            precise: false,
            error: round3((value - expected).abs()),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Absolute difference from the expected value, 0 when none was given.
    pub fn error(&self) -> f64 {
        self.error
    }
}

impl From<f64> for Volt {
    fn from(value: f64) -> Self {
        Volt::new(value)
    }
}

impl PartialEq for Volt {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.precise == other.precise
    }
}

impl fmt::Display for Volt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if self.error != 0.0 {
            write!(f, "±{}", self.error)?;
        }
        write!(f, "V")
    }
}

/// A resistance value in ohms.
///
/// Follows the same rounding and error rules as [`Volt`]. A resistance may
/// additionally be the series composition of two catalog parts, in which case
/// `parts` records the constituents and the value is their sum.
#[derive(Debug, Clone)]
pub struct Ohm {
    value: f64,
    precise: bool,
    error: f64,
    parts: Option<Vec<Ohm>>,
}

impl Ohm {
    /// Creates a resistance rounded to 3 decimal places.
    pub fn new(value: f64) -> Self {
        Ohm {
            value: round3(value),
            precise: false,
            error: 0.0,
            parts: None,
        }
    }

    /// Creates a resistance holding `value` exactly as given.
    pub fn precise(value: f64) -> Self {
        Ohm {
            value,
            precise: true,
            error: 0.0,
            parts: None,
        }
    }

    /// Creates a resistance that records how far it landed from `expected`.
    pub fn with_expected(value: f64, expected: f64) -> Self {
        let value = round3(value);
        Ohm {
            value,
            precise: false,
            error: round3((value - expected).abs()),
            parts: None,
        }
    }

    /// Composes two resistors wired in series.
    ///
    /// Rounding applies to the summed value, not to the parts beforehand, and
    /// the parts are kept in the order given.
    pub fn series(a: Ohm, b: Ohm) -> Self {
        Ohm {
            value: round3(a.value + b.value),
            precise: false,
            error: 0.0,
            parts: Some(vec![a, b]),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Absolute difference from the expected value, 0 when none was given.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Constituent parts when this value is a series composition.
    pub fn parts(&self) -> Option<&[Ohm]> {
        self.parts.as_deref()
    }
}

impl From<f64> for Ohm {
    fn from(value: f64) -> Self {
        Ohm::new(value)
    }
}

// Parts and error are presentation detail, not identity.
impl PartialEq for Ohm {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.precise == other.precise
    }
}

impl fmt::Display for Ohm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.parts {
            Some(parts) => {
                let joined = parts
                    .iter()
                    .map(|p| p.value.to_string())
                    .collect::<Vec<_>>()
                    .join("+");
                write!(f, "[{}]", joined)?;
            }
            None => write!(f, "{}", self.value)?,
        }
        if self.error != 0.0 {
            write!(f, "±{}", self.error)?;
        }
        write!(f, "Ω")
    }
}
