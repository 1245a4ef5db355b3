//! Display and numeric settings shared by the solver and the classifier.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunables for rendering results and for the iterative square root.
///
/// Every field has a serde default so a partial JSON document is accepted:
///
/// ```
/// use polycalc::Settings;
///
/// let settings = Settings::from_json(r#"{ "real_precision": 3 }"#).unwrap();
/// assert_eq!(settings.real_precision, 3);
/// assert_eq!(settings.linear_decimal_places, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// A linear root also gets a decimal rendering when it terminates within this many digits.
    #[serde(default = "default_linear_decimal_places")]
    pub linear_decimal_places: u32,
    /// Digits after the point when printing irrational roots.
    #[serde(default = "default_real_precision")]
    pub real_precision: usize,
    /// Upper bound on Newton steps taken by [`crate::numeric::square_root_with`].
    #[serde(default = "default_sqrt_max_iterations")]
    pub sqrt_max_iterations: usize,
}

impl Settings {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            linear_decimal_places: default_linear_decimal_places(),
            real_precision: default_real_precision(),
            sqrt_max_iterations: default_sqrt_max_iterations(),
        }
    }
}

fn default_linear_decimal_places() -> u32 {
    2
}

fn default_real_precision() -> usize {
    6
}

fn default_sqrt_max_iterations() -> usize {
    64
}
