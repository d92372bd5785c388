//! Presentation formatting for percentages.
//!
//! Computation keeps full precision; rounding happens only here.

/// How percentage columns are rendered in CSV output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PercentFormat {
    /// Full-precision number, empty when undefined
    #[default]
    Raw,
    /// Nearest integer with a trailing `%`, empty when undefined
    Rounded,
}

impl PercentFormat {
    pub fn from_rounding(round: bool) -> Self {
        if round {
            PercentFormat::Rounded
        } else {
            PercentFormat::Raw
        }
    }

    pub fn cell(&self, value: Option<f64>) -> String {
        match self {
            PercentFormat::Raw => value.map(|v| v.to_string()).unwrap_or_default(),
            PercentFormat::Rounded => format_percent(value),
        }
    }
}

/// Round to the nearest integer (half away from zero) and append `%`
///
/// Undefined values render as an empty string.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", v.round() as i64),
        None => String::new(),
    }
}
