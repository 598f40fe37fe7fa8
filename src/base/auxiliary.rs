use super::ConfigurationError;
use crate::Error;
use russell_lab::Vector;

/// Holds a raw parameter value before numeric coercion
///
/// Values typically come from text files or loosely typed inputs; see [clean_float].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawValue<'a> {
    Number(f64),
    Text(&'a str),
    Absent,
}

impl<'a> From<f64> for RawValue<'a> {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl<'a> From<Option<f64>> for RawValue<'a> {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => RawValue::Number(v),
            None => RawValue::Absent,
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        RawValue::Text(value)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(value: &'a String) -> Self {
        RawValue::Text(value.as_str())
    }
}

/// Coerces a raw value into a number
///
/// Empty, non-numeric, and non-finite inputs become `None` instead of failing.
pub fn clean_float(raw: RawValue) -> Option<f64> {
    let value = match raw {
        RawValue::Number(v) => v,
        RawValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => return None,
        },
        RawValue::Absent => return None,
    };
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Returns `n` points evenly spaced on a log10 scale from `10^start` to `10^stop`
pub fn logspace(start: f64, stop: f64, n: usize) -> Result<Vector, Error> {
    let mut res = Vector::linspace(start, stop, n).map_err(|_| ConfigurationError::InvalidSetting {
        name: "n_points",
        value: n as f64,
    })?;
    res.map(|x| f64::powf(10.0, x));
    Ok(res)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
