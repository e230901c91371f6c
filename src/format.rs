// src/format.rs
//! Rendering multivectors as text.
//!
//! Output looks like `1.00 + 2.00*e1^e2 - 0.50*no^ni`: terms are written in
//! coordinate order, joined by configurable separators, each coefficient
//! printed with a printf-style float format. The process-wide default
//! configuration is used by `Display` and can be changed with
//! [`set_string_format`].

use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::basis::{bitmap_of, blade_name, BASIS_ELEMENT_SIGN_BY_INDEX, GROUP_START};
use crate::error::{CgaError, Result};
use crate::multivector::Multivector;
use crate::types::Scalar;

pub const DEFAULT_FP: &str = "%2.2f";
pub const DEFAULT_START: &str = "";
pub const DEFAULT_END: &str = "";
pub const DEFAULT_MUL: &str = "*";
pub const DEFAULT_WEDGE: &str = "^";
pub const DEFAULT_PLUS: &str = " + ";
pub const DEFAULT_MINUS: &str = " - ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FloatStyle {
    Fixed,
    Exponent,
    ExponentUpper,
}

/// A parsed `%[width][.precision](f|e|E)` float format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FloatFormat {
    width: usize,
    precision: usize,
    style: FloatStyle,
}

impl FloatFormat {
    /// `%{width}.{precision}f`
    pub const fn fixed(width: usize, precision: usize) -> Self {
        Self { width, precision, style: FloatStyle::Fixed }
    }

    /// `%{width}.{precision}e`
    pub const fn exponent(width: usize, precision: usize) -> Self {
        Self { width, precision, style: FloatStyle::Exponent }
    }

    /// Format `x`, right-aligned to the field width.
    pub fn format(&self, x: Scalar) -> String {
        let p = self.precision;
        let s = match self.style {
            FloatStyle::Fixed => format!("{x:.p$}"),
            FloatStyle::Exponent => c_exponent(&format!("{x:.p$e}"), 'e'),
            FloatStyle::ExponentUpper => c_exponent(&format!("{x:.p$e}"), 'E'),
        };
        format!("{s:>width$}", width = self.width)
    }
}

/// Rewrite Rust's `1.5e3` as C's `1.5e+03`.
fn c_exponent(s: &str, marker: char) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            format!("{mantissa}{marker}{exp:+03}")
        }
        // inf and NaN carry no exponent
        None => s.to_string(),
    }
}

impl FromStr for FloatFormat {
    type Err = CgaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CgaError::InvalidFormat(s.to_string());
        let body = s.strip_prefix('%').ok_or_else(invalid)?;
        let (spec, style) = match body.chars().last() {
            Some('f') => (&body[..body.len() - 1], FloatStyle::Fixed),
            Some('e') => (&body[..body.len() - 1], FloatStyle::Exponent),
            Some('E') => (&body[..body.len() - 1], FloatStyle::ExponentUpper),
            _ => return Err(invalid()),
        };
        let (width, precision) = match spec.split_once('.') {
            Some((w, p)) => (w, Some(p)),
            None => (spec, None),
        };
        let number = |t: &str| -> Result<usize> {
            if t.is_empty() {
                Ok(0)
            } else if t.bytes().all(|b| b.is_ascii_digit()) {
                t.parse().map_err(|_| invalid())
            } else {
                Err(invalid())
            }
        };
        Ok(Self {
            width: number(width)?,
            precision: match precision {
                Some(p) => number(p)?,
                None => 6,
            },
            style,
        })
    }
}

/// Which field of a [`StringFormat`] to change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatKey {
    Fp,
    Start,
    End,
    Mul,
    Wedge,
    Plus,
    Minus,
}

impl FromStr for FormatKey {
    type Err = CgaError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "fp" => Self::Fp,
            "start" => Self::Start,
            "end" => Self::End,
            "mul" => Self::Mul,
            "wedge" => Self::Wedge,
            "plus" => Self::Plus,
            "minus" => Self::Minus,
            _ => return Err(CgaError::InvalidFormatKey(s.to_string())),
        })
    }
}

/// Separators and number format used when rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringFormat {
    /// Float format, e.g. `%2.2f`.
    pub fp: String,
    /// Written before the first term.
    pub start: String,
    /// Written after the last term.
    pub end: String,
    /// Between coefficient and blade.
    pub mul: String,
    /// Between basis vectors of a blade.
    pub wedge: String,
    /// Before positive terms other than the first.
    pub plus: String,
    /// Before negative terms, including the first.
    pub minus: String,
}

impl Default for StringFormat {
    fn default() -> Self {
        Self {
            fp: DEFAULT_FP.to_string(),
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
            mul: DEFAULT_MUL.to_string(),
            wedge: DEFAULT_WEDGE.to_string(),
            plus: DEFAULT_PLUS.to_string(),
            minus: DEFAULT_MINUS.to_string(),
        }
    }
}

impl StringFormat {
    /// Set one field; `None` restores its default. A float format is
    /// validated before it is stored.
    pub fn set(&mut self, key: FormatKey, value: Option<&str>) -> Result<()> {
        let defaults = Self::default();
        let (field, default) = match key {
            FormatKey::Fp => {
                if let Some(fp) = value {
                    fp.parse::<FloatFormat>()?;
                }
                (&mut self.fp, defaults.fp)
            }
            FormatKey::Start => (&mut self.start, defaults.start),
            FormatKey::End => (&mut self.end, defaults.end),
            FormatKey::Mul => (&mut self.mul, defaults.mul),
            FormatKey::Wedge => (&mut self.wedge, defaults.wedge),
            FormatKey::Plus => (&mut self.plus, defaults.plus),
            FormatKey::Minus => (&mut self.minus, defaults.minus),
        };
        *field = value.map_or(default, str::to_string);
        Ok(())
    }

    /// Render `mv` with this configuration.
    pub fn format(&self, mv: &Multivector) -> Result<String> {
        let fp = self.fp.parse()?;
        Ok(self.render(mv, &fp))
    }

    /// Render `mv` with this configuration and an explicit float format.
    pub fn render(&self, mv: &Multivector, fp: &FloatFormat) -> String {
        let mut out = String::from(&self.start);
        let mut count = 0;
        for (g, coords) in mv.present_groups() {
            for (i, &c) in coords.iter().enumerate() {
                let coord = BASIS_ELEMENT_SIGN_BY_INDEX[GROUP_START[g] + i] * c;
                let magnitude = fp.format(coord.abs());
                if magnitude.trim().parse::<f64>().map_or(false, |v| v == 0.0) {
                    continue;
                }
                if coord < 0.0 {
                    out.push_str(&self.minus);
                } else if count > 0 {
                    out.push_str(&self.plus);
                }
                out.push_str(&magnitude);
                if g != 0 {
                    out.push_str(&self.mul);
                    out.push_str(&blade_name(bitmap_of(g, i), &self.wedge));
                }
                count += 1;
            }
        }
        if count == 0 {
            out.push('0');
        }
        out.push_str(&self.end);
        out
    }
}

static STRING_FORMAT: Lazy<RwLock<StringFormat>> =
    Lazy::new(|| RwLock::new(StringFormat::default()));

/// Change one field of the process-wide format; `None` restores its default.
///
/// `what` is one of `fp`, `start`, `end`, `mul`, `wedge`, `plus`, `minus`.
///
/// Concurrent calls are serialized by a lock, but the order in which they
/// land is unspecified. For deterministic output from several threads,
/// render with an explicit [`StringFormat`] instead.
pub fn set_string_format(what: &str, value: Option<&str>) -> Result<()> {
    let key = what.parse()?;
    STRING_FORMAT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set(key, value)
}

/// A copy of the process-wide format.
pub fn string_format() -> StringFormat {
    STRING_FORMAT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Render `mv` with the process-wide format, optionally overriding the float
/// format.
pub fn format(mv: &Multivector, fp: Option<&str>) -> Result<String> {
    let config = string_format();
    let fp: FloatFormat = fp.unwrap_or(config.fp.as_str()).parse()?;
    Ok(config.render(mv, &fp))
}

impl Multivector {
    /// Render with an explicit float format such as `%1.5e`.
    pub fn to_string_fp(&self, fp: &str) -> Result<String> {
        format(self, Some(fp))
    }

    /// Render with `%f`.
    pub fn to_string_f(&self) -> String {
        string_format().render(self, &FloatFormat::fixed(0, 6))
    }

    /// Render with `%e`.
    pub fn to_string_e(&self) -> String {
        string_format().render(self, &FloatFormat::exponent(0, 6))
    }

    /// Render with `%2.20e`, enough digits to parse back losslessly.
    pub fn to_string_e20(&self) -> String {
        string_format().render(self, &FloatFormat::exponent(2, 20))
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = format(self, None).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Multivector {
        let mut mv = Multivector::from_scalar(1.0);
        mv.set_e1(-2.0);
        mv.set_no_ni(0.5);
        mv.set_e1_e2_ni(0.001);
        mv
    }

    #[test]
    fn float_formats() {
        let f: FloatFormat = "%2.2f".parse().unwrap();
        assert_eq!(f.format(3.14159), "3.14");
        assert_eq!("%6.1f".parse::<FloatFormat>().unwrap().format(2.0), "   2.0");
        assert_eq!("%f".parse::<FloatFormat>().unwrap().format(0.5), "0.500000");
        assert_eq!("%e".parse::<FloatFormat>().unwrap().format(1500.0), "1.500000e+03");
        assert_eq!("%.2E".parse::<FloatFormat>().unwrap().format(0.015), "1.50E-02");
        for bad in ["2.2f", "%2.2d", "%x.2f", "%", ""] {
            assert!(bad.parse::<FloatFormat>().is_err(), "{bad}");
        }
    }

    #[test]
    fn default_rendering() {
        let cfg = StringFormat::default();
        assert_eq!(cfg.format(&sample()).unwrap(), "1.00 - 2.00*e1 + 0.50*no^ni");
        assert_eq!(cfg.format(&Multivector::zero()).unwrap(), "0");

        let mut neg = Multivector::zero();
        neg.set_e2(-1.0);
        assert_eq!(cfg.format(&neg).unwrap(), " - 1.00*e2");
    }

    #[test]
    fn custom_separators() {
        let mut cfg = StringFormat::default();
        cfg.set(FormatKey::Start, Some("[")).unwrap();
        cfg.set(FormatKey::End, Some("]")).unwrap();
        cfg.set(FormatKey::Wedge, Some("")).unwrap();
        cfg.set(FormatKey::Fp, Some("%1.3f")).unwrap();
        assert_eq!(
            cfg.format(&sample()).unwrap(),
            "[1.000 - 2.000*e1 + 0.500*noni + 0.001*e1e2ni]"
        );
        cfg.set(FormatKey::Wedge, None).unwrap();
        assert_eq!(cfg.wedge, "^");
        assert!(cfg.set(FormatKey::Fp, Some("%q")).is_err());
    }

    #[test]
    fn keys() {
        assert_eq!("minus".parse::<FormatKey>().unwrap(), FormatKey::Minus);
        assert_eq!(
            "colour".parse::<FormatKey>(),
            Err(CgaError::InvalidFormatKey("colour".to_string()))
        );
        assert!(set_string_format("colour", Some("red")).is_err());
    }

    #[test]
    fn explicit_float_format() {
        let mut mv = Multivector::zero();
        mv.set_e3(0.3);
        assert_eq!(mv.to_string_fp("%1.1f").unwrap(), "0.3*e3");
        assert_eq!(mv.to_string_e(), "3.000000e-01*e3");
        assert!(mv.to_string_fp("%z").is_err());
    }
}
