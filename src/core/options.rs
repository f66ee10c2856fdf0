//! Option normalization
//!
//! Turns the raw strings given to `--kpoint`, `--mode`, `--length` and
//! `--direction` into typed values, rejecting malformed syntax.

use crate::{
    core::query::CalcKind,
    error::{AnalyzerError, Result},
};
use std::fmt;
use tracing::{debug, instrument};

/// Options that take a scalar or `begin:end` index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOption {
    Kpoint,
    Mode,
}

impl IndexOption {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kpoint => "kpoint",
            Self::Mode => "mode",
        }
    }
}

impl fmt::Display for IndexOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single index or an inclusive index range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarOrRange {
    pub begin: i64,
    pub end: i64,
}

impl ScalarOrRange {
    /// Sentinel understood by the engine as "every available index".
    ///
    /// `end < begin` never describes a real range, so the engine treats it as
    /// no restriction. It must be emitted exactly as `1 0`.
    pub const ALL: Self = Self { begin: 1, end: 0 };

    pub const fn single(value: i64) -> Self {
        Self {
            begin: value,
            end: value,
        }
    }

    /// Parse `n` or `a:b`. No ordering check is made between `a` and `b`.
    #[instrument]
    pub fn parse(raw: &str, option: IndexOption, calc: CalcKind) -> Result<Self> {
        let parts: Vec<&str> = raw.split(':').collect();
        let parsed = match parts.as_slice() {
            [value] => Self::single(parse_int(value, option)?),
            [begin, end] => Self {
                begin: parse_int(begin, option)?,
                end: parse_int(end, option)?,
            },
            _ => return Err(AnalyzerError::invalid_range(option.as_str(), calc.as_str(), raw)),
        };

        debug!("--{} {} -> {:?}", option, raw, parsed);
        Ok(parsed)
    }

    /// Parse an optional value, falling back to [`ScalarOrRange::ALL`]
    pub fn parse_or_all(raw: Option<&str>, option: IndexOption, calc: CalcKind) -> Result<Self> {
        raw.map_or(Ok(Self::ALL), |raw| Self::parse(raw, option, calc))
    }
}

/// Parse a value that must name exactly one index
pub fn parse_single_index(raw: &str, option: IndexOption, calc: CalcKind) -> Result<i64> {
    if raw.contains(':') {
        return Err(AnalyzerError::invalid_single_value(
            option.as_str(),
            calc.as_str(),
            raw,
        ));
    }
    parse_int(raw, option)
}

fn parse_int(token: &str, option: IndexOption) -> Result<i64> {
    token
        .trim()
        .parse()
        .map_err(|_| AnalyzerError::invalid_number(option.as_str(), token))
}

/// System-size sweep for the cumulative thermal conductivity, in nm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthSweep {
    pub max_length: f64,
    pub step: f64,
}

impl Default for LengthSweep {
    fn default() -> Self {
        Self {
            max_length: 1000.0,
            step: 1.0,
        }
    }
}

impl LengthSweep {
    /// Parse `Lmax:dL`
    pub fn parse(raw: &str) -> Result<Self> {
        let Some((max_length, step)) = raw.split_once(':').filter(|(_, step)| !step.contains(':'))
        else {
            return Err(AnalyzerError::InvalidLengthSyntax {
                value: raw.to_string(),
            });
        };

        Ok(Self {
            max_length: parse_float(max_length)?,
            step: parse_float(step)?,
        })
    }

    pub fn parse_or_default(raw: Option<&str>) -> Result<Self> {
        raw.map_or_else(|| Ok(Self::default()), Self::parse)
    }
}

fn parse_float(token: &str) -> Result<f64> {
    token
        .trim()
        .parse()
        .map_err(|_| AnalyzerError::invalid_number("length", token))
}

/// Axes (x, y, z) along which mean free paths are compared with the system size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionMask(pub [bool; 3]);

impl DirectionMask {
    const MAX_TOKENS: usize = 3;

    /// Parse up to three `:`-separated axis numbers from `{1,2,3}`.
    /// Repeated axes are accepted.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || AnalyzerError::InvalidDirectionSyntax {
            value: raw.to_string(),
        };

        let tokens: Vec<&str> = raw.split(':').collect();
        if tokens.len() > Self::MAX_TOKENS {
            return Err(invalid());
        }

        let mut flags = [false; 3];
        for token in tokens {
            let axis: usize = token.trim().parse().map_err(|_| invalid())?;
            if !(1..=3).contains(&axis) {
                return Err(invalid());
            }
            flags[axis - 1] = true;
        }

        Ok(Self(flags))
    }

    /// Absent means no axis is selected, not all axes
    pub fn parse_or_none(raw: Option<&str>) -> Result<Self> {
        raw.map_or_else(|| Ok(Self::default()), Self::parse)
    }

    pub const fn flags(&self) -> [bool; 3] {
        self.0
    }
}
