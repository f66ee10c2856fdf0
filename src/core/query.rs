//! Mode dispatch and engine command compilation
//!
//! Picks one calculation mode from `--calc` and the options present, applies
//! the mode's defaults and emits the positional arguments in the order the
//! `analyze_phonons` engine expects. Nothing here performs I/O; warnings are
//! pushed into a caller-owned sink as they are raised.

use crate::{
    core::options::{
        DirectionMask, IndexOption, LengthSweep, ScalarOrRange, parse_single_index,
    },
    error::{AnalyzerError, Result},
};
use serde::Serialize;
use std::{ffi::OsString, fmt, path::PathBuf, str::FromStr};
use tracing::{debug, instrument};

/// Value of `--calc`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcKind {
    Tau,
    Kappa,
    Cumulative,
}

impl CalcKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tau => "tau",
            Self::Kappa => "kappa",
            Self::Cumulative => "cumulative",
        }
    }
}

impl FromStr for CalcKind {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tau" => Ok(Self::Tau),
            "kappa" => Ok(Self::Kappa),
            "cumulative" => Ok(Self::Cumulative),
            other => Err(AnalyzerError::invalid_calc(Some(other))),
        }
    }
}

impl fmt::Display for CalcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw query options as typed on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub result_file: PathBuf,
    pub calc: Option<String>,
    pub temp: Option<String>,
    pub kpoint: Option<String>,
    pub mode: Option<String>,
    pub average: bool,
    pub length: Option<String>,
    pub direction: Option<String>,
}

/// Non-fatal diagnostics raised while compiling a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryWarning {
    KpointDiscarded,
}

impl fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KpointDiscarded => f.write_str("# Warning: --kpoint option is discarded"),
        }
    }
}

/// The engine operation selected for a query
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationMode {
    /// Temperature dependence of one mode at one k-point
    TauTemperatureSweep { kpoint: i64, mode: i64 },
    /// Lifetimes and related quantities at one temperature
    TauAtTemperature {
        kpoint: ScalarOrRange,
        mode: ScalarOrRange,
        temp: String,
    },
    /// Thermal conductivity
    Kappa { mode: ScalarOrRange },
    /// Cumulative thermal conductivity over a system-size sweep
    Cumulative {
        mode: ScalarOrRange,
        length: LengthSweep,
        temp: String,
        direction: DirectionMask,
    },
}

impl CalculationMode {
    /// Mode token passed to the engine as its second argument
    pub const fn token(&self) -> &'static str {
        match self {
            Self::TauTemperatureSweep { .. } => "tau_temp",
            Self::TauAtTemperature { .. } => "tau",
            Self::Kappa { .. } => "kappa",
            Self::Cumulative { .. } => "cumulative",
        }
    }

    /// Mode-specific arguments following the averaging flag.
    /// The order is fixed by the engine.
    pub fn positional_args(&self) -> Vec<String> {
        match self {
            Self::TauTemperatureSweep { kpoint, mode } => {
                vec![kpoint.to_string(), mode.to_string()]
            }
            Self::TauAtTemperature { kpoint, mode, temp } => vec![
                kpoint.begin.to_string(),
                kpoint.end.to_string(),
                mode.begin.to_string(),
                mode.end.to_string(),
                temp.clone(),
            ],
            Self::Kappa { mode } => vec![mode.begin.to_string(), mode.end.to_string()],
            Self::Cumulative {
                mode,
                length,
                temp,
                direction,
            } => {
                let mut args = vec![
                    mode.begin.to_string(),
                    mode.end.to_string(),
                    format_float(length.max_length),
                    format_float(length.step),
                    temp.clone(),
                ];
                args.extend(direction.flags().map(|on| flag(on).to_string()));
                args
            }
        }
    }
}

/// Engine invocation, minus the engine path itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineCommand {
    pub result_file: PathBuf,
    pub mode_token: String,
    pub average: bool,
    pub positional_args: Vec<String>,
}

impl EngineCommand {
    pub fn new(result_file: PathBuf, mode: &CalculationMode, average: bool) -> Self {
        Self {
            result_file,
            mode_token: mode.token().to_string(),
            average,
            positional_args: mode.positional_args(),
        }
    }

    /// Averaging flag as the engine reads it
    pub const fn average_flag(&self) -> &'static str {
        flag(self.average)
    }

    /// Full argument vector: result file, mode token, averaging flag, then
    /// the mode-specific arguments
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.positional_args.len() + 3);
        argv.push(self.result_file.clone().into_os_string());
        argv.push(OsString::from(&self.mode_token));
        argv.push(OsString::from(self.average_flag()));
        argv.extend(self.positional_args.iter().map(OsString::from));
        argv
    }
}

const fn flag(on: bool) -> &'static str {
    if on { "1" } else { "0" }
}

/// Render a float with a fractional part, so `1000` becomes `1000.0`.
///
/// Very large or small values use Rust's exponent form (`1e16`, `1e-5`),
/// with no `+` sign or zero padding. The engine's number parsing accepts
/// this as well as the padded form.
fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Select the calculation mode for `options`.
///
/// Checks run in a fixed order per mode so the first diagnostic a user sees
/// is stable.
#[instrument(skip(warnings))]
pub fn select_mode(
    options: &QueryOptions,
    warnings: &mut Vec<QueryWarning>,
) -> Result<CalculationMode> {
    let calc: CalcKind = options
        .calc
        .as_deref()
        .ok_or_else(|| AnalyzerError::invalid_calc(None))?
        .parse()?;

    let mode = match (calc, options.temp.as_deref()) {
        (CalcKind::Tau, None) => temperature_sweep(options)?,
        (CalcKind::Tau, Some(temp)) => CalculationMode::TauAtTemperature {
            kpoint: ScalarOrRange::parse_or_all(
                options.kpoint.as_deref(),
                IndexOption::Kpoint,
                calc,
            )?,
            mode: ScalarOrRange::parse_or_all(options.mode.as_deref(), IndexOption::Mode, calc)?,
            temp: temp.to_string(),
        },
        (CalcKind::Kappa, _) => {
            discard_kpoint(options, warnings);
            CalculationMode::Kappa {
                mode: ScalarOrRange::parse_or_all(
                    options.mode.as_deref(),
                    IndexOption::Mode,
                    calc,
                )?,
            }
        }
        (CalcKind::Cumulative, None) => return Err(AnalyzerError::MissingTemperature),
        (CalcKind::Cumulative, Some(temp)) => {
            discard_kpoint(options, warnings);
            CalculationMode::Cumulative {
                mode: ScalarOrRange::parse_or_all(
                    options.mode.as_deref(),
                    IndexOption::Mode,
                    calc,
                )?,
                length: LengthSweep::parse_or_default(options.length.as_deref())?,
                temp: temp.to_string(),
                direction: DirectionMask::parse_or_none(options.direction.as_deref())?,
            }
        }
    };

    debug!("Selected calculation mode: {:?}", mode);
    Ok(mode)
}

fn temperature_sweep(options: &QueryOptions) -> Result<CalculationMode> {
    let (Some(kpoint), Some(mode)) = (options.kpoint.as_deref(), options.mode.as_deref()) else {
        let missing = [("kpoint", &options.kpoint), ("mode", &options.mode)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.to_string())
            .collect();
        return Err(AnalyzerError::MissingRequiredOption { missing });
    };

    // Both shapes are checked before either value is parsed as a number
    for (raw, option) in [(kpoint, IndexOption::Kpoint), (mode, IndexOption::Mode)] {
        if raw.contains(':') {
            return Err(AnalyzerError::invalid_single_value(
                option.as_str(),
                CalcKind::Tau.as_str(),
                raw,
            ));
        }
    }

    Ok(CalculationMode::TauTemperatureSweep {
        kpoint: parse_single_index(kpoint, IndexOption::Kpoint, CalcKind::Tau)?,
        mode: parse_single_index(mode, IndexOption::Mode, CalcKind::Tau)?,
    })
}

fn discard_kpoint(options: &QueryOptions, warnings: &mut Vec<QueryWarning>) {
    if options.kpoint.is_some() {
        warnings.push(QueryWarning::KpointDiscarded);
    }
}

/// Compile `options` into the engine invocation
pub fn compile(options: &QueryOptions, warnings: &mut Vec<QueryWarning>) -> Result<EngineCommand> {
    let mode = select_mode(options, warnings)?;
    Ok(EngineCommand::new(
        options.result_file.clone(),
        &mode,
        options.average,
    ))
}
