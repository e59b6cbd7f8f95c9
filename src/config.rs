use crate::exercises::Activity;
use crate::landmarks::DerivedSignals;
use clap::{Args, ValueEnum};

/// Derived gait signals supplied on the command line. Any flag given here
/// overrides the matching value stored in the capture file.
#[derive(Args, Debug, Clone, Default)]
pub struct SignalArgs {
    /// Steps per minute
    #[arg(long)]
    pub cadence: Option<f32>,
    /// Metres
    #[arg(long)]
    pub stride_length: Option<f32>,
    /// Milliseconds
    #[arg(long = "ground-contact")]
    pub ground_contact_ms: Option<f32>,
    /// Milliseconds
    #[arg(long = "flight-time")]
    pub flight_time_ms: Option<f32>,
    /// Centimetres
    #[arg(long = "vertical-oscillation")]
    pub vertical_oscillation_cm: Option<f32>,
}

impl SignalArgs {
    pub fn to_signals(&self) -> DerivedSignals {
        DerivedSignals {
            cadence: self.cadence,
            stride_length: self.stride_length,
            ground_contact_ms: self.ground_contact_ms,
            flight_time_ms: self.flight_time_ms,
            vertical_oscillation_cm: self.vertical_oscillation_cm,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Activity to analyze (running, squat, bench_press, ...). Overrides
    /// the capture file.
    #[arg(short, long)]
    pub activity: Option<Activity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
