use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Ambient temperature in degrees Celsius (overrides config default)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Historical period label: roman, paleolithic, medieval.
    /// Unrecognized labels fall back to equal weighting.
    #[arg(long)]
    pub period: Option<String>,

    /// Opaque time-of-day label passed through to the rendered scene
    #[arg(long)]
    pub time_of_day: Option<String>,

    /// Opaque location-type label
    #[arg(long)]
    pub location: Option<String>,

    /// Fixed RNG seed for a reproducible draw (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sample N draws and print the selection histogram instead of one scene
    #[arg(long)]
    pub trials: Option<u32>,

    /// Emit the rendered scene as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,
}
