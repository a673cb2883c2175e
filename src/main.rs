use std::path::PathBuf;

use anyhow::{
    Context,
    Result
};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use integralplot::configuration::PlotConfiguration;
use integralplot::plot::chartframe::ChartPaths;
use integralplot::plot::plotdata::{
    compute_expression_plot,
    PlotData
};

/// Plot f(x) and its running integral as JSON
#[derive(Parser)]
#[command(name = "integralplot")]
#[command(version)]
struct Cli {
    /// Expression in x, e.g. "sin(x) / x"
    expression: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lower integration bound (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    from: Option<f64>,

    /// Upper integration bound (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    to: Option<f64>,

    /// Number of panels (overrides config)
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Also emit screen-space paths and axis ticks
    #[arg(long)]
    chart: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8
}

#[derive(Serialize)]
struct Output<'a> {
    expression: &'a str,
    plot: &'a PlotData,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<ChartPaths>
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut configuration = match &cli.config {
        Some(path) => PlotConfiguration::from_reader(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PlotConfiguration::default()
    };
    if let Some(expression) = cli.expression {
        configuration.expression = expression;
    }
    if let Some(from) = cli.from {
        configuration.domain[0] = from;
    }
    if let Some(to) = cli.to {
        configuration.domain[1] = to;
    }
    if let Some(samples) = cli.samples {
        configuration.samples = samples;
    }

    info!(
        expression = configuration.expression.as_str(),
        samples = configuration.samples,
        "plotting"
    );
    let plot = compute_expression_plot(&configuration.expression, &configuration.settings())
        .with_context(|| format!("plotting '{}'", configuration.expression))?;
    let chart = cli
        .chart
        .then(|| configuration.chart.paths(&plot, configuration.domain(), configuration.range()));

    let output = Output {
        expression: &configuration.expression,
        plot: &plot,
        chart
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
