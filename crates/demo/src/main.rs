// File: crates/demo/src/main.rs
// Summary: Demo samples built-in functions over a domain and writes the chart as PNG and the tables as CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tidy_core::{create_plotting_data, plot_functions, theme, FunctionSet, RenderOptions, DEFAULT_SAMPLES};

#[derive(Parser)]
#[command(name = "tidy-demo")]
#[command(about = "Sample named functions over a domain and plot them as lines")]
#[command(version)]
struct Cli {
    /// Domain as `start,end`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [-std::f64::consts::PI, std::f64::consts::PI])]
    domain: Vec<f64>,

    /// Number of sample points
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Function to plot (repeatable): sin, cos, tan, sq, cube, exp, ln, sqrt, abs, recip, id, neg
    #[arg(short, long = "function", default_values = ["sin", "cos"])]
    functions: Vec<String>,

    /// Output PNG
    #[arg(short, long, default_value = "target/out/functions.png")]
    out: PathBuf,

    /// Also write the wide sample table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write the long (melted) table as CSV
    #[arg(long)]
    long_csv: Option<PathBuf>,

    /// Theme preset (dark, light, solarized-dark, solarized-light, high-contrast-dark)
    #[arg(long, default_value = "dark")]
    theme: String,

    #[arg(long, default_value_t = 1024)]
    width: i32,

    #[arg(long, default_value_t = 640)]
    height: i32,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let funcs = builtin_functions(&cli.functions)?;
    tracing::info!(functions = ?cli.functions, n = cli.samples, "sampling");

    if let Some(path) = &cli.csv {
        let wide = create_plotting_data(&cli.domain, cli.samples, &funcs)?;
        wide.write_csv_file(path)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        println!("Wrote {}", path.display());
    }

    let chart = plot_functions(&cli.domain, cli.samples, &funcs)?;

    if let Some(path) = &cli.long_csv {
        chart.data().write_csv_file(path)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        println!("Wrote {}", path.display());
    }

    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        theme: theme::find(&cli.theme),
        ..RenderOptions::default()
    };
    chart.render_to_png(&opts, &cli.out)
        .with_context(|| format!("failed to render '{}'", cli.out.display()))?;
    println!("Wrote {}", cli.out.display());

    Ok(())
}

/// Resolve names to built-in functions, keeping the order given.
fn builtin_functions(names: &[String]) -> Result<FunctionSet> {
    let mut set = FunctionSet::new();
    for name in names {
        match name.as_str() {
            "sin" => { set.insert(name.as_str(), f64::sin); }
            "cos" => { set.insert(name.as_str(), f64::cos); }
            "tan" => { set.insert(name.as_str(), f64::tan); }
            "sq" => { set.insert(name.as_str(), |x| x * x); }
            "cube" => { set.insert(name.as_str(), |x| x * x * x); }
            "exp" => { set.insert(name.as_str(), f64::exp); }
            "ln" => { set.insert(name.as_str(), f64::ln); }
            "sqrt" => { set.insert(name.as_str(), f64::sqrt); }
            "abs" => { set.insert(name.as_str(), f64::abs); }
            "id" => { set.insert(name.as_str(), |x| x); }
            "neg" => { set.insert(name.as_str(), |x: f64| -x); }
            "recip" => {
                set.insert_fallible(name.as_str(), |x| {
                    if x == 0.0 { Err("division by zero") } else { Ok(1.0 / x) }
                });
            }
            other => anyhow::bail!("unknown function '{other}'"),
        }
    }
    Ok(set)
}
