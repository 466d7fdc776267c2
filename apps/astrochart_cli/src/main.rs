use anyhow::Context;
use astrochart::{AstroChart, ChartConfig};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a chart scene from planet and cusp longitudes")]
struct Args {
    #[arg(help = "Chart JSON file ({\"planets\": [...], \"cusps\": [...]}), or - for stdin")]
    chart: PathBuf,

    #[arg(long, help = "TOML file overriding radii, collision and orb settings")]
    config: Option<PathBuf>,

    #[arg(long, help = "Only validate the input and print the messages")]
    validate_only: bool,

    #[arg(long)]
    pretty: bool,
}

fn read_chart(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read chart from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    let chart = AstroChart::new(config)?;

    let text = read_chart(&args.chart)?;
    let data: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", args.chart.display()))?;

    let output = if args.validate_only {
        serde_json::to_value(chart.validate(&data))?
    } else {
        let scene = chart.render_json(&data)?;
        log::info!("{} aspects found", scene.aspects().len());
        serde_json::to_value(&scene)?
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}
