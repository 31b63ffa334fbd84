use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use huepal::{table, GroupPalette, GroupSpec, HuePalette, NamedPalette};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "huepal")]
#[command(about = "Generate a grouped categorical color palette from CSV data", long_about = None)]
struct Args {
    #[arg(short = 'g', long = "group", required = true, help = "Column whose values select a hue")]
    group: String,

    #[arg(short = 's', long = "shade", required = true, help = "Column whose values select a shade within the hue")]
    shade: String,

    #[arg(short = 'n', long = "max-shades", help = "Maximum number of distinct shades per group")]
    max_shades: Option<usize>,

    #[arg(long = "hues", value_delimiter = ',', help = "Comma-separated hue angles, assigned to groups in order")]
    hues: Option<Vec<f64>>,

    #[arg(long = "group-hue", value_name = "VALUE=HUE", help = "Fixed hue for one group value (repeatable)")]
    group_hue: Vec<String>,

    #[arg(long = "manual", value_name = "NAME=COLOR", help = "Color override for one name (repeatable)")]
    manual: Vec<String>,

    #[arg(long = "no-other", help = "Do not add the default grey 'Other' entry")]
    no_other: bool,

    #[arg(long = "min-chroma", default_value = "20")]
    min_chroma: f64,

    #[arg(long = "max-chroma", default_value = "80")]
    max_chroma: f64,

    #[arg(long = "min-luminance", default_value = "20")]
    min_luminance: f64,

    #[arg(long = "max-luminance", default_value = "90")]
    max_luminance: f64,

    #[arg(long = "power", default_value = "1.3")]
    power: f64,

    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    format: Format,
}

fn split_pair(input: &str) -> Result<(String, String)> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected NAME=VALUE, got '{}'", input))?;
    Ok((name.to_string(), value.to_string()))
}

fn parse_manual(inputs: &[String], no_other: bool) -> Result<Vec<(String, String)>> {
    let mut manual = Vec::new();
    if !no_other {
        manual.push(("Other".to_string(), huepal::group::OTHER_COLOR.to_string()));
    }
    for input in inputs {
        let (name, color) = split_pair(input)?;
        csscolorparser::parse(&color)
            .with_context(|| format!("Invalid color '{}' for '{}'", color, name))?;
        manual.push((name, color));
    }
    Ok(manual)
}

fn parse_group(column: &str, inputs: &[String]) -> Result<GroupSpec> {
    let mut spec = GroupSpec::column(column);
    for input in inputs {
        let (value, hue) = split_pair(input)?;
        let hue = hue
            .parse::<f64>()
            .with_context(|| format!("Failed to parse hue '{}' for group '{}'", hue, value))?;
        spec = spec.with_hue(value, hue);
    }
    Ok(spec)
}

fn write_palette(out: &mut impl Write, palette: &NamedPalette, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, palette).context("Failed to write JSON")?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["name", "color"])?;
            for (name, color) in palette.iter() {
                writer.write_record([name, color])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let data = table::read_csv_from_stdin().context("Failed to read CSV from stdin")?;

    let hue_palette = HuePalette::default()
        .chroma(args.min_chroma, args.max_chroma)
        .luminance(args.min_luminance, args.max_luminance)
        .power(args.power);

    let group = parse_group(&args.group, &args.group_hue)?;
    let mut builder = GroupPalette::new(group, args.shade.clone())
        .generator(hue_palette)
        .manual(parse_manual(&args.manual, args.no_other)?);
    if let Some(n) = args.max_shades {
        builder = builder.max_shades(n);
    }
    if let Some(hues) = args.hues {
        builder = builder.hues(hues);
    }

    let result = builder.build(&data).context("Failed to build palette")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_palette(&mut handle, &result.palette, args.format)?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
