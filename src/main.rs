use anyhow::Context;
use clap::Parser;
use dominance::{swatch_strip, DominantColor, DominantColors, DEFAULT_COLOR_COUNT};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "dominance")]
#[command(about = "Extract the dominant colors of an image and render them as a swatch strip")]
struct Args {
    /// Input image path
    image: PathBuf,

    /// Number of dominant colors to extract
    #[arg(short = 'n', long, default_value_t = DEFAULT_COLOR_COUNT)]
    colors: usize,

    /// Where to write the swatch strip [default: <IMAGE stem>_colors.png next to the input]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Edge length of each square in the swatch strip, in pixels
    #[arg(
        short,
        long,
        default_value_t = swatch_strip::DEFAULT_SWATCH_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=swatch_strip::MAX_SWATCH_SIZE as i64)
    )]
    swatch_size: u32,

    /// Log each pipeline step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let colors = DominantColors::open(&args.image)
        .color_count(args.colors)
        .extract()
        .with_context(|| format!("extracting dominant colors from {}", args.image.display()))?;

    for (rank, color) in colors.colors().iter().enumerate() {
        let share = colors.proportion(rank).unwrap_or_default();
        println!("{}", listing_line(rank, *color, share));
    }

    let output = args.output.unwrap_or_else(|| default_output(&args.image));
    swatch_strip::save(colors.colors(), args.swatch_size, &output)
        .with_context(|| format!("writing swatch strip to {}", output.display()))?;

    Ok(())
}

fn listing_line(rank: usize, color: DominantColor, share: f32) -> String {
    let (r, g, b) = color.rgb();

    format!(
        "{:>2}. {}  ({:>3}, {:>3}, {:>3})  {:>8} px  {:>5.1}%",
        rank + 1,
        color.hex(),
        r,
        g,
        b,
        color.population(),
        share * 100.0
    )
}

/// `<stem>_colors.png` next to the input, or `colors.png` in the working directory when the input has no file stem.
fn default_output(image: &Path) -> PathBuf {
    match image.file_stem() {
        Some(stem) => image.with_file_name(format!("{}_colors.png", stem.to_string_lossy())),
        None => PathBuf::from("colors.png"),
    }
}
