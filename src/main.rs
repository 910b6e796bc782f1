use clap::{Parser, Subcommand};
use packshot::normalize::{NormalizeOptions, batch_normalize};
use packshot::tag::{GridCell, StickerCatalog, TagJob, batch_tag};
use packshot::{fetch, imaging, output, report::BatchReport};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packshot")]
#[command(about = "Batch product-photo tooling: normalize, tag, and fetch catalog images")]
#[command(long_about = "\
Batch product-photo tooling: normalize, tag, and fetch catalog images

Three independent pipelines, all sequential with per-item fault isolation:

  normalize   Trim the backdrop, center the product on a square white canvas
              with a 4% margin, downsample to the size bound, and overwrite
              each file in place as JPEG (the extension is kept).

  tag         Composite a promotional sticker from the asset catalog onto a
              3x3 grid cell of each photo. Tagged copies are written to the
              destination folder as <stem>_TAG.jpg; originals are untouched.

  fetch       Download images listed in a two-column CSV (identifier, URL)
              into <dest>/<identifier>.jpg, bytes verbatim. The header row is
              ignored; rows with fewer than two columns are skipped.

One bad file or one failed download never aborts a batch: failures are
collected and listed in the end-of-run summary.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize product photos in place (autocrop + square canvas + JPEG)
    Normalize(NormalizeArgs),
    /// Composite a promotional sticker onto each photo
    Tag(TagArgs),
    /// Download catalog images listed in a CSV file
    Fetch(FetchArgs),
    /// List the sticker catalog and whether each asset resolves
    Stickers(StickersArgs),
}

#[derive(clap::Args)]
struct NormalizeArgs {
    /// Image files to normalize (overwritten in place)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Longest allowed canvas side; larger canvases are downsampled
    #[arg(long, default_value_t = imaging::DEFAULT_MAX_SIDE)]
    max_side: u32,

    /// Background color-distance threshold for the autocrop
    #[arg(long, default_value_t = imaging::DEFAULT_THRESHOLD)]
    threshold: f32,

    /// Emit the batch report as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct TagArgs {
    /// Image files to tag
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Sticker name from the catalog (see `packshot stickers`)
    #[arg(long)]
    sticker: String,

    /// Grid cell as ROW,COL with both in 0..=2 (0,0 is top-left)
    #[arg(long, default_value = "2,0")]
    cell: GridCell,

    /// Destination folder for the tagged copies
    #[arg(long)]
    dest: PathBuf,

    /// Sticker asset directory
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Emit the batch report as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct FetchArgs {
    /// Two-column CSV: identifier, image URL (header row ignored)
    #[arg(long)]
    csv: PathBuf,

    /// Destination folder for the downloads
    #[arg(long)]
    dest: PathBuf,

    /// Emit the batch report as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct StickersArgs {
    /// Sticker asset directory
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Normalize(args) => {
            let opts = NormalizeOptions {
                max_side: args.max_side,
                threshold: args.threshold,
            };
            let report = batch_normalize(&args.files, &opts, output::print_progress);
            finish("Normalized", "images", &report, args.json)?;
        }
        Command::Tag(args) => {
            let catalog = StickerCatalog::new(&args.assets);
            let job = TagJob {
                files: args.files,
                dest: args.dest,
                sticker: args.sticker,
                cell: args.cell,
            };
            let report = batch_tag(&job, &catalog, output::print_progress)?;
            finish("Tagged", "images", &report, args.json)?;
        }
        Command::Fetch(args) => {
            let rows = fetch::read_rows(&args.csv)?;
            let report = fetch::fetch_all(&rows, &args.dest, output::print_progress)?;
            finish("Downloaded", "images", &report, args.json)?;
        }
        Command::Stickers(args) => {
            let catalog = StickerCatalog::new(&args.assets);
            output::print_sticker_list(&catalog.entries());
        }
    }

    Ok(())
}

/// Render the end-of-batch report, as text or JSON.
fn finish(
    verb: &str,
    noun: &str,
    report: &BatchReport,
    json: bool,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        output::print_summary(verb, noun, report);
    }
    Ok(())
}
