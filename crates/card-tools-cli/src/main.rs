use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use card_impose::{PaperSize, Progress, ProgressFn, SheetSpec};

#[derive(Parser)]
#[command(name = "cardt", about = "Card imposition tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose card images onto print-ready duplex sheets
    Impose {
        /// Recto (front) image files, one per card, in print order
        #[arg(short, long, required = true, num_args = 1..)]
        recto: Vec<PathBuf>,

        /// Verso (back) image file, shared by every card
        #[arg(short, long)]
        verso: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Paper size
        #[arg(long, default_value = "a4", value_enum)]
        paper: PaperArg,

        /// Page width in mm (overrides --paper)
        #[arg(long)]
        page_width: Option<f32>,

        /// Page height in mm (overrides --paper)
        #[arg(long)]
        page_height: Option<f32>,

        /// Card trim width in mm
        #[arg(long, default_value = "63.5")]
        card_width: f32,

        /// Card trim height in mm
        #[arg(long, default_value = "88.0")]
        card_height: f32,

        /// Bleed around each card in mm
        #[arg(long, default_value = "2.5")]
        bleed: f32,

        /// Target resolution for embedded card art
        #[arg(long, default_value = "300")]
        dpi: f32,

        /// Cards per row and per column
        #[arg(long, default_value = "3")]
        grid: usize,

        /// Skip registration marks
        #[arg(long)]
        no_registration_marks: bool,

        /// Skip CMYK calibration bars
        #[arg(long)]
        no_color_bars: bool,

        /// Embed card art at full JPEG quality
        #[arg(long)]
        no_optimize: bool,

        /// Show statistics only, don't generate a PDF
        #[arg(long)]
        stats_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Impose {
            recto,
            verso,
            output,
            paper,
            page_width,
            page_height,
            card_width,
            card_height,
            bleed,
            dpi,
            grid,
            no_registration_marks,
            no_color_bars,
            no_optimize,
            stats_only,
        } => {
            let (paper_width, paper_height) = PaperSize::from(paper).dimensions_mm();
            let spec = SheetSpec {
                page_width_mm: page_width.unwrap_or(paper_width),
                page_height_mm: page_height.unwrap_or(paper_height),
                card_width_mm: card_width,
                card_height_mm: card_height,
                bleed_mm: bleed,
                grid_size: grid,
                dpi,
                registration_marks: !no_registration_marks,
                color_bars: !no_color_bars,
                optimize: !no_optimize,
            };
            spec.validate()?;

            let stats = card_impose::calculate_statistics(recto.len(), &spec)?;
            println!("Imposition Statistics:");
            println!("  Cards: {}", stats.cards);
            println!("  Sheets: {}", stats.sheets);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Blank cells on last sheet: {}", stats.blank_cells);

            if stats_only {
                return Ok(());
            }

            let progress: Arc<ProgressFn> = Arc::new(|report: Progress| {
                println!(
                    "[{:>3}%] {}",
                    (report.fraction * 100.0).round() as u32,
                    report.message
                );
            });

            card_impose::process_batch(&recto, &verso, &output, &spec, Some(progress)).await?;
            println!("Imposed → {}", output.display());
        }
    }

    Ok(())
}
