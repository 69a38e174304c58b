use clap::Parser;
use std::path::PathBuf;

use imgstack::{Alignment, NoProgress, StackRequest, logger};
use tracing::debug;

#[derive(Parser)]
#[command(name = "imgstack")]
#[command(about = "Stack images vertically into a single image")]
struct Cli {
    /// Input images, top to bottom
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Output file; the format follows its extension
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Vertical gap between images, in pixels
    #[arg(short, long, value_name = "PX", default_value_t = 0)]
    spacing: u32,

    /// Horizontal alignment of narrower images
    #[arg(short, long, value_enum, default_value_t = Alignment::Center)]
    align: Alignment,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Open the desktop window
    #[cfg(feature = "gui")]
    #[arg(long)]
    gui: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logger::init(args.verbose);

    #[cfg(feature = "gui")]
    if args.gui || args.images.is_empty() {
        return imgstack::gui::run().map_err(|e| anyhow::anyhow!("GUI failed: {}", e));
    }

    let request = StackRequest::new(args.images, args.output.unwrap_or_default())
        .spacing(args.spacing)
        .alignment(args.align);
    debug!("{:?}", request);

    let outcome = if args.verbose {
        imgstack::combine(&request, &mut |p: f32| debug!("progress: {:.0}%", p))?
    } else {
        imgstack::combine(&request, &mut NoProgress)?
    };

    println!("{}", outcome);
    Ok(())
}
