use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "paperproto", version, about = "Render paper-prototype mock-up screens to PNG")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render screens to PNG files (the default when no command is given).
    Generate(GenerateArgs),
    /// List screens with their output file and directive fingerprint.
    List(ListArgs),
    /// Write the built-in screen set as JSON.
    Dump(DumpArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Screen set JSON. Defaults to the built-in OceanCare screens.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Directory the PNG files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Render only this screen id (repeatable).
    #[arg(long = "only")]
    only: Vec<String>,

    /// Fix the paper-noise seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// TrueType/OpenType font file for text.
    #[arg(long, conflicts_with_all = ["font_family", "builtin_font"])]
    font: Option<PathBuf>,

    /// System font family for text.
    #[arg(long, conflicts_with = "builtin_font")]
    font_family: Option<String>,

    /// Use the built-in bitmap font.
    #[arg(long)]
    builtin_font: bool,

    /// Flat paper without grain.
    #[arg(long)]
    no_noise: bool,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Screen set JSON. Defaults to the built-in OceanCare screens.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DumpArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        None => cmd_generate(GenerateArgs {
            out_dir: PathBuf::from("."),
            ..GenerateArgs::default()
        }),
        Some(Command::Generate(args)) => cmd_generate(args),
        Some(Command::List(args)) => cmd_list(args),
        Some(Command::Dump(args)) => cmd_dump(args),
    }
}

fn load_screens(in_path: Option<&Path>) -> anyhow::Result<paperproto::ScreenSet> {
    match in_path {
        Some(p) => paperproto::ScreenSet::from_path(p)
            .with_context(|| format!("load screen set '{}'", p.display())),
        None => Ok(paperproto::oceancare_screens()?),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let set = load_screens(args.in_path.as_deref())?;

    let font = if args.builtin_font {
        paperproto::FontPreference::Builtin
    } else if let Some(path) = args.font {
        paperproto::FontPreference::Path(path)
    } else if let Some(name) = args.font_family {
        paperproto::FontPreference::Family(name)
    } else {
        paperproto::FontPreference::default()
    };
    let opts = paperproto::GenerateOpts {
        seed: args.seed,
        noise: if args.no_noise {
            paperproto::NoiseOpts::off()
        } else {
            paperproto::NoiseOpts::default()
        },
        font,
        only: args.only,
        ..paperproto::GenerateOpts::default()
    };

    let count = if opts.only.is_empty() {
        set.screens.len()
    } else {
        opts.only.len()
    };
    println!("Generating {count} paper prototype images...");
    println!("{}", "=".repeat(60));

    let mut sink = paperproto::PngDirSink::new(&args.out_dir);
    let written = paperproto::generate(&set, &opts, &mut sink, |img| {
        let name = img
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("✓ Image {} created: {name}", img.number);
    })
    .with_context(|| format!("generate into '{}'", args.out_dir.display()))?;

    println!("{}", "=".repeat(60));
    println!("✓ All {} images created successfully!", written.len());
    println!();
    println!("Images saved to {}:", args.out_dir.display());
    for img in &written {
        println!("  {}. {}", img.number, img.path.display());
    }
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let set = load_screens(args.in_path.as_deref())?;
    println!(
        "canvas {}x{}, paper {}",
        set.canvas.width,
        set.canvas.height,
        set.background.to_hex()
    );
    for (i, screen) in set.screens.iter().enumerate() {
        println!(
            "{:>2}  {:<14} {:<38} {:>3} directives  {}",
            i + 1,
            screen.id,
            screen.file_name,
            screen.directives.len(),
            paperproto::fingerprint_screen(screen)
        );
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let set = paperproto::oceancare_screens()?;
    let json = set.to_json_pretty()?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write screen set '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
