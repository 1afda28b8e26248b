//! sonora-tags
//!
//! Small CLI over the tag layer:
//! - `show`    print an MP3's tag fields and how big its tag region is on disk
//! - `padding` print what the padding heuristic picks for a pair of sizes
//! - `edit`    change tag fields and save (padding picked by the configured mode)
//! - `resave`  load + save unchanged, which normalises the padding
//! - `strip`   remove the tag, leaving the audio untouched
//! - `scan`    list MP3s under one or more folders with their tag region sizes
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` to see padding decisions.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sonora_tags::core::tags::read_region;
use sonora_tags::core::{read_regions, scan_paths};
use sonora_tags::{Id3File, Metadata, PaddingInfo, PaddingMode, TrackRow, WriteConfig};

#[derive(Parser)]
#[command(name = "sonora-tags")]
#[command(about = "Inspect and rewrite ID3v2 tags with sensible padding", long_about = None)]
struct Cli {
    /// TOML file with write settings (ID3 version, padding mode)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tag fields and tag region size
    Show { file: PathBuf },

    /// Print the default padding for `padding` bytes left in a `filesize` byte file
    Padding {
        #[arg(allow_hyphen_values = true)]
        padding: i64,
        /// -1 if unknown
        #[arg(allow_hyphen_values = true)]
        filesize: i64,
    },

    /// Change tag fields and save
    Edit {
        file: PathBuf,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        album: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        comment: Option<String>,
        /// Always use this many bytes of padding (overrides the config)
        #[arg(long)]
        fixed: Option<i64>,
    },

    /// Load and save the tag unchanged
    Resave {
        file: PathBuf,
        /// Always use this many bytes of padding (overrides the config)
        #[arg(long)]
        fixed: Option<i64>,
    },

    /// Remove the tag
    Strip { file: PathBuf },

    /// List MP3s and their tag region sizes
    Scan {
        #[arg(required = true)]
        roots: Vec<PathBuf>,
    },
}

fn load_config(path: Option<&Path>, fixed: Option<i64>) -> anyhow::Result<WriteConfig> {
    let mut config = match path {
        Some(p) => WriteConfig::load(p).with_context(|| format!("loading {}", p.display()))?,
        None => WriteConfig::default(),
    };
    if let Some(bytes) = fixed {
        config.padding = PaddingMode::Fixed { bytes };
    }
    Ok(config)
}

fn region_len(path: &Path) -> anyhow::Result<usize> {
    Ok(read_region(path)?.map_or(0, |r| r.len))
}

fn print_row(row: &TrackRow) {
    let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

    println!("path:    {}", row.path.display());
    println!("title:   {}", show(&row.title));
    println!("artist:  {}", show(&row.artist));
    println!("album:   {}", show(&row.album));
    match (row.track_no, row.track_total) {
        (Some(n), Some(t)) => println!("track:   {n}/{t}"),
        (Some(n), None) => println!("track:   {n}"),
        _ => println!("track:   -"),
    }
    println!(
        "year:    {}",
        row.year.map_or_else(|| "-".to_string(), |y| y.to_string())
    );
    println!("comment: {}", show(&row.comment));
}

fn save(file: &Path, meta: &mut Id3File, config: &WriteConfig) -> anyhow::Result<()> {
    let before = region_len(file)?;
    meta.save_with_config(None, config)
        .with_context(|| format!("saving {}", file.display()))?;
    let after = region_len(file)?;
    println!("{}: tag region {before} -> {after} bytes", file.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file } => {
            let meta = Id3File::open(&file).with_context(|| format!("reading {}", file.display()))?;
            print_row(&meta.snapshot());
            println!("tag:     {} bytes", region_len(&file)?);
        }

        Commands::Padding { padding, filesize } => {
            let info = PaddingInfo::new(padding, filesize)?;
            let (low, high) = info.thresholds();
            println!("{info}");
            println!("low={low} high={high} default={}", info.default_padding());
        }

        Commands::Edit {
            file,
            title,
            artist,
            album,
            year,
            comment,
            fixed,
        } => {
            let config = load_config(cli.config.as_deref(), fixed)?;
            let mut meta = Id3File::open(&file).with_context(|| format!("reading {}", file.display()))?;

            let mut row = meta.snapshot();
            row.title = title.or(row.title);
            row.artist = artist.or(row.artist);
            row.album = album.or(row.album);
            row.year = year.or(row.year);
            row.comment = comment.or(row.comment);
            meta.apply(&row);

            save(&file, &mut meta, &config)?;
        }

        Commands::Resave { file, fixed } => {
            let config = load_config(cli.config.as_deref(), fixed)?;
            let mut meta = Id3File::open(&file).with_context(|| format!("reading {}", file.display()))?;
            save(&file, &mut meta, &config)?;
        }

        Commands::Strip { file } => {
            let mut meta = Id3File::open(&file).with_context(|| format!("reading {}", file.display()))?;
            meta.delete(None)
                .with_context(|| format!("stripping {}", file.display()))?;
            println!("{}: tag removed", file.display());
        }

        Commands::Scan { roots } => {
            let paths = scan_paths(&roots)?;
            let (rows, failures) = read_regions(paths);
            for (path, region) in &rows {
                match region {
                    Some(r) => println!("{:>8}  v2.{}  {}", r.len, r.major, path.display()),
                    None => println!("{:>8}  -     {}", 0, path.display()),
                }
            }
            println!("{} files, {} unreadable", rows.len(), failures);
        }
    }

    Ok(())
}
