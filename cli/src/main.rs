//! stampdoc CLI - paginate spreadsheet rows into a stamped Word document

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use stampdoc::paginate::{self, DEFAULT_PAGE_CAPACITY};
use stampdoc::{
    generate_test_files, read_dataset, Document, DocumentStats, GenerateOptions, JsonFormat,
    PaginateOptions, Paths, Stampdoc,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "stampdoc")]
#[command(version)]
#[command(about = "Paginate spreadsheet rows into a stamped Word document", long_about = None)]
struct Cli {
    /// Working directory holding the dataset, stamp and output
    #[arg(long, value_name = "DIR", default_value = stampdoc::paths::DEFAULT_DIR, global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the roster workbook and stamp image
    Generate {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Number of roster rows
        #[arg(long, default_value_t = stampdoc::generate::DEFAULT_ROW_COUNT)]
        rows: usize,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// TrueType font for the stamp labels
        #[arg(long, value_name = "FILE")]
        font: Option<PathBuf>,
    },

    /// Convert a dataset into a stamped .docx
    Convert {
        /// Dataset file (.xlsx or .csv)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Stamp image
        #[arg(short, long, value_name = "FILE")]
        stamp: Option<PathBuf>,

        /// Output .docx file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Data rows per page
        #[arg(short, long, default_value_t = DEFAULT_PAGE_CAPACITY)]
        capacity: usize,

        /// Truncate rows wider than the header instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Print the paginated tables as plain text
    Preview {
        /// Dataset file (.xlsx or .csv)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Data rows per page
        #[arg(short, long, default_value_t = DEFAULT_PAGE_CAPACITY)]
        capacity: usize,
    },

    /// Print the paginated document as JSON
    Json {
        /// Dataset file (.xlsx or .csv)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show dataset and pagination information
    Info {
        /// Dataset file (.xlsx or .csv)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Data rows per page
        #[arg(short, long, default_value_t = DEFAULT_PAGE_CAPACITY)]
        capacity: usize,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let paths = Paths::new(&cli.dir);
    log::debug!("Working directory: {}", paths.dir().display());

    let result = match cli.command {
        Some(Commands::Generate {
            force,
            rows,
            seed,
            font,
        }) => cmd_generate(&paths, force, rows, seed, font),
        Some(Commands::Convert {
            input,
            stamp,
            output,
            capacity,
            lenient,
        }) => {
            let input = input.unwrap_or_else(|| paths.dataset());
            let stamp = stamp.unwrap_or_else(|| paths.stamp());
            let output = output.unwrap_or_else(|| paths.output());
            cmd_convert(&input, &stamp, &output, capacity, lenient)
        }
        Some(Commands::Preview { input, capacity }) => {
            cmd_preview(&input.unwrap_or_else(|| paths.dataset()), capacity)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(
            &input.unwrap_or_else(|| paths.dataset()),
            &paths.stamp(),
            output.as_deref(),
            compact,
        ),
        Some(Commands::Info { input, capacity }) => {
            cmd_info(&input.unwrap_or_else(|| paths.dataset()), capacity)
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_run(&paths),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Generate test files when the dataset is missing, then convert.
fn cmd_run(paths: &Paths) -> CliResult {
    if !paths.has_dataset() {
        generate_test_files(&GenerateOptions::new().with_paths(paths.clone()))?;
        println!("Test files generated in {}", paths.dir().display());
    }

    let output = paths.output();
    cmd_convert(
        &paths.dataset(),
        &paths.stamp(),
        &output,
        DEFAULT_PAGE_CAPACITY,
        false,
    )?;
    println!("Done, output file: {}", output.display());
    Ok(())
}

fn cmd_generate(
    paths: &Paths,
    force: bool,
    rows: usize,
    seed: Option<u64>,
    font: Option<PathBuf>,
) -> CliResult {
    if paths.has_dataset() && !force {
        println!(
            "{} {} (use --force to overwrite)",
            "Test files already exist in".yellow(),
            paths.dir().display()
        );
        return Ok(());
    }

    let mut options = GenerateOptions::new()
        .with_paths(paths.clone())
        .with_row_count(rows);
    if let Some(seed) = seed {
        options = options.with_seed(seed);
    }
    if let Some(font) = font {
        options.stamp = options.stamp.with_font(font);
    }

    let files = generate_test_files(&options)?;
    println!("Test files generated in {}", paths.dir().display());
    println!("  {} {}", "├─".dimmed(), files.dataset.display());
    println!("  {} {}", "└─".dimmed(), files.stamp.display());
    Ok(())
}

fn cmd_convert(
    input: &Path,
    stamp: &Path,
    output: &Path,
    capacity: usize,
    lenient: bool,
) -> CliResult {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message(format!("Reading {}...", input.display()));
    let mut builder = Stampdoc::new().with_page_capacity(capacity);
    if lenient {
        builder = builder.lenient();
    }
    let result = match builder.load(input, stamp) {
        Ok(result) => result,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message(format!(
        "Writing {} page(s)...",
        result.document().page_count()
    ));
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let written = result.write_docx(output);
    pb.finish_and_clear();
    written?;
    Ok(())
}

fn cmd_preview(input: &Path, capacity: usize) -> CliResult {
    let dataset = read_dataset(input)?;
    let options = PaginateOptions::new().with_page_capacity(capacity);

    let mut doc = Document::new();
    doc.pages = paginate::paginate(&dataset, &options)?;

    println!("{}", stampdoc::render::to_text(&doc));
    Ok(())
}

fn cmd_json(input: &Path, stamp: &Path, output: Option<&Path>, compact: bool) -> CliResult {
    let result = Stampdoc::new().load(input, stamp)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = result.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path, capacity: usize) -> CliResult {
    let dataset = read_dataset(input)?;
    let options = PaginateOptions::new().with_page_capacity(capacity);

    let mut doc = Document::new();
    doc.pages = paginate::paginate(&dataset, &options)?;
    doc.metadata.page_capacity = capacity as u32;
    let stats = DocumentStats::from_document(&doc);

    println!("{}", "Dataset Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Ok(format) = stampdoc::detect_format_from_path(input) {
        println!("{}: {}", "Format".bold(), format);
    }
    println!("{}: {}", "Columns".bold(), dataset.column_count());
    println!("{}: {}", "Rows".bold(), dataset.row_count());
    if !dataset.header().is_empty() {
        println!("{}: {}", "Header".bold(), dataset.header().join(", "));
    }

    println!();
    println!("{}", "Pagination".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Rows per page".bold(), stats.page_capacity);
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Page breaks".bold(), stats.page_break_count);
    println!("{}: {}", "Stamps".bold(), stats.image_count);
    println!("{}: {}", "Blank rows on last page".bold(), stats.blank_row_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "stampdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Stamped Word documents from spreadsheet rows");
}
