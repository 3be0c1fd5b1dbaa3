//! unresume CLI - resume field extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unresume::{
    CanonicalForm, HeadingDetector, KeywordGroup, ParserOptions, ResumeParser, SkillVocabulary,
};

#[derive(Parser)]
#[command(name = "unresume")]
#[command(version)]
#[command(about = "Extract structured fields from resume PDFs and scans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one resume into a JSON record
    Parse {
        /// Input resume file (pdf/png/jpg/jpeg)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        extraction: ExtractionArgs,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Parse every resume in a folder into one JSON document
    Batch {
        /// Input folder
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = "parsed_resumes.json")]
        output: PathBuf,

        #[command(flatten)]
        extraction: ExtractionArgs,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Process documents in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Recover and normalize a resume's text without extracting fields
    Text {
        /// Input resume file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct ExtractionArgs {
    /// Skill vocabulary file (JSON array of names)
    #[arg(long, value_name = "FILE", default_value = unresume::skills::DEFAULT_VOCABULARY_PATH)]
    vocabulary: PathBuf,

    /// Fuzzy-match section headings instead of requiring uppercase lines
    #[arg(long)]
    fuzzy_headings: bool,

    /// Title-case matched skill names
    #[arg(long)]
    title_case_skills: bool,

    /// Render resolution for pages that fall back to OCR
    #[arg(long, default_value = "300")]
    dpi: u32,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            extraction,
            compact,
        } => cmd_parse(&input, output.as_deref(), &extraction, compact),
        Commands::Batch {
            input,
            output,
            extraction,
            compact,
            parallel,
        } => cmd_batch(&input, &output, &extraction, compact, parallel),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_parser(
    extraction: &ExtractionArgs,
    parallel: bool,
) -> Result<ResumeParser, Box<dyn std::error::Error>> {
    let mut options = ParserOptions::new()
        .with_dpi(extraction.dpi)
        .with_parallel(parallel);

    if extraction.fuzzy_headings {
        options = options
            .with_heading_detector(HeadingDetector::FuzzyKeywords(KeywordGroup::default_groups()));
    }
    if extraction.title_case_skills {
        options = options.with_canonical_form(CanonicalForm::TitleCase);
    }

    let parser = ResumeParser::with_options(options);
    attach_skill_index(parser, &extraction.vocabulary)
}

#[cfg(feature = "embeddings")]
fn attach_skill_index(
    parser: ResumeParser,
    vocabulary_path: &Path,
) -> Result<ResumeParser, Box<dyn std::error::Error>> {
    use std::sync::Arc;
    use unresume::skills::FastEmbedProvider;
    use unresume::SkillIndex;

    let vocabulary = SkillVocabulary::load_or_empty(vocabulary_path)?;
    if vocabulary.is_empty() {
        return Ok(parser);
    }
    let provider = Arc::new(FastEmbedProvider::new()?);
    let index = SkillIndex::build(vocabulary, provider)?;
    Ok(parser.with_skill_index(index))
}

#[cfg(not(feature = "embeddings"))]
fn attach_skill_index(
    parser: ResumeParser,
    vocabulary_path: &Path,
) -> Result<ResumeParser, Box<dyn std::error::Error>> {
    let vocabulary = SkillVocabulary::load_or_empty(vocabulary_path)?;
    if !vocabulary.is_empty() {
        log::warn!(
            "vocabulary {} loaded but this build has no embedding encoder; \
             rebuild with --features embeddings to enable skill matching",
            vocabulary_path.display()
        );
    }
    Ok(parser)
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    extraction: &ExtractionArgs,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = build_parser(extraction, false)?;
    let record = parser.parse_file(input)?;

    let json = if compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    extraction: &ExtractionArgs,
    compact: bool,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = build_parser(extraction, parallel)?;

    let total = unresume::list_supported_files(input)?.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let report = parser.parse_folder_with(input, |outcome| {
        pb.set_message(outcome.file_name.clone());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    fs::write(output, report.to_json(!compact)?)?;

    println!(
        "{}",
        format!(
            "Parsed {} resumes, saved to {}",
            report.success_count(),
            output.display()
        )
        .green()
        .bold()
    );
    if !report.is_clean() {
        println!(
            "{}",
            format!("{} documents failed:", report.failure_count()).yellow()
        );
        for failure in &report.failures {
            println!("  {} {}: {}", "✗".red(), failure.file_name, failure.error);
        }
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = unresume::recover_text(input)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_version() {
    println!("unresume {}", env!("CARGO_PKG_VERSION"));
    println!(
        "supported extensions: {}",
        unresume::SUPPORTED_EXTENSIONS.join(", ")
    );
    #[cfg(feature = "embeddings")]
    println!("skill matching: fastembed (bge-base-en-v1.5)");
    #[cfg(not(feature = "embeddings"))]
    println!("skill matching: disabled (build with --features embeddings)");
}
