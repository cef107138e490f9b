use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use plandoc::OutputFormat;
use plandoc::config::Config;
use plandoc::document::{identify_sections, parse_document};
use plandoc::export::{
    BusinessInfo, ExportRequest, TemplateStructure, assemble, export_filename, render_text,
};
use plandoc::generation::{BusinessContext, generate_plan, generator_from_env};
use plandoc::reference::{ReferenceDocument, ingest_reference};

#[derive(Parser)]
#[command(name = "plandoc")]
#[command(about = "Analyze business-plan templates and assemble generated plans")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a .docx template and print its structure
    Parse {
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Classify the paragraphs of a .docx template into plan sections
    Sections { file: PathBuf },

    /// Ingest a reference document and print its preview
    Reference { file: PathBuf },

    /// Generate a business plan and write it as .docx
    Generate {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        requirements: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Template whose non-generated paragraphs are carried over
        #[arg(long)]
        template: Option<PathBuf>,

        /// Reference documents given to the generator (repeatable)
        #[arg(long = "reference")]
        references: Vec<PathBuf>,

        /// Output path (defaults to the title with spaces as underscores)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Assemble a .docx from a JSON export request
    Export {
        /// JSON file with template_structure, generated_content and business_info
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Command::Parse { file, format } => {
            let document = parse_document(&file)
                .with_context(|| format!("문서 분석 오류: {}", file.display()))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
                OutputFormat::Text => print!("{}", render_text(&document)),
            }
        }
        Command::Sections { file } => {
            let document = parse_document(&file)
                .with_context(|| format!("문서 분석 오류: {}", file.display()))?;
            let report = identify_sections(&document);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Reference { file } => {
            let reference = read_reference(&file, config.reference.preview_chars)?;
            println!("{}", serde_json::to_string_pretty(&reference)?);
        }
        Command::Generate {
            title,
            description,
            requirements,
            notes,
            template,
            references,
            output,
        } => {
            let mut reference_documents = Vec::with_capacity(references.len());
            for path in &references {
                reference_documents.push(read_reference(path, usize::MAX)?.content);
            }

            let info = BusinessInfo {
                title: Some(title),
                description,
                requirements,
                notes,
                reference_documents,
            };

            let template = match &template {
                Some(path) => {
                    let document = parse_document(path)
                        .with_context(|| format!("문서 분석 오류: {}", path.display()))?;
                    Some(TemplateStructure::from_parsed(&document))
                }
                None => None,
            };

            let generator = generator_from_env(&config)?;
            let content = generate_plan(&*generator, &BusinessContext::from(&info))
                .await
                .context("사업계획서 생성 오류")?;

            let request = ExportRequest {
                template_structure: template.unwrap_or_default(),
                generated_content: content,
                business_info: info,
            };
            write_plan(&request, output)?;
        }
        Command::Export { input, output } => {
            let json = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let request: ExportRequest = serde_json::from_str(&json)
                .with_context(|| format!("Invalid export request in {}", input.display()))?;
            write_plan(&request, output)?;
        }
        Command::InitConfig => match Config::default().save()? {
            Some(path) => println!("Wrote default configuration to {}", path.display()),
            None => anyhow::bail!("Could not determine the configuration directory"),
        },
    }

    Ok(())
}

fn read_reference(path: &Path, preview_chars: usize) -> Result<ReferenceDocument> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    ingest_reference(filename, &bytes, preview_chars)
        .with_context(|| format!("참고 문서 처리 오류: {}", path.display()))
}

fn write_plan(request: &ExportRequest, output: Option<PathBuf>) -> Result<()> {
    let buffer = assemble(
        Some(&request.template_structure),
        &request.generated_content,
        &request.business_info,
    )
    .context("DOCX 생성 오류")?;

    let output = output.unwrap_or_else(|| PathBuf::from(export_filename(&request.business_info)));
    fs::write(&output, buffer.into_inner())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("{}", output.display());
    Ok(())
}
