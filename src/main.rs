//! admission CLI - shortlist programs from historical admission scores
//!
//! Pipeline per submission:
//!
//! 1. Load: read the reference dataset once (failure is reported, not fatal)
//! 2. Filter: program substring, then city/province substring
//! 3. Classify: score gap and risk tier per row
//! 4. Rank: tier selection, closest match first, then the display cap
//! 5. Render: aligned table, optionally followed by an AI analysis

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use admission_core::advisor::{
    load_knowledge, AnalysisRequest, Consultation, HttpTextGenerator, TextGenerator,
};
use admission_core::config::AppConfig;
use admission_core::logging::init_tracing;
use admission_core::session::{Session, Submission};
use admission_core::types::{Recommendation, RecommendError};
use admission_core::view;

/// Shortlist schools and programs from a historical admission-score table
///
/// Examples:
///   admission recommend --score 520 --subject 计算机
///   admission recommend --score 600 --location 重庆 --risk reach --analyze
///   admission consult --knowledge knowledge.txt
#[derive(Parser, Debug)]
#[command(name = "admission")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./admission.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank programs for one candidate
    Recommend {
        /// Exam score, 0 to 750
        #[arg(short, long, allow_negative_numbers = true)]
        score: i64,

        /// Program substring (empty = any)
        #[arg(long, default_value = "")]
        subject: String,

        /// City or province substring (empty = any)
        #[arg(long, default_value = "")]
        location: String,

        /// all | safe | stable | reach (or 全部 / 保底 / 稳妥 / 冲刺)
        #[arg(long, default_value = "all")]
        risk: String,

        /// Maximum rows to display
        #[arg(long)]
        limit: Option<usize>,

        /// Reference dataset path
        #[arg(long, value_name = "PATH")]
        data: Option<PathBuf>,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,

        /// Ask the text-generation service to analyse the top rows
        #[arg(long)]
        analyze: bool,
    },

    /// Ask questions answered from a knowledge file
    Consult {
        /// Knowledge file path
        #[arg(long, value_name = "PATH")]
        knowledge: Option<PathBuf>,

        /// Ask a single question instead of reading stdin
        #[arg(short, long)]
        question: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "warn" });

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Command::Recommend {
            score,
            subject,
            location,
            risk,
            limit,
            data,
            json,
            analyze,
        } => {
            let data_path = data.unwrap_or_else(|| config.data_path.clone());
            let session = Session::open(&data_path)
                .with_display_limit(limit.unwrap_or(config.display_limit));

            let submission = Submission {
                score,
                subject_filter: subject,
                location_filter: location,
                risk_preference: risk,
            };

            let recommendation = match session.submit(&submission) {
                Ok(recommendation) => recommendation,
                Err(RecommendError::Unavailable(cause)) => {
                    eprintln!("{}", view::unavailable_message(&cause.to_string()));
                    return Ok(ExitCode::from(2));
                }
                Err(err @ RecommendError::InvalidInput(_)) => {
                    eprintln!("{err}");
                    return Ok(ExitCode::from(64));
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&recommendation)?);
            } else {
                print!("{}", view::render(&recommendation));
            }

            if analyze {
                analyse(&config, &recommendation);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Consult {
            knowledge,
            question,
        } => {
            let knowledge_path = knowledge.unwrap_or_else(|| config.knowledge_path.clone());
            consult(&config, &knowledge_path, question)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Failures here are printed in the analysis area only; the table above
/// has already been shown.
fn analyse(config: &AppConfig, recommendation: &Recommendation) {
    let request = match AnalysisRequest::from_recommendation(recommendation, config.analysis_top_n) {
        Ok(Some(request)) => request,
        Ok(None) => return,
        Err(err) => {
            eprintln!("AI 分析失败: {err}");
            return;
        }
    };

    println!("\n🤖 AI 分析前 {} 个志愿：", request.row_count);
    let result = HttpTextGenerator::new(config.advisor.clone())
        .and_then(|generator| generator.generate(&request.messages(), &mut print_chunk));
    println!();

    if let Err(err) = result {
        tracing::warn!(error = %err, "analysis request failed");
        eprintln!("AI 分析失败: {err}");
    }
}

fn consult(config: &AppConfig, knowledge_path: &Path, question: Option<String>) -> Result<()> {
    let generator = HttpTextGenerator::new(config.advisor.clone())?;
    let mut consultation = Consultation::new(load_knowledge(knowledge_path));

    if let Some(message) = consultation.history().first() {
        println!("{}", message.content);
    }

    if let Some(question) = question {
        ask(&generator, &mut consultation, &question);
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        ask(&generator, &mut consultation, question);
    }
    Ok(())
}

fn ask(generator: &dyn TextGenerator, consultation: &mut Consultation, question: &str) {
    let result = consultation.ask(generator, question, &mut print_chunk);
    println!();
    if let Err(err) = result {
        eprintln!("出错了: {err}");
    }
}

fn print_chunk(chunk: &str) {
    print!("{chunk}");
    let _ = io::stdout().flush();
}
