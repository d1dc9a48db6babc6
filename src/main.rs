// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use ayurveda_qa::utils::logging::{
    format_answer, format_confidence, format_error, format_info, format_warning,
};
use ayurveda_qa::{
    Advisor, AdvisorState, BatchProgress, BatchRunner, Config, HealthStatus,
    PerformanceMetrics,
};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ayurveda_qa")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Answer Ayurveda questions from a fixed multilingual knowledge base", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Dataset file, overriding the configured path
    #[arg(short, long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single query
    Ask {
        query: String,

        /// Print the matched question and confidence as well
        #[arg(long)]
        explain: bool,
    },

    /// Interactive session reading one query per line from stdin
    Chat {
        /// Exchange {"message": ...} / {"response": ...} json lines
        #[arg(long)]
        json: bool,
    },

    /// Answer every line of a file concurrently
    Batch {
        file: PathBuf,

        #[arg(short, long, default_value_t = 4)]
        parallel: usize,

        /// Emit full match diagnostics as json lines
        #[arg(long)]
        json: bool,
    },

    /// Show index statistics
    Stats,

    /// Check dataset and model health
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ayurveda_qa::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }

    let advisor = Arc::new(Advisor::load(config));
    if advisor.state() != AdvisorState::Ready {
        warn!("Knowledge base unavailable, every query will receive the system error message");
    }

    match cli.command {
        Commands::Ask { query, explain } => cmd_ask(&advisor, &query, explain),
        Commands::Chat { json } => cmd_chat(&advisor, json).await?,
        Commands::Batch {
            file,
            parallel,
            json,
        } => cmd_batch(advisor, &file, parallel, json, cli.color).await?,
        Commands::Stats => cmd_stats(&advisor),
        Commands::Verify => cmd_verify(&advisor)?,
    }

    Ok(())
}

fn cmd_ask(advisor: &Advisor, query: &str, explain: bool) {
    let result = advisor.evaluate(query);

    if explain {
        println!(
            "{}",
            format_info(&format!(
                "Best match: '{}' (confidence {}, {:?})",
                result.matched_question.as_deref().unwrap_or("-"),
                format_confidence(result.confidence, result.is_match()),
                result.outcome
            ))
        );
    }

    println!("{}", format_answer(&result.response));
}

async fn cmd_chat(advisor: &Advisor, json: bool) -> Result<()> {
    if !json {
        println!(
            "{}",
            format_info("Ask a question (add e.g. '(Answer in Hindi)'); :reload re-reads the dataset, :quit exits")
        );
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if json {
            let response = advisor.handle_chat_line(&line);
            println!("{}", serde_json::to_string(&response)?);
            continue;
        }

        match line.trim() {
            "" => continue,
            ":quit" | ":exit" => break,
            ":reload" => {
                let state = advisor.reload();
                println!("{}", format_info(&format!("Reloaded knowledge base: {:?}", state)));
            }
            query => println!("{}", format_answer(&advisor.get_response(query))),
        }
    }

    Ok(())
}

async fn cmd_batch(
    advisor: Arc<Advisor>,
    file: &Path,
    parallel: usize,
    json: bool,
    color: bool,
) -> Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read query file {}", file.display()))?;

    let queries: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    info!("Evaluating {} queries with {} workers", queries.len(), parallel);
    let start = Instant::now();

    let progress = BatchProgress::new(queries.len(), color);
    let results = BatchRunner::new(advisor, parallel)
        .run(queries, &progress)
        .await;
    progress.finish();

    for result in &results {
        if json {
            println!("{}", serde_json::to_string(result)?);
        } else {
            println!("{}\t{}", result.query, result.response);
        }
    }

    let stats = progress.get_stats();
    let metrics = PerformanceMetrics::new("batch", results.len(), start.elapsed());
    info!("{}", metrics.format());
    info!(
        "Matched {} ({:.1}%), fallback {}, unavailable {}",
        stats.matched,
        stats.match_rate(),
        stats.fallback,
        stats.unavailable
    );

    Ok(())
}

fn cmd_stats(advisor: &Advisor) {
    let Some(index) = advisor.snapshot() else {
        println!("{}", format_warning("Index has not been loaded"));
        return;
    };

    let config = advisor.config();
    println!("Dataset:          {}", config.dataset.path.display());
    println!("State:            {:?}", advisor.state());
    println!("Records:          {}", index.len());
    println!("Skipped entries:  {}", index.skipped());
    println!("Vocabulary terms: {}", index.vocabulary_size());
    println!(
        "N-gram range:     {}..={}",
        config.indexer.ngram_min, config.indexer.ngram_max
    );
    println!("Question weight:  {}", config.indexer.question_weight);
    println!("Threshold:        {}", config.matcher.threshold);
    println!(
        "Dataset sha256:   {}",
        index.content_hash().unwrap_or("-")
    );
}

fn cmd_verify(advisor: &Advisor) -> Result<()> {
    let report = advisor.health_report();
    println!("{}", report.format());

    if report.overall_status == HealthStatus::Unhealthy {
        println!("{}", format_error("Knowledge base is not usable"));
        return Err(anyhow::anyhow!("Health check failed"));
    }

    Ok(())
}
