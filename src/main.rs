use jobsift::config::Settings;
use jobsift::core::Ranker;
use jobsift::error::AppError;
use jobsift::models::{FilterSummary, JobPosting, ScoredPosting};
use jobsift::outreach::{render_for_ranked, OutreachMessage};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{info, warn};

/// Parsed command line options
#[derive(Debug, Default)]
struct CliOptions {
    config_path: Option<String>,
    input: Option<String>,
    output: Option<String>,
    pretty: bool,
    outreach: bool,
    seed: Option<u64>,
}

/// Everything a reporting collaborator needs from one run
#[derive(Debug, Serialize)]
struct RunOutput {
    ranked: Vec<ScoredPosting>,
    summary: FilterSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    outreach: Option<Vec<OutreachMessage>>,
}

fn parse_args() -> Result<CliOptions, AppError> {
    let mut options = CliOptions::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => options.config_path = Some(expect_value(&arg, args.next())?),
            "--input" => options.input = Some(expect_value(&arg, args.next())?),
            "--output" => options.output = Some(expect_value(&arg, args.next())?),
            "--seed" => {
                let raw = expect_value(&arg, args.next())?;
                let seed = raw
                    .parse()
                    .map_err(|_| AppError::Cli(format!("invalid --seed value: {raw}")))?;
                options.seed = Some(seed);
            }
            "--pretty" => options.pretty = true,
            "--outreach" => options.outreach = true,
            other => return Err(AppError::Cli(format!("unknown argument: {other}"))),
        }
    }

    Ok(options)
}

fn expect_value(flag: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Cli(format!("{flag} requires a value")))
}

fn read_postings(input: Option<&str>) -> Result<Vec<JobPosting>, AppError> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

fn write_output(output: Option<&str>, run: &RunOutput, pretty: bool) -> Result<(), AppError> {
    let serialized = if pretty {
        serde_json::to_string_pretty(run)?
    } else {
        serde_json::to_string(run)?
    };

    match output {
        Some(path) => std::fs::write(path, serialized)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(serialized.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn init_logging(settings: &Settings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn run() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    let options = parse_args()?;

    let settings = match options.config_path.as_deref() {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    init_logging(&settings);
    info!("jobsift starting");

    let profile = settings.target_profile();
    let ranker = Ranker::new(settings.scoring_weights(), settings.experience_lexicon());

    let postings = read_postings(options.input.as_deref())?;
    info!(count = postings.len(), "loaded scraped postings");

    let outcome = ranker.filter_and_rank(postings, &profile)?;
    info!(
        total = outcome.summary.total_input,
        ranked = outcome.summary.ranked,
        excluded = outcome.summary.excluded,
        relevance_rate = outcome.summary.relevance_rate(),
        "filtering complete"
    );

    for (rank, scored) in outcome.ranked.iter().take(3).enumerate() {
        info!(
            rank = rank + 1,
            title = %scored.posting.title,
            company = %scored.posting.company,
            score = scored.relevance_score,
            "top match"
        );
    }

    let outreach = if options.outreach {
        match &settings.outreach {
            Some(outreach_settings) => {
                let seed = options.seed.unwrap_or(outreach_settings.seed);
                Some(
                    outcome
                        .ranked
                        .iter()
                        .enumerate()
                        .map(|(rank, scored)| {
                            render_for_ranked(&outreach_settings.sender, scored, seed, rank)
                        })
                        .collect(),
                )
            }
            None => {
                warn!("--outreach requested but no [outreach] section is configured");
                None
            }
        }
    } else {
        None
    };

    let run_output = RunOutput {
        ranked: outcome.ranked,
        summary: outcome.summary,
        outreach,
    };

    write_output(options.output.as_deref(), &run_output, options.pretty)?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("jobsift: {e}");
        std::process::exit(1);
    }
}
