use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use surge_client::LoadTestClient;
use surge_core::{
    ChartSeries, CountdownState, LoadTestPage, LoadTestResult, SnackbarVariant, SurgeConfig,
    SurgeError,
};
use tracing_subscriber::EnvFilter;

const BAR_WIDTH: f64 = 40.0;

#[derive(Parser)]
#[command(name = "surge")]
#[command(version, about = "Surge - submit load tests and chart the results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a load test against a target URL
    Run {
        /// URL for the load test
        #[arg(short, long)]
        url: String,

        /// Queries per second
        #[arg(short, long, default_value = "0")]
        qps: u32,

        /// Concurrent requests
        #[arg(short = 'c', long = "concurrency", default_value = "0")]
        c: u32,

        /// Duration in minutes
        #[arg(short = 't', long = "duration", default_value = "1")]
        t: u32,

        /// Load-test backend (defaults to SURGE_BACKEND_URL)
        #[arg(short, long)]
        backend: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            url,
            qps,
            c,
            t,
            backend,
            output,
        } => cmd_run(url, qps, c, t, backend, output).await?,
    }

    Ok(())
}

async fn cmd_run(
    url: String,
    qps: u32,
    c: u32,
    t: u32,
    backend: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let mut config = SurgeConfig::from_env()?;
    if let Some(backend) = backend {
        config.backend.url = backend;
    }

    let mut page = LoadTestPage::new();
    page.form.url = url;
    page.form.qps = qps;
    page.form.c = c;
    page.form.t = t;

    let Some(request) = page.submit() else {
        return Err(SurgeError::EmptyUrl.into());
    };

    let client = LoadTestClient::from_config(&config.backend)?;

    eprintln!();
    eprintln!("Running load test...");
    eprintln!("  Target:      {}", request.url);
    eprintln!("  QPS:         {}", request.qps);
    eprintln!("  Concurrency: {}", request.c);
    eprintln!("  Duration:    {} min", request.t);
    eprintln!("  Backend:     {}", client.endpoint());
    eprintln!();

    let mut countdown = page.countdown();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let run = client.run(&request);
    tokio::pin!(run);

    let outcome = loop {
        tokio::select! {
            res = &mut run => break res,
            _ = ticker.tick(), if page.timer_dialog_open => {
                eprint!("\r  Time remaining: {}", countdown.label());
                if countdown.tick(Duration::from_secs(1)) == CountdownState::Complete {
                    page.close_timer_dialog();
                    eprint!("\r  Waiting for results...  ");
                }
            }
        }
    };
    eprintln!();

    match outcome {
        Ok(result) => page.complete(result),
        Err(e) => page.fail(e),
    }

    if !page.snackbar.open {
        anyhow::bail!("Load test backend returned no result");
    }
    if page.snackbar.variant == SnackbarVariant::Error {
        anyhow::bail!("{}", page.snackbar.message);
    }
    eprintln!("  {}", page.snackbar.message);
    eprintln!();

    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page.result)?),
        OutputFormat::Table => print_results(&page.result, &page.chart()),
    }

    Ok(())
}

fn print_results(result: &LoadTestResult, series: &ChartSeries) {
    println!("Results:");
    println!("{:-<60}", "");
    if series.is_empty() {
        println!("  No histogram data ({} qps)", result.actual_qps);
        println!();
        return;
    }

    println!("  {}", series.title);
    for line in &series.summary {
        println!("  {}", line);
    }
    println!();

    println!("  {:>20}  {:>8}  {:>6}", "Latency (ms)", "Count", "Cum %");
    for bar in &series.bars {
        let width = series.bar_height(bar.count, BAR_WIDTH).round() as usize;
        println!(
            "  {:>9.3}-{:<10.3}  {:>8}  {:>6.1}  {}",
            bar.start_ms,
            bar.end_ms,
            bar.count,
            bar.percent,
            "#".repeat(width)
        );
    }
    println!();

    if !series.percentiles.is_empty() {
        println!("  Percentiles:");
        for p in &series.percentiles {
            println!("    p{:<6} {:.3} ms", p.percentile, p.value_ms);
        }
        println!();
    }
}
