use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use xspf_exporter::probe::SymphoniaProbe;
use xspf_exporter::xspf::format_duration;
use xspf_exporter::{GeneratorConfig, PlaylistGenerator, RootOutcome, RootReport};

#[derive(Parser, Debug)]
#[command(name = "xspf-exporter")]
#[command(about = "Generate VLC-compatible XSPF playlists from folders of videos", long_about = None)]
struct Args {
    /// Root folders to scan; each one gets a playlist written inside it
    #[arg(required = true)]
    roots: Vec<String>,

    /// Playlist file name (default: each root folder's own name)
    #[arg(short = 'o', long)]
    output_name: Option<String>,

    /// Leave existing playlist files untouched instead of regenerating them
    #[arg(long)]
    skip_existing: bool,

    /// Per-file probe budget in seconds, 0 to disable (default: 30)
    #[arg(long, default_value = "30")]
    probe_timeout: u64,

    /// Print the batch report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the root paths
    let roots: Vec<PathBuf> = args
        .roots
        .iter()
        .map(|root| PathBuf::from(shellexpand::tilde(root).as_ref()))
        .collect();

    let timeout = (args.probe_timeout > 0).then(|| Duration::from_secs(args.probe_timeout));

    let mut config = GeneratorConfig::new()
        .with_skip_existing(args.skip_existing)
        .with_probe_timeout(timeout);
    if let Some(name) = args.output_name {
        config = config.with_output_name(name);
    }

    let generator = PlaylistGenerator::new(config, SymphoniaProbe::new());
    let reports = generator.generate(&roots)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            summarize(report);
        }
    }

    let failed = reports
        .iter()
        .filter(|report| report.outcome == RootOutcome::Failed)
        .count();
    if failed > 0 {
        bail!("{} of {} root(s) failed", failed, reports.len());
    }

    log::info!("✅ All playlists written!");
    Ok(())
}

/// One log line per root
fn summarize(report: &RootReport) {
    match report.outcome {
        RootOutcome::Success => log::info!(
            "✅ {:?}: {} tracks in {} folders, total duration {}",
            report.root,
            report.tracks,
            report.folders,
            format_duration(report.total_duration_ms)
        ),
        RootOutcome::Partial => log::warn!(
            "⚠️ {:?}: {} tracks written with {} warning(s)",
            report.root,
            report.tracks,
            report.diagnostics.len()
        ),
        RootOutcome::Skipped => log::info!("Skipped {:?}: playlist already exists", report.root),
        RootOutcome::Failed => match &report.error {
            Some(err) => log::error!("❌ {:?}: {}", report.root, err),
            None => log::error!("❌ {:?}: failed", report.root),
        },
    }
}
