use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sumlens_diff::diff;
use sumlens_overlay::{render_code, render_overlay, HighlightMode, PlainSpans};
use sumlens_protocol::{MergedTask, SummaryKey, TaskVersion};
use sumlens_resolve::{resolve_regions, OverlapPolicy};
use sumlens_store::{SampleStore, TaskStore};

mod render;
mod report;

#[derive(Parser)]
#[command(name = "sumlens")]
#[command(about = "Inspect code-edit benchmark fixtures: diffs, mapping regions, overlays", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Character-level diff of two files, with semantic cleanup
    Diff(DiffArgs),

    /// Resolve summary-to-code mapping regions for one task
    Regions(RegionsArgs),

    /// Render the diff-aware summary overlay for one task
    Show(ShowArgs),

    /// Summarize benchmark samples from a .jsonl fixture
    Samples(SamplesArgs),
}

#[derive(Args)]
struct DiffArgs {
    /// Old version of the file
    old: PathBuf,

    /// New version of the file
    new: PathBuf,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RegionsArgs {
    /// Path to the tasks-input.json fixture
    #[arg(long)]
    input: PathBuf,

    /// Path to the tasks-output.json fixture
    #[arg(long)]
    output: PathBuf,

    /// Task id (defaults to the first merged task)
    #[arg(long)]
    task: Option<String>,

    /// Summary variant, e.g. medium_structured
    #[arg(long, default_value = "medium_structured")]
    key: SummaryKey,

    /// Code version to resolve against
    #[arg(long, value_enum, default_value_t = VersionFlag::New)]
    version: VersionFlag,

    /// Allow mappings to share characters
    #[arg(long)]
    permissive: bool,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Path to the tasks-input.json fixture
    #[arg(long)]
    input: PathBuf,

    /// Path to the tasks-output.json fixture
    #[arg(long)]
    output: PathBuf,

    /// Task id (defaults to the first merged task)
    #[arg(long)]
    task: Option<String>,

    /// Summary variant, e.g. medium_structured
    #[arg(long, default_value = "medium_structured")]
    key: SummaryKey,

    /// Highlight only this mapping index at full intensity
    #[arg(long)]
    active: Option<usize>,

    /// Hide inactive mapping highlights instead of fading them
    #[arg(long)]
    spotlight: bool,

    /// Also render the annotated code for the chosen version
    #[arg(long)]
    code: bool,

    /// Code version for --code (the summary overlay always diffs old vs new)
    #[arg(long, value_enum, default_value_t = VersionFlag::New)]
    version: VersionFlag,
}

#[derive(Args)]
struct SamplesArgs {
    /// Path to the samples .jsonl fixture
    path: PathBuf,

    /// Show one sample in detail instead of the verdict table
    #[arg(long)]
    index: Option<usize>,

    /// Summary variant for the detail diff
    #[arg(long, default_value = "medium_structured")]
    key: SummaryKey,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum VersionFlag {
    Old,
    New,
}

impl VersionFlag {
    const fn as_str(self) -> &'static str {
        match self {
            VersionFlag::Old => "old",
            VersionFlag::New => "new",
        }
    }

    fn pick(self, task: &MergedTask) -> &TaskVersion {
        match self {
            VersionFlag::Old => &task.old,
            VersionFlag::New => &task.new,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --json keeps stdout machine-readable, so demote logs to stderr warnings
    let json_output = match &cli.command {
        Commands::Diff(args) => args.json,
        Commands::Regions(args) => args.json,
        Commands::Samples(args) => args.json,
        Commands::Show(_) => false,
    };
    let quiet = cli.quiet || json_output;

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Diff(args) => run_diff(args),
        Commands::Regions(args) => run_regions(args),
        Commands::Show(args) => run_show(args),
        Commands::Samples(args) => run_samples(args),
    }
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let old = fs::read_to_string(&args.old)
        .with_context(|| format!("reading {}", args.old.display()))?;
    let new = fs::read_to_string(&args.new)
        .with_context(|| format!("reading {}", args.new.display()))?;

    let ops = diff(&old, &new);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report::DiffReport::new(&ops))?
        );
    } else {
        let rendered = render::styled_diff(&ops);
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn run_regions(args: RegionsArgs) -> Result<()> {
    let store = TaskStore::load(&args.input, &args.output)?;
    let task = pick_task(&store, args.task.as_deref())?;
    let version = args.version.pick(task);

    let mappings = version.mappings.get(args.key);
    let policy = if args.permissive {
        OverlapPolicy::Permissive
    } else {
        OverlapPolicy::Strict
    };
    let regions = resolve_regions(&version.code, mappings, policy);

    if args.json {
        let out = report::RegionsReport::new(
            &task.id,
            args.key,
            args.version.as_str(),
            &regions,
            mappings,
        );
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        eprintln!(
            "task {} ({} code, {}): {} region(s) from {} mapping(s)",
            task.id,
            args.version.as_str(),
            args.key,
            regions.len(),
            mappings.len()
        );
        for region in &regions {
            let phrase = &mappings[region.mapping_index].summary_component;
            println!(
                "{:>5}..{:<5} #{} {}",
                region.start, region.end, region.mapping_index, phrase
            );
        }
    }
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let store = TaskStore::load(&args.input, &args.output)?;
    let task = pick_task(&store, args.task.as_deref())?;

    let mode = if args.spotlight {
        HighlightMode::Spotlight
    } else {
        HighlightMode::ShowAll
    };

    // Summary overlay: old vs new summary text, highlights from the new
    // version's mappings.
    let mappings = task.new.mappings.get(args.key);
    let tokens = render_overlay(
        task.old.summary.get(args.key),
        task.new.summary.get(args.key),
        mappings,
        args.active,
        mode,
    );
    println!("{}", render::styled_overlay(&tokens));

    if args.code {
        let version = args.version.pick(task);
        let code_mappings = version.mappings.get(args.key);
        let code_tokens =
            render_code(&version.code, code_mappings, args.active, mode, &PlainSpans);
        println!();
        let rendered = render::styled_code(&code_tokens);
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn run_samples(args: SamplesArgs) -> Result<()> {
    let store = SampleStore::load(&args.path)?;

    if let Some(index) = args.index {
        let sample = store.samples().get(index).with_context(|| {
            format!("sample index {index} out of range ({} loaded)", store.len())
        })?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(sample)?);
            return Ok(());
        }

        eprintln!("instruction: {}", sample.instruction);
        eprintln!("direct: {}", render::verdict(sample.result_direct));
        for key in SummaryKey::ALL {
            eprintln!("{key}: {}", render::verdict(sample.result_summary.get(key)));
        }
        eprintln!();
        eprintln!("diff buggy -> {} output:", args.key);

        let ops = diff(&sample.buggy_code, sample.output_summary.get(args.key));
        let rendered = render::styled_diff(&ops);
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(store.samples())?);
        return Ok(());
    }

    eprintln!("{} sample(s)", store.len());
    for (i, sample) in store.samples().iter().enumerate() {
        let summary_verdicts: Vec<String> = SummaryKey::ALL
            .iter()
            .map(|&key| render::verdict_short(sample.result_summary.get(key)))
            .collect();
        println!(
            "{:>4}  direct {:<4}  summary [{}]  {}",
            i,
            render::verdict_short(sample.result_direct),
            summary_verdicts.join(" "),
            truncate(&sample.instruction, 60)
        );
    }
    Ok(())
}

fn pick_task<'a>(store: &'a TaskStore, id: Option<&str>) -> Result<&'a MergedTask> {
    match id {
        Some(id) => store
            .by_id(id)
            .with_context(|| format!("no task with id {id:?}")),
        None => store.tasks().first().context("no tasks merged"),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push('…');
    }
    out
}
