use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use bind2json::compile_with_report;
use lyxkeys_core::engine::detect_conflicts;

#[derive(Parser, Debug)]
#[command(author, version, about = "LyX bind file to JSON binding table converter", long_about = None)]
struct Args {
    /// Input .bind file path
    input: PathBuf,

    /// Output JSON file path (defaults to input with .json extension)
    output: Option<PathBuf>,

    /// Report prefix conflicts and summary statistics; exit non-zero
    /// when conflicts exist
    #[arg(short, long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let output_path = args.output.clone().unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("json");
        path
    });

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let output = compile_with_report(&text);

    if args.verbose {
        for (key, binding) in output.table.iter() {
            println!("{key}  ({} -> {})", binding.source_text, binding.command_text);
        }
    }
    for skipped in &output.skipped {
        eprintln!("warning: skipped {skipped}");
    }

    let json = output.table.export_json()?;
    std::fs::write(&output_path, json)
        .with_context(|| format!("writing {}", output_path.display()))?;

    if args.verbose {
        println!(
            "Compiled {} bindings to {}",
            output.table.len(),
            output_path.display()
        );
    }

    if args.check {
        let conflicts = detect_conflicts(&output.table);
        let multi_step = output
            .table
            .bindings()
            .filter(|b| b.sequence.len() > 1)
            .count();
        println!(
            "{} bindings ({} multi-step, {} single-step), {} skipped lines, {} conflicts",
            output.table.len(),
            multi_step,
            output.table.len() - multi_step,
            output.skipped.len(),
            conflicts.len()
        );
        if !conflicts.is_empty() {
            for conflict in &conflicts {
                eprintln!("conflict: {conflict}");
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
