use std::env;

use galat_cli::render::{render_json, render_results};
use galat_cli::{bootstrap, init_tracing};
use galat_hybrid::{compute_results, HybridSearchEngine};

struct Args {
    cmd: String,
    positional: Vec<String>,
    tag: Option<String>,
    dataset: Option<String>,
    json: bool,
}

fn usage(prog: &str) -> ! {
    eprintln!("Usage: {prog} <search|browse|tags> [args...] [--tag <tag>] [--dataset <path>] [--json]");
    eprintln!("  {prog} search \"logiciel libre\" --tag Outils");
    eprintln!("  {prog} browse Art");
    eprintln!("  {prog} tags");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        usage(&prog);
    }
    let cmd = args.remove(0);
    let mut parsed = Args { cmd, positional: Vec::new(), tag: None, dataset: None, json: false };
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--tag" => parsed.tag = Some(it.next().unwrap_or_else(|| usage(&prog))),
            "--dataset" => parsed.dataset = Some(it.next().unwrap_or_else(|| usage(&prog))),
            _ => parsed.positional.push(arg),
        }
    }
    parsed
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = parse_args();
    let (settings, dataset) = bootstrap(args.dataset.as_deref())?;
    tracing::debug!(command = %args.cmd, tag = ?args.tag, json = args.json, "galat");
    let engine = HybridSearchEngine::from_settings(&settings);

    let (query, tag) = match args.cmd.as_str() {
        "search" => {
            let query = args.positional.join(" ");
            if query.trim().is_empty() {
                eprintln!("Usage: galat search \"<query>\" [--tag <tag>]");
                std::process::exit(1);
            }
            (query, args.tag)
        }
        "browse" => (String::new(), args.positional.first().cloned().or(args.tag)),
        "tags" => {
            for tag in dataset.tags() {
                let count = dataset.entries().iter().filter(|e| &e.tag == tag).count();
                println!("{tag}\t{count}");
            }
            return Ok(());
        }
        other => {
            eprintln!("Unknown command: {other}");
            std::process::exit(1);
        }
    };

    let results = compute_results(&engine, &dataset, &query, tag.as_deref());
    if args.json {
        println!("{}", render_json(&results)?);
    } else {
        print!("{}", render_results(&query, tag.as_deref(), &results));
    }
    Ok(())
}
