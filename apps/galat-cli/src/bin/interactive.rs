use std::env;

use futures::channel::mpsc as keys;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use galat_cli::render::render_results;
use galat_cli::{bootstrap, init_tracing};
use galat_hybrid::debounce::drive;
use galat_hybrid::{compute_results, DebounceEvent, Debouncer, HybridSearchEngine};

enum Input {
    Query(String),
    Tag(Option<String>),
    Quit,
}

fn parse_line(line: &str) -> Input {
    match line.strip_prefix(':') {
        Some("q" | "quit") => Input::Quit,
        Some(cmd) if cmd == "tag" || cmd.starts_with("tag ") => {
            let tag = cmd["tag".len()..].trim();
            Input::Tag((!tag.is_empty()).then(|| tag.to_string()))
        }
        _ => Input::Query(line.to_string()),
    }
}

/// Interactive search: every stdin line is the new content of the search box.
/// Lines go through the debouncer, so only values left alone for the quiet
/// period trigger a search.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let dataset_arg = env::args().nth(1);
    let (settings, dataset) = bootstrap(dataset_arg.as_deref())?;
    let engine = HybridSearchEngine::from_settings(&settings);

    println!("🔍 Galat interactive search");
    println!("==========================");
    println!("📊 {} entries, tags: {}", dataset.len(), dataset.tags().join(", "));
    println!("Type a query (empty line clears it), ':tag <name>' / ':tag' to filter, ':q' to quit.");

    let (keys_tx, keys_rx) = keys::unbounded::<String>();
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let debounce_ms = settings.debounce_ms;
    let driver = tokio::spawn(async move {
        let mut debouncer = Debouncer::from_millis(debounce_ms);
        drive(&mut debouncer, keys_rx, events_tx).await;
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut committed = String::new();
    let mut tag: Option<String> = None;

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) => match parse_line(&line) {
                    Input::Query(raw) => keys_tx.unbounded_send(raw)?,
                    Input::Tag(selected) => {
                        if let Some(t) = &selected {
                            if !dataset.has_tag(t) {
                                println!("⚠️  Unknown tag '{t}'");
                            }
                        }
                        tag = selected;
                        let results = compute_results(&engine, &dataset, &committed, tag.as_deref());
                        print!("{}", render_results(&committed, tag.as_deref(), &results));
                    }
                    Input::Quit => {
                        stdin_open = false;
                        keys_tx.close_channel();
                    }
                },
                None => {
                    stdin_open = false;
                    keys_tx.close_channel();
                }
            },
            event = events_rx.recv() => match event {
                Some(DebounceEvent::Searching(raw)) => println!("⏳ Recherche en cours... \"{raw}\""),
                Some(DebounceEvent::Committed(query)) => {
                    committed = query;
                    let results = compute_results(&engine, &dataset, &committed, tag.as_deref());
                    print!("{}", render_results(&committed, tag.as_deref(), &results));
                }
                None => break,
            }
        }
    }
    driver.await?;
    Ok(())
}
