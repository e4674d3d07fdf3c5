use crossterm::style::Stylize;
use emoji_core::persistence::save_snapshot;
use emoji_core::{EmojiFormatter, KnownEmojiSet};
use std::error::Error;
use std::io::{stdin, stdout, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const SNAPSHOT_PATH: &str = "emoji_set.bin";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let set = KnownEmojiSet::from_snapshot_or_bundled(Path::new(SNAPSHOT_PATH))?;
    let formatter = EmojiFormatter::new(set);

    println!("Emoji tool. {} known emoji. Type 'exit' to quit.", formatter.known_set().len());
    println!("Commands: :strip, :only, :dedupe, :tones, :json <text>; :known <emoji>. Anything else is analysed.");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(['\r', '\n']);

        match line.split_once(' ') {
            _ if line == "exit" => break,
            Some((":strip", text)) => println!("{}", formatter.remove_from_text(text)),
            Some((":only", text)) => println!("{}", formatter.strip_all_but_emojis(text)),
            Some((":dedupe", text)) => println!("{}", formatter.remove_duplicates(text)),
            Some((":tones", text)) => {
                println!("{}", formatter.replace_emojis(text, |e| formatter.normalize_skin_tones(e)))
            }
            Some((":json", text)) => {
                let report = serde_json::json!({
                    "tokens": formatter.extract_emoji(text),
                    "frequency": formatter.emoji_frequency_sorted(text),
                });
                println!("{}", report);
            }
            Some((":known", emoji)) => {
                if formatter.known_set().contains(emoji) {
                    println!("{}", "known".green());
                } else {
                    println!("{}", "not a known emoji".red());
                }
            }
            _ => print_analysis(&formatter, line),
        }
    }

    println!("\nSaving snapshot...");
    if let Err(e) = save_snapshot(formatter.known_set(), Path::new(SNAPSHOT_PATH)) {
        eprintln!("[ERROR] Could not save snapshot: {}", e);
    } else {
        println!("Snapshot saved to '{}'", SNAPSHOT_PATH);
    }
    Ok(())
}

fn print_analysis(formatter: &EmojiFormatter, line: &str) {
    if !formatter.has_emoji(line) {
        println!("{}", "No emoji found.".dark_grey());
        return;
    }

    let highlighted = formatter.replace_emojis(line, |e| e.on_dark_blue().to_string());
    println!("{}", highlighted);
    println!(
        "length: {} with emoji, {} without{}",
        formatter.length_with_emojis(line),
        formatter.text_length(line),
        if formatter.is_only_emoji(line) { " (emoji only)" } else { "" }
    );

    println!("\n{}", "Tokens:".bold());
    for token in formatter.extract_emoji(line) {
        println!("  {} [{}, {})", token.cluster, token.start, token.end);
    }

    println!("\n{}", "Frequency:".bold());
    for (i, entry) in formatter.emoji_frequency_sorted(line).iter().enumerate() {
        println!("  {}: {} x{}", i + 1, entry.cluster, entry.count);
    }
}
