mod cli;
mod tokenize;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Commands, Format};
use env_logger::Builder;
use log::LevelFilter;
use std::io::Read;
use trmorph::format::DefaultFormatter;
use trmorph::Analyzer;

#[macro_use]
extern crate log;

fn main() -> Result<()> {
    let cli = cli::Args::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new().filter_level(log_level).init();

    let analyzer = Analyzer::with_bundled_dictionary().context("failed to build analyzer")?;

    let out = match cli.command.clone() {
        Commands::Analyze { text } => {
            let text = read_text(text)?;
            let words = tokenize::tokenize(&text);
            debug!("tokenized {} words", words.len());
            render_words(&analyzer, &words, cli.format, true)
        }
        Commands::Lemmatize { text } => {
            let text = read_text(text)?;
            let words = tokenize::tokenize(&text);
            debug!("tokenized {} words", words.len());
            render_words(&analyzer, &words, cli.format, false)
        }
    };

    println!("{out}");
    Ok(())
}

fn read_text(text: Option<String>) -> Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn render_words(analyzer: &Analyzer, words: &[String], format: Format, full: bool) -> String {
    let mut entries = Vec::new();
    for word in words {
        let analyses = analyzer.analyze(word);
        if analyses.is_empty() {
            warn!("no analysis for {word:?}");
        }
        if full {
            let rendered: Vec<String> = analyses
                .iter()
                .map(|a| DefaultFormatter::format(a, analyzer.lexicon()))
                .collect();
            entries.push((word.clone(), rendered));
        } else {
            let lemmas: Vec<String> = analyses
                .iter()
                .filter_map(|a| {
                    analyzer
                        .lexicon()
                        .get_by_id(&a.dict_item_id)
                        .map(|i| i.lemma.clone())
                })
                .collect();
            entries.push((word.clone(), lemmas));
        }
    }

    match format {
        Format::Json => serde_json::to_string_pretty(
            &entries
                .into_iter()
                .map(|(word, values)| serde_json::json!({"word": word, "results": values}))
                .collect::<Vec<_>>(),
        )
        .unwrap_or_default(),
        Format::Text => entries
            .into_iter()
            .map(|(word, values)| {
                if values.is_empty() {
                    format!("{word}\tUNKNOWN")
                } else {
                    format!("{word}\t{}", values.join(" | "))
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
