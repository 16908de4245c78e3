//! Prints one recommendation as JSON. Prompts on stdin for anything not given as a flag.

use std::io::{self, BufRead, Write};

use clap::Parser;
use cinemood_api::{api::AppState, config::Config};

#[derive(Debug, Parser)]
#[command(name = "recommend", about = "Recommend movies by emotion and language")]
struct Args {
    /// Genre to recommend, e.g. action
    #[arg(short, long)]
    emotion: Option<String>,

    /// Language of the movies, e.g. telugu
    #[arg(short, long)]
    language: Option<String>,

    /// Serve curated titles without fetching the search page
    #[arg(long, env = "RECOMMEND_OFFLINE")]
    offline: bool,
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cinemood_api::init_tracing();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if args.offline {
        config.scrape_enabled = false;
    }
    let state = AppState::from_config(&config)?;

    let emotion = match args.emotion {
        Some(emotion) => emotion,
        None => prompt("Emotion (genre)")?,
    };
    let language = match args.language {
        Some(language) => language,
        None => prompt("Language")?,
    };

    let result = state.recommender.recommend(&emotion, &language).await;
    let output = match result {
        Ok(result) => serde_json::to_string_pretty(&result)?,
        Err(e) => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("Failed to get movie recommendations: {}", e)
        }))?,
    };
    println!("{}", output);

    Ok(())
}
