//! Run segmentation over a transcription response and print the candidates.
//!
//! ```sh
//! cargo run -p clipper --example preview
//! cargo run -p clipper --example preview -- response.json --min 15 --max 45
//! ```

use std::path::PathBuf;

use clap::Parser;
use clipper::{CandidateOptions, candidates_from_utterances};
use reel_stt_interface::listen::ListenResponse;

#[derive(Parser)]
#[command(about = "Preview clip candidates for a prerecorded transcription response")]
struct Args {
    /// Response JSON path. Defaults to the embedded podcast fixture.
    response: Option<PathBuf>,

    #[arg(long, default_value_t = 10.0)]
    min: f64,

    #[arg(long, default_value_t = 30.0)]
    ideal: f64,

    #[arg(long, default_value_t = 60.0)]
    max: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let json = match &args.response {
        Some(path) => std::fs::read_to_string(path)?,
        None => reel_data::podcast_en::LISTEN_JSON.to_string(),
    };
    let response: ListenResponse = serde_json::from_str(&json)?;

    let options = CandidateOptions::new(args.min, args.ideal, args.max);
    let candidates = candidates_from_utterances(response.utterances(), &options)?;

    println!(
        "{} candidate(s) from {} utterance(s)\n",
        candidates.len(),
        response.utterances().len()
    );

    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "#{i:<3} {} .. {}  ({:.1}s, {} words)",
            fmt_ms(candidate.start_ms),
            fmt_ms(candidate.end_ms),
            (candidate.end_ms - candidate.start_ms) as f64 / 1000.0,
            candidate.word_count,
        );
        for chunk in &candidate.chunks {
            println!("     {} | {}", fmt_ms(chunk.start_ms), chunk.text);
        }
        println!();
    }

    Ok(())
}

fn fmt_ms(ms: i64) -> String {
    format!("{:02}:{:02}.{:03}", ms / 60_000, (ms / 1000) % 60, ms % 1000)
}
