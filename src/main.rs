use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use kbc_quiz::terminal::{self, ColorChoice};
use kbc_quiz::{Quiz, logging};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with questions and prizes (defaults to the built-in set)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Seed for the lifeline randomness
    #[arg(long)]
    seed: Option<u64>,

    /// How long the friend thinks before answering, in milliseconds
    #[arg(long, default_value_t = 1200)]
    phone_pause_ms: u64,

    /// Start straight at the first question
    #[arg(long)]
    skip_intro: bool,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(args.verbose, args.color.enabled_for_logs());

    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path),
        None => Ok(Quiz::builtin()),
    };
    let mut quiz = match quiz {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error loading quiz: {}", e);
            std::process::exit(1);
        }
    };

    info!(questions = quiz.content().playable(), "content loaded");

    quiz = quiz
        .with_phone_pause(Duration::from_millis(args.phone_pause_ms))
        .with_intro(!args.skip_intro)
        .with_color(args.color);
    if let Some(seed) = args.seed {
        quiz = quiz.with_seed(seed);
    }

    // The game blocks on stdin, so it runs off the async runtime and races
    // against Ctrl+C.
    let game = tokio::task::spawn_blocking(move || quiz.run());

    tokio::select! {
        joined = game => match joined {
            Ok(Ok(_report)) => std::process::exit(0),
            Ok(Err(e)) => {
                eprintln!("Error running quiz: {}", e);
                std::process::exit(1);
            }
            Err(e) => {
                error!(error = %e, "game thread failed");
                eprintln!("Error running quiz: {}", e);
                std::process::exit(1);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            let _ = terminal::restore(args.color);
            println!("\nExiting... bye!");
            std::process::exit(0);
        }
    }
}
