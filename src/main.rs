#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use scrabble::{
    init_logging, load_dictionary, load_letter_table, ui, CliPlayer, Game, LetterTable, MoveSource,
};

#[derive(Parser)]
#[command(author, version, about = "Console Scrabble for several players at one keyboard", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a hot-seat game on this terminal.
    Play {
        #[arg(long = "player", help = "Player name; repeat for each player (asked interactively if omitted)")]
        players: Vec<String>,
        #[arg(long, help = "Letter table file (`LETTER COUNT POINTS` per line); built-in French table if omitted")]
        letters: Option<PathBuf>,
        #[arg(long, default_value = "resources/words.txt")]
        dictionary: PathBuf,
        #[arg(long, help = "Fix RNG seed for reproducible tile draws (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the final standings as JSON")]
        json: bool,
    },
    /// Check whether a word is in the dictionary.
    Check {
        word: String,
        #[arg(long, default_value = "resources/words.txt")]
        dictionary: PathBuf,
    },
}

/// Console seat. With `--json` the prompts go to stderr and stdout carries
/// only the summary.
#[cfg(feature = "std")]
fn seat(json: bool) -> CliPlayer {
    if json {
        CliPlayer::new().with_output(std::io::stderr())
    } else {
        CliPlayer::new()
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            players,
            letters,
            dictionary,
            seed,
            json,
        } => {
            let table = match letters {
                Some(path) => load_letter_table(path)?,
                None => LetterTable::standard(),
            };
            let dict = load_dictionary(&dictionary)?;
            let names = if players.is_empty() {
                match seat(json).read_player_names() {
                    Some(names) => names,
                    None => return Ok(()),
                }
            } else {
                players
            };

            if let Some(s) = seed.filter(|_| !json) {
                println!("Using fixed seed: {} (tile draws will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let mut game = Game::new(table, dict, &names);
            let mut sources: Vec<Box<dyn MoveSource>> = names
                .iter()
                .map(|_| Box::new(seat(json)) as Box<dyn MoveSource>)
                .collect();
            let summary = game.run(&mut rng, &mut sources);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                ui::print_board(game.board());
                ui::print_summary(&summary);
            }
        }
        Commands::Check { word, dictionary } => {
            let dict = load_dictionary(&dictionary)?;
            let word = word.trim().to_uppercase();
            if dict.contains(&word) {
                println!("{} is playable", word);
            } else {
                println!("{} is not in the dictionary", word);
            }
        }
    }
    Ok(())
}
