use clap::{Parser, Subcommand};
use namaste_core::{
    prepare, ChatMessage, Chatbot, CoreConfig, DiseaseCatalogue, PrepareOptions, SearchTerm,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "namaste")]
#[command(about = "NAMASTE disease lookup CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the source spreadsheet into the flat file the service loads
    Prepare {
        /// Source spreadsheet (defaults to NAMASTE_SOURCE_FILE or data/final_data.xlsx)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output CSV (defaults to NAMASTE_DATA_FILE or data/to_show.csv)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Column removed from the output
        #[arg(long, default_value = namaste_core::ICD11_COLUMN)]
        drop_column: String,
    },
    /// Search the prepared file by disease or Ayurveda name
    Search {
        /// Text to look for
        query: String,
        /// Prepared CSV (defaults to NAMASTE_DATA_FILE or data/to_show.csv)
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Ask the chatbot
    Chat {
        /// Message text
        message: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("namaste_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = CoreConfig::from_env()?;

    match cli.command {
        Some(Commands::Prepare {
            input,
            output,
            drop_column,
        }) => {
            let input = input.unwrap_or_else(|| cfg.source_file().to_path_buf());
            let output = output.unwrap_or_else(|| cfg.data_file().to_path_buf());
            let options = PrepareOptions {
                drop_column,
                ..PrepareOptions::default()
            };
            let summary = prepare(&input, &output, &options)?;
            println!(
                "Wrote {} rows ({}) to {}",
                summary.rows,
                summary.columns.join(", "),
                output.display()
            );
        }
        Some(Commands::Search { query, data }) => {
            let term = SearchTerm::new(&query).map_err(|_| "Query parameter required")?;
            let data = data.unwrap_or_else(|| cfg.data_file().to_path_buf());
            let catalogue = DiseaseCatalogue::load(&data)?;
            let results = catalogue.search(&term);
            if results.is_empty() {
                println!("No matching disease found.");
            } else {
                for record in results {
                    println!("{}", serde_json::to_string(record)?);
                }
            }
        }
        Some(Commands::Chat { message }) => {
            let bot = Chatbot::default();
            println!("{}", bot.reply(&ChatMessage::new(message)));
        }
        None => {
            println!("Use 'namaste --help' for commands");
        }
    }

    Ok(())
}
