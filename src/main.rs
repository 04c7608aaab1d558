use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use askline::cli::answers;
use askline::cli::ask::{self, AskRun};
use askline::models::Questionnaire;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,

    /// Log level
    #[arg(long, default_value = "INFO")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the questions from a file and record the answers
    Ask {
        /// Path to the question file
        file: PathBuf,
        /// Run name (generated when omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// Check that a question file is well formed
    Check {
        /// Path to the question file
        file: PathBuf,
    },
    /// Print the rendered prompts without asking anything
    Render {
        /// Path to the question file
        file: PathBuf,
    },
    /// Manage recorded answers
    Answers {
        #[command(subcommand)]
        command: AnswersCommands,
    },
}

#[derive(Subcommand)]
enum AnswersCommands {
    /// List recorded runs
    List,
    /// Delete old answer files
    Clear {
        /// Keep this many entries
        #[arg(long, default_value = "3")]
        keep: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .init();

    if cli.version {
        print_version();
        return Ok(());
    }

    match cli.command {
        Some(Commands::Ask { file, name }) => {
            let questionnaire = Questionnaire::load(&file)?;
            let mut run = AskRun::new(questionnaire, name);
            run.run()?;
        }
        Some(Commands::Check { file }) => {
            ask::check(&file)?;
        }
        Some(Commands::Render { file }) => {
            ask::render(&file)?;
        }
        Some(Commands::Answers { command }) => match command {
            AnswersCommands::List => answers::list()?,
            AnswersCommands::Clear { keep } => answers::clear(keep)?,
        },
        None => {
            println!("{}", <Cli as CommandFactory>::command().render_help());
        }
    }

    Ok(())
}

fn print_version() {
    println!(
        "{}: {}",
        "askline".green(),
        env!("CARGO_PKG_VERSION").cyan().bold()
    );
}
