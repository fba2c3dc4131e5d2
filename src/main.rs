use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use trifold::cli::{encrypt_to_file, generate_key, EncryptOptions, KeygenOptions};
use trifold::error::TrifoldError;
use trifold::key::SubstitutionKey;

/// Version info from build.rs
const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD: &str = env!("TRIFOLD_BUILD");
const PROFILE: &str = env!("TRIFOLD_PROFILE");
const GIT_HASH: &str = env!("TRIFOLD_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "trifold")]
#[command(author, about = "Classical cipher pipeline: substitution plus column and row transposition", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a substitution key and two transpositions
    #[command(alias = "e")]
    Encrypt {
        /// Text to encrypt
        text: Option<String>,

        /// Read the plaintext from a file instead
        #[arg(long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Ciphertext destination
        #[arg(long, default_value = "zaszyfrowany.txt")]
        output: PathBuf,

        /// Write the substitution key as JSON
        #[arg(long)]
        key_file: Option<PathBuf>,

        /// Use a fixed substitution key: the image of A-Z as 26 letters
        #[arg(long, value_parser = parse_key)]
        key: Option<SubstitutionKey>,

        /// Fixed column transposition width (2-10, random by default)
        #[arg(long)]
        column_width: Option<usize>,

        /// Fixed row transposition width (2-10, random by default)
        #[arg(long)]
        row_width: Option<usize>,

        /// Seed the random draws for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a substitution key without encrypting anything
    #[command(alias = "k")]
    Keygen {
        /// Write the key as JSON
        #[arg(long)]
        key_file: Option<PathBuf>,

        /// Seed the generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_key(s: &str) -> Result<SubstitutionKey, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn read_plaintext(text: Option<String>, input: Option<&Path>) -> trifold::Result<String> {
    if let Some(text) = text {
        Ok(text)
    } else if let Some(path) = input {
        Ok(std::fs::read_to_string(path)?)
    } else {
        Err(TrifoldError::InputRequired)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("trifold {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            text,
            input,
            output,
            key_file,
            key,
            column_width,
            row_width,
            seed,
        } => {
            let options = EncryptOptions {
                key,
                column_width,
                row_width,
                seed,
                key_file,
            };

            read_plaintext(text, input.as_deref()).and_then(|plaintext| {
                let outcome = encrypt_to_file(&plaintext, &output, &options)?;
                println!("Original text: {}", plaintext);
                println!();
                println!("Ciphertext: {}", outcome.ciphertext);
                println!();
                println!(
                    "Column width: {}, row width: {}",
                    outcome.column_width, outcome.row_width
                );
                println!("Substitution key:");
                println!("{}", outcome.key);
                println!("Ciphertext written to {}", output.display());
                Ok(())
            })
        }

        Commands::Keygen { key_file, seed } => {
            let options = KeygenOptions { seed };

            match generate_key(key_file.as_deref(), &options) {
                Ok(key) => {
                    println!("Substitution key:");
                    println!("{}", key);
                    if let Some(path) = key_file {
                        println!("Key written to {}", path.display());
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
