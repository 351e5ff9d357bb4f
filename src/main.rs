use clap::{ArgAction, Parser as ClapParser, Subcommand};
use dbquery::TranslateOptions;
use dbquery::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};
use tracing::Level;

#[derive(ClapParser)]
#[command(name = "dbquery")]
#[command(about = "dbquery - Translate bracketed filter expressions into document query filters")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and translate a filter expression
    Check {
        /// The filter expression (reads from stdin if not provided)
        expression: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't compile
        #[arg(long)]
        syntax_only: bool,

        /// Comma-separated columns the filter may reference
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Maximum parenthesis nesting
        #[arg(long, default_value_t = TranslateOptions::default().max_depth)]
        max_depth: usize,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'dbquery docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check {
            expression,
            pretty,
            syntax_only,
            columns,
            max_depth,
        } => run_check(expression, pretty, syntax_only, columns, max_depth),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    expression: Option<String>,
    pretty: bool,
    syntax_only: bool,
    columns: Vec<String>,
    max_depth: usize,
) -> Result<(), CliError> {
    let expression = match expression {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = CheckOptions {
        expression,
        columns,
        syntax_only,
        translate: TranslateOptions::default().with_max_depth(max_depth),
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}
