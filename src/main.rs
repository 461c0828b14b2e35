use clap::{Args, Parser as ClapParser, Subcommand};
use el_compiler::CompilerOptions;
use el_compiler::cli::{self, CheckOptions, CliError, CompileOptions, OutputFormat};
use el_compiler::logger::{self, LogLevel};
use el_compiler::options::{DEFAULT_EMPTY_HELPER, DEFAULT_MAX_DEPTH};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "elc")]
#[command(about = "elc - compile #{...} and ${...} template expressions into expression trees")]
#[command(version)]
struct Cli {
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CompilerArgs {
    /// Deepest expression nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Helper called for `empty x`
    #[arg(long, default_value = DEFAULT_EMPTY_HELPER)]
    empty_helper: String,
}

impl CompilerArgs {
    fn into_options(self) -> CompilerOptions {
        CompilerOptions::default()
            .with_max_depth(self.max_depth)
            .with_empty_helper(self.empty_helper)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compile template text and print the expression tree
    Compile {
        /// Template text (reads from stdin if not provided)
        input: Option<String>,

        /// Print the tree as JSON instead of source text
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// On error, emit the input as a string constant
        #[arg(long)]
        fallback: bool,

        #[command(flatten)]
        compiler: CompilerArgs,
    },

    /// Only validate syntax, don't translate
    Check {
        /// Template text (reads from stdin if not provided)
        input: Option<String>,

        #[command(flatten)]
        compiler: CompilerArgs,
    },

    /// Print the token stream
    Tokens {
        /// Template text (reads from stdin if not provided)
        input: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'elc docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init_with_level(LogLevel::from_verbosity(cli.verbose));

    let result = match cli.command {
        Commands::Compile {
            input,
            json,
            pretty,
            fallback,
            compiler,
        } => run_compile(input, json, pretty, fallback, compiler),
        Commands::Check { input, compiler } => run_check(input, compiler),
        Commands::Tokens { input } => run_tokens(input),
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

/// Use the argument, or stdin when it is piped.
fn read_input(input: Option<String>) -> Result<String, CliError> {
    match input {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            // Drop the newline a shell pipe adds
            if buffer.ends_with('\n') {
                buffer.pop();
                if buffer.ends_with('\r') {
                    buffer.pop();
                }
            }
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_compile(
    input: Option<String>,
    json: bool,
    pretty: bool,
    fallback: bool,
    compiler: CompilerArgs,
) -> Result<(), CliError> {
    let format = match (json, pretty) {
        (false, _) => OutputFormat::Source,
        (true, false) => OutputFormat::Json,
        (true, true) => OutputFormat::JsonPretty,
    };

    let options = CompileOptions {
        input: read_input(input)?,
        format,
        fallback,
        compiler: compiler.into_options(),
    };

    println!("{}", cli::execute_compile(&options)?);
    Ok(())
}

fn run_check(input: Option<String>, compiler: CompilerArgs) -> Result<(), CliError> {
    let options = CheckOptions {
        input: read_input(input)?,
        compiler: compiler.into_options(),
    };

    let items = cli::execute_check(&options)?;
    println!("Syntax is valid ({} item{})", items, if items == 1 { "" } else { "s" });
    Ok(())
}

fn run_tokens(input: Option<String>) -> Result<(), CliError> {
    for line in cli::execute_tokens(&read_input(input)?)? {
        println!("{}", line);
    }
    Ok(())
}
