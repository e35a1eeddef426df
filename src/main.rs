use clap::{Parser as ClapParser, Subcommand};
use sift_lang::cli::{self, CheckOptions, CheckResult, CliError};
use sift_lang::{Expression, Tokenizer};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "sift")]
#[command(about = "Sift - filter JSON rows with infix boolean/comparison expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an expression and filter JSON rows with it
    Check {
        /// The filter expression, e.g. '(>=18 & <65) | admin'
        expression: String,

        /// JSON rows (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Column the leaf terms apply to
        #[arg(short, long, default_value_t = 0)]
        column: usize,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't filter
        #[arg(long)]
        syntax_only: bool,
    },

    /// Dump the raw token stream of an expression
    Tokens {
        /// The expression to tokenize
        expression: String,
    },

    /// Dump the compiled RPN sequence of an expression
    Rpn {
        /// The expression to compile
        expression: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            input,
            column,
            pretty,
            syntax_only,
        } => run_check(expression, input, column, pretty, syntax_only),
        Commands::Tokens { expression } => run_tokens(&expression),
        Commands::Rpn { expression } => run_rpn(&expression),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    expression: String,
    input: Option<String>,
    column: usize,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        input,
        column,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Matched(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }
            .map_err(CliError::Json)?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_tokens(expression: &str) -> Result<(), CliError> {
    // Raw token stream only; works even when the expression does not compile
    let registry = cli::default_registry();
    for token in Tokenizer::new(expression, &registry) {
        let token = token.map_err(CliError::Expression)?;
        println!("{:>4}  {}", token.pos, token);
    }
    Ok(())
}

fn run_rpn(expression: &str) -> Result<(), CliError> {
    let registry = cli::default_registry();
    let expression = Expression::compile(expression, &registry)?;
    for token in expression.rpn() {
        println!("{:>4}  {}", token.pos, token);
    }
    Ok(())
}
