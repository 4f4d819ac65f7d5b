use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use xcalc::{Calculator, Prompt, VariableSource};

/// xcalc evaluates an arithmetic expression in one variable, `x`.
///
/// Supported: numbers, `x`, `+ - * / ^`, unary minus, parentheses and the
/// functions sin, cos, tg, ctg and exp.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Value of `x`. When omitted and the expression uses `x`, it is read
    /// from standard input.
    #[arg(short, long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Do not print the postfix form of the expression.
    #[arg(short, long)]
    quiet: bool,

    /// The expression. When omitted, it is read from standard input.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let expression = match args.expression {
        Some(expression) => expression,
        None => match read_expression() {
            Ok(expression) => expression,
            Err(e) => {
                eprintln!("Failed to read the expression: {e}");
                return ExitCode::FAILURE;
            },
        },
    };

    match args.x {
        Some(x) => run(x, &expression, args.quiet),
        None => run(Prompt::stdio(), &expression, args.quiet),
    }
}

fn run(source: impl VariableSource, expression: &str, quiet: bool) -> ExitCode {
    let mut calculator = Calculator::new(source);
    if !quiet {
        calculator = calculator.on_postfix(|postfix| println!("Postfix: {postfix}"));
    }

    match calculator.calculate(expression) {
        Ok(value) => {
            println!("Result: {value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn read_expression() -> io::Result<String> {
    print!("Enter expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
