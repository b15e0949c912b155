use std::fs;
use std::rc::Rc;

use clap::{Parser as ArgParser, ValueEnum};
use mmm::error::ParseError;
use mmm::interpreter::lexer::{Lexer, TokenKind};
use mmm::interpreter::parser::Parser;
use mmm::interpreter::value::env::Env;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// mmm is a small, dynamically-typed scripting language with first-class
/// functions.
#[derive(ArgParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mmm to read the script from a file instead of the argument
    /// itself.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the final value of the script to stdout once it has
    /// run.
    #[arg(short, long)]
    pipe_mode: bool,

    /// What the interactive session prints for each line.
    #[arg(short, long, value_enum, default_value_t = Mode::Eval)]
    mode: Mode,

    /// The script to run. Without one, mmm starts an interactive session.
    script: Option<String>,
}

/// The interactive session's output for each submitted line.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum Mode {
    /// Evaluate the line and print the resulting value.
    Eval,
    /// Print the parsed program in its canonical form.
    Ast,
    /// Print the token stream.
    Tokens,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!(
                        "Failed to read the input file '{contents}'. Perhaps this file does not exist?"
                    );
                    std::process::exit(1);
                })
            } else {
                contents
            };
            run_script(&script, args.pipe_mode);
        }
        None => repl(args.mode),
    }
}

fn run_script(script: &str, pipe_mode: bool) {
    let env = Env::new();
    match mmm::interpret(script, &env) {
        Ok(Some(value)) if value.is_error() => eprintln!("{value}"),
        Ok(Some(value)) => {
            if pipe_mode {
                println!("{value}");
            }
        }
        Ok(None) => (),
        Err(errors) => {
            for error in errors {
                eprintln!("{error}");
            }
        }
    }
}

fn repl(mode: Mode) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            std::process::exit(1);
        }
    };

    let env = Env::new();
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                run_line(&line, &env, mode);
            }
            Err(ReadlineError::Interrupted) => (),
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
    }
}

fn run_line(line: &str, env: &Rc<Env>, mode: Mode) {
    match mode {
        Mode::Eval => match mmm::interpret(line, env) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => (),
            Err(errors) => print_errors(&errors),
        },
        Mode::Ast => {
            let mut parser = Parser::new(Lexer::new(line));
            let program = parser.parse();
            if parser.errors().is_empty() {
                println!("{program}");
            } else {
                print_errors(parser.errors());
            }
        }
        Mode::Tokens => {
            let mut lexer = Lexer::new(line);
            loop {
                let token = lexer.next_token();
                if token.kind() == TokenKind::Eof {
                    break;
                }
                println!("{} {:?}", token.kind(), token.literal());
            }
        }
    }
}

fn print_errors(errors: &[ParseError]) {
    for error in errors {
        println!("\t{error}");
    }
}
