use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser as _;
use color_print::ceprintln;
use pascal_parser::{ASTNode, Interpreter, ParseError, parse, parse_expr, translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Mode {
    /// Print the syntax tree
    Ast,
    /// Print the tree as a LISP expression
    Lisp,
    /// Print the tree in reverse Polish notation
    Rpn,
    /// Print fully parenthesized source
    Source,
    /// Evaluate and print the result
    Run,
}

#[derive(Debug, clap::Parser)]
#[clap(author, version, about)]
struct Args {
    /// Program file, read from stdin when omitted
    input: Option<PathBuf>,

    /// Parse a bare expression instead of a program
    #[clap(short, long, conflicts_with = "input")]
    expr: Option<String>,

    /// What to do with the parsed tree
    #[clap(short, long, value_enum, default_value_t = Mode::Run)]
    mode: Mode,

    /// Enable verbose output
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let (origin, text) = match read_input(&args) {
        Ok(input) => input,
        Err(err) => {
            ceprintln!("<red,bold>[ERROR]</> {}", err);
            process::exit(1);
        }
    };

    if args.verbose {
        eprintln!("[INFO] Parsing {} ({} chars)", origin, text.chars().count());
    }

    let result = if args.expr.is_some() {
        parse_expr(&text)
    } else {
        parse(&text)
    };
    let tree = match result {
        Ok(tree) => tree,
        Err(err) => {
            print_diag(&err, &text, &origin);
            process::exit(1);
        }
    };

    if args.verbose {
        eprintln!("[INFO] Parsed successfully, mode: {:?}", args.mode);
    }

    match args.mode {
        Mode::Ast => println!("{:#?}", tree),
        Mode::Lisp => println!("{}", translator::lisp(&tree)),
        Mode::Rpn => println!("{}", translator::rpn(&tree)),
        Mode::Source if args.expr.is_some() => println!("{}", translator::source(&tree)),
        Mode::Source => println!("{}", translator::program_source(&tree)),
        Mode::Run => {
            if let Err(err) = run(&tree, args.expr.is_some()) {
                ceprintln!("<red,bold>[ERROR]</> {}", err);
                process::exit(1);
            }
        }
    }
}

fn read_input(args: &Args) -> io::Result<(String, String)> {
    if let Some(expr) = &args.expr {
        return Ok(("<expr>".to_string(), expr.clone()));
    }
    match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|err| {
                io::Error::new(err.kind(), format!("Failed to open file {}: {}", path.display(), err))
            })?;
            Ok((path.display().to_string(), text))
        }
        None => Ok(("<stdin>".to_string(), io::read_to_string(io::stdin())?)),
    }
}

fn run(tree: &ASTNode, is_expr: bool) -> Result<(), pascal_parser::EvalError> {
    let mut interpreter = Interpreter::new();
    let value = interpreter.interpret(tree)?;
    if is_expr {
        println!("{}", value);
        return Ok(());
    }

    let mut vars: Vec<_> = interpreter.get_variables().iter().collect();
    vars.sort_by_key(|(name, _)| *name);
    for (name, value) in vars {
        println!("{} = {}", name, value);
    }
    Ok(())
}

/// Zero-based line and column of a character offset, plus the line's text.
fn locate(text: &str, pos: usize) -> (usize, usize, &str) {
    let mut line = 0;
    let mut col = 0;
    for ch in text.chars().take(pos) {
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    let content = text.lines().nth(line).unwrap_or("");
    (line, col, content)
}

/// Print error with the offending source line and a caret under the position
fn print_diag(err: &ParseError, text: &str, origin: &str) {
    let (line_idx, col, content) = locate(text, err.position());
    let line_num = line_idx + 1;

    ceprintln!("<red,bold>error</>: {}", err);
    ceprintln!("     <blue>--></> <underline>{}:{}:{}</>", origin, line_num, col + 1);
    ceprintln!("      <blue>|</>");
    ceprintln!(" <blue>{:>4} |</> {}", line_num, content);
    ceprintln!("      <blue>|</> {}<red,bold>^</>", " ".repeat(col));
    if matches!(err, ParseError::InvalidCharacter { .. }) {
        ceprintln!("<yellow>note</>: only integers, identifiers and `:= ; . + - * / ( )` are allowed");
    }
}
