// Interpreter front-end. Shares the parser with the compiler, so it
// doubles as a reference for what compiled programs should do.

use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::process;

use bfc::{parse, Interpreter, Lexer};

fn main() -> io::Result<()> {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: bfi <file>");
            process::exit(1);
        }
    };

    let mut file = File::open(&path)?;
    let mut code = Vec::new();
    file.read_to_end(&mut code)?;

    let program = match parse(Lexer::new(&code)) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("Parsing error: {}", err);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Interpreter::new(&program, stdin.lock(), stdout.lock()).run()
}
