use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

use clap::{App, Arg, ArgGroup};

use bfc::codegen::{self, Aarch64};
use bfc::{assemble, link, parse, Lexer, Program};

enum Action {
    Compile,
    OutputAssembly,
    DumpIr,
}

struct Options {
    action: Action,
    output: Option<String>,
    input: String,
    debug: bool,
}

impl Options {
    fn match_options() -> Self {
        let matches = App::new("bfc")
            .version("0.1.0")
            .about("Brainfuck compiler for AArch64 macOS")
            .arg(
                Arg::with_name("output_asm")
                    .short("S")
                    .help("Emit assembly but do not assemble or link"),
            )
            .arg(
                Arg::with_name("dump_ir")
                    .long("dump-ir")
                    .help("Dump the resolved instruction stream; for debugging"),
            )
            .group(ArgGroup::with_name("actions").args(&["output_asm", "dump_ir"]))
            .arg(
                Arg::with_name("debugging_symbols")
                    .short("g")
                    .help("Assemble with debugging information"),
            )
            .arg(
                Arg::with_name("out_name")
                    .short("o")
                    .help("Output file name")
                    .takes_value(true)
                    .empty_values(false)
                    .value_name("file"),
            )
            .arg(
                Arg::with_name("FILENAME")
                    .help("Source file to compile")
                    .required(true)
                    .index(1),
            )
            .get_matches();

        let action = if matches.is_present("dump_ir") {
            Action::DumpIr
        } else if matches.is_present("output_asm") {
            Action::OutputAssembly
        } else {
            Action::Compile
        };

        Options {
            action,
            output: matches.value_of("out_name").map(str::to_string),
            input: matches.value_of("FILENAME").unwrap().to_string(),
            debug: matches.is_present("debugging_symbols"),
        }
    }

    fn get_output<'a>(&'a self, default: &'a str) -> &'a str {
        match self.output.as_ref() {
            Some(output) => output,
            None => default,
        }
    }
}

fn main() -> io::Result<()> {
    let options = Options::match_options();

    let name = options.input.rsplitn(2, '.').last().unwrap();
    let mut file = File::open(&options.input)?;
    let mut code = Vec::new();
    file.read_to_end(&mut code)?;

    let program = match parse(Lexer::new(&code)) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("Parsing error: {}", err);
            process::exit(1);
        }
    };

    match options.action {
        Action::DumpIr => {
            let mut irfile = open_output_file(options.get_output("-"))?;
            dump_stream(&program, &mut *irfile)?;
        }
        Action::OutputAssembly => {
            println!("Compiling...");
            let output = codegen::generate(&Aarch64, &program);
            let def_name = format!("{}.s", name);
            let out_name = options.get_output(&def_name);
            let mut asmfile = File::create(out_name)?;
            asmfile.write_all(&output.into_bytes())?;
        }
        Action::Compile => {
            println!("Compiling...");
            let output = codegen::generate(&Aarch64, &program);
            let out_name = options.get_output(name);
            asm_and_link(&output, name, out_name, options.debug)?;
        }
    }

    Ok(())
}

fn asm_and_link(code: &str, name: &str, out_name: &str, debug: bool) -> io::Result<()> {
    let o_name = format!("{}.o", name);

    println!("Assembling...");
    if assemble(code, &o_name, debug)? != Some(0) {
        process::exit(1);
    }

    println!("Linking...");
    if link(&o_name, out_name)? != Some(0) {
        process::exit(1);
    }

    Ok(())
}

fn dump_stream(program: &Program, output: &mut dyn Write) -> io::Result<()> {
    for (index, instruction) in program.iter().enumerate() {
        writeln!(output, "{:4} {:?}", index, instruction)?;
    }
    Ok(())
}

fn open_output_file(name: &str) -> io::Result<Box<dyn Write>> {
    if name == "-" {
        Ok(Box::new(io::stdout()))
    } else {
        Ok(Box::new(File::create(name)?))
    }
}
