use color_print::{cformat, cprintln};
use std::io::Write;

use sumc::lexer::Lexer;
use sumc::parser::Parser as SumParser;
use sumc::symtab::SymbolTable;
use sumemu::State;

#[derive(Debug, clap::Parser)]
#[clap(
    name = "sumc",
    version,
    about = "Compiler and runner for the SUM assignment language"
)]
struct Args {
    /// Input file; falls back to one line typed on stdin
    input: Option<String>,

    /// Memory size of the executor
    #[clap(short, long, default_value_t = 10)]
    memory: usize,

    /// Dump the generated bytecode listing
    #[clap(short, long)]
    dump: bool,

    /// Trace each executed instruction
    #[clap(short, long)]
    trace: bool,
}

fn main() {
    use clap::Parser;

    let args = Args::parse();
    println!("SUM Compiler");

    if args.memory == 0 {
        cprintln!("<red,bold>error</>: memory size must be greater than 0");
        std::process::exit(2);
    }

    println!("1. Read Source");
    let (file, source) = read_source(args.input.as_deref());
    println!("  < {}", file);

    println!("2. Compile");
    let tokens = Lexer::new(&source).tokenize();
    let (result, symbols) = SumParser::new(tokens).parse();

    let program = match result {
        Ok(program) => {
            cprintln!("  <green,bold>Valid Program</>");
            print_symbols(&symbols);
            program
        }
        Err(err) => {
            err.print_diag(&file, &source);
            cprintln!("  <red,bold>Invalid Program</>");
            print_symbols(&symbols);
            std::process::exit(1);
        }
    };

    println!("  Bytecode: {}", program);
    if args.dump {
        print!("{}", program.listing());
    }

    println!("3. Execute");
    let mut state = State::new(args.memory);
    if let Err(errors) = state.run(&program, args.trace) {
        for err in &errors {
            cprintln!("  <red,bold>error</>: {}", err);
        }
    }
    println!("  Memory: {}", state.format_mem());
}

fn print_symbols(symbols: &SymbolTable) {
    println!("  Symbols:");
    for (name, addr) in symbols.iter() {
        cprintln!("    {} : <blue>{}</>", name, addr);
    }
}

fn read_source(path: Option<&str>) -> (String, String) {
    if let Some(path) = path {
        match std::fs::read_to_string(path) {
            Ok(source) => return (path.to_string(), source),
            Err(err) => {
                cprintln!("<yellow,bold>warn</>: cannot read `{}`: {}", path, err);
            }
        }
    }
    // One line typed on stdin stands in for a source file
    print!("Enter a program line: ");
    std::io::stdout()
        .flush()
        .expect(&cformat!("<red,bold>Failed to flush stdout</>"));
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .expect(&cformat!("<red,bold>Failed to read line</>"));
    ("<stdin>".to_string(), line)
}
