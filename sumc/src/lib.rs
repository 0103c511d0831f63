pub mod error;
pub mod lexer;
pub mod parser;
pub mod symtab;
pub mod token;

pub use error::CompileError;
pub use lexer::Lexer;
pub use parser::Parser;
pub use symtab::SymbolTable;
