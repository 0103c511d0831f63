use color_print::cprintln;
use thiserror::Error;

/// Compile-time diagnostics. The parser is fail-fast: the first error
/// aborts the remaining program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Expecting identifier, found `{found}`")]
    ExpectedIdentifier { found: String, line: usize },

    #[error("Expecting assignment operator, found `{found}`")]
    ExpectedAssignment { found: String, line: usize },

    #[error("Expected identifier or integer, found `{found}`")]
    ExpectedOperand { found: String, line: usize },

    #[error("Identifier `{name}` is not defined")]
    UndefinedIdentifier { name: String, line: usize },

    #[error("Integer literal `{lexeme}` is out of range")]
    IntegerOutOfRange { lexeme: String, line: usize },
}

impl CompileError {
    pub fn line(&self) -> usize {
        match self {
            CompileError::ExpectedIdentifier { line, .. }
            | CompileError::ExpectedAssignment { line, .. }
            | CompileError::ExpectedOperand { line, .. }
            | CompileError::UndefinedIdentifier { line, .. }
            | CompileError::IntegerOutOfRange { line, .. } => *line,
        }
    }

    /// Print the error with diagnostic information showing source location
    /// and line content
    pub fn print_diag(&self, file: &str, source: &str) {
        cprintln!("<red,bold>error</>: {}", self);

        let line_num = self.line();
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = source.lines().nth(line_num.saturating_sub(1)).unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }
}
