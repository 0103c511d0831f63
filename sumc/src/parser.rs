use std::iter::Peekable;
use std::vec::IntoIter;

use arch::inst::Inst;
use arch::program::Program;

use crate::error::CompileError;
use crate::symtab::SymbolTable;
use crate::token::{Token, TokenKind};

/// Recursive-descent parser with interleaved code generation: each operand
/// emits its load the moment it is accepted, and each assignment ends with
/// a store to the left-hand identifier's address.
///
/// ```text
/// program    = { assignment } eof
/// assignment = ident "=" expression
/// expression = operand { "+" operand }
/// operand    = ident | int
/// ```
pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
    symbols: SymbolTable,
    program: Program,
    line: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: tokens.into_iter().peekable(),
            symbols: SymbolTable::new(),
            program: Program::new(),
            line: 1,
        }
    }

    /// Parse the whole token stream. The symbol table is returned even when
    /// parsing fails, for the diagnostic dump.
    pub fn parse(mut self) -> (Result<Program, CompileError>, SymbolTable) {
        let result = match self.parse_program() {
            Ok(()) => Ok(self.program),
            Err(err) => Err(err),
        };
        (result, self.symbols)
    }

    fn parse_program(&mut self) -> Result<(), CompileError> {
        while !self.check(TokenKind::Eof) {
            self.parse_assignment()?;
        }
        Ok(())
    }

    fn parse_assignment(&mut self) -> Result<(), CompileError> {
        let token = self.next();
        if token.kind != TokenKind::Ident {
            return Err(CompileError::ExpectedIdentifier {
                found: describe(&token),
                line: token.line,
            });
        }
        // The left-hand side stays registered even if its expression fails
        let dst = self.symbols.add_entry(&token.lexeme);

        let token = self.next();
        if token.kind != TokenKind::Assign {
            return Err(CompileError::ExpectedAssignment {
                found: describe(&token),
                line: token.line,
            });
        }

        self.parse_expression(dst)
    }

    fn parse_expression(&mut self, dst: u16) -> Result<(), CompileError> {
        self.parse_operand()?;
        // Only `+` chains; any other token ends the expression unconsumed
        while self.check(TokenKind::Plus) {
            self.next();
            self.parse_operand()?;
        }
        self.program.emit(Inst::STORE(dst.into()));
        Ok(())
    }

    fn parse_operand(&mut self) -> Result<(), CompileError> {
        let token = self.next();
        match token.kind {
            TokenKind::Ident => match self.symbols.lookup(&token.lexeme) {
                Some(addr) => {
                    self.program.emit(Inst::LOAD(addr.into()));
                    Ok(())
                }
                None => Err(CompileError::UndefinedIdentifier {
                    name: token.lexeme,
                    line: token.line,
                }),
            },
            TokenKind::Int => {
                let value: i32 =
                    token
                        .lexeme
                        .parse()
                        .map_err(|_| CompileError::IntegerOutOfRange {
                            lexeme: token.lexeme.clone(),
                            line: token.line,
                        })?;
                self.program.emit(Inst::LOADI(value));
                Ok(())
            }
            _ => Err(CompileError::ExpectedOperand {
                found: describe(&token),
                line: token.line,
            }),
        }
    }

    /// Watch the next token without consuming it; an exhausted stream
    /// counts as end of input.
    fn check(&mut self, kind: TokenKind) -> bool {
        match self.tokens.peek() {
            Some(token) => token.kind == kind,
            None => kind == TokenKind::Eof,
        }
    }

    fn next(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.line = token.line;
                token
            }
            None => Token::new(TokenKind::Eof, "", self.line),
        }
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of input".to_string(),
        _ => token.lexeme.clone(),
    }
}
