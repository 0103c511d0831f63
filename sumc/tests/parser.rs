use arch::program::Program;
use sumc::error::CompileError;
use sumc::lexer::Lexer;
use sumc::parser::Parser;
use sumc::symtab::SymbolTable;

fn compile(code: &str) -> (Result<Program, CompileError>, SymbolTable) {
    let tokens = Lexer::new(code).tokenize();
    Parser::new(tokens).parse()
}

fn assert_valid(code: &str, words: &[i32]) {
    let (result, symbols) = compile(code);
    println!(" {code}");
    println!("{:?}", symbols);
    let program = result.expect("program should compile");
    println!("{}", program);
    assert_eq!(program.words(), words);
}

macro_rules! case {
    ($name:ident, $code:expr, $words:expr) => {
        #[test]
        fn $name() {
            assert_valid($code, &$words);
        }
    };
}

case!(single_literal, "x = 5", [1, 5, 2, 0]);
case!(single_sum, "x = 1 + 2 + 3", [1, 1, 1, 2, 1, 3, 2, 0]);
case!(reuse_lhs, "x = 5 y = x + 3", [1, 5, 2, 0, 0, 0, 1, 3, 2, 1]);
case!(self_reference, "x = 5 x = x + 1", [1, 5, 2, 0, 0, 0, 1, 1, 2, 0]);
// the left-hand side registers before the right-hand side is checked,
// so a first assignment may read its own (zero) cell
case!(self_init, "x = x", [0, 0, 2, 0]);
case!(empty_program, "", []);
case!(
    multi_line,
    "a = 1\nb = 2\nc = a + b\n",
    [1, 1, 2, 0, 1, 2, 2, 1, 0, 0, 0, 1, 2, 2]
);

#[test]
fn one_store_per_assignment() {
    let (result, _) = compile("a = 1 b = 2 c = a + b");
    let program = result.expect("program should compile");
    let stores = program.words().chunks(2).filter(|pair| pair[0] == 2).count();
    assert_eq!(stores, 3);
}

#[test]
fn addresses_in_first_seen_order() {
    let (result, symbols) = compile("b = 1 a = 2 b = 3 c = b");
    assert!(result.is_ok());
    let entries: Vec<(&str, u16)> = symbols.iter().collect();
    assert_eq!(entries, vec![("b", 0), ("a", 1), ("c", 2)]);
}

#[test]
fn undefined_identifier() {
    let (result, symbols) = compile("y = x");
    assert_eq!(
        result.unwrap_err(),
        CompileError::UndefinedIdentifier {
            name: "x".into(),
            line: 1
        }
    );
    // the left-hand side was registered before the failure
    assert_eq!(symbols.lookup("y"), Some(0));
}

#[test]
fn undefined_identifier_line() {
    let (result, _) = compile("x = 5\ny = z + 1");
    assert_eq!(
        result.unwrap_err(),
        CompileError::UndefinedIdentifier {
            name: "z".into(),
            line: 2
        }
    );
}

#[test]
fn missing_assignment_operator() {
    let (result, _) = compile("x 5");
    assert_eq!(
        result.unwrap_err(),
        CompileError::ExpectedAssignment {
            found: "5".into(),
            line: 1
        }
    );
}

#[test]
fn missing_operand() {
    let (result, _) = compile("x =");
    assert_eq!(
        result.unwrap_err(),
        CompileError::ExpectedOperand {
            found: "end of input".into(),
            line: 1
        }
    );
}

#[test]
fn dangling_plus() {
    let (result, _) = compile("x = 1 +");
    assert_eq!(
        result.unwrap_err(),
        CompileError::ExpectedOperand {
            found: "end of input".into(),
            line: 1
        }
    );
}

#[test]
fn leading_assign() {
    let (result, _) = compile("= 5");
    assert_eq!(
        result.unwrap_err(),
        CompileError::ExpectedIdentifier {
            found: "=".into(),
            line: 1
        }
    );
}

#[test]
fn minus_ends_expression() {
    // `-` is tokenized but never combined: it ends the expression and then
    // fails as the next statement's leading token
    let (result, _) = compile("x = 5 - 3");
    assert_eq!(
        result.unwrap_err(),
        CompileError::ExpectedIdentifier {
            found: "-".into(),
            line: 1
        }
    );
}

#[test]
fn invalid_character_rejected() {
    let (result, _) = compile("x = $");
    assert_eq!(
        result.unwrap_err(),
        CompileError::ExpectedOperand {
            found: "$".into(),
            line: 1
        }
    );
}

#[test]
fn integer_out_of_range() {
    let (result, _) = compile("x = 99999999999");
    assert_eq!(
        result.unwrap_err(),
        CompileError::IntegerOutOfRange {
            lexeme: "99999999999".into(),
            line: 1
        }
    );
}
