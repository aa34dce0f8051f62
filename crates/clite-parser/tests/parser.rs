//! Integration tests for clite-parser.

use clite_lexer::{LexError, TokenKind};
use clite_parser::{SyntaxError, parse, parse_expression};
use clite_syntax::{BinOp, Expr, ExprKind, StmtKind, Type, UnaryOp, Value};

fn binary(expr: &Expr) -> (BinOp, &Expr, &Expr) {
    match &expr.kind {
        ExprKind::Binary { op, left, right } => (*op, &**left, &**right),
        other => panic!("expected a binary node, got {other:?}"),
    }
}

fn var_name(expr: &Expr) -> &str {
    match &expr.kind {
        ExprKind::Var(ident) => &ident.name,
        other => panic!("expected a variable, got {other:?}"),
    }
}

fn int_value(expr: &Expr) -> i64 {
    match &expr.kind {
        ExprKind::Literal(Value::Int(n)) => *n,
        other => panic!("expected an integer literal, got {other:?}"),
    }
}

// ============================================================================
// Programs and Declarations
// ============================================================================

#[test]
fn test_empty_program() {
    let program = parse("int main() { }").unwrap();
    assert!(program.declarations.is_empty());
    assert!(program.body.stmts.is_empty());
}

#[test]
fn test_round_trip_structure() {
    let source = r#"
        int main() {
            int n, sum;
            n = 10;
            sum = 0;
            while (n > 0) {
                sum = sum + n;
                n = n - 1;
            }
        }
    "#;
    let program = parse(source).unwrap();

    // one declaration per declared identifier, in source order
    assert_eq!(program.declarations.len(), 2);
    assert_eq!(program.declarations[0].name.name, "n");
    assert_eq!(program.declarations[1].name.name, "sum");

    // exactly the top-level statements, in source order
    assert_eq!(program.body.stmts.len(), 3);
    assert!(matches!(program.body.stmts[0].kind, StmtKind::Assign { .. }));
    assert!(matches!(program.body.stmts[1].kind, StmtKind::Assign { .. }));
    assert!(matches!(program.body.stmts[2].kind, StmtKind::While { .. }));
}

#[test]
fn test_declaration_grammar() {
    let program = parse("int main() { int x, y; bool z; }").unwrap();
    let declared: Vec<(&str, Type)> = program
        .declarations
        .iter()
        .map(|d| (d.name.name.as_str(), d.ty))
        .collect();
    assert_eq!(
        declared,
        vec![("x", Type::Int), ("y", Type::Int), ("z", Type::Bool)]
    );
}

#[test]
fn test_declarations_of_every_type() {
    let program = parse("int main() { int i; bool b; float f; char c; }").unwrap();
    let types: Vec<Type> = program.declarations.iter().map(|d| d.ty).collect();
    assert_eq!(types, vec![Type::Int, Type::Bool, Type::Float, Type::Char]);
}

#[test]
fn test_program_header_required() {
    // `void` is just an identifier to the lexer, so the header match fails
    let err = parse("void main() { }").unwrap_err();
    match err {
        SyntaxError::Unexpected { expected, found } => {
            assert_eq!(expected, "`int`");
            assert_eq!(found.kind, TokenKind::Ident("void".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(parse("int main { }").is_err());
    assert!(parse("int main( { }").is_err());
}

#[test]
fn test_missing_closing_brace() {
    let err = parse("int main() { x = 1;").unwrap_err();
    match err {
        SyntaxError::Unexpected { expected, found } => {
            assert_eq!(expected, "`}`");
            assert_eq!(found.kind, TokenKind::Eof);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_trailing_input_rejected() {
    let err = parse("int main() { } int").unwrap_err();
    match err {
        SyntaxError::Unexpected { expected, found } => {
            assert_eq!(expected, "end of input");
            assert_eq!(found.kind, TokenKind::Int);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_skip_and_nested_blocks() {
    let program = parse("int main() { ; { ; ; } }").unwrap();
    assert_eq!(program.body.stmts.len(), 2);
    assert!(matches!(program.body.stmts[0].kind, StmtKind::Skip));
    match &program.body.stmts[1].kind {
        StmtKind::Block(block) => assert_eq!(block.stmts.len(), 2),
        other => panic!("expected a block, got {other:?}"),
    }
}

#[test]
fn test_assignment_shape() {
    let program = parse("int main() { int x; x = 3 + 4; }").unwrap();
    match &program.body.stmts[0].kind {
        StmtKind::Assign { target, value } => {
            assert_eq!(target.name, "x");
            let (op, _, _) = binary(value);
            assert_eq!(op, BinOp::Add);
        }
        other => panic!("expected an assignment, got {other:?}"),
    }
}

#[test]
fn test_assignment_requires_semicolon() {
    let err = parse("int main() { x = 1 }").unwrap_err();
    match err {
        SyntaxError::Unexpected { expected, found } => {
            assert_eq!(expected, "`;`");
            assert_eq!(found.kind, TokenKind::RBrace);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_if_without_else() {
    let program = parse("int main() { if (a > 0) b = 1; }").unwrap();
    match &program.body.stmts[0].kind {
        StmtKind::If { else_branch, .. } => assert!(else_branch.is_none()),
        other => panic!("expected an if, got {other:?}"),
    }
}

#[test]
fn test_dangling_else_binds_innermost() {
    let program = parse("int main() { if (a) if (b) x = 1; else x = 2; }").unwrap();
    assert_eq!(program.body.stmts.len(), 1);

    // outer if: no else branch
    let StmtKind::If {
        then_branch,
        else_branch,
        ..
    } = &program.body.stmts[0].kind
    else {
        panic!("expected the outer if");
    };
    assert!(else_branch.is_none());

    // inner if: owns the else branch
    let StmtKind::If {
        else_branch: inner_else,
        ..
    } = &then_branch.kind
    else {
        panic!("expected the inner if");
    };
    assert!(inner_else.is_some());
}

#[test]
fn test_while_shape() {
    let program = parse("int main() { while (n != 0) n = n - 1; }").unwrap();
    match &program.body.stmts[0].kind {
        StmtKind::While { cond, body } => {
            let (op, _, _) = binary(cond);
            assert_eq!(op, BinOp::Ne);
            assert!(matches!(body.kind, StmtKind::Assign { .. }));
        }
        other => panic!("expected a while, got {other:?}"),
    }
}

#[test]
fn test_statement_dispatch_rejects_stray_token() {
    let err = parse("int main() { + }").unwrap_err();
    assert!(matches!(err, SyntaxError::ExpectedStatement { .. }));
}

#[test]
fn test_declarations_must_precede_statements() {
    // a declaration after the first statement is not a statement
    let err = parse("int main() { x = 1; int y; }").unwrap_err();
    assert!(matches!(err, SyntaxError::ExpectedStatement { .. }));
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_precedence() {
    // 2 + 3 * 4 parses as 2 + (3 * 4)
    let expr = parse_expression("2 + 3 * 4").unwrap();
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinOp::Add);
    assert_eq!(int_value(left), 2);

    let (op, left, right) = binary(right);
    assert_eq!(op, BinOp::Mul);
    assert_eq!(int_value(left), 3);
    assert_eq!(int_value(right), 4);
}

#[test]
fn test_left_associativity() {
    // a - b - c parses as (a - b) - c
    let expr = parse_expression("a - b - c").unwrap();
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinOp::Sub);
    assert_eq!(var_name(right), "c");

    let (op, left, right) = binary(left);
    assert_eq!(op, BinOp::Sub);
    assert_eq!(var_name(left), "a");
    assert_eq!(var_name(right), "b");
}

#[test]
fn test_logical_precedence() {
    // a || b && c parses as a || (b && c)
    let expr = parse_expression("a || b && c").unwrap();
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinOp::Or);
    assert_eq!(var_name(left), "a");
    let (op, _, _) = binary(right);
    assert_eq!(op, BinOp::And);
}

#[test]
fn test_paren_grouping() {
    let expr = parse_expression("(2 + 3) * 4").unwrap();
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinOp::Mul);
    assert_eq!(int_value(right), 4);
    let (op, _, _) = binary(left);
    assert_eq!(op, BinOp::Add);
}

#[test]
fn test_relational_chain_rejected() {
    // the grammar allows at most one relational operator per level
    let err = parse_expression("a < b < c").unwrap_err();
    match err {
        SyntaxError::Unexpected { expected, found } => {
            assert_eq!(expected, "end of input");
            assert_eq!(found.kind, TokenKind::Lt);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // same rejection in statement position, at the `;` expect
    let err = parse("int main() { ok = a < b < c; }").unwrap_err();
    match err {
        SyntaxError::Unexpected { expected, found } => {
            assert_eq!(expected, "`;`");
            assert_eq!(found.kind, TokenKind::Lt);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_equality_chain_rejected() {
    let err = parse_expression("a == b == c").unwrap_err();
    assert!(matches!(err, SyntaxError::Unexpected { .. }));
}

#[test]
fn test_mixed_comparison_allowed_once_per_level() {
    // one relational inside each equality operand is fine
    let expr = parse_expression("a < b == c < d").unwrap();
    let (op, left, right) = binary(&expr);
    assert_eq!(op, BinOp::Eq);
    assert_eq!(binary(left).0, BinOp::Lt);
    assert_eq!(binary(right).0, BinOp::Lt);
}

#[test]
fn test_unary_operators() {
    let expr = parse_expression("-x").unwrap();
    match &expr.kind {
        ExprKind::Unary { op, operand } => {
            assert_eq!(*op, UnaryOp::Neg);
            assert_eq!(var_name(operand), "x");
        }
        other => panic!("expected a unary node, got {other:?}"),
    }

    let expr = parse_expression("!(a && b)").unwrap();
    match &expr.kind {
        ExprKind::Unary { op, operand } => {
            assert_eq!(*op, UnaryOp::Not);
            assert_eq!(binary(operand).0, BinOp::And);
        }
        other => panic!("expected a unary node, got {other:?}"),
    }
}

#[test]
fn test_unary_does_not_nest() {
    // Factor -> [ UnaryOp ] Primary: the operand must be a primary
    assert!(matches!(
        parse_expression("--x").unwrap_err(),
        SyntaxError::ExpectedExpression { .. }
    ));
}

#[test]
fn test_unary_binds_tighter_than_multiplication() {
    // -x * y parses as (-x) * y
    let expr = parse_expression("-x * y").unwrap();
    let (op, left, _) = binary(&expr);
    assert_eq!(op, BinOp::Mul);
    assert!(matches!(left.kind, ExprKind::Unary { .. }));
}

#[test]
fn test_cast() {
    let expr = parse_expression("float(x + 1)").unwrap();
    match &expr.kind {
        ExprKind::Cast { ty, expr } => {
            assert_eq!(*ty, Type::Float);
            assert_eq!(binary(expr).0, BinOp::Add);
        }
        other => panic!("expected a cast, got {other:?}"),
    }

    // a cast is a primary, usable inside larger expressions
    let expr = parse_expression("int('a') + 1").unwrap();
    assert_eq!(binary(&expr).0, BinOp::Add);
}

#[test]
fn test_cast_requires_parens() {
    assert!(parse_expression("float x").is_err());
}

#[test]
fn test_literal_values_carry_their_type() {
    for (source, expected_ty) in [
        ("42", Type::Int),
        ("3.5", Type::Float),
        ("'a'", Type::Char),
        ("true", Type::Bool),
        ("false", Type::Bool),
    ] {
        let expr = parse_expression(source).unwrap();
        match &expr.kind {
            ExprKind::Literal(value) => assert_eq!(value.ty(), expected_ty),
            other => panic!("expected a literal, got {other:?}"),
        }
    }
}

// ============================================================================
// Error Propagation
// ============================================================================

#[test]
fn test_lex_error_propagates_as_syntax_error() {
    let err = parse("int main() { x = 1 $; }").unwrap_err();
    match err {
        SyntaxError::Lex(LexError::UnexpectedCharacter { ch, .. }) => assert_eq!(ch, '$'),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_error_spans_point_at_the_offending_token() {
    let source = "int main() { x = ; }";
    let err = parse(source).unwrap_err();
    assert!(matches!(err, SyntaxError::ExpectedExpression { .. }));
    assert_eq!(&source[err.span().range()], ";");
}

#[test]
fn test_diagnostic_conversion() {
    let err = parse("int main() { x = 1 }").unwrap_err();
    let diagnostic = err.to_diagnostic();
    assert!(diagnostic.message.contains("expecting `;`"));
    assert!(diagnostic.code.is_some());
}
