//! The CLite parser.
//!
//! Each grammar method corresponds to one concrete syntax rule, quoted as
//! a comment at its head. Dispatch is driven by the single lookahead
//! token only; no method backtracks.

use crate::error::{ParseResult, SyntaxError};
use clite_common::Span;
use clite_lexer::{Lexer, Token, TokenKind};
use clite_syntax::{
    BinOp, Block, Declaration, Expr, ExprKind, Ident, Program, Stmt, StmtKind, Type, UnaryOp,
    Value,
};

/// The CLite parser.
///
/// Owns its token source and a single lookahead token. One instance
/// parses one program, start to finish.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    token: Token,
}

impl<'src> Parser<'src> {
    /// Open the token stream and prime the lookahead.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let token = lexer.next()?;
        Ok(Self { lexer, token })
    }

    // ========== Token Plumbing ==========

    /// Replace the lookahead with the next token and return the consumed
    /// one.
    fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next()?;
        Ok(std::mem::replace(&mut self.token, next))
    }

    /// The single choke point through which every token is consumed:
    /// advance when the lookahead has the expected kind, fail otherwise.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.token.kind == kind {
            self.advance()
        } else {
            Err(SyntaxError::Unexpected {
                expected: kind.to_string(),
                found: self.token.clone(),
            })
        }
    }

    /// Does the lookahead have this kind?
    fn check(&self, kind: &TokenKind) -> bool {
        self.token.kind == *kind
    }

    /// Consume the lookahead if it has this kind.
    fn eat(&mut self, kind: &TokenKind) -> ParseResult<bool> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn identifier(&mut self) -> ParseResult<Ident> {
        if let TokenKind::Ident(name) = &self.token.kind {
            let name = name.clone();
            let token = self.advance()?;
            Ok(Ident::new(name, token.span))
        } else {
            Err(SyntaxError::Unexpected {
                expected: "an identifier".to_string(),
                found: self.token.clone(),
            })
        }
    }

    // ========== Declarations ==========

    /// `Program -> int main ( ) '{' Declarations Statements '}'`
    ///
    /// The sole entry point. Trailing input after the closing brace is an
    /// error.
    pub fn program(&mut self) -> ParseResult<Program> {
        let start = self.token.span;
        self.expect(TokenKind::Int)?;
        self.expect(TokenKind::Main)?;
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;
        let declarations = self.declarations()?;
        let body = self.statements()?;
        let rbrace = self.expect(TokenKind::RBrace)?;
        self.expect(TokenKind::Eof)?;

        Ok(Program {
            declarations,
            body,
            span: start.merge(rbrace.span),
        })
    }

    /// `Declarations -> { Declaration }`
    fn declarations(&mut self) -> ParseResult<Vec<Declaration>> {
        let mut declarations = Vec::new();
        while self.token.kind.is_type() {
            self.declaration(&mut declarations)?;
        }
        Ok(declarations)
    }

    /// `Declaration -> Type Identifier { , Identifier } ;`
    ///
    /// Appends one entry per identifier, all carrying the same type.
    fn declaration(&mut self, declarations: &mut Vec<Declaration>) -> ParseResult<()> {
        let start = self.token.span;
        let ty = self.type_specifier()?;

        let name = self.identifier()?;
        declarations.push(Declaration {
            span: start.merge(name.span),
            name,
            ty,
        });

        while self.eat(&TokenKind::Comma)? {
            let name = self.identifier()?;
            declarations.push(Declaration {
                span: start.merge(name.span),
                name,
                ty,
            });
        }

        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// `Type -> int | bool | float | char`
    fn type_specifier(&mut self) -> ParseResult<Type> {
        let ty = match self.token.kind {
            TokenKind::Int => Type::Int,
            TokenKind::Bool => Type::Bool,
            TokenKind::Float => Type::Float,
            TokenKind::Char => Type::Char,
            _ => {
                return Err(SyntaxError::ExpectedType {
                    found: self.token.clone(),
                });
            }
        };
        self.advance()?; // pass over the type keyword
        Ok(ty)
    }

    // ========== Statements ==========

    /// `Statements -> { Statement }`
    ///
    /// Parses block members; the enclosing braces belong to the caller.
    /// The loop also stops at end of input so a missing `}` is reported
    /// by the caller's expect.
    fn statements(&mut self) -> ParseResult<Block> {
        let start = self.token.span;
        let mut stmts = Vec::new();

        while !self.check(&TokenKind::RBrace) && !self.check(&TokenKind::Eof) {
            stmts.push(self.statement()?);
        }

        let span = match (stmts.first(), stmts.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::new(start.start, start.start),
        };
        Ok(Block { stmts, span })
    }

    /// `Statement -> ; | Block | Assignment | IfStatement | WhileStatement`
    ///
    /// Pure LL(1) dispatch: no two productions start with the same token
    /// kind.
    fn statement(&mut self) -> ParseResult<Stmt> {
        match self.token.kind {
            TokenKind::Semicolon => {
                let semi = self.advance()?;
                Ok(Stmt::new(StmtKind::Skip, semi.span))
            }
            TokenKind::LBrace => {
                let lbrace = self.advance()?;
                let block = self.statements()?;
                let rbrace = self.expect(TokenKind::RBrace)?;
                let span = lbrace.span.merge(rbrace.span);
                Ok(Stmt::new(StmtKind::Block(Block { span, ..block }), span))
            }
            TokenKind::Ident(_) => self.assignment(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            _ => Err(SyntaxError::ExpectedStatement {
                found: self.token.clone(),
            }),
        }
    }

    /// `Assignment -> Identifier = Expression ;`
    fn assignment(&mut self) -> ParseResult<Stmt> {
        let target = self.identifier()?;
        self.expect(TokenKind::Eq)?;
        let value = self.expression()?;
        let semi = self.expect(TokenKind::Semicolon)?;
        let span = target.span.merge(semi.span);
        Ok(Stmt::new(StmtKind::Assign { target, value }, span))
    }

    /// `IfStatement -> if ( Expression ) Statement [ else Statement ]`
    ///
    /// The `else` is consumed greedily, so it always binds to the nearest
    /// unmatched `if`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        let if_token = self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let cond = self.expression()?;
        self.expect(TokenKind::RParen)?;
        let then_branch = Box::new(self.statement()?);

        let mut span = if_token.span.merge(then_branch.span);
        let else_branch = if self.eat(&TokenKind::Else)? {
            let stmt = self.statement()?;
            span = span.merge(stmt.span);
            Some(Box::new(stmt))
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// `WhileStatement -> while ( Expression ) Statement`
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        let while_token = self.expect(TokenKind::While)?;
        self.expect(TokenKind::LParen)?;
        let cond = self.expression()?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.statement()?);
        let span = while_token.span.merge(body.span);
        Ok(Stmt::new(StmtKind::While { cond, body }, span))
    }

    // ========== Expression Parsing ==========

    /// `Expression -> Conjunction { || Conjunction }`
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.conjunction()?;
        while self.eat(&TokenKind::OrOr)? {
            let right = self.conjunction()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op: BinOp::Or,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `Conjunction -> Equality { && Equality }`
    fn conjunction(&mut self) -> ParseResult<Expr> {
        let mut left = self.equality()?;
        while self.eat(&TokenKind::AndAnd)? {
            let right = self.equality()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op: BinOp::And,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `Equality -> Relation [ EquOp Relation ]`
    ///
    /// At most one comparison per level: after `a == b` a further `==` is
    /// left in the lookahead for an enclosing expect to reject.
    fn equality(&mut self) -> ParseResult<Expr> {
        let left = self.relation()?;
        if let Some(op) = equality_op(&self.token.kind) {
            self.advance()?;
            let right = self.relation()?;
            let span = left.span.merge(right.span);
            return Ok(Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            ));
        }
        Ok(left)
    }

    /// `Relation -> Addition [ RelOp Addition ]`
    fn relation(&mut self) -> ParseResult<Expr> {
        let left = self.addition()?;
        if let Some(op) = relational_op(&self.token.kind) {
            self.advance()?;
            let right = self.addition()?;
            let span = left.span.merge(right.span);
            return Ok(Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            ));
        }
        Ok(left)
    }

    /// `Addition -> Term { AddOp Term }`
    fn addition(&mut self) -> ParseResult<Expr> {
        let mut left = self.term()?;
        while let Some(op) = add_op(&self.token.kind) {
            self.advance()?;
            let right = self.term()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `Term -> Factor { MulOp Factor }`
    fn term(&mut self) -> ParseResult<Expr> {
        let mut left = self.factor()?;
        while let Some(op) = mul_op(&self.token.kind) {
            self.advance()?;
            let right = self.factor()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `Factor -> [ UnaryOp ] Primary`
    fn factor(&mut self) -> ParseResult<Expr> {
        if let Some(op) = unary_op(&self.token.kind) {
            let token = self.advance()?;
            let operand = self.primary()?;
            let span = token.span.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.primary()
    }

    /// `Primary -> Identifier | Literal | ( Expression ) | Type ( Expression )`
    fn primary(&mut self) -> ParseResult<Expr> {
        if self.token.kind.is_literal() {
            return self.literal();
        }
        if self.token.kind.is_type() {
            return self.cast();
        }

        match self.token.kind {
            TokenKind::Ident(_) => {
                let ident = self.identifier()?;
                let span = ident.span;
                Ok(Expr::new(ExprKind::Var(ident), span))
            }
            TokenKind::LParen => {
                let lparen = self.advance()?;
                let mut expr = self.expression()?;
                let rparen = self.expect(TokenKind::RParen)?;
                expr.span = lparen.span.merge(rparen.span);
                Ok(expr)
            }
            _ => Err(SyntaxError::ExpectedExpression {
                found: self.token.clone(),
            }),
        }
    }

    /// `Type ( Expression )` — an explicit cast.
    fn cast(&mut self) -> ParseResult<Expr> {
        let start = self.token.span;
        let ty = self.type_specifier()?;
        self.expect(TokenKind::LParen)?;
        let expr = self.expression()?;
        let rparen = self.expect(TokenKind::RParen)?;
        Ok(Expr::new(
            ExprKind::Cast {
                ty,
                expr: Box::new(expr),
            },
            start.merge(rparen.span),
        ))
    }

    /// `Literal -> Integer | Float | Char | true | false`
    ///
    /// Callers check `is_literal()` on the lookahead first; anything else
    /// here is a bug in the dispatch, not a malformed input.
    fn literal(&mut self) -> ParseResult<Expr> {
        let token = self.advance()?;
        let value = match token.kind {
            TokenKind::IntLit(n) => Value::Int(n),
            TokenKind::FloatLit(v) => Value::Float(v),
            TokenKind::CharLit(c) => Value::Char(c),
            TokenKind::True => Value::Bool(true),
            TokenKind::False => Value::Bool(false),
            kind => unreachable!("literal() called with {kind} lookahead"),
        };
        Ok(Expr::new(ExprKind::Literal(value), token.span))
    }
}

// ========== Operator Classification ==========
//
// Each classifier doubles as the mapping its grammar method consumes, so
// a predicate and its consumer cannot drift apart.

/// `AddOp -> + | -`
fn add_op(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Minus => Some(BinOp::Sub),
        _ => None,
    }
}

/// `MulOp -> * | / | %`
fn mul_op(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Star => Some(BinOp::Mul),
        TokenKind::Slash => Some(BinOp::Div),
        TokenKind::Percent => Some(BinOp::Rem),
        _ => None,
    }
}

/// `EquOp -> == | !=`
fn equality_op(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::EqEq => Some(BinOp::Eq),
        TokenKind::BangEq => Some(BinOp::Ne),
        _ => None,
    }
}

/// `RelOp -> < | <= | > | >=`
fn relational_op(kind: &TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Lt => Some(BinOp::Lt),
        TokenKind::LtEq => Some(BinOp::Le),
        TokenKind::Gt => Some(BinOp::Gt),
        TokenKind::GtEq => Some(BinOp::Ge),
        _ => None,
    }
}

/// `UnaryOp -> - | !`
fn unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Bang => Some(UnaryOp::Not),
        _ => None,
    }
}
