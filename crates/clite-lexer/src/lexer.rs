//! The CLite lexer.
//! CLite 词法分析器。

use crate::token::{Token, TokenKind};
use clite_common::Span;
use clite_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

/// A lexical error.
///
/// Tokenization stops at the first error; the parser propagates it as a
/// syntax error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("empty character literal")]
    EmptyChar { span: Span },

    #[error("unterminated character literal")]
    UnterminatedChar { span: Span },

    #[error("invalid escape sequence '\\{ch}'")]
    InvalidEscape { ch: char, span: Span },

    #[error("unterminated block comment")]
    UnterminatedComment { span: Span },

    #[error("invalid number literal `{lexeme}`")]
    InvalidNumber { lexeme: String, span: Span },
}

impl LexError {
    /// The source range the error points at.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::EmptyChar { span }
            | LexError::UnterminatedChar { span }
            | LexError::InvalidEscape { span, .. }
            | LexError::UnterminatedComment { span }
            | LexError::InvalidNumber { span, .. } => *span,
        }
    }

    /// Convert this error into a renderable diagnostic.
    /// 将此错误转换为可渲染的诊断信息。
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, label) = match self {
            LexError::UnexpectedCharacter { .. } => {
                (ErrorCode::UnexpectedCharacter, "unexpected character here")
            }
            LexError::EmptyChar { .. } => (ErrorCode::EmptyCharLiteral, "empty literal here"),
            LexError::UnterminatedChar { .. } => {
                (ErrorCode::UnterminatedCharLiteral, "literal starts here")
            }
            LexError::InvalidEscape { .. } => (ErrorCode::InvalidEscape, "invalid escape here"),
            LexError::UnterminatedComment { .. } => {
                (ErrorCode::UnterminatedComment, "comment is never closed")
            }
            LexError::InvalidNumber { .. } => (ErrorCode::InvalidNumber, "invalid number here"),
        };

        let mut diagnostic =
            Diagnostic::error(DiagnosticKind::Lexer, self.span(), self.to_string())
                .with_code(code)
                .with_label(Label::new(self.span(), label));

        if let Some(help) = code.suggestion() {
            diagnostic = diagnostic.with_help(help);
        }

        diagnostic
    }
}

/// The CLite lexer.
/// CLite 词法分析器。
///
/// A pull-based token source: each call to [`Lexer::next`] produces the
/// next token in source order, and `Eof` forever once the source is
/// exhausted.
/// 拉取式 token 源：每次调用 [`Lexer::next`] 按源码顺序产生下一个 token，
/// 源码耗尽后永远返回 `Eof`。
pub struct Lexer<'src> {
    /// Character iterator with position info
    /// 带位置信息的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current position in source
    /// 当前在源码中的位置
    pos: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            pos: 0,
        }
    }

    /// Get the next token.
    /// 获取下一个 token。
    pub fn next(&mut self) -> Result<Token, LexError> {
        // Skip whitespace and comments - 跳过空白字符和注释
        self.skip_trivia()?;

        let start = self.pos;

        // Check for end of input - 检查是否到达输入末尾
        let Some((_pos, ch)) = self.advance() else {
            return Ok(Token::new(TokenKind::Eof, Span::from_usize(start, start)));
        };

        let kind = match ch {
            // Single character tokens - 单字符 token
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '%' => TokenKind::Percent,

            // Comments were consumed as trivia, so a slash is division
            // 注释已作为空白处理，因此斜杠一定是除号
            '/' => TokenKind::Slash,

            // Equals or EqEq - 等号或双等号
            '=' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }

            // Bang (not) - 感叹号（逻辑非）
            '!' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::BangEq
                } else {
                    TokenKind::Bang
                }
            }

            // Less than - 小于号
            '<' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            }

            // Greater than - 大于号
            '>' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }

            // Ampersand (logical and) - & 符号（逻辑与）
            '&' => {
                if self.peek_char() == Some('&') {
                    self.advance();
                    TokenKind::AndAnd
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        ch,
                        span: Span::from_usize(start, self.pos),
                    });
                }
            }

            // Pipe (logical or) - 管道符号（逻辑或）
            '|' => {
                if self.peek_char() == Some('|') {
                    self.advance();
                    TokenKind::OrOr
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        ch,
                        span: Span::from_usize(start, self.pos),
                    });
                }
            }

            // Char literal - 字符字面量
            '\'' => self.char_literal(start)?,

            // Numbers - 数字
            '0'..='9' => self.number(ch, start)?,

            // Identifiers and keywords - 标识符和关键字
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(ch),

            _ => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    span: Span::from_usize(start, self.pos),
                });
            }
        };

        Ok(Token::new(kind, Span::from_usize(start, self.pos)))
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
        }
        result
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Peek at the nth character ahead.
    /// 查看前方第 n 个字符。
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    /// Skip whitespace and comments.
    /// 跳过空白字符和注释。
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek_char() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_nth(1) == Some('/') => {
                    self.advance(); // first /
                    self.advance(); // second /
                    self.skip_line_comment();
                }
                Some('/') if self.peek_nth(1) == Some('*') => {
                    let start = self.pos;
                    self.advance(); // /
                    self.advance(); // *
                    self.skip_block_comment(start)?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Skip a line comment (`//` to end of line).
    /// 跳过行注释（`//` 到行尾）。
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Skip a block comment (`/* ... */`).
    /// 跳过块注释（`/* ... */`）。
    fn skip_block_comment(&mut self, start: usize) -> Result<(), LexError> {
        loop {
            match self.advance() {
                Some((_, '*')) => {
                    if self.peek_char() == Some('/') {
                        self.advance();
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => {
                    // Unterminated comment - 未终止的注释
                    return Err(LexError::UnterminatedComment {
                        span: Span::from_usize(start, self.pos),
                    });
                }
            }
        }
    }

    /// Parse a character literal (single-quoted).
    /// 解析字符字面量（单引号包围）。
    fn char_literal(&mut self, start: usize) -> Result<TokenKind, LexError> {
        let ch = match self.advance() {
            Some((_, '\'')) => {
                return Err(LexError::EmptyChar {
                    span: Span::from_usize(start, self.pos),
                });
            }
            Some((_, '\\')) => self.escape_char(start)?,
            Some((_, ch)) => ch,
            None => {
                return Err(LexError::UnterminatedChar {
                    span: Span::from_usize(start, self.pos),
                });
            }
        };

        match self.advance() {
            Some((_, '\'')) => Ok(TokenKind::CharLit(ch)),
            _ => Err(LexError::UnterminatedChar {
                span: Span::from_usize(start, self.pos),
            }),
        }
    }

    /// Parse an escape character sequence.
    /// 解析转义字符序列。
    fn escape_char(&mut self, start: usize) -> Result<char, LexError> {
        match self.advance() {
            Some((_, 'n')) => Ok('\n'),   // newline - 换行
            Some((_, 'r')) => Ok('\r'),   // carriage return - 回车
            Some((_, 't')) => Ok('\t'),   // tab - 制表符
            Some((_, '0')) => Ok('\0'),   // null - 空字符
            Some((_, '\\')) => Ok('\\'),  // backslash - 反斜杠
            Some((_, '\'')) => Ok('\''),  // single quote - 单引号
            Some((_, '"')) => Ok('"'),    // double quote - 双引号
            Some((pos, ch)) => Err(LexError::InvalidEscape {
                ch,
                span: Span::from_usize(pos, self.pos),
            }),
            None => Err(LexError::UnterminatedChar {
                span: Span::from_usize(start, self.pos),
            }),
        }
    }

    /// Parse a number literal (integer or float).
    /// 解析数字字面量（整数或浮点数）。
    fn number(&mut self, first: char, start: usize) -> Result<TokenKind, LexError> {
        let mut value = String::from(first);
        let mut is_float = false;

        // Integer part - 整数部分
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Fraction part; the dot is only consumed when a digit follows
        // 小数部分；只有后面跟着数字时才消耗小数点
        if self.peek_char() == Some('.') && self.peek_nth(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            self.advance(); // consume .
            value.push('.');
            is_float = true;

            while let Some(ch) = self.peek_char() {
                if ch.is_ascii_digit() {
                    value.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        let invalid = |lexeme: String| LexError::InvalidNumber {
            lexeme,
            span: Span::from_usize(start, self.pos),
        };

        if is_float {
            match value.parse::<f64>() {
                Ok(v) => Ok(TokenKind::FloatLit(v)),
                Err(_) => Err(invalid(value)),
            }
        } else {
            match value.parse::<i64>() {
                Ok(n) => Ok(TokenKind::IntLit(n)),
                Err(_) => Err(invalid(value)),
            }
        }
    }

    /// Parse an identifier or keyword.
    /// 解析标识符或关键字。
    fn identifier(&mut self, first: char) -> TokenKind {
        let mut value = String::from(first);

        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Check for keywords - 检查是否为关键字
        TokenKind::keyword_from_str(&value).unwrap_or(TokenKind::Ident(value))
    }
}
