use crate::parser::error::*;
use crate::roll::Comparator;


/// The closed vocabulary of modifier codes.
///
/// Every code is handled exhaustively at parse time; there is no runtime
/// string dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OptionCode {
    Reroll,
    RecursiveReroll,
    Explode,
    ExplodeOnce,
    Keep,
    KeepHighest,
    KeepLowest,
    Drop,
    DropLowest,
    DropHighest,
    Minimum,
    Maximum,
}

impl OptionCode {
    /// Longest code in the vocabulary, in characters.
    const LONGEST: usize = 3;

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "r" => Some(OptionCode::Reroll),
            "rr" => Some(OptionCode::RecursiveReroll),
            "x" => Some(OptionCode::Explode),
            "xo" => Some(OptionCode::ExplodeOnce),
            "k" => Some(OptionCode::Keep),
            "kh" => Some(OptionCode::KeepHighest),
            "kl" => Some(OptionCode::KeepLowest),
            "d" => Some(OptionCode::Drop),
            "dl" => Some(OptionCode::DropLowest),
            "dh" => Some(OptionCode::DropHighest),
            "min" => Some(OptionCode::Minimum),
            "max" => Some(OptionCode::Maximum),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionCode::Reroll => "r",
            OptionCode::RecursiveReroll => "rr",
            OptionCode::Explode => "x",
            OptionCode::ExplodeOnce => "xo",
            OptionCode::Keep => "k",
            OptionCode::KeepHighest => "kh",
            OptionCode::KeepLowest => "kl",
            OptionCode::Drop => "d",
            OptionCode::DropLowest => "dl",
            OptionCode::DropHighest => "dh",
            OptionCode::Minimum => "min",
            OptionCode::Maximum => "max",
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Number(i64),
    Code(OptionCode),
    Compare(Comparator),
    Eof,
}


#[derive(Debug)]
pub(crate) struct Lexer {
    input: Vec<char>,
    pub position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        if self.position >= self.input.len() {
            return Ok(Token::Eof);
        }

        let ch = self.input[self.position];

        match ch {
            '<' | '>' | '=' => self.read_comparator(),
            '0'..='9' => self.read_number(),
            'a'..='z' | 'A'..='Z' => self.read_code(),
            _ => Err(ParserError::Token(ch))
        }
    }

    fn skip_whitespace(&mut self) {
        while self.position < self.input.len() && self.input[self.position].is_whitespace() {
            self.position += 1;
        }
    }

    fn read_comparator(&mut self) -> Result<Token> {
        let ch = self.input[self.position];
        let followed_by_equals = self.input.get(self.position + 1) == Some(&'=');

        let (comparator, width) = match (ch, followed_by_equals) {
            ('<', true) => (Comparator::LessEqual, 2),
            ('>', true) => (Comparator::GreaterEqual, 2),
            ('<', false) => (Comparator::Less, 1),
            ('>', false) => (Comparator::Greater, 1),
            ('=', _) => (Comparator::Equal, 1),
            _ => unreachable!("{ch:?}"),
        };

        self.position += width;
        Ok(Token::Compare(comparator))
    }

    fn read_number(&mut self) -> Result<Token> {
        let start = self.position;
        while self.position < self.input.len() && self.input[self.position].is_ascii_digit() {
            self.position += 1;
        }

        let number_str: String = self.input[start..self.position].iter().collect();
        let number: i64 = number_str.parse()?;

        Ok(Token::Number(number))
    }

    /// Matches the longest code the vocabulary knows at the current position,
    /// so `kh` is never read as `k` followed by a stray `h`, while `rx` still
    /// splits into `r` and `x`.
    fn read_code(&mut self) -> Result<Token> {
        let end = (self.position + OptionCode::LONGEST).min(self.input.len());
        let candidate: String = self.input[self.position..end]
            .iter()
            .take_while(|c| c.is_alphabetic())
            .collect();

        for length in (1..=candidate.chars().count()).rev() {
            let prefix: String = candidate.chars().take(length).collect();
            if let Some(code) = OptionCode::from_code(&prefix) {
                self.position += length;
                return Ok(Token::Code(code));
            }
        }

        let mut run_end = self.position;
        while run_end < self.input.len() && self.input[run_end].is_alphabetic() {
            run_end += 1;
        }

        Err(ParserError::Identifier(self.input[self.position..run_end].iter().collect()))
    }
}
