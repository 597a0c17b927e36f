use super::tokens::{lookup_identifier, Token, TokenKind};

/// Pull-based scanner over byte-oriented source text.
///
/// Each call to [`Lexer::next_token`] yields exactly one token and advances
/// the cursor. `ch` holds the byte under `position`, with `0` standing in
/// for end of input, and `read_position` is always one byte ahead so the
/// two-byte operators can be resolved with a single peek.
pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(input: &str) -> Lexer {
        let mut lexer = Lexer {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Equals, "==")
                } else {
                    Token::from_byte(TokenKind::Assignment, self.ch)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEquals, "!=")
                } else {
                    Token::from_byte(TokenKind::Not, self.ch)
                }
            }
            b'+' => Token::from_byte(TokenKind::Plus, self.ch),
            b'-' => Token::from_byte(TokenKind::Dash, self.ch),
            b'/' => Token::from_byte(TokenKind::Slash, self.ch),
            b'*' => Token::from_byte(TokenKind::Star, self.ch),
            b'<' => Token::from_byte(TokenKind::Less, self.ch),
            b'>' => Token::from_byte(TokenKind::Greater, self.ch),
            b',' => Token::from_byte(TokenKind::Comma, self.ch),
            b';' => Token::from_byte(TokenKind::Semicolon, self.ch),
            b'(' => Token::from_byte(TokenKind::OpenParen, self.ch),
            b')' => Token::from_byte(TokenKind::CloseParen, self.ch),
            b'{' => Token::from_byte(TokenKind::OpenCurly, self.ch),
            b'}' => Token::from_byte(TokenKind::CloseCurly, self.ch),
            0 => Token::new(TokenKind::EOF, ""),
            ch if is_letter(ch) => {
                // read_identifier leaves the cursor on the byte after the
                // run, so skip the shared read_char below.
                let literal = self.read_identifier();
                let kind = lookup_identifier(&literal);
                return Token::new(kind, literal);
            }
            ch if is_digit(ch) => {
                return Token::new(TokenKind::Int, self.read_number());
            }
            _ => Token::from_byte(TokenKind::Illegal, self.ch),
        };

        self.read_char();
        token
    }

    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }
}

// Identifiers are letter/underscore runs only, digits terminate them.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
