use serde::Serialize;

/// Direction of a single motion command.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'F' => Some(Self::Forward),
            'B' => Some(Self::Backward),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }
}

/// A direction letter plus its magnitude, with the 1-based column of the
/// letter in the input.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MotionToken {
    pub direction: Direction,
    pub value: f64,
    pub column: usize,
}

pub fn lex(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

/// Scans a path description left to right for direction letters followed
/// by a number. Anything else is skipped silently; a direction letter
/// without at least one digit after it produces no token.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            column: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.column += 1;
        Some(ch)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }
}

impl Iterator for Lexer<'_> {
    type Item = MotionToken;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ch) = self.peek() {
            let column = self.column;

            if let Some(direction) = Direction::from_letter(ch) {
                self.bump();
                if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    let value = scan_number(self);
                    return Some(MotionToken {
                        direction,
                        value,
                        column,
                    });
                }
                // No digit run after the letter: not a command. The next
                // character stays unconsumed so it may start a new match.
                continue;
            }

            self.bump();
        }

        None
    }
}

/// Consume `digit+ ('.' digit*)?`. The caller guarantees the next
/// character is a digit, so the parse cannot fail.
fn scan_number(lexer: &mut Lexer<'_>) -> f64 {
    let mut raw = String::new();
    while let Some(ch) = lexer.peek() {
        if ch.is_ascii_digit() {
            raw.push(ch);
            lexer.bump();
        } else {
            break;
        }
    }

    if lexer.peek() == Some('.') {
        raw.push('.');
        lexer.bump();
        while let Some(ch) = lexer.peek() {
            if ch.is_ascii_digit() {
                raw.push(ch);
                lexer.bump();
            } else {
                break;
            }
        }
    }

    raw.parse().unwrap_or(0.0)
}
