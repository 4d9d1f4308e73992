//! Path-description tokenizer and parser.

mod lexer;
mod parser;

pub use lexer::{Direction, Lexer, MotionToken, lex};
pub use parser::{MotionCommand, parse_motion_path};

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;
