//! Whitespace-delimited integer tokens from any buffered reader.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::big_integer::BigInteger;
use crate::error::ArithmeticError;

/// Yields one [`BigInteger`] per whitespace-separated token of the input,
/// reading a line at a time.
///
/// ```
/// use exact_num::{BigInteger, TokenReader};
///
/// let mut reader = TokenReader::new("123 285\n".as_bytes());
/// let c = reader.next().unwrap().unwrap();
/// let d = reader.next().unwrap().unwrap();
/// assert_eq!(c + d, BigInteger::from(408));
/// assert!(reader.next().is_none());
/// ```
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        TokenReader {
            input,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Refills `pending`; `Ok(false)` at end of input.
    fn fill(&mut self) -> Result<bool, ArithmeticError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }
}

impl<R: BufRead> Iterator for TokenReader<R> {
    type Item = Result<BigInteger, ArithmeticError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.fill() {
            Ok(true) => self.pending.pop_front().map(|token| token.parse()),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_across_lines() {
        let input = "  -5\n\n10000000 +7\t0\n";
        let values: Vec<String> = TokenReader::new(input.as_bytes())
            .map(|val| val.unwrap().to_string())
            .collect();
        assert_eq!(values, ["-5", "10000000", "7", "0"]);
    }

    #[test]
    fn reports_bad_token_and_continues() {
        let mut reader = TokenReader::new("12 x3 4".as_bytes());
        assert_eq!(reader.next().unwrap().unwrap(), BigInteger::from(12));
        assert!(matches!(
            reader.next(),
            Some(Err(ArithmeticError::InvalidFormat(_)))
        ));
        assert_eq!(reader.next().unwrap().unwrap(), BigInteger::from(4));
        assert!(reader.next().is_none());
    }

    #[test]
    fn empty_input() {
        assert!(TokenReader::new("".as_bytes()).next().is_none());
        assert!(TokenReader::new(" \n \n".as_bytes()).next().is_none());
    }
}
