//! Exact Num \
//! This crate provides:
//! - [`BigInteger`]: arbitrary-precision signed integers in base `10^7` limbs, with truncating division.
//! - [`Rational`]: exact fractions of two `BigInteger`s, always kept in lowest terms.
//! - [`TokenReader`]: parses whitespace-separated integer literals from a stream.

#[macro_use]
mod macros;

mod big_integer;
mod cache;
mod constants;
mod error;
mod rational;
mod reader;

#[cfg(test)]
mod proptests;

pub use big_integer::{BigInteger, Sign};
pub use constants::{Limb, BASE, BASE_DIGITS, DEFAULT_PRECISION};
pub use error::ArithmeticError;
pub use rational::Rational;
pub use reader::TokenReader;

#[cfg(test)]
mod tests {
    use crate::{BigInteger, Rational};

    #[test]
    fn it_works() {
        let _ = env_logger::builder().is_test(true).try_init();
        let a: BigInteger = "10000000000000".parse().unwrap();
        let b: BigInteger = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");

        let r = Rational::new(a, b).unwrap();
        assert_eq!(r.to_string(), "100/9");
        assert_eq!(r.as_decimal(3), "11.111");
    }
}
