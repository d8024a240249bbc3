//! Exact rational numbers on top of [`BigInteger`].

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::trace;
use num_traits::{One, Zero};

use crate::big_integer::{BigInteger, Sign};
use crate::constants::DEFAULT_PRECISION;
use crate::error::ArithmeticError;

/// A fraction `numerator / denominator`.
///
/// Every value handed out is normalized: the denominator is positive, the
/// fraction is in lowest terms and zero is `0/1`. Equality and hashing rely
/// on this.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInteger,
    denominator: BigInteger,
}

impl Rational {
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `denominator` is zero.
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> Result<Rational, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let mut res = Rational { numerator, denominator };
        res.normalize();
        Ok(res)
    }

    pub fn from_integer(numerator: BigInteger) -> Rational {
        Rational {
            numerator,
            denominator: BigInteger::one(),
        }
    }

    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    pub fn signum(&self) -> Sign {
        self.numerator.sign()
    }

    pub fn abs(&self) -> Rational {
        Rational {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `self` is zero.
    pub fn recip(&self) -> Result<Rational, ArithmeticError> {
        Rational::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Greatest common divisor of `|first|` and `|second|` by Euclid's
    /// algorithm. Zero if either argument is zero.
    pub fn gcd(first: &BigInteger, second: &BigInteger) -> BigInteger {
        if first.is_zero() || second.is_zero() {
            return BigInteger::zero();
        }
        let mut a = first.abs();
        let mut b = second.abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    fn normalize(&mut self) {
        if self.denominator.is_negative() {
            self.numerator = -&self.numerator;
            self.denominator = -&self.denominator;
        }
        if self.numerator.is_zero() {
            self.denominator = BigInteger::one();
            return;
        }
        loop {
            if self.denominator.is_one() || self.numerator.is_one() {
                return;
            }
            let divisor = Rational::gcd(&self.numerator, &self.denominator);
            if divisor.is_one() {
                return;
            }
            trace!("reducing {} by {}", self, divisor);
            self.numerator /= &divisor;
            self.denominator /= &divisor;
        }
    }
}

macro_rules! impl_int_to_rational {
    ($($i: ty),*) => {
    $(
    impl From<$i> for Rational {
        fn from(val: $i) -> Self {
            Rational::from_integer(BigInteger::from(val))
        }
    }
    )*
    };
}
impl_int_to_rational!(u8, u16, u32, usize, u64, i8, i16, i32, isize, i64);

impl From<BigInteger> for Rational {
    fn from(val: BigInteger) -> Self {
        Rational::from_integer(val)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

// Printing
impl Rational {
    /// Truncated fixed-point expansion with exactly `precision` fractional
    /// digits, e.g. `"0.75"` for `3/4` at precision 2.
    pub fn as_decimal(&self, precision: usize) -> String {
        let magnitude = self.numerator.abs();
        let mut line = String::new();
        if self.numerator.is_negative() {
            line.push('-');
        }
        line.push_str(&(&magnitude / &self.denominator).to_string());
        if precision == 0 {
            return line;
        }

        line.push('.');
        let ten = BigInteger::from(10);
        let mut remainder = &magnitude % &self.denominator;
        for _ in 0..precision {
            remainder *= &ten;
            line.push_str(&(&remainder / &self.denominator).to_string());
            remainder %= &self.denominator;
        }
        line
    }

    /// Best-effort conversion through the decimal expansion.
    pub fn to_f64(&self) -> f64 {
        // the expansion is always a valid float literal
        self.as_decimal(DEFAULT_PRECISION)
            .parse()
            .unwrap_or(f64::NAN)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

// Comparison
impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum().cmp(&other.signum()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        let Rational { numerator, denominator } = self;
        Rational { numerator: -numerator, denominator }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        let mut res = if self.denominator == rhs.denominator {
            Rational {
                numerator: self.numerator + rhs.numerator,
                denominator: self.denominator,
            }
        } else {
            Rational {
                numerator: &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
                denominator: self.denominator * rhs.denominator,
            }
        };
        res.normalize();
        res
    }
}

forward_binop!(Rational, Add, add, AddAssign, add_assign);

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

forward_binop!(Rational, Sub, sub, SubAssign, sub_assign);

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Rational::zero();
        }
        let mut res = Rational {
            numerator: self.numerator * rhs.numerator,
            denominator: self.denominator * rhs.denominator,
        };
        res.normalize();
        res
    }
}

forward_binop!(Rational, Mul, mul, MulAssign, mul_assign);

impl Rational {
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Rational, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Rational::zero());
        }
        let mut res = Rational {
            numerator: &self.numerator * &rhs.denominator,
            denominator: &self.denominator * &rhs.numerator,
        };
        res.normalize();
        Ok(res)
    }
}

impl Div for Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(&rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(Rational, Div, div, DivAssign, div_assign);

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(BigInteger::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(BigInteger::one())
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
}
