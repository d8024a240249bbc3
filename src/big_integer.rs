//! # BigInteger
//! Arbitrary-precision signed integers stored as a sign tag plus a magnitude
//! of base `10^7` limbs, least significant limb first.
//! # Example
//! ```
//! use exact_num::BigInteger;
//!
//! let a: BigInteger = "100000".parse().unwrap();
//! let b = BigInteger::from(25);
//! assert_eq!((&a + &b).to_string(), "100025");
//! assert_eq!((&a - &b).to_string(), "99975");
//! assert_eq!((&a * &b).to_string(), "2500000");
//! assert_eq!((&a / &b).to_string(), "4000");
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use log::{debug, trace};
use num_traits::{One, Zero};

use crate::cache::*;
use crate::constants::*;
use crate::error::ArithmeticError;

/// Sign tag of a [`BigInteger`]. Declaration order is the value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Neutral,
    Positive,
}

impl Sign {
    /// Flips `Positive` and `Negative`, `Neutral` stays put.
    pub fn negate(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Neutral => Sign::Neutral,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Sign of a product of values carrying `self` and `other`.
    pub fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Neutral, _) | (_, Sign::Neutral) => Sign::Neutral,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// Zero is always `Sign::Neutral` with the single limb `0`; any other value
/// has no most-significant zero limbs. Both invariants are restored by
/// [`BigInteger::from_limbs`], which every operation goes through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    sign: Sign,
    mag: Vec<Limb>,
}

// Construction
impl BigInteger {
    pub(crate) fn from_limbs(mut mag: Vec<Limb>, sign: Sign) -> BigInteger {
        strip_leading_zeros(&mut mag);
        if sign == Sign::Neutral || mag == [0] {
            return BigInteger::zero();
        }
        debug_assert!(mag.iter().all(|&limb| limb < BASE));
        BigInteger { sign, mag }
    }

    fn value_of(val: u64, sign: Sign) -> BigInteger {
        if val <= MAX_CONSTANT as u64 {
            return match sign {
                Sign::Negative => NEG_CACHE[val as usize].clone(),
                _ => POS_CACHE[val as usize].clone(),
            };
        }
        let mut mag = Vec::with_capacity(3);
        let mut rest = val;
        while rest > 0 {
            mag.push(rest % BASE);
            rest /= BASE;
        }
        BigInteger::from_limbs(mag, sign)
    }

    /// Parses every whitespace-separated token of `input`.
    pub fn parse_all(input: &str) -> Result<Vec<BigInteger>, ArithmeticError> {
        input.split_whitespace().map(str::parse).collect()
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u64, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Negative } else { Sign::Positive };
            BigInteger::value_of(val.unsigned_abs() as u64, sign)
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, usize, u64);
impl_signed_to_big_integer!(i8, i16, i32, isize, i64);

// Parsing
impl FromStr for BigInteger {
    type Err = ArithmeticError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let (sign, digits) = match literal.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &literal[1..]),
            Some(b'+') => (Sign::Positive, &literal[1..]),
            _ => (Sign::Positive, literal),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            debug!("rejected integer literal {:?}", literal);
            return Err(ArithmeticError::InvalidFormat(literal.to_string()));
        }

        // groups of BASE_DIGITS counted from the least significant end
        let mag = digits
            .as_bytes()
            .rchunks(BASE_DIGITS)
            .map(|group| {
                group
                    .iter()
                    .fold(0 as Limb, |acc, &b| acc * 10 + Limb::from(b - b'0'))
            })
            .collect();
        Ok(BigInteger::from_limbs(mag, sign))
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = ArithmeticError;

    fn try_from(literal: &str) -> Result<Self, Self::Error> {
        literal.parse()
    }
}

// Printing
impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        let mut limbs = self.mag.iter().rev();
        if let Some(top) = limbs.next() {
            write!(f, "{}", top)?;
        }
        for limb in limbs {
            write!(f, "{:0width$}", limb, width = BASE_DIGITS)?;
        }
        Ok(())
    }
}

// Accessors
impl BigInteger {
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Limbs of the magnitude, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        &self.mag
    }

    pub fn limb_count(&self) -> usize {
        self.mag.len()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn abs(&self) -> BigInteger {
        let mut copy = self.clone();
        if copy.sign == Sign::Negative {
            copy.sign = Sign::Positive;
        }
        copy
    }

    /// Returns `None` when the value does not fit in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        // BASE^3 already exceeds i64::MAX
        if self.mag.len() > 3 {
            return None;
        }
        let mag = self
            .mag
            .iter()
            .rev()
            .fold(0_i128, |acc, &limb| acc * BASE as i128 + limb as i128);
        let val = if self.sign == Sign::Negative { -mag } else { mag };
        i64::try_from(val).ok()
    }
}

// Comparison
impl BigInteger {
    fn compare_mag(x: &[Limb], y: &[Limb]) -> Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }

    /// Orders `|self|` against `|other|`.
    pub fn compare_abs(&self, other: &BigInteger) -> Ordering {
        BigInteger::compare_mag(&self.mag, &other.mag)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.sign {
            Sign::Positive => self.compare_abs(other),
            Sign::Negative => self.compare_abs(other).reverse(),
            Sign::Neutral => Ordering::Equal,
        }
    }
}

// Negation
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        let BigInteger { sign, mag } = self;
        BigInteger { sign: sign.negate(), mag }
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// Addition
impl Add for BigInteger {
    type Output = BigInteger;

    fn add(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }
        if self.is_zero() {
            return val;
        }

        if self.sign == val.sign {
            let sign = self.sign;
            return BigInteger::from_limbs(BigInteger::add_mag(&self.mag, &val.mag), sign);
        }

        match self.compare_abs(&val) {
            Ordering::Less => {
                BigInteger::from_limbs(BigInteger::sub_mag(&val.mag, &self.mag), val.sign)
            }
            Ordering::Equal => BigInteger::zero(),
            Ordering::Greater => {
                BigInteger::from_limbs(BigInteger::sub_mag(&self.mag, &val.mag), self.sign)
            }
        }
    }
}

impl BigInteger {
    fn add_mag(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = false;
        for (i, &limb) in long.iter().enumerate() {
            let mut sum = limb + short.get(i).copied().unwrap_or(0) + carry as Limb;
            carry = sum >= BASE;
            if carry {
                sum -= BASE;
            }
            result.push(sum);
        }
        if carry {
            result.push(1);
        }
        result
    }

    /// `big - little`, requires `|big| >= |little|`.
    fn sub_mag(big: &[Limb], little: &[Limb]) -> Vec<Limb> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = false;
        for (i, &limb) in big.iter().enumerate() {
            let subtrahend = little.get(i).copied().unwrap_or(0) + borrow as Limb;
            borrow = limb < subtrahend;
            result.push(if borrow {
                limb + BASE - subtrahend
            } else {
                limb - subtrahend
            });
        }
        debug_assert!(!borrow, "subtrahend larger than minuend");
        strip_leading_zeros(&mut result);
        result
    }
}

forward_binop!(BigInteger, Add, add, AddAssign, add_assign);

// Subtraction
impl Sub for BigInteger {
    type Output = BigInteger;

    fn sub(self, val: Self) -> Self::Output {
        self + (-val)
    }
}

forward_binop!(BigInteger, Sub, sub, SubAssign, sub_assign);

// Increment and decrement
impl BigInteger {
    pub fn increment(&mut self) -> &mut Self {
        *self += BigInteger::one();
        self
    }

    pub fn decrement(&mut self) -> &mut Self {
        *self += BigInteger::from(-1);
        self
    }

    /// Increments in place and returns the previous value.
    pub fn post_increment(&mut self) -> BigInteger {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Decrements in place and returns the previous value.
    pub fn post_decrement(&mut self) -> BigInteger {
        let previous = self.clone();
        self.decrement();
        previous
    }
}

// Multiplication
impl Mul for BigInteger {
    type Output = BigInteger;

    fn mul(self, val: Self) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return BigInteger::zero();
        }
        if self.is_one() {
            return val;
        }
        if val.is_one() {
            return self;
        }
        let sign = self.sign.product(val.sign);
        BigInteger::from_limbs(BigInteger::mul_mag(&self.mag, &val.mag), sign)
    }
}

impl BigInteger {
    /// Schoolbook product followed by one carry pass.
    fn mul_mag(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut acc = vec![0 as Limb; x.len() + y.len()];
        for (i, &a) in x.iter().enumerate() {
            for (j, &b) in y.iter().enumerate() {
                acc[i + j] += a * b;
            }
        }
        for i in 0..acc.len() - 1 {
            let carry = acc[i] / BASE;
            acc[i] %= BASE;
            acc[i + 1] += carry;
        }
        strip_leading_zeros(&mut acc);
        acc
    }
}

forward_binop!(BigInteger, Mul, mul, MulAssign, mul_assign);

// Division
impl BigInteger {
    /// Truncating division.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigInteger) -> Result<BigInteger, ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(BigInteger::zero());
        }
        let sign = self.sign.product(divisor.sign);
        match self.compare_abs(divisor) {
            Ordering::Less => Ok(BigInteger::zero()),
            Ordering::Equal => Ok(BigInteger::from_limbs(vec![1], sign)),
            Ordering::Greater => Ok(BigInteger::from_limbs(
                BigInteger::long_divide(&self.mag, &divisor.mag),
                sign,
            )),
        }
    }

    /// Quotient magnitude of `dividend / divisor`, requires `dividend > divisor`.
    fn long_divide(dividend: &[Limb], divisor: &[Limb]) -> Vec<Limb> {
        trace!(
            "long division of {} limbs by {} limbs",
            dividend.len(),
            divisor.len()
        );
        let mut locator = dividend.len() - divisor.len();
        let mut remainder = dividend[locator..].to_vec();
        let mut quotient = Vec::with_capacity(locator + 1);
        loop {
            // remainder < divisor * BASE holds here
            let digit = BigInteger::estimate_digit(&remainder, divisor);
            quotient.push(digit);
            if digit != 0 {
                let product = BigInteger::mul_mag(divisor, &[digit]);
                remainder = BigInteger::sub_mag(&remainder, &product);
            }
            if locator == 0 {
                break;
            }
            locator -= 1;
            remainder.insert(0, dividend[locator]);
            strip_leading_zeros(&mut remainder);
        }
        quotient.reverse();
        quotient
    }

    /// Largest `q` in `[0, BASE)` with `q * divisor <= remainder`, by binary search.
    fn estimate_digit(remainder: &[Limb], divisor: &[Limb]) -> Limb {
        let mut low = 0;
        let mut high = BASE;
        while high - low > 1 {
            let mid = (low + high) / 2;
            let product = BigInteger::mul_mag(divisor, &[mid]);
            if BigInteger::compare_mag(&product, remainder) != Ordering::Greater {
                low = mid;
            } else {
                high = mid;
            }
        }
        low
    }
}

impl Div for BigInteger {
    type Output = BigInteger;

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

forward_binop!(BigInteger, Div, div, DivAssign, div_assign);

// Remainder
impl BigInteger {
    /// Remainder of truncating division, carrying the sign of `self`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `modulus` is zero.
    pub fn checked_rem(&self, modulus: &BigInteger) -> Result<BigInteger, ArithmeticError> {
        let quotient = self.checked_div(modulus)?;
        if self.is_zero() {
            return Ok(BigInteger::zero());
        }
        Ok(self - &(modulus * &quotient))
    }
}

impl Rem for BigInteger {
    type Output = BigInteger;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.checked_rem(&rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

forward_binop!(BigInteger, Rem, rem, RemAssign, rem_assign);

impl Zero for BigInteger {
    fn zero() -> Self {
        BigInteger {
            sign: Sign::Neutral,
            mag: vec![0],
        }
    }

    fn is_zero(&self) -> bool {
        self.sign == Sign::Neutral
    }
}

impl One for BigInteger {
    fn one() -> Self {
        POS_CACHE[1].clone()
    }

    fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.mag == [1]
    }
}

/// Drops most-significant zero limbs, keeping at least one limb.
fn strip_leading_zeros(mag: &mut Vec<Limb>) {
    while mag.len() > 1 && mag.last() == Some(&0) {
        mag.pop();
    }
    if mag.is_empty() {
        mag.push(0);
    }
}

#[cfg(test)]
fn big(literal: &str) -> BigInteger {
    literal.parse().unwrap()
}

#[test]
fn test_from() {
    assert_eq!(BigInteger::from(0).sign(), Sign::Neutral);
    assert_eq!(BigInteger::from(0).limbs(), &[0]);
    assert_eq!(BigInteger::from(12_i8).to_string(), "12");
    assert_eq!(BigInteger::from(-100_i16).to_string(), "-100");
    assert_eq!(BigInteger::from(10_000_000_u32).limbs(), &[0, 1]);
    assert_eq!(BigInteger::from(-113132_i64).to_string(), "-113132");
    assert_eq!(BigInteger::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(BigInteger::from(u64::MAX).to_string(), u64::MAX.to_string());
}

#[test]
fn test_parse() {
    let a = big("12345678909876543");
    assert_eq!(a.limbs(), &[9876543, 3456789, 12]);
    assert_eq!(a.sign(), Sign::Positive);

    assert_eq!(big("0"), BigInteger::zero());
    assert_eq!(big("-0"), BigInteger::zero());
    assert_eq!(big("0000000000000"), BigInteger::zero());
    assert_eq!(big("000123").to_string(), "123");
    assert_eq!(big("+5").to_string(), "5");
    assert_eq!(big("-10000000").limbs(), &[0, 1]);
}

#[test]
fn test_parse_rejects_malformed() {
    for literal in ["", "-", "+", "12a", "1-2", "--3", " 4", "4 ", "0x10", "+-1"] {
        assert!(
            matches!(
                literal.parse::<BigInteger>(),
                Err(ArithmeticError::InvalidFormat(ref s)) if s == literal
            ),
            "accepted {:?}",
            literal
        );
    }
}

#[test]
fn test_to_string() {
    let literals = [
        "0",
        "7",
        "-7",
        "10000000",
        "-10000001",
        "100000000000000000000",
        "12345678909876523784950683472613487560983287654321",
    ];
    for literal in literals {
        assert_eq!(big(literal).to_string(), literal);
    }
}

#[test]
fn test_to_i64() {
    assert_eq!(big("123456789110").to_i64(), Some(123456789110));
    assert_eq!(big("-9223372036854775808").to_i64(), Some(i64::MIN));
    assert_eq!(big("9223372036854775808").to_i64(), None);
    assert_eq!(big("100000000000000000000000").to_i64(), None);
}

#[test]
fn test_cmp() {
    let ordered = ["-100000000", "-99999999", "-5", "0", "3", "10000000", "10000001"];
    for (i, a) in ordered.iter().enumerate() {
        for (j, b) in ordered.iter().enumerate() {
            assert_eq!(big(a).cmp(&big(b)), i.cmp(&j), "{} vs {}", a, b);
        }
    }
    assert_eq!(big("-20000000").compare_abs(&big("10000000")), Ordering::Greater);
}

#[test]
fn test_add() {
    let mut a = BigInteger::from(5);
    a += BigInteger::from(10);
    assert_eq!(a, BigInteger::from(15));
    a += &BigInteger::from(10);
    assert_eq!(a, BigInteger::from(25));

    assert_eq!(big("9999999") + big("1"), big("10000000"));
    assert_eq!(big("99999999999999") + big("1"), big("100000000000000"));
    assert_eq!(big("-9999999") + big("-1"), big("-10000000"));
    assert_eq!(big("10000000") + big("-1"), big("9999999"));
    assert_eq!(big("-10000000") + big("1"), big("-9999999"));
    assert_eq!(big("5") + big("-12"), big("-7"));
    assert_eq!(big("123456789") + big("-123456789"), BigInteger::zero());
    assert_eq!(big("0") + big("-4"), big("-4"));
}

#[test]
fn test_sub() {
    assert_eq!(big("100000") - big("25"), big("99975"));
    assert_eq!(big("25") - big("100000"), big("-99975"));
    assert_eq!(big("100000000000000") - big("1"), big("99999999999999"));
    assert_eq!(big("-3") - big("-3"), BigInteger::zero());
    assert_eq!(big("0") - big("0"), BigInteger::zero());
    assert_eq!(big("0") - big("8"), big("-8"));
}

#[test]
fn test_increment() {
    let mut a = big("9999999");
    assert_eq!(a.post_increment(), big("9999999"));
    assert_eq!(a, big("10000000"));
    a.decrement();
    assert_eq!(a, big("9999999"));

    let mut b = BigInteger::zero();
    b.decrement();
    assert_eq!(b, big("-1"));
    assert_eq!(b.post_decrement(), big("-1"));
    assert_eq!(b, big("-2"));
    b.increment().increment();
    assert!(b.is_zero());
}

#[test]
fn test_mul() {
    assert_eq!(big("100000") * big("25"), big("2500000"));
    assert_eq!(big("-3") * big("4"), big("-12"));
    assert_eq!(big("-3") * big("-4"), big("12"));
    assert_eq!(big("-1") * big("-4"), big("4"));
    assert_eq!(big("0") * big("-4"), BigInteger::zero());
    assert_eq!(big("1") * big("-4"), big("-4"));
    assert_eq!(big("9999999") * big("9999999"), big("99999980000001"));
    assert_eq!(
        big("123456789012345678901234567890") * big("987654321098765432109876543210"),
        big("121932631137021795226185032733622923332237463801111263526900")
    );
}

#[test]
fn test_div() {
    assert_eq!(big("100000") / big("25"), big("4000"));
    assert_eq!(big("120") / big("13"), big("9"));
    assert_eq!(big("-120") / big("13"), big("-9"));
    assert_eq!(big("120") / big("-13"), big("-9"));
    assert_eq!(big("-120") / big("-13"), big("9"));
    assert_eq!(big("12") / big("120"), BigInteger::zero());
    assert_eq!(
        big("10000000000000000000000000000000000") / big("1000"),
        big("10000000000000000000000000000000")
    );
    assert_eq!(
        big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789")
            / big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376"),
        big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215")
    );
}

#[test]
fn test_div_equal_magnitudes() {
    assert_eq!(big("5") / big("5"), big("1"));
    assert_eq!(big("-5") / big("5"), big("-1"));
    assert_eq!(big("5") / big("-5"), big("-1"));
    assert_eq!(big("-123456789012") / big("-123456789012"), big("1"));
}

#[test]
fn test_div_by_zero() {
    assert!(matches!(
        big("7").checked_div(&BigInteger::zero()),
        Err(ArithmeticError::DivisionByZero)
    ));
    assert!(matches!(
        BigInteger::zero().checked_div(&BigInteger::zero()),
        Err(ArithmeticError::DivisionByZero)
    ));
    assert!(matches!(
        big("7").checked_rem(&BigInteger::zero()),
        Err(ArithmeticError::DivisionByZero)
    ));
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = big("7") / BigInteger::zero();
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("-12") % big("8"), big("-4"));
    assert_eq!(big("12") % big("-8"), big("4"));
    assert_eq!(big("10000000000000000") % big("10"), BigInteger::zero());
    assert_eq!(big("0") % big("10"), BigInteger::zero());
    assert_eq!(
        big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245")
            % big("526738495607659438721653478560954837265378495607"),
        big("393707270751296419349581795408095683999332705291")
    );
}

#[test]
fn test_parse_all() {
    let values = BigInteger::parse_all("123 285").unwrap();
    assert_eq!(&values[0] + &values[1], BigInteger::from(408));
    assert!(BigInteger::parse_all("1 two 3").is_err());
}
