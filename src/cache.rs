use lazy_static::*;

use crate::big_integer::{BigInteger, Sign};
use crate::constants::*;

fn build_cache(sign: Sign) -> Vec<BigInteger> {
    (0..=MAX_CONSTANT)
        .map(|val| BigInteger::from_limbs(vec![val as Limb], sign))
        .collect()
}

lazy_static! {
    /// `0, 1, ..., MAX_CONSTANT`
    pub static ref POS_CACHE: Vec<BigInteger> = build_cache(Sign::Positive);
    /// `0, -1, ..., -MAX_CONSTANT`
    pub static ref NEG_CACHE: Vec<BigInteger> = build_cache(Sign::Negative);
}

#[test]
fn cache_is_canonical() {
    use num_traits::Zero;

    assert!(POS_CACHE[0].is_zero());
    assert!(NEG_CACHE[0].is_zero());
    assert_eq!(POS_CACHE[MAX_CONSTANT].to_string(), MAX_CONSTANT.to_string());
    assert_eq!(NEG_CACHE[3].to_string(), "-3");
    assert_eq!(NEG_CACHE[3].sign(), Sign::Negative);
}
