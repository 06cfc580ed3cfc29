use crate::{biginteger::BigInteger320, BigInteger, FromBytes, ToBytes, UniformRand};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn test_biginteger_arithmetic(a: BigInteger320, b: BigInteger320) {
    let (smaller, larger) = if a < b { (a, b) } else { (b, a) };

    // a + b - b == a
    let mut sum = larger;
    let carry = sum.add_nocarry(&smaller);
    if !carry {
        let borrow = sum.sub_noborrow(&smaller);
        assert!(!borrow);
        assert_eq!(sum, larger);
    }

    // doubling matches shifting
    let mut doubled = larger;
    doubled.mul2();
    let mut added = larger;
    let carry1 = added.add_nocarry(&larger);
    let mut shifted = larger;
    shifted.muln(1);
    if !carry1 {
        assert_eq!(doubled, added);
        assert_eq!(doubled, shifted);
    }

    // div2 then mul2 restores even numbers
    let mut even = larger;
    even.0[0] &= !1u64;
    let mut halved = even;
    halved.div2();
    halved.mul2();
    assert_eq!(halved, even);
}

fn test_biginteger_bits(a: BigInteger320) {
    assert_eq!(a.is_odd(), a.get_bit(0));
    assert_eq!(a.is_even(), !a.is_odd());
    let bits = a.to_bits();
    assert_eq!(bits.len() as u32, a.num_bits());
    assert_eq!(BigInteger320::from_bits(&bits), a);
}

fn test_biginteger_bytes(a: BigInteger320) {
    let mut bytes = vec![];
    a.write(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 40);
    let b = BigInteger320::read(bytes.as_slice()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_biginteger320() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..100 {
        let a: BigInteger320 = UniformRand::rand(&mut rng);
        let b: BigInteger320 = UniformRand::rand(&mut rng);
        test_biginteger_arithmetic(a, b);
        test_biginteger_bits(a);
        test_biginteger_bytes(a);
    }

    let one = BigInteger320::from(1);
    assert!(one.is_odd());
    assert_eq!(one.num_bits(), 1);
    assert!(!one.is_zero());
    assert!(BigInteger320::from(0).is_zero());

    // wnaf of 7 = [-1, 0, 0, 1]
    assert_eq!(BigInteger320::from(7).find_wnaf(), vec![-1, 0, 0, 1]);
}
