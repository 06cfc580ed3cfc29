use crate::{
    fields::tests::{field_test, frobenius_test, primefield_test, sqrt_field_test},
    Field,
};
use rand::{rngs::OsRng, Rng};

#[test]
fn test_mnt4_fr() {
    use crate::fields::mnt4::Fr;

    let a: Fr = OsRng.gen();
    let b: Fr = OsRng.gen();
    field_test(a, b);
    sqrt_field_test(a);
    primefield_test::<Fr>();
}

#[test]
fn test_mnt4_fq() {
    use crate::fields::mnt4::Fq;

    let a: Fq = OsRng.gen();
    let b: Fq = OsRng.gen();
    field_test(a, b);
    sqrt_field_test(a);
    primefield_test::<Fq>();
}

#[test]
fn test_mnt4_fq2() {
    use crate::fields::mnt4::{Fq, Fq2};

    let a: Fq2 = OsRng.gen();
    let b: Fq2 = OsRng.gen();
    field_test(a, b);
    sqrt_field_test(a);
    frobenius_test::<Fq2, _>(Fq::characteristic(), 13);
}

#[test]
fn test_mnt4_fq4() {
    use crate::fields::mnt4::{Fq, Fq4};

    let a: Fq4 = OsRng.gen();
    let b: Fq4 = OsRng.gen();
    field_test(a, b);
    frobenius_test::<Fq4, _>(Fq::characteristic(), 13);
}
