use crate::{
    curves::{
        mnt4::{
            g1::MNT4G1Parameters, g2::MNT4G2Parameters, G1Affine, G1Projective, G2Affine,
            G2Projective, MNT4,
        },
        tests::{curve_tests, sw_projective_tests},
        AffineCurve, PairingCurve, PairingEngine, ProjectiveCurve,
    },
    fields::mnt4::{fq4::Fq4, fr::Fr},
    groups::tests::group_test,
    Field, SemanticallyValid, UniformRand,
};

#[test]
fn test_g1_projective_curve() {
    curve_tests::<G1Projective>();
    sw_projective_tests::<MNT4G1Parameters>()
}

#[test]
fn test_g1_projective_group() {
    let a: G1Projective = rand::random();
    let b: G1Projective = rand::random();
    group_test(a, b);
}

#[test]
fn test_g1_generator() {
    let generator = G1Affine::prime_subgroup_generator();
    assert!(generator.is_valid());
}

#[test]
fn test_g2_projective_curve() {
    curve_tests::<G2Projective>();
    sw_projective_tests::<MNT4G2Parameters>()
}

#[test]
fn test_g2_projective_group() {
    let a: G2Projective = rand::random();
    let b: G2Projective = rand::random();
    group_test(a, b);
}

#[test]
fn test_g2_generator() {
    let generator = G2Affine::prime_subgroup_generator();
    assert!(generator.is_valid());
}

#[test]
fn test_bilinearity() {
    use crate::fields::PrimeField;

    let a: G1Projective = rand::random();
    let b: G2Projective = rand::random();
    let s: Fr = rand::random();

    let sa = a * &s;
    let sb = b * &s;

    let ans1 = MNT4::pairing(sa, b);
    let ans2 = MNT4::pairing(a, sb);
    let ans3 = MNT4::pairing(a, b).pow(s.into_repr());

    assert_eq!(ans1, ans2);
    assert_eq!(ans2, ans3);

    assert_ne!(ans1, Fq4::one());
    assert_ne!(ans2, Fq4::one());
    assert_ne!(ans3, Fq4::one());

    assert_eq!(ans1.pow(Fr::characteristic()), Fq4::one());
    assert_eq!(ans2.pow(Fr::characteristic()), Fq4::one());
    assert_eq!(ans3.pow(Fr::characteristic()), Fq4::one());
}

#[test]
fn test_pairing_with_zero() {
    let a: G1Projective = rand::random();
    let b: G2Projective = rand::random();

    assert_eq!(MNT4::pairing(a, G2Projective::zero()), Fq4::one());
    assert_eq!(MNT4::pairing(G1Projective::zero(), b), Fq4::one());
    assert_eq!(
        MNT4::pairing(G1Projective::zero(), G2Projective::zero()),
        Fq4::one()
    );
}

#[test]
fn test_cyclotomic_square_matches_square() {
    let a: G1Projective = rand::random();
    let b: G2Projective = rand::random();

    // pairing outputs live in the cyclotomic subgroup
    let g = MNT4::pairing(a, b);
    assert_eq!(g.cyclotomic_square(), g.square());
}

#[test]
fn test_product_of_pairings() {
    let rng = &mut rand::thread_rng();

    let a = G1Projective::rand(rng).into_affine();
    let b = G2Projective::rand(rng).into_affine();
    let c = G1Projective::rand(rng).into_affine();
    let d = G2Projective::rand(rng).into_affine();

    let ans1 = MNT4::pairing(a, b) * &MNT4::pairing(c, d);

    let a = a.prepare();
    let b = b.prepare();
    let c = c.prepare();
    let d = d.prepare();
    let ans2 = MNT4::product_of_pairings([(&a, &b), (&c, &d)].iter());
    assert_eq!(ans1, ans2);
}

#[test]
fn test_pairing_affine_projective_consistency() {
    let a: G1Projective = rand::random();
    let b: G2Projective = rand::random();
    let a = a.into_affine();
    let b = b.into_affine();

    let ans1 = MNT4::pairing(a, b);
    let ans2 = MNT4::pairing_affine(&a, &b).unwrap();
    assert_eq!(ans1, ans2);
}

#[test]
fn test_final_exponentiation_zero() {
    assert!(MNT4::final_exponentiation(&Fq4::zero()).is_err());
}
