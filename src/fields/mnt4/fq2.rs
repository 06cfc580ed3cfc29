use crate::{
    biginteger::BigInteger320 as BigInteger,
    field_new,
    fields::{
        fp2::{Fp2, Fp2Parameters},
        mnt4::fq::{Fq, FQ_ONE},
    },
};

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    // alpha = 17
    const NONRESIDUE: Fq = field_new!(
        Fq,
        BigInteger([
            2709730703260633621,
            13556085429182073539,
            10903316137158576359,
            5319113788683590444,
            4022235209932,
        ])
    );

    // quadratic nonresidue (8, 1) of Fq2
    const QUADRATIC_NONRESIDUE: (Fq, Fq) = (
        field_new!(
            Fq,
            BigInteger([
                7706310747053761245,
                9941175645274129776,
                14857322459377157960,
                7030003475866554129,
                3101682770110,
            ])
        ),
        FQ_ONE,
    );

    const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[
        // X^{q^0} = alpha^((q^0 - 1)/ 2)*X = 1*X
        FQ_ONE,
        // X^{q^1} = alpha^((q^1 - 1)/ 2)*X
        field_new!(
            Fq,
            BigInteger([
                12702890790846888869,
                6326265861366186013,
                364584707886187945,
                8740893163049517815,
                2181130330288,
            ])
        ),
    ];
}
