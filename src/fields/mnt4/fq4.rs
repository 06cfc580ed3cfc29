use crate::{
    biginteger::BigInteger320 as BigInteger,
    field_new,
    fields::{
        fp4::{Fp4, Fp4Parameters},
        mnt4::{
            fq::{Fq, FQ_ONE, FQ_ZERO},
            fq2::{Fq2, Fq2Parameters},
        },
    },
};

pub type Fq4 = Fp4<Fq4Parameters>;

pub struct Fq4Parameters;

impl Fp4Parameters for Fq4Parameters {
    type Fp2Params = Fq2Parameters;

    // beta = X
    const NONRESIDUE: Fq2 = field_new!(Fq2, FQ_ZERO, FQ_ONE);

    const FROBENIUS_COEFF_FP4_C1: [Fq; 4] = [
        // Y^{q^0} = beta^((q^0 - 1)/ 4)*Y = 1*Y
        FQ_ONE,
        // Y^{q^1} = beta^((q^1 - 1)/ 4)*Y
        field_new!(
            Fq,
            BigInteger([
                16439849825752526567,
                14772594681319164557,
                16175669228740845684,
                4590896976404796446,
                3810243174413,
            ])
        ),
        // Y^{q^2} = beta^((q^2 - 1)/ 4)*Y
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
        // Y^{q^3} = beta^((q^3 - 1)/ 4)*Y
        field_new!(
            Fq,
            BigInteger([
                16494084033238978842,
                8405712270147289988,
                16893921313687769205,
                7111183964905832559,
                299901908070,
            ])
        ),
    ];
}
