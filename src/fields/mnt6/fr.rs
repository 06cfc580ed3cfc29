use crate::{
    biginteger::BigInteger320 as BigInteger,
    field_new,
    fields::{Fp320, Fp320Parameters, FpParameters},
};

pub type Fr = Fp320<FrParameters>;

pub struct FrParameters;

pub const FR_ONE: Fr = field_new!(Fr, FrParameters::R);
pub const FR_ZERO: Fr = field_new!(Fr, BigInteger([0, 0, 0, 0, 0]));

impl Fp320Parameters for FrParameters {}
impl FpParameters for FrParameters {
    type BigInt = BigInteger;

    // MODULUS = 475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137
    const MODULUS: BigInteger = BigInteger([
        14487189785281953793,
        4731562877756902930,
        14622846468719063274,
        11702080941310629006,
        4110145082483,
    ]);

    const MODULUS_BITS: u32 = 298;

    const CAPACITY: u32 = Self::MODULUS_BITS - 1;

    const REPR_SHAVE_BITS: u32 = 22;

    const R: BigInteger = BigInteger([
        1784298994435064924,
        16852041090100268533,
        14258261760832875328,
        2961187778261111191,
        1929014752195,
    ]);

    const R2: BigInteger = BigInteger([
        28619103704175136,
        11702218449377544339,
        7403203599591297249,
        2248105543421449339,
        2357678148148,
    ]);

    const INV: u64 = 12714121028002250751;

    // GENERATOR = 17
    const GENERATOR: BigInteger = BigInteger([
        2709730703260633621,
        13556085429182073539,
        10903316137158576359,
        5319113788683590444,
        4022235209932,
    ]);

    const TWO_ADICITY: u32 = 17;

    const ROOT_OF_UNITY: BigInteger = BigInteger([
        9821480371597472441,
        9468346035609379175,
        9963748368231707135,
        14865337659602750405,
        3984815592673,
    ]);

    const T: BigInteger = BigInteger([
        0x70964866b2d38b3,
        0x987520d4f1af2890,
        0x2a47657764b1ae89,
        0x6a39d133124ed3d8,
        0x1de7bde,
    ]);

    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x384b24335969c59,
        0xcc3a906a78d79448,
        0x1523b2bbb258d744,
        0x351ce899892769ec,
        0xef3def,
    ]);

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInteger([
        0x64866b2d38b30000,
        0x20d4f1af28900709,
        0x657764b1ae899875,
        0xd133124ed3d82a47,
        0x1de7bde6a39,
    ]);
}
