use crate::field_new;
use crate::{
    biginteger::BigInteger320,
    bytes::{FromBytes, ToBytes},
    curves::{
        mnt4::{G1Affine, MNT4, TWIST_COEFF_A},
        models::{ModelParameters, SWModelParameters},
        short_weierstrass_projective::{GroupAffine, GroupProjective},
        AffineCurve, PairingCurve, PairingEngine,
    },
    fields::mnt4::{fq::FQ_ZERO, Fq, Fq2, Fq4, Fr},
};
use std::io;
use std::io::{Read, Result as IoResult, Write};

pub type G2Affine = GroupAffine<MNT4G2Parameters>;
pub type G2Projective = GroupProjective<MNT4G2Parameters>;

impl PairingCurve for G2Affine {
    type Engine = MNT4;
    type Prepared = G2Prepared;
    type PairWith = G1Affine;
    type PairingResult = Fq4;

    #[inline(always)]
    fn prepare(&self) -> Self::Prepared {
        Self::Prepared::from_affine(self)
    }

    #[inline(always)]
    fn pairing_with(&self, other: &Self::PairWith) -> Self::PairingResult {
        MNT4::pairing(*other, *self)
    }
}

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct MNT4G2Parameters;

impl ModelParameters for MNT4G2Parameters {
    type BaseField = Fq2;
    type ScalarField = Fr;
}

/// MUL_BY_A_C0 = NONRESIDUE * COEFF_A
pub const MUL_BY_A_C0: Fq = field_new!(
    Fq,
    BigInteger320([
        9379015694948865065,
        3933863906897692531,
        7183785805598089445,
        17382890709766103498,
        3934325337380,
    ])
);

/// MUL_BY_A_C1 = NONRESIDUE * COEFF_A
pub const MUL_BY_A_C1: Fq = field_new!(
    Fq,
    BigInteger320([
        9379015694948865065,
        3933863906897692531,
        7183785805598089445,
        17382890709766103498,
        3934325337380,
    ])
);

impl SWModelParameters for MNT4G2Parameters {
    const COEFF_A: Fq2 = TWIST_COEFF_A;
    const COEFF_B: Fq2 = field_new!(
        Fq2,
        FQ_ZERO,
        field_new!(
            Fq,
            BigInteger320([
                9511110677122940475,
                13403516020116973437,
                1464701424831086967,
                4646785117660390394,
                1747881737068,
            ])
        ),
    );

    /// COFACTOR =
    /// 475922286169261325753349249653048451545124879932565935237842521413255878328503110407553025
    const COFACTOR: &'static [u64] = &[
        15480692783052488705,
        9802782456999489873,
        14622846468721090623,
        11702080941310629006,
        4110145082483,
    ];

    /// COFACTOR^(-1) mod r =
    /// 475922286169261325753349249653048451545124878207887910632124039320641839552134835598065665
    const COFACTOR_INV: Fr = field_new!(
        Fr,
        BigInteger320([
            8065818351154103109,
            7537800592537321232,
            747075088561892445,
            6335802185495034136,
            1874289794052,
        ])
    );

    /// AFFINE_GENERATOR_COEFFS = (G2_GENERATOR_X, G2_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G2_GENERATOR_X, G2_GENERATOR_Y);

    #[inline(always)]
    fn mul_by_a(elt: &Fq2) -> Fq2 {
        field_new!(Fq2, MUL_BY_A_C0 * &elt.c0, MUL_BY_A_C1 * &elt.c1)
    }
}

const G2_GENERATOR_X: Fq2 = field_new!(Fq2, G2_GENERATOR_X_C0, G2_GENERATOR_X_C1);
const G2_GENERATOR_Y: Fq2 = field_new!(Fq2, G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1);

pub const G2_GENERATOR_X_C0: Fq = field_new!(
    Fq,
    BigInteger320([
        5356671649366391794,
        2684151262065976452,
        4683110650642896126,
        10421299515941681582,
        1618695480960,
    ])
);

pub const G2_GENERATOR_X_C1: Fq = field_new!(
    Fq,
    BigInteger320([
        133394645290266480,
        15395232932057272770,
        18271324022738539173,
        9095178119640120034,
        2303787573609,
    ])
);

pub const G2_GENERATOR_Y_C0: Fq = field_new!(
    Fq,
    BigInteger320([
        16920448081812496532,
        15580160192086626100,
        3974467672100342742,
        8216505962266760277,
        2643162835232,
    ])
);

pub const G2_GENERATOR_Y_C1: Fq = field_new!(
    Fq,
    BigInteger320([
        73816197493558356,
        8663991890578965996,
        11575903875707445958,
        17953546933481201011,
        2167465829200,
    ])
);

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct G2Prepared {
    pub x: Fq2,
    pub y: Fq2,
    pub x_over_twist: Fq2,
    pub y_over_twist: Fq2,
    pub infinity: bool,
    pub double_coefficients: Vec<AteDoubleCoefficients>,
    pub addition_coefficients: Vec<AteAdditionCoefficients>,
}

impl ToBytes for G2Prepared {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.x.write(&mut writer)?;
        self.y.write(&mut writer)?;
        self.x_over_twist.write(&mut writer)?;
        self.y_over_twist.write(&mut writer)?;
        self.infinity.write(&mut writer)?;
        (self.double_coefficients.len() as u32).write(&mut writer)?;
        for c in &self.double_coefficients {
            c.write(&mut writer)?;
        }
        (self.addition_coefficients.len() as u32).write(&mut writer)?;
        for c in &self.addition_coefficients {
            c.write(&mut writer)?;
        }
        Ok(())
    }
}

impl FromBytes for G2Prepared {
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let x = Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let y = Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let x_over_twist =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let y_over_twist =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let infinity = bool::read(&mut reader)?;

        let double_coefficients_len = u32::read(&mut reader)? as usize;
        let mut double_coefficients = Vec::with_capacity(double_coefficients_len);
        for _ in 0..double_coefficients_len {
            double_coefficients.push(
                AteDoubleCoefficients::read(&mut reader)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            );
        }

        let addition_coefficients_len = u32::read(&mut reader)? as usize;
        let mut addition_coefficients = Vec::with_capacity(addition_coefficients_len);
        for _ in 0..addition_coefficients_len {
            addition_coefficients.push(
                AteAdditionCoefficients::read(&mut reader)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            );
        }

        Ok(G2Prepared {
            x,
            y,
            x_over_twist,
            y_over_twist,
            infinity,
            double_coefficients,
            addition_coefficients,
        })
    }
}

impl G2Prepared {
    pub fn from_affine(point: &G2Affine) -> Self {
        MNT4::ate_precompute_g2(&point.into_projective())
    }
}

impl Default for G2Prepared {
    fn default() -> Self {
        Self::from_affine(&G2Affine::prime_subgroup_generator())
    }
}

pub(super) struct G2ProjectiveExtended {
    pub(crate) x: Fq2,
    pub(crate) y: Fq2,
    pub(crate) z: Fq2,
    pub(crate) t: Fq2,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct AteDoubleCoefficients {
    pub(crate) c_h: Fq2,
    pub(crate) c_4c: Fq2,
    pub(crate) c_j: Fq2,
    pub(crate) c_l: Fq2,
}

impl ToBytes for AteDoubleCoefficients {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c_h.write(&mut writer)?;
        self.c_4c.write(&mut writer)?;
        self.c_j.write(&mut writer)?;
        self.c_l.write(&mut writer)
    }
}

impl FromBytes for AteDoubleCoefficients {
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c_h =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let c_4c =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let c_j =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let c_l =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(AteDoubleCoefficients { c_h, c_4c, c_j, c_l })
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct AteAdditionCoefficients {
    pub(crate) c_l1: Fq2,
    pub(crate) c_rz: Fq2,
}

impl ToBytes for AteAdditionCoefficients {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.c_l1.write(&mut writer)?;
        self.c_rz.write(&mut writer)
    }
}

impl FromBytes for AteAdditionCoefficients {
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let c_l1 =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let c_rz =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(AteAdditionCoefficients { c_l1, c_rz })
    }
}

/// Slope data recorded per step of the affine-slope Miller loop.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct G2PreparedCoefficients {
    pub r_y: Fq2,
    pub gamma: Fq2,
    pub gamma_x: Fq2,
}

impl ToBytes for G2PreparedCoefficients {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.r_y.write(&mut writer)?;
        self.gamma.write(&mut writer)?;
        self.gamma_x.write(&mut writer)
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct G2PreparedAffine {
    pub q: G2Affine,
    pub coeffs: Vec<G2PreparedCoefficients>,
}

impl ToBytes for G2PreparedAffine {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.q.write(&mut writer)?;
        (self.coeffs.len() as u32).write(&mut writer)?;
        for c in &self.coeffs {
            c.write(&mut writer)?;
        }
        Ok(())
    }
}
