use crate::field_new;
use crate::{
    biginteger::BigInteger320,
    bytes::{FromBytes, ToBytes},
    curves::{
        mnt4::{G2Affine, MNT4},
        models::{ModelParameters, SWModelParameters},
        short_weierstrass_projective::{GroupAffine, GroupProjective},
        AffineCurve, PairingCurve, PairingEngine,
    },
    fields::mnt4::{Fq, Fq2, Fq4, Fr},
};
use std::io;
use std::io::{Read, Result as IoResult, Write};

pub type G1Affine = GroupAffine<MNT4G1Parameters>;
pub type G1Projective = GroupProjective<MNT4G1Parameters>;

impl PairingCurve for G1Affine {
    type Engine = MNT4;
    type Prepared = G1Prepared;
    type PairWith = G2Affine;
    type PairingResult = Fq4;

    #[inline(always)]
    fn prepare(&self) -> Self::Prepared {
        Self::Prepared::from(*self)
    }

    #[inline(always)]
    fn pairing_with(&self, other: &Self::PairWith) -> Self::PairingResult {
        MNT4::pairing(*self, *other)
    }
}

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct MNT4G1Parameters;

impl ModelParameters for MNT4G1Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for MNT4G1Parameters {
    /// COEFF_A = 2
    const COEFF_A: Fq = field_new!(
        Fq,
        BigInteger320([
            3568597988870129848,
            15257338106490985450,
            10069779447956199041,
            5922375556522222383,
            3858029504390,
        ])
    );

    /// COEFF_B =
    /// 423894536526684178289416011533888240029318103673896002803341544124054745019340795360841685
    const COEFF_B: Fq = field_new!(
        Fq,
        BigInteger320([
            7842808090366692145,
            288200302308193399,
            4162060950790347941,
            5488589108190218591,
            1553456013645,
        ])
    );

    /// COFACTOR = 1
    const COFACTOR: &'static [u64] = &[1];

    /// COFACTOR^(-1) mod r = 1
    const COFACTOR_INV: Fr = crate::fields::mnt4::fr::FR_ONE;

    /// AFFINE_GENERATOR_COEFFS = (G1_GENERATOR_X, G1_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G1_GENERATOR_X, G1_GENERATOR_Y);
}

pub const G1_GENERATOR_X: Fq = field_new!(
    Fq,
    BigInteger320([
        6046301378120906932,
        15105298306031900263,
        15757949605695610691,
        6113949277267426050,
        3063081829217,
    ])
);

pub const G1_GENERATOR_Y: Fq = field_new!(
    Fq,
    BigInteger320([
        8798367863963590781,
        9770379341721339603,
        17697354471293810920,
        15252694996423733496,
        3845520398052,
    ])
);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct G1Prepared {
    pub x: Fq,
    pub y: Fq,
    pub x_twist: Fq2,
    pub y_twist: Fq2,
    pub infinity: bool,
}

impl ToBytes for G1Prepared {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.x.write(&mut writer)?;
        self.y.write(&mut writer)?;
        self.x_twist.write(&mut writer)?;
        self.y_twist.write(&mut writer)?;
        self.infinity.write(&mut writer)
    }
}

impl FromBytes for G1Prepared {
    fn read<R: Read>(mut reader: R) -> IoResult<Self> {
        let x = Fq::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let y = Fq::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let x_twist =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let y_twist =
            Fq2::read(&mut reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let infinity = bool::read(&mut reader)?;
        Ok(G1Prepared {
            x,
            y,
            x_twist,
            y_twist,
            infinity,
        })
    }
}

impl From<G1Affine> for G1Prepared {
    fn from(other: G1Affine) -> Self {
        MNT4::ate_precompute_g1(&other.into_projective())
    }
}

impl Default for G1Prepared {
    fn default() -> Self {
        Self::from(G1Affine::prime_subgroup_generator())
    }
}

/// Precomputed data for the affine-slope Miller loop: the point itself plus
/// its y-coordinate scaled by the square of the twist.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct G1PreparedAffine {
    pub p: G1Affine,
    pub py_twist_squared: Fq2,
}

impl ToBytes for G1PreparedAffine {
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        self.p.write(&mut writer)?;
        self.py_twist_squared.write(&mut writer)
    }
}
