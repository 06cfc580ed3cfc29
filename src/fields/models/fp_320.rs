use std::{
    cmp::{Ord, Ordering, PartialOrd},
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Error as IoError, ErrorKind, Read, Result as IoResult, Write},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::{
    biginteger::{arithmetic as fa, BigInteger as _BigInteger, BigInteger320 as BigInteger},
    bytes::{FromBytes, ToBytes},
    fields::{Field, FpParameters, LegendreSymbol, PrimeField, SquareRootField},
    serialize::{buffer_byte_size, CanonicalDeserialize, CanonicalDeserializeWithFlags,
                CanonicalSerialize, CanonicalSerializeWithFlags, EmptyFlags, Flags,
                SerializationError},
    SemanticallyValid,
};

use unroll::unroll_for_loops;

impl_Fp!(Fp320, Fp320Parameters, BigInteger, BigInteger, 5);
