use std::io::{self, Read, Result as IoResult, Write};

pub trait ToBytes {
    /// Serializes `self` into `writer`.
    fn write<W: Write>(&self, writer: W) -> IoResult<()>;
}

pub trait FromBytes: Sized {
    /// Reads `Self` from `reader`.
    fn read<R: Read>(reader: R) -> IoResult<Self>;
}

/// Reads `Self` from `reader`, performing semantic checks on the
/// deserialized value.
pub trait FromBytesChecked: FromBytes {
    fn read_checked<R: Read>(reader: R) -> IoResult<Self>;
}

macro_rules! impl_uint_bytes {
    ($ty:ident) => {
        impl ToBytes for $ty {
            #[inline]
            fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
                writer.write_all(&self.to_le_bytes())
            }
        }

        impl FromBytes for $ty {
            #[inline]
            fn read<R: Read>(mut reader: R) -> IoResult<Self> {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                reader.read_exact(&mut bytes)?;
                Ok($ty::from_le_bytes(bytes))
            }
        }
    };
}

impl_uint_bytes!(u8);
impl_uint_bytes!(u16);
impl_uint_bytes!(u32);
impl_uint_bytes!(u64);
impl_uint_bytes!(u128);

impl ToBytes for bool {
    #[inline]
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        (*self as u8).write(writer)
    }
}

impl FromBytes for bool {
    #[inline]
    fn read<R: Read>(reader: R) -> IoResult<Self> {
        match u8::read(reader)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid boolean encoding",
            )),
        }
    }
}

impl<T: ToBytes> ToBytes for [T] {
    #[inline]
    fn write<W: Write>(&self, mut writer: W) -> IoResult<()> {
        for item in self {
            item.write(&mut writer)?;
        }
        Ok(())
    }
}

impl<T: ToBytes> ToBytes for Vec<T> {
    #[inline]
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        self.as_slice().write(writer)
    }
}

impl<'a, T: 'a + ToBytes> ToBytes for &'a T {
    #[inline]
    fn write<W: Write>(&self, writer: W) -> IoResult<()> {
        (*self).write(writer)
    }
}

/// Takes as input a sequence of objects implementing `ToBytes` and
/// collects their byte representations into a `Vec<u8>`.
#[macro_export]
macro_rules! to_bytes {
    ($($x:expr),*) => ({
        let mut buf = vec![];
        {$crate::push_to_vec!(buf, $($x),*)}.map(|_| buf)
    });
}

#[macro_export]
macro_rules! push_to_vec {
    ($buf:expr, $y:expr, $($x:expr),*) => ({
        {
            $crate::bytes::ToBytes::write(&$y, &mut $buf)
        }.and({$crate::push_to_vec!($buf, $($x),*)})
    });
    ($buf:expr, $x:expr) => ({
        $crate::bytes::ToBytes::write(&$x, &mut $buf)
    })
}

#[cfg(test)]
mod test {
    use super::ToBytes;

    #[test]
    fn test_macro_empty() {
        let array: Vec<u8> = vec![];
        let bytes: Vec<u8> = to_bytes![array].unwrap();
        assert_eq!(&bytes, &[]);
        assert_eq!(bytes.len(), 0);
    }

    #[test]
    fn test_macro() {
        let array1 = [1u8; 32];
        let array2 = [2u8; 16];
        let array3 = [3u8; 8];
        let bytes = to_bytes![array1.to_vec(), array2.to_vec(), array3.to_vec()].unwrap();
        assert_eq!(bytes.len(), 56);

        let mut actual_bytes = Vec::new();
        actual_bytes.extend_from_slice(&array1);
        actual_bytes.extend_from_slice(&array2);
        actual_bytes.extend_from_slice(&array3);
        assert_eq!(bytes, actual_bytes);
    }

    #[test]
    fn test_bool() {
        let bytes = to_bytes![true, false].unwrap();
        assert_eq!(&bytes, &[1u8, 0u8]);
        let mut buf = Vec::new();
        1u64.write(&mut buf).unwrap();
        assert_eq!(buf, vec![1u8, 0, 0, 0, 0, 0, 0, 0]);
    }
}
