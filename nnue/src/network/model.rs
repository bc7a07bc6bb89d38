use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use log::info;

use crate::error::NnueError;

use super::{HEADER_SIZE, H1, H2, INPUT_SIZE, MAGICS};

/// Integer network weights.
///
/// File layout after the 128 byte header, all little-endian `i16`:
/// `W1[INPUT][H1]`, `B1[H1]`, `W2[H1][H2]`, `B2[H2]`, `W3[H2]`, `B3`.
pub struct Network {
    // [feature][h1]
    pub(crate) w1: Box<[i16]>,
    pub(crate) b1: Box<[i16]>,
    // [h1][h2]
    pub(crate) w2: Box<[i16]>,
    pub(crate) b2: Box<[i16]>,
    pub(crate) w3: Box<[i16]>,
    pub(crate) b3: i16,
}

impl Network {
    pub fn from_parts(
        w1: Vec<i16>,
        b1: Vec<i16>,
        w2: Vec<i16>,
        b2: Vec<i16>,
        w3: Vec<i16>,
        b3: i16,
    ) -> Result<Self, NnueError> {
        check_len("W1", &w1, INPUT_SIZE * H1)?;
        check_len("B1", &b1, H1)?;
        check_len("W2", &w2, H1 * H2)?;
        check_len("B2", &b2, H2)?;
        check_len("W3", &w3, H2)?;

        Ok(Self {
            w1: w1.into_boxed_slice(),
            b1: b1.into_boxed_slice(),
            w2: w2.into_boxed_slice(),
            b2: b2.into_boxed_slice(),
            w3: w3.into_boxed_slice(),
            b3,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, NnueError> {
        let path = path.as_ref();
        let network = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!("Loaded NNUE weights from {}", path.display());
        Ok(network)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, NnueError> {
        let mut header = [0u8; HEADER_SIZE];
        read_section(&mut reader, &mut header, "header")?;

        let mut magic = [0u8; 6];
        magic.copy_from_slice(&header[..6]);
        if !MAGICS.iter().any(|m| **m == magic) {
            return Err(NnueError::InvalidMagic { found: magic });
        }

        let w1 = read_i16s(&mut reader, INPUT_SIZE * H1, "W1")?;
        let b1 = read_i16s(&mut reader, H1, "B1")?;
        let w2 = read_i16s(&mut reader, H1 * H2, "W2")?;
        let b2 = read_i16s(&mut reader, H2, "B2")?;
        let w3 = read_i16s(&mut reader, H2, "W3")?;
        let b3 = read_i16s(&mut reader, 1, "B3")?[0];

        Self::from_parts(w1, b1, w2, b2, w3, b3)
    }

    /// Writes the network in the format `from_reader` accepts.
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut writer = BufWriter::new(writer);

        let mut header = [0u8; HEADER_SIZE];
        header[..6].copy_from_slice(MAGICS[0]);
        writer.write_all(&header)?;

        for section in [&self.w1, &self.b1, &self.w2, &self.b2, &self.w3] {
            for value in section.iter() {
                writer.write_all(&value.to_le_bytes())?;
            }
        }
        writer.write_all(&self.b3.to_le_bytes())?;
        writer.flush()
    }

    /// Row of first-layer weights for one input feature.
    #[inline(always)]
    pub(crate) fn feature_weights(&self, feature: usize) -> &[i16] {
        let offset = feature * H1;
        &self.w1[offset..offset + H1]
    }
}

fn check_len(section: &'static str, values: &[i16], expected: usize) -> Result<(), NnueError> {
    if values.len() != expected {
        return Err(NnueError::DimensionMismatch {
            section,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn read_section<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    section: &'static str,
) -> Result<(), NnueError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => NnueError::Truncated { section },
        _ => NnueError::Io(e),
    })
}

fn read_i16s<R: Read>(
    reader: &mut R,
    len: usize,
    section: &'static str,
) -> Result<Vec<i16>, NnueError> {
    let mut bytes = vec![0u8; len * 2];
    read_section(reader, &mut bytes, section)?;

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
