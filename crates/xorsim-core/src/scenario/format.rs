// crates/xorsim-core/src/scenario/format.rs

use crate::error::{Result, XorSimError};
use crate::scenario::scenario::Scenario;
use crate::sim::round::XorSource;

const MAGIC: &[u8; 4] = b"XPS1";
pub const VERSION: u16 = 1;

const FLAG_EXPLICIT_DOMAIN: u16 = 1 << 0;
const FLAG_XOR_OWN: u16 = 1 << 1;
const KNOWN_FLAGS: u16 = FLAG_EXPLICIT_DOMAIN | FLAG_XOR_OWN;

/// Binary scenario file (.xps).
/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// flags:u16          (bit0 explicit domain, bit1 xor source = own)
/// domain_bits:u8     (0 unless bit0)
/// rounds:u64
/// mask:u32
/// n:u32
/// values: repeated u32 (n times)
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
///
/// Fails instead of truncating when `domain_bits` does not fit a u8 or there
/// are more than u32::MAX values.
pub fn encode(s: &Scenario) -> Result<Vec<u8>> {
    let bits = match s.domain_bits {
        Some(b) => u8::try_from(b).map_err(|_| {
            XorSimError::ScenarioFormat(format!("domain_bits {b} does not fit in u8"))
        })?,
        None => 0,
    };
    let n = u32::try_from(s.values.len()).map_err(|_| {
        XorSimError::ScenarioFormat(format!("{} values exceed u32::MAX", s.values.len()))
    })?;

    let mut b = Vec::with_capacity(4 + 2 + 2 + 1 + 8 + 4 + 4 + 4 * s.values.len() + 4 + 16);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());

    let mut flags = 0u16;
    if s.domain_bits.is_some() {
        flags |= FLAG_EXPLICIT_DOMAIN;
    }
    if s.xor_source == XorSource::Own {
        flags |= FLAG_XOR_OWN;
    }
    b.extend_from_slice(&flags.to_le_bytes());

    b.push(bits);

    b.extend_from_slice(&s.rounds.to_le_bytes());
    b.extend_from_slice(&s.mask.to_le_bytes());

    b.extend_from_slice(&n.to_le_bytes());
    for v in &s.values {
        b.extend_from_slice(&v.to_le_bytes());
    }

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    Ok(b)
}

pub fn decode(bytes: &[u8]) -> Result<Scenario> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(XorSimError::ScenarioFormat("bad magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version != VERSION {
        return Err(XorSimError::ScenarioFormat(format!(
            "unsupported version {version}"
        )));
    }

    let flags = read_u16(bytes, &mut i)?;
    if flags & !KNOWN_FLAGS != 0 {
        return Err(XorSimError::ScenarioFormat(format!(
            "unknown flags 0x{flags:04x}"
        )));
    }

    let bits = read_u8(bytes, &mut i)?;
    let rounds = read_u64(bytes, &mut i)?;
    let mask = read_u32(bytes, &mut i)?;

    let n = read_u32(bytes, &mut i)? as usize;
    // Bound the allocation by what the buffer can actually hold.
    need(bytes, i, n.saturating_mul(4))?;
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(read_u32(bytes, &mut i)?);
    }

    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(XorSimError::ScenarioFormat("crc32 mismatch".into()));
    }

    if bytes.len() < i + 16 {
        return Err(XorSimError::ScenarioFormat("missing blake3".into()));
    }
    let mut h_expected = [0u8; 16];
    h_expected.copy_from_slice(&bytes[i..i + 16]);
    let h_actual = blake3_16(&bytes[0..i]);
    if h_expected != h_actual {
        return Err(XorSimError::ScenarioFormat("blake3 mismatch".into()));
    }
    i += 16;

    if i != bytes.len() {
        return Err(XorSimError::ScenarioFormat(format!(
            "{} trailing bytes",
            bytes.len() - i
        )));
    }

    Ok(Scenario {
        rounds,
        mask,
        values,
        domain_bits: (flags & FLAG_EXPLICIT_DOMAIN != 0).then_some(bits as u32),
        xor_source: if flags & FLAG_XOR_OWN != 0 {
            XorSource::Own
        } else {
            XorSource::First
        },
    })
}

/// Stable scenario identifier: the trailing blake3_16 that `encode()` appends.
pub fn scenario_id_16(s: &Scenario) -> Result<[u8; 16]> {
    let enc = encode(s)?;
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    Ok(out)
}

pub fn scenario_id_hex(s: &Scenario) -> Result<String> {
    Ok(hex16(&scenario_id_16(s)?))
}

fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// First 16 bytes of the blake3 digest.
fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&blake3::hash(bytes).as_bytes()[..16]);
    out
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i.saturating_add(n) {
        return Err(XorSimError::ScenarioFormat("unexpected eof".into()));
    }
    Ok(())
}

fn take<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    need(bytes, *i, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*i..*i + N]);
    *i += N;
    Ok(out)
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    Ok(take::<1>(bytes, i)?[0])
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    Ok(u16::from_le_bytes(take(bytes, i)?))
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    Ok(u32::from_le_bytes(take(bytes, i)?))
}

fn read_u64(bytes: &[u8], i: &mut usize) -> Result<u64> {
    Ok(u64::from_le_bytes(take(bytes, i)?))
}
