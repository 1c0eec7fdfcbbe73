// wallet-core/src/crypto/bytes.rs
//
// Byte coercion - mọi dạng input (bytes, hex, text, integer, bigint) → Vec<u8>
//
// Union đóng: mỗi variant có đúng một cách convert. Lỗi InvalidInputType chỉ
// xảy ra ở boundary dynamic (serde_json::Value).

use crate::error::{EncodingError, WalletResult};
use num_bigint::BigUint;
use serde_json::Value;
use std::borrow::Cow;

const HEX_PREFIX: &str = "0x";

/// Input accepted by [`to_buffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteInput<'a> {
    /// Raw bytes (or an integer sequence already narrowed to bytes), unchanged
    Raw(Cow<'a, [u8]>),
    /// Explicit hex, `0x` optional, odd length left-padded
    Hex(&'a str),
    /// `0x`-prefixed hex is decoded, anything else is taken as UTF-8
    Text(&'a str),
    /// Minimal big-endian encoding
    Integer(u64),
    /// Minimal big-endian encoding
    BigInt(BigUint),
    /// Absent value → empty buffer
    Empty,
}

impl<'a> ByteInput<'a> {
    pub fn into_bytes(self) -> WalletResult<Vec<u8>> {
        match self {
            ByteInput::Raw(bytes) => Ok(bytes.into_owned()),
            ByteInput::Hex(value) => {
                let digits = strip_hex_prefix(value);
                if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(EncodingError::InvalidHexString(value.to_string()).into());
                }
                decode_hex_digits(digits)
            }
            ByteInput::Text(value) if is_hex_string(value, None) => {
                decode_hex_digits(strip_hex_prefix(value))
            }
            ByteInput::Text(value) => Ok(value.as_bytes().to_vec()),
            ByteInput::Integer(value) => Ok(minimal_be_bytes(&value.to_be_bytes())),
            ByteInput::BigInt(value) => Ok(value.to_bytes_be()),
            ByteInput::Empty => Ok(Vec::new()),
        }
    }
}

impl<'a> From<&'a [u8]> for ByteInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteInput::Raw(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        ByteInput::Raw(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for ByteInput<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        ByteInput::Raw(Cow::Owned(bytes))
    }
}

impl<'a> From<&'a str> for ByteInput<'a> {
    fn from(value: &'a str) -> Self {
        ByteInput::Text(value)
    }
}

impl From<u64> for ByteInput<'static> {
    fn from(value: u64) -> Self {
        ByteInput::Integer(value)
    }
}

impl From<BigUint> for ByteInput<'static> {
    fn from(value: BigUint) -> Self {
        ByteInput::BigInt(value)
    }
}

impl<'a, T> From<Option<T>> for ByteInput<'a>
where
    T: Into<ByteInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ByteInput::Empty, Into::into)
    }
}

/// Dynamic boundary: JSON values from config files or FFI payloads.
impl<'a> TryFrom<&'a Value> for ByteInput<'a> {
    type Error = crate::error::WalletError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(ByteInput::Empty),
            Value::String(s) => Ok(ByteInput::Text(s)),
            Value::Number(n) => n
                .as_u64()
                .map(ByteInput::Integer)
                .ok_or_else(|| EncodingError::InvalidInputType(format!("number {}", n)).into()),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(ByteInput::from)
                .ok_or_else(|| {
                    EncodingError::InvalidInputType("array with non-byte element".to_string())
                        .into()
                }),
            Value::Bool(_) => Err(EncodingError::InvalidInputType("boolean".to_string()).into()),
            Value::Object(_) => Err(EncodingError::InvalidInputType("object".to_string()).into()),
        }
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Canonicalize any supported input to bytes.
pub fn to_buffer<'a>(input: impl Into<ByteInput<'a>>) -> WalletResult<Vec<u8>> {
    input.into().into_bytes()
}

/// `"0x"` + lowercase hex of [`to_buffer`].
pub fn buffer_to_hex<'a>(input: impl Into<ByteInput<'a>>) -> WalletResult<String> {
    Ok(format!("{}{}", HEX_PREFIX, hex::encode(to_buffer(input)?)))
}

/// `^0x[0-9A-Fa-f]*$`, optionally with an exact byte length.
pub fn is_hex_string(value: &str, byte_len: Option<usize>) -> bool {
    let Some(digits) = value.strip_prefix(HEX_PREFIX) else {
        return false;
    };
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    byte_len.map_or(true, |len| digits.len() == 2 * len)
}

#[inline]
pub fn strip_hex_prefix(value: &str) -> &str {
    value.strip_prefix(HEX_PREFIX).unwrap_or(value)
}

/// Left-pad with a single `0` when the length is odd.
pub fn pad_to_even(value: &str) -> Cow<'_, str> {
    if value.len() % 2 == 1 {
        Cow::Owned(format!("0{}", value))
    } else {
        Cow::Borrowed(value)
    }
}

/// `0x`-prefixed, even-length hex of an integer (0 → `0x00`).
pub fn int_to_hex(value: u64) -> String {
    format!("{}{}", HEX_PREFIX, pad_to_even(&format!("{:x}", value)))
}

fn decode_hex_digits(digits: &str) -> WalletResult<Vec<u8>> {
    hex::decode(pad_to_even(digits).as_ref())
        .map_err(|e| EncodingError::InvalidHexString(e.to_string()).into())
}

/// Bỏ các byte 0 ở đầu, giữ lại ít nhất một byte
fn minimal_be_bytes(bytes: &[u8]) -> Vec<u8> {
    let first = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len().saturating_sub(1));
    bytes[first..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use serde_json::json;

    #[test]
    fn test_raw_bytes_unchanged() {
        assert_eq!(to_buffer(&[1u8, 2, 3]).unwrap(), vec![1, 2, 3]);
        assert_eq!(to_buffer(vec![0xdeu8, 0xad]).unwrap(), vec![0xde, 0xad]);
        assert_eq!(to_buffer(&[0u8; 0][..]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_hex_text() {
        assert_eq!(to_buffer("0xdeadBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(to_buffer("0xabc").unwrap(), vec![0x0a, 0xbc]);
        assert_eq!(to_buffer("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_plain_text_is_utf8() {
        assert_eq!(to_buffer("hello").unwrap(), b"hello".to_vec());
        // Không có prefix 0x → text, không phải hex
        assert_eq!(to_buffer("abcd").unwrap(), b"abcd".to_vec());
        assert_eq!(to_buffer("0xzz").unwrap(), b"0xzz".to_vec());
        assert_eq!(to_buffer("é").unwrap(), vec![0xc3, 0xa9]);
    }

    #[test]
    fn test_explicit_hex() {
        assert_eq!(ByteInput::Hex("abc").into_bytes().unwrap(), vec![0x0a, 0xbc]);
        assert_eq!(ByteInput::Hex("0x0102").into_bytes().unwrap(), vec![1, 2]);
        assert_eq!(
            ByteInput::Hex("0xnothex").into_bytes(),
            Err(WalletError::Encoding(EncodingError::InvalidHexString(
                "0xnothex".to_string()
            )))
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(to_buffer(0u64).unwrap(), vec![0x00]);
        assert_eq!(to_buffer(255u64).unwrap(), vec![0xff]);
        assert_eq!(to_buffer(256u64).unwrap(), vec![0x01, 0x00]);
        assert_eq!(to_buffer(u64::MAX).unwrap(), vec![0xff; 8]);
    }

    #[test]
    fn test_bigint() {
        let big = BigUint::from_bytes_be(&[0x01; 40]);
        assert_eq!(to_buffer(big).unwrap(), vec![0x01; 40]);
        assert_eq!(to_buffer(BigUint::from(0u8)).unwrap(), vec![0x00]);
        assert_eq!(to_buffer(BigUint::from(0x1234u32)).unwrap(), vec![0x12, 0x34]);
    }

    #[test]
    fn test_absent_is_empty() {
        assert_eq!(to_buffer(None::<&str>).unwrap(), Vec::<u8>::new());
        assert_eq!(to_buffer(Some("0x01")).unwrap(), vec![0x01]);
    }

    #[test]
    fn test_json_boundary() {
        let ok = |v: Value| {
            let input = ByteInput::try_from(&v)?;
            input.into_bytes()
        };
        assert_eq!(ok(json!(null)).unwrap(), Vec::<u8>::new());
        assert_eq!(ok(json!("0x0a0b")).unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(ok(json!(258)).unwrap(), vec![0x01, 0x02]);
        assert_eq!(ok(json!([1, 2, 255])).unwrap(), vec![1, 2, 255]);

        for bad in [json!(true), json!({"a": 1}), json!(-1), json!(1.5), json!([1, 256])] {
            assert!(matches!(
                ok(bad),
                Err(WalletError::Encoding(EncodingError::InvalidInputType(_)))
            ));
        }
    }

    #[test]
    fn test_buffer_to_hex() {
        assert_eq!(buffer_to_hex(&[0xABu8, 0x01]).unwrap(), "0xab01");
        assert_eq!(buffer_to_hex("0xABC").unwrap(), "0x0abc");
        assert_eq!(buffer_to_hex(ByteInput::Empty).unwrap(), "0x");
    }

    #[test]
    fn test_helpers() {
        assert!(is_hex_string("0x", None));
        assert!(is_hex_string("0x1234", Some(2)));
        assert!(!is_hex_string("0x1234", Some(3)));
        assert!(!is_hex_string("1234", None));
        assert_eq!(strip_hex_prefix("0xff"), "ff");
        assert_eq!(strip_hex_prefix("ff"), "ff");
        assert_eq!(pad_to_even("abc"), "0abc");
        assert_eq!(int_to_hex(0), "0x00");
        assert_eq!(int_to_hex(4096), "0x1000");
    }
}
