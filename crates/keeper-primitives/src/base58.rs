//! Base58 encoding and decoding.
//!
//! The Keeper API exchanges public keys, signatures, and addresses as
//! Base58 strings using the Bitcoin alphabet. Checksums are not part of
//! the encoding here; addresses carry their own embedded checksum.

use crate::PrimitivesError;

/// Encode a byte slice to a Base58 string.
///
/// Leading zero bytes are encoded as leading '1' characters.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for invalid characters.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| PrimitivesError::InvalidBase58(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_zero_byte() {
        assert_eq!(encode(&[0]), "1");
        assert_eq!(decode("1").unwrap(), vec![0]);
    }

    #[test]
    fn test_known_vector() {
        let input = hex::decode("00010966776006953d5567439e5e39f86a0d273beed61967f6").unwrap();
        let encoded = encode(&input);
        assert_eq!(encoded, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
        assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn test_invalid_character() {
        // '0' and 'O' are not in the alphabet
        assert!(decode("0OIl").is_err());
    }
}
