use sha2::Digest;

/// Computes the SHA-256 digest of `input`'s UTF-8 bytes as a 64-character
/// lowercase hexadecimal string.
///
/// Deterministic and pure; the same input always yields the same digest.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(sha2::Sha256::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn output_is_64_lowercase_hex_chars() {
        for input in ["", "abc", "fred-hunter2", "\u{00e9}"] {
            let digest = sha256_hex(input);
            assert_eq!(digest.len(), 64);
            assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(digest, digest.to_lowercase());
        }
    }
}
