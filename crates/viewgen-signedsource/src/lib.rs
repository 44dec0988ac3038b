//! Signing tokens for generated sources.
//!
//! A generator places [`signing_token()`] somewhere in its output, usually
//! next to an `@generated` marker. [`sign_file`] replaces the token with
//! `SignedSource<<hash>>`, where the hash is the SHA-256 of the text with the
//! token still in place. [`verify_signature`] later tells whether the text
//! was edited by hand since it was signed.

pub mod error;

use sha2::{Digest, Sha256};

pub use error::{Result, SignError};

const TOKEN: &str = "<<SignedSource::*O*zOeWoEQle#+L!plEphiEmie@IsG>>";
const SIGNATURE_PREFIX: &str = "SignedSource<<";
const SIGNATURE_SUFFIX: &str = ">>";
const HASH_LEN: usize = 64;

/// The placeholder to embed in a file before signing it.
pub fn signing_token() -> &'static str {
    TOKEN
}

/// Whether `data` carries a well-formed signature.
pub fn is_signed(data: &str) -> bool {
    find_signature(data).is_some()
}

/// Sign `data`, replacing the signing token with a signature.
///
/// Already signed data is re-signed: its signature is reset to the token
/// first, so signing is idempotent for unchanged content.
pub fn sign_file(data: &str) -> Result<String> {
    let unsigned = match find_signature(data) {
        Some(signature) => reset_signature(data, signature),
        None if data.contains(TOKEN) => data.to_string(),
        None => return Err(SignError::TokenNotFound),
    };
    let signature = format!("{SIGNATURE_PREFIX}{}{SIGNATURE_SUFFIX}", content_hash(&unsigned));
    Ok(unsigned.replacen(TOKEN, &signature, 1))
}

/// Check that `data` is unchanged since it was signed.
pub fn verify_signature(data: &str) -> Result<bool> {
    let signature = find_signature(data).ok_or(SignError::NotSigned)?;
    let unsigned = reset_signature(data, signature);
    Ok(content_hash(&unsigned) == signature.hash)
}

/// A signature located in a file.
#[derive(Debug, Clone, Copy)]
struct Signature<'a> {
    /// Byte offset of `SignedSource<<`.
    start: usize,
    /// Byte offset one past the closing `>>`.
    end: usize,
    hash: &'a str,
}

fn find_signature(data: &str) -> Option<Signature<'_>> {
    let mut from = 0;
    while let Some(offset) = data[from..].find(SIGNATURE_PREFIX) {
        let start = from + offset;
        let hash_start = start + SIGNATURE_PREFIX.len();
        let hash_end = hash_start + HASH_LEN;
        if let Some(hash) = data.get(hash_start..hash_end) {
            let well_formed = hash
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
            if well_formed && data[hash_end..].starts_with(SIGNATURE_SUFFIX) {
                return Some(Signature {
                    start,
                    end: hash_end + SIGNATURE_SUFFIX.len(),
                    hash,
                });
            }
        }
        from = hash_start;
    }
    None
}

fn reset_signature(data: &str, signature: Signature<'_>) -> String {
    format!("{}{TOKEN}{}", &data[..signature.start], &data[signature.end..])
}

/// Lowercase hex SHA-256 of `data`.
fn content_hash(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> String {
        format!("// @generated {}\nint x = 1;\n", signing_token())
    }

    #[test]
    fn sign_replaces_token() {
        let signed = sign_file(&template()).unwrap();
        assert!(!signed.contains(signing_token()));
        assert!(signed.starts_with("// @generated SignedSource<<"));
        assert!(signed.ends_with(">>\nint x = 1;\n"));
        assert!(is_signed(&signed));
    }

    #[test]
    fn unsigned_template_is_not_signed() {
        assert!(!is_signed(&template()));
        assert!(!is_signed("SignedSource<<not-a-hash>>"));
    }

    #[test]
    fn sign_without_token_fails() {
        let err = sign_file("int x = 1;\n").unwrap_err();
        assert!(matches!(err, SignError::TokenNotFound));
    }

    #[test]
    fn verify_signed_file() {
        let signed = sign_file(&template()).unwrap();
        assert!(verify_signature(&signed).unwrap());
    }

    #[test]
    fn verify_detects_edits() {
        let signed = sign_file(&template()).unwrap();
        let edited = signed.replace("int x = 1;", "int x = 2;");
        assert!(!verify_signature(&edited).unwrap());
    }

    #[test]
    fn verify_unsigned_fails() {
        let err = verify_signature(&template()).unwrap_err();
        assert!(matches!(err, SignError::NotSigned));
    }

    #[test]
    fn signing_is_deterministic_and_idempotent() {
        let once = sign_file(&template()).unwrap();
        let again = sign_file(&template()).unwrap();
        assert_eq!(once, again);
        assert_eq!(sign_file(&once).unwrap(), once);
    }

    #[test]
    fn resign_after_edit() {
        let signed = sign_file(&template()).unwrap();
        let edited = signed.replace("int x = 1;", "int x = 2;");
        let resigned = sign_file(&edited).unwrap();
        assert_ne!(resigned, signed);
        assert!(verify_signature(&resigned).unwrap());
    }

    #[test]
    fn hash_is_sha256() {
        assert_eq!(
            content_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        let signed = sign_file(signing_token()).unwrap();
        assert_eq!(
            signed,
            format!("SignedSource<<{}>>", content_hash(signing_token()))
        );
    }
}
