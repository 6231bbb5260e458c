//! RSA-OAEP key pair generation, import and export.
//!
//! Keys travel as DER: SPKI for the public half and PKCS#8 for the private
//! half. The DER bytes a key was built from are kept alongside the parsed
//! key so that an imported pair exports back byte-for-byte.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::error::{DiaryError, Result};

/// Modulus size for generated keys.
pub const RSA_MODULUS_BITS: usize = 2048;

/// Public exponent for generated keys (F4).
pub const RSA_PUBLIC_EXPONENT: u64 = 65_537;

/// Number of hex characters shown for a key fingerprint.
const FINGERPRINT_HEX_LEN: usize = 16;

/// Lenient decoder for pasted key text: padding is optional.
const KEY_TEXT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Public half of a key pair, used only to wrap content keys.
#[derive(Clone)]
pub struct PublicKey {
    key: RsaPublicKey,
    spki_der: Vec<u8>,
}

impl PublicKey {
    /// Parse an SPKI DER-encoded RSA public key.
    pub fn from_spki_der(bytes: &[u8]) -> Result<Self> {
        let key = RsaPublicKey::from_public_key_der(bytes).map_err(|e| {
            DiaryError::InvalidKeyFormat(format!("public key is not RSA SPKI DER: {}", e))
        })?;
        Ok(Self {
            key,
            spki_der: bytes.to_vec(),
        })
    }

    /// Parse a base64 text encoding of an SPKI public key.
    pub fn from_base64(text: &str) -> Result<Self> {
        let bytes = decode_key_text(text, "public")?;
        Self::from_spki_der(&bytes)
    }

    /// Raw SPKI DER bytes.
    pub fn as_spki_der(&self) -> &[u8] {
        &self.spki_der
    }

    /// Base64 text encoding of the SPKI bytes.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.spki_der)
    }

    /// Modulus length in bytes; also the length of every wrapped key.
    pub fn size(&self) -> usize {
        self.key.size()
    }

    /// Modulus length in bits.
    pub fn bits(&self) -> usize {
        self.key.size() * 8
    }

    /// Short BLAKE3 fingerprint of the SPKI bytes, for display.
    pub fn fingerprint(&self) -> String {
        let hash = blake3::hash(&self.spki_der);
        hash.to_hex()[..FINGERPRINT_HEX_LEN].to_string()
    }

    pub(crate) fn rsa(&self) -> &RsaPublicKey {
        &self.key
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKey")
            .field("bits", &self.bits())
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

/// Private half of a key pair, used only to unwrap content keys.
///
/// The PKCS#8 bytes are zeroized on drop.
#[derive(Clone)]
pub struct PrivateKey {
    key: RsaPrivateKey,
    pkcs8_der: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    /// Parse a PKCS#8 DER-encoded RSA private key.
    pub fn from_pkcs8_der(bytes: &[u8]) -> Result<Self> {
        let key = RsaPrivateKey::from_pkcs8_der(bytes).map_err(|e| {
            DiaryError::InvalidKeyFormat(format!("private key is not RSA PKCS#8 DER: {}", e))
        })?;
        Ok(Self {
            key,
            pkcs8_der: Zeroizing::new(bytes.to_vec()),
        })
    }

    /// Parse a base64 text encoding of a PKCS#8 private key.
    pub fn from_base64(text: &str) -> Result<Self> {
        let bytes = decode_key_text(text, "private")?;
        Self::from_pkcs8_der(&bytes)
    }

    /// Raw PKCS#8 DER bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value outside a key store.
    pub fn as_pkcs8_der(&self) -> &[u8] {
        &self.pkcs8_der
    }

    /// Base64 text encoding of the PKCS#8 bytes.
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(STANDARD.encode(self.pkcs8_der.as_slice()))
    }

    pub(crate) fn rsa(&self) -> &RsaPrivateKey {
        &self.key
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// A public/private key pair.
///
/// The halves are always generated or imported together, but an imported
/// pair is never checked for consistency: a mismatched pair only shows up
/// as a `KeyUnwrap` failure at decrypt time.
#[derive(Debug, Clone)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// Generate a fresh 2048-bit RSA key pair with exponent 65537.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::KeyGeneration` if the primitive fails (for
    /// example when the OS random source is unavailable) or the new key
    /// cannot be encoded.
    pub fn generate() -> Result<Self> {
        let exponent = BigUint::from(RSA_PUBLIC_EXPONENT);
        let private = RsaPrivateKey::new_with_exp(&mut OsRng, RSA_MODULUS_BITS, &exponent)
            .map_err(|e| DiaryError::KeyGeneration(e.to_string()))?;
        let public = RsaPublicKey::from(&private);

        let spki = public
            .to_public_key_der()
            .map_err(|e| DiaryError::KeyGeneration(format!("SPKI encoding failed: {}", e)))?;
        let pkcs8 = private
            .to_pkcs8_der()
            .map_err(|e| DiaryError::KeyGeneration(format!("PKCS#8 encoding failed: {}", e)))?;

        let pair = Self {
            public: PublicKey {
                key: public,
                spki_der: spki.as_bytes().to_vec(),
            },
            private: PrivateKey {
                key: private,
                pkcs8_der: Zeroizing::new(pkcs8.as_bytes().to_vec()),
            },
        };
        tracing::debug!(
            bits = RSA_MODULUS_BITS,
            fingerprint = %pair.public.fingerprint(),
            "generated key pair"
        );
        Ok(pair)
    }

    /// Build a pair from raw SPKI and PKCS#8 DER bytes.
    ///
    /// Both halves are parsed before anything is returned, so a bad input
    /// never yields a half-built pair.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidKeyFormat` if either input is not an RSA
    /// key in the expected encoding.
    pub fn from_der(public_spki: &[u8], private_pkcs8: &[u8]) -> Result<Self> {
        let public = PublicKey::from_spki_der(public_spki)?;
        let private = PrivateKey::from_pkcs8_der(private_pkcs8)?;
        Ok(Self { public, private })
    }

    /// Build a pair from the base64 text encodings used in exported key files.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use diary_core::KeyPair;
    ///
    /// let pair = KeyPair::generate().unwrap();
    /// let (public, private) = pair.export_text();
    /// let restored = KeyPair::import_text(&public, &private).unwrap();
    /// assert_eq!(restored.public().as_spki_der(), pair.public().as_spki_der());
    /// ```
    pub fn import_text(public_text: &str, private_text: &str) -> Result<Self> {
        let public = PublicKey::from_base64(public_text)?;
        let private = PrivateKey::from_base64(private_text)?;
        Ok(Self { public, private })
    }

    /// Export both halves as base64 text.
    pub fn export_text(&self) -> (String, Zeroizing<String>) {
        (self.public.to_base64(), self.private.to_base64())
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn private(&self) -> &PrivateKey {
        &self.private
    }
}

/// Decode key text the way pasted keys arrive: ASCII whitespace anywhere
/// (line wraps included) is ignored and trailing `=` padding may be missing.
fn decode_key_text(text: &str, which: &str) -> Result<Zeroizing<Vec<u8>>> {
    let compact: Zeroizing<String> = Zeroizing::new(
        text.chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect(),
    );
    if compact.is_empty() {
        return Err(DiaryError::InvalidKeyFormat(format!(
            "{} key is empty",
            which
        )));
    }
    KEY_TEXT
        .decode(compact.as_bytes())
        .map(Zeroizing::new)
        .map_err(|e| DiaryError::InvalidKeyFormat(format!("{} key is not base64: {}", which, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    fn shared_pair() -> &'static KeyPair {
        static PAIR: OnceLock<KeyPair> = OnceLock::new();
        PAIR.get_or_init(|| KeyPair::generate().expect("key generation should succeed"))
    }

    #[test]
    fn test_generated_key_size() {
        let pair = shared_pair();
        assert_eq!(pair.public().bits(), RSA_MODULUS_BITS);
        assert_eq!(pair.public().size(), 256);
        assert_eq!(pair.public().rsa().e(), &BigUint::from(RSA_PUBLIC_EXPONENT));
    }

    #[test]
    fn test_der_round_trip_is_byte_exact() {
        let pair = shared_pair();
        let restored =
            KeyPair::from_der(pair.public().as_spki_der(), pair.private().as_pkcs8_der())
                .unwrap();
        assert_eq!(restored.public().as_spki_der(), pair.public().as_spki_der());
        assert_eq!(
            restored.private().as_pkcs8_der(),
            pair.private().as_pkcs8_der()
        );
    }

    #[test]
    fn test_text_round_trip() {
        let pair = shared_pair();
        let (public, private) = pair.export_text();
        let restored = KeyPair::import_text(&public, &private).unwrap();
        assert_eq!(restored.export_text().0, public);
        assert_eq!(*restored.export_text().1, *private);
    }

    #[test]
    fn test_import_text_tolerates_surrounding_whitespace() {
        let pair = shared_pair();
        let (public, private) = pair.export_text();
        let padded_public = format!("  {}\n", public);
        assert!(KeyPair::import_text(&padded_public, &private).is_ok());
    }

    #[test]
    fn test_import_text_accepts_wrapped_lines() {
        let pair = shared_pair();
        let (public, private) = pair.export_text();
        let wrap = |text: &str| {
            text.as_bytes()
                .chunks(64)
                .map(|line| std::str::from_utf8(line).unwrap())
                .collect::<Vec<_>>()
                .join("\r\n")
        };

        let restored =
            KeyPair::import_text(&wrap(public.as_str()), &wrap(private.as_str())).unwrap();
        assert_eq!(restored.public().as_spki_der(), pair.public().as_spki_der());
        assert_eq!(
            restored.private().as_pkcs8_der(),
            pair.private().as_pkcs8_der()
        );
    }

    #[test]
    fn test_import_text_accepts_missing_padding() {
        let pair = shared_pair();
        let (public, private) = pair.export_text();
        let unpadded_public = public.trim_end_matches('=');
        let unpadded_private = private.trim_end_matches('=');

        let restored = KeyPair::import_text(unpadded_public, unpadded_private).unwrap();
        assert_eq!(restored.export_text().0, public);
    }

    #[test]
    fn test_decode_key_text_ignores_inner_whitespace() {
        let decoded = decode_key_text(" aGVs\nbG8g\td29y bGQ ", "public").unwrap();
        assert_eq!(decoded.as_slice(), b"hello world");
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let pair = shared_pair();
        let (_, private) = pair.export_text();
        let result = KeyPair::import_text("not base64!!", &private);
        assert!(matches!(result, Err(DiaryError::InvalidKeyFormat(_))));
    }

    #[test]
    fn test_swapped_halves_rejected() {
        let pair = shared_pair();
        let result = KeyPair::from_der(pair.private().as_pkcs8_der(), pair.public().as_spki_der());
        assert!(matches!(result, Err(DiaryError::InvalidKeyFormat(_))));
    }

    #[test]
    fn test_empty_key_rejected() {
        let pair = shared_pair();
        let (public, _) = pair.export_text();
        let result = KeyPair::import_text(&public, "   ");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("private key is empty"));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let pair = shared_pair();
        let fp = pair.public().fingerprint();
        assert_eq!(fp.len(), FINGERPRINT_HEX_LEN);
        let reparsed = PublicKey::from_spki_der(pair.public().as_spki_der()).unwrap();
        assert_eq!(reparsed.fingerprint(), fp);
    }

    #[test]
    fn test_private_key_debug_redacts() {
        let pair = shared_pair();
        let debug_output = format!("{:?}", pair);
        assert!(debug_output.contains("REDACTED"));

        let key_hex = hex::encode(&pair.private().as_pkcs8_der()[..8]);
        assert!(!debug_output.contains(&key_hex));
        assert!(!debug_output.contains(pair.private().to_base64().as_str()));
    }
}
