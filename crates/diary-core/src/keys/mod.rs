//! Asymmetric key management.
//!
//! Generates, imports and exports the RSA key pair that envelopes are
//! wrapped under. This module knows nothing about envelopes or content keys.
//!
//! - **keypair**: RSA-2048 (e = 65537) keys as SPKI/PKCS#8 DER, base64 text form
//! - **bundle**: the `{ publicKey, privateKey }` JSON export document

pub mod bundle;
pub mod keypair;

pub use bundle::KeyBundle;
pub use keypair::{KeyPair, PrivateKey, PublicKey, RSA_MODULUS_BITS, RSA_PUBLIC_EXPONENT};
