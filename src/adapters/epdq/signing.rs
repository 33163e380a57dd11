//! SHA-IN request signature.
//!
//! The signature is `SHA-512` over `NAME=value<secret>` for every non-empty
//! field in ascending name order, upper-case hex encoded. The `SHASIGN` field
//! itself is never part of the signed string.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha512};

use crate::domain::PostData;

use super::field_map::SHASIGN;

/// Concatenation that gets hashed.
pub(crate) fn signing_buffer(post: &PostData, secret: &SecretString) -> String {
    let secret = secret.expose_secret();
    let mut buffer = String::new();

    for (name, value) in post.iter() {
        if name == SHASIGN || value.is_empty() {
            continue;
        }
        buffer.push_str(name);
        buffer.push('=');
        buffer.push_str(value);
        buffer.push_str(secret);
    }

    buffer
}

/// Upper-case hex SHA-512 signature for `post`.
pub fn sign(post: &PostData, secret: &SecretString) -> String {
    let digest = Sha512::digest(signing_buffer(post, secret).as_bytes());
    hex::encode_upper(digest)
}
