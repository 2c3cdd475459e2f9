// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// account.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{ClientError, ClientResult};
use bech32::{Bech32, Hrp};
use k256::ecdsa::{signature::Signer, Signature, SigningKey};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use std::fmt;

/// Signing identity used to authorize broadcast transactions.
#[derive(Clone)]
pub struct Account {
    name: String,
    signing_key: SigningKey,
}

impl Account {
    /// Builds an account from a 32-byte secp256k1 secret key.
    pub fn from_secret_bytes(name: impl Into<String>, secret: &[u8]) -> ClientResult<Self> {
        let signing_key = SigningKey::from_slice(secret)
            .map_err(|e| ClientError::Config(format!("invalid secret key: {e}")))?;
        Ok(Self {
            name: name.into(),
            signing_key,
        })
    }

    /// Builds an account from a hex-encoded secret key.
    pub fn from_secret_hex(name: impl Into<String>, secret_hex: &str) -> ClientResult<Self> {
        let bytes = hex::decode(secret_hex.trim_start_matches("0x"))
            .map_err(|e| ClientError::Config(format!("invalid secret key hex: {e}")))?;
        Self::from_secret_bytes(name, &bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compressed SEC1 public key.
    pub fn public_key(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    /// Bech32 address under `prefix`, derived as ripemd160(sha256(pubkey)).
    pub fn address(&self, prefix: &str) -> ClientResult<String> {
        let hrp = Hrp::parse(prefix)
            .map_err(|e| ClientError::Config(format!("invalid address prefix {prefix:?}: {e}")))?;
        let sha = Sha256::digest(self.public_key());
        let hash = Ripemd160::digest(sha);
        bech32::encode::<Bech32>(hrp, &hash)
            .map_err(|e| ClientError::Config(format!("address encoding failed: {e}")))
    }

    /// Signs `payload` (sha256 + ECDSA, RFC 6979 nonce), returning the 64-byte compact signature.
    pub fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let signature: Signature = self.signing_key.sign(payload);
        signature.to_bytes().to_vec()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("name", &self.name)
            .field("public_key", &hex::encode(self.public_key()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::{signature::Verifier, VerifyingKey};

    const SECRET: &str = "0101010101010101010101010101010101010101010101010101010101010101";

    #[test]
    fn address_uses_prefix() {
        let account = Account::from_secret_hex("alice", SECRET).unwrap();
        let address = account.address("spn").unwrap();
        assert!(address.starts_with("spn1"));
        assert_eq!(address, account.address("spn").unwrap());
        assert_ne!(address, account.address("cosmos").unwrap());
    }

    #[test]
    fn signature_verifies_against_public_key() {
        let account = Account::from_secret_hex("alice", SECRET).unwrap();
        let sig_bytes = account.sign(b"payload");
        let signature = Signature::from_slice(&sig_bytes).unwrap();
        let key = VerifyingKey::from_sec1_bytes(&account.public_key()).unwrap();
        assert!(key.verify(b"payload", &signature).is_ok());
    }

    #[test]
    fn rejects_bad_secrets() {
        assert!(Account::from_secret_bytes("zero", &[0u8; 32]).is_err());
        assert!(Account::from_secret_hex("short", "abcd").is_err());
    }

    #[test]
    fn debug_hides_secret() {
        let account = Account::from_secret_hex("alice", SECRET).unwrap();
        let rendered = format!("{account:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains(SECRET));
    }
}
