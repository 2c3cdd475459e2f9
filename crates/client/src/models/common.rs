// Copyright (C) 2024-2025 The SPN-RS Authors.
//
// common.rs file belongs to the spn-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Serde helpers for Tendermint's stringified integers.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNum<T> {
    Str(String),
    Num(T),
}

pub(crate) fn de_str_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match StrOrNum::<u64>::deserialize(deserializer)? {
        StrOrNum::Str(s) => s.parse().map_err(de::Error::custom),
        StrOrNum::Num(n) => Ok(n),
    }
}

pub(crate) fn de_str_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match StrOrNum::<i64>::deserialize(deserializer)? {
        StrOrNum::Str(s) => s.parse().map_err(de::Error::custom),
        StrOrNum::Num(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Height {
        #[serde(deserialize_with = "de_str_u64")]
        height: u64,
        #[serde(deserialize_with = "de_str_i64")]
        power: i64,
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let h: Height = serde_json::from_str(r#"{"height": "42", "power": -3}"#).unwrap();
        assert_eq!(h.height, 42);
        assert_eq!(h.power, -3);
        assert!(serde_json::from_str::<Height>(r#"{"height": "x", "power": 1}"#).is_err());
    }
}
