//! serde support shared by every catalog enumeration
//!
//! Declared members are written as their canonical label so configuration
//! files stay readable. Undeclared codes are written as plain integers.
//! Both forms are accepted when reading.

use crate::DlmsEnum;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserializer, Serializer};
use std::fmt;
use std::marker::PhantomData;

pub(crate) fn serialize<T: DlmsEnum, S: Serializer>(value: T, serializer: S) -> Result<S::Ok, S::Error> {
    match value.member() {
        Some(member) => serializer.serialize_str(member.label),
        None => serializer.serialize_i64(value.code().into()),
    }
}

pub(crate) fn deserialize<'de, T: DlmsEnum, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    deserializer.deserialize_any(EnumVisitor(PhantomData))
}

struct EnumVisitor<T>(PhantomData<T>);

impl<'de, T: DlmsEnum> Visitor<'de> for EnumVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} label or integer code", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        T::Code::try_from(v)
            .map(T::from_code)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| T::Code::try_from(v).ok())
            .map(T::from_code)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
    }
}

#[cfg(test)]
mod tests {
    use crate::{HdlcFrameType, PkcsType, PlcSourceAddress};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct LinkConfig {
        frame: HdlcFrameType,
        pkcs: PkcsType,
        source: PlcSourceAddress,
    }

    #[test]
    fn test_serialize_as_label() {
        let json = serde_json::to_string(&HdlcFrameType::Uframe).unwrap();
        assert_eq!(json, "\"UFRAME\"");
        let json = serde_json::to_string(&PkcsType::x509Certificate).unwrap();
        assert_eq!(json, "\"x509Certificate\"");
    }

    #[test]
    fn test_serialize_unknown_code_as_integer() {
        let json = serde_json::to_string(&HdlcFrameType::from_code(2)).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn test_deserialize_config() {
        let config: LinkConfig = serde_json::from_str(
            r#"{"frame": "iframe", "pkcs": "PKCS10", "source": "INITIATOR"}"#,
        )
        .unwrap();
        assert_eq!(config.frame, HdlcFrameType::Iframe);
        assert_eq!(config.pkcs, PkcsType::Pkcs10);
        assert_eq!(config.source, PlcSourceAddress::Initiator);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"frame":"IFRAME","pkcs":"Pkcs10","source":"INITIATOR"}"#);
    }

    #[test]
    fn test_deserialize_code() {
        let frame: HdlcFrameType = serde_json::from_str("3").unwrap();
        assert_eq!(frame, HdlcFrameType::Uframe);
        let source: PlcSourceAddress = serde_json::from_str("4094").unwrap();
        assert_eq!(source, PlcSourceAddress::New);
        let unknown: HdlcFrameType = serde_json::from_str("2").unwrap();
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_deserialize_rejects_misspelled_label() {
        let err = serde_json::from_str::<HdlcFrameType>("\"IFRAMES\"").unwrap_err();
        assert!(err.to_string().contains("unknown enum: \"IFRAMES\""));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_code() {
        assert!(serde_json::from_str::<HdlcFrameType>("256").is_err());
        assert!(serde_json::from_str::<HdlcFrameType>("-1").is_err());
    }
}
