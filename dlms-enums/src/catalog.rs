//! Runtime view of the catalog
//!
//! Diagnostic translators receive enumeration names as text (for example
//! an XML element naming `HdlcFrameType`) and need to resolve labels and
//! codes without knowing the Rust type at compile time. Each type has one
//! static [`EnumInfo`] descriptor here; the list is fixed at build time.

use crate::DlmsEnum;
use crate::LabelCase;
use crate::association::*;
use crate::hdlc::*;
use crate::mbus::*;
use crate::objects::*;
use crate::payment::*;
use crate::plc::*;
use crate::security::*;
use crate::transport::*;
use dlms_core::DlmsResult;
use std::fmt;

/// Type-erased descriptor of one catalog enumeration
pub struct EnumInfo {
    name: &'static str,
    label_case: LabelCase,
    members: fn() -> Vec<(&'static str, i64)>,
    label_of: fn(i64) -> &'static str,
    parse: fn(&str) -> DlmsResult<i64>,
}

impl EnumInfo {
    /// Build the descriptor of `T`
    pub const fn of<T: DlmsEnum>() -> Self {
        Self {
            name: T::TYPE_NAME,
            label_case: T::LABEL_CASE,
            members: members_of::<T>,
            label_of: label_of::<T>,
            parse: parse_code::<T>,
        }
    }

    /// Get the type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the label comparison rule
    pub fn label_case(&self) -> LabelCase {
        self.label_case
    }

    /// Get every declared member as `(label, code)`, in declaration order
    pub fn members(&self) -> Vec<(&'static str, i64)> {
        (self.members)()
    }

    /// Get the canonical label of a code, or `""` if it is not declared
    pub fn label_of(&self, code: i64) -> &'static str {
        (self.label_of)(code)
    }

    /// Parse a label into its code
    pub fn parse(&self, label: &str) -> DlmsResult<i64> {
        (self.parse)(label)
    }
}

impl fmt::Debug for EnumInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInfo")
            .field("name", &self.name)
            .field("label_case", &self.label_case)
            .finish()
    }
}

fn members_of<T: DlmsEnum>() -> Vec<(&'static str, i64)> {
    T::MEMBERS.iter().map(|m| (m.label, m.value.code().into())).collect()
}

fn label_of<T: DlmsEnum>(code: i64) -> &'static str {
    T::Code::try_from(code).map_or("", |code| T::from_code(code).label())
}

fn parse_code<T: DlmsEnum>(label: &str) -> DlmsResult<i64> {
    T::parse(label).map(|value| value.code().into())
}

static CATALOG: &[EnumInfo] = &[
    // hdlc
    EnumInfo::of::<HdlcFrameType>(),
    EnumInfo::of::<HdlcControlFrame>(),
    // mbus
    EnumInfo::of::<MBusCommand>(),
    // plc
    EnumInfo::of::<PlcSourceAddress>(),
    EnumInfo::of::<PlcHdlcSourceAddress>(),
    EnumInfo::of::<PlcDestinationAddress>(),
    EnumInfo::of::<PlcDataLinkData>(),
    EnumInfo::of::<MacState>(),
    EnumInfo::of::<AddressState>(),
    // transport
    EnumInfo::of::<InterfaceType>(),
    EnumInfo::of::<MessageType>(),
    EnumInfo::of::<TransportMode>(),
    EnumInfo::of::<ConnectionState>(),
    EnumInfo::of::<Priority>(),
    EnumInfo::of::<ServiceClass>(),
    EnumInfo::of::<BaudRate>(),
    // association
    EnumInfo::of::<Authentication>(),
    EnumInfo::of::<AccessMode>(),
    EnumInfo::of::<MethodAccessMode>(),
    EnumInfo::of::<ReleaseRequestReason>(),
    EnumInfo::of::<ReleaseResponseReason>(),
    EnumInfo::of::<ExceptionStateError>(),
    EnumInfo::of::<ExceptionServiceError>(),
    EnumInfo::of::<RequestTypes>(),
    // security
    EnumInfo::of::<Security>(),
    EnumInfo::of::<SecuritySuite>(),
    EnumInfo::of::<PkcsType>(),
    EnumInfo::of::<CertificateType>(),
    EnumInfo::of::<CertificateEntity>(),
    // payment
    EnumInfo::of::<AccountStatus>(),
    EnumInfo::of::<PaymentMode>(),
    EnumInfo::of::<ChargeConfiguration>(),
    EnumInfo::of::<ChargeType>(),
    EnumInfo::of::<CreditType>(),
    // objects
    EnumInfo::of::<ObjectType>(),
    EnumInfo::of::<DataType>(),
    EnumInfo::of::<AccessRange>(),
    EnumInfo::of::<SortMethod>(),
    EnumInfo::of::<ClockBase>(),
    EnumInfo::of::<ImageTransferStatus>(),
    EnumInfo::of::<ControlState>(),
    EnumInfo::of::<ControlMode>(),
];

/// Get the descriptor of every enumeration in the catalog
pub fn all() -> &'static [EnumInfo] {
    CATALOG
}

/// Find an enumeration by its exact type name
pub fn find(name: &str) -> Option<&'static EnumInfo> {
    let info = CATALOG.iter().find(|info| info.name == name);
    if info.is_none() {
        log::trace!("no enumeration named {} in the catalog", name);
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn check_laws<T: DlmsEnum>() {
        let members: Vec<T> = T::all().collect();
        assert_eq!(members.len(), T::MEMBERS.len(), "{}", T::TYPE_NAME);
        assert_eq!(T::all().count(), members.len(), "{} is not restartable", T::TYPE_NAME);

        let codes: HashSet<T::Code> = members.iter().map(|m| m.code()).collect();
        assert_eq!(codes.len(), members.len(), "{} has duplicate codes", T::TYPE_NAME);

        let names: HashSet<&str> = T::MEMBERS.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), members.len(), "{} has duplicate names", T::TYPE_NAME);

        let folded: HashSet<String> = members.iter().map(|m| m.label().to_ascii_uppercase()).collect();
        assert_eq!(folded.len(), members.len(), "{} has colliding labels", T::TYPE_NAME);

        for &member in &members {
            let label = member.label();
            assert!(!label.is_empty(), "{:?} has no label", member);
            assert!(member.is_known());
            assert_eq!(T::parse(label).unwrap(), member);
            assert_eq!(T::from_code(member.code()), member);

            let lower = label.to_ascii_lowercase();
            assert_eq!(T::parse(&lower).unwrap().label(), label);
            let upper = label.to_ascii_uppercase();
            assert_eq!(T::parse(&upper).unwrap().label(), label);

            if T::LABEL_CASE == LabelCase::Upper {
                assert_eq!(label, upper, "{:?} is not upper case", member);
            }
        }

        let err = T::parse("wrong").unwrap_err();
        assert!(err.is_unknown_enum());
        assert!(err.to_string().contains("\"wrong\""));
        assert!(T::parse("").is_err());
        if let Some(first) = members.first() {
            let padded = format!(" {}", first.label());
            assert_eq!(T::parse(&padded).unwrap_err(), dlms_core::DlmsError::unknown_enum(padded.clone()));
        }

        for raw in [0i64, 2, 42, 200, 0xFFE, 0xFFFF] {
            let Ok(code) = T::Code::try_from(raw) else { continue };
            let value = T::from_code(code);
            if !codes.contains(&code) {
                assert_eq!(value.label(), "");
                assert!(!value.is_known());
                assert!(members.iter().all(|&m| m != value));
            }
        }
    }

    #[test]
    fn test_laws_hold_for_every_type() {
        check_laws::<HdlcFrameType>();
        check_laws::<HdlcControlFrame>();
        check_laws::<MBusCommand>();
        check_laws::<PlcSourceAddress>();
        check_laws::<PlcHdlcSourceAddress>();
        check_laws::<PlcDestinationAddress>();
        check_laws::<PlcDataLinkData>();
        check_laws::<MacState>();
        check_laws::<AddressState>();
        check_laws::<InterfaceType>();
        check_laws::<MessageType>();
        check_laws::<TransportMode>();
        check_laws::<ConnectionState>();
        check_laws::<Priority>();
        check_laws::<ServiceClass>();
        check_laws::<BaudRate>();
        check_laws::<Authentication>();
        check_laws::<AccessMode>();
        check_laws::<MethodAccessMode>();
        check_laws::<ReleaseRequestReason>();
        check_laws::<ReleaseResponseReason>();
        check_laws::<ExceptionStateError>();
        check_laws::<ExceptionServiceError>();
        check_laws::<RequestTypes>();
        check_laws::<Security>();
        check_laws::<SecuritySuite>();
        check_laws::<PkcsType>();
        check_laws::<CertificateType>();
        check_laws::<CertificateEntity>();
        check_laws::<AccountStatus>();
        check_laws::<PaymentMode>();
        check_laws::<ChargeConfiguration>();
        check_laws::<ChargeType>();
        check_laws::<CreditType>();
        check_laws::<ObjectType>();
        check_laws::<DataType>();
        check_laws::<AccessRange>();
        check_laws::<SortMethod>();
        check_laws::<ClockBase>();
        check_laws::<ImageTransferStatus>();
        check_laws::<ControlState>();
        check_laws::<ControlMode>();
    }

    #[test]
    fn test_catalog_names_unique() {
        let names: HashSet<&str> = all().iter().map(EnumInfo::name).collect();
        assert_eq!(names.len(), all().len());
        assert_eq!(all().len(), 42);
    }

    #[test]
    fn test_find_by_name() {
        let info = find("HdlcFrameType").unwrap();
        assert_eq!(info.label_case(), LabelCase::Upper);
        assert_eq!(info.members(), vec![("IFRAME", 0), ("SFRAME", 1), ("UFRAME", 3)]);
        assert_eq!(info.parse("uframe").unwrap(), 3);
        assert_eq!(info.label_of(1), "SFRAME");
        assert_eq!(info.label_of(2), "");
        assert!(find("hdlcframetype").is_none());
        assert!(find("NoSuchEnum").is_none());
    }

    #[test]
    fn test_descriptor_out_of_range_code() {
        let info = find("MBusCommand").unwrap();
        assert_eq!(info.label_of(0x108), "");
        assert_eq!(info.label_of(-1), "");

        let info = find("PlcSourceAddress").unwrap();
        assert_eq!(info.label_of(0xC00), "INITIATOR");
    }

    #[test]
    fn test_descriptor_parse_error() {
        let err = find("PkcsType").unwrap().parse("Pkcs9").unwrap_err();
        assert!(err.is_unknown_enum());
        assert_eq!(err.to_string(), "unknown enum: \"Pkcs9\"");
    }

    #[test]
    fn test_descriptors_agree_with_types() {
        for info in all() {
            for (label, code) in info.members() {
                assert_eq!(info.label_of(code), label, "{}", info.name());
                assert_eq!(info.parse(label).unwrap(), code, "{}", info.name());
            }
        }
    }
}
