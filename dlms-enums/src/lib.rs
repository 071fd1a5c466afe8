//! Enumerated value catalog for DLMS/COSEM
//!
//! This crate defines the named discrete value sets that appear on the
//! wire, in COSEM object attributes and in diagnostic translators. Every
//! type follows the same contract, captured by [`DlmsEnum`]:
//!
//! - construct from a wire code (total, unknown codes are kept),
//! - get the canonical label (`""` for an unknown code),
//! - parse a label, failing with [`DlmsError::UnknownEnum`],
//! - list every declared member in declaration order.
//!
//! Wire codes and canonical labels are interoperability contracts with
//! other DLMS implementations and with existing configuration files.
//!
//! # Usage
//!
//! ```
//! use dlms_enums::{HdlcFrameType, PkcsType};
//!
//! let frame = HdlcFrameType::parse("UFRAME").unwrap();
//! assert_eq!(frame.code(), 0x3);
//! assert_eq!(PkcsType::parse("pkcs8").unwrap().label(), "Pkcs8");
//! assert_eq!(HdlcFrameType::from_code(0x2).label(), "");
//! ```

mod macros;
#[cfg(feature = "serde")]
mod serde_support;
mod traits;

pub mod association;
pub mod catalog;
pub mod hdlc;
pub mod mbus;
pub mod objects;
pub mod payment;
pub mod plc;
pub mod security;
pub mod transport;

pub use dlms_core::{DlmsError, DlmsResult, ErrorKind};
pub use traits::{DlmsEnum, LabelCase, Member};

pub use association::{
    AccessMode, Authentication, ExceptionServiceError, ExceptionStateError, MethodAccessMode,
    ReleaseRequestReason, ReleaseResponseReason, RequestTypes,
};
pub use catalog::EnumInfo;
pub use hdlc::{HdlcControlFrame, HdlcFrameType};
pub use mbus::MBusCommand;
pub use objects::{
    AccessRange, ClockBase, ControlMode, ControlState, DataType, ImageTransferStatus, ObjectType,
    SortMethod,
};
pub use payment::{AccountStatus, ChargeConfiguration, ChargeType, CreditType, PaymentMode};
pub use plc::{
    AddressState, MacState, PlcDataLinkData, PlcDestinationAddress, PlcHdlcSourceAddress,
    PlcSourceAddress,
};
pub use security::{CertificateEntity, CertificateType, PkcsType, Security, SecuritySuite};
pub use transport::{
    BaudRate, ConnectionState, InterfaceType, MessageType, Priority, ServiceClass, TransportMode,
};
