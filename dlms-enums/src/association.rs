//! Application association enumerations (ACSE and xDLMS services)

use crate::macros::dlms_enum;

dlms_enum! {
    /// Authentication mechanism negotiated in the AARQ
    pub struct Authentication(u8): Upper {
        /// No authentication
        None = 0 => "NONE",
        /// Low level security, password
        Low = 1 => "LOW",
        /// High level security, manufacturer specific
        High = 2 => "HIGH",
        /// High level security, MD5
        HighMd5 = 3 => "HIGHMD5",
        /// High level security, SHA-1
        HighSha1 = 4 => "HIGHSHA1",
        /// High level security, GMAC
        HighGmac = 5 => "HIGHGMAC",
        /// High level security, SHA-256
        HighSha256 = 6 => "HIGHSHA256",
        /// High level security, ECDSA
        HighEcdsa = 7 => "HIGHECDSA",
    }
}

impl Authentication {
    /// Check if the mechanism is one of the HLS mechanisms
    pub fn is_high_level(self) -> bool {
        self.is_known() && self.code() >= 2
    }
}

dlms_enum! {
    /// Attribute access rights in an association object list
    pub struct AccessMode(u8): Insensitive {
        NoAccess = 0 => "NoAccess",
        Read = 1 => "Read",
        Write = 2 => "Write",
        ReadWrite = 3 => "ReadWrite",
        AuthenticatedRead = 4 => "AuthenticatedRead",
        AuthenticatedWrite = 5 => "AuthenticatedWrite",
        AuthenticatedReadWrite = 6 => "AuthenticatedReadWrite",
    }
}

dlms_enum! {
    /// Method access rights in an association object list
    pub struct MethodAccessMode(u8): Insensitive {
        NoAccess = 0 => "NoAccess",
        Access = 1 => "Access",
        AuthenticatedAccess = 2 => "AuthenticatedAccess",
    }
}

dlms_enum! {
    /// Reason carried in an RLRQ
    ///
    /// Codes 2 to 29 are not assigned.
    pub struct ReleaseRequestReason(u8): Upper {
        Normal = 0 => "NORMAL",
        Urgent = 1 => "URGENT",
        UserDefined = 30 => "USERDEFINED",
    }
}

dlms_enum! {
    /// Reason carried in an RLRE
    pub struct ReleaseResponseReason(u8): Upper {
        Normal = 0 => "NORMAL",
        NotFinished = 1 => "NOTFINISHED",
        UserDefined = 30 => "USERDEFINED",
    }
}

dlms_enum! {
    /// State error field of an ExceptionResponse
    pub struct ExceptionStateError(u8): Upper {
        ServiceNotAllowed = 1 => "SERVICENOTALLOWED",
        ServiceUnknown = 2 => "SERVICEUNKNOWN",
    }
}

dlms_enum! {
    /// Service error field of an ExceptionResponse
    pub struct ExceptionServiceError(u8): Upper {
        OperationNotPossible = 1 => "OPERATIONNOTPOSSIBLE",
        ServiceNotSupported = 2 => "SERVICENOTSUPPORTED",
        OtherReason = 3 => "OTHERREASON",
        PduTooLong = 4 => "PDUTOOLONG",
        DecipheringError = 5 => "DECIPHERINGERROR",
        InvocationCounterError = 6 => "INVOCATIONCOUNTERERROR",
    }
}

dlms_enum! {
    /// What the client still expects from the meter to complete a reply
    pub struct RequestTypes(u8): Insensitive {
        /// Reply is complete
        None = 0 => "None",
        /// More data blocks follow
        DataBlock = 1 => "DataBlock",
        /// More HDLC frames follow
        Frame = 2 => "Frame",
        /// More general block transfer blocks follow
        GBT = 4 => "GBT",
    }
}
