//! COSEM object model enumerations
//!
//! Interface class identifiers, A-XDR data type tags, and the enumerated
//! attributes of the interface classes most configuration files refer to.

use crate::macros::dlms_enum;

dlms_enum! {
    /// COSEM interface class identifier
    pub struct ObjectType(u16): Insensitive {
        None = 0 => "None",
        Data = 1 => "Data",
        Register = 3 => "Register",
        ExtendedRegister = 4 => "ExtendedRegister",
        DemandRegister = 5 => "DemandRegister",
        RegisterActivation = 6 => "RegisterActivation",
        ProfileGeneric = 7 => "ProfileGeneric",
        Clock = 8 => "Clock",
        ScriptTable = 9 => "ScriptTable",
        Schedule = 10 => "Schedule",
        SpecialDaysTable = 11 => "SpecialDaysTable",
        AssociationShortName = 12 => "AssociationShortName",
        AssociationLogicalName = 15 => "AssociationLogicalName",
        SapAssignment = 17 => "SapAssignment",
        ImageTransfer = 18 => "ImageTransfer",
        IecLocalPortSetup = 19 => "IecLocalPortSetup",
        ActivityCalendar = 20 => "ActivityCalendar",
        RegisterMonitor = 21 => "RegisterMonitor",
        ActionSchedule = 22 => "ActionSchedule",
        IecHdlcSetup = 23 => "IecHdlcSetup",
        IecTwistedPairSetup = 24 => "IecTwistedPairSetup",
        MBusSlavePortSetup = 25 => "MBusSlavePortSetup",
        UtilityTables = 26 => "UtilityTables",
        ModemConfiguration = 27 => "ModemConfiguration",
        AutoAnswer = 28 => "AutoAnswer",
        AutoConnect = 29 => "AutoConnect",
        PushSetup = 40 => "PushSetup",
        TcpUdpSetup = 41 => "TcpUdpSetup",
        Ip4Setup = 42 => "Ip4Setup",
        MacAddressSetup = 43 => "MacAddressSetup",
        PppSetup = 44 => "PppSetup",
        GprsSetup = 45 => "GprsSetup",
        SmtpSetup = 46 => "SmtpSetup",
        GsmDiagnostic = 47 => "GsmDiagnostic",
        Ip6Setup = 48 => "Ip6Setup",
        RegisterTable = 61 => "RegisterTable",
        CompactData = 62 => "CompactData",
        StatusMapping = 63 => "StatusMapping",
        SecuritySetup = 64 => "SecuritySetup",
        ParameterMonitor = 65 => "ParameterMonitor",
        SensorManager = 67 => "SensorManager",
        Arbitrator = 68 => "Arbitrator",
        DisconnectControl = 70 => "DisconnectControl",
        Limiter = 71 => "Limiter",
        MBusClient = 72 => "MBusClient",
        Account = 111 => "Account",
        Credit = 112 => "Credit",
        Charge = 113 => "Charge",
        TokenGateway = 115 => "TokenGateway",
    }
}

dlms_enum! {
    /// A-XDR data type tag
    pub struct DataType(u8): Insensitive {
        None = 0 => "None",
        Array = 1 => "Array",
        Structure = 2 => "Structure",
        Boolean = 3 => "Boolean",
        BitString = 4 => "BitString",
        Int32 = 5 => "Int32",
        UInt32 = 6 => "UInt32",
        OctetString = 9 => "OctetString",
        String = 10 => "String",
        StringUTF8 = 12 => "StringUTF8",
        Bcd = 13 => "Bcd",
        Int8 = 15 => "Int8",
        Int16 = 16 => "Int16",
        UInt8 = 17 => "UInt8",
        UInt16 = 18 => "UInt16",
        CompactArray = 19 => "CompactArray",
        Int64 = 20 => "Int64",
        UInt64 = 21 => "UInt64",
        Enum = 22 => "Enum",
        Float32 = 23 => "Float32",
        Float64 = 24 => "Float64",
        DateTime = 25 => "DateTime",
        Date = 26 => "Date",
        Time = 27 => "Time",
    }
}

impl DataType {
    /// Get the encoded size of a fixed length type, without the tag byte
    ///
    /// Returns `None` for variable length and unknown types.
    pub fn fixed_size(self) -> Option<usize> {
        match self {
            DataType::None => Some(0),
            DataType::Boolean | DataType::Bcd | DataType::Int8 | DataType::UInt8 | DataType::Enum => Some(1),
            DataType::Int16 | DataType::UInt16 => Some(2),
            DataType::Int32 | DataType::UInt32 | DataType::Float32 => Some(4),
            DataType::Date => Some(5),
            DataType::Time => Some(4),
            DataType::Int64 | DataType::UInt64 | DataType::Float64 => Some(8),
            DataType::DateTime => Some(12),
            _ => None,
        }
    }
}

dlms_enum! {
    /// Selective access by range or by entry on a profile generic buffer
    pub struct AccessRange(u8): Upper {
        /// Read by entry index
        Entry = 0 => "ENTRY",
        /// Read the last entries
        Last = 1 => "LAST",
        /// Read by value range
        Range = 2 => "RANGE",
        /// Read the whole buffer
        All = 3 => "ALL",
    }
}

dlms_enum! {
    /// Sort method of a profile generic buffer
    pub struct SortMethod(u8): Insensitive {
        FiFo = 1 => "FiFo",
        LiFo = 2 => "LiFo",
        Largest = 3 => "Largest",
        Smallest = 4 => "Smallest",
        NearestToZero = 5 => "NearestToZero",
        FarestFromZero = 6 => "FarestFromZero",
    }
}

dlms_enum! {
    /// Clock base of a clock object
    pub struct ClockBase(u8): Insensitive {
        None = 0 => "None",
        Crystal = 1 => "Crystal",
        Frequency50 = 2 => "Frequency50",
        Frequency60 = 3 => "Frequency60",
        GPS = 4 => "GPS",
        Radio = 5 => "Radio",
    }
}

dlms_enum! {
    /// Progress of a firmware image transfer
    pub struct ImageTransferStatus(u8): Insensitive {
        NotInitiated = 0 => "NotInitiated",
        TransferInitiated = 1 => "TransferInitiated",
        VerificationInitiated = 2 => "VerificationInitiated",
        VerificationSuccessful = 3 => "VerificationSuccessful",
        VerificationFailed = 4 => "VerificationFailed",
        ActivationInitiated = 5 => "ActivationInitiated",
        ActivationSuccessful = 6 => "ActivationSuccessful",
        ActivationFailed = 7 => "ActivationFailed",
    }
}

impl ImageTransferStatus {
    /// Check if the transfer has reached a final state
    pub fn is_final(self) -> bool {
        matches!(
            self,
            ImageTransferStatus::VerificationFailed
                | ImageTransferStatus::ActivationSuccessful
                | ImageTransferStatus::ActivationFailed
        )
    }
}

dlms_enum! {
    /// State of a disconnect control object
    pub struct ControlState(u8): Insensitive {
        Disconnected = 0 => "Disconnected",
        Connected = 1 => "Connected",
        ReadyForReconnection = 2 => "ReadyForReconnection",
    }
}

dlms_enum! {
    /// Control mode of a disconnect control object
    pub struct ControlMode(u8): Insensitive {
        None = 0 => "None",
        Mode1 = 1 => "Mode1",
        Mode2 = 2 => "Mode2",
        Mode3 = 3 => "Mode3",
        Mode4 = 4 => "Mode4",
        Mode5 = 5 => "Mode5",
        Mode6 = 6 => "Mode6",
    }
}
