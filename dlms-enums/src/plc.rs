//! PLC enumerations (IEC 61334-4-32 S-FSK and PRIME)

use crate::macros::dlms_enum;

dlms_enum! {
    /// Source MAC address used by an S-FSK PLC client
    pub struct PlcSourceAddress(u16): Upper {
        /// Initiator address
        Initiator = 0xC00 => "INITIATOR",
        /// Address of a new, not yet registered, node
        New = 0xFFE => "NEW",
    }
}

dlms_enum! {
    /// Source MAC address used by an S-FSK PLC client when HDLC framing is carried
    pub struct PlcHdlcSourceAddress(u16): Upper {
        Initiator = 0xC01 => "INITIATOR",
    }
}

dlms_enum! {
    /// Broadcast destination addresses on an S-FSK PLC network
    pub struct PlcDestinationAddress(u16): Upper {
        /// All physical nodes
        AllPhysical = 0xFFF => "ALLPHYSICAL",
    }
}

dlms_enum! {
    /// S-FSK PLC data link data command
    pub struct PlcDataLinkData(u8): Upper {
        Request = 0x90 => "REQUEST",
    }
}

dlms_enum! {
    /// PRIME MAC state of a service node
    pub struct MacState(u8): Upper {
        Disconnected = 0 => "DISCONNECTED",
        Terminal = 1 => "TERMINAL",
        Switch = 2 => "SWITCH",
        Base = 3 => "BASE",
    }
}

dlms_enum! {
    /// Address assignment state of a PLC node
    pub struct AddressState(u8): Insensitive {
        /// No address has been assigned
        None = 0 => "None",
        /// The node has been given an address
        Assigned = 1 => "Assigned",
    }
}
