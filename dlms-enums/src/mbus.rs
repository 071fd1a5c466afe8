//! M-Bus link layer enumerations (EN 13757)

use crate::macros::dlms_enum;

dlms_enum! {
    /// M-Bus command, the C-field function code of a wireless M-Bus frame
    pub struct MBusCommand(u8): Upper {
        /// Send user data
        SndUd = 0x3 => "SNDUD",
        /// Send/no reply
        SndNr = 0x4 => "SNDNR",
        /// Response user data
        RspUd = 0x8 => "RSPUD",
    }
}

impl MBusCommand {
    /// Check if the command is sent by the collector towards the meter
    pub fn is_request(self) -> bool {
        matches!(self, MBusCommand::SndUd | MBusCommand::SndNr)
    }
}
