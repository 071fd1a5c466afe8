//! HDLC frame enumerations (IEC 62056-46)

use crate::macros::dlms_enum;

dlms_enum! {
    /// HDLC frame type, taken from the low bits of the control field
    ///
    /// Code 0x2 is not assigned: an I frame ends in binary `0`, an S frame
    /// in `01` and a U frame in `11`.
    pub struct HdlcFrameType(u8): Upper {
        /// Information frame
        Iframe = 0x0 => "IFRAME",
        /// Supervisory frame
        Sframe = 0x1 => "SFRAME",
        /// Unnumbered frame
        Uframe = 0x3 => "UFRAME",
    }
}

dlms_enum! {
    /// Supervisory function bits of an HDLC S frame control field
    pub struct HdlcControlFrame(u8): Upper {
        /// Receive ready (RR)
        ReceiveReady = 0x0 => "RECEIVEREADY",
        /// Receive not ready (RNR)
        ReceiveNotReady = 0x4 => "RECEIVENOTREADY",
        /// Reject (REJ)
        Reject = 0x8 => "REJECT",
        /// Selective reject (SREJ)
        SelectiveReject = 0xC => "SELECTIVEREJECT",
    }
}

impl HdlcFrameType {
    /// Classify a raw control byte
    pub fn from_control_byte(control: u8) -> Self {
        if control & 0x01 == 0 {
            HdlcFrameType::Iframe
        } else {
            HdlcFrameType::from_code(control & 0x03)
        }
    }
}

impl HdlcControlFrame {
    /// Extract the supervisory function of an S frame control byte
    pub fn from_control_byte(control: u8) -> Self {
        HdlcControlFrame::from_code(control & 0x0C)
    }
}
