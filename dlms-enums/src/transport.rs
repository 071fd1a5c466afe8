//! Transport and media enumerations

use crate::macros::dlms_enum;

dlms_enum! {
    /// Lower layer a DLMS association is carried over
    pub struct InterfaceType(u8): Upper {
        /// HDLC framing (IEC 62056-46)
        Hdlc = 0 => "HDLC",
        /// TCP/UDP wrapper (IEC 62056-47)
        Wrapper = 1 => "WRAPPER",
        /// Plain PDUs without framing
        Pdu = 2 => "PDU",
        /// Wireless M-Bus
        WirelessMBus = 3 => "WIRELESSMBUS",
        /// HDLC after an IEC 62056-21 mode E handshake
        HdlcWithModeE = 4 => "HDLCWITHMODEE",
        /// S-FSK PLC
        Plc = 5 => "PLC",
        /// S-FSK PLC carrying HDLC frames
        PlcHdlc = 6 => "PLCHDLC",
        /// LoRaWAN and other low power WANs
        Lpwan = 7 => "LPWAN",
        /// Wi-SUN
        WiSun = 8 => "WISUN",
        /// PRIME PLC
        PlcPrime = 9 => "PLCPRIME",
        /// CoAP
        Coap = 10 => "COAP",
    }
}

dlms_enum! {
    /// Kind of message exchanged with a meter or a translator
    pub struct MessageType(u8): Insensitive {
        /// COSEM APDU
        CosemApdu = 0 => "CosemApdu",
        /// COSEM APDU in XML form
        CosemApduXml = 1 => "CosemApduXml",
        /// Manufacturer specific message
        ManufacturerSpesific = 128 => "ManufacturerSpesific",
    }
}

dlms_enum! {
    /// CoAP transport reliability mode
    pub struct TransportMode(u8): Insensitive {
        Reliable = 1 => "Reliable",
        Unreliable = 2 => "Unreliable",
        ReliableUnreliable = 3 => "ReliableUnreliable",
    }
}

dlms_enum! {
    /// Which layers of a client connection are currently open
    pub struct ConnectionState(u8): Insensitive {
        /// Nothing is connected
        None = 0 => "None",
        /// HDLC link is established
        Hdlc = 1 => "Hdlc",
        /// DLMS association is established
        Dlms = 2 => "Dlms",
        /// IEC 62056-21 optical handshake is done
        Iec = 4 => "Iec",
    }
}

dlms_enum! {
    /// Service priority bit of the invoke-id-and-priority byte
    pub struct Priority(u8): Insensitive {
        Normal = 0 => "Normal",
        High = 1 => "High",
    }
}

dlms_enum! {
    /// Service class bit of the invoke-id-and-priority byte
    pub struct ServiceClass(u8): Insensitive {
        UnConfirmed = 0 => "UnConfirmed",
        Confirmed = 0x40 => "Confirmed",
    }
}

dlms_enum! {
    /// Serial port baud rate as encoded in COSEM setup objects
    pub struct BaudRate(u8): Insensitive {
        Baudrate300 = 0 => "Baudrate300",
        Baudrate600 = 1 => "Baudrate600",
        Baudrate1200 = 2 => "Baudrate1200",
        Baudrate2400 = 3 => "Baudrate2400",
        Baudrate4800 = 4 => "Baudrate4800",
        Baudrate9600 = 5 => "Baudrate9600",
        Baudrate19200 = 6 => "Baudrate19200",
        Baudrate38400 = 7 => "Baudrate38400",
        Baudrate57600 = 8 => "Baudrate57600",
        Baudrate115200 = 9 => "Baudrate115200",
    }
}

impl BaudRate {
    /// Get the line speed in bits per second, if the code is a declared member
    pub fn bits_per_second(self) -> Option<u32> {
        match self.code() {
            code @ 0..=7 => Some(300 << code),
            8 => Some(57_600),
            9 => Some(115_200),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_codes() {
        assert_eq!(MessageType::CosemApdu.code(), 0);
        assert_eq!(MessageType::CosemApduXml.code(), 1);
        assert_eq!(MessageType::ManufacturerSpesific.code(), 128);
        assert_eq!(MessageType::ManufacturerSpesific.label(), "ManufacturerSpesific");
    }

    #[test]
    fn test_message_type_unknown() {
        let err = MessageType::parse("wrong").unwrap_err();
        assert!(err.is_unknown_enum());
        assert!(err.to_string().contains("\"wrong\""));
        assert_eq!(MessageType::from_code(42).label(), "");
    }

    #[test]
    fn test_connection_state_codes() {
        assert_eq!(ConnectionState::None.code(), 0);
        assert_eq!(ConnectionState::Hdlc.code(), 1);
        assert_eq!(ConnectionState::Dlms.code(), 2);
        assert_eq!(ConnectionState::Iec.code(), 4);
        assert_eq!(ConnectionState::from_code(3).label(), "");
    }

    #[test]
    fn test_transport_mode_codes() {
        assert_eq!(TransportMode::parse("reliableunreliable").unwrap().code(), 3);
        assert_eq!(TransportMode::Reliable.code(), 1);
        assert_eq!(TransportMode::from_code(0).label(), "");
    }

    #[test]
    fn test_interface_type() {
        assert_eq!(InterfaceType::parse("wrapper").unwrap(), InterfaceType::Wrapper);
        assert_eq!(InterfaceType::Coap.code(), 10);
        assert_eq!(InterfaceType::HdlcWithModeE.label(), "HDLCWITHMODEE");
    }

    #[test]
    fn test_service_class() {
        assert_eq!(ServiceClass::Confirmed.code(), 0x40);
        assert_eq!(Priority::High.code(), 1);
        assert_eq!(ServiceClass::parse("unconfirmed").unwrap(), ServiceClass::UnConfirmed);
    }

    #[test]
    fn test_baud_rate() {
        assert_eq!(BaudRate::Baudrate300.bits_per_second(), Some(300));
        assert_eq!(BaudRate::Baudrate9600.bits_per_second(), Some(9_600));
        assert_eq!(BaudRate::Baudrate38400.bits_per_second(), Some(38_400));
        assert_eq!(BaudRate::Baudrate115200.bits_per_second(), Some(115_200));
        assert_eq!(BaudRate::from_code(10).bits_per_second(), None);
    }
}
