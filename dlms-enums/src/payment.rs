//! Payment metering enumerations (account, credit and charge objects)

use crate::macros::dlms_enum;

dlms_enum! {
    /// Status of an account object
    pub struct AccountStatus(u8): Insensitive {
        NewInactive = 1 => "NewInactive",
        Active = 2 => "Active",
        Closed = 3 => "Closed",
    }
}

dlms_enum! {
    /// Payment mode of an account object
    pub struct PaymentMode(u8): Insensitive {
        Credit = 1 => "Credit",
        Prepayment = 2 => "Prepayment",
    }
}

dlms_enum! {
    /// How a charge is collected
    pub struct ChargeConfiguration(u8): Insensitive {
        None = 0 => "None",
        /// Charge is a percentage of the amount
        Percentage = 0x1 => "Percentage",
        /// Charge is collected continuously
        Continuous = 0x2 => "Continuous",
    }
}

dlms_enum! {
    /// Charge type of a charge object
    pub struct ChargeType(u8): Insensitive {
        ConsumptionBasedCollection = 0 => "ConsumptionBasedCollection",
        TimeBasedCollection = 1 => "TimeBasedCollection",
        PaymentEventBasedCollection = 2 => "PaymentEventBasedCollection",
    }
}

dlms_enum! {
    /// Credit type of a credit object
    pub struct CreditType(u8): Insensitive {
        Token = 0 => "Token",
        Reserved = 1 => "Reserved",
        Emergency = 2 => "Emergency",
        TimeBased = 3 => "TimeBased",
        ConsumptionBased = 4 => "ConsumptionBased",
    }
}
