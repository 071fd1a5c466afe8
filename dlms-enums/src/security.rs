//! Security enumerations (security setup, certificates)

use crate::macros::dlms_enum;

dlms_enum! {
    /// Security applied to xDLMS APDUs, as encoded in the security control byte
    pub struct Security(u8): Upper {
        None = 0x0 => "NONE",
        Authentication = 0x10 => "AUTHENTICATION",
        Encryption = 0x20 => "ENCRYPTION",
        AuthenticationEncryption = 0x30 => "AUTHENTICATIONENCRYPTION",
    }
}

dlms_enum! {
    /// Cryptographic suite of a security setup object
    pub struct SecuritySuite(u8): Insensitive {
        /// Suite 0: AES-GCM-128
        AesGcm128 = 0 => "AesGcm128",
        /// Suite 1: ECDH P-256, ECDSA P-256, AES-GCM-128, SHA-256
        EcdhEcdsaAesGcm128Sha256 = 1 => "EcdhEcdsaAesGcm128Sha256",
        /// Suite 2: ECDH P-384, ECDSA P-384, AES-GCM-256, SHA-384
        EcdhEcdsaAesGcm256Sha384 = 2 => "EcdhEcdsaAesGcm256Sha384",
    }
}

dlms_enum! {
    /// Encoding of key and certificate material exchanged with a meter
    pub struct PkcsType(u8): Insensitive {
        /// DER encoded X.509 certificate
        x509Certificate = 0 => "x509Certificate",
        /// PKCS #8 private key
        Pkcs8 = 1 => "Pkcs8",
        /// PKCS #10 certificate signing request
        Pkcs10 = 2 => "Pkcs10",
    }
}

dlms_enum! {
    /// Key usage of a certificate held by a security setup object
    pub struct CertificateType(u8): Insensitive {
        DigitalSignature = 0 => "DigitalSignature",
        KeyAgreement = 1 => "KeyAgreement",
        TLS = 2 => "TLS",
        Other = 3 => "Other",
    }
}

dlms_enum! {
    /// Entity a certificate belongs to
    pub struct CertificateEntity(u8): Insensitive {
        Server = 0 => "Server",
        Client = 1 => "Client",
        CertificationAuthority = 2 => "CertificationAuthority",
        Other = 3 => "Other",
    }
}

impl SecuritySuite {
    /// Check if the suite uses public key cryptography
    pub fn is_public_key(self) -> bool {
        matches!(
            self,
            SecuritySuite::EcdhEcdsaAesGcm128Sha256 | SecuritySuite::EcdhEcdsaAesGcm256Sha384
        )
    }
}
