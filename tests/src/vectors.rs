//! Known multiples k·G of the secp256k1 base point

use num_bigint::BigUint;
use p256k1_api::AffinePoint;

/// A scalar and the affine coordinates of scalar·G, as big-endian hex
pub struct MultipleVector {
    /// Scalar, big-endian hex
    pub k: &'static str,
    /// x-coordinate of k·G
    pub x: &'static str,
    /// y-coordinate of k·G
    pub y: &'static str,
}

impl MultipleVector {
    /// Scalar bytes as passed to `scalar_mult`
    pub fn scalar(&self) -> Vec<u8> {
        hex::decode(self.k).expect("vector scalar must be valid hex")
    }

    /// Expected result point
    pub fn point(&self) -> AffinePoint {
        AffinePoint::new(decode_field(self.x), decode_field(self.y))
    }
}

/// Decode a big-endian hex string into an integer
pub fn decode_field(hex_str: &str) -> BigUint {
    BigUint::from_bytes_be(&hex::decode(hex_str).expect("vector field element must be valid hex"))
}

/// Small multiples of G
pub const BASE_MULTIPLES: &[MultipleVector] = &[
    MultipleVector {
        k: "01",
        x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    },
    MultipleVector {
        k: "02",
        x: "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
        y: "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
    },
    MultipleVector {
        k: "03",
        x: "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        y: "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672",
    },
    MultipleVector {
        k: "DEADBEEF",
        x: "76D2FDF1302D1FA9556F4DF94EC84CEFBA6D482E54F47C6C2A238C1BAA560F0E",
        y: "B754AC7E7A3E09C44184CB451A4F5FB557F32053EB015DFFEBB655B5CFD54D8A",
    },
    MultipleVector {
        k: "1F2E3D4C5B6A79880123456789ABCDEFFEDCBA98765432100F1E2D3C4B5A6978",
        x: "796D98A5FBE9FCF2533EC08E63474B5E41DFF419C2171CE9E8A886C64458050E",
        y: "01A43769A2B0D0A77356E6A0AAEEF51EECCB4B43EDB0D8141CE782047705C6FC",
    },
    // n - 1 gives -G
    MultipleVector {
        k: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140",
        x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        y: "B7C52588D95C3B9AA25B0403F1EEF75702E84BB7597AABE663B82F6F04EF2777",
    },
];
