//! Constants for the secp256k1 short-Weierstrass curve y² = x³ + 7
//!
//! All big-integer values are big-endian hexadecimal strings without a prefix.

/// Name the curve is registered under
pub const CURVE_NAME: &str = "P-256K1";

/// Field prime p = 2^256 - 2^32 - 977
pub const P_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";

/// Order n of the subgroup generated by G
pub const N_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

/// Curve coefficient b (the a coefficient is zero)
pub const B_HEX: &str = "0000000000000000000000000000000000000000000000000000000000000007";

/// x-coordinate of the base point G
pub const GX_HEX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

/// y-coordinate of the base point G
pub const GY_HEX: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

/// Bit length of the field prime
pub const BIT_SIZE: usize = 256;

/// Size of a field element in bytes
pub const FIELD_ELEMENT_SIZE: usize = BIT_SIZE / 8;

/// Size of a scalar in bytes
pub const SCALAR_SIZE: usize = 32;
