//! secp256k1 curve parameters

use crate::ec::p256k1::{membership::is_on_curve, scalar::scalar_mult};
use crate::error::{validate, Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use p256k1_api::CurveParams;
use p256k1_params::traditional::secp256k1 as consts;

/// Build the P-256K1 parameter set.
///
/// The values come from fixed literals and are validated before they are
/// returned, so a bad literal aborts here instead of producing wrong points.
pub fn secp256k1() -> CurveParams {
    from_hex(
        consts::CURVE_NAME,
        consts::P_HEX,
        consts::N_HEX,
        consts::B_HEX,
        consts::GX_HEX,
        consts::GY_HEX,
        consts::BIT_SIZE,
    )
    .expect("secp256k1 constants must form a valid curve")
}

/// Parse a parameter set from big-endian hex strings and validate it
pub fn from_hex(
    name: &'static str,
    p: &str,
    n: &str,
    b: &str,
    gx: &str,
    gy: &str,
    bit_size: usize,
) -> Result<CurveParams> {
    let params = CurveParams {
        name,
        p: parse_hex("p", p)?,
        n: parse_hex("n", n)?,
        b: parse_hex("b", b)?,
        gx: parse_hex("gx", gx)?,
        gy: parse_hex("gy", gy)?,
        bit_size,
    };
    validate_params(&params)?;
    tracing::debug!(curve = name, bit_size, "constructed curve parameters");
    Ok(params)
}

/// Check the invariants every parameter set must hold.
///
/// Primality of p is not tested.
pub fn validate_params(params: &CurveParams) -> Result<()> {
    validate::parameter(
        params.p.bits() == params.bit_size as u64,
        "bit_size",
        "must equal the bit length of p",
    )?;
    validate::parameter(params.b < params.p, "b", "must be reduced mod p")?;
    validate::parameter(params.gx < params.p, "gx", "must be reduced mod p")?;
    validate::parameter(params.gy < params.p, "gy", "must be reduced mod p")?;
    validate::parameter(!params.n.is_zero(), "n", "must be non-zero")?;
    validate::parameter(
        is_on_curve(params, &params.gx, &params.gy),
        "generator",
        "must satisfy the curve equation",
    )?;
    validate::parameter(
        scalar_mult(params, &params.generator(), &params.n.to_bytes_be()).is_none(),
        "n",
        "must be the order of the generator",
    )?;
    Ok(())
}

fn parse_hex(name: &'static str, hex: &str) -> Result<BigUint> {
    BigUint::parse_bytes(hex.as_bytes(), 16)
        .ok_or_else(|| Error::param(name, "not a hexadecimal integer"))
}
