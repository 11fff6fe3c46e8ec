//! Integration tests through the facade crate

use p256k1::prelude::*;
use p256k1_tests::vectors::{decode_field, BASE_MULTIPLES};

/// Generic consumer of the curve capability set, the way key-agreement code uses it
fn shared_secret<C: Curve>(curve: &C, secret: &[u8], peer: &AffinePoint) -> Option<AffinePoint> {
    curve.scalar_mult(peer, secret)
}

#[test]
fn test_known_base_multiples() {
    let curve = shared_curve();
    for vector in BASE_MULTIPLES {
        let point = curve
            .scalar_base_mult(&vector.scalar())
            .expect("non-zero multiple below n must be finite");
        assert_eq!(point, vector.point(), "k = {}", vector.k);
        assert!(curve.is_on_curve(&point.x, &point.y));
    }
}

#[test]
fn test_parameters_through_facade() {
    let curve = P256k1::new();
    let params = curve.params();
    assert_eq!(params.name, p256k1::params::traditional::secp256k1::CURVE_NAME);
    assert_eq!(params.p, decode_field(p256k1::params::traditional::secp256k1::P_HEX));
    assert_eq!(params.bit_size, 256);
    assert_eq!(params.field_size_bytes(), 32);
}

#[test]
fn test_diffie_hellman_agreement() -> Result<()> {
    let curve = P256k1::new();
    let alice_secret = [0x11u8; 32];
    let bob_secret = [0x5Au8; 32];

    let alice_public = curve.scalar_base_mult(&alice_secret).expect("finite public key");
    let bob_public = curve.scalar_base_mult(&bob_secret).expect("finite public key");

    // Received coordinates go through the checked constructor first
    let bob_public = curve.checked_point(bob_public.x, bob_public.y)?;
    let alice_public = curve.checked_point(alice_public.x, alice_public.y)?;

    assert_eq!(
        shared_secret(&curve, &alice_secret, &bob_public),
        shared_secret(&curve, &bob_secret, &alice_public)
    );
    Ok(())
}

#[test]
fn test_invalid_peer_point_rejected() {
    let curve = P256k1::new();
    let g = curve.params().generator();
    let err = curve.checked_point(g.x.clone(), &g.y + 1u32).unwrap_err();
    assert!(matches!(err, Error::InvalidPoint { .. }));
}

#[test]
fn test_curve_as_trait_object() {
    let curve: Box<dyn Curve> = Box::new(P256k1::new());
    let g = curve.params().generator();
    assert_eq!(curve.scalar_base_mult(&[0x01]), Some(g.clone()));
    assert_eq!(curve.scalar_base_mult(&[0x00]), None);
    assert_eq!(curve.add(&g, &g), curve.double(&g));
}

#[test]
fn test_shared_instance_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| shared_curve() as *const P256k1 as usize))
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}
