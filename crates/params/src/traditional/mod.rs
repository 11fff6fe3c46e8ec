//! Constants for traditional (elliptic-curve) cryptography

pub mod secp256k1;
