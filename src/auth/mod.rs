// Caller identity: bearer token issuing and verification

pub mod jwt;
