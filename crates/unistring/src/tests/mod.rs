mod property_roundtrip;

#[cfg(feature = "serde")]
mod serde_repr;
