//! `serde` support for [`Percentage`], enabled by the `serde` feature.
//!
//! A percentage is encoded as its raw [`value`](Percentage::value), a plain
//! `f64`. Decoding builds the percentage with [`Percentage::of`], so the
//! rounding strategy does not survive a round trip.
//!
//! ```
//! use percentage::domain::Percentage;
//!
//! let json = serde_json::to_string(&Percentage::of_precision(12.5, 2))?;
//! assert_eq!(json, "12.5");
//!
//! let back: Percentage = serde_json::from_str(&json)?;
//! assert_eq!(back, Percentage::of(12.5));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::Percentage;

impl Serialize for Percentage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::of)
    }
}
