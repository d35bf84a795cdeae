use core::str::FromStr;

use serde::{Deserialize, Serialize};

use flowershop_core::{DomainError, ValueObject};

/// Flower variety. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlowerType {
    Rose,
    Carnation,
    Tulip,
    Lily,
    Orchid,
}

impl FlowerType {
    pub const ALL: [FlowerType; 5] = [
        FlowerType::Rose,
        FlowerType::Carnation,
        FlowerType::Tulip,
        FlowerType::Lily,
        FlowerType::Orchid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FlowerType::Rose => "Rose",
            FlowerType::Carnation => "Carnation",
            FlowerType::Tulip => "Tulip",
            FlowerType::Lily => "Lily",
            FlowerType::Orchid => "Orchid",
        }
    }
}

impl core::fmt::Display for FlowerType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowerType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FlowerType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown flower type: {s:?}")))
    }
}

/// A single flower, identified entirely by its variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flower {
    flower_type: FlowerType,
}

impl Flower {
    pub fn new(flower_type: FlowerType) -> Self {
        Self { flower_type }
    }

    pub fn flower_type(&self) -> FlowerType {
        self.flower_type
    }
}

impl From<FlowerType> for Flower {
    fn from(flower_type: FlowerType) -> Self {
        Self::new(flower_type)
    }
}

impl ValueObject for Flower {}

impl core::fmt::Display for Flower {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Flower: {}>", self.flower_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn flower_exposes_its_type() {
        let rose = Flower::new(FlowerType::Rose);
        assert_eq!(rose.flower_type(), FlowerType::Rose);
    }

    #[test]
    fn flower_renders_with_its_variety() {
        assert_eq!(Flower::new(FlowerType::Orchid).to_string(), "<Flower: Orchid>");
    }

    #[test]
    fn flower_type_parses_case_insensitively() {
        assert_eq!("lily".parse::<FlowerType>().unwrap(), FlowerType::Lily);
        assert_eq!(" CARNATION ".parse::<FlowerType>().unwrap(), FlowerType::Carnation);
    }

    #[test]
    fn flower_type_rejects_unknown_names() {
        let err = "daisy".parse::<FlowerType>().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for unknown flower type"),
        }
    }

    #[test]
    fn flower_serializes_as_its_variety() {
        let json = serde_json::to_string(&Flower::new(FlowerType::Tulip)).unwrap();
        assert_eq!(json, "\"Tulip\"");
    }

    fn any_flower_type() -> impl Strategy<Value = FlowerType> {
        prop::sample::select(FlowerType::ALL.to_vec())
    }

    proptest! {
        /// Property: flowers are equal exactly when their varieties are.
        #[test]
        fn equality_follows_flower_type(a in any_flower_type(), b in any_flower_type()) {
            let fa = Flower::new(a);
            let fb = Flower::new(b);
            prop_assert_eq!(fa == fb, a == b);
            if fa == fb {
                prop_assert_eq!(hash_of(&fa), hash_of(&fb));
            }
        }
    }
}
