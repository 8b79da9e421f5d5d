//! The closed attribute set.
//!
//! Entities expose exactly these integer attributes. Names outside the set
//! are rejected at parse time; nothing downstream can invent a new one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A stat name that is not part of the closed attribute set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat: {0}")]
pub struct UnknownStat(pub String);

/// One attribute from the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Physical power.
    Strength,
    /// Toughness and endurance.
    Constitution,
    /// Reasoning and arcane aptitude.
    Intelligence,
    /// Perception and willpower.
    Wisdom,
    /// Fortune.
    Luck,
    /// Damage mitigation.
    Defense,
}

impl Stat {
    /// Every stat, in declaration order.
    pub const ALL: [Stat; 6] = [
        Self::Strength,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Luck,
        Self::Defense,
    ];

    /// Canonical name, as written in authoring data.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Luck => "Luck",
            Self::Defense => "Defense",
        }
    }

    /// Find a stat whose canonical name matches ignoring ASCII case.
    pub fn find_ignore_case(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
    }
}

impl FromStr for Stat {
    type Err = UnknownStat;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| UnknownStat(s.to_string()))
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer storage for the full attribute set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Strength score.
    pub strength: i32,
    /// Constitution score.
    pub constitution: i32,
    /// Intelligence score.
    pub intelligence: i32,
    /// Wisdom score.
    pub wisdom: i32,
    /// Luck score.
    pub luck: i32,
    /// Defense score.
    pub defense: i32,
}

impl StatBlock {
    /// Read one attribute.
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Constitution => self.constitution,
            Stat::Intelligence => self.intelligence,
            Stat::Wisdom => self.wisdom,
            Stat::Luck => self.luck,
            Stat::Defense => self.defense,
        }
    }

    /// Overwrite one attribute.
    pub fn set(&mut self, stat: Stat, value: i32) {
        let slot = match stat {
            Stat::Strength => &mut self.strength,
            Stat::Constitution => &mut self.constitution,
            Stat::Intelligence => &mut self.intelligence,
            Stat::Wisdom => &mut self.wisdom,
            Stat::Luck => &mut self.luck,
            Stat::Defense => &mut self.defense,
        };
        *slot = value;
    }

    /// Builder-style setter.
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    /// Iterate `(stat, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_known_stats() {
        for stat in Stat::ALL {
            assert_eq!(stat.as_str().parse::<Stat>().unwrap(), stat);
        }
    }

    #[test]
    fn parse_unknown_stat_fails() {
        let err = "Mana".parse::<Stat>().unwrap_err();
        assert_eq!(err, UnknownStat("Mana".to_string()));
        assert_eq!(err.to_string(), "unknown stat: Mana");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("strength".parse::<Stat>().is_err());
        assert_eq!(Stat::find_ignore_case("strength"), Some(Stat::Strength));
        assert_eq!(Stat::find_ignore_case("DEFENSE"), Some(Stat::Defense));
        assert_eq!(Stat::find_ignore_case("mana"), None);
    }

    #[test]
    fn block_get_set_each_stat() {
        let mut block = StatBlock::default();
        for (i, stat) in Stat::ALL.into_iter().enumerate() {
            block.set(stat, i as i32 + 1);
        }
        assert_eq!(block.strength, 1);
        assert_eq!(block.defense, 6);
        let values: Vec<i32> = block.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn stat_serializes_as_name() {
        let json = serde_json::to_string(&Stat::Wisdom).unwrap();
        assert_eq!(json, "\"Wisdom\"");
    }

    proptest! {
        #[test]
        fn set_only_touches_one_stat(idx in 0usize..6, value in any::<i32>()) {
            let stat = Stat::ALL[idx];
            let block = StatBlock::default().with(stat, value);
            for (other, v) in block.iter() {
                if other == stat {
                    prop_assert_eq!(v, value);
                } else {
                    prop_assert_eq!(v, 0);
                }
            }
        }
    }
}
