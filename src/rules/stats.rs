use serde::{Deserialize, Serialize};

/// The closed set of trainable stats. Boost tags outside this set never
/// mutate anything; they are reported back to the caller instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Speed,
    Endurance,
    Strength,
    Flexibility,
    Coordination,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Speed,
        StatKind::Endurance,
        StatKind::Strength,
        StatKind::Flexibility,
        StatKind::Coordination,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatKind::Speed => "Speed",
            StatKind::Endurance => "Endurance",
            StatKind::Strength => "Strength",
            StatKind::Flexibility => "Flexibility",
            StatKind::Coordination => "Coordination",
        }
    }

    pub fn from_tag(tag: &str) -> Option<StatKind> {
        match tag {
            "Speed" => Some(StatKind::Speed),
            "Endurance" => Some(StatKind::Endurance),
            "Strength" => Some(StatKind::Strength),
            "Flexibility" => Some(StatKind::Flexibility),
            "Coordination" => Some(StatKind::Coordination),
            _ => None,
        }
    }
}

/// Per-stat unit counters, all starting at zero. Serialized keys match the
/// stat labels so the persisted record reads `{"Speed": 0, ...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatBlock {
    pub speed: u32,
    pub endurance: u32,
    pub strength: u32,
    pub flexibility: u32,
    pub coordination: u32,
}

impl StatBlock {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Speed => self.speed,
            StatKind::Endurance => self.endurance,
            StatKind::Strength => self.strength,
            StatKind::Flexibility => self.flexibility,
            StatKind::Coordination => self.coordination,
        }
    }

    fn increment(&mut self, kind: StatKind) {
        match kind {
            StatKind::Speed => self.speed += 1,
            StatKind::Endurance => self.endurance += 1,
            StatKind::Strength => self.strength += 1,
            StatKind::Flexibility => self.flexibility += 1,
            StatKind::Coordination => self.coordination += 1,
        }
    }
}

/// Apply boost tags in order: each recognized tag adds exactly one unit to
/// its stat (duplicates add again); unrecognized tags land in the returned
/// skip list. Pure; the caller commits the result.
pub fn apply_boosts(stats: &StatBlock, tags: &[String]) -> (StatBlock, Vec<String>) {
    let mut updated = *stats;
    let mut skipped = Vec::new();
    for tag in tags {
        match StatKind::from_tag(tag) {
            Some(kind) => updated.increment(kind),
            None => skipped.push(tag.clone()),
        }
    }
    (updated, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tags_increment_by_one() {
        let (updated, skipped) = apply_boosts(
            &StatBlock::default(),
            &["Speed".to_string(), "Strength".to_string()],
        );
        assert_eq!(updated.speed, 1);
        assert_eq!(updated.strength, 1);
        assert_eq!(updated.endurance, 0);
        assert!(skipped.is_empty());
    }

    #[test]
    fn duplicate_tags_increment_repeatedly() {
        let tags = vec!["Speed".to_string(), "Speed".to_string()];
        let (updated, skipped) = apply_boosts(&StatBlock::default(), &tags);
        assert_eq!(updated.speed, 2);
        assert!(skipped.is_empty());
    }

    #[test]
    fn unknown_tags_are_skipped_without_mutation() {
        let tags = vec!["Charisma".to_string(), "Endurance".to_string()];
        let (updated, skipped) = apply_boosts(&StatBlock::default(), &tags);
        assert_eq!(updated.endurance, 1);
        assert_eq!(updated, StatBlock {
            endurance: 1,
            ..StatBlock::default()
        });
        assert_eq!(skipped, vec!["Charisma".to_string()]);
    }

    #[test]
    fn stat_block_serializes_with_label_keys() {
        let stats = StatBlock {
            speed: 2,
            ..StatBlock::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"Speed\":2"));
        assert!(json.contains("\"Coordination\":0"));
    }

    #[test]
    fn every_kind_has_a_round_trip_tag() {
        for kind in StatKind::ALL {
            assert_eq!(StatKind::from_tag(kind.label()), Some(kind));
        }
    }
}
