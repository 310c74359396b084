//! Kill tracking summary

use serde::{Deserialize, Serialize};

/// Who got the kill
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KillCategory {
    /// Killed by the player
    #[default]
    You,
    /// Killed by the player's allies
    Collateral,
    /// Killed by anything else
    Others,
}

impl KillCategory {
    const ALL: [KillCategory; 3] = [KillCategory::You, KillCategory::Collateral, KillCategory::Others];

    const fn suffix(&self) -> &'static str {
        match self {
            KillCategory::You => "",
            KillCategory::Collateral => " (collateral kills)",
            KillCategory::Others => " (others)",
        }
    }
}

/// One line of the kill list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillRecord {
    /// Plural or unique name, e.g. "goblins" or "Sigmund (D:3)"
    pub name: String,
    pub count: u32,
    #[serde(default)]
    pub category: KillCategory,
}

/// Everything the player (and friends) killed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KillTally {
    pub records: Vec<KillRecord>,
}

impl KillTally {
    pub fn record(&mut self, category: KillCategory, name: impl Into<String>, count: u32) {
        self.records.push(KillRecord {
            name: name.into(),
            count,
            category,
        });
    }

    pub fn total(&self, category: KillCategory) -> u32 {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.count)
            .sum()
    }

    /// Render the vanquished-creatures listing
    ///
    /// Empty when nothing was killed.
    pub fn kill_info(&self) -> String {
        let present: Vec<KillCategory> = KillCategory::ALL
            .into_iter()
            .filter(|c| self.records.iter().any(|r| r.category == *c))
            .collect();

        let mut text = String::new();
        for category in &present {
            text += "Vanquished Creatures";
            if present.len() > 1 {
                text += category.suffix();
            }
            text += "\n";

            for record in self.records.iter().filter(|r| r.category == *category) {
                text += &format!("  {} {}\n", record.count, record.name);
            }

            let total = self.total(*category);
            text += &format!(
                "{} creature{} vanquished.\n\n",
                total,
                if total == 1 { "" } else { "s" }
            );
        }
        text
    }
}
