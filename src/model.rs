use serde::{Deserialize, Serialize};

/// One horse's finishing record within a race's results table.
///
/// Every field is always present; a sub-element missing from the source row
/// leaves the corresponding field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub horse_name: String,
    pub jockey_name: String,
    pub trainer_name: String,
    pub finishing_position: String,
}

impl ResultRow {
    pub fn is_empty(&self) -> bool {
        self.horse_name.is_empty()
            && self.jockey_name.is_empty()
            && self.trainer_name.is_empty()
            && self.finishing_position.is_empty()
    }
}
