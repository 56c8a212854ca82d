//! Compiled records handed to the output writer.

use serde::{Serialize, Serializer};

use crate::effect::Effect;
use crate::hook::BaseSettings;

/// Record type tag understood by the game loader.
pub const RECORD_TYPE: &str = "effect_on_condition";

/// Final compiled trigger definition for one hook.
#[derive(Clone, Debug, PartialEq)]
pub struct EmittedRecord {
    pub id: String,
    pub settings: BaseSettings,
    pub effect: Vec<Effect>,
}

impl EmittedRecord {
    pub fn new(id: impl Into<String>, settings: BaseSettings, effect: Vec<Effect>) -> Self {
        Self {
            id: id.into(),
            settings,
            effect,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Converts this record into the JSON object the game loads.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[derive(Serialize)]
struct RecordRepr<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    id: &'a str,
    #[serde(flatten)]
    settings: &'a BaseSettings,
    effect: &'a [Effect],
}

impl Serialize for EmittedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordRepr {
            kind: RECORD_TYPE,
            id: &self.id,
            settings: &self.settings,
            effect: &self.effect,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_type_tag_and_flattened_settings() {
        let record = EmittedRecord::new(
            "mod_GameBegin_EVENT",
            BaseSettings::event("game_begin"),
            vec![Effect::invoke(["mod_hello"])],
        );

        let value = record.to_json().expect("record should serialize");

        assert_eq!(
            value,
            json!({
                "type": "effect_on_condition",
                "id": "mod_GameBegin_EVENT",
                "eoc_type": "EVENT",
                "required_event": "game_begin",
                "effect": [{ "run_eocs": ["mod_hello"] }]
            })
        );
    }
}
