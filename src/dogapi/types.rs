use serde::Deserialize;

/// One entry of the remote breed dataset.
///
/// `weight` and `height` arrive pre-formatted by the API ("70-110" etc.);
/// they are display strings and are never parsed numerically.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Breed {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub weight: MeasureRange,
    #[serde(default)]
    pub height: MeasureRange,
    pub bred_for: Option<String>,
    pub breed_group: Option<String>,
    pub life_span: Option<String>,
    pub temperament: Option<String>,
}

/// Imperial/metric pair as shipped by the API. A record missing either
/// unit decodes to an empty string instead of rejecting the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MeasureRange {
    #[serde(default)]
    pub imperial: String,
    #[serde(default)]
    pub metric: String,
}
