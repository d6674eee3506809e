use super::{ValidationError, non_negative};

/// A party that wants a given amount, characterized by a target weight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRequester", into = "RawRequester")
)]
pub struct Requester {
    name: String,
    target_weight: f64,
    notes: String,
}

impl Requester {
    /// Creates a new requester, rejecting NaN, infinite or negative targets.
    ///
    /// The name is only used for reporting and need not be unique here.
    pub fn new(
        name: impl Into<String>,
        target_weight: f64,
        notes: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            target_weight: non_negative("target_weight", target_weight)?,
            notes: notes.into(),
        })
    }

    /// The name identifying the requester in reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The weight the requester asks for
    pub fn target_weight(&self) -> f64 {
        self.target_weight
    }

    /// Free-text notes attached to the request (possibly empty)
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawRequester {
    #[serde(alias = "identity")]
    name: String,
    target_weight: f64,
    #[serde(default)]
    notes: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRequester> for Requester {
    type Error = ValidationError;

    fn try_from(value: RawRequester) -> Result<Self, Self::Error> {
        Requester::new(value.name, value.target_weight, value.notes)
    }
}

#[cfg(feature = "serde")]
impl From<Requester> for RawRequester {
    fn from(value: Requester) -> Self {
        Self {
            name: value.name,
            target_weight: value.target_weight,
            notes: value.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_fields() {
        let requester = Requester::new("A", 4.0, "no giblets").unwrap();
        assert_eq!(requester.name(), "A");
        assert_eq!(requester.target_weight(), 4.0);
        assert_eq!(requester.notes(), "no giblets");
    }

    #[test]
    fn rejects_negative_target() {
        assert_eq!(
            Requester::new("A", -0.5, "").unwrap_err(),
            ValidationError::NEGATIVE("target_weight", -0.5)
        );
    }

    #[test]
    fn notes_are_optional_when_deserializing() {
        let requester: Requester =
            serde_json::from_str(r#"{"identity": "B", "target_weight": 12}"#).unwrap();
        assert_eq!(requester.name(), "B");
        assert_eq!(requester.target_weight(), 12.0);
        assert_eq!(requester.notes(), "");
    }
}
