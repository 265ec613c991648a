use std::time::Duration;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Pause before a generated plan is shown.
    pub generation_delay_ms: u64,
    pub show_general_tips: bool,
}

impl Settings {
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|err| Error::Invalid(err.to_string()))
    }

    #[must_use]
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation_delay_ms: 2000,
            show_general_tips: true,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("{}", Settings::default())]
    #[case(
        r#"{"generation_delay_ms": 500}"#,
        Settings { generation_delay_ms: 500, ..Settings::default() }
    )]
    #[case(
        r#"{"generation_delay_ms": 0, "show_general_tips": false}"#,
        Settings { generation_delay_ms: 0, show_general_tips: false }
    )]
    fn test_settings_from_json(#[case] json: &str, #[case] expected: Settings) {
        assert_eq!(Settings::from_json(json), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("42")]
    #[case(r#"{"generation_delay_ms": -1}"#)]
    fn test_settings_from_json_invalid(#[case] json: &str) {
        assert!(matches!(Settings::from_json(json), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_settings_generation_delay() {
        assert_eq!(
            Settings::default().generation_delay(),
            Duration::from_secs(2)
        );
    }
}
