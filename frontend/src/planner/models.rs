use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_TEXT: &str = "Your trip plan will appear here...";
pub const PENDING_TEXT: &str = "Generating your personalized trip plan... please wait 🤖";
pub const APOLOGY_TEXT: &str =
    "😞 Sorry, something went wrong. Please check if the backend server is running and try again.";

/// One of the three inputs on the preferences form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceField {
    Destination,
    Budget,
    Interests,
}

impl PreferenceField {
    pub const ALL: [PreferenceField; 3] = [
        PreferenceField::Destination,
        PreferenceField::Budget,
        PreferenceField::Interests,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PreferenceField::Destination => "🌍 Destination",
            PreferenceField::Budget => "💰 Budget (inr)",
            PreferenceField::Interests => "🎯 Interests",
        }
    }

    // Accent used for the card heading
    pub fn color(&self) -> &'static str {
        match self {
            PreferenceField::Destination => "blue",
            PreferenceField::Budget => "pink",
            PreferenceField::Interests => "yellow",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub destination: String,
    pub budget: String,
    pub interests: String,
}

impl Preferences {
    pub fn get(&self, field: PreferenceField) -> &str {
        match field {
            PreferenceField::Destination => &self.destination,
            PreferenceField::Budget => &self.budget,
            PreferenceField::Interests => &self.interests,
        }
    }

    pub fn set(&mut self, field: PreferenceField, value: String) {
        match field {
            PreferenceField::Destination => self.destination = value,
            PreferenceField::Budget => self.budget = value,
            PreferenceField::Interests => self.interests = value,
        }
    }

    pub fn to_request(&self) -> PlanRequest {
        PlanRequest {
            destination: self.destination.clone(),
            budget: self.budget.clone(),
            interests: self.interests.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub destination: String,
    pub budget: String,
    pub interests: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanResponse {
    pub plan: String,
}

/// What the view renders: the form values and the plan text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSnapshot {
    pub preferences: Preferences,
    pub display: String,
}

impl Default for PlannerSnapshot {
    fn default() -> Self {
        Self {
            preferences: Preferences::default(),
            display: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_exactly_three_fields() {
        let prefs = Preferences {
            destination: "Jaipur".to_string(),
            budget: "20000".to_string(),
            interests: "forts, food".to_string(),
        };

        let value = serde_json::to_value(prefs.to_request()).unwrap();
        assert_eq!(
            value,
            json!({"destination": "Jaipur", "budget": "20000", "interests": "forts, food"})
        );
    }

    #[test]
    fn empty_preferences_are_submitted_as_empty_strings() {
        let value = serde_json::to_value(Preferences::default().to_request()).unwrap();
        assert_eq!(value, json!({"destination": "", "budget": "", "interests": ""}));
    }

    #[test]
    fn response_ignores_extra_fields() {
        let response: PlanResponse =
            serde_json::from_str(r#"{"plan": "Day 1: Amber Fort", "model": "x"}"#).unwrap();
        assert_eq!(response.plan, "Day 1: Amber Fort");
    }

    #[test]
    fn response_without_plan_is_rejected() {
        assert!(serde_json::from_str::<PlanResponse>(r#"{"error": "boom"}"#).is_err());
        assert!(serde_json::from_str::<PlanResponse>(r#"{"plan": null}"#).is_err());
    }

    #[test]
    fn snapshot_starts_with_placeholder() {
        let snapshot = PlannerSnapshot::default();
        assert_eq!(snapshot.display, PLACEHOLDER_TEXT);
        assert_eq!(snapshot.preferences, Preferences::default());
    }

    #[test]
    fn get_reads_back_each_field() {
        let mut prefs = Preferences::default();
        for (i, field) in PreferenceField::ALL.iter().enumerate() {
            prefs.set(*field, format!("value {i}"));
        }
        assert_eq!(prefs.get(PreferenceField::Destination), "value 0");
        assert_eq!(prefs.get(PreferenceField::Budget), "value 1");
        assert_eq!(prefs.get(PreferenceField::Interests), "value 2");
    }
}
