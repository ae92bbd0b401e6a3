use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Portal area an assistant reply points the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTopic {
    Symptoms,
    Appointments,
    Medications,
    Profile,
    General,
}

impl NavigationTopic {
    pub fn response(&self) -> &'static str {
        match self {
            NavigationTopic::Symptoms => "It sounds like you're describing some symptoms. You can use our symptom checker on the home page to get a preliminary diagnosis. Would you like me to guide you there?",
            NavigationTopic::Appointments => "I can help you schedule an appointment. You can go to the 'New Appointment' page to see available doctors and time slots. Would you like me to help you with that?",
            NavigationTopic::Medications => "If you need to track your medications, you can use our medication management feature. Would you like me to show you how to add a new medication?",
            NavigationTopic::Profile => "You can update your profile information or account settings from the profile page. Would you like me to direct you there?",
            NavigationTopic::General => "I'm your healthcare assistant. I can help you with symptom checking, appointment scheduling, medication tracking, and more. How can I assist you today?",
        }
    }
}

// Substring matches, checked in order.
static NAVIGATION_RULES: LazyLock<Vec<(NavigationTopic, Regex)>> = LazyLock::new(|| {
    [
        (NavigationTopic::Symptoms, r"(?i)symptom|feeling|pain|ache|sick|ill"),
        (NavigationTopic::Appointments, r"(?i)appointment|schedule|book|doctor|visit"),
        (NavigationTopic::Medications, r"(?i)medication|medicine|drug|pill|prescription"),
        (NavigationTopic::Profile, r"(?i)profile|account|settings|password"),
    ]
    .into_iter()
    .map(|(topic, pattern)| (topic, Regex::new(pattern).expect("navigation pattern is valid")))
    .collect()
});

pub fn classify(message: &str) -> NavigationTopic {
    NAVIGATION_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(message))
        .map(|(topic, _)| *topic)
        .unwrap_or(NavigationTopic::General)
}

/// Points the user at the part of the portal their message is about.
pub fn navigate(message: &str) -> (NavigationTopic, &'static str) {
    let topic = classify(message);
    (topic, topic.response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_words_win_first() {
        assert_eq!(classify("I have a headache and feel sick"), NavigationTopic::Symptoms);
        // "pill" also contains "ill", so the symptom rule catches it first.
        assert_eq!(classify("where do I log a pill"), NavigationTopic::Symptoms);
    }

    #[test]
    fn test_other_topics() {
        assert_eq!(classify("book a doctor"), NavigationTopic::Appointments);
        assert_eq!(classify("Need my PRESCRIPTION renewed"), NavigationTopic::Medications);
        assert_eq!(classify("reset password"), NavigationTopic::Profile);
        assert_eq!(classify("hello"), NavigationTopic::General);
    }

    #[test]
    fn test_navigate_pairs_topic_with_text() {
        let (topic, text) = navigate("book a doctor");
        assert_eq!(topic, NavigationTopic::Appointments);
        assert!(text.contains("'New Appointment'"));
        assert!(navigate("").1.starts_with("I'm your healthcare assistant."));
    }

    #[test]
    fn test_topic_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&NavigationTopic::Medications).unwrap(), "\"medications\"");
    }
}
