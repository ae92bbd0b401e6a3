use crate::models::SymptomError;
use crate::services::vocabulary::{SymptomVocabulary, SYMPTOM_COUNT};

// The symptom form submits this when left untouched.
const PLACEHOLDER: &str = "Symptoms";

const WRAPPING: &[char] = &['[', ']', '\'', ' '];

/// Split a comma-separated symptom list and check every name against the vocabulary.
pub fn parse_symptoms(raw: &str) -> Result<Vec<String>, SymptomError> {
    if raw.is_empty() || raw == PLACEHOLDER {
        return Err(SymptomError::EmptyInput);
    }

    let symptoms: Vec<String> = raw
        .split(',')
        .map(|part| part.trim().trim_matches(WRAPPING).to_string())
        .collect();

    let vocabulary = SymptomVocabulary::global();
    let unknown: Vec<String> = symptoms
        .iter()
        .filter(|name| !vocabulary.contains(name))
        .cloned()
        .collect();

    if !unknown.is_empty() {
        return Err(SymptomError::InvalidSymptoms(unknown));
    }

    Ok(symptoms)
}

/// One slot per vocabulary symptom, set to 1 for each symptom present.
pub fn encode<S: AsRef<str>>(symptoms: &[S]) -> Vec<u8> {
    let vocabulary = SymptomVocabulary::global();
    let mut features = vec![0u8; SYMPTOM_COUNT];

    for symptom in symptoms {
        if let Some(position) = vocabulary.index_of(symptom.as_ref()) {
            features[position] = 1;
        }
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_rejects_empty_and_placeholder() {
        assert_matches!(parse_symptoms(""), Err(SymptomError::EmptyInput));
        assert_matches!(parse_symptoms("Symptoms"), Err(SymptomError::EmptyInput));
    }

    #[test]
    fn test_strips_list_syntax() {
        let symptoms = parse_symptoms("['itching', 'skin_rash' ] ,  headache").unwrap();
        assert_eq!(symptoms, vec!["itching", "skin_rash", "headache"]);
    }

    #[test]
    fn test_keeps_inner_spaces() {
        let symptoms = parse_symptoms("spotting_ urination, foul_smell_of urine").unwrap();
        assert_eq!(symptoms, vec!["spotting_ urination", "foul_smell_of urine"]);
    }

    #[test]
    fn test_reports_every_unknown_name() {
        let err = parse_symptoms("itching, sneezing, headache, tired").unwrap_err();
        assert_matches!(&err, SymptomError::InvalidSymptoms(names) if names == &["sneezing", "tired"]);
        assert_eq!(err.to_string(), "Invalid symptoms: sneezing, tired");
    }

    #[test]
    fn test_trailing_comma_is_invalid() {
        assert_matches!(parse_symptoms("itching,"), Err(SymptomError::InvalidSymptoms(names)) if names == vec![String::new()]);
    }

    #[test]
    fn test_encode_sets_symptom_positions() {
        let features = encode(&["itching", "headache", "yellow_crust_ooze"]);
        assert_eq!(features.len(), 132);
        assert_eq!(features.iter().filter(|bit| **bit == 1).count(), 3);
        assert_eq!(features[0], 1);
        assert_eq!(features[31], 1);
        assert_eq!(features[131], 1);
    }

    #[test]
    fn test_encode_empty() {
        let features = encode::<&str>(&[]);
        assert!(features.iter().all(|bit| *bit == 0));
    }
}
