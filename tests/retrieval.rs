// file: tests/retrieval.rs
// description: end-to-end retrieval behaviour through the public advisor api

use ayurveda_qa::{Advisor, AdvisorState, Config, MatchOutcome, QueryMatcher, Record};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::Arc;

const HINDI_ANSWER: &str = "तुलसी रोग प्रतिरोधक क्षमता बढ़ाती है।";

fn tulsi_records() -> Vec<Record> {
    vec![
        Record::new(
            "What is Tulsi good for? (Answer in English)",
            "Tulsi boosts immunity.",
        ),
        Record::new("तुलसी के फायदे? (Answer in Hindi)", HINDI_ANSWER),
    ]
}

fn knowledge_base() -> Vec<Record> {
    let mut records = tulsi_records();
    records.extend([
        Record::new(
            "How to cure acidity naturally? (Answer in English)",
            "Drink cold milk and chew fennel seeds.",
        ),
        Record::new(
            "How to stop hair fall? (Answer in English)",
            "Massage the scalp with <b>bhringraj</b> oil.",
        ),
        Record::new(
            "Which yoga is best for beginners? (Answer in English)",
            "Start with Surya Namaskar.",
        ),
    ]);
    records
}

fn advisor(records: Vec<Record>) -> Advisor {
    Advisor::from_records(Config::default_config(), records)
}

#[test]
fn language_tag_selects_english_answer() {
    let advisor = advisor(tulsi_records());
    assert_eq!(
        advisor.get_response("Tulsi benefits (Answer in English)"),
        "Tulsi boosts immunity."
    );
}

#[test]
fn language_tag_selects_hindi_answer() {
    let advisor = advisor(tulsi_records());
    assert_eq!(
        advisor.get_response("तुलसी के फायदे (Answer in Hindi)"),
        HINDI_ANSWER
    );
}

#[test]
fn every_stored_question_returns_its_own_answer() {
    let records = knowledge_base();
    let advisor = advisor(records.clone());

    for (position, record) in records.iter().enumerate() {
        let result = advisor.evaluate(&record.question);
        assert_eq!(result.outcome, MatchOutcome::Matched);
        assert_eq!(result.best_index, Some(position));
        assert_eq!(result.response, record.answer);
        assert_eq!(result.matched_question.as_deref(), Some(record.question.as_str()));
    }
}

#[test]
fn answers_are_returned_verbatim_with_markup() {
    let advisor = advisor(knowledge_base());
    assert_eq!(
        advisor.get_response("How to stop hair fall? (Answer in English)"),
        "Massage the scalp with <b>bhringraj</b> oil."
    );
}

#[test]
fn output_is_always_a_known_non_empty_string() {
    let records = knowledge_base();
    let advisor = advisor(records.clone());
    let config = Config::default_config();

    let queries = [
        "",
        "   ",
        "?!?",
        "acidity",
        "Yoga",
        "कुछ भी",
        "completely unrelated astrophysics question",
        "(Answer in Hindi)",
    ];

    for query in queries {
        let response = advisor.get_response(query);
        assert!(!response.is_empty());
        let known = records.iter().any(|r| r.answer == response)
            || response == config.matcher.fallback_message
            || response == config.matcher.unavailable_message;
        assert!(known, "unexpected response for {:?}: {}", query, response);
    }
}

#[test]
fn unrelated_query_gets_fallback() {
    let advisor = advisor(knowledge_base());
    let result = advisor.evaluate("quantum chromodynamics");
    assert_eq!(result.outcome, MatchOutcome::Fallback);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(
        result.response,
        Config::default_config().matcher.fallback_message
    );
}

#[test]
fn matching_is_deterministic() {
    let advisor = advisor(knowledge_base());
    let first = advisor.evaluate("hair fall remedy");
    for _ in 0..10 {
        let again = advisor.evaluate("hair fall remedy");
        assert_eq!(again.response, first.response);
        assert_eq!(again.best_index, first.best_index);
        assert_eq!(again.confidence, first.confidence);
    }

    let rebuilt = self::advisor(knowledge_base());
    assert_eq!(rebuilt.evaluate("hair fall remedy").best_index, first.best_index);
}

#[test]
fn identical_records_resolve_to_lowest_index() {
    let duplicate = Record::new("What is Triphala?", "A blend of three fruits.");
    let advisor = advisor(vec![
        Record::new("How to sleep better?", "Drink warm milk with nutmeg."),
        duplicate.clone(),
        duplicate,
    ]);

    let result = advisor.evaluate("What is Triphala?");
    assert_eq!(result.best_index, Some(1));
    assert_eq!(result.outcome, MatchOutcome::Matched);
}

#[test]
fn threshold_is_strictly_greater_than() {
    let records = knowledge_base();
    let index = ayurveda_qa::CorpusIndexer::default().build(records);
    let matcher = QueryMatcher::default();

    let zeros = vec![0.0; index.len()];
    assert_eq!(
        matcher.resolve(&index, "q", &zeros).outcome,
        MatchOutcome::Fallback
    );

    let mut at_boundary = vec![0.0; index.len()];
    at_boundary[2] = 0.1;
    assert_eq!(
        matcher.resolve(&index, "q", &at_boundary).outcome,
        MatchOutcome::Fallback
    );

    let mut above = vec![0.0; index.len()];
    above[2] = 0.100_000_1;
    let result = matcher.resolve(&index, "q", &above);
    assert_eq!(result.outcome, MatchOutcome::Matched);
    assert_eq!(result.response, "Drink cold milk and chew fennel seeds.");
}

#[test]
fn empty_dataset_returns_system_error() {
    let advisor = advisor(vec![]);
    assert_eq!(advisor.state(), AdvisorState::Unavailable);
    assert_eq!(
        advisor.get_response("anything"),
        Config::default_config().matcher.unavailable_message
    );
}

#[test]
fn malformed_dataset_file_degrades_without_panicking() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ this is not json").unwrap();

    let mut config = Config::default_config();
    config.dataset.path = file.path().to_path_buf();

    let advisor = Advisor::load(config.clone());
    assert_eq!(advisor.state(), AdvisorState::Unavailable);
    assert_eq!(
        advisor.get_response("Tulsi"),
        config.matcher.unavailable_message
    );
}

#[test]
fn reload_picks_up_new_dataset() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut config = Config::default_config();
    config.dataset.path = file.path().to_path_buf();

    let advisor = Advisor::load(config);
    assert_eq!(advisor.state(), AdvisorState::Unavailable);

    std::fs::write(
        file.path(),
        serde_json::to_string(&tulsi_records()).unwrap(),
    )
    .unwrap();

    assert_eq!(advisor.reload(), AdvisorState::Ready);
    assert_eq!(
        advisor.get_response("What is Tulsi good for? (Answer in English)"),
        "Tulsi boosts immunity."
    );
}

#[test]
fn concurrent_queries_share_one_snapshot() {
    let advisor = Arc::new(advisor(knowledge_base()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let advisor = Arc::clone(&advisor);
            std::thread::spawn(move || {
                (0..25)
                    .map(|_| advisor.get_response("Which yoga is best for beginners?"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for response in handle.join().unwrap() {
            assert_eq!(response, "Start with Surya Namaskar.");
        }
    }
}

#[test]
fn reload_during_queries_never_exposes_partial_state() {
    let advisor = Arc::new(advisor(tulsi_records()));
    let english = "What is Tulsi good for? (Answer in English)";

    let reader = {
        let advisor = Arc::clone(&advisor);
        std::thread::spawn(move || {
            (0..200)
                .map(|_| advisor.get_response(english))
                .collect::<Vec<_>>()
        })
    };

    for _ in 0..20 {
        advisor.reload_from_records(knowledge_base());
        advisor.reload_from_records(tulsi_records());
    }

    for response in reader.join().unwrap() {
        assert_eq!(response, "Tulsi boosts immunity.");
    }
}

#[test]
fn chat_envelope_round_trip() {
    let advisor = advisor(tulsi_records());
    let request: ayurveda_qa::ChatRequest =
        serde_json::from_str(r#"{"message": "  तुलसी के फायदे (Answer in Hindi)  "}"#).unwrap();
    let response = advisor.handle_chat(&request);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({ "response": HINDI_ANSWER })
    );
}
