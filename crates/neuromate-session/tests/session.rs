use jiff::Timestamp;
use uuid::Uuid;

use neuromate_core::models::category::Category;
use neuromate_core::models::demographics::{DemographicField, DemographicValue};
use neuromate_core::models::diagnosis::{Label, Severity};
use neuromate_instruments::Catalog;
use neuromate_session::error::SessionError;
use neuromate_session::session::{CategoryStage, Cursor, Phase};
use neuromate_session::{NextStep, Session};

const DEMOGRAPHICS: [&str; 8] = ["Alex", "7", "male", "US", "Asian", "Parent", "no", "no"];

fn session_in_categories() -> Session {
    let catalog = Catalog::standard();
    let mut session = Session::new(Uuid::new_v4(), Timestamp::now());
    for answer in DEMOGRAPHICS {
        session.submit(catalog, answer, Timestamp::now()).unwrap();
    }
    session
}

fn answer_all(session: &mut Session, answers: &[&str]) -> NextStep {
    let catalog = Catalog::standard();
    let mut last = None;
    for answer in answers {
        last = Some(session.submit(catalog, answer, Timestamp::now()).unwrap());
    }
    last.expect("at least one answer")
}

#[test]
fn new_session_starts_on_first_demographic() {
    let session = Session::new(Uuid::new_v4(), Timestamp::now());
    assert_eq!(session.phase(), Phase::Demographics);
    assert_eq!(session.cursor(), Cursor::Demographics { index: 0 });
    assert_eq!(session.scores().total(), 0);
    assert!(!session.is_complete());
    assert_eq!(
        session.current_prompt(Catalog::standard()),
        Some("What is your name?")
    );
}

#[test]
fn demographics_then_first_social_question() {
    let catalog = Catalog::standard();
    let mut session = Session::new(Uuid::new_v4(), Timestamp::now());

    for (i, answer) in DEMOGRAPHICS.iter().enumerate() {
        let step = session.submit(catalog, answer, Timestamp::now()).unwrap();
        if i + 1 < DEMOGRAPHICS.len() {
            assert_eq!(
                step,
                NextStep::Prompt(catalog.demographic_prompt_at(i + 1).prompt.clone())
            );
            assert_eq!(session.phase(), Phase::Demographics);
        } else {
            assert_eq!(
                step,
                NextStep::Prompt(catalog.prompt_at(Category::Social, 0).to_string())
            );
        }
    }

    assert_eq!(session.phase(), Phase::Categories);
    assert_eq!(
        session.cursor(),
        Cursor::Categories {
            category: 0,
            question: 0,
            stage: CategoryStage::Undecided,
        }
    );
    assert_eq!(
        session.demographics()[&DemographicField::Age],
        DemographicValue::Integer(7)
    );
    assert_eq!(
        session.demographics()[&DemographicField::Name],
        DemographicValue::Text("alex".to_string())
    );
    assert_eq!(session.demographics().len(), 8);
    assert!(session.answers().is_empty());
}

#[test]
fn bad_age_is_rejected_without_mutation() {
    let catalog = Catalog::standard();
    let mut session = Session::new(Uuid::new_v4(), Timestamp::now());
    session.submit(catalog, "Alex", Timestamp::now()).unwrap();

    let err = session.submit(catalog, "seven", Timestamp::now()).unwrap_err();
    assert!(matches!(err, SessionError::InvalidAnswerFormat(_)));
    assert_eq!(session.cursor(), Cursor::Demographics { index: 1 });
    assert!(!session.demographics().contains_key(&DemographicField::Age));

    let step = session.submit(catalog, " 12 ", Timestamp::now()).unwrap();
    assert_eq!(
        step,
        NextStep::Prompt("What is your gender?".to_string())
    );
    assert_eq!(
        session.demographics()[&DemographicField::Age],
        DemographicValue::Integer(12)
    );
}

#[test]
fn negative_first_answer_skips_category() {
    let catalog = Catalog::standard();
    let mut session = session_in_categories();

    let step = session.submit(catalog, "no", Timestamp::now()).unwrap();
    assert_eq!(
        step,
        NextStep::Prompt(catalog.prompt_at(Category::Communication, 0).to_string())
    );
    assert_eq!(session.scores().get(Category::Social), 0);
    assert_eq!(session.answers().len(), 1);
    assert_eq!(session.answers()[0].category, Category::Social);
    assert_eq!(
        session.cursor(),
        Cursor::Categories {
            category: 1,
            question: 0,
            stage: CategoryStage::Undecided,
        }
    );
}

#[test]
fn unrecognized_first_answer_counts_as_negative() {
    let catalog = Catalog::standard();
    let mut session = session_in_categories();

    let step = session.submit(catalog, "maybe?", Timestamp::now()).unwrap();
    assert_eq!(
        step,
        NextStep::Prompt(catalog.prompt_at(Category::Communication, 0).to_string())
    );
    assert_eq!(session.answers()[0].answer, "maybe?");
}

#[test]
fn affirmative_first_answer_scores_all_five() {
    let mut session = session_in_categories();
    answer_all(&mut session, &["Yes", "no", "often", "", "ALWAYS"]);

    assert_eq!(session.scores().get(Category::Social), 3);
    assert_eq!(session.answers().len(), 5);
    assert!(session.answers().iter().all(|a| a.category == Category::Social));
    assert_eq!(
        session.cursor(),
        Cursor::Categories {
            category: 1,
            question: 0,
            stage: CategoryStage::Undecided,
        }
    );
}

#[test]
fn negative_later_answer_does_not_skip() {
    let catalog = Catalog::standard();
    let mut session = session_in_categories();
    answer_all(&mut session, &["yes", "no"]);

    assert_eq!(
        session.cursor(),
        Cursor::Categories {
            category: 0,
            question: 2,
            stage: CategoryStage::ScoringAll,
        }
    );
    assert_eq!(
        session.current_prompt(catalog),
        Some(catalog.prompt_at(Category::Social, 2))
    );
}

#[test]
fn all_no_finishes_after_six_answers() {
    let mut session = session_in_categories();
    let step = answer_all(&mut session, &["no"; 6]);

    let NextStep::Final(result) = step else {
        panic!("expected final result, got {step:?}");
    };
    assert_eq!(result.label, Label::NoAsd);
    assert_eq!(result.total_yes, 0);
    assert_eq!(session.answers().len(), 6);
    assert!(session.is_complete());
    assert_eq!(session.cursor(), Cursor::Complete);
}

#[test]
fn five_yes_in_social_is_likely_asd() {
    let mut session = session_in_categories();
    answer_all(&mut session, &["yes"; 5]);
    let step = answer_all(&mut session, &["no"; 5]);

    let NextStep::Final(result) = step else {
        panic!("expected final result, got {step:?}");
    };
    assert_eq!(result.label, Label::LikelyAsd);
    assert_eq!(result.per_category_labels[&Category::Social], Severity::Severe);
    assert_eq!(result.total_yes, 5);
}

#[test]
fn two_mild_categories_are_at_risk() {
    let mut session = session_in_categories();
    answer_all(&mut session, &["yes", "yes", "no", "no", "no"]);
    answer_all(&mut session, &["yes", "no", "yes", "no", "no"]);
    let step = answer_all(&mut session, &["no"; 4]);

    let NextStep::Final(result) = step else {
        panic!("expected final result, got {step:?}");
    };
    assert_eq!(result.label, Label::AtRisk);
    assert_eq!(result.guidance, "Mild signs — keep monitoring");
    assert_eq!(result.total_yes, session.scores().total());
}

#[test]
fn complete_session_is_frozen() {
    let catalog = Catalog::standard();
    let mut session = session_in_categories();
    answer_all(&mut session, &["no"; 6]);
    let answers_before = session.answers().len();
    let activity_before = session.last_activity();

    let err = session.submit(catalog, "yes", Timestamp::now()).unwrap_err();
    assert!(matches!(err, SessionError::AlreadyComplete(id) if id == session.id()));
    assert_eq!(session.answers().len(), answers_before);
    assert_eq!(session.last_activity(), activity_before);
    assert_eq!(session.current_prompt(catalog), None);
}

#[test]
fn report_data_requires_completion() {
    let mut session = session_in_categories();
    assert!(matches!(
        session.report_data(Timestamp::now()),
        Err(SessionError::ScreeningNotComplete(_))
    ));

    answer_all(&mut session, &["yes", "yes", "yes", "no", "no"]);
    answer_all(&mut session, &["no"; 5]);

    let report = session.report_data(Timestamp::now()).unwrap();
    assert_eq!(report.session_id, session.id());
    assert_eq!(report.scores.get(Category::Social), 3);
    assert_eq!(report.result.label, Label::AtRisk);
    assert_eq!(report.answers.len(), 10);
    assert_eq!(report.demographics.len(), 8);
}
