use jiff::Timestamp;
use uuid::Uuid;

use neuromate_core::models::answer::AnswerRecord;
use neuromate_core::models::demographics::Demographics;
use neuromate_core::models::diagnosis::DiagnosisResult;
use neuromate_core::models::report::ReportData;
use neuromate_core::models::score::CategoryScores;
use neuromate_instruments::answer::{is_affirmative, normalize};
use neuromate_instruments::{classify, Catalog};

use crate::error::SessionError;

/// Which stage of the catalog a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Demographics,
    Categories,
}

/// Per-category sub-machine. The first answer of a category moves it out of
/// `Undecided`: a negative answer skips the category, an affirmative one
/// commits to asking every remaining question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryStage {
    Undecided,
    ScoringAll,
}

/// Position of the next question to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Demographics {
        index: usize,
    },
    Categories {
        category: usize,
        question: usize,
        stage: CategoryStage,
    },
    Complete,
}

/// Outcome of a successful answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    Prompt(String),
    Final(DiagnosisResult),
}

/// State of one respondent's screening.
///
/// Once [`Session::is_complete`] returns true nothing in the session changes
/// again.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    cursor: Cursor,
    demographics: Demographics,
    scores: CategoryScores,
    answers: Vec<AnswerRecord>,
    result: Option<DiagnosisResult>,
    created_at: Timestamp,
    last_activity: Timestamp,
}

impl Session {
    pub fn new(id: Uuid, now: Timestamp) -> Self {
        Self {
            id,
            cursor: Cursor::Demographics { index: 0 },
            demographics: Demographics::new(),
            scores: CategoryScores::new(),
            answers: Vec::new(),
            result: None,
            created_at: now,
            last_activity: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        match self.cursor {
            Cursor::Demographics { .. } => Phase::Demographics,
            Cursor::Categories { .. } | Cursor::Complete => Phase::Categories,
        }
    }

    pub fn demographics(&self) -> &Demographics {
        &self.demographics
    }

    pub fn scores(&self) -> &CategoryScores {
        &self.scores
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<&DiagnosisResult> {
        self.result.as_ref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_activity(&self) -> Timestamp {
        self.last_activity
    }

    /// The prompt awaiting an answer, or `None` once complete.
    pub fn current_prompt<'c>(&self, catalog: &'c Catalog) -> Option<&'c str> {
        match self.cursor {
            Cursor::Demographics { index } => {
                Some(catalog.demographic_prompt_at(index).prompt.as_str())
            }
            Cursor::Categories {
                category, question, ..
            } => Some(catalog.prompt_at(catalog.category_at(category), question)),
            Cursor::Complete => None,
        }
    }

    /// Apply one answer and move to the next question.
    ///
    /// A failed call leaves the session exactly as it was.
    pub fn submit(
        &mut self,
        catalog: &Catalog,
        raw_answer: &str,
        now: Timestamp,
    ) -> Result<NextStep, SessionError> {
        let answer = normalize(raw_answer);

        let step = match self.cursor {
            Cursor::Demographics { index } => self.answer_demographic(catalog, index, answer)?,
            Cursor::Categories {
                category,
                question,
                stage,
            } => self.answer_category(catalog, category, question, stage, answer),
            Cursor::Complete => return Err(SessionError::AlreadyComplete(self.id)),
        };

        self.last_activity = now;
        Ok(step)
    }

    /// Snapshot of the frozen session for the report renderer.
    pub fn report_data(&self, generated_at: Timestamp) -> Result<ReportData, SessionError> {
        let result = self
            .result
            .clone()
            .ok_or(SessionError::ScreeningNotComplete(self.id))?;

        Ok(ReportData {
            session_id: self.id,
            generated_at,
            demographics: self.demographics.clone(),
            scores: self.scores.clone(),
            result,
            answers: self.answers.clone(),
        })
    }

    fn answer_demographic(
        &mut self,
        catalog: &Catalog,
        index: usize,
        answer: String,
    ) -> Result<NextStep, SessionError> {
        let prompt = catalog.demographic_prompt_at(index);
        // Parse before touching any state so a bad age can be retried.
        let value = prompt.parser.parse(prompt.field, &answer)?;
        self.demographics.insert(prompt.field, value);

        let next = index + 1;
        if next < catalog.demographic_count() {
            self.cursor = Cursor::Demographics { index: next };
            return Ok(NextStep::Prompt(
                catalog.demographic_prompt_at(next).prompt.clone(),
            ));
        }

        Ok(self.enter_category(catalog, 0))
    }

    fn answer_category(
        &mut self,
        catalog: &Catalog,
        category_index: usize,
        question: usize,
        stage: CategoryStage,
        answer: String,
    ) -> NextStep {
        let category = catalog.category_at(category_index);
        let affirmative = is_affirmative(&answer);

        self.answers.push(AnswerRecord {
            category,
            question: catalog.prompt_at(category, question).to_string(),
            answer,
        });

        if stage == CategoryStage::Undecided && !affirmative {
            tracing::debug!(session_id = %self.id, %category, "category skipped");
            return self.enter_category(catalog, category_index + 1);
        }

        if affirmative {
            self.scores.increment(category);
        }

        let next_question = question + 1;
        if next_question >= catalog.category_length(category) {
            return self.enter_category(catalog, category_index + 1);
        }

        self.cursor = Cursor::Categories {
            category: category_index,
            question: next_question,
            stage: CategoryStage::ScoringAll,
        };
        NextStep::Prompt(catalog.prompt_at(category, next_question).to_string())
    }

    /// Position the cursor on the first question of `category_index`, or
    /// finalize when every category has been visited.
    fn enter_category(&mut self, catalog: &Catalog, category_index: usize) -> NextStep {
        if category_index >= catalog.category_count() {
            return NextStep::Final(self.finalize());
        }

        self.cursor = Cursor::Categories {
            category: category_index,
            question: 0,
            stage: CategoryStage::Undecided,
        };
        let category = catalog.category_at(category_index);
        NextStep::Prompt(catalog.prompt_at(category, 0).to_string())
    }

    fn finalize(&mut self) -> DiagnosisResult {
        let result = classify(&self.scores);
        tracing::info!(
            session_id = %self.id,
            label = %result.label,
            total_yes = result.total_yes,
            "screening complete"
        );
        self.cursor = Cursor::Complete;
        self.result = Some(result.clone());
        result
    }
}
