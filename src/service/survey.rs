use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{event::EventRepository, survey::SurveyRepository},
    error::{auth::AuthError, AppError},
    model::{
        survey::{
            CreateSurveyDto, SetSurveyActiveDto, SubmitSurveyResponsesDto, SurveyDto,
            SurveyQuestionKind, SurveyQuestionResultDto, SurveyResultsDto,
        },
        user::Role,
    },
};

pub struct SurveyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SurveyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a feedback survey with its questions in one step.
    ///
    /// Restricted to the event's organizer or a super admin. The survey opens
    /// active; choice questions must carry their choices.
    pub async fn create(
        &self,
        current_user: &entity::user::Model,
        event_id: i32,
        dto: CreateSurveyDto,
    ) -> Result<SurveyDto, AppError> {
        if dto.title.trim().is_empty() {
            return Err(AppError::Validation("Title must not be empty".to_string()));
        }
        if dto.questions.is_empty() {
            return Err(AppError::Validation(
                "A survey needs at least one question".to_string(),
            ));
        }
        for question in &dto.questions {
            if question.question_text.trim().is_empty() {
                return Err(AppError::Validation(
                    "Question text must not be empty".to_string(),
                ));
            }
            if question.kind == SurveyQuestionKind::Choice && question.choices.is_none() {
                return Err(AppError::Validation(format!(
                    "Choice question '{}' has no choices",
                    question.question_text
                )));
            }
        }

        let event = EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        let txn = self.db.begin().await?;

        let repo = SurveyRepository::new(&txn);
        let survey = repo
            .create(event_id, dto.title, dto.description)
            .await?;

        let mut questions = Vec::with_capacity(dto.questions.len());
        for (index, question) in dto.questions.into_iter().enumerate() {
            let position = index as i32 + 1;
            questions.push(repo.add_question(survey.id, position, question).await?);
        }

        txn.commit().await?;

        SurveyDto::from_model(survey, questions, 0).map_err(AppError::InternalError)
    }

    pub async fn list_by_event(&self, event_id: i32) -> Result<Vec<SurveyDto>, AppError> {
        EventRepository::new(self.db)
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        let repo = SurveyRepository::new(self.db);
        let surveys = repo.list_by_event(event_id).await?;

        let mut dtos = Vec::with_capacity(surveys.len());
        for survey in surveys {
            let questions = repo.list_questions(survey.id).await?;
            let respondents = repo.respondent_ids(survey.id).await?.len() as u64;
            dtos.push(
                SurveyDto::from_model(survey, questions, respondents)
                    .map_err(AppError::InternalError)?,
            );
        }

        Ok(dtos)
    }

    pub async fn get_detail(&self, survey_id: i32) -> Result<SurveyDto, AppError> {
        let repo = SurveyRepository::new(self.db);

        let survey = repo
            .get_by_id(survey_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Survey {} not found", survey_id)))?;

        let questions = repo.list_questions(survey_id).await?;
        let respondents = repo.respondent_ids(survey_id).await?.len() as u64;

        SurveyDto::from_model(survey, questions, respondents).map_err(AppError::InternalError)
    }

    /// Opens or closes the survey for responses. Restricted to the event's
    /// organizer or a super admin.
    pub async fn set_active(
        &self,
        current_user: &entity::user::Model,
        survey_id: i32,
        dto: SetSurveyActiveDto,
    ) -> Result<SurveyDto, AppError> {
        let repo = SurveyRepository::new(self.db);

        let survey = repo
            .get_by_id(survey_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Survey {} not found", survey_id)))?;

        let event = EventRepository::new(self.db)
            .get_by_id(survey.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", survey.event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        let updated = repo.set_active(survey, dto.is_active).await?;
        let questions = repo.list_questions(survey_id).await?;
        let respondents = repo.respondent_ids(survey_id).await?.len() as u64;

        SurveyDto::from_model(updated, questions, respondents).map_err(AppError::InternalError)
    }

    /// Files the current user's answers as one batch.
    ///
    /// The survey must be active and the user must not have responded before.
    /// Each answer must target a question of this survey; rating questions
    /// take a score in [1,5], text and choice questions take a non-empty text.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of answers recorded
    /// - `Err(AppError)`: Closed survey, invalid answer or duplicate response
    pub async fn submit_responses(
        &self,
        current_user: &entity::user::Model,
        survey_id: i32,
        dto: SubmitSurveyResponsesDto,
    ) -> Result<usize, AppError> {
        let survey = SurveyRepository::new(self.db)
            .get_by_id(survey_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Survey {} not found", survey_id)))?;

        if !survey.is_active {
            return Err(AppError::Validation(format!(
                "Survey {} is closed",
                survey_id
            )));
        }
        if dto.answers.is_empty() {
            return Err(AppError::Validation(
                "A response needs at least one answer".to_string(),
            ));
        }

        let questions: HashMap<i32, SurveyQuestionKind> = SurveyRepository::new(self.db)
            .list_questions(survey_id)
            .await?
            .into_iter()
            .map(|q| {
                q.kind
                    .parse::<SurveyQuestionKind>()
                    .map(|kind| (q.id, kind))
            })
            .collect::<Result<_, _>>()
            .map_err(AppError::InternalError)?;

        let mut seen = HashSet::new();
        for answer in &dto.answers {
            let kind = questions.get(&answer.question_id).ok_or_else(|| {
                AppError::Validation(format!(
                    "Question {} does not belong to survey {}",
                    answer.question_id, survey_id
                ))
            })?;
            if !seen.insert(answer.question_id) {
                return Err(AppError::Validation(format!(
                    "Question {} answered twice",
                    answer.question_id
                )));
            }
            match kind {
                SurveyQuestionKind::Rating => match answer.response_rating {
                    Some(rating) if (1..=5).contains(&rating) => {}
                    _ => {
                        return Err(AppError::Validation(format!(
                            "Question {} takes a rating between 1 and 5",
                            answer.question_id
                        )))
                    }
                },
                SurveyQuestionKind::Text | SurveyQuestionKind::Choice => {
                    let empty = answer
                        .response_text
                        .as_deref()
                        .map_or(true, |text| text.trim().is_empty());
                    if empty {
                        return Err(AppError::Validation(format!(
                            "Question {} takes a text answer",
                            answer.question_id
                        )));
                    }
                }
            }
        }

        let txn = self.db.begin().await?;

        let repo = SurveyRepository::new(&txn);

        if repo.has_responded(survey_id, current_user.id).await? {
            return Err(AppError::Conflict(format!(
                "Already responded to survey {}",
                survey_id
            )));
        }

        let count = dto.answers.len();
        for answer in dto.answers {
            repo.add_response(survey_id, current_user.id, answer).await?;
        }

        txn.commit().await?;

        Ok(count)
    }

    /// Aggregates the survey's responses per question.
    ///
    /// Rating questions reduce to a mean over the filed scores; text and
    /// choice questions list every answer verbatim. Restricted to the event's
    /// organizer or a super admin.
    pub async fn results(
        &self,
        current_user: &entity::user::Model,
        survey_id: i32,
    ) -> Result<SurveyResultsDto, AppError> {
        let repo = SurveyRepository::new(self.db);

        let survey = repo
            .get_by_id(survey_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Survey {} not found", survey_id)))?;

        let event = EventRepository::new(self.db)
            .get_by_id(survey.event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", survey.event_id)))?;

        Self::ensure_organizer(current_user, &event)?;

        let questions = repo.list_questions(survey_id).await?;
        let responses = repo.list_responses(survey_id).await?;
        let respondents_count = repo.respondent_ids(survey_id).await?.len() as u64;

        let mut by_question: HashMap<i32, Vec<&entity::survey_response::Model>> = HashMap::new();
        for response in &responses {
            by_question
                .entry(response.question_id)
                .or_default()
                .push(response);
        }

        let mut results = Vec::with_capacity(questions.len());
        for question in questions {
            let kind = question
                .kind
                .parse::<SurveyQuestionKind>()
                .map_err(AppError::InternalError)?;
            let answers = by_question.remove(&question.id).unwrap_or_default();

            let ratings: Vec<i32> = answers
                .iter()
                .filter_map(|r| r.response_rating)
                .collect();
            let average_rating = if ratings.is_empty() {
                None
            } else {
                Some(f64::from(ratings.iter().sum::<i32>()) / ratings.len() as f64)
            };

            let text_answers = answers
                .iter()
                .filter_map(|r| r.response_text.clone())
                .collect();

            results.push(SurveyQuestionResultDto {
                question_id: question.id,
                question_text: question.question_text,
                kind,
                answers_count: answers.len() as u64,
                average_rating,
                text_answers,
            });
        }

        Ok(SurveyResultsDto {
            survey_id,
            respondents_count,
            questions: results,
        })
    }

    fn ensure_organizer(
        current_user: &entity::user::Model,
        event: &entity::event::Model,
    ) -> Result<(), AppError> {
        if current_user.role == Role::SuperAdmin.as_str() || event.organizer_id == current_user.id {
            return Ok(());
        }

        Err(AuthError::NotEventOrganizer {
            user_id: current_user.id,
            event_id: event.id,
        }
        .into())
    }
}
