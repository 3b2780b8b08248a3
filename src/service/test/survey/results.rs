use super::*;

/// Tests the per-question aggregation.
///
/// Two users rate 5 and 3 and leave a comment each; the rating question
/// reduces to a mean of 4.0 and the text question lists both answers.
///
/// Expected: Ok with average 4.0, two text answers, two respondents
#[tokio::test]
async fn aggregates_ratings_and_lists_text_answers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;
    let survey = factory::create_survey(db, event.id).await?;
    let rating = factory::survey::add_question(db, survey.id, "rating", 1).await?;
    let text = factory::survey::add_question(db, survey.id, "text", 2).await?;

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;

    let service = SurveyService::new(db);
    service
        .submit_responses(
            &alice,
            survey.id,
            SubmitSurveyResponsesDto {
                answers: vec![
                    rating_answer(rating.id, 5),
                    text_answer(text.id, "Loved the keynote"),
                ],
            },
        )
        .await?;
    service
        .submit_responses(
            &bob,
            survey.id,
            SubmitSurveyResponsesDto {
                answers: vec![
                    rating_answer(rating.id, 3),
                    text_answer(text.id, "Too few breaks"),
                ],
            },
        )
        .await?;

    let results = service.results(&organizer, survey.id).await?;

    assert_eq!(results.respondents_count, 2);
    assert_eq!(results.questions.len(), 2);

    let rating_result = &results.questions[0];
    assert_eq!(rating_result.question_id, rating.id);
    assert_eq!(rating_result.answers_count, 2);
    assert_eq!(rating_result.average_rating, Some(4.0));

    let text_result = &results.questions[1];
    assert_eq!(text_result.question_id, text.id);
    assert_eq!(text_result.average_rating, None);
    assert_eq!(text_result.text_answers.len(), 2);

    Ok(())
}

/// Tests an unanswered survey's results.
///
/// Expected: Ok with zeroed counts and no average
#[tokio::test]
async fn empty_survey_has_empty_results() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;
    let survey = factory::create_survey(db, event.id).await?;
    factory::survey::add_question(db, survey.id, "rating", 1).await?;

    let service = SurveyService::new(db);
    let results = service.results(&organizer, survey.id).await?;

    assert_eq!(results.respondents_count, 0);
    assert_eq!(results.questions.len(), 1);
    assert_eq!(results.questions[0].answers_count, 0);
    assert_eq!(results.questions[0].average_rating, None);

    Ok(())
}

/// Tests that results are organizer-only.
///
/// Expected: Err(AuthError::NotEventOrganizer) for a respondent
#[tokio::test]
async fn denies_results_to_respondents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;
    let survey = factory::create_survey(db, event.id).await?;
    let rating = factory::survey::add_question(db, survey.id, "rating", 1).await?;

    let user = factory::user::create_user(db).await?;

    let service = SurveyService::new(db);
    service
        .submit_responses(
            &user,
            survey.id,
            SubmitSurveyResponsesDto {
                answers: vec![rating_answer(rating.id, 4)],
            },
        )
        .await?;

    let result = service.results(&user, survey.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotEventOrganizer { .. }))
    ));

    Ok(())
}
