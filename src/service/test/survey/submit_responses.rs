use super::*;

/// Tests filing a full answer batch against an active survey.
///
/// Expected: Ok(2) with the user counted as a respondent
#[tokio::test]
async fn records_a_batch_of_answers() -> Result<(), AppError> {
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

    let user = factory::user::create_user(db).await?;

    let service = SurveyService::new(db);
    let submitted = service
        .submit_responses(
            &user,
            survey.id,
            SubmitSurveyResponsesDto {
                answers: vec![
                    rating_answer(rating.id, 4),
                    text_answer(text.id, "More coffee breaks"),
                ],
            },
        )
        .await?;

    assert_eq!(submitted, 2);

    let detail = service.get_detail(survey.id).await?;
    assert_eq!(detail.respondents_count, 1);

    Ok(())
}

/// Tests that one user responds to a survey at most once.
///
/// Expected: Err(AppError::Conflict) on the second batch
#[tokio::test]
async fn rejects_second_response() -> Result<(), AppError> {
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
                answers: vec![rating_answer(rating.id, 5)],
            },
        )
        .await?;

    let result = service
        .submit_responses(
            &user,
            survey.id,
            SubmitSurveyResponsesDto {
                answers: vec![rating_answer(rating.id, 1)],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a closed survey takes no answers.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_closed_survey() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;
    let survey = factory::survey::SurveyFactory::new(db, event.id)
        .inactive()
        .build()
        .await?;
    let rating = factory::survey::add_question(db, survey.id, "rating", 1).await?;

    let user = factory::user::create_user(db).await?;

    let service = SurveyService::new(db);
    let result = service
        .submit_responses(
            &user,
            survey.id,
            SubmitSurveyResponsesDto {
                answers: vec![rating_answer(rating.id, 4)],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that answers must target this survey's questions.
///
/// Expected: Err(AppError::Validation) for a foreign question id
#[tokio::test]
async fn rejects_foreign_question() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;
    let survey = factory::create_survey(db, event.id).await?;
    let other_survey = factory::create_survey(db, event.id).await?;
    let foreign = factory::survey::add_question(db, other_survey.id, "rating", 1).await?;

    let user = factory::user::create_user(db).await?;

    let service = SurveyService::new(db);
    let result = service
        .submit_responses(
            &user,
            survey.id,
            SubmitSurveyResponsesDto {
                answers: vec![rating_answer(foreign.id, 4)],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests the rating range check.
///
/// Expected: Err(AppError::Validation) for ratings outside [1,5]
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), AppError> {
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
    for bad in [0, 6] {
        let result = service
            .submit_responses(
                &user,
                survey.id,
                SubmitSurveyResponsesDto {
                    answers: vec![rating_answer(rating.id, bad)],
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    Ok(())
}
