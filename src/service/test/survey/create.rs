use super::*;

fn feedback_dto() -> CreateSurveyDto {
    CreateSurveyDto {
        title: "Post-event feedback".to_string(),
        description: None,
        questions: vec![
            CreateSurveyQuestionDto {
                question_text: "Overall rating".to_string(),
                kind: SurveyQuestionKind::Rating,
                choices: None,
            },
            CreateSurveyQuestionDto {
                question_text: "What should improve?".to_string(),
                kind: SurveyQuestionKind::Text,
                choices: None,
            },
        ],
    }
}

/// Tests an organizer creating a survey with questions.
///
/// Expected: Ok with an active survey and positioned questions
#[tokio::test]
async fn organizer_creates_active_survey() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;

    let service = SurveyService::new(db);
    let survey = service.create(&organizer, event.id, feedback_dto()).await?;

    assert!(survey.is_active);
    assert_eq!(survey.questions.len(), 2);
    assert_eq!(survey.questions[0].position, 1);
    assert_eq!(survey.questions[1].position, 2);
    assert_eq!(survey.respondents_count, 0);

    Ok(())
}

/// Tests that a survey needs at least one question.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_survey_without_questions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;

    let service = SurveyService::new(db);
    let result = service
        .create(
            &organizer,
            event.id,
            CreateSurveyDto {
                title: "Empty".to_string(),
                description: None,
                questions: vec![],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that a choice question must carry its choices.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_choice_question_without_choices() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;

    let service = SurveyService::new(db);
    let result = service
        .create(
            &organizer,
            event.id,
            CreateSurveyDto {
                title: "Feedback".to_string(),
                description: None,
                questions: vec![CreateSurveyQuestionDto {
                    question_text: "Would you come again?".to_string(),
                    kind: SurveyQuestionKind::Choice,
                    choices: None,
                }],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that another organizer cannot create surveys on the event.
///
/// Expected: Err(AuthError::NotEventOrganizer)
#[tokio::test]
async fn denies_other_organizers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_survey_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;
    let outsider = factory::user::create_organizer(db).await?;
    let event = factory::create_event(db, organizer.id).await?;

    let service = SurveyService::new(db);
    let result = service.create(&outsider, event.id, feedback_dto()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotEventOrganizer { .. }))
    ));

    Ok(())
}
