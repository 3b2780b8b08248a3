use super::*;

/// Tests response bookkeeping: the answered flag and the distinct respondent
/// count over several answers by the same user.
///
/// Expected: two respondents despite three response rows
#[tokio::test]
async fn counts_distinct_respondents() -> Result<(), DbErr> {
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

    let repo = SurveyRepository::new(db);

    assert!(!repo.has_responded(survey.id, alice.id).await?);

    repo.add_response(
        survey.id,
        alice.id,
        SurveyAnswerDto {
            question_id: rating.id,
            response_text: None,
            response_rating: Some(5),
        },
    )
    .await?;
    repo.add_response(
        survey.id,
        alice.id,
        SurveyAnswerDto {
            question_id: text.id,
            response_text: Some("Great talks".to_string()),
            response_rating: None,
        },
    )
    .await?;
    repo.add_response(
        survey.id,
        bob.id,
        SurveyAnswerDto {
            question_id: rating.id,
            response_text: None,
            response_rating: Some(3),
        },
    )
    .await?;

    assert!(repo.has_responded(survey.id, alice.id).await?);

    let mut respondents = repo.respondent_ids(survey.id).await?;
    respondents.sort_unstable();
    let mut expected = vec![alice.id, bob.id];
    expected.sort_unstable();
    assert_eq!(respondents, expected);

    assert_eq!(repo.list_responses(survey.id).await?.len(), 3);

    Ok(())
}
