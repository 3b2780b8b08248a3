pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_event_table;
mod m20260801_000003_create_event_committee_member_table;
mod m20260801_000004_create_conference_session_table;
mod m20260802_000005_create_submission_table;
mod m20260802_000006_create_submission_reviewer_table;
mod m20260802_000007_create_review_table;
mod m20260803_000008_create_registration_table;
mod m20260803_000009_create_workshop_table;
mod m20260803_000010_create_workshop_participant_table;
mod m20260804_000011_create_certificate_table;
mod m20260804_000012_create_notification_table;
mod m20260804_000013_create_message_table;
mod m20260805_000014_create_survey_table;
mod m20260805_000015_create_survey_question_table;
mod m20260805_000016_create_survey_response_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_event_table::Migration),
            Box::new(m20260801_000003_create_event_committee_member_table::Migration),
            Box::new(m20260801_000004_create_conference_session_table::Migration),
            Box::new(m20260802_000005_create_submission_table::Migration),
            Box::new(m20260802_000006_create_submission_reviewer_table::Migration),
            Box::new(m20260802_000007_create_review_table::Migration),
            Box::new(m20260803_000008_create_registration_table::Migration),
            Box::new(m20260803_000009_create_workshop_table::Migration),
            Box::new(m20260803_000010_create_workshop_participant_table::Migration),
            Box::new(m20260804_000011_create_certificate_table::Migration),
            Box::new(m20260804_000012_create_notification_table::Migration),
            Box::new(m20260804_000013_create_message_table::Migration),
            Box::new(m20260805_000014_create_survey_table::Migration),
            Box::new(m20260805_000015_create_survey_question_table::Migration),
            Box::new(m20260805_000016_create_survey_response_table::Migration),
        ]
    }
}
