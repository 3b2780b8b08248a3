use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables in dependency order (tables
/// with foreign keys after their referenced tables), then call `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. The table is created when `build()` is
    /// called.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for the review workflow: users, events with
    /// their committee, submissions with their reviewer assignments, reviews
    /// and notifications.
    pub fn with_review_tables(self) -> Self {
        self.with_table(User)
            .with_table(Event)
            .with_table(EventCommitteeMember)
            .with_table(Submission)
            .with_table(SubmissionReviewer)
            .with_table(Review)
            .with_table(Notification)
    }

    /// Adds all tables required for event participation: registrations,
    /// workshops with their participants, program sessions and certificates.
    pub fn with_participation_tables(self) -> Self {
        self.with_table(User)
            .with_table(Event)
            .with_table(EventCommitteeMember)
            .with_table(ConferenceSession)
            .with_table(Registration)
            .with_table(Workshop)
            .with_table(WorkshopParticipant)
            .with_table(Certificate)
    }

    /// Adds the tables for the feedback survey workflow.
    pub fn with_survey_tables(self) -> Self {
        self.with_table(User)
            .with_table(Event)
            .with_table(Survey)
            .with_table(SurveyQuestion)
            .with_table(SurveyResponse)
    }

    /// Adds all tables in the schema. Heavier than the focused variants;
    /// used by workflows that span both reviewing and participation, such as
    /// certificate generation.
    pub fn with_all_tables(self) -> Self {
        self.with_review_tables()
            .with_table(ConferenceSession)
            .with_table(Registration)
            .with_table(Workshop)
            .with_table(WorkshopParticipant)
            .with_table(Certificate)
            .with_table(Message)
            .with_table(Survey)
            .with_table(SurveyQuestion)
            .with_table(SurveyResponse)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes the
    /// CREATE TABLE statements in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)`: Fully initialized test context
    /// - `Err(TestError::Database)`: Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
