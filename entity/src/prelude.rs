pub use super::certificate::Entity as Certificate;
pub use super::conference_session::Entity as ConferenceSession;
pub use super::event::Entity as Event;
pub use super::event_committee_member::Entity as EventCommitteeMember;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::registration::Entity as Registration;
pub use super::review::Entity as Review;
pub use super::submission::Entity as Submission;
pub use super::submission_reviewer::Entity as SubmissionReviewer;
pub use super::survey::Entity as Survey;
pub use super::survey_question::Entity as SurveyQuestion;
pub use super::survey_response::Entity as SurveyResponse;
pub use super::user::Entity as User;
pub use super::workshop::Entity as Workshop;
pub use super::workshop_participant::Entity as WorkshopParticipant;
