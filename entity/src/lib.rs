pub mod certificate;
pub mod conference_session;
pub mod event;
pub mod event_committee_member;
pub mod message;
pub mod notification;
pub mod registration;
pub mod review;
pub mod submission;
pub mod submission_reviewer;
pub mod survey;
pub mod survey_question;
pub mod survey_response;
pub mod user;
pub mod workshop;
pub mod workshop_participant;

pub mod prelude;
