use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    controller::{
        auth, certificate, event, message, notification, registration, review, submission, survey,
        user, workshop,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        // auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // users
        .route("/api/users", post(user::register))
        .route("/api/users/reviewers", get(user::list_reviewers))
        .route("/api/users/me", put(user::update_profile))
        .route("/api/users/{user_id}", get(user::get_by_id))
        // events
        .route("/api/events", get(event::list).post(event::create))
        .route("/api/events/mine", get(event::list_mine))
        .route(
            "/api/events/{event_id}",
            get(event::get_detail).put(event::update),
        )
        .route(
            "/api/events/{event_id}/committee",
            get(event::committee).post(event::add_committee_member),
        )
        .route(
            "/api/events/{event_id}/sessions",
            get(event::list_sessions).post(event::create_session),
        )
        .route(
            "/api/events/{event_id}/sessions/{session_id}",
            delete(event::delete_session),
        )
        // submissions and reviews
        .route(
            "/api/events/{event_id}/submissions",
            get(submission::list_by_event).post(submission::create),
        )
        .route("/api/submissions/mine", get(submission::list_mine))
        .route("/api/submissions/assigned", get(submission::list_assigned))
        .route(
            "/api/submissions/{submission_id}",
            get(submission::get_detail),
        )
        .route(
            "/api/submissions/{submission_id}/status",
            put(submission::override_status),
        )
        .route(
            "/api/submissions/{submission_id}/reviewers",
            post(review::assign_reviewers),
        )
        .route(
            "/api/submissions/{submission_id}/reviews",
            post(review::submit_review),
        )
        .route("/api/reviews/mine", get(review::list_mine))
        // registrations
        .route(
            "/api/events/{event_id}/registrations",
            get(registration::list_by_event).post(registration::register),
        )
        .route("/api/registrations/mine", get(registration::list_mine))
        .route(
            "/api/registrations/{registration_id}/payment",
            put(registration::set_payment_status),
        )
        // workshops
        .route(
            "/api/events/{event_id}/workshops",
            get(workshop::list_by_event).post(workshop::create),
        )
        .route(
            "/api/workshops/{workshop_id}",
            get(workshop::get_by_id)
                .put(workshop::update)
                .delete(workshop::delete),
        )
        .route(
            "/api/workshops/{workshop_id}/join",
            post(workshop::join).delete(workshop::leave),
        )
        // surveys
        .route(
            "/api/events/{event_id}/surveys",
            get(survey::list_by_event).post(survey::create),
        )
        .route("/api/surveys/{survey_id}", get(survey::get_detail))
        .route("/api/surveys/{survey_id}/active", put(survey::set_active))
        .route(
            "/api/surveys/{survey_id}/responses",
            post(survey::submit_responses),
        )
        .route("/api/surveys/{survey_id}/results", get(survey::results))
        // certificates
        .route(
            "/api/events/{event_id}/certificates",
            get(certificate::list_by_event).post(certificate::generate),
        )
        .route("/api/certificates/mine", get(certificate::list_mine))
        // notifications
        .route("/api/notifications", get(notification::list))
        .route(
            "/api/notifications/unread-count",
            get(notification::unread_count),
        )
        .route(
            "/api/notifications/read-all",
            put(notification::mark_all_read),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            put(notification::mark_read),
        )
        // messages
        .route("/api/messages", post(message::send))
        .route("/api/messages/inbox", get(message::inbox))
        .route("/api/messages/sent", get(message::sent))
        .route("/api/messages/{message_id}/read", put(message::mark_read))
}
