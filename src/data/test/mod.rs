mod certificate;
mod event;
mod notification;
mod review;
mod submission;
mod survey;
mod workshop;
