mod certificate;
mod registration;
mod review;
mod submission;
mod workshop;
