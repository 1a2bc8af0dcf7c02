// Resume skill extraction: resume text in, declared skills out.
// File upload and PDF parsing stay outside this service; callers send plain text.

pub mod extraction;
pub mod handlers;
