//! Profile validation logic
//!
//! Every rule runs independently and all violations are collected.

use url::Url;

use crate::error::ValidationErrors;
use crate::model::{PhotoInput, ProfileDraft};

/// Allowed trimmed length of `name`, in characters
pub const NAME_LENGTH: std::ops::RangeInclusive<usize> = 3..=50;

/// Allowed trimmed length of `bio`, in characters
pub const BIO_LENGTH: std::ops::RangeInclusive<usize> = 10..=300;

const NAME_MESSAGE: &str = "Имя должно содержать от 3 до 50 символов";
const PHOTO_MESSAGE: &str = "Некорректный URL фото";
const BIO_MESSAGE: &str = "Описание должно содержать от 10 до 300 символов";
const SKILLS_MESSAGE: &str = "Введите хотя бы один навык";
const GITHUB_MESSAGE: &str = "Некорректный URL GitHub";
const RESUME_MESSAGE: &str = "Некорректный URL резюме";

/// Whether `input` parses as an absolute URL
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// Validate a candidate profile, returning every failing field
pub fn validate_profile(draft: &ProfileDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !trimmed_length_within(draft.name.as_deref(), &NAME_LENGTH) {
        errors.insert("name", NAME_MESSAGE);
    }

    let photo_valid = match &draft.photo {
        PhotoInput::Absent => true,
        PhotoInput::Text(photo) => photo.is_empty() || is_valid_url(photo),
        PhotoInput::Malformed => false,
    };
    if !photo_valid {
        errors.insert("photo", PHOTO_MESSAGE);
    }

    if !trimmed_length_within(draft.bio.as_deref(), &BIO_LENGTH) {
        errors.insert("bio", BIO_MESSAGE);
    }

    if draft.skills.as_ref().is_none_or(Vec::is_empty) {
        errors.insert("skills", SKILLS_MESSAGE);
    }

    if !draft.github.as_deref().is_some_and(is_valid_url) {
        errors.insert("github", GITHUB_MESSAGE);
    }

    if !draft.resume.as_deref().is_some_and(is_valid_url) {
        errors.insert("resume", RESUME_MESSAGE);
    }

    errors
}

fn trimmed_length_within(value: Option<&str>, bounds: &std::ops::RangeInclusive<usize>) -> bool {
    value.is_some_and(|v| bounds.contains(&v.trim().chars().count()))
}
