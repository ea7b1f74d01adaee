//! Profile record and candidate types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationErrors;
use crate::validation::validate_profile;

/// The single persisted profile record
///
/// The on-disk layout matches this shape exactly; `photo` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Short biography
    pub bio: String,
    /// Skill tags
    pub skills: Vec<String>,
    /// GitHub profile URL
    pub github: String,
    /// Resume URL, expected to point at a PDF
    pub resume: String,
}

impl Profile {
    /// Record written on first run when no data file exists
    pub fn seed() -> Self {
        Self {
            name: "Иван Иванов".to_string(),
            photo: Some(
                "https://cdn.pixabay.com/photo/2018/10/09/16/11/kylian-mbappe-3737379_1280.jpg"
                    .to_string(),
            ),
            bio: "Я фронтенд-разработчик, увлекаюсь веб-технологиями и анимациями.".to_string(),
            skills: vec!["HTML".to_string(), "CSS".to_string(), "JavaScript".to_string()],
            github: "https://github.com/ivanivanov".to_string(),
            resume: "https://example.com/resume.pdf".to_string(),
        }
    }

    /// Placeholder record written by a reset
    ///
    /// This record does not pass validation; it only ever reaches storage
    /// through [`crate::ProfileStore::reset`].
    pub fn empty() -> Self {
        Self {
            name: "Имя Фамилия".to_string(),
            photo: Some("https://via.placeholder.com/150".to_string()),
            bio: String::new(),
            skills: Vec::new(),
            github: String::new(),
            resume: String::new(),
        }
    }
}

/// Submitted `photo` value
///
/// Unlike the required fields, a missing photo is acceptable, so a photo of
/// the wrong JSON type must stay distinguishable from no photo at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PhotoInput {
    /// Key missing or `null`
    #[default]
    Absent,
    /// A string; checked as a URL unless empty
    Text(String),
    /// Any other JSON type
    Malformed,
}

impl PhotoInput {
    fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(text)) => Self::Text(text.clone()),
            Some(_) => Self::Malformed,
        }
    }

    /// The submitted text, if the photo was a string
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Absent | Self::Malformed => None,
        }
    }
}

impl From<Option<String>> for PhotoInput {
    fn from(photo: Option<String>) -> Self {
        photo.map_or(Self::Absent, Self::Text)
    }
}

/// Candidate profile as submitted by a client
///
/// Every field is optional so that missing or wrongly typed input becomes a
/// field error rather than a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    /// Submitted name
    pub name: Option<String>,
    /// Submitted avatar URL
    pub photo: PhotoInput,
    /// Submitted biography
    pub bio: Option<String>,
    /// Submitted skills; `None` unless the input was an array of strings
    pub skills: Option<Vec<String>>,
    /// Submitted GitHub URL
    pub github: Option<String>,
    /// Submitted resume URL
    pub resume: Option<String>,
}

impl ProfileDraft {
    /// Extract a draft from an arbitrary JSON value
    ///
    /// Non-object input yields a draft with every field missing. Unknown keys
    /// are ignored.
    pub fn from_json(value: &Value) -> Self {
        let string_field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let skills = value.get("skills").and_then(Value::as_array).and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });

        Self {
            name: string_field("name"),
            photo: PhotoInput::from_json(value.get("photo")),
            bio: string_field("bio"),
            skills,
            github: string_field("github"),
            resume: string_field("resume"),
        }
    }
}

impl From<Profile> for ProfileDraft {
    fn from(profile: Profile) -> Self {
        Self {
            name: Some(profile.name),
            photo: profile.photo.into(),
            bio: Some(profile.bio),
            skills: Some(profile.skills),
            github: Some(profile.github),
            resume: Some(profile.resume),
        }
    }
}

impl TryFrom<ProfileDraft> for Profile {
    type Error = ValidationErrors;

    /// Validate the draft and build the record it describes
    fn try_from(draft: ProfileDraft) -> Result<Self, Self::Error> {
        let errors = validate_profile(&draft);

        // An empty error set implies every required field is present and the
        // photo is absent or a string.
        match draft {
            ProfileDraft {
                name: Some(name),
                photo,
                bio: Some(bio),
                skills: Some(skills),
                github: Some(github),
                resume: Some(resume),
            } if errors.is_empty() => Ok(Self {
                name,
                photo: photo.into_text(),
                bio,
                skills,
                github,
                resume,
            }),
            _ => Err(errors),
        }
    }
}
