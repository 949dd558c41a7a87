//! Member records and the member-creation form.
//!
//! # Invariants
//! - `id` is unique across default and stored members.
//! - `semester` is within `1..=8` and `bio` is at most 150 characters for
//!   every member created through `NewMemberForm`.
//! - Members are immutable after creation.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Stable member identifier. Timestamp-derived for created members.
pub type MemberId = String;

/// Teams offered by the member form and the assignee picker.
///
/// The stored `team` field is an open set: default members may carry teams
/// outside this list (e.g. `Convenor`).
pub const BUILTIN_TEAMS: &[&str] = &[
    "Management",
    "Tech",
    "Design",
    "PR",
    "Content",
    "Media",
    "Support",
];

pub const MAX_BIO_CHARS: usize = 150;
pub const SEMESTER_RANGE: RangeInclusive<u8> = 1..=8;

const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";
const EMAIL_DOMAIN: &str = "example.com";

/// Club member as stored in the `members` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub roll_number: String,
    pub section: String,
    pub semester: u8,
    pub team: String,
    #[serde(default)]
    pub bio: String,
    /// Remote URL or inline `data:` URI.
    #[serde(default)]
    pub profile_image: String,
    pub joined_date: NaiveDate,
    #[serde(default)]
    pub email: String,
}

/// Raw member-creation form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMemberForm {
    pub name: String,
    pub roll_number: String,
    pub section: String,
    pub semester: Option<u8>,
    pub team: Option<String>,
    pub bio: String,
    pub profile_image: Option<String>,
}

/// Member form rejection reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberFormError {
    MissingTeam,
    MissingRequiredFields,
    SemesterOutOfRange(u8),
    BioTooLong { chars: usize },
    /// Name already used by a team or another member.
    DuplicateName(String),
}

impl Display for MemberFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTeam => write!(f, "Please select a team"),
            Self::MissingRequiredFields => write!(f, "Please fill all required fields"),
            Self::SemesterOutOfRange(value) => write!(
                f,
                "Semester must be between {} and {}, got {value}",
                SEMESTER_RANGE.start(),
                SEMESTER_RANGE.end()
            ),
            Self::BioTooLong { chars } => write!(
                f,
                "Bio must be at most {MAX_BIO_CHARS} characters, got {chars}"
            ),
            Self::DuplicateName(name) => write!(f, "The name {name} is already taken"),
        }
    }
}

impl Error for MemberFormError {}

impl NewMemberForm {
    /// Checks the form in the order the creation page reports problems:
    /// team first, then required fields, then ranges.
    pub fn validate(&self) -> Result<(), MemberFormError> {
        let team_selected = self
            .team
            .as_deref()
            .is_some_and(|team| !team.trim().is_empty());
        if !team_selected {
            return Err(MemberFormError::MissingTeam);
        }

        let semester = match self.semester {
            Some(value) => value,
            None => return Err(MemberFormError::MissingRequiredFields),
        };
        if [&self.name, &self.roll_number, &self.section]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err(MemberFormError::MissingRequiredFields);
        }

        if !SEMESTER_RANGE.contains(&semester) {
            return Err(MemberFormError::SemesterOutOfRange(semester));
        }

        let bio_chars = self.bio.chars().count();
        if bio_chars > MAX_BIO_CHARS {
            return Err(MemberFormError::BioTooLong { chars: bio_chars });
        }

        Ok(())
    }

    /// Name as it will be stored: trimmed, inner whitespace collapsed.
    pub fn display_name(&self) -> String {
        WHITESPACE_RE.replace_all(self.name.trim(), " ").into_owned()
    }

    /// Builds the stored record after validation.
    ///
    /// Derived fields: upper-cased roll number, `<roll>@example.com` email,
    /// generated avatar URL when no image was uploaded, `joined_date = today`.
    pub fn into_member(self, id: MemberId, today: NaiveDate) -> Result<Member, MemberFormError> {
        self.validate()?;

        let name = self.display_name();
        let roll_number = WHITESPACE_RE
            .replace_all(self.roll_number.trim(), "")
            .to_uppercase();
        let email = format!("{}@{EMAIL_DOMAIN}", roll_number.to_lowercase());
        let profile_image = match self.profile_image {
            Some(image) if !image.trim().is_empty() => image,
            _ => default_avatar_url(&name),
        };

        Ok(Member {
            id,
            name,
            roll_number,
            section: self.section.trim().to_string(),
            semester: self.semester.unwrap_or_default(),
            team: self.team.unwrap_or_default().trim().to_string(),
            bio: self.bio,
            profile_image,
            joined_date: today,
            email,
        })
    }
}

/// Generated avatar for members created without an uploaded image.
pub fn default_avatar_url(name: &str) -> String {
    format!(
        "{AVATAR_BASE_URL}?name={}&background=667eea&color=fff",
        urlencoding::encode(name)
    )
}

/// Built-in roster that is always listed ahead of stored members.
#[rustfmt::skip]
pub fn default_members() -> Vec<Member> {
    vec![
        seed("1", "Chukrit Da", "69", "A", 6, "Convenor",
            "Convenor of the task management system",
            "https://picsum.photos/200", (2024, 1, 15), "abc@aot.edu.in"),
        seed("2", "Elon Musk", "TECH002", "A", 6, "Tech",
            "Tech team member", "", (2024, 1, 16), "c@company.com"),
        seed("3", "Arjun Sharma", "21CS001", "A", 6, "Tech",
            "Full-stack developer passionate about React and Node.js",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Arjun",
            (2024, 1, 15), "arjun@example.com"),
        seed("4", "Priya Singh", "21CS012", "A", 6, "Design",
            "UI/UX enthusiast creating beautiful digital experiences",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Priya",
            (2024, 1, 16), "priya@example.com"),
        seed("5", "Rahul Verma", "21CS023", "B", 5, "Marketing",
            "Growth hacker with focus on social media campaigns",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Rahul",
            (2024, 2, 1), "rahul@example.com"),
        seed("6", "Sneha Patel", "21CS034", "B", 6, "PR",
            "Event coordinator and communications specialist",
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Sneha",
            (2024, 2, 5), "sneha@example.com"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    roll_number: &str,
    section: &str,
    semester: u8,
    team: &str,
    bio: &str,
    profile_image: &str,
    joined: (i32, u32, u32),
    email: &str,
) -> Member {
    let (year, month, day) = joined;
    Member {
        id: id.to_string(),
        name: name.to_string(),
        roll_number: roll_number.to_string(),
        section: section.to_string(),
        semester,
        team: team.to_string(),
        bio: bio.to_string(),
        profile_image: profile_image.to_string(),
        joined_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        email: email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> NewMemberForm {
        NewMemberForm {
            name: "  Meera   Iyer ".to_string(),
            roll_number: "22cs 045".to_string(),
            section: "CSE2".to_string(),
            semester: Some(4),
            team: Some("Media".to_string()),
            bio: "Shoots the club reels".to_string(),
            profile_image: None,
        }
    }

    #[test]
    fn missing_team_is_reported_before_other_fields() {
        let form = NewMemberForm::default();
        assert_eq!(form.validate(), Err(MemberFormError::MissingTeam));
    }

    #[test]
    fn missing_semester_counts_as_missing_required_field() {
        let form = NewMemberForm {
            semester: None,
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(MemberFormError::MissingRequiredFields));
    }

    #[test]
    fn semester_and_bio_limits_are_enforced() {
        let form = NewMemberForm {
            semester: Some(9),
            ..filled_form()
        };
        assert_eq!(form.validate(), Err(MemberFormError::SemesterOutOfRange(9)));

        let form = NewMemberForm {
            bio: "x".repeat(MAX_BIO_CHARS + 1),
            ..filled_form()
        };
        assert_eq!(
            form.validate(),
            Err(MemberFormError::BioTooLong {
                chars: MAX_BIO_CHARS + 1
            })
        );
    }

    #[test]
    fn into_member_derives_roll_email_and_avatar() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let member = filled_form()
            .into_member("1740787200000".to_string(), today)
            .unwrap();

        assert_eq!(member.name, "Meera Iyer");
        assert_eq!(filled_form().display_name(), member.name);
        assert_eq!(member.roll_number, "22CS045");
        assert_eq!(member.email, "22cs045@example.com");
        assert_eq!(member.joined_date, today);
        assert_eq!(
            member.profile_image,
            "https://ui-avatars.com/api/?name=Meera%20Iyer&background=667eea&color=fff"
        );
    }

    #[test]
    fn default_roster_has_unique_ids() {
        let members = default_members();
        assert_eq!(members.len(), 6);
        let mut ids: Vec<_> = members.iter().map(|m| m.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }
}
