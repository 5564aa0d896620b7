//! Character entity model and DTOs.
//!
//! Besides name/description/role a character carries a long list of
//! free-text biography columns. They are declared once in the
//! `character_profile!` invocation below, which generates the profile row
//! struct, its sparse-patch counterpart and the column list, so the column
//! names, the wire names (camelCase) and the patch mapping cannot drift
//! apart.

use plotline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Any JSON scalar a free-text column accepts.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Decimal(x) => x.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

/// Deserialize a nullable free-text column, storing numbers and booleans in
/// their textual form.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

/// Deserialize a field that must distinguish "absent" from "explicit null".
///
/// Combined with `#[serde(default)]`: absent -> `None`, `null` ->
/// `Some(None)`, value -> `Some(Some(v))`.
fn explicit<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(Some)
}

/// A column assignment of a sparse patch: column name and the value bound to it.
pub type Assignment = (&'static str, Option<String>);

macro_rules! character_profile {
    ($($field:ident),* $(,)?) => {
        /// Free-text biography columns of a character. All nullable.
        #[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct CharacterProfile {
            $(
                #[serde(default, deserialize_with = "text")]
                pub $field: Option<String>,
            )*
        }

        impl CharacterProfile {
            /// Column names, in declaration order.
            pub const COLUMNS: &'static [&'static str] = &[$(stringify!($field)),*];

            /// Values in [`Self::COLUMNS`] order.
            pub fn values(&self) -> Vec<Option<String>> {
                vec![$(self.$field.clone()),*]
            }
        }

        /// Sparse patch over [`CharacterProfile`].
        #[derive(Debug, Clone, Default, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct CharacterProfilePatch {
            $(
                #[serde(default, deserialize_with = "explicit")]
                pub $field: Option<Option<String>>,
            )*
        }

        impl CharacterProfilePatch {
            fn push_assignments(&self, out: &mut Vec<Assignment>) {
                $(
                    if let Some(value) = &self.$field {
                        out.push((stringify!($field), value.clone()));
                    }
                )*
            }
        }
    };
}

character_profile! {
    age,
    gender,
    height,
    weight,
    build,
    eye_color,
    hair_color,
    skin_tone,
    distinguishing_features,
    birthday,
    birthplace,
    occupation,
    education,
    family,
    relationships,
    personality,
    strengths,
    weaknesses,
    fears,
    desires,
    motivations,
    goals,
    beliefs,
    habits,
    hobbies,
    skills,
    backstory,
    secrets,
    speech_pattern,
    style,
    favorite_things,
    arc,
    first_appearance,
    quote,
    extra_notes,
}

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "characterID")]
    pub id: DbId,
    #[serde(rename = "novelID")]
    pub novel_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub role: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub profile: CharacterProfile,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    pub novel_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub role: Option<String>,
    pub profile: CharacterProfile,
}

/// Sparse patch for a character.
///
/// Only fields present in the request body are written. An explicit `null`
/// clears a nullable column; `name` is NOT NULL so a `null` name counts as
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacter {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "explicit")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub role: Option<Option<String>>,
    #[serde(flatten)]
    pub profile: CharacterProfilePatch,
}

impl UpdateCharacter {
    /// Column assignments for every field present in the patch.
    ///
    /// The order is fixed (name, description, role, then the profile in
    /// declaration order) and is the order placeholders are bound in.
    pub fn assignments(&self) -> Vec<Assignment> {
        let mut out = Vec::new();
        if let Some(name) = &self.name {
            out.push(("name", Some(name.clone())));
        }
        if let Some(description) = &self.description {
            out.push(("description", description.clone()));
        }
        if let Some(role) = &self.role {
            out.push(("role", role.clone()));
        }
        self.profile.push_assignments(&mut out);
        out
    }

    /// `true` when the patch carries no recognized field.
    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}
