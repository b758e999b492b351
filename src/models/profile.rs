// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model and sparse profile updates.
//!
//! Profiles are stored at `profiles/{user_id}`, separate from the `users`
//! record, so overwriting a user never touches profile fields.

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Profile fields, all optional. Absent fields are omitted from responses,
/// so a missing profile serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codechef_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leetcode_username: Option<String>,
}

/// Sparse profile update.
///
/// Each field is `None` when omitted from the request, `Some(None)` when sent
/// as an explicit `null`, and `Some(Some(v))` when sent with a value. Only
/// supplied fields are serialized, which keeps Firestore merge writes sparse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(
        default,
        deserialize_with = "supplied",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "supplied",
        skip_serializing_if = "Option::is_none"
    )]
    pub college: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "supplied",
        skip_serializing_if = "Option::is_none"
    )]
    pub course: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "supplied",
        skip_serializing_if = "Option::is_none"
    )]
    pub codechef_username: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "supplied",
        skip_serializing_if = "Option::is_none"
    )]
    pub leetcode_username: Option<Option<String>>,
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn supplied<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ProfileUpdate {
    /// Document field names touched by this update, in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("college", self.college.is_some()),
            ("course", self.course.is_some()),
            ("codechef_username", self.codechef_username.is_some()),
            ("leetcode_username", self.leetcode_username.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }

    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }

    /// Merge the supplied fields into an existing profile.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        fn merge(target: &mut Option<String>, update: &Option<Option<String>>) {
            if let Some(value) = update {
                *target = value.clone();
            }
        }

        merge(&mut profile.name, &self.name);
        merge(&mut profile.college, &self.college);
        merge(&mut profile.course, &self.course);
        merge(&mut profile.codechef_username, &self.codechef_username);
        merge(&mut profile.leetcode_username, &self.leetcode_username);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_empty_update() {
        let update: ProfileUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_unknown_fields_do_not_count() {
        let update: ProfileUpdate = serde_json::from_str(r#"{"favorite":"x"}"#).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_null_is_distinct_from_omitted() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"name":null,"college":"MIT"}"#).unwrap();
        assert_eq!(update.name, Some(None));
        assert_eq!(update.college, Some(Some("MIT".to_string())));
        assert_eq!(update.course, None);
        assert_eq!(update.field_names(), vec!["name", "college"]);
    }

    #[test]
    fn test_serializes_only_supplied_fields() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"course":null,"leetcode_username":"lc"}"#).unwrap();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"course": null, "leetcode_username": "lc"})
        );
    }

    #[test]
    fn test_apply_preserves_omitted_fields() {
        let mut profile = UserProfile {
            name: Some("Ada".to_string()),
            college: Some("Old".to_string()),
            course: Some("CS".to_string()),
            ..Default::default()
        };
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"college":"New","course":null}"#).unwrap();

        update.apply_to(&mut profile);

        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.college.as_deref(), Some("New"));
        assert_eq!(profile.course, None);
    }

    #[test]
    fn test_default_profile_serializes_to_empty_object() {
        let json = serde_json::to_string(&UserProfile::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
