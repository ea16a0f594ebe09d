use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductLine {
    #[serde(rename = "iPhone")]
    IPhone,
    #[serde(rename = "iPad")]
    IPad,
    #[serde(rename = "Mac")]
    Mac,
    #[serde(rename = "Vision Pro")]
    VisionPro,
    #[serde(rename = "Other")]
    Other,
}

impl ProductLine {
    pub const ALL: [ProductLine; 5] = [
        ProductLine::IPhone,
        ProductLine::IPad,
        ProductLine::Mac,
        ProductLine::VisionPro,
        ProductLine::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductLine::IPhone => "iPhone",
            ProductLine::IPad => "iPad",
            ProductLine::Mac => "Mac",
            ProductLine::VisionPro => "Vision Pro",
            ProductLine::Other => "Other",
        }
    }
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductLine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductLine::ALL
            .into_iter()
            .find(|line| line.as_str() == s)
            .ok_or_else(|| format!("Unknown product line: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPreference {
    Yes,
    #[default]
    No,
}

impl FromStr for NotificationPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(NotificationPreference::Yes),
            "no" => Ok(NotificationPreference::No),
            other => Err(format!("Unknown notification preference: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    All,
    Daily,
    Weekly,
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(NotificationType::All),
            "daily" => Ok(NotificationType::Daily),
            "weekly" => Ok(NotificationType::Weekly),
            other => Err(format!("Unknown notification type: {}", other)),
        }
    }
}

/// Form values exactly as the UI layer submitted them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmission {
    #[serde(default)]
    pub project_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_line: Option<String>,
    #[serde(default)]
    pub wants_notifications: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub notification_type: Vec<String>,
}

/// Accepts a single string, a list of strings or null for a multi-select field.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OneOrMany;

    impl<'de> de::Visitor<'de> for OneOrMany {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(vec![value])
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut values = Vec::new();
            while let Some(value) = seq.next_element::<String>()? {
                values.push(value);
            }
            Ok(values)
        }
    }

    deserializer.deserialize_any(OneOrMany)
}

impl RawSubmission {
    pub fn project_code(&self) -> &str {
        self.project_code.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn product_line(&self) -> &str {
        self.product_line.as_deref().unwrap_or_default()
    }
}

/// Validated payload forwarded to `POST {API_BASE_URL}/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    pub project_code: String,
    pub description: String,
    pub product_line: ProductLine,
    pub wants_notifications: NotificationPreference,
    pub notification_type: Vec<NotificationType>,
}
