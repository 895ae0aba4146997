//! Worker Entity
//!
//! A field engineer registered for a region. Rows are maintained outside
//! this app; they are only ever read here.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub city: String,
    pub district: String,
    pub phone: String,
    pub sort_order: i32,
}

impl Worker {
    /// Copy with surrounding whitespace removed from every text field
    pub fn trimmed(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            district: self.district.trim().to_string(),
            phone: self.phone.trim().to_string(),
            sort_order: self.sort_order,
        }
    }

    /// `tel:` link for the phone number
    pub fn phone_href(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

impl Entity for Worker {
    type Id = String;
    const TABLE: &'static str = "workers";

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// The key column may be text (uuid) or an integer depending on the table.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trimmed_strips_every_text_field() {
        let worker = Worker {
            id: " w-1 ".to_string(),
            name: " 김철수 ".to_string(),
            city: "경기 ".to_string(),
            district: "\t수원".to_string(),
            phone: " 010-1234-5678\n".to_string(),
            sort_order: 3,
        };

        let cleaned = worker.trimmed();
        assert_eq!(cleaned.name, "김철수");
        assert_eq!(cleaned.city, "경기");
        assert_eq!(cleaned.district, "수원");
        assert_eq!(cleaned.phone, "010-1234-5678");
        assert_eq!(cleaned.sort_order, 3);
        // identifiers are opaque and left alone
        assert_eq!(cleaned.id, " w-1 ");
        assert_eq!(cleaned.phone_href(), "tel:010-1234-5678");
    }

    #[test]
    fn test_id_accepts_text_or_number() {
        let row = |id: serde_json::Value| {
            json!({
                "id": id, "name": "n", "city": "c", "district": "d",
                "phone": "p", "sort_order": 0
            })
        };

        let text: Worker = serde_json::from_value(row(json!("a1b2"))).unwrap();
        assert_eq!(text.id(), "a1b2");

        let number: Worker = serde_json::from_value(row(json!(42))).unwrap();
        assert_eq!(number.id(), "42");
    }
}
