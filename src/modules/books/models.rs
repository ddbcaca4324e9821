use serde::{Deserialize, Serialize};

/// Domain model for the Books module.
///
/// The wire field names `titulo` and `autor` are part of the published API
/// and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned by the registry on creation.
    /// Defaults to zero when absent so creation payloads may omit it.
    #[serde(default)]
    pub id: i64,
    /// Title of the book
    #[serde(rename = "titulo")]
    pub title: String,
    /// Author of the book
    #[serde(rename = "autor")]
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let book = Book {
            id: 1,
            title: "Dom Casmurro".to_string(),
            author: "Machado de Assis".to_string(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "titulo": "Dom Casmurro",
                "autor": "Machado de Assis"
            })
        );
    }

    #[test]
    fn json_round_trip_is_identity() {
        let book = Book {
            id: 7,
            title: "A Arte da Guerra".to_string(),
            author: "Sun Tzu".to_string(),
        };

        let encoded = serde_json::to_string(&book).unwrap();
        let decoded: Book = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, book);
    }

    #[test]
    fn deserializes_without_id() {
        let book: Book = serde_json::from_str(r#"{"titulo":"X","autor":"Y"}"#).unwrap();
        assert_eq!(book.id, 0);
        assert_eq!(book.title, "X");
        assert_eq!(book.author, "Y");
    }
}
