use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::news::error::NewsError;

/// Article as served by `/api/articles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub author: String,
    #[serde(rename = "date")]
    pub published_at: DateTime<Utc>,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Record shape returned by Finnhub's `/news` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinnhubArticle {
    #[serde(default)]
    pub category: String,
    pub datetime: i64,
    pub headline: String,
    pub id: i64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub related: String,
    pub source: String,
    pub summary: String,
    pub url: String,
}

impl TryFrom<FinnhubArticle> for Article {
    type Error = NewsError;

    fn try_from(raw: FinnhubArticle) -> Result<Self, Self::Error> {
        let published_at = DateTime::from_timestamp(raw.datetime, 0).ok_or_else(|| {
            NewsError::Decode(format!(
                "article {} has out of range timestamp {}",
                raw.id, raw.datetime
            ))
        })?;

        let image = Some(raw.image).filter(|image| !image.is_empty());

        Ok(Self {
            id: raw.id,
            title: raw.headline,
            summary: raw.summary,
            author: raw.source,
            published_at,
            url: raw.url,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(image: &str) -> FinnhubArticle {
        FinnhubArticle {
            category: "general".to_string(),
            datetime: 1_700_000_000,
            headline: "Markets rally".to_string(),
            id: 42,
            image: image.to_string(),
            related: String::new(),
            source: "Reuters".to_string(),
            summary: "Stocks closed higher.".to_string(),
            url: "https://example.com/rally".to_string(),
        }
    }

    #[test]
    fn test_maps_upstream_fields() {
        let article = Article::try_from(raw("https://example.com/a.png")).unwrap();

        assert_eq!(article.id, 42);
        assert_eq!(article.title, "Markets rally");
        assert_eq!(article.author, "Reuters");
        assert_eq!(article.summary, "Stocks closed higher.");
        assert_eq!(article.published_at.timestamp(), 1_700_000_000);
        assert_eq!(article.image.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_empty_image_serializes_as_null() {
        let article = Article::try_from(raw("")).unwrap();
        assert_eq!(article.image, None);

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json.get("image"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_out_of_range_timestamp_fails() {
        let mut record = raw("");
        record.datetime = i64::MAX;

        let err = Article::try_from(record).unwrap_err();
        assert!(matches!(err, NewsError::Decode(_)));
    }

    #[test]
    fn test_serializes_published_at_as_date() {
        let article = Article::try_from(raw("")).unwrap();
        let json = serde_json::to_value(&article).unwrap();

        assert_eq!(json["date"], "2023-11-14T22:13:20Z");
        assert_eq!(json["title"], "Markets rally");
        assert!(json.get("published_at").is_none());
    }

    #[test]
    fn test_optional_wire_fields_default() {
        let json = r#"{"datetime":1,"headline":"h","id":1,"source":"s","summary":"x","url":"u"}"#;
        let record: FinnhubArticle = serde_json::from_str(json).unwrap();

        assert_eq!(record.category, "");
        assert_eq!(record.image, "");
    }
}
