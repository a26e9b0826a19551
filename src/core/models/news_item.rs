use serde::Deserialize;

/// One article as returned by the search API. Title and description may embed
/// `<b>` emphasis tags and HTML entities around matched terms; they are kept
/// raw here and stripped at presentation time.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, rename = "originallink")]
    pub original_link: String,
    #[serde(default, rename = "pubDate")]
    pub pub_date: String,
}

/// The success shape of the search API. Unknown fields are ignored so schema
/// additions on the API side never break parsing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NewsSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub display: u32,
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_api_response_shape() {
        let body = r#"{
            "lastBuildDate": "Mon, 17 Jun 2024 10:00:00 +0900",
            "total": 1234,
            "start": 1,
            "display": 20,
            "items": [
                {
                    "title": "<b>포스코</b> 신제품 발표",
                    "originallink": "https://news.example.com/1",
                    "link": "https://n.news.naver.com/article/1",
                    "description": "철강 업계 소식",
                    "pubDate": "Mon, 17 Jun 2024 09:30:00 +0900"
                }
            ]
        }"#;

        let response: NewsSearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.total, 1234);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].title, "<b>포스코</b> 신제품 발표");
        assert_eq!(response.items[0].original_link, "https://news.example.com/1");
        assert_eq!(
            response.items[0].pub_date,
            "Mon, 17 Jun 2024 09:30:00 +0900"
        );
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let body = r#"{"items": [{"title": "t", "link": "l", "description": "d", "pubDate": "p"}]}"#;

        let response: NewsSearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.total, 0);
        assert_eq!(response.items[0].original_link, "");
    }

    #[test]
    fn test_empty_items_array_is_valid() {
        let response: NewsSearchResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();

        assert!(response.items.is_empty());
    }
}
