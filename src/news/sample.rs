use chrono::{Duration, Utc};

use crate::news::types::Article;

/// Built-in articles served when live fetching is disabled.
pub fn sample_articles() -> Vec<Article> {
    let now = Utc::now();

    vec![
        Article {
            id: 1,
            title: "Go 1.20 Released".to_string(),
            summary: "Go 1.20 includes many improvements.".to_string(),
            author: "Go Team".to_string(),
            published_at: now - Duration::days(2),
            url: "https://golang.org".to_string(),
            image: None,
        },
        Article {
            id: 2,
            title: "TypeScript 5.0 Announced".to_string(),
            summary: "New TS features for better DX.".to_string(),
            author: "TS Team".to_string(),
            published_at: now - Duration::days(7),
            url: "https://www.typescriptlang.org".to_string(),
            image: None,
        },
        Article {
            id: 3,
            title: "Vite for Fast Frontends".to_string(),
            summary: "Vite continues to lead modern tooling.".to_string(),
            author: "Frontend Weekly".to_string(),
            published_at: now - Duration::days(1),
            url: "https://vitejs.dev".to_string(),
            image: None,
        },
    ]
}
