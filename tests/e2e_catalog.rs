// tests/e2e_catalog.rs
use axum::http::StatusCode;
use publartz_core::application::services::ServiceSettings;
use serde_json::Value;

mod support;

fn slugs(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["slug"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn catalog_lists_published_articles_newest_first() {
    let app = support::seeded_app().await;

    let (status, page) = support::get_json(&app.router, "/api/v1/articles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 6);
    assert_eq!(page["page"], 1);
    assert_eq!(page["total_pages"], 1);
    assert_eq!(
        slugs(&page),
        vec![
            "ecommerce-trends-2024-masa-depan-belanja-online",
            "cybersecurity-best-practices-remote-work",
            "membangun-startup-sustainable-lessons-unicorn-indonesia",
            "tren-desain-ui-ux-2024-designer",
            "strategi-digital-marketing-umkm-era-modern",
            "panduan-lengkap-memulai-karir-teknologi",
        ]
    );
}

/// The term matches title or summary only; category is a separate filter.
#[tokio::test]
async fn term_search_matches_title_and_summary() {
    let app = support::seeded_app().await;

    let (_, page) = support::get_json(&app.router, "/api/v1/articles?q=teknologi").await;
    assert_eq!(slugs(&page), vec!["panduan-lengkap-memulai-karir-teknologi"]);

    let (_, page) = support::get_json(&app.router, "/api/v1/articles?q=%20TEKNOLOGI").await;
    assert_eq!(slugs(&page), vec!["panduan-lengkap-memulai-karir-teknologi"]);

    // Spaces are part of the term: nothing has "teknologi" followed by a space.
    let (_, page) = support::get_json(&app.router, "/api/v1/articles?q=teknologi%20").await;
    assert_eq!(page["total"], 0);
    let (_, page) = support::get_json(&app.router, "/api/v1/articles?q=%20TEKNOLOGI%20").await;
    assert_eq!(page["total"], 0);

    let (_, page) = support::get_json(&app.router, "/api/v1/articles?category=Teknologi").await;
    assert_eq!(
        slugs(&page),
        vec![
            "cybersecurity-best-practices-remote-work",
            "panduan-lengkap-memulai-karir-teknologi",
        ]
    );
}

#[tokio::test]
async fn term_and_category_are_combined() {
    let app = support::seeded_app().await;

    let (_, page) =
        support::get_json(&app.router, "/api/v1/articles?q=2024&category=Bisnis").await;
    assert_eq!(
        slugs(&page),
        vec!["ecommerce-trends-2024-masa-depan-belanja-online"]
    );

    let (_, page) = support::get_json(&app.router, "/api/v1/articles?q=zzz").await;
    assert_eq!(page["total"], 0);
    assert_eq!(page["total_pages"], 0);
    assert!(slugs(&page).is_empty());
}

#[tokio::test]
async fn pages_are_fixed_size_and_out_of_range_is_empty() {
    let settings = ServiceSettings {
        page_size: 4,
        ..ServiceSettings::default()
    };
    let app = support::spawn_app(settings, true).await;

    let (_, first) = support::get_json(&app.router, "/api/v1/articles?page=1").await;
    assert_eq!(slugs(&first).len(), 4);
    assert_eq!(first["total_pages"], 2);

    let (_, second) = support::get_json(&app.router, "/api/v1/articles?page=2").await;
    assert_eq!(
        slugs(&second),
        vec![
            "strategi-digital-marketing-umkm-era-modern",
            "panduan-lengkap-memulai-karir-teknologi",
        ]
    );

    let (status, third) = support::get_json(&app.router, "/api/v1/articles?page=3").await;
    assert_eq!(status, StatusCode::OK);
    assert!(slugs(&third).is_empty());
    assert_eq!(third["total"], 6);
}

#[tokio::test]
async fn drafts_never_reach_the_catalog() {
    let app = support::seeded_app().await;
    let token = support::login(&app.router).await;

    let (status, _) = support::send(
        &app.router,
        support::json_request(
            axum::http::Method::POST,
            "/api/v1/admin/articles",
            Some(&token),
            &serde_json::json!({
                "title": "Draf Rahasia Teknologi",
                "slug": "draf-rahasia",
                "content": "<p>belum siap</p>",
                "summary": "draf",
                "category": "Teknologi",
                "published": false
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, page) = support::get_json(&app.router, "/api/v1/articles?q=rahasia").await;
    assert_eq!(page["total"], 0);
    let (status, _) =
        support::get_json(&app.router, "/api/v1/articles/by-slug/draf-rahasia").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn categories_are_listed_in_display_order() {
    let app = support::spawn_app(ServiceSettings::default(), false).await;
    let (status, body) = support::get_json(&app.router, "/api/v1/categories").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "Marketing");
    assert_eq!(names[2], "Teknologi");
    assert_eq!(names[9], "Sosial");
}
