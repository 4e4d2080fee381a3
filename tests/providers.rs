mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn empty_directory_is_an_empty_array() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    let (status, body) = app.get("/api/providers", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn providers_have_boolean_flag_and_placeholder_lists() -> anyhow::Result<()> {
    let app = common::spawn_app().await?;
    app.insert_provider(2, "LayerLab", true).await?;
    app.insert_provider(1, "Marco", false).await?;

    let (status, body) = app.get("/api/providers", None).await?;
    assert_eq!(status, StatusCode::OK);
    let providers = body.as_array().expect("array");
    assert_eq!(providers.len(), 2);

    let first = &providers[0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Marco");
    assert_eq!(first["isBusiness"], false);
    assert_eq!(first["distance"], 2.5);
    assert_eq!(first["rating"], 4.7);
    assert!(first["avatarUrl"].is_null());
    assert_eq!(first["motto"], "Layer by layer");
    assert_eq!(providers[1]["isBusiness"], true);

    for provider in providers {
        for key in ["printers", "materials", "orders"] {
            assert_eq!(provider[key], serde_json::json!([]), "{key}");
        }
    }
    Ok(())
}
