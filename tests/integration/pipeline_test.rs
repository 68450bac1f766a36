// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dropcrawl::application::pipeline::Pipeline;
use dropcrawl::config::settings::{
    FetchMode, FetchSettings, FilterSettings, NormalizeSettings, NotionSettings, Settings,
    SourceSettings,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_HTML: &str = r#"
    <html><body>
    <table>
        <tr><th>Name</th><th>Tasks</th><th>Status</th></tr>
        <tr>
            <td><a href="/p/acme">Acme Drop</a></td>
            <td>Social, Testnet, Cost: $ 5, Time: 45 min</td>
            <td>Confirmed</td>
        </tr>
        <tr>
            <td>Telegram Quest</td>
            <td>Hold</td>
            <td>Live</td>
        </tr>
        <tr>
            <td>Beta Drop</td>
            <td>Time: 10 min</td>
            <td>Upcoming</td>
        </tr>
    </table>
    </body></html>
"#;

fn source(name: &str, url: String) -> SourceSettings {
    SourceSettings {
        name: name.to_string(),
        url,
        mode: FetchMode::Static,
        extractor: "cryptorank".to_string(),
        wait_selector: None,
    }
}

fn settings(sources: Vec<SourceSettings>, notion: NotionSettings) -> Settings {
    Settings {
        fetch: FetchSettings {
            timeout_secs: 5,
            render_timeout_secs: 5,
            render_grace_ms: 100,
        },
        filter: FilterSettings {
            denylist: vec![
                "zealy".to_string(),
                "spam".to_string(),
                "fake".to_string(),
                "discord".to_string(),
                "telegram".to_string(),
            ],
        },
        normalize: NormalizeSettings {
            default_method: "Hold".to_string(),
        },
        notion,
        sources,
    }
}

fn notion(base_url: String) -> NotionSettings {
    NotionSettings {
        token: "secret-token".to_string(),
        database_id: "db-123".to_string(),
        base_url,
    }
}

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/drophunting"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(LISTING_HTML)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_pipeline_scrapes_filters_and_uploads() {
    let site = MockServer::start().await;
    mount_listing(&site).await;

    let notion_api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "page"})))
        .expect(2)
        .mount(&notion_api)
        .await;

    let settings = settings(
        vec![source("cryptorank", format!("{}/drophunting", site.uri()))],
        notion(notion_api.uri()),
    );

    let summary = Pipeline::new(settings).run().await;

    assert_eq!(summary.sources_ok, 1);
    assert_eq!(summary.sources_failed, 0);
    assert_eq!(summary.extracted, 3);
    // "Telegram Quest" hits the denylist; the other two rows survive
    assert_eq!(summary.filtered_out, 1);
    assert_eq!(summary.normalized, 2);

    let report = summary.upload.expect("upload stage should run");
    assert_eq!(report.created, 2);
    assert_eq!(report.failed, 0);
}

#[tokio::test]
async fn test_failed_source_degrades_to_zero_records() {
    let broken_site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drophunting"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&broken_site)
        .await;

    let healthy_site = MockServer::start().await;
    mount_listing(&healthy_site).await;

    let notion_api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "page"})))
        .expect(2)
        .mount(&notion_api)
        .await;

    let settings = settings(
        vec![
            source("broken", format!("{}/drophunting", broken_site.uri())),
            source(
                "cryptorank",
                format!("{}/drophunting", healthy_site.uri()),
            ),
        ],
        notion(notion_api.uri()),
    );

    let summary = Pipeline::new(settings).run().await;

    // The failing source never aborts the run
    assert_eq!(summary.sources_failed, 1);
    assert_eq!(summary.sources_ok, 1);
    assert_eq!(summary.normalized, 2);
    assert_eq!(summary.upload.unwrap().created, 2);
}

#[tokio::test]
async fn test_missing_anchor_yields_empty_run_and_skips_upload() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/drophunting"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>maintenance</body></html>"),
        )
        .mount(&site)
        .await;

    let notion_api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&notion_api)
        .await;

    let settings = settings(
        vec![source("cryptorank", format!("{}/drophunting", site.uri()))],
        notion(notion_api.uri()),
    );

    let summary = Pipeline::new(settings).run().await;

    assert_eq!(summary.sources_ok, 1);
    assert_eq!(summary.extracted, 0);
    assert_eq!(summary.normalized, 0);
    assert!(summary.upload.is_none());
}

#[tokio::test]
async fn test_missing_credentials_fatal_for_upload_stage_only() {
    let site = MockServer::start().await;
    mount_listing(&site).await;

    let settings = settings(
        vec![source("cryptorank", format!("{}/drophunting", site.uri()))],
        NotionSettings {
            token: String::new(),
            database_id: String::new(),
            base_url: "https://api.notion.com".to_string(),
        },
    );

    let summary = Pipeline::new(settings).run().await;

    // Scrape, extract and normalize still ran to completion
    assert_eq!(summary.sources_ok, 1);
    assert_eq!(summary.normalized, 2);
    assert!(summary.upload.is_none());
}
