// Behavioral tests for `HeroService` against a wiremock collection.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use heroes_core::{
    CoreError, FailurePolicy, Hero, HeroId, HeroService, MessageLog, NewHero, ServiceConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

const COLLECTION: &str = "api/heroes";

async fn setup(policy: FailurePolicy) -> (MockServer, HeroService, MessageLog) {
    let server = MockServer::start().await;
    let config = ServiceConfig::new(Url::parse(&server.uri()).unwrap(), COLLECTION)
        .with_failure_policy(policy);
    let log = MessageLog::new();
    let service = HeroService::new(&config, log.clone()).unwrap();
    (server, service, log)
}

async fn requests(server: &MockServer) -> Vec<wiremock::Request> {
    server.received_requests().await.unwrap_or_default()
}

// ── Reads ───────────────────────────────────────────────────────────

#[tokio::test]
async fn list_heroes_logs_fetch() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 11, "name": "Dr. Nice" },
            { "id": 12, "name": "Narco" },
        ])))
        .mount(&server)
        .await;

    let heroes = service.list_heroes().await.unwrap();

    assert_eq!(heroes, vec![Hero::new(11, "Dr. Nice"), Hero::new(12, "Narco")]);
    assert_eq!(log.texts(), vec!["fetch heroes".to_owned()]);
}

#[tokio::test]
async fn list_heroes_failure_falls_back_to_empty() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let heroes = service.list_heroes().await.unwrap();

    assert!(heroes.is_empty());
    let texts = log.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("getHeroes failed: "), "got {texts:?}");
}

#[tokio::test]
async fn get_hero_present_logs_exactly_once() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("GET"))
        .and(path("/api/heroes/13"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 13, "name": "Bombasto" })),
        )
        .mount(&server)
        .await;

    let hero = service.get_hero(HeroId::new(13)).await.unwrap();

    assert_eq!(hero, Some(Hero::new(13, "Bombasto")));
    assert_eq!(log.texts(), vec!["fetched hero id=13".to_owned()]);
    assert_eq!(
        log.entries()[0].to_string(),
        "HeroService: fetched hero id=13"
    );
}

#[tokio::test]
async fn get_hero_absent_resolves_to_none() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("GET"))
        .and(path("/api/heroes/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let hero = service.get_hero(HeroId::new(99)).await.unwrap();

    assert_eq!(hero, None);
    let texts = log.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("getHero id=99 failed: "), "got {texts:?}");
    assert!(texts[0].ends_with("404 Not Found"), "got {texts:?}");
}

#[tokio::test]
async fn get_hero_unreachable_server_resolves_to_none() {
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let log = MessageLog::new();
    let config = ServiceConfig::new(Url::parse(&uri).unwrap(), COLLECTION);
    let service = HeroService::new(&config, log.clone()).unwrap();

    let hero = service.get_hero(HeroId::new(1)).await.unwrap();

    assert_eq!(hero, None);
    assert!(log.texts()[0].starts_with("getHero id=1 failed: "));
}

// ── Search ──────────────────────────────────────────────────────────

#[tokio::test]
async fn blank_search_makes_no_request_and_logs_nothing() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    assert!(service.search_heroes("").await.unwrap().is_empty());
    assert!(service.search_heroes("   ").await.unwrap().is_empty());

    assert!(requests(&server).await.is_empty());
    assert!(log.is_empty());
}

#[tokio::test]
async fn search_with_matches_logs_found() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .and(query_param("name", "mag"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": 15, "name": "Magneta" }])),
        )
        .mount(&server)
        .await;

    let found = service.search_heroes("mag").await.unwrap();

    assert_eq!(found, vec![Hero::new(15, "Magneta")]);
    assert_eq!(log.texts(), vec![r#"found heroes matching "mag""#.to_owned()]);
}

#[tokio::test]
async fn search_without_matches_logs_none() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .and(query_param("name", "zzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let found = service.search_heroes("zzz").await.unwrap();

    assert!(found.is_empty());
    assert_eq!(log.texts(), vec![r#"no heroes matching "zzz""#.to_owned()]);
}

#[tokio::test]
async fn search_failure_falls_back_to_empty() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("GET"))
        .and(path("/api/heroes"))
        .and(query_param("name", "mag"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let heroes = service.search_heroes("mag").await.unwrap();

    assert!(heroes.is_empty());
    let texts = log.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("searchHeroes failed: "), "{texts:?}");
    assert!(texts[0].contains("500"), "{texts:?}");
}

// ── Writes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn add_then_get_round_trips() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("POST"))
        .and(path("/api/heroes"))
        .and(body_json(json!({ "name": "Tornado" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 21, "name": "Tornado" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/heroes/21"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 21, "name": "Tornado" })),
        )
        .mount(&server)
        .await;

    let created = service
        .add_hero(&NewHero::new("Tornado"))
        .await
        .unwrap()
        .unwrap();
    let fetched = service.get_hero(created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
    assert_eq!(
        log.texts(),
        vec![
            "add hero w/ id=21".to_owned(),
            "fetched hero id=21".to_owned()
        ]
    );
}

#[tokio::test]
async fn add_failure_resolves_to_none() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("POST"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(400).set_body_string("name required"))
        .mount(&server)
        .await;

    let created = service.add_hero(&NewHero::new("")).await.unwrap();

    assert_eq!(created, None);
    assert!(log.texts()[0].starts_with("addHero failed: "));
}

#[tokio::test]
async fn update_returns_submitted_hero_on_empty_response() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("PUT"))
        .and(path("/api/heroes"))
        .and(body_json(json!({ "id": 12, "name": "Narco II" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let hero = Hero::new(12, "Narco II");
    let stored = service.update_hero(&hero).await.unwrap();

    assert_eq!(stored, Some(hero));
    assert_eq!(log.texts(), vec!["updated hero id=12".to_owned()]);
}

#[tokio::test]
async fn update_failure_resolves_to_none() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("PUT"))
        .and(path("/api/heroes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let stored = service.update_hero(&Hero::new(12, "Narco")).await.unwrap();

    assert_eq!(stored, None);
    assert!(log.texts()[0].starts_with("updateHero failed: "));
}

#[tokio::test]
async fn delete_by_id_and_by_entity_send_identical_requests() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("DELETE"))
        .and(path("/api/heroes/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    let by_id = service.delete_hero(HeroId::new(5)).await.unwrap();
    let by_entity = service
        .delete_hero_entity(&Hero::new(5, "X"))
        .await
        .unwrap();

    assert_eq!(by_id, Some(HeroId::new(5)));
    assert_eq!(by_entity, by_id);

    let received = requests(&server).await;
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].method, received[1].method);
    assert_eq!(received[0].url, received[1].url);
    assert_eq!(received[0].url.path(), "/api/heroes/5");
    assert_eq!(
        log.texts(),
        vec![
            "deleted hero id=5".to_owned(),
            "deleted hero id=5".to_owned()
        ]
    );
}

#[tokio::test]
async fn delete_failure_resolves_to_none() {
    let (server, service, log) = setup(FailurePolicy::LogAndDefault).await;

    Mock::given(method("DELETE"))
        .and(path("/api/heroes/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let deleted = service.delete_hero(HeroId::new(5)).await.unwrap();

    assert_eq!(deleted, None);
    let texts = log.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("deleteHero failed: "), "{texts:?}");
    assert!(texts[0].contains("404"), "{texts:?}");
}

// ── Propagate policy ────────────────────────────────────────────────

#[tokio::test]
async fn propagate_policy_returns_errors_and_still_logs() {
    let (server, service, log) = setup(FailurePolicy::Propagate).await;

    Mock::given(method("GET"))
        .and(path("/api/heroes/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = service.get_hero(HeroId::new(99)).await.unwrap_err();

    assert!(matches!(err, CoreError::NotFound { ref identifier } if identifier == "99"));
    assert!(log.texts()[0].starts_with("getHero id=99 failed: "));
}

#[tokio::test]
async fn propagate_policy_does_not_affect_blank_search() {
    let (server, service, log) = setup(FailurePolicy::Propagate).await;

    assert!(service.search_heroes(" \t ").await.unwrap().is_empty());
    assert!(requests(&server).await.is_empty());
    assert!(log.is_empty());
}
