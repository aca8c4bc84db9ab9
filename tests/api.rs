use serde_json::{json, Value};
use std::collections::HashMap;

use seat_selector::{build_router, config::Config, AppState};

async fn spawn_app(vars: &[(&str, &str)]) -> String {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_vars(|key| vars.get(key).cloned()).expect("valid test config");

    let app = build_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn three_seat_app() -> String {
    spawn_app(&[
        ("TOTAL_SEATS", "3"),
        ("SEATS_PER_ROW", "3"),
        ("BOOKED_SEATS", "3"),
        ("SEAT_PRICE", "100"),
    ])
    .await
}

async fn post(client: &reqwest::Client, url: String, body: Option<Value>) -> Value {
    let req = client.post(url);
    let req = match body {
        Some(body) => req.json(&body),
        None => req,
    };
    let res = req.send().await.unwrap();
    assert!(res.status().is_success());
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_check() {
    let base = three_seat_app().await;
    let body = reqwest::get(format!("{}/health", base)).await.unwrap().text().await.unwrap();
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn click_scenarios_through_http() {
    let base = three_seat_app().await;
    let client = reqwest::Client::new();

    let res = post(&client, format!("{}/api/seats/2/toggle", base), None).await;
    assert_eq!(res["outcome"], "selected");
    assert_eq!(res["seat"], 2);
    assert_eq!(res["view"]["hidden_value"], "2");
    assert_eq!(res["view"]["selected_label"], "2");
    assert_eq!(res["view"]["fare_label"], "₹100.00 x 1 = ₹100.00");

    let res = post(
        &client,
        format!("{}/api/seats/click", base),
        Some(json!({"target": "seat_button", "data_seat": "1"})),
    )
    .await;
    assert_eq!(res["view"]["hidden_value"], "1,2");
    assert_eq!(res["view"]["fare_label"], "₹100.00 x 2 = ₹200.00");

    let res = post(&client, format!("{}/api/seats/3/toggle", base), None).await;
    assert_eq!(res["outcome"], "booked");
    assert_eq!(res["view"]["hidden_value"], "1,2");

    let res = post(&client, format!("{}/api/seats/click", base), Some(json!({"target": "grid"}))).await;
    assert_eq!(res["outcome"], "missed");
    assert_eq!(res["view"]["selected_label"], "1, 2");

    post(&client, format!("{}/api/seats/1/toggle", base), None).await;
    let res = post(&client, format!("{}/api/seats/2/toggle", base), None).await;
    assert_eq!(res["view"]["hidden_value"], "");
    assert_eq!(res["view"]["selected_label"], "None");
    assert_eq!(res["view"]["fare_label"], "₹100.00 x 0 = ₹0.00");
}

#[tokio::test]
async fn seats_listing_reports_state_and_occupancy() {
    let base = three_seat_app().await;
    let client = reqwest::Client::new();
    post(&client, format!("{}/api/seats/1/toggle", base), None).await;

    let res: Value = client
        .get(format!("{}/api/seats", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(res["active"], true);
    assert_eq!(res["seats"][0], json!({"seat": "1", "booked": false, "selected": true}));
    assert_eq!(res["seats"][2]["booked"], true);
    assert_eq!(res["occupancy"]["booked_seats"], 1);
    assert_eq!(res["occupancy"]["available_seats"], 2);
}

#[tokio::test]
async fn reload_discards_selection() {
    let base = three_seat_app().await;
    let client = reqwest::Client::new();
    post(&client, format!("{}/api/seats/2/toggle", base), None).await;

    let res = post(&client, format!("{}/api/seats/reload", base), None).await;
    assert_eq!(res["view"]["hidden_value"], "");
    assert_eq!(res["view"]["selected_label"], "None");
    assert_eq!(res["seats"][1]["selected"], false);
}

#[tokio::test]
async fn book_page_renders_current_selection() {
    let base = three_seat_app().await;
    let client = reqwest::Client::new();
    post(&client, format!("{}/api/seats/2/toggle", base), None).await;

    let html = client
        .get(format!("{}/book", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("class=\"seat-btn seat-selected\" data-seat=\"2\""));
    assert!(html.contains("class=\"seat-btn seat-booked\" data-seat=\"3\""));
    assert!(html.contains("value=\"2\""));
    assert!(html.contains("₹100.00 x 1 = ₹100.00"));
}

#[tokio::test]
async fn non_numeric_seat_is_rejected() {
    let base = three_seat_app().await;
    let res = reqwest::Client::new()
        .post(format!("{}/api/seats/abc/toggle", base))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unpriced_layout_charges_nothing() {
    let base = spawn_app(&[("TOTAL_SEATS", "2"), ("CURRENCY_SYMBOL", "$")]).await;
    let client = reqwest::Client::new();

    let res = post(&client, format!("{}/api/seats/1/toggle", base), None).await;
    assert_eq!(res["view"]["fare_label"], "$0.00 x 1 = $0.00");
}
