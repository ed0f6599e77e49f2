// Fan-out of accepted actions

use std::time::Duration;

use serde_json::json;

use crate::support::server::{fast_config, start_test_server};

#[actix_web::test]
async fn answer_updates_reach_every_participant() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let (mut ana, _) = server.join("Ana").await?;
    let (mut beto, beto_id) = server.join("Beto").await?;
    let (mut caro, _) = server.join("Caro").await?;

    ana.send_json(&json!({"type": "start_round"})).await?;
    ana.recv_type("letter_changed").await?;
    ana.send_json(&json!({"type": "stop_selection"})).await?;
    ana.recv_type("letter_selected").await?;

    beto.send_json(&json!({"type": "update_answer", "column_index": 3, "text": "Rojo"}))
        .await?;

    for client in [&mut ana, &mut beto, &mut caro] {
        let update = client.recv_type("answer_updated").await?;
        assert_eq!(update["player_id"], beto_id.as_str());
        assert_eq!(update["column_index"], 3);
        assert_eq!(update["answer"], "Rojo");
    }

    server.shutdown(vec![ana, beto, caro]).await?;
    Ok(())
}

#[actix_web::test]
async fn column_changes_are_broadcast() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let (mut ana, _) = server.join("Ana").await?;
    let (mut beto, _) = server.join("Beto").await?;

    ana.send_json(&json!({"type": "set_columns", "labels": [" Ciudad ", "Comida"]}))
        .await?;

    for client in [&mut ana, &mut beto] {
        let update = client.recv_type("columns_updated").await?;
        assert_eq!(update["columns"], json!(["Ciudad", "Comida"]));
    }

    // A newcomer's snapshot carries the new schema with matching rows
    let mut caro = server.connect().await?;
    caro.send_json(&json!({"type": "join", "name": "Caro"})).await?;
    let welcome = caro.recv_type("welcome").await?;
    assert_eq!(welcome["session"]["columns"], json!(["Ciudad", "Comida"]));
    let rows = welcome["session"]["answers"].as_object().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.values().all(|row| row.as_array().unwrap().len() == 2));

    server.shutdown(vec![ana, beto, caro]).await?;
    Ok(())
}

#[actix_web::test]
async fn round_ended_arrives_after_validation_started() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let (mut ana, _) = server.join("Ana").await?;
    let (mut beto, _) = server.join("Beto").await?;

    ana.send_json(&json!({"type": "start_round"})).await?;
    ana.recv_type("letter_changed").await?;
    ana.send_json(&json!({"type": "stop_selection"})).await?;
    // Nobody answers: review is skipped and scoring is immediate
    ana.send_json(&json!({"type": "stop_round"})).await?;

    for client in [&mut ana, &mut beto] {
        client.recv_type("letter_selected").await?;
        let next = client
            .recv_json_timeout(Duration::from_secs(2))
            .await?
            .unwrap();
        assert_eq!(next["type"], "validation_started");
        let next = client
            .recv_json_timeout(Duration::from_secs(2))
            .await?
            .unwrap();
        assert_eq!(next["type"], "round_ended");
    }

    let summary = server
        .state
        .hub()
        .send(tutti_backend::ws::hub::GetSummary)
        .await?;
    assert_eq!(summary.round, 2);
    assert_eq!(summary.letters_remaining, 25);

    server.shutdown(vec![ana, beto]).await?;
    Ok(())
}
