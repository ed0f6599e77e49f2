// Joining and leaving over a live socket

use std::time::Duration;

use serde_json::json;

use crate::support::server::{fast_config, start_test_server};

#[actix_web::test]
async fn first_joiner_is_welcomed_as_host() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let mut ana = server.connect().await?;

    ana.send_json(&json!({"type": "join", "name": "Ana"})).await?;

    let welcome = ana.recv_type("welcome").await?;
    assert_eq!(welcome["is_host"], true);
    let ana_id = welcome["participant_id"].as_str().unwrap().to_string();
    assert_eq!(welcome["session"]["phase"], "idle");
    assert_eq!(welcome["session"]["round"], 1);
    assert_eq!(welcome["session"]["letters_remaining"], 26);
    assert_eq!(welcome["session"]["host_id"], ana_id.as_str());

    let assigned = ana.recv_json_timeout(Duration::from_secs(2)).await?.unwrap();
    assert_eq!(assigned["type"], "host_assigned");
    assert_eq!(assigned["host_id"], ana_id.as_str());

    let joined = ana.recv_json_timeout(Duration::from_secs(2)).await?.unwrap();
    assert_eq!(joined["type"], "player_joined");
    assert_eq!(joined["player"]["name"], "Ana");
    assert_eq!(joined["player"]["score"], 0);

    server.shutdown(vec![ana]).await?;
    Ok(())
}

#[actix_web::test]
async fn later_joiners_see_the_roster_and_are_announced() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let (mut ana, ana_id) = server.join("Ana").await?;
    ana.recv_type("player_joined").await?;

    let mut beto = server.connect().await?;
    beto.send_json(&json!({"type": "join", "name": "Beto"})).await?;
    let welcome = beto.recv_type("welcome").await?;
    assert_eq!(welcome["is_host"], false);
    assert_eq!(welcome["session"]["host_id"], ana_id.as_str());
    assert_eq!(welcome["session"]["players"].as_array().unwrap().len(), 2);

    // Host assignment goes to the new host only
    let next = beto.recv_json_timeout(Duration::from_secs(2)).await?.unwrap();
    assert_eq!(next["type"], "player_joined");

    let announced = ana.recv_type("player_joined").await?;
    assert_eq!(announced["player"]["name"], "Beto");
    assert_eq!(announced["players"].as_array().unwrap().len(), 2);

    server.shutdown(vec![ana, beto]).await?;
    Ok(())
}

#[actix_web::test]
async fn closing_a_socket_removes_the_participant() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let (mut ana, _) = server.join("Ana").await?;
    let (mut beto, beto_id) = server.join("Beto").await?;
    ana.recv_type("player_joined").await?;
    ana.recv_type("player_joined").await?;

    beto.close().await?;

    let left = ana.recv_type("player_left").await?;
    assert_eq!(left["player_id"], beto_id.as_str());
    assert_eq!(left["players"].as_array().unwrap().len(), 1);

    server.shutdown(vec![ana]).await?;
    Ok(())
}

#[actix_web::test]
async fn unjoined_connections_receive_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let mut lurker = server.connect().await?;
    let (ana, _) = server.join("Ana").await?;

    lurker.expect_silence(Duration::from_millis(150)).await?;

    server.shutdown(vec![lurker, ana]).await?;
    Ok(())
}

#[actix_web::test]
async fn host_departure_promotes_the_oldest_guest() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let (mut ana, _) = server.join("Ana").await?;
    let (mut beto, beto_id) = server.join("Beto").await?;
    let (mut caro, _) = server.join("Caro").await?;
    beto.recv_type("player_joined").await?;

    ana.close().await?;

    for client in [&mut beto, &mut caro] {
        let changed = client.recv_type("host_changed").await?;
        assert_eq!(changed["host_id"], beto_id.as_str());
        let left = client.recv_json_timeout(Duration::from_secs(2)).await?.unwrap();
        assert_eq!(left["type"], "player_left");
    }

    // The new host can act
    beto.send_json(&json!({"type": "start_round"})).await?;
    caro.recv_type("letter_selection_started").await?;

    server.shutdown(vec![beto, caro]).await?;
    Ok(())
}

#[actix_web::test]
async fn closed_sockets_are_dropped_from_the_hub() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(fast_config()).await?;
    let (ana, _) = server.join("Ana").await?;
    let mut lurker = server.connect().await?;
    server.wait_for_connections(2, Duration::from_secs(2)).await?;

    // Joined or not, a closed socket leaves the registry
    lurker.close().await?;
    server.wait_for_connections(1, Duration::from_secs(2)).await?;

    server.shutdown(vec![ana]).await?;
    Ok(())
}
