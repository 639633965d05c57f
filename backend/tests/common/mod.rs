#![allow(dead_code)]

use lobby::messages::{CreateGameResponse, Game};
use reqwest::{Client, Response};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_games(&self) -> Vec<Game> {
        let response = self.client.get(self.url("/game")).send().await.unwrap();
        assert!(response.status().is_success());
        response.json().await.unwrap()
    }

    pub async fn create_game(&self, name: &str, creator: &str) -> Response {
        self.client
            .post(self.url("/game"))
            .json(&json!({ "name": name, "creator": creator }))
            .send()
            .await
            .unwrap()
    }

    pub async fn create_game_ok(&self, name: &str, creator: &str) -> Game {
        let response = self.create_game(name, creator).await;
        assert!(response.status().is_success());
        let body: CreateGameResponse = response.json().await.unwrap();
        assert!(body.success);
        body.game
    }

    pub async fn delete_game(&self, id: &str, username: &str) -> Response {
        self.client
            .delete(self.url(&format!("/game/{}", id)))
            .json(&json!({ "username": username }))
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_game_without_body(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/game/{}", id)))
            .send()
            .await
            .unwrap()
    }

    pub async fn player(&self, action: &str, body: serde_json::Value) -> Response {
        self.client
            .post(self.url(&format!("/player/{}", action)))
            .json(&body)
            .send()
            .await
            .unwrap()
    }
}

pub async fn spawn_test_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, lobby::app()).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: Client::new(),
    }
}
