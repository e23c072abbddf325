use anyhow::Result;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::api::*;

/// A request the server understood and turned down.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{status} {kind}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: ErrorKind,
    pub message: String,
}

pub struct Client {
    url: String,
    client: reqwest::Client,
}
impl Client {
    pub fn new(url: String) -> Self {
        let client = reqwest::Client::new();
        Self { url, client }
    }
    async fn send<T: Serialize>(&self, path: &str, request: &T) -> Result<Response> {
        let response = self
            .client
            .post(self.url.clone() + path)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // rejections from the json extractor come as plain text
        let text = response.text().await?;
        let error = match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(error) => ApiError {
                status,
                kind: error.kind,
                message: error.message,
            },
            Err(_) => ApiError {
                status,
                kind: ErrorKind::Internal,
                message: text,
            },
        };
        Err(error.into())
    }
    async fn post<T: Serialize, R: DeserializeOwned>(&self, path: &str, request: &T) -> Result<R> {
        let response = self.send(path, request).await?;
        Ok(response.json::<R>().await?)
    }
    fn as_user<T>(user: &str, data: T) -> PostRequest<T> {
        PostRequest {
            user: user.to_string(),
            data,
        }
    }

    pub async fn create_party(&self, user: &str, request: CreatePartyRequest) -> Result<Party> {
        self.post("/create_party", &Self::as_user(user, request))
            .await
    }
    pub async fn join_party(&self, user: &str, request: JoinPartyRequest) -> Result<Member> {
        self.post("/join_party", &Self::as_user(user, request)).await
    }
    pub async fn leave_party(&self, user: &str, party: RowId) -> Result<()> {
        self.send("/leave_party", &Self::as_user(user, PartyRequest { party }))
            .await?;
        Ok(())
    }
    pub async fn delete_party(&self, user: &str, party: RowId) -> Result<()> {
        self.send("/delete_party", &Self::as_user(user, PartyRequest { party }))
            .await?;
        Ok(())
    }
    pub async fn get_party(&self, party: RowId) -> Result<Party> {
        self.post("/get_party", &PartyRequest { party }).await
    }
    pub async fn get_parties(&self, user: &str) -> Result<Vec<Party>> {
        self.post(
            "/get_parties",
            &UserRequest {
                user: user.to_string(),
            },
        )
        .await
    }
    pub async fn create_prop(&self, user: &str, request: CreatePropRequest) -> Result<Prop> {
        self.post("/create_prop", &Self::as_user(user, request)).await
    }
    pub async fn edit_prop(&self, user: &str, request: EditPropRequest) -> Result<Prop> {
        self.post("/edit_prop", &Self::as_user(user, request)).await
    }
    pub async fn get_prop(&self, prop: RowId) -> Result<Prop> {
        self.post("/get_prop", &PropRequest { prop }).await
    }
    pub async fn get_props(&self, party: RowId) -> Result<Vec<Prop>> {
        self.post("/get_props", &PartyRequest { party }).await
    }
    pub async fn place_wager(&self, user: &str, request: PlaceWagerRequest) -> Result<Wager> {
        self.post("/place_wager", &Self::as_user(user, request)).await
    }
    pub async fn resolve_prop(
        &self,
        user: &str,
        request: ResolvePropRequest,
    ) -> Result<SettlementReport> {
        self.post("/resolve_prop", &Self::as_user(user, request))
            .await
    }
    pub async fn resettle_prop(&self, user: &str, prop: RowId) -> Result<SettlementReport> {
        self.post("/resettle_prop", &Self::as_user(user, PropRequest { prop }))
            .await
    }
    pub async fn get_balance(&self, party: RowId, user: &str) -> Result<BalanceResponse> {
        let request = MemberRequest {
            party,
            user: user.to_string(),
        };
        self.post("/get_balance", &request).await
    }
    pub async fn get_leaderboard(&self, user: &str, party: RowId) -> Result<Vec<LeaderboardEntry>> {
        self.post("/get_leaderboard", &Self::as_user(user, PartyRequest { party }))
            .await
    }
    pub async fn get_wagers(&self, party: RowId, user: &str) -> Result<Vec<WagerResponse>> {
        let request = MemberRequest {
            party,
            user: user.to_string(),
        };
        self.post("/get_wagers", &request).await
    }
}
