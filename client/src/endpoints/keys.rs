//! Keybase management (ICS1).

pub mod request_types;
pub mod response_types;

pub use request_types::*;
pub use response_types::*;

use crate::{
    client::GaiaClient,
    endpoints::{Route, Submit},
    error::RestResult,
};

impl GaiaClient {
    /// Fresh mnemonic generated by the node.
    pub async fn create_seed(&self) -> RestResult<String> {
        self.send(&Route::single("/keys/seed")).await
    }

    pub async fn keys(&self) -> RestResult<Key> {
        self.send(&Route::collection("/keys")).await
    }

    pub async fn key(&self, name: &str) -> RestResult<Key> {
        self.send(&Route::single(format!("/keys/{name}"))).await
    }

    pub async fn create_key(&self, key: &KeyPostData) -> RestResult<Key> {
        self.send(&Submit::post("/keys", key)).await
    }

    pub async fn recover_key(&self, key: &KeyPostData) -> RestResult<Key> {
        self.send(&Submit::post(format!("/keys/{}/recover", key.name), key))
            .await
    }

    pub async fn delete_key(&self, key: &KeyPostData) -> RestResult<String> {
        self.send(&Submit::delete(format!("/keys/{}", key.name), key))
            .await
    }

    pub async fn change_key_password(&self, key: &KeyPasswordData) -> RestResult<String> {
        self.send(&Submit::put(format!("/keys/{}", key.name), key))
            .await
    }
}
