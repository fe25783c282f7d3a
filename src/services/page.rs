//! Payment pages: <https://paystack.com/docs/api/page/>

use super::dispatch;
use crate::{Envelope, PaystackClient, Result};
use http::Method;
use serde::Serialize;
use std::fmt::Display;

/// Hosted payment pages.
#[derive(Debug, Clone)]
pub struct PageService {
    client: PaystackClient,
}

impl PageService {
    pub fn new(client: PaystackClient) -> Self {
        Self { client }
    }

    /// Creates a page. Requires `name`.
    pub async fn create<P>(&self, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::POST, "page", payload).await
    }

    pub async fn fetch(&self, id_or_slug: impl Display) -> Result<Envelope> {
        let path = format!("page/{}", id_or_slug);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    pub async fn list<P>(&self, params: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        dispatch(&self.client, Method::GET, "page", params).await
    }

    pub async fn update<P>(&self, id_or_slug: impl Display, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = format!("page/{}", id_or_slug);
        dispatch(&self.client, Method::PUT, path, payload).await
    }

    /// Checks whether a custom slug is still free.
    pub async fn check_slug_availability(&self, slug: &str) -> Result<Envelope> {
        let path = format!("page/check_slug_availability/{}", slug);
        dispatch(&self.client, Method::GET, path, &()).await
    }

    /// Attaches products to a page. Expects `product`, an array of product ids.
    pub async fn add_products<P>(&self, id: impl Display, payload: &P) -> Result<Envelope>
    where
        P: Serialize + ?Sized,
    {
        let path = format!("page/{}/product", id);
        dispatch(&self.client, Method::POST, path, payload).await
    }
}
