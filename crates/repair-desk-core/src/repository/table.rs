//! Repository Layer - Generic Table
//!
//! Keyed CRUD for any Entity over a shared gateway.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::Entity;
use crate::error::GatewayResult;
use crate::gateway::{Filter, Select, SharedGateway};

/// Decode gateway rows into records
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> GatewayResult<Vec<T>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(Into::into))
        .collect()
}

/// One remote collection, addressed through `T::TABLE` and `T::KEY`
pub struct Table<T> {
    gateway: SharedGateway,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T> Table<T>
where
    T: Entity + DeserializeOwned,
{
    pub fn new(gateway: SharedGateway) -> Self {
        Self {
            gateway,
            _entity: PhantomData,
        }
    }

    /// Start a query on this collection
    pub fn query(&self) -> Select {
        Select::new(T::TABLE)
    }

    pub async fn select(&self, query: &Select) -> GatewayResult<Vec<T>> {
        let rows = self.gateway.select(query).await?;
        decode_rows(rows)
    }

    /// Matching rows without decoding them
    pub async fn count(&self, query: &Select) -> GatewayResult<usize> {
        self.gateway.select(query).await.map(|rows| rows.len())
    }

    /// Insert a single record payload
    pub async fn insert<P: Serialize>(&self, payload: &P) -> GatewayResult<()> {
        let rows = serde_json::to_value([payload])?;
        self.gateway.insert(T::TABLE, rows).await
    }

    pub async fn update<P: Serialize>(&self, id: &T::Id, patch: &P) -> GatewayResult<()> {
        let patch = serde_json::to_value(patch)?;
        self.gateway.update(T::TABLE, &[key_filter::<T>(id)], patch).await
    }

    pub async fn delete(&self, id: &T::Id) -> GatewayResult<()> {
        self.gateway.delete(T::TABLE, &[key_filter::<T>(id)]).await
    }
}

fn key_filter<T: Entity>(id: &T::Id) -> Filter {
    Filter::eq(T::KEY, id)
}
