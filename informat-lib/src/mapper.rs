//! Mapping of JSON response bodies onto response models.
//!
//! The `*_from_slice` functions do the actual work on a buffered body, the async functions read
//! the body of a [`Response`](hyper::Response) first.

use futures::TryFutureExt;
use hyper::{body, body::Bytes, Body, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use crate::{processor::CallError, Error};

pub async fn map_object<T: DeserializeOwned>(response: Response<Body>) -> Result<T, Error> {
    let bytes = read_body(response).await?;
    Ok(object_from_slice(&bytes)?)
}

pub async fn map_array<T: DeserializeOwned>(response: Response<Body>) -> Result<Vec<T>, Error> {
    let bytes = read_body(response).await?;
    Ok(array_from_slice(&bytes)?)
}

/// Map the array stored under `property` of a top-level JSON object.
pub async fn map_property_array<T: DeserializeOwned>(
    response: Response<Body>,
    property: &str,
) -> Result<Vec<T>, Error> {
    let bytes = read_body(response).await?;
    Ok(property_array_from_slice(&bytes, property)?)
}

/// Drain a response whose body carries no data.
pub async fn map_unit(response: Response<Body>) -> Result<(), Error> {
    read_body(response).await?;
    Ok(())
}

pub fn object_from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, MapError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(MapError::EmptyBody);
    }

    trace!(len = bytes.len(), "mapping response body");
    Ok(serde_json::from_slice(bytes)?)
}

pub fn array_from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, MapError> {
    object_from_slice(bytes)
}

pub fn property_array_from_slice<T: DeserializeOwned>(
    bytes: &[u8],
    property: &str,
) -> Result<Vec<T>, MapError> {
    let mut value: Value = object_from_slice(bytes)?;
    let array = value
        .get_mut(property)
        .map(Value::take)
        .ok_or_else(|| MapError::MissingProperty(property.to_owned()))?;

    Ok(serde_json::from_value(array)?)
}

async fn read_body(response: Response<Body>) -> Result<Bytes, CallError> {
    body::to_bytes(response.into_body()).err_into().await
}

/// Represents errors that can occur mapping a response body.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("the response body is empty")]
    EmptyBody,
    /// The body is not JSON or its shape does not match the response model.
    #[error("the response body does not match the expected shape")]
    InvalidJson(#[from] serde_json::Error),
    #[error("the response body has no `{0}` property")]
    MissingProperty(String),
}
