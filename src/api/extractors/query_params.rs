//! Query string extractors.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use utoipa::IntoParams;

use common::AppError;

/// `Query<T>` whose rejection is a 400 with the parse error text.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(QueryParams(value))
    }
}

/// `?id=`
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdParam {
    /// Row identifier
    pub id: i32,
}

/// `?tid=&aid=`, zero leaves a column unconstrained
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskFilterParams {
    /// Task id, 0 for any
    pub tid: i32,
    /// Author id, 0 for any
    pub aid: i32,
}

/// `?tid=&lid=`
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LinkParams {
    pub tid: i32,
    pub lid: i32,
}
