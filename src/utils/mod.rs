use actix_web::{web, FromRequest};
use chrono::{Local, NaiveDate};
use futures_util::future::LocalBoxFuture;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::api::error;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("must not be blank")));
    }
    Ok(())
}

pub fn validate_no_whitespace(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("whitespace")
            .with_message(Cow::from("must not contain whitespace")));
    }
    Ok(())
}

pub fn validate_not_future(value: &NaiveDate) -> Result<(), ValidationError> {
    if *value > today() {
        return Err(ValidationError::new("future").with_message(Cow::from("must not be in the future")));
    }
    Ok(())
}

pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest for ValidatedJson<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let fut = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let json = fut.await.map_err(|e| error::Error::bad_request(e.to_string()))?;
            let model = json.into_inner();
            model.validate().map_err(|e| error::Error::bad_request(e.to_string()))?;
            Ok(ValidatedJson(model))
        })
    }
}

pub struct ValidatedQuery<T>(pub T);

impl<T> FromRequest for ValidatedQuery<T>
where
    T: Validate + serde::de::DeserializeOwned + 'static,
{
    type Error = error::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        let fut = web::Query::<T>::from_request(req, payload);

        Box::pin(async move {
            let query = fut.await.map_err(|e| error::Error::bad_request(e.to_string()))?;
            query.validate().map_err(|e| error::Error::bad_request(e.to_string()))?;
            Ok(ValidatedQuery(query.into_inner()))
        })
    }
}
