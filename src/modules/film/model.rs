use chrono::NaiveDate;
use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::constants::{DEFAULT_POPULAR_COUNT, EARLIEST_RELEASE_DATE};
use crate::utils::{validate_not_blank, validate_not_future};

fn validate_release_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date < EARLIEST_RELEASE_DATE {
        return Err(ValidationError::new("release_date")
            .with_message(Cow::from("must not be earlier than 1895-12-28")));
    }
    validate_not_future(date)
}

/// Request body for both `POST /films` and `PUT /films`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilmModel {
    pub id: Option<u64>,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(length(max = 200, message = "Description must be at most 200 characters long"))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_release_date"))]
    pub release_date: NaiveDate,
    #[validate(range(min = 1, message = "Duration must be a positive number"))]
    pub duration: i32,
}

pub struct InsertFilm {
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
}

impl From<FilmModel> for InsertFilm {
    fn from(model: FilmModel) -> Self {
        InsertFilm {
            name: model.name,
            description: model.description,
            release_date: model.release_date,
            duration: model.duration,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PopularQuery {
    #[validate(range(min = 1, message = "Count must be at least 1"))]
    pub count: Option<usize>,
}

impl PopularQuery {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_POPULAR_COUNT)
    }
}
