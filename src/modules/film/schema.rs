use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmEntity {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub likes: BTreeSet<u64>,
}

impl FilmEntity {
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}
