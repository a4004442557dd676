// src/presentation/http/controllers/records.rs
use std::collections::BTreeMap;

use crate::application::{
    commands::slugs::{CreateRecordCommand, DeleteRecordCommand, SetSlugCommand},
    dto::{RecordDto, SlugDto, TranslationDto},
    queries::slugs::{FindBySlugQuery, NextSlugQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LocaleParams {
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub titles: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct SetSlugRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct NextSlugParams {
    pub text: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub exclude: Option<i64>,
}

pub async fn get_record_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> HttpResult<Json<RecordDto>> {
    state
        .services
        .slug_queries
        .find_by_slug(FindBySlugQuery {
            slug,
            locale: params.locale,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_record(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateRecordRequest>,
) -> HttpResult<(StatusCode, Json<RecordDto>)> {
    let command = CreateRecordCommand {
        titles: payload.titles,
    };

    state
        .services
        .slug_commands
        .create_record(command)
        .await
        .into_http()
        .map(|record| (StatusCode::CREATED, Json(record)))
}

pub async fn set_slug(
    Extension(state): Extension<HttpState>,
    Path((record_id, locale)): Path<(i64, String)>,
    Json(payload): Json<SetSlugRequest>,
) -> HttpResult<Json<TranslationDto>> {
    let command = SetSlugCommand {
        record_id,
        locale,
        text: payload.text,
    };

    state
        .services
        .slug_commands
        .set_slug(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_record(
    Extension(state): Extension<HttpState>,
    Path(record_id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .slug_commands
        .delete_record(DeleteRecordCommand { record_id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn next_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NextSlugParams>,
) -> HttpResult<Json<SlugDto>> {
    state
        .services
        .slug_queries
        .next_slug(NextSlugQuery {
            text: params.text,
            locale: params.locale,
            exclude: params.exclude,
        })
        .await
        .into_http()
        .map(Json)
}
