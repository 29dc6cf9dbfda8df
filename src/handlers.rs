use crate::errors::AppError;
use crate::models::{
    AppData, DayRecord, DayResponse, DaySummary, Goal, GoalProgressRequest, GoalUpdate,
    NewGoalRequest, PeriodMode, SaveDayRequest, Settings, StatsResponse,
};
use crate::score::{aggregate_by_period, day_score};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let data = state.data.lock().await;
    let record = stored_or_template(&data, &date);
    let score = day_score(&record.categories, &data.settings);
    Html(render_index(&date, score, &data.settings.oath_text))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let date = validate_date(&date)?;
    let data = state.data.lock().await;
    Ok(Json(day_response(&data, &date)))
}

pub async fn save_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(payload): Json<SaveDayRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = validate_date(&date)?;
    let mut data = state.data.lock().await;

    let record = DayRecord {
        date: date.clone(),
        categories: payload.categories,
    };
    data.days.insert(date.clone(), record);

    persist_data(&state.data_path, &data).await?;
    Ok(Json(day_response(&data, &date)))
}

pub async fn reset_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let date = validate_date(&date)?;
    let mut data = state.data.lock().await;

    if data.days.remove(&date).is_some() {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(day_response(&data, &date)))
}

pub async fn get_days(
    State(state): State<AppState>,
) -> Result<Json<Vec<DaySummary>>, AppError> {
    let data = state.data.lock().await;
    let summaries = data
        .days
        .values()
        .map(|record| DaySummary {
            date: record.date.clone(),
            score: day_score(&record.categories, &data.settings),
        })
        .collect();
    Ok(Json(summaries))
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub mode: Option<String>,
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;

    let mode = match query.mode.as_deref() {
        Some(value) => PeriodMode::parse(value)
            .ok_or_else(|| AppError::bad_request("mode must be daily, weekly or monthly"))?,
        None => PeriodMode::parse(&data.settings.view_mode).unwrap_or(PeriodMode::Daily),
    };

    let rows = aggregate_by_period(&data.days, mode, &data.settings);
    Ok(Json(StatsResponse { mode, rows }))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<Settings> {
    let data = state.data.lock().await;
    Json(data.settings.clone())
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<Settings>,
) -> Result<Json<Settings>, AppError> {
    let start = validate_date(&payload.start_date)?;
    let end = validate_date(&payload.end_date)?;
    if start > end {
        return Err(AppError::bad_request("start_date must not be after end_date"));
    }

    let mut data = state.data.lock().await;
    data.settings = payload;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.settings.clone()))
}

pub async fn get_goals(State(state): State<AppState>) -> Json<Vec<Goal>> {
    let data = state.data.lock().await;
    Json(data.goals.clone())
}

pub async fn create_goal(
    State(state): State<AppState>,
    Json(payload): Json<NewGoalRequest>,
) -> Result<Json<Goal>, AppError> {
    let mut data = state.data.lock().await;

    let goal = Goal {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        target: payload.target,
        current: payload.start.unwrap_or(0.0),
        start: payload.start,
        unit: payload.unit,
        category: payload.category,
        history: Vec::new(),
    };
    data.goals.push(goal.clone());

    persist_data(&state.data_path, &data).await?;
    Ok(Json(goal))
}

pub async fn record_goal_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GoalProgressRequest>,
) -> Result<Json<Goal>, AppError> {
    let mut data = state.data.lock().await;

    let updated = {
        let goal = data
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| AppError::not_found("no such goal"))?;

        goal.history.push(GoalUpdate {
            date: today_string(),
            delta: payload.value - goal.current,
            value: payload.value,
        });
        goal.current = payload.value;
        goal.clone()
    };

    persist_data(&state.data_path, &data).await?;
    Ok(Json(updated))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Goal>>, AppError> {
    let mut data = state.data.lock().await;

    let before = data.goals.len();
    data.goals.retain(|goal| goal.id != id);
    if data.goals.len() == before {
        return Err(AppError::not_found("no such goal"));
    }

    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.goals.clone()))
}

fn day_response(data: &AppData, date: &str) -> DayResponse {
    let persisted = data.days.contains_key(date);
    let record = stored_or_template(data, date);
    DayResponse {
        date: date.to_string(),
        persisted,
        score: day_score(&record.categories, &data.settings),
        categories: record.categories,
    }
}

fn stored_or_template(data: &AppData, date: &str) -> DayRecord {
    data.days
        .get(date)
        .cloned()
        .unwrap_or_else(|| data.settings.materialize_day(date))
}

fn validate_date(date: &str) -> Result<String, AppError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))?;
    Ok(parsed.to_string())
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
