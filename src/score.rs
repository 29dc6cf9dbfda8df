use crate::models::{
    Category, CategoryKind, DayRecord, PeriodMode, PeriodRow, Settings, Task, TaskKind,
};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

// The first four categories of a day record feed the day score; anything
// after them is an expense category. Positional, not type-based.
pub const ACTIVITY_CATEGORY_COUNT: usize = 4;

pub fn category_progress(tasks: &[Task], kind: CategoryKind, settings: &Settings) -> f64 {
    let mut checkbox_total = 0u32;
    let mut checkbox_done = 0u32;
    let mut calorie_tasks = 0u32;
    let mut calorie_sum = 0u64;
    let mut time_tasks = 0u32;
    let mut time_sum = 0u64;

    for task in tasks {
        match task.kind {
            TaskKind::Checkbox => {
                checkbox_total += 1;
                if task.completed {
                    checkbox_done += 1;
                }
            }
            TaskKind::Calorie => {
                calorie_tasks += 1;
                calorie_sum += u64::from(task.value);
            }
            TaskKind::Time => {
                time_tasks += 1;
                time_sum += u64::from(task.value);
            }
            TaskKind::Expense | TaskKind::ExpenseNote => {}
        }
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    if checkbox_total > 0 {
        numerator += f64::from(checkbox_done);
        denominator += f64::from(checkbox_total);
    }
    // One flat calorie target per category, no matter how many calorie tasks.
    if calorie_tasks > 0 && settings.calorie_target > 0 {
        numerator += calorie_sum as f64;
        denominator += f64::from(settings.calorie_target);
    }
    // Time tasks only count inside a time-kind category.
    if kind == CategoryKind::Time && time_tasks > 0 && settings.time_target > 0 {
        numerator += time_sum as f64;
        denominator += f64::from(settings.time_target);
    }

    if denominator == 0.0 {
        return 0.0;
    }

    (100.0 * numerator / denominator).round().min(100.0)
}

pub fn day_score(categories: &[Category], settings: &Settings) -> f64 {
    if categories.is_empty() {
        return 0.0;
    }

    let activity = &categories[..categories.len().min(ACTIVITY_CATEGORY_COUNT)];
    let sum: f64 = activity
        .iter()
        .map(|category| category_progress(&category.tasks, category.kind, settings))
        .sum();

    (sum / activity.len() as f64).round().min(100.0)
}

pub fn aggregate_by_period(
    days: &BTreeMap<String, DayRecord>,
    mode: PeriodMode,
    settings: &Settings,
) -> Vec<PeriodRow> {
    let mut rows: Vec<PeriodRow> = Vec::new();
    let mut score_sums: Vec<f64> = Vec::new();

    for record in days.values() {
        let (label, start_date, end_date) = period_bounds(&record.date, mode);
        let index = match rows.iter().position(|row| row.label == label) {
            Some(index) => index,
            None => {
                rows.push(PeriodRow {
                    label,
                    start_date,
                    end_date,
                    days: 0,
                    total_time: 0,
                    total_calories: 0,
                    calorie_entries: 0,
                    total_expenses: 0,
                    avg_score: 0.0,
                    scored_days: 0,
                });
                score_sums.push(0.0);
                rows.len() - 1
            }
        };

        let row = &mut rows[index];
        row.days += 1;

        for category in &record.categories {
            for task in &category.tasks {
                match task.kind {
                    TaskKind::Time => row.total_time += u64::from(task.value),
                    TaskKind::Calorie if task.value > 0 => {
                        row.total_calories += u64::from(task.value);
                        row.calorie_entries += 1;
                    }
                    TaskKind::Expense if category.kind == CategoryKind::Expense => {
                        row.total_expenses += u64::from(task.value);
                    }
                    _ => {}
                }
            }
        }

        let score = day_score(&record.categories, settings);
        if score > 0.0 {
            score_sums[index] += score;
            row.scored_days += 1;
        }
    }

    for (row, sum) in rows.iter_mut().zip(score_sums) {
        if row.scored_days > 0 {
            row.avg_score = sum / f64::from(row.scored_days);
        }
    }

    rows
}

fn period_bounds(date: &str, mode: PeriodMode) -> (String, String, String) {
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        // The store validates dates on the way in; an odd key still gets
        // its own bucket instead of being dropped.
        return (date.to_string(), date.to_string(), date.to_string());
    };

    match mode {
        PeriodMode::Daily => (
            parsed.format("%d.%m").to_string(),
            date.to_string(),
            date.to_string(),
        ),
        PeriodMode::Weekly => {
            let start = week_start(parsed);
            let end = start + Duration::days(6);
            // Keyed by week-of-year only; same-numbered weeks of different
            // years share a bucket.
            (
                format!("Week {}", parsed.iso_week().week()),
                start.to_string(),
                end.to_string(),
            )
        }
        PeriodMode::Monthly => {
            let start = parsed.with_day(1).unwrap_or(parsed);
            (
                parsed.format("%B %Y").to_string(),
                start.to_string(),
                month_end(parsed).to_string(),
            )
        }
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first - Duration::days(1))
        .unwrap_or(date)
}
