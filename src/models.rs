use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Checkbox,
    Time,
    Calorie,
    Expense,
    ExpenseNote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Time,
    Calorie,
    Checkbox,
    Expense,
    Task,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub kind: TaskKind,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub text_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub kind: CategoryKind,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: String,
    pub name: String,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub kind: CategoryKind,
    #[serde(default)]
    pub tasks: Vec<TaskTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub start_date: String,
    pub end_date: String,
    pub calorie_target: u32,
    pub time_target: u32,
    pub view_mode: String,
    pub oath_text: String,
    pub category_colors: BTreeMap<String, String>,
    pub templates: Vec<CategoryTemplate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_date: "2026-01-01".to_string(),
            end_date: "2026-12-31".to_string(),
            calorie_target: 2000,
            time_target: 120,
            view_mode: "daily".to_string(),
            oath_text: "Win the day, one checkbox at a time.".to_string(),
            category_colors: default_colors(),
            templates: default_templates(),
        }
    }
}

impl Settings {
    pub fn materialize_day(&self, date: &str) -> DayRecord {
        let categories = self
            .templates
            .iter()
            .map(|template| Category {
                id: template.id.clone(),
                name: template.name.clone(),
                emoji: template.emoji.clone(),
                kind: template.kind,
                tasks: template
                    .tasks
                    .iter()
                    .map(|task| Task {
                        id: task.id.clone(),
                        name: task.name.clone(),
                        kind: task.kind,
                        completed: false,
                        value: 0,
                        text_value: String::new(),
                    })
                    .collect(),
            })
            .collect();

        DayRecord {
            date: date.to_string(),
            categories,
        }
    }
}

fn default_colors() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("morning".to_string(), "#ff6b4a".to_string()),
        ("deep_work".to_string(), "#2f4858".to_string()),
        ("nutrition".to_string(), "#6aa84f".to_string()),
        ("evening".to_string(), "#8e6bbf".to_string()),
        ("spending".to_string(), "#c27c0e".to_string()),
    ])
}

fn default_templates() -> Vec<CategoryTemplate> {
    vec![
        CategoryTemplate {
            id: "morning".to_string(),
            name: "Morning routine".to_string(),
            emoji: "☀️".to_string(),
            kind: CategoryKind::Checkbox,
            tasks: vec![
                task_template("wake_early", "Wake up before 7:00", TaskKind::Checkbox),
                task_template("workout", "Workout", TaskKind::Checkbox),
                task_template("plan_day", "Plan the day", TaskKind::Checkbox),
            ],
        },
        CategoryTemplate {
            id: "deep_work".to_string(),
            name: "Deep work".to_string(),
            emoji: "💻".to_string(),
            kind: CategoryKind::Time,
            tasks: vec![
                task_template("focus", "Focused work", TaskKind::Time),
                task_template("study", "Study", TaskKind::Time),
            ],
        },
        CategoryTemplate {
            id: "nutrition".to_string(),
            name: "Nutrition".to_string(),
            emoji: "🍎".to_string(),
            kind: CategoryKind::Calorie,
            tasks: vec![
                task_template("breakfast", "Breakfast", TaskKind::Calorie),
                task_template("lunch", "Lunch", TaskKind::Calorie),
                task_template("dinner", "Dinner", TaskKind::Calorie),
                task_template("no_junk", "No junk food", TaskKind::Checkbox),
            ],
        },
        CategoryTemplate {
            id: "evening".to_string(),
            name: "Evening review".to_string(),
            emoji: "🌙".to_string(),
            kind: CategoryKind::Checkbox,
            tasks: vec![
                task_template("journal", "Journal", TaskKind::Checkbox),
                task_template("read", "Read 20 pages", TaskKind::Checkbox),
                task_template("sleep_early", "In bed before midnight", TaskKind::Checkbox),
            ],
        },
        CategoryTemplate {
            id: "spending".to_string(),
            name: "Spending".to_string(),
            emoji: "💸".to_string(),
            kind: CategoryKind::Expense,
            tasks: vec![
                task_template("discretionary", "Discretionary", TaskKind::Expense),
                task_template("spending_note", "What was it for", TaskKind::ExpenseNote),
            ],
        },
    ]
}

fn task_template(id: &str, name: &str, kind: TaskKind) -> TaskTemplate {
    TaskTemplate {
        id: id.to_string(),
        name: name.to_string(),
        kind,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalUpdate {
    pub date: String,
    pub delta: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub current: f64,
    #[serde(default)]
    pub start: Option<f64>,
    pub unit: String,
    pub category: String,
    #[serde(default)]
    pub history: Vec<GoalUpdate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub days: BTreeMap<String, DayRecord>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodMode {
    Daily,
    Weekly,
    Monthly,
}

impl PeriodMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRow {
    pub label: String,
    pub start_date: String,
    pub end_date: String,
    pub days: u32,
    pub total_time: u64,
    pub total_calories: u64,
    pub calorie_entries: u32,
    pub total_expenses: u64,
    pub avg_score: f64,
    pub scored_days: u32,
}

#[derive(Debug, Deserialize)]
pub struct SaveDayRequest {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: String,
    pub persisted: bool,
    pub score: f64,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: String,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub mode: PeriodMode,
    pub rows: Vec<PeriodRow>,
}

#[derive(Debug, Deserialize)]
pub struct NewGoalRequest {
    pub name: String,
    pub target: f64,
    #[serde(default)]
    pub start: Option<f64>,
    pub unit: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct GoalProgressRequest {
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialized_day_mirrors_templates_with_blank_payloads() {
        let settings = Settings::default();
        let day = settings.materialize_day("2026-03-02");

        assert_eq!(day.date, "2026-03-02");
        assert_eq!(day.categories.len(), settings.templates.len());
        for (category, template) in day.categories.iter().zip(&settings.templates) {
            assert_eq!(category.id, template.id);
            assert_eq!(category.kind, template.kind);
            assert_eq!(category.tasks.len(), template.tasks.len());
            for task in &category.tasks {
                assert!(!task.completed);
                assert_eq!(task.value, 0);
                assert!(task.text_value.is_empty());
            }
        }
    }

    #[test]
    fn sparse_task_json_fills_payload_defaults() {
        let task: Task =
            serde_json::from_str(r#"{"id": "focus", "name": "Focused work", "kind": "time"}"#)
                .expect("task should deserialize");
        assert_eq!(task.kind, TaskKind::Time);
        assert!(!task.completed);
        assert_eq!(task.value, 0);
    }
}
