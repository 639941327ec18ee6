//! Wire representation of extraction results.

use docket_domain::TaskSuggestion;
use serde::{Deserialize, Serialize};

/// One task suggestion as sent to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSuggestionDto {
    /// Derived title
    pub suggested_title: String,
    /// Full span when longer than the title
    pub suggested_description: Option<String>,
    /// "CRITICAL", "HIGH", "MEDIUM" or "LOW"
    pub suggested_priority: String,
    /// Raw due-date text
    pub suggested_due_date: Option<String>,
    /// Estimated effort in hours
    pub suggested_estimated_hours: Option<u32>,
    /// Method tag, e.g. "NLP_NUMBERED_LIST"
    pub extraction_method: String,
    /// First 500 characters of the source span
    pub raw_text_snippet: String,
    /// Score in [0, 1]
    pub confidence_score: f64,
}

impl From<&TaskSuggestion> for TaskSuggestionDto {
    fn from(suggestion: &TaskSuggestion) -> Self {
        TaskSuggestionDto {
            suggested_title: suggestion.title.clone(),
            suggested_description: suggestion.description.clone(),
            suggested_priority: suggestion.priority.as_str().to_string(),
            suggested_due_date: suggestion.due_date.clone(),
            suggested_estimated_hours: suggestion.estimated_hours,
            extraction_method: suggestion.method.as_str().to_string(),
            raw_text_snippet: suggestion.raw_text_snippet.clone(),
            confidence_score: suggestion.confidence.value(),
        }
    }
}

/// Response body of `POST /extract-tasks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractTasksResponse {
    /// Ranked suggestions
    pub tasks: Vec<TaskSuggestionDto>,
    /// Number of suggestions
    pub count: usize,
}

impl ExtractTasksResponse {
    /// Build a response from ranked suggestions
    pub fn from_suggestions(suggestions: &[TaskSuggestion]) -> Self {
        let tasks: Vec<TaskSuggestionDto> = suggestions.iter().map(Into::into).collect();
        ExtractTasksResponse {
            count: tasks.len(),
            tasks,
        }
    }

    /// Response with no tasks
    pub fn empty() -> Self {
        ExtractTasksResponse {
            tasks: Vec::new(),
            count: 0,
        }
    }
}
