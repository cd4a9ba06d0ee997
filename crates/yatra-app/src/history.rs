use yatra_history::HistoryStore;
use yatra_types::HistoryRecord;

/// What `yatra history` was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    List { limit: usize },
    Delete(String),
    Clear,
}

/// Run a history action and return the lines to print
pub fn run_history(store: &dyn HistoryStore, action: HistoryAction) -> anyhow::Result<Vec<String>> {
    match action {
        HistoryAction::List { limit } => {
            let records = store.recent(limit)?;
            if records.is_empty() {
                return Ok(vec!["No translations saved yet".to_string()]);
            }
            Ok(records.iter().map(format_record).collect())
        }
        HistoryAction::Delete(id) => {
            if store.delete(&id)? {
                Ok(vec![format!("Deleted {id}")])
            } else {
                anyhow::bail!("No history record with id {id}")
            }
        }
        HistoryAction::Clear => {
            store.clear()?;
            tracing::info!("History cleared");
            Ok(vec!["History cleared".to_string()])
        }
    }
}

fn format_record(record: &HistoryRecord) -> String {
    format!(
        "{}  {}->{}  [{}]  {} => {}",
        record.id,
        record.source_language,
        record.target_language,
        record.method,
        record.source_text,
        record.translated_text
    )
}
