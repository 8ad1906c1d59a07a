use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Идентификатор агрегата с преобразованием в строку и обратно.
///
/// Все ID в системе — newtype-обёртки над UUID; на границе с API
/// они ходят как строки.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Служебные отметки времени агрегата
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl EntityMetadata {
    pub fn now() -> Self {
        let ts = Utc::now();
        Self {
            created_at: ts,
            updated_at: ts,
        }
    }
}

/// Общая часть любого агрегата: ID, код, наименование, комментарий
/// и отметки времени.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::now(),
        }
    }

    /// Обновить отметку `updated_at`
    pub fn touch(&mut self) {
        self.metadata.updated_at = Utc::now();
    }
}
