use crate::core::resources::{ResourceItem, SEQ_NO_FIELD};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Saved prompt with its English rendition
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "PromptTools")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "iSeqNo")]
    #[serde(rename = "iSeqNo")]
    pub seq_no: i32,

    #[sea_orm(column_name = "Prompt")]
    #[serde(rename = "Prompt")]
    pub prompt: Option<String>,

    #[sea_orm(column_name = "Prompt_Eng")]
    #[serde(rename = "Prompt_Eng")]
    pub prompt_eng: Option<String>,

    #[sea_orm(column_name = "Classification")]
    #[serde(rename = "Classification")]
    pub classification: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResourceItem {
    fn from(model: Model) -> Self {
        ResourceItem::from_fields([
            (SEQ_NO_FIELD, serde_json::Value::from(model.seq_no)),
            ("Prompt", super::text(model.prompt)),
            ("Prompt_Eng", super::text(model.prompt_eng)),
            ("Classification", super::text(model.classification)),
        ])
    }
}
