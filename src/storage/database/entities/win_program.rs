use crate::core::resources::{ResourceItem, SEQ_NO_FIELD};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Program shortcut; `ProgramPathAndName` is the full command line
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "WinProgram")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "iSeqNo")]
    #[serde(rename = "iSeqNo")]
    pub seq_no: i32,

    pub remark1: Option<String>,

    #[sea_orm(column_name = "ProgramPathAndName")]
    #[serde(rename = "ProgramPathAndName")]
    pub program_path_and_name: Option<String>,

    /// Desktop-tool flag for closing itself after a launch
    #[sea_orm(column_name = "ClickEndRun")]
    #[serde(rename = "ClickEndRun")]
    pub click_end_run: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResourceItem {
    fn from(model: Model) -> Self {
        ResourceItem::from_fields([
            (SEQ_NO_FIELD, serde_json::Value::from(model.seq_no)),
            ("remark1", super::text(model.remark1)),
            ("ProgramPathAndName", super::text(model.program_path_and_name)),
            ("ClickEndRun", super::number(model.click_end_run)),
        ])
    }
}
