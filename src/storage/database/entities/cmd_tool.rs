use crate::core::resources::{ResourceItem, SEQ_NO_FIELD};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shell command snippet with usage notes
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "CmdTools")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "iSeqNo")]
    #[serde(rename = "iSeqNo")]
    pub seq_no: i32,

    pub cmd: Option<String>,

    pub example: Option<String>,

    pub remark1: Option<String>,

    pub remark2: Option<String>,

    /// Free-form grouping tag
    #[sea_orm(column_name = "Type")]
    #[serde(rename = "Type")]
    pub kind: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResourceItem {
    fn from(model: Model) -> Self {
        ResourceItem::from_fields([
            (SEQ_NO_FIELD, serde_json::Value::from(model.seq_no)),
            ("cmd", super::text(model.cmd)),
            ("example", super::text(model.example)),
            ("remark1", super::text(model.remark1)),
            ("remark2", super::text(model.remark2)),
            ("Type", super::text(model.kind)),
        ])
    }
}
