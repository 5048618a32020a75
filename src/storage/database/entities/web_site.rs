use crate::core::resources::{ResourceItem, SEQ_NO_FIELD};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bookmarked website with optional login form hints
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "WebSite")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "iSeqNo")]
    #[serde(rename = "iSeqNo")]
    pub seq_no: i32,

    #[sea_orm(column_name = "Remark")]
    #[serde(rename = "Remark")]
    pub remark: Option<String>,

    #[sea_orm(column_name = "Classification")]
    #[serde(rename = "Classification")]
    pub classification: Option<String>,

    #[sea_orm(column_name = "Website")]
    #[serde(rename = "Website")]
    pub website: Option<String>,

    pub account: Option<String>,

    /// Element id of the login form's account field
    pub account_webid: Option<String>,

    pub password: Option<String>,

    /// Element id of the login form's password field
    pub password_webid: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResourceItem {
    fn from(model: Model) -> Self {
        ResourceItem::from_fields([
            (SEQ_NO_FIELD, serde_json::Value::from(model.seq_no)),
            ("Remark", super::text(model.remark)),
            ("Classification", super::text(model.classification)),
            ("Website", super::text(model.website)),
            ("account", super::text(model.account)),
            ("account_webid", super::text(model.account_webid)),
            ("password", super::text(model.password)),
            ("password_webid", super::text(model.password_webid)),
        ])
    }
}
