use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article_topic::Entity")]
    ArticleTopic,
}

// Read-only view; links are only ever written through the article
impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        super::article_topic::Relation::Article.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::article_topic::Relation::Topic.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
