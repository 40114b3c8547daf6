use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub author_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    // Inverse side: comments hold the foreign key
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    // Owning side of the topic association
    #[sea_orm(has_many = "super::article_topic::Entity")]
    ArticleTopic,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        super::article_topic::Relation::Topic.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::article_topic::Relation::Article.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
