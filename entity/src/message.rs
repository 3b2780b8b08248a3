use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub related_event_id: Option<i32>,
    pub is_read: bool,
    pub sent_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SenderId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RecipientId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Recipient,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::RelatedEventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    RelatedEvent,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelatedEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
