use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A batch insert shares one `created` value; seq keeps insertion order.
        manager
            .alter_table(
                Table::alter()
                    .table(BlogPosts::Table)
                    .add_column(
                        ColumnDef::new(BlogPosts::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx_blog_posts_seq")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Seq)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(BlogPosts::Table)
                    .drop_column(BlogPosts::Seq)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Seq,
}
