pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_roles_table;
mod m20251101_000002_create_members_table;
mod m20251101_000003_create_types_table;
mod m20251101_000004_create_words_table;
mod m20251101_000005_seed_types;

pub use m20251101_000005_seed_types::PART_OF_SPEECH_TYPES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_roles_table::Migration),
            Box::new(m20251101_000002_create_members_table::Migration),
            Box::new(m20251101_000003_create_types_table::Migration),
            Box::new(m20251101_000004_create_words_table::Migration),
            Box::new(m20251101_000005_seed_types::Migration),
        ]
    }
}
