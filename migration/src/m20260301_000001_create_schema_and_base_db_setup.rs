use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("CREATE SCHEMA IF NOT EXISTS fitlife;")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("SET search_path TO fitlife, public;")
            .await?;

        // The application role is optional in local setups where the superuser runs queries
        manager
            .get_connection()
            .execute_unprepared(r#"
                DO $$ BEGIN
                    IF EXISTS (SELECT FROM pg_roles WHERE rolname = 'fitlife') THEN
                        EXECUTE format('GRANT ALL PRIVILEGES ON DATABASE %I TO fitlife', current_database());
                        GRANT ALL ON SCHEMA fitlife TO fitlife;

                        ALTER DEFAULT PRIVILEGES IN SCHEMA fitlife GRANT ALL ON TABLES TO fitlife;
                        ALTER DEFAULT PRIVILEGES IN SCHEMA fitlife GRANT ALL ON SEQUENCES TO fitlife;
                        ALTER DEFAULT PRIVILEGES IN SCHEMA fitlife GRANT ALL ON FUNCTIONS TO fitlife;
                    END IF;
                END $$;
            "#)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(r#"
                DO $$ BEGIN
                    IF EXISTS (SELECT FROM pg_roles WHERE rolname = 'fitlife') THEN
                        ALTER DEFAULT PRIVILEGES IN SCHEMA fitlife REVOKE ALL ON FUNCTIONS FROM fitlife;
                        ALTER DEFAULT PRIVILEGES IN SCHEMA fitlife REVOKE ALL ON SEQUENCES FROM fitlife;
                        ALTER DEFAULT PRIVILEGES IN SCHEMA fitlife REVOKE ALL ON TABLES FROM fitlife;
                        REVOKE ALL ON SCHEMA fitlife FROM fitlife;
                    END IF;
                END $$;
            "#)
            .await?;

        // CASCADE removes every table and type created by later migrations
        manager
            .get_connection()
            .execute_unprepared("DROP SCHEMA IF EXISTS fitlife CASCADE;")
            .await?;

        Ok(())
    }
}
