use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生组表
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Groups::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Groups::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Groups::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::ShortName).string().not_null())
                    .col(ColumnDef::new(Subjects::Description).text().null())
                    .col(ColumnDef::new(Subjects::Credits).integer().null())
                    .col(ColumnDef::new(Subjects::LessonTypes).text().not_null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程-组分配表
        // 外键策略为 Restrict：所有级联删除都由存储层的编排器显式执行，
        // 不依赖数据库自身的级联配置，保证各后端行为一致。
        manager
            .create_table(
                Table::create()
                    .table(DisciplineGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DisciplineGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DisciplineGroups::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DisciplineGroups::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DisciplineGroups::TeacherId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DisciplineGroups::Semester)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DisciplineGroups::Year).integer().not_null())
                    .col(
                        ColumnDef::new(DisciplineGroups::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DisciplineGroups::Table, DisciplineGroups::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DisciplineGroups::Table, DisciplineGroups::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DisciplineGroups::Table, DisciplineGroups::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(ColumnDef::new(Students::MiddleName).string().null())
                    .col(ColumnDef::new(Students::DateBorn).string().null())
                    .col(ColumnDef::new(Students::GroupId).big_integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程安排表
        manager
            .create_table(
                Table::create()
                    .table(ScheduleItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduleItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScheduleItems::Date).string().not_null())
                    .col(ColumnDef::new(ScheduleItems::StartTime).string().not_null())
                    .col(ColumnDef::new(ScheduleItems::EndTime).string().not_null())
                    .col(
                        ColumnDef::new(ScheduleItems::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::LessonType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItems::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduleItems::Table, ScheduleItems::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduleItems::Table, ScheduleItems::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课程安排-组关联表（多对多）
        manager
            .create_table(
                Table::create()
                    .table(ScheduleItemGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduleItemGroups::ScheduleItemId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleItemGroups::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ScheduleItemGroups::ScheduleItemId)
                            .col(ScheduleItemGroups::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ScheduleItemGroups::Table,
                                ScheduleItemGroups::ScheduleItemId,
                            )
                            .to(ScheduleItems::Table, ScheduleItems::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduleItemGroups::Table, ScheduleItemGroups::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::TeacherId).big_integer().null())
                    .col(ColumnDef::new(Grades::GradeType).string().not_null())
                    .col(ColumnDef::new(Grades::LessonType).string().null())
                    .col(ColumnDef::new(Grades::Value).integer().not_null())
                    .col(ColumnDef::new(Grades::Date).string().not_null())
                    .col(ColumnDef::new(Grades::Comment).text().null())
                    .col(ColumnDef::new(Grades::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建出勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Attendance::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attendance::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attendance::Status).string().not_null())
                    .col(ColumnDef::new(Attendance::Date).string().not_null())
                    .col(
                        ColumnDef::new(Attendance::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScheduleItemGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScheduleItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DisciplineGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    PasswordHash,
    FirstName,
    LastName,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Groups {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    Name,
    ShortName,
    Description,
    Credits,
    LessonTypes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DisciplineGroups {
    Table,
    Id,
    SubjectId,
    GroupId,
    TeacherId,
    Semester,
    Year,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    MiddleName,
    DateBorn,
    GroupId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ScheduleItems {
    Table,
    Id,
    Date,
    StartTime,
    EndTime,
    SubjectId,
    TeacherId,
    LessonType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ScheduleItemGroups {
    Table,
    ScheduleItemId,
    GroupId,
}

#[derive(DeriveIden)]
enum Grades {
    Table,
    Id,
    StudentId,
    SubjectId,
    TeacherId,
    GradeType,
    LessonType,
    Value,
    Date,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Attendance {
    Table,
    Id,
    StudentId,
    SubjectId,
    Status,
    Date,
    CreatedAt,
}
