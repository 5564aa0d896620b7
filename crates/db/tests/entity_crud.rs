//! Integration tests for the record store repositories.
//!
//! Exercises the full repository layer against a fresh SQLite database:
//! - Create / get / list / update / delete per entity
//! - Fallback updates keep omitted fields
//! - Sparse character patches touch only the supplied columns
//! - Deleting a novel leaves its children in place

use assert_matches::assert_matches;
use plotline_db::models::chapter::{CreateChapter, UpdateChapter};
use plotline_db::models::character::{CharacterProfile, CreateCharacter, UpdateCharacter};
use plotline_db::models::note::{CreateNote, UpdateNote};
use plotline_db::models::novel::{CreateNovel, UpdateNovel};
use plotline_db::models::setting::{CreateSetting, UpdateSetting};
use plotline_db::models::user::CreateUser;
use plotline_db::repositories::{
    ChapterRepo, CharacterRepo, NoteRepo, NovelRepo, SettingRepo, UserRepo,
};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_novel(user_id: i64, title: &str) -> CreateNovel {
    CreateNovel {
        user_id,
        title: title.to_string(),
        genre: None,
        summary: None,
    }
}

fn new_character(novel_id: i64, name: &str) -> CreateCharacter {
    CreateCharacter {
        novel_id,
        name: name.to_string(),
        description: Some("A reluctant hero".to_string()),
        role: Some("protagonist".to_string()),
        profile: CharacterProfile {
            age: Some("34".to_string()),
            eye_color: Some("green".to_string()),
            ..Default::default()
        },
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_create_and_find_by_email(pool: SqlitePool) {
    let input = CreateUser {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    };
    let user = UserRepo::create(&pool, &input).await.unwrap();
    assert_eq!(user.username, "ada");

    let found = UserRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, user.id);

    assert!(UserRepo::find_by_email(&pool, "nobody@example.com")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_is_not_rejected_by_the_store(pool: SqlitePool) {
    for username in ["first", "second"] {
        let input = CreateUser {
            username: username.to_string(),
            email: "same@example.com".to_string(),
            password_hash: "hash".to_string(),
        };
        UserRepo::create(&pool, &input).await.unwrap();
    }

    let users = UserRepo::list(&pool).await.unwrap();
    assert_eq!(users.len(), 2);

    // Lookup resolves to the oldest row.
    let found = UserRepo::find_by_email(&pool, "same@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.username, "first");
}

// ---------------------------------------------------------------------------
// Novels
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_novel_update_keeps_omitted_fields(pool: SqlitePool) {
    let novel = NovelRepo::create(
        &pool,
        &CreateNovel {
            summary: Some("Original summary".to_string()),
            ..new_novel(1, "T")
        },
    )
    .await
    .unwrap();

    let update = UpdateNovel {
        genre: Some("G".to_string()),
        ..Default::default()
    };
    let updated = NovelRepo::update(&pool, novel.id, &update)
        .await
        .unwrap()
        .expect("novel should exist");

    assert_eq!(updated.title, "T");
    assert_eq!(updated.genre.as_deref(), Some("G"));
    assert_eq!(updated.summary.as_deref(), Some("Original summary"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_novel_update_missing_row_returns_none(pool: SqlitePool) {
    let result = NovelRepo::update(&pool, 999_999, &UpdateNovel::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_novel_lookups(pool: SqlitePool) {
    let first = NovelRepo::create(&pool, &new_novel(7, "Dune")).await.unwrap();
    NovelRepo::create(&pool, &new_novel(7, "Emma")).await.unwrap();
    NovelRepo::create(&pool, &new_novel(8, "Dune")).await.unwrap();

    let mine = NovelRepo::list_by_user(&pool, 7).await.unwrap();
    let titles: Vec<_> = mine.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "Emma"]);

    let by_title = NovelRepo::find_by_title(&pool, 7, "Dune")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_title.id, first.id);

    assert!(NovelRepo::list_by_user(&pool, 42).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_novel_leaves_children(pool: SqlitePool) {
    let novel = NovelRepo::create(&pool, &new_novel(1, "Orphans")).await.unwrap();
    let chapter = ChapterRepo::create(
        &pool,
        &CreateChapter {
            novel_id: novel.id,
            title: "One".to_string(),
            content: None,
        },
    )
    .await
    .unwrap();

    assert!(NovelRepo::delete(&pool, novel.id).await.unwrap());
    assert!(!NovelRepo::delete(&pool, novel.id).await.unwrap());

    assert!(NovelRepo::find_by_id(&pool, novel.id).await.unwrap().is_none());
    assert!(ChapterRepo::find_by_id(&pool, chapter.id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Chapters, notes, settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_chapter_crud(pool: SqlitePool) {
    let chapter = ChapterRepo::create(
        &pool,
        &CreateChapter {
            novel_id: 3,
            title: "Prologue".to_string(),
            content: Some("It was a dark night.".to_string()),
        },
    )
    .await
    .unwrap();

    let update = UpdateChapter {
        title: Some("Chapter 0".to_string()),
        content: None,
    };
    let updated = ChapterRepo::update(&pool, chapter.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Chapter 0");
    assert_eq!(updated.content.as_deref(), Some("It was a dark night."));

    assert_eq!(ChapterRepo::list_by_novel(&pool, 3).await.unwrap().len(), 1);
    assert!(ChapterRepo::delete(&pool, chapter.id).await.unwrap());
    assert!(ChapterRepo::find_by_id(&pool, chapter.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_note_crud(pool: SqlitePool) {
    let note = NoteRepo::create(
        &pool,
        &CreateNote {
            novel_id: 4,
            title: "Theme".to_string(),
            content: None,
        },
    )
    .await
    .unwrap();

    let update = UpdateNote {
        title: None,
        content: Some("Loss and memory".to_string()),
    };
    let updated = NoteRepo::update(&pool, note.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.title, "Theme");
    assert_eq!(updated.content.as_deref(), Some("Loss and memory"));

    assert!(NoteRepo::delete(&pool, note.id).await.unwrap());
    assert!(NoteRepo::list_by_novel(&pool, 4).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_setting_crud(pool: SqlitePool) {
    let setting = SettingRepo::create(
        &pool,
        &CreateSetting {
            novel_id: 5,
            name: "Harbor town".to_string(),
            description: Some("Fog most mornings".to_string()),
            details: None,
        },
    )
    .await
    .unwrap();

    let update = UpdateSetting {
        details: Some("Population 3000".to_string()),
        ..Default::default()
    };
    let updated = SettingRepo::update(&pool, setting.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Harbor town");
    assert_eq!(updated.description.as_deref(), Some("Fog most mornings"));
    assert_eq!(updated.details.as_deref(), Some("Population 3000"));

    let found = SettingRepo::find_by_id(&pool, setting.id).await.unwrap();
    assert_matches!(found, Some(s) if s.details.as_deref() == Some("Population 3000"));
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_create_persists_profile(pool: SqlitePool) {
    let character = CharacterRepo::create(&pool, &new_character(9, "Mara"))
        .await
        .unwrap();

    assert_eq!(character.novel_id, 9);
    assert_eq!(character.name, "Mara");
    assert_eq!(character.profile.age.as_deref(), Some("34"));
    assert_eq!(character.profile.eye_color.as_deref(), Some("green"));
    assert!(character.profile.backstory.is_none());

    let listed = CharacterRepo::list_by_novel(&pool, 9).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].profile, character.profile);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_sparse_patch_touches_only_supplied_columns(pool: SqlitePool) {
    let character = CharacterRepo::create(&pool, &new_character(9, "Mara"))
        .await
        .unwrap();

    let patch: UpdateCharacter = serde_json::from_value(serde_json::json!({
        "role": "antagonist",
        "backstory": "Raised by smugglers",
        "eyeColor": null,
    }))
    .unwrap();

    let updated = CharacterRepo::update(&pool, character.id, &patch)
        .await
        .unwrap()
        .expect("character should exist");

    assert_eq!(updated.name, "Mara");
    assert_eq!(updated.description.as_deref(), Some("A reluctant hero"));
    assert_eq!(updated.role.as_deref(), Some("antagonist"));
    assert_eq!(updated.profile.age.as_deref(), Some("34"));
    assert_eq!(
        updated.profile.backstory.as_deref(),
        Some("Raised by smugglers")
    );
    assert!(updated.profile.eye_color.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_patch_missing_row_returns_none(pool: SqlitePool) {
    let patch = UpdateCharacter {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = CharacterRepo::update(&pool, 424_242, &patch).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_delete(pool: SqlitePool) {
    let character = CharacterRepo::create(&pool, &new_character(2, "Ilya"))
        .await
        .unwrap();

    assert!(CharacterRepo::delete(&pool, character.id).await.unwrap());
    assert!(!CharacterRepo::delete(&pool, character.id).await.unwrap());
    assert!(CharacterRepo::find_by_id(&pool, character.id)
        .await
        .unwrap()
        .is_none());
}
