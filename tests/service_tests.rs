//! Service-level tests against an in-memory SQLite database
//!
//! These drive the real services and repositories end to end; only the
//! database is swapped for `sqlite::memory:`.

use estante_server::{
    config::MetadataConfig,
    error::AppError,
    models::{book::CreateBook, loan::CreateLoan, student::CreateStudent},
    repository::Repository,
    services::Services,
};
use sqlx::sqlite::SqlitePoolOptions;

async fn setup() -> (Services, Repository) {
    // A single connection so every handle sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    let repository = Repository::new(pool);
    repository.ensure_schema().await.expect("Failed to create schema");

    let services = Services::new(repository.clone(), &MetadataConfig::default())
        .expect("Failed to create services");

    (services, repository)
}

fn book(title: &str, isbn: Option<&str>) -> CreateBook {
    CreateBook {
        title: title.to_string(),
        author: Some("Test Author".to_string()),
        isbn: isbn.map(str::to_string),
        location: "Shelf A".to_string(),
    }
}

fn student(name: &str) -> CreateStudent {
    CreateStudent {
        name: name.to_string(),
        class_group: Some("6B".to_string()),
    }
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let (services, repository) = setup().await;

    // Second run must not fail or disturb existing data
    repository.ensure_schema().await.expect("Second run failed");
    services
        .catalog
        .add_book(book("Idempotence", None))
        .await
        .expect("Insert after re-init failed");
    repository.ensure_schema().await.expect("Third run failed");

    let books = services.catalog.search_books("").await.unwrap();
    assert_eq!(books.len(), 1);
}

#[tokio::test]
async fn add_book_then_search_round_trip() {
    let (services, _) = setup().await;

    services
        .catalog
        .add_book(CreateBook {
            title: "Clean Code".to_string(),
            author: Some("Robert C. Martin".to_string()),
            isbn: Some("9780132350884".to_string()),
            location: "Shelf 3".to_string(),
        })
        .await
        .unwrap();

    let results = services.catalog.search_books("9780132350884").await.unwrap();
    assert_eq!(results.len(), 1);

    let found = &results[0];
    assert_eq!(found.title, "Clean Code");
    assert_eq!(found.author.as_deref(), Some("Robert C. Martin"));
    assert_eq!(found.isbn.as_deref(), Some("9780132350884"));
    assert_eq!(found.location, "Shelf 3");
    assert!(found.available);
    assert_eq!(found.availability, "Yes");
}

#[tokio::test]
async fn search_matches_title_author_and_isbn() {
    let (services, _) = setup().await;

    services.catalog.add_book(book("The Hobbit", Some("111"))).await.unwrap();
    services
        .catalog
        .add_book(CreateBook {
            title: "Dune".to_string(),
            author: Some("Frank Herbert".to_string()),
            isbn: Some("222".to_string()),
            location: "Shelf B".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(services.catalog.search_books("Hobbit").await.unwrap().len(), 1);
    assert_eq!(services.catalog.search_books("Herbert").await.unwrap().len(), 1);
    assert_eq!(services.catalog.search_books("222").await.unwrap().len(), 1);
    // Empty query returns the whole catalog
    assert_eq!(services.catalog.search_books("").await.unwrap().len(), 2);
    assert!(services.catalog.search_books("no such thing").await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_isbn_is_rejected_and_leaves_catalog_unchanged() {
    let (services, _) = setup().await;

    services.catalog.add_book(book("First", Some("123"))).await.unwrap();
    let result = services.catalog.add_book(book("Second", Some("123"))).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(services.catalog.search_books("").await.unwrap().len(), 1);
}

#[tokio::test]
async fn blank_title_or_location_is_rejected() {
    let (services, _) = setup().await;

    let no_title = services
        .catalog
        .add_book(CreateBook {
            title: String::new(),
            author: None,
            isbn: None,
            location: "Shelf A".to_string(),
        })
        .await;
    assert!(matches!(no_title, Err(AppError::Validation(_))));

    let no_location = services
        .catalog
        .add_book(CreateBook {
            title: "Untitled".to_string(),
            author: None,
            isbn: None,
            location: String::new(),
        })
        .await;
    assert!(matches!(no_location, Err(AppError::Validation(_))));

    assert!(services.catalog.search_books("").await.unwrap().is_empty());
}

#[tokio::test]
async fn students_are_listed_sorted_by_name() {
    let (services, _) = setup().await;

    services.roster.add_student(student("Maria")).await.unwrap();
    services.roster.add_student(student("Ana")).await.unwrap();
    services.roster.add_student(student("Carlos")).await.unwrap();

    let students = services.roster.list_students().await.unwrap();
    let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Carlos", "Maria"]);
}

#[tokio::test]
async fn blank_student_name_is_rejected() {
    let (services, _) = setup().await;

    let result = services.roster.add_student(student("")).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(services.roster.list_students().await.unwrap().is_empty());
}

#[tokio::test]
async fn full_loan_and_return_cycle() {
    let (services, _) = setup().await;

    let created = services.catalog.add_book(book("Loanable", Some("111"))).await.unwrap();
    let reader = services.roster.add_student(student("Ana")).await.unwrap();

    // Freshly registered book is available
    let results = services.catalog.search_books("111").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].availability, "Yes");

    // Lend it out
    let loan = services
        .loans
        .create_loan(CreateLoan {
            book_id: created.id,
            student_id: reader.id,
        })
        .await
        .unwrap();
    assert!(loan.return_date.is_none());

    let results = services.catalog.search_books("111").await.unwrap();
    assert!(!results[0].available);
    assert_eq!(results[0].availability, "No");

    let active = services.loans.list_active_loans().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].book_title, "Loanable");
    assert_eq!(active[0].student_name, "Ana");
    assert_eq!(active[0].book_id, created.id);

    // Return it
    let closed = services.loans.close_loan(loan.id).await.unwrap();
    assert!(closed.return_date.is_some());

    let results = services.catalog.search_books("111").await.unwrap();
    assert!(results[0].available);
    assert!(services.loans.list_active_loans().await.unwrap().is_empty());
}

#[tokio::test]
async fn lending_an_unavailable_book_fails_without_orphan_row() {
    let (services, repository) = setup().await;

    let created = services.catalog.add_book(book("Popular", None)).await.unwrap();
    let first = services.roster.add_student(student("Ana")).await.unwrap();
    let second = services.roster.add_student(student("Bruno")).await.unwrap();

    services
        .loans
        .create_loan(CreateLoan {
            book_id: created.id,
            student_id: first.id,
        })
        .await
        .unwrap();

    let result = services
        .loans
        .create_loan(CreateLoan {
            book_id: created.id,
            student_id: second.id,
        })
        .await;
    assert!(matches!(result, Err(AppError::BusinessRule(_))));

    // The failed attempt must not have persisted a loan row
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans")
        .fetch_one(&repository.pool)
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(services.loans.count_active().await.unwrap(), 1);
}

#[tokio::test]
async fn availability_tracks_active_loans() {
    let (services, repository) = setup().await;

    let created = services.catalog.add_book(book("Tracked", None)).await.unwrap();
    let reader = services.roster.add_student(student("Ana")).await.unwrap();

    let loan = services
        .loans
        .create_loan(CreateLoan {
            book_id: created.id,
            student_id: reader.id,
        })
        .await
        .unwrap();

    // available = false iff an active loan references the book
    let available: bool = sqlx::query_scalar("SELECT available FROM books WHERE id = ?1")
        .bind(created.id)
        .fetch_one(&repository.pool)
        .await
        .unwrap();
    assert!(!available);

    services.loans.close_loan(loan.id).await.unwrap();

    let available: bool = sqlx::query_scalar("SELECT available FROM books WHERE id = ?1")
        .bind(created.id)
        .fetch_one(&repository.pool)
        .await
        .unwrap();
    assert!(available);
}

#[tokio::test]
async fn closing_a_loan_twice_is_rejected() {
    let (services, _) = setup().await;

    let created = services.catalog.add_book(book("Once", None)).await.unwrap();
    let reader = services.roster.add_student(student("Ana")).await.unwrap();

    let loan = services
        .loans
        .create_loan(CreateLoan {
            book_id: created.id,
            student_id: reader.id,
        })
        .await
        .unwrap();

    services.loans.close_loan(loan.id).await.unwrap();
    let result = services.loans.close_loan(loan.id).await;
    assert!(matches!(result, Err(AppError::BusinessRule(_))));
}

#[tokio::test]
async fn loan_requires_existing_book_and_student() {
    let (services, _) = setup().await;

    let created = services.catalog.add_book(book("Real", None)).await.unwrap();
    let reader = services.roster.add_student(student("Ana")).await.unwrap();

    let no_student = services
        .loans
        .create_loan(CreateLoan {
            book_id: created.id,
            student_id: 9999,
        })
        .await;
    assert!(matches!(no_student, Err(AppError::NotFound(_))));

    let no_book = services
        .loans
        .create_loan(CreateLoan {
            book_id: 9999,
            student_id: reader.id,
        })
        .await;
    assert!(matches!(no_book, Err(AppError::NotFound(_))));

    assert_eq!(services.loans.count_active().await.unwrap(), 0);
}

#[tokio::test]
async fn active_loans_are_ordered_oldest_first() {
    let (services, repository) = setup().await;

    let reader = services.roster.add_student(student("Ana")).await.unwrap();
    let mut book_ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        let created = services.catalog.add_book(book(title, None)).await.unwrap();
        book_ids.push(created.id);
    }

    // Insert with out-of-order dates; the service only ever uses "today"
    for (book_id, date) in book_ids.iter().zip(["2026-03-10", "2026-01-05", "2026-02-20"]) {
        sqlx::query(
            "INSERT INTO loans (book_id, student_id, loan_date, return_date) VALUES (?1, ?2, ?3, NULL)",
        )
        .bind(book_id)
        .bind(reader.id)
        .bind(date)
        .execute(&repository.pool)
        .await
        .unwrap();
    }

    let active = services.loans.list_active_loans().await.unwrap();
    let dates: Vec<_> = active.iter().map(|l| l.loan_date.to_string()).collect();
    assert_eq!(dates, vec!["2026-01-05", "2026-02-20", "2026-03-10"]);
}

#[tokio::test]
async fn active_loan_index_blocks_out_of_band_duplicates() {
    let (services, repository) = setup().await;

    let created = services.catalog.add_book(book("Guarded", None)).await.unwrap();
    let reader = services.roster.add_student(student("Ana")).await.unwrap();

    services
        .loans
        .create_loan(CreateLoan {
            book_id: created.id,
            student_id: reader.id,
        })
        .await
        .unwrap();

    // A direct insert that skips the service must still hit the partial index
    let result = sqlx::query(
        "INSERT INTO loans (book_id, student_id, loan_date, return_date) VALUES (?1, ?2, '2026-01-01', NULL)",
    )
    .bind(created.id)
    .bind(reader.id)
    .execute(&repository.pool)
    .await;
    assert!(result.is_err());
}
