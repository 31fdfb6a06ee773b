//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, metadata, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Estante API",
        version = "0.1.0",
        description = "School Library Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::search_books,
        books::create_book,
        // Students
        students::list_students,
        students::create_student,
        // Loans
        loans::list_active_loans,
        loans::create_loan,
        loans::return_loan,
        // Metadata
        metadata::lookup_isbn,
    ),
    components(
        schemas(
            // Health
            health::HealthResponse,
            // Books
            crate::models::book::Book,
            crate::models::book::BookSummary,
            crate::models::book::CreateBook,
            // Students
            crate::models::student::Student,
            crate::models::student::CreateStudent,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::ActiveLoan,
            crate::models::loan::CreateLoan,
            loans::LoanResponse,
            loans::ReturnResponse,
            // Metadata
            crate::services::metadata::BookMetadata,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "books", description = "Catalog management"),
        (name = "students", description = "Student roster"),
        (name = "loans", description = "Loan and return tracking"),
        (name = "metadata", description = "External ISBN lookup")
    )
)]
pub struct ApiDoc;

/// Create router serving the Swagger UI and OpenAPI spec
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
