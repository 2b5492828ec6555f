use std::env;

use api::gql::{build_schema, ProductSchema};
use api::{AppState, ServiceConfig};
use async_graphql::{Request, Variables};
use sqlx::postgres::PgPoolOptions;
use testcontainers_modules::postgres::Postgres;
use testcontainers_modules::testcontainers::runners::AsyncRunner;
use testcontainers_modules::testcontainers::ContainerAsync;

pub struct TestApp {
    pub state: AppState,
    pub schema: ProductSchema,
    // Keeps the throwaway database alive for the duration of the test
    _container: Option<ContainerAsync<Postgres>>,
}

/// Connect to `TEST_DATABASE_URL` if set, otherwise start a disposable
/// Postgres container. Migrations are applied either way.
pub async fn setup_test_app() -> TestApp {
    let (database_url, container) = match env::var("TEST_DATABASE_URL") {
        Ok(url) => (url, None),
        Err(_) => {
            let container = Postgres::default()
                .start()
                .await
                .expect("Failed to start Postgres container");
            let host = container.get_host().await.expect("container host");
            let port = container
                .get_host_port_ipv4(5432)
                .await
                .expect("container port");
            (
                format!("postgres://postgres:postgres@{host}:{port}/postgres"),
                Some(container),
            )
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState::new(
        pool,
        ServiceConfig {
            database_url,
            ..ServiceConfig::default()
        },
    );
    let schema = build_schema(state.clone());

    TestApp {
        state,
        schema,
        _container: container,
    }
}

/// Helper function to execute GraphQL queries and mutations
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &ProductSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Unique suffix so tests sharing a database don't see each other's rows
#[allow(dead_code)]
pub fn unique_suffix() -> i64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0)
}

/// Create a supplier with a contact record and return the supplier ID
#[allow(dead_code)]
pub async fn create_test_supplier(app_state: &AppState, name: &str) -> i64 {
    let supplier_id: i64 =
        sqlx::query_scalar("INSERT INTO suppliers (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&app_state.db)
            .await
            .expect("Failed to create test supplier");

    sqlx::query(
        "INSERT INTO supplier_contacts (supplier_id, contact_name, email, phone) VALUES ($1, $2, $3, $4)",
    )
    .bind(supplier_id)
    .bind("Jane Supplier")
    .bind("jane@supplier.test")
    .bind("+1-555-0100")
    .execute(&app_state.db)
    .await
    .expect("Failed to create test supplier contact");

    supplier_id
}

#[allow(dead_code)]
pub const PRODUCT_FIELDS: &str = r#"
    id
    name
    category
    supplier { id name contact { contactName email phone } }
    pricing { listPrice discount netPrice currency }
    inventory { stock warehouseLocation reorderLevel }
"#;

/// Create a product through the `createProduct` mutation and return its ID
#[allow(dead_code)]
pub async fn create_test_product(schema: &ProductSchema, name: &str, category: &str) -> String {
    let query = r#"
        mutation Create($name: String!, $category: String) {
            createProduct(
                name: $name
                category: $category
                listPrice: "100"
                discount: "10"
                currency: "USD"
                stock: 5
                warehouseLocation: "A1"
                reorderLevel: 2
            ) {
                id
            }
        }
    "#;

    let variables = Variables::from_json(serde_json::json!({
        "name": name,
        "category": category,
    }));

    let response = execute_graphql(schema, query, Some(variables)).await;
    assert!(
        response.errors.is_empty(),
        "Create product should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    data["createProduct"]["id"].as_str().unwrap().to_string()
}

/// Parse a `Decimal` scalar out of a JSON response value
#[allow(dead_code)]
pub fn decimal(value: &serde_json::Value) -> rust_decimal::Decimal {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected a decimal string, got {value}"))
        .parse()
        .expect("valid decimal")
}
