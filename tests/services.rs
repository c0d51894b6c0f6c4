//! Service-level tests: role gating, end-to-end listing over the
//! in-memory fetcher, and fetch-error propagation.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use mockall::mock;
use rust_decimal::dec;

use tms_backoffice::access::Operator;
use tms_backoffice::domain::order::{Order, OrderStatus};
use tms_backoffice::domain::role::Role;
use tms_backoffice::domain::salary_formula::SalaryFormula;
use tms_backoffice::domain::types::{OrderId, PlateNumber, RoleId, SalaryFormulaId, VehicleId};
use tms_backoffice::domain::vehicle::{Vehicle, VehicleStatus};
use tms_backoffice::dto::listing::ListQuery;
use tms_backoffice::fetcher::{FetchError, FetchResult, InMemoryFetcher, PageFetcher};
use tms_backoffice::models::config::OfficeConfig;
use tms_backoffice::pagination::{PageQuery, PageResult};
use tms_backoffice::services::orders::load_orders_page;
use tms_backoffice::services::settings::{load_roles_page, load_salary_formulas_page};
use tms_backoffice::services::{ServiceError, fleet};
use tms_backoffice::{DISPATCH_ROLE, FLEET_ROLE, SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE};

fn operator(roles: &[&str]) -> Operator {
    Operator {
        name: "Test Operator".into(),
        email: "operator@example.com".into(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
    }
}

fn office_config() -> OfficeConfig {
    serde_json::from_str(r#"{"api_base_url":"https://api.example.com"}"#)
        .expect("config fixture")
}

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn order(id: i64, customer: &str) -> Order {
    Order {
        id: OrderId::new(id).unwrap(),
        order_no: format!("ORD-{id:04}"),
        customer: customer.to_string(),
        origin: "Hamburg".into(),
        destination: "Vilnius".into(),
        status: OrderStatus::Scheduled,
        container_id: None,
        driver_id: None,
        vehicle_id: None,
        freight_amount: dec!(1250.00),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

fn orders_fetcher(count: i64) -> InMemoryFetcher<Order> {
    let rows = (1..=count)
        .map(|id| {
            let customer = if id % 2 == 0 { "Acme Logistics" } else { "Baltic Freight" };
            order(id, customer)
        })
        .collect();
    InMemoryFetcher::new(rows)
}

mock! {
    OrderFetcher {}

    #[async_trait]
    impl PageFetcher<Order> for OrderFetcher {
        async fn fetch_page(&self, query: PageQuery) -> FetchResult<PageResult<Order>>;
    }
}

#[tokio::test]
async fn dispatcher_loads_a_paginated_orders_page() {
    let dispatcher = operator(&[SERVICE_ACCESS_ROLE, DISPATCH_ROLE]);
    let query = ListQuery {
        search: None,
        page: Some(3),
    };

    let data = load_orders_page(orders_fetcher(23), &dispatcher, &office_config(), query)
        .await
        .unwrap();

    assert_eq!(data.items.items.len(), 3);
    assert_eq!(data.items.page, 3);
    assert_eq!(data.total_elements, 23);
    assert!(data.items.pages.contains(&Some(3)));
    assert_eq!(data.search_query, None);
}

#[tokio::test]
async fn search_is_trimmed_filtered_and_echoed_back() {
    let dispatcher = operator(&[SERVICE_ACCESS_ROLE, DISPATCH_ROLE]);
    let query = ListQuery {
        search: Some("  acme  ".into()),
        page: None,
    };

    let data = load_orders_page(orders_fetcher(23), &dispatcher, &office_config(), query)
        .await
        .unwrap();

    // 11 even-numbered orders belong to Acme Logistics.
    assert_eq!(data.total_elements, 11);
    assert!(
        data.items
            .items
            .iter()
            .all(|order| order.customer == "Acme Logistics")
    );
    assert_eq!(data.search_query.as_deref(), Some("acme"));
    assert_eq!(data.items.page, 1);
}

#[tokio::test]
async fn blank_search_means_no_keyword() {
    let dispatcher = operator(&[SERVICE_ACCESS_ROLE, DISPATCH_ROLE]);
    let query = ListQuery {
        search: Some("   ".into()),
        page: None,
    };

    let data = load_orders_page(orders_fetcher(5), &dispatcher, &office_config(), query)
        .await
        .unwrap();

    assert_eq!(data.total_elements, 5);
    assert_eq!(data.search_query, None);
}

#[tokio::test]
async fn missing_section_role_is_unauthorized_and_issues_no_fetch() {
    // No expectations registered: any call to the mock would panic.
    let fetcher = MockOrderFetcher::new();
    let outsider = operator(&[SERVICE_ACCESS_ROLE, FLEET_ROLE]);

    let result = load_orders_page(fetcher, &outsider, &office_config(), ListQuery::default()).await;
    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

#[tokio::test]
async fn fetch_failures_propagate_through_the_service() {
    let mut fetcher = MockOrderFetcher::new();
    fetcher
        .expect_fetch_page()
        .times(1)
        .returning(|_| Err(FetchError::Server(502)));
    let dispatcher = operator(&[SERVICE_ACCESS_ROLE, DISPATCH_ROLE]);

    let result =
        load_orders_page(fetcher, &dispatcher, &office_config(), ListQuery::default()).await;
    assert!(matches!(
        result,
        Err(ServiceError::Fetch(FetchError::Server(502)))
    ));
}

#[tokio::test]
async fn fleet_screens_require_the_fleet_role() {
    let dispatcher = operator(&[SERVICE_ACCESS_ROLE, DISPATCH_ROLE]);
    let fetcher = InMemoryFetcher::new(Vec::new());

    let result = fleet::load_drivers_page(
        fetcher,
        &dispatcher,
        &office_config(),
        ListQuery::default(),
    )
    .await;
    assert!(matches!(result, Err(ServiceError::Unauthorized)));
}

#[tokio::test]
async fn roles_screen_is_admin_only() {
    let roles = vec![
        Role {
            id: RoleId::new(1).unwrap(),
            name: "dispatcher".into(),
            description: Some("Order and container management".into()),
            permissions: vec!["orders:read".into(), "orders:write".into()],
        },
        Role {
            id: RoleId::new(2).unwrap(),
            name: "fleet".into(),
            description: None,
            permissions: vec!["drivers:read".into(), "vehicles:read".into()],
        },
    ];

    let fleet_operator = operator(&[SERVICE_ACCESS_ROLE, FLEET_ROLE]);
    let denied = load_roles_page(
        InMemoryFetcher::new(roles.clone()),
        &fleet_operator,
        &office_config(),
        ListQuery::default(),
    )
    .await;
    assert!(matches!(denied, Err(ServiceError::Unauthorized)));

    let admin = operator(&[SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE]);
    let data = load_roles_page(
        InMemoryFetcher::new(roles),
        &admin,
        &office_config(),
        ListQuery::default(),
    )
    .await
    .unwrap();
    assert_eq!(data.total_elements, 2);
    assert_eq!(data.items.items[0].name, "dispatcher");
}

#[tokio::test]
async fn fleet_operator_loads_a_filtered_vehicles_page() {
    let vehicles = vec![
        Vehicle {
            id: VehicleId::new(1).unwrap(),
            plate: PlateNumber::new("B 123 AO 77").unwrap(),
            model: "Volvo FH".into(),
            capacity_kg: 24_000,
            status: VehicleStatus::Available,
            updated_at: timestamp(),
        },
        Vehicle {
            id: VehicleId::new(2).unwrap(),
            plate: PlateNumber::new("C 456 BP 78").unwrap(),
            model: "Scania R450".into(),
            capacity_kg: 25_000,
            status: VehicleStatus::OnRoute,
            updated_at: timestamp(),
        },
    ];
    let fleet_operator = operator(&[SERVICE_ACCESS_ROLE, FLEET_ROLE]);
    let query = ListQuery {
        search: Some("volvo".into()),
        page: None,
    };

    let data = fleet::load_vehicles_page(
        InMemoryFetcher::new(vehicles),
        &fleet_operator,
        &office_config(),
        query,
    )
    .await
    .unwrap();

    assert_eq!(data.total_elements, 1);
    assert_eq!(data.items.items[0].model, "Volvo FH");
    assert_eq!(data.search_query.as_deref(), Some("volvo"));
}

#[tokio::test]
async fn salary_formulas_screen_is_admin_only() {
    let formulas = vec![SalaryFormula {
        id: SalaryFormulaId::new(1).unwrap(),
        name: "Long haul".into(),
        base_rate: dec!(900.00),
        per_km_rate: dec!(0.35),
        bonus_percent: dec!(2.5),
        effective_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    }];

    let dispatcher = operator(&[SERVICE_ACCESS_ROLE, DISPATCH_ROLE]);
    let denied = load_salary_formulas_page(
        InMemoryFetcher::new(formulas.clone()),
        &dispatcher,
        &office_config(),
        ListQuery::default(),
    )
    .await;
    assert!(matches!(denied, Err(ServiceError::Unauthorized)));

    let admin = operator(&[SERVICE_ACCESS_ROLE, SERVICE_ADMIN_ROLE]);
    let data = load_salary_formulas_page(
        InMemoryFetcher::new(formulas),
        &admin,
        &office_config(),
        ListQuery::default(),
    )
    .await
    .unwrap();
    assert_eq!(data.total_elements, 1);
    assert_eq!(data.items.items[0].name, "Long haul");
}

#[tokio::test]
async fn empty_result_still_renders_one_page() {
    let dispatcher = operator(&[SERVICE_ACCESS_ROLE, DISPATCH_ROLE]);
    let query = ListQuery {
        search: Some("no such customer".into()),
        page: None,
    };

    let data = load_orders_page(orders_fetcher(5), &dispatcher, &office_config(), query)
        .await
        .unwrap();

    assert_eq!(data.total_elements, 0);
    assert!(data.items.items.is_empty());
    // The page strip still offers page 1; views never divide by zero.
    assert_eq!(data.items.pages, vec![Some(1)]);
}
