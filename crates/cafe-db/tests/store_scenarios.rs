//! End-to-end store scenarios: derived totals and audit entries commit or
//! roll back together with the mutation that caused them.

use std::str::FromStr;

use cafe_core::audit_rules::{AuditRules, DEFAULT_RULES, MonitorRule};
use cafe_core::entities::{
    CartLine, Employee, MenuItem, NewCustomer, NewEmployee, NewLineItem, NewMenuItem, NewOrder,
    Order,
};
use cafe_core::enums::{AuditAction, EntityKind, OrderType, PaymentMethod};
use cafe_core::money::RoundingPolicy;
use cafe_db::CafeDb;
use cafe_db::repos::audit::AuditFilter;
use cafe_db::service::CafeService;
use cafe_db::updates::CustomerUpdateBuilder;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn service() -> CafeService {
    CafeService::new_local(":memory:", RoundingPolicy::HalfUp)
        .await
        .unwrap()
}

async fn employee(svc: &mut CafeService) -> Employee {
    svc.create_employee(NewEmployee {
        full_name: "Maria Ivanova".into(),
        role: "waiter".into(),
        phone: String::new(),
        salary: dec("40000"),
        hire_date: None,
    })
    .await
    .unwrap()
}

async fn menu_item(svc: &mut CafeService, name: &str, price: &str) -> MenuItem {
    svc.create_menu_item(NewMenuItem {
        name: name.into(),
        kind: "food".into(),
        selling_price: dec(price),
        volume_or_weight: String::new(),
    })
    .await
    .unwrap()
}

async fn total(svc: &CafeService, order: &Order) -> Decimal {
    svc.get_order(order.id).await.unwrap().total_amount
}

#[tokio::test]
async fn running_total_and_customer_audit() {
    let mut svc = service().await;
    let staff = employee(&mut svc).await;
    let steak = menu_item(&mut svc, "Steak", "100.00").await;
    let soup = menu_item(&mut svc, "Soup", "50.00").await;
    let tea = menu_item(&mut svc, "Tea", "1.00").await;

    // Start from an order whose only line is then removed, so the total is 0.
    let (order, seed_lines) = svc
        .create_order(NewOrder {
            customer_id: None,
            employee_id: staff.id,
            order_type: OrderType::DineIn,
            payment_method: PaymentMethod::Card,
            order_date: None,
            lines: vec![CartLine::new(tea.id, 1)],
        })
        .await
        .unwrap();
    svc.delete_line_item(seed_lines[0].id).await.unwrap();
    assert_eq!(total(&svc, &order).await, dec("0"));

    let first = svc
        .add_line_item(NewLineItem {
            order_id: order.id,
            menu_item_id: steak.id,
            quantity: 2,
            price_at_sale: None,
        })
        .await
        .unwrap();
    assert_eq!(total(&svc, &order).await, dec("200.00"));

    svc.add_line_item(NewLineItem {
        order_id: order.id,
        menu_item_id: soup.id,
        quantity: 1,
        price_at_sale: None,
    })
    .await
    .unwrap();
    assert_eq!(total(&svc, &order).await, dec("250.00"));

    svc.delete_line_item(first.id).await.unwrap();
    assert_eq!(total(&svc, &order).await, dec("50.00"));

    let customer = svc
        .create_customer(NewCustomer {
            name: "A".into(),
            phone: "9991234567".into(),
            email: "a@example.com".into(),
        })
        .await
        .unwrap();
    svc.update_customer(customer.id, CustomerUpdateBuilder::new().name("B").build())
        .await
        .unwrap();

    let log = svc.list_audit_log(&AuditFilter::default()).await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].action, AuditAction::Update);
    assert_eq!(log[0].entity, EntityKind::Customers);
    assert!(log[0].message.contains('B'));
}

#[tokio::test]
async fn every_customer_update_logs_exactly_once() {
    let mut svc = service().await;
    let customer = svc
        .create_customer(NewCustomer {
            name: "Start".into(),
            phone: String::new(),
            email: "start@example.com".into(),
        })
        .await
        .unwrap();

    for name in ["One", "Two", "Three"] {
        svc.update_customer(customer.id, CustomerUpdateBuilder::new().name(name).build())
            .await
            .unwrap();
    }
    // Same value again still counts as an update.
    svc.update_customer(customer.id, CustomerUpdateBuilder::new().name("Three").build())
        .await
        .unwrap();

    let log = svc
        .list_audit_log(&AuditFilter {
            entity: Some(EntityKind::Customers),
            entity_id: Some(customer.id),
            ..AuditFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(log.len(), 4);
    assert_eq!(log[0].message, "Customer updated: Three");
    assert_eq!(log[3].message, "Customer updated: One");
}

#[tokio::test]
async fn menu_delete_entry_outlives_the_item() {
    let mut svc = service().await;
    let item = menu_item(&mut svc, "Pancakes", "6.40").await;
    svc.delete_menu_item(item.id).await.unwrap();

    assert!(svc.list_menu_items(10).await.unwrap().is_empty());
    let log = svc
        .list_audit_log(&AuditFilter {
            action: Some(AuditAction::Delete),
            ..AuditFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].entity_id, item.id);
    assert!(log[0].message.contains("Pancakes"));
}

#[tokio::test]
async fn rolled_back_unit_leaves_total_and_log_unchanged() {
    let line_rule = MonitorRule::new(
        EntityKind::OrderLineItems,
        AuditAction::Insert,
        "line_item_added",
        "Line item added: {name}",
    );
    let rules = AuditRules::new(DEFAULT_RULES.iter().copied().chain([line_rule])).unwrap();
    let mut svc = service().await.with_audit_rules(rules);
    let staff = employee(&mut svc).await;
    let soup = menu_item(&mut svc, "Soup", "50.00").await;

    let (order, _) = svc
        .create_order(NewOrder {
            customer_id: None,
            employee_id: staff.id,
            order_type: OrderType::Takeaway,
            payment_method: PaymentMethod::Cash,
            order_date: None,
            lines: vec![CartLine::new(soup.id, 1)],
        })
        .await
        .unwrap();
    let log_before = svc.list_audit_log(&AuditFilter::default()).await.unwrap();
    assert_eq!(log_before.len(), 1);

    let uow = svc.begin().await.unwrap();
    uow.add_line_item(&NewLineItem {
        order_id: order.id,
        menu_item_id: soup.id,
        quantity: 3,
        price_at_sale: None,
    })
    .await
    .unwrap();
    uow.rollback().await.unwrap();

    assert_eq!(total(&svc, &order).await, dec("50.00"));
    assert_eq!(svc.list_line_items(order.id).await.unwrap().len(), 1);
    assert_eq!(
        svc.list_audit_log(&AuditFilter::default()).await.unwrap(),
        log_before
    );
}

#[tokio::test]
async fn unit_spanning_several_writes_commits_together() {
    let mut svc = service().await;
    let customer = svc
        .create_customer(NewCustomer {
            name: "Vera".into(),
            phone: String::new(),
            email: "vera@example.com".into(),
        })
        .await
        .unwrap();
    let item = menu_item(&mut svc, "Borscht", "5.00").await;

    let uow = svc.begin().await.unwrap();
    uow.update_customer(customer.id, CustomerUpdateBuilder::new().loyalty_level("Gold").build())
        .await
        .unwrap();
    uow.delete_menu_item(item.id).await.unwrap();
    uow.commit().await.unwrap();

    let log = svc.list_audit_log(&AuditFilter::default()).await.unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(svc.get_customer(customer.id).await.unwrap().loyalty_level, "Gold");
}

#[tokio::test]
async fn half_even_policy_applies_to_stored_amounts() {
    let mut svc = CafeService::new_local(":memory:", RoundingPolicy::HalfEven)
        .await
        .unwrap();
    let staff = employee(&mut svc).await;
    let item = menu_item(&mut svc, "Bun", "0.125").await;
    assert_eq!(item.selling_price, dec("0.12"));

    let (order, _) = svc
        .create_order(NewOrder {
            customer_id: None,
            employee_id: staff.id,
            order_type: OrderType::Takeaway,
            payment_method: PaymentMethod::Cash,
            order_date: None,
            lines: vec![CartLine::new(item.id, 3).with_price(dec("0.135"))],
        })
        .await
        .unwrap();
    // 0.135 → 0.14 under half-even, then 3 × 0.14
    assert_eq!(order.total_amount, dec("0.42"));
}

#[tokio::test]
async fn committed_writes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cafe.db");
    let path = path.to_str().unwrap();

    let order_id = {
        let mut svc = CafeService::new_local(path, RoundingPolicy::HalfUp)
            .await
            .unwrap();
        let staff = employee(&mut svc).await;
        let soup = menu_item(&mut svc, "Soup", "50.00").await;
        let (order, _) = svc
            .create_order(NewOrder {
                customer_id: None,
                employee_id: staff.id,
                order_type: OrderType::DineIn,
                payment_method: PaymentMethod::Card,
                order_date: None,
                lines: vec![CartLine::new(soup.id, 3)],
            })
            .await
            .unwrap();
        order.id
    };

    let db = CafeDb::open_local(path).await.unwrap();
    let mut svc = CafeService::from_db(db, RoundingPolicy::HalfUp);
    assert_eq!(svc.get_order(order_id).await.unwrap().total_amount, dec("150.00"));
}

#[tokio::test]
async fn other_connections_see_audit_entries_only_after_commit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cafe.db");
    let path = path.to_str().unwrap();

    let mut writer = CafeService::new_local(path, RoundingPolicy::HalfUp)
        .await
        .unwrap();
    let reader = CafeService::new_local(path, RoundingPolicy::HalfUp)
        .await
        .unwrap();
    let customer = writer
        .create_customer(NewCustomer {
            name: "A".into(),
            phone: String::new(),
            email: "a@example.com".into(),
        })
        .await
        .unwrap();

    let uow = writer.begin().await.unwrap();
    uow.update_customer(customer.id, CustomerUpdateBuilder::new().name("B").build())
        .await
        .unwrap();
    assert!(reader.list_audit_log(&AuditFilter::default()).await.unwrap().is_empty());
    assert_eq!(reader.get_customer(customer.id).await.unwrap().name, "A");
    uow.commit().await.unwrap();

    let log = reader.list_audit_log(&AuditFilter::default()).await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].message, "Customer updated: B");
    assert_eq!(reader.get_customer(customer.id).await.unwrap().name, "B");
}

#[tokio::test]
async fn rolled_back_unit_is_never_seen_by_other_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cafe.db");
    let path = path.to_str().unwrap();

    let mut writer = CafeService::new_local(path, RoundingPolicy::HalfUp)
        .await
        .unwrap();
    let reader = CafeService::new_local(path, RoundingPolicy::HalfUp)
        .await
        .unwrap();
    let item = menu_item(&mut writer, "Pancakes", "6.40").await;

    let uow = writer.begin().await.unwrap();
    uow.delete_menu_item(item.id).await.unwrap();
    assert!(reader.list_audit_log(&AuditFilter::default()).await.unwrap().is_empty());
    uow.rollback().await.unwrap();

    assert!(reader.list_audit_log(&AuditFilter::default()).await.unwrap().is_empty());
    assert_eq!(reader.get_menu_item(item.id).await.unwrap().name, "Pancakes");
}
