use serde_json::json;
use shop_domain::{LineItem, LineItemId, Money};
use std::num::NonZeroU32;

fn shirt() -> LineItem {
    LineItem::builder()
        .id("gid://shopify/ProductVariant/1")
        .title("Hørskjorte")
        .variant_title("M / Hvid")
        .handle("horskjorte")
        .price(Money::from_minor(10_000))
        .quantity(NonZeroU32::new(2).expect("non-zero"))
        .image("https://cdn.example.com/shirt.jpg")
        .build()
}

#[test]
fn line_total_is_price_times_quantity() {
    assert_eq!(shirt().line_total(), Money::from_minor(20_000));
}

#[test]
fn product_path_uses_handle() {
    assert_eq!(shirt().product_path(), "/products/horskjorte");
}

#[test]
fn serializes_with_camel_case_fields() {
    let value = serde_json::to_value(shirt()).expect("serialize");
    assert_eq!(value["variantTitle"], json!("M / Hvid"));
    assert_eq!(value["price"], json!(10_000));
    assert_eq!(value["quantity"], json!(2));
}

#[test]
fn zero_quantity_is_rejected_by_deserialization() {
    let raw = json!({
        "id": "1", "title": "T", "variantTitle": "", "price": 100,
        "quantity": 0, "image": null, "handle": "t"
    });
    assert!(serde_json::from_value::<LineItem>(raw).is_err());
}

#[test]
fn ids_compare_by_value() {
    assert_eq!(LineItemId::from("a"), LineItemId::new(String::from("a")));
    assert_eq!(LineItemId::from("a").to_string(), "a");
}
