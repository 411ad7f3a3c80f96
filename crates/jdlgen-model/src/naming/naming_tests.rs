#![allow(non_snake_case)]

use super::*;

#[test]
fn to_snake_case___splits_on_lower_upper_boundary() {
    assert_eq!(to_snake_case("Book"), "book");
    assert_eq!(to_snake_case("BusinessUnit"), "business_unit");
    assert_eq!(to_snake_case("customerOrderLine"), "customer_order_line");
}

#[test]
fn to_snake_case___keeps_acronyms_and_digits_joined() {
    assert_eq!(to_snake_case("APIKey"), "apikey");
    assert_eq!(to_snake_case("Address2Line"), "address2line");
}

#[test]
fn to_snake_case___already_snake_is_unchanged() {
    assert_eq!(to_snake_case("book_author"), "book_author");
}

#[test]
fn to_upper_snake_case___converts_field_names() {
    assert_eq!(to_upper_snake_case("name"), "NAME");
    assert_eq!(to_upper_snake_case("createdAt"), "CREATED_AT");
    assert_eq!(to_upper_snake_case("unitPriceInCents"), "UNIT_PRICE_IN_CENTS");
}
