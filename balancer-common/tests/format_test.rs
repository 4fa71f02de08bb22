extern crate balancer_common;

use balancer_common::api::format::{format_average, format_rating};

#[test]
fn test_format_rating() {
    assert_eq!(format_rating(1), "1");
    assert_eq!(format_rating(999), "999");
    assert_eq!(format_rating(1000), "1,000");
    assert_eq!(format_rating(12345), "12,345");
    assert_eq!(format_rating(30000), "30,000");
    assert_eq!(format_rating(1234567), "1,234,567");
}

#[test]
fn test_format_average() {
    assert_eq!(format_average(0.0), "0");
    assert_eq!(format_average(5.6), "5.6");
    assert_eq!(format_average(5400.0), "5,400");
    assert_eq!(format_average(5400.46), "5,400.5");
    assert_eq!(format_average(29999.96), "30,000");
    assert_eq!(format_average(1234.04), "1,234");
}
