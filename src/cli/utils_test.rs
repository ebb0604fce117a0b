use crate::cli::utils::*;

#[test]
fn test_truncate_with_ellipsis_short_string() {
    let result = truncate_with_ellipsis("hello", 10);
    assert_eq!(result, "hello");
}

#[test]
fn test_truncate_with_ellipsis_long_string() {
    let result = truncate_with_ellipsis("Wedding Rina & Dimas di Yogyakarta", 10);
    assert_eq!(result, "Wedding...");
}

#[test]
fn test_truncate_with_ellipsis_unicode() {
    let result = truncate_with_ellipsis("Foto 世界 studio", 7);
    assert_eq!(result, "Foto...");
}

#[test]
fn test_format_optional() {
    assert_eq!(format_optional(None::<String>), "-");
    assert_eq!(format_optional(Some("12/27")), "12/27");
    assert_eq!(format_optional(Some(3)), "3");
}

#[test]
fn test_format_amount_groups_thousands() {
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(999.0), "999");
    assert_eq!(format_amount(1500000.0), "1,500,000");
    assert_eq!(format_amount(12500000.5), "12,500,000.50");
    assert_eq!(format_amount(-2500.0), "-2,500");
}

#[test]
fn test_format_flag() {
    assert_eq!(format_flag(true), "yes");
    assert_eq!(format_flag(false), "no");
}
