use super::*;

// -----------------------------------------------------------------------
// detect_item_type
// -----------------------------------------------------------------------

#[test]
fn detects_bicycle() {
    assert_eq!(detect_item_type("دوچرخه سایز 20"), ItemType::Bicycle);
}

#[test]
fn bicycle_wins_over_later_keywords() {
    assert_eq!(detect_item_type("اسکوتر و دوچرخه"), ItemType::Bicycle);
}

#[test]
fn detects_scooter_before_motor() {
    assert_eq!(detect_item_type("اسکوتر موتور برقی"), ItemType::Scooter);
}

#[test]
fn detects_ride_on() {
    assert_eq!(detect_item_type("موتور شارژی کودک"), ItemType::RideOn);
}

#[test]
fn detects_board() {
    assert_eq!(detect_item_type("اسکیت برد حرفه ای"), ItemType::Board);
}

#[test]
fn unknown_title_is_other() {
    assert_eq!(detect_item_type("کلاه ایمنی"), ItemType::Other);
    assert_eq!(detect_item_type("Bicycle 26"), ItemType::Other);
}

// -----------------------------------------------------------------------
// parse_size
// -----------------------------------------------------------------------

#[test]
fn labeled_size_integer() {
    assert_eq!(parse_size("دوچرخه سایز 26 کوهستان"), Some(26.0));
}

#[test]
fn labeled_size_decimal_without_space() {
    assert_eq!(parse_size("دوچرخه سایز27.5"), Some(27.5));
}

#[test]
fn labeled_size_accepts_values_outside_whitelist() {
    assert_eq!(parse_size("دوچرخه سایز 14"), Some(14.0));
}

#[test]
fn labeled_size_wins_over_earlier_bare_number() {
    assert_eq!(parse_size("مدل 24 دوچرخه سایز 16"), Some(16.0));
}

#[test]
fn label_without_number_falls_through_to_next_label() {
    assert_eq!(parse_size("سایز بندی متنوع سایز 20"), Some(20.0));
}

#[test]
fn label_without_any_number_uses_bare_fallback() {
    assert_eq!(parse_size("سایز بزرگ دوچرخه 29"), Some(29.0));
}

#[test]
fn bare_whitelisted_size() {
    assert_eq!(parse_size("دوچرخه 20 دخترانه"), Some(20.0));
}

#[test]
fn bare_decimal_wheel_size() {
    assert_eq!(parse_size("دوچرخه 27.5 المپیا"), Some(27.5));
}

#[test]
fn bare_size_adjacent_to_persian_letters() {
    assert_eq!(parse_size("دوچرخه26"), Some(26.0));
}

#[test]
fn bare_size_requires_ascii_boundary() {
    assert_eq!(parse_size("model x26 120"), None);
    assert_eq!(parse_size("2016"), None);
}

#[test]
fn bare_non_whitelisted_number_ignored() {
    assert_eq!(parse_size("اسکوتر 18 کیلو"), None);
}

#[test]
fn first_bare_match_wins() {
    assert_eq!(parse_size("دوچرخه 16 یا 20"), Some(16.0));
}

#[test]
fn zero_size_is_unknown() {
    assert_eq!(parse_size("دوچرخه سایز 0"), None);
}

#[test]
fn no_size_returns_none() {
    assert_eq!(parse_size("اسکیت برد"), None);
}

// -----------------------------------------------------------------------
// detect_bike_category
// -----------------------------------------------------------------------

#[test]
fn folding_keyword_wins() {
    assert_eq!(
        detect_bike_category("دوچرخه تاشو کوهستان", Some(29.0)),
        Category::Folding
    );
}

#[test]
fn mountain_keyword() {
    assert_eq!(
        detect_bike_category("دوچرخه کوهستان", Some(20.0)),
        Category::Mountain
    );
}

#[test]
fn gear_keyword_is_mountain() {
    assert_eq!(detect_bike_category("دوچرخه دنده ای", None), Category::Mountain);
}

#[test]
fn large_wheel_is_mountain() {
    assert_eq!(detect_bike_category("دوچرخه", Some(27.5)), Category::Mountain);
}

#[test]
fn small_wheel_is_kids() {
    assert_eq!(detect_bike_category("دوچرخه", Some(16.0)), Category::Kids);
}

#[test]
fn kids_keyword_without_size() {
    assert_eq!(detect_bike_category("دوچرخه پسرانه", None), Category::Kids);
}

#[test]
fn mid_size_without_keywords_is_adult() {
    assert_eq!(detect_bike_category("دوچرخه شهری", Some(26.0)), Category::Adult);
    assert_eq!(detect_bike_category("دوچرخه شهری", None), Category::Adult);
}
