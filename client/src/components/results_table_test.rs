use super::*;
use serde_json::json;

fn result_set(records: Value, count: i64, more_records: bool) -> ResultSet {
    serde_json::from_value(json!({
        "records": records,
        "count": count,
        "more_records": more_records,
    }))
    .unwrap()
}

// =============================================================
// headers
// =============================================================

#[test]
fn headers_follow_first_record_key_order() {
    let r = result_set(json!([{"Name": "A", "City": "Mumbai", "Email": "a@x.in"}]), 1, false);
    assert_eq!(headers(&r), vec!["Name", "City", "Email"]);
}

#[test]
fn headers_empty_without_records() {
    let r = result_set(json!([]), 0, false);
    assert!(headers(&r).is_empty());
}

#[test]
fn rows_keep_their_own_key_order_under_first_headers() {
    let r = result_set(
        json!([
            {"Name": "A", "City": "Mumbai"},
            {"City": "Pune", "Name": "B", "Phone": "123"}
        ]),
        2,
        false,
    );
    assert_eq!(headers(&r), vec!["Name", "City"]);
    assert_eq!(row_cells(&r.records[0]), vec!["A", "Mumbai"]);
    assert_eq!(row_cells(&r.records[1]), vec!["Pune", "B", "123"]);
}

// =============================================================
// cell_text
// =============================================================

#[test]
fn cell_text_falsy_values_render_dash() {
    assert_eq!(cell_text(&json!("")), EMPTY_CELL);
    assert_eq!(cell_text(&json!(0)), EMPTY_CELL);
    assert_eq!(cell_text(&json!(0.0)), EMPTY_CELL);
    assert_eq!(cell_text(&json!(false)), EMPTY_CELL);
    assert_eq!(cell_text(&Value::Null), EMPTY_CELL);
}

#[test]
fn cell_text_truthy_values_render_as_text() {
    assert_eq!(cell_text(&json!("Mumbai")), "Mumbai");
    assert_eq!(cell_text(&json!(50000)), "50000");
    assert_eq!(cell_text(&json!(1.5)), "1.5");
    assert_eq!(cell_text(&json!(true)), "true");
    assert_eq!(cell_text(&json!(["a", "b"])), r#"["a","b"]"#);
}

#[test]
fn cell_text_whitespace_string_is_not_falsy() {
    assert_eq!(cell_text(&json!(" ")), " ");
}

// =============================================================
// summary_line
// =============================================================

#[test]
fn summary_line_counts_rendered_records() {
    let r = result_set(json!([{"Name": "A", "City": "Mumbai"}]), 1, false);
    assert_eq!(summary_line(&r), "Showing 1 of 1 records");
}

#[test]
fn summary_line_appends_more_records_clause() {
    let r = result_set(json!([{"Name": "A"}, {"Name": "B"}]), 250, true);
    assert_eq!(summary_line(&r), "Showing 2 of 250 records (More records available)");
}

#[test]
fn summary_line_uses_backend_count_verbatim() {
    let r = result_set(json!([{"Name": "A"}, {"Name": "B"}]), 1, false);
    assert_eq!(summary_line(&r), "Showing 2 of 1 records");
}

// =============================================================
// visible_results
// =============================================================

#[test]
fn visible_results_absent_renders_nothing() {
    assert_eq!(visible_results(None), None);
}

#[test]
fn visible_results_empty_records_render_nothing() {
    let r = result_set(json!([]), 5, true);
    assert_eq!(visible_results(Some(&r)), None);
}

#[test]
fn visible_results_with_records_renders_table() {
    let r = result_set(json!([{"Name": "A", "City": "Mumbai"}]), 1, false);
    assert_eq!(visible_results(Some(&r)), Some(&r));
}

#[test]
fn summary_line_shows_string_count_verbatim() {
    let r: ResultSet = serde_json::from_value(json!({"records": [{"Name": "A"}], "count": "40"})).unwrap();
    assert_eq!(summary_line(&r), "Showing 1 of 40 records");
}
