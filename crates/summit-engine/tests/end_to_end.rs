use pretty_assertions::assert_eq;
use summit_engine::{
    summarize_combined, summarize_combined_with, summarize_spec, AggregatedField, AggregatedValue,
    FormatOptions, SummaryError, SummaryMap, SummaryOutput,
};

const ORDERS: &str = r#"
    <Orders>
      <Order>
        <Region>North</Region>
        <Amount>1200.50</Amount>
        <Units>3</Units>
      </Order>
      <Order>
        <Region>South</Region>
        <Amount>800</Amount>
        <Units>2</Units>
      </Order>
      <Order>
        <Region>North</Region>
        <Amount>99.25</Amount>
        <Units>5</Units>
      </Order>
      <Order>
        <Amount>10</Amount>
        <Units>1</Units>
      </Order>
    </Orders>
"#;

fn grouped(output: SummaryOutput) -> SummaryMap {
    match output {
        SummaryOutput::Grouped(map) => map,
        SummaryOutput::Json(json) => panic!("expected grouped output, got JSON: {json}"),
    }
}

fn value<'a>(fields: &'a [AggregatedField], name: &str) -> &'a AggregatedValue {
    &fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no field named {name:?}"))
        .value
}

#[test]
fn grouped_summary_over_a_realistic_document() {
    let out = grouped(
        summarize_spec(
            ORDERS,
            "Order,1,Region:Region,Amount:Revenue:1,Units:Orders:2,Amount:Largest:4",
            &FormatOptions::default(),
        )
        .unwrap(),
    );

    // Groups appear in first-seen document order, absent grouping text last.
    assert_eq!(out.keys().collect::<Vec<_>>(), ["North", "South", "N/A"]);

    let north = out.get("North").unwrap();
    assert_eq!(value(north, "Revenue"), &AggregatedValue::Number(1299.75));
    assert_eq!(value(north, "Orders"), &AggregatedValue::Number(2.0));
    assert_eq!(value(north, "Largest"), &AggregatedValue::Number(1200.50));

    let missing = out.get("N/A").unwrap();
    assert_eq!(value(missing, "Revenue"), &AggregatedValue::Number(10.0));
}

#[test]
fn combined_string_drives_parsing_and_rendering() {
    let out = grouped(
        summarize_combined(
            ORDERS,
            "Order,1,Region:Region,Amount:Revenue:1;cu=USD,sc=1",
        )
        .unwrap(),
    );

    assert_eq!(
        value(out.get("North").unwrap(), "Revenue"),
        &AggregatedValue::Text("$1,299.75".to_string())
    );
    assert_eq!(
        value(out.get("South").unwrap(), "Revenue"),
        &AggregatedValue::Text("$800.00".to_string())
    );
}

#[test]
fn currency_without_symbol_keeps_grouping_and_decimals() {
    let out = grouped(
        summarize_combined(ORDERS, "Order,1,Region:Region,Amount:Revenue:1;cu=USD").unwrap(),
    );
    assert_eq!(
        value(out.get("North").unwrap(), "Revenue"),
        &AggregatedValue::Text("1,299.75".to_string())
    );
}

#[test]
fn long_option_keys_match_their_short_forms() {
    let short = summarize_combined(ORDERS, "Order,1,Region:Region,Amount:Revenue:1;rd=1").unwrap();
    let long = summarize_combined(
        ORDERS,
        "Order,1,Region:Region,Amount:Revenue:1;roundDecimals=1",
    )
    .unwrap();
    assert_eq!(short, long);

    let north = grouped(short);
    assert_eq!(
        value(north.get("North").unwrap(), "Revenue"),
        &AggregatedValue::Number(1299.8)
    );
}

#[test]
fn integer_and_percentage_options_travel_together() {
    let xml = r#"
        <Root>
          <Item><Group>A</Group><Score>87.5</Score><Pop>1234567</Pop></Item>
        </Root>
    "#;
    let out = grouped(
        summarize_combined(
            xml,
            "Item,1,Group:Group,Score:Rate:5,Pop:Population:1;pf=Rate,if=Pop",
        )
        .unwrap(),
    );

    let a = out.get("A").unwrap();
    assert_eq!(value(a, "Rate"), &AggregatedValue::Text("87.5%".to_string()));
    assert_eq!(
        value(a, "Population"),
        &AggregatedValue::Text("1,234,567".to_string())
    );
}

#[test]
fn custom_delimiter_splits_once_at_the_first_occurrence() {
    let out = grouped(
        summarize_combined_with(
            ORDERS,
            "Order,1,Region:Region,Amount:Revenue:1 @ rd=0",
            "@",
        )
        .unwrap(),
    );
    assert_eq!(
        value(out.get("North").unwrap(), "Revenue"),
        &AggregatedValue::Number(1300.0)
    );
}

#[test]
fn json_output_is_a_pretty_ordered_object() {
    let out = summarize_combined(
        ORDERS,
        "Order,1,Region:Region,Amount:Revenue:1;as=1,rd=2",
    )
    .unwrap();

    let json = match out {
        SummaryOutput::Json(json) => json,
        SummaryOutput::Grouped(map) => panic!("expected JSON output, got {map:?}"),
    };

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["North"][0]["name"], "Revenue");
    assert_eq!(parsed["North"][0]["value"], 1299.75);

    // Group order survives serialization.
    let north = json.find("\"North\"").unwrap();
    let south = json.find("\"South\"").unwrap();
    let missing = json.find("\"N/A\"").unwrap();
    assert!(north < south && south < missing);
}

#[test]
fn collapsed_grouping_aggregates_the_whole_document() {
    let out = grouped(
        summarize_combined(
            ORDERS,
            "Order,2,*:All Orders,Amount:Revenue:1,Amount:Average:5;rd=2",
        )
        .unwrap(),
    );

    assert_eq!(out.len(), 1);
    let all = out.get("All Orders").unwrap();
    assert_eq!(value(all, "Revenue"), &AggregatedValue::Number(2109.75));
    assert_eq!(value(all, "Average"), &AggregatedValue::Number(527.44));
}

#[test]
fn empty_document_with_collapsed_grouping_still_reports_the_group() {
    let out = grouped(
        summarize_combined("<Orders/>", "Order,1,*:All Orders,Amount:Revenue:1").unwrap(),
    );
    assert_eq!(out.keys().collect::<Vec<_>>(), ["All Orders"]);
    assert!(out.get("All Orders").unwrap().is_empty());
}

#[test]
fn unobserved_field_is_omitted_when_zero_substitution_is_off() {
    let xml = "<Root><Item><Group>A</Group></Item></Root>";
    let options = FormatOptions {
        treat_missing_as_zero: Some(false),
        ..FormatOptions::default()
    };
    let out = grouped(
        summarize_spec(xml, "Item,1,Group:Group,Price:Cheapest:3", &options).unwrap(),
    );
    assert!(out.get("A").unwrap().is_empty());
}

#[test]
fn literal_infinity_values_leave_min_and_max_unreported() {
    // `f64::from_str` accepts "Infinity", so the sentinel never moves and
    // the measure renders as absent rather than as an infinite number.
    let xml = "<Root><Item><Group>A</Group><Price>Infinity</Price></Item></Root>";
    let out = grouped(
        summarize_spec(
            xml,
            "Item,1,Group:Group,Price:Cheapest:3",
            &FormatOptions::default(),
        )
        .unwrap(),
    );
    assert_eq!(
        value(out.get("A").unwrap(), "Cheapest"),
        &AggregatedValue::Text("N/A".to_string())
    );
}

#[test]
fn spec_errors_surface_through_the_combined_entry_point() {
    let err = summarize_combined(ORDERS, "Order,1,Region:Region").unwrap_err();
    assert!(matches!(err, SummaryError::Spec(_)));

    let err = summarize_combined(ORDERS, "no delimiter here").unwrap_err();
    assert!(matches!(err, SummaryError::Spec(_)));
}
