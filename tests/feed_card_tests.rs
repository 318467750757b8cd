use robotmsg::message::{
    FEED_CARD_TYPE, FeedCard, FeedCardBuilder, FeedCardLink, Payload, parse_links,
};
use robotmsg::MessageError;
use serde_json::json;

fn link(title: &str) -> FeedCardLink {
    FeedCardLink::new()
        .set_title(title)
        .set_pic(format!("https://img.example.com/{title}.png"))
        .set_url(format!("https://example.com/{title}"))
}

#[test]
fn test_new_card_has_feed_card_type_and_no_body() {
    let builder = FeedCardBuilder::new();
    assert_eq!(builder.msg_type(), "feedCard");
    assert!(builder.body().is_none());

    let card = builder.build();
    assert_eq!(card.msg_type(), FEED_CARD_TYPE);
    assert!(card.body().is_none());
    assert!(card.links().is_empty());
}

#[test]
fn test_add_link_appends_in_call_order() {
    let mut builder = FeedCard::builder();
    builder.add_link(link("a")).add_link(link("b"));

    assert!(builder.body().is_some());
    assert_eq!(builder.links(), &[link("a"), link("b")]);
}

#[test]
fn test_set_links_replaces_instead_of_merging() {
    let mut builder = FeedCard::builder();
    builder
        .set_links(vec![link("a"), link("b")])
        .set_links(vec![link("c")]);

    assert_eq!(builder.links(), &[link("c")]);
}

#[test]
fn test_add_link_after_set_links_keeps_prior_entries() {
    let mut builder = FeedCard::builder();
    builder.set_links(vec![link("a")]).add_link(link("b"));
    assert_eq!(builder.links(), &[link("a"), link("b")]);
}

#[test]
fn test_chaining_returns_the_same_builder() {
    let mut builder = FeedCard::builder();
    let builder_ptr: *const FeedCardBuilder = &builder;

    let returned = builder.set_links(Vec::new());
    assert!(std::ptr::eq(returned, builder_ptr));

    let returned = builder.add_link(link("a"));
    assert!(std::ptr::eq(returned, builder_ptr));
}

#[test]
fn test_link_setters_assign_values_unchanged() {
    let entry = FeedCardLink::new()
        .set_title("  spaced  ")
        .set_pic("not a url")
        .set_url("");

    assert_eq!(entry.title(), "  spaced  ");
    assert_eq!(entry.pic(), "not a url");
    assert_eq!(entry.url(), "");
    assert_eq!(FeedCardLink::new(), FeedCardLink::default());
}

#[test]
fn test_end_to_end_serialization_matches_wire_format() {
    let card = FeedCard::builder()
        .add_link(
            FeedCardLink::new()
                .set_title("t")
                .set_pic("http://p")
                .set_url("http://u"),
        )
        .build();

    assert_eq!(
        card.to_json().unwrap(),
        r#"{"type":"feedCard","feedCard":{"links":[{"title":"t","picURL":"http://p","messageURL":"http://u"}]}}"#
    );
}

#[test]
fn test_card_without_body_sends_null_feed_card() {
    let card = FeedCard::builder().build();
    assert_eq!(card.to_json().unwrap(), r#"{"type":"feedCard","feedCard":null}"#);
    assert_eq!(
        card.to_value().unwrap(),
        json!({ "type": "feedCard", "feedCard": null })
    );
}

#[test]
fn test_empty_link_list_serializes_as_empty_array() {
    let card = FeedCard::builder().set_links(Vec::new()).build();
    assert_eq!(
        card.to_value().unwrap(),
        json!({ "type": "feedCard", "feedCard": { "links": [] } })
    );
}

#[test]
fn test_pretty_output_parses_to_same_value() {
    let card = FeedCard::builder().add_link(link("a")).build();
    let pretty = card.to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));

    let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(reparsed, card.to_value().unwrap());
}

#[test]
fn test_from_json_reads_rendered_card() {
    let card = FeedCard::builder()
        .add_link(link("a"))
        .add_link(link("b"))
        .build();

    let parsed = FeedCard::from_json(&card.to_json().unwrap()).unwrap();
    assert_eq!(parsed, card);
    assert_eq!(parsed.links()[1].title(), "b");
}

#[test]
fn test_from_json_defaults_missing_fields() {
    let parsed =
        FeedCard::from_json(r#"{"type":"feedCard","feedCard":{"links":[{"title":"only"}]}}"#)
            .unwrap();
    assert_eq!(parsed.links(), &[FeedCardLink::new().set_title("only")]);

    let bare = FeedCard::from_json(r#"{"type":"feedCard"}"#).unwrap();
    assert!(bare.body().is_none());
}

#[test]
fn test_from_json_accepts_null_fields() {
    let parsed =
        FeedCard::from_json(r#"{"type":"feedCard","feedCard":{"links":null}}"#).unwrap();
    assert!(parsed.body().is_some());
    assert!(parsed.links().is_empty());

    let parsed = FeedCard::from_json(
        r#"{"type":"feedCard","feedCard":{"links":[{"title":null,"picURL":null,"messageURL":"https://u"}]}}"#,
    )
    .unwrap();
    assert_eq!(parsed.links(), &[FeedCardLink::new().set_url("https://u")]);

    let parsed = FeedCard::from_json(r#"{"type":"feedCard","feedCard":null}"#).unwrap();
    assert!(parsed.body().is_none());
}

#[test]
fn test_fresh_card_survives_reparse() {
    let card = FeedCard::builder().build();
    let parsed = FeedCard::from_json(&card.to_json().unwrap()).unwrap();
    assert_eq!(parsed, card);
}

#[test]
fn test_from_json_rejects_other_message_types() {
    let err = FeedCard::from_json(r#"{"type":"markdown"}"#).unwrap_err();
    match err {
        MessageError::UnexpectedType { expected, found } => {
            assert_eq!(expected, "feedCard");
            assert_eq!(found, "markdown");
        }
        other => panic!("Unexpected error: {other:?}"),
    }

    assert!(matches!(
        FeedCard::from_json("{}"),
        Err(MessageError::UnexpectedType { .. })
    ));
}

#[test]
fn test_from_json_reports_malformed_input() {
    assert!(matches!(
        FeedCard::from_json("{\"type\":"),
        Err(MessageError::ParseError(_))
    ));
}

#[test]
fn test_parse_links_uses_wire_field_names() {
    let links = parse_links(
        r#"[
            {"title": "a", "picURL": "https://p/a", "messageURL": "https://u/a"},
            {"title": "b"}
        ]"#,
    )
    .unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].pic(), "https://p/a");
    assert_eq!(links[0].url(), "https://u/a");
    assert_eq!(links[1].pic(), "");
}

#[test]
fn test_parse_links_rejects_non_array() {
    assert!(matches!(
        parse_links(r#"{"title":"a"}"#),
        Err(MessageError::ParseError(_))
    ));
}
