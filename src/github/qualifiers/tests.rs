//! Tests for qualifier construction and query rendering.

use rstest::rstest;

use super::*;

#[rstest]
fn renders_fragments_in_order_separated_by_spaces() {
    let query: SearchQualifiers = [IS_ISSUE, IS_OPEN, has_text("foo bar")].into_iter().collect();

    assert_eq!(query.render(), r#"type:issue state:open "foo bar""#);
}

#[rstest]
fn empty_query_renders_empty_string() {
    assert_eq!(SearchQualifiers::new().render(), "");
    assert_eq!(SearchQualifiers::default().to_string(), "");
}

#[rstest]
fn single_fragment_has_no_separator() {
    let query = SearchQualifiers::new().with(IS_PR);
    assert_eq!(query.render(), "type:pr");
}

#[rstest]
fn duplicates_are_kept() {
    let query = SearchQualifiers::from(vec![IS_OPEN, IS_OPEN]);
    assert_eq!(query.len(), 2);
    assert_eq!(query.render(), "state:open state:open");
}

#[rstest]
#[case::label(with_label("bug"), r#"label:"bug""#)]
#[case::negated_label(without_label("bug"), r#"-label:"bug""#)]
#[case::labels(with_labels(&["bug", "p1"]), r#"label:"bug,p1""#)]
#[case::negated_labels(without_labels(&["wontfix", "dup"]), r#"-label:"wontfix,dup""#)]
#[case::repo(in_repo("octo", "hello-world"), r#"repo:"octo/hello-world""#)]
#[case::user(in_repos_owned_by_user("octocat"), r#"user:"octocat""#)]
#[case::org(in_repos_owned_by_org("github"), r#"org:"github""#)]
#[case::author(authored_by("alice"), r#"author:"alice""#)]
#[case::not_author(not_authored_by("bot"), r#"-author:"bot""#)]
#[case::assignee(assigned_to("bob"), r#"assignee:"bob""#)]
#[case::mentions(mentions_user("carol"), r#"mentions:"carol""#)]
#[case::team(mentions_team("org/devs"), r#"team:"org/devs""#)]
#[case::commenter(commented_by("dave"), r#"commenter:"dave""#)]
#[case::involves(involves("erin"), r#"involves:"erin""#)]
#[case::reviewed_by(reviewed_by("frank"), r#"reviewed-by:"frank""#)]
#[case::review_requested(review_requested_from_user("gina"), r#"review-requested:"gina""#)]
#[case::user_review_requested(
    review_requested_directly_from_user("hank"),
    r#"user-review-requested:"hank""#
)]
#[case::team_review_requested(
    review_requested_from_team("org/core"),
    r#"team-review-requested:"org/core""#
)]
#[case::milestone(in_milestone("v1.0"), r#"milestone:"v1.0""#)]
#[case::project(in_project("github/57"), r#"project:"github/57""#)]
#[case::head(with_head_branch("feature"), r#"head:"feature""#)]
#[case::base(with_base_branch("main"), r#"base:"main""#)]
#[case::language(written_in("rust"), r#"language:"rust""#)]
#[case::comments(with_comments(">100"), r#"comments:">100""#)]
#[case::interactions(with_interactions("500..1000"), r#"interactions:"500..1000""#)]
#[case::reactions(with_reactions("<=10"), r#"reactions:"<=10""#)]
#[case::created(created(">=2024-01-01"), r#"created:">=2024-01-01""#)]
#[case::updated(updated("2024-01-01..2024-02-01"), r#"updated:"2024-01-01..2024-02-01""#)]
#[case::closed(closed("*..2024-01-01"), r#"closed:"*..2024-01-01""#)]
#[case::merged(merged("2024-03-04"), r#"merged:"2024-03-04""#)]
#[case::text(has_text("panic at startup"), r#""panic at startup""#)]
fn constructors_quote_values(#[case] qualifier: SearchQualifier, #[case] expected: &str) {
    assert_eq!(qualifier.as_str(), expected);
}

#[rstest]
#[case::issue(IS_ISSUE, "type:issue")]
#[case::pr(IS_PR, "type:pr")]
#[case::in_title(IN_TITLE, "in:title")]
#[case::closed(IS_CLOSED, "state:closed")]
#[case::completed(IS_CLOSED_AS_COMPLETED, "reason:completed")]
#[case::not_planned(IS_CLOSED_AS_NOT_PLANNED, r#"reason:"not planned""#)]
#[case::merged(IS_MERGED, "is:merged")]
#[case::no_linked_pr(HAS_NO_LINKED_PR, "-linked:pr")]
#[case::failing(HAS_STATUS_FAILING, "status:failure")]
#[case::draft(IS_DRAFT, "draft:true")]
#[case::not_draft(IS_NOT_DRAFT, "draft:false")]
#[case::changes_requested(HAS_CHANGES_REQUESTED, "review:changes_requested")]
#[case::not_archived(IS_NOT_ARCHIVED, "archived:false")]
#[case::no_label(HAS_NO_LABELS, "no:label")]
#[case::self_authored(IS_AUTHORED_BY_SELF, "author:@me")]
fn constants_render_literally(#[case] qualifier: SearchQualifier, #[case] expected: &str) {
    assert_eq!(qualifier.to_string(), expected);
}

#[rstest]
fn embedded_quotes_are_not_escaped() {
    assert_eq!(with_label(r#"say "hi""#).as_str(), r#"label:"say "hi"""#);
    assert_eq!(has_text(r#"a"b"#).as_str(), r#""a"b""#);
}

#[rstest]
fn empty_value_still_renders_quotes() {
    assert_eq!(with_label("").as_str(), r#"label:"""#);
}

#[rstest]
fn builder_and_extend_preserve_order() {
    let mut query = SearchQualifiers::new().with(IS_PR).with(IS_OPEN);
    query.extend([in_repo("octo", "repo"), REQUIRES_REVIEW]);
    query.push(IS_NOT_DRAFT);

    let rendered: String = query.clone().into();
    assert_eq!(
        rendered,
        r#"type:pr state:open repo:"octo/repo" review:required draft:false"#
    );
    assert_eq!(
        query.iter().map(SearchQualifier::as_str).collect::<Vec<_>>(),
        vec!["type:pr", "state:open", r#"repo:"octo/repo""#, "review:required", "draft:false"]
    );
}

#[rstest]
fn raw_qualifier_is_used_verbatim() {
    let query = SearchQualifiers::new()
        .with(SearchQualifier::raw("sort:updated-desc"))
        .with(SearchQualifier::keyed("label", "help wanted"));

    assert_eq!(query.render(), r#"sort:updated-desc label:"help wanted""#);
}
