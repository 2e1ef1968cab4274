use cumulus_api::accounts::{self, Account};
use cumulus_api::dns_analytics::{self, DnsReportQuery};
use cumulus_api::members::{self, MemberSort, MemberStatus};
use cumulus_api::prelude::*;
use cumulus_test_support::{assert_request, mock, ok_envelope, MockReply};
use http::Method;

fn client(
    transport: cumulus_test_support::MockTransport,
) -> Client<cumulus_test_support::MockTransport> {
    Client::with_transport(Credentials::user_key("a@b.com", "key"), transport).unwrap()
}

#[tokio::test]
async fn list_accounts_url_is_deterministic() {
    let (transport, handle) = mock()
        .replies([
            MockReply::ok_json(ok_envelope::<Vec<Account>>(&vec![])),
            MockReply::ok_json(ok_envelope::<Vec<Account>>(&vec![])),
        ])
        .build();
    let client = client(transport);

    accounts::list_accounts(&client, None, PageParams::default())
        .await
        .unwrap();
    accounts::list_accounts(
        &client,
        Some("edge"),
        PageParams::new(PageDirection::Ascending, 2, 50),
    )
    .await
    .unwrap();

    let reqs = handle.recorded();
    assert_request(&reqs[0])
        .method(&Method::GET)
        .path("/client/v4/accounts")
        .query_string("direction=desc&page=1&per_page=20");
    assert_request(&reqs[1])
        .query_string("direction=asc&page=2&per_page=50&name=edge");
    handle.finish();
}

#[tokio::test]
async fn list_members_optional_filters_are_gated() {
    let (transport, handle) = mock()
        .replies([
            MockReply::ok_json(ok_envelope::<Vec<members::Member>>(&vec![])),
            MockReply::ok_json(ok_envelope::<Vec<members::Member>>(&vec![])),
        ])
        .build();
    let client = client(transport);

    members::list_members(&client, "acc1", None, None, PageParams::default())
        .await
        .unwrap();
    members::list_members(
        &client,
        "acc1",
        Some(MemberSort::Email),
        Some(MemberStatus::Accepted),
        PageParams::default(),
    )
    .await
    .unwrap();

    let reqs = handle.recorded();
    assert_request(&reqs[0])
        .path("/client/v4/accounts/acc1/members")
        .query_absent("order")
        .query_absent("status");
    assert_request(&reqs[1])
        .query_has("order", "user.email")
        .query_has("status", "accepted");
    handle.finish();
}

#[tokio::test]
async fn dns_report_parameters_keep_declared_order() {
    let (transport, handle) = mock()
        .reply(MockReply::ok_json(ok_envelope(&serde_json::json!({
            "data": [],
            "data_lag": 0,
            "rows": 0,
        }))))
        .build();
    let client = client(transport);

    let query = DnsReportQuery {
        dimensions: Some("queryType".into()),
        limit: Some(5),
        until: Some("2024-01-01T00:00:00Z".into()),
        ..DnsReportQuery::default()
    };
    dns_analytics::get_dns_report(&client, "zone1", &query)
        .await
        .unwrap();

    let reqs = handle.recorded();
    assert_request(&reqs[0])
        .path("/client/v4/zones/zone1/dns_analytics/report")
        .query_string("dimensions=queryType&limit=5&until=2024-01-01T00:00:00Z");
    handle.finish();
}

#[tokio::test]
async fn delete_account_hits_the_resource_path() {
    let (transport, handle) = mock()
        .reply(MockReply::ok_json(ok_envelope(&Id { id: "acc1".into() })))
        .build();
    let client = client(transport);

    let deleted = accounts::delete_account(&client, "acc1").await.unwrap();
    assert_eq!(deleted.id, "acc1");

    let reqs = handle.recorded();
    assert_request(&reqs[0])
        .method(&Method::DELETE)
        .path("/client/v4/accounts/acc1")
        .body_absent();
    handle.finish();
}
