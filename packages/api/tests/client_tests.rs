#![allow(clippy::disallowed_methods)]

use api::{
    AdminApi, AdminClient, ApiConfig, ApiError, AuthToken, BusId, NewResource, NewSchedule,
    ResourceRef, RouteId, ScheduleId, ScheduleUpdate,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AdminClient {
    AdminClient::new(ApiConfig::new(format!("{}/api/admin", server.uri())))
}

fn token() -> AuthToken {
    AuthToken::new("secret-token")
}

#[tokio::test]
async fn list_requests_are_authenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/bus"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "BusID": 1, "RegNumber": "MH01AB1234", "BusType": "AC", "Capacity": 40 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let buses = client.list_buses(&token()).await.unwrap();

    assert_eq!(buses.len(), 1);
    assert_eq!(buses[0].id, BusId(1));
    assert_eq!(buses[0].label(), "MH01AB1234 (AC)");
    assert_eq!(buses[0].seats_label(), "40 Seats");
}

#[tokio::test]
async fn routes_and_schedules_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/route"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "RouteID": 4, "Source": "Mumbai", "Destination": "Pune" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/schedule"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "ScheduleID": 9, "BusID": 1, "RouteID": 4,
            "RegNumber": "MH01AB1234", "Source": "Mumbai", "Destination": "Pune",
            "DepartureTime": "2024-05-01 10:00:00", "ArrivalTime": "2024-05-01 14:00:00",
            "Fare": 650.0, "AvailableSeats": 40
        }])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let routes = client.list_routes(&token()).await.unwrap();
    let schedules = client.list_schedules(&token()).await.unwrap();

    assert_eq!(routes[0].id, RouteId(4));
    assert_eq!(schedules[0].id, ScheduleId(9));
    assert_eq!(schedules[0].route_id, Some(RouteId(4)));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/schedule"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_schedules(&token()).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Unauthorized");
}

#[tokio::test]
async fn malformed_listing_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/route"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_routes(&token()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn schedule_is_posted_with_backend_timestamps() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/schedule"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(body_json(json!({
            "busId": 1,
            "routeId": 4,
            "departureTime": "2024-05-01 10:00",
            "arrivalTime": "2024-05-01 14:00",
            "fare": 650.0,
            "availableSeats": 40
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ScheduleID": 10 })))
        .expect(1)
        .mount(&server)
        .await;

    let schedule = NewSchedule {
        bus_id: BusId(1),
        route_id: RouteId(4),
        departure_time: "2024-05-01 10:00".into(),
        arrival_time: "2024-05-01 14:00".into(),
        fare: 650.0,
        available_seats: 40,
    };
    let client = client_for(&server);
    client
        .add(&token(), &NewResource::Schedule(schedule))
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_targets_the_resource_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/route/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .delete(&token(), ResourceRef::Route(RouteId(4)))
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_delete_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/bus/1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "error": "Bus is used by a schedule" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.delete_bus(&token(), BusId(1)).await.unwrap_err();
    assert_eq!(err.to_string(), "Bus is used by a schedule");
}

#[tokio::test]
async fn update_returns_confirmation_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/schedule/9"))
        .and(body_json(json!({ "fare": 700.0 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Schedule updated successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let update = ScheduleUpdate {
        fare: Some(700.0),
        ..Default::default()
    };
    let client = client_for(&server);
    let response = client
        .update_schedule(&token(), ScheduleId(9), &update)
        .await
        .unwrap();
    assert_eq!(response.message, "Schedule updated successfully");
}
